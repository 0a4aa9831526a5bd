//! The two draw lists submitted to a scene pass.

use crate::scene::Drawable;

/// Borrowed draw lists for one frame.
///
/// The dynamic list is rebuilt every frame and frustum-culled by the pass.
/// The static list is expected to come out of a spatial index that already
/// culled it, so it is drawn as-is.
#[derive(Debug, Clone, Copy)]
pub struct DrawLists<'a> {
    /// Drawables rebuilt every frame.
    pub dynamic: &'a [&'a Drawable],
    /// Pre-culled drawables.
    pub static_list: &'a [&'a Drawable],
}

impl<'a> DrawLists<'a> {
    /// Bundles a dynamic and a pre-culled static list.
    pub fn new(dynamic: &'a [&'a Drawable], static_list: &'a [&'a Drawable]) -> Self {
        DrawLists {
            dynamic,
            static_list,
        }
    }

    /// Only a dynamic list.
    pub fn dynamic(dynamic: &'a [&'a Drawable]) -> Self {
        DrawLists {
            dynamic,
            static_list: &[],
        }
    }

    /// Total number of drawables in both lists.
    pub fn len(&self) -> usize {
        self.dynamic.len() + self.static_list.len()
    }

    /// Whether both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
