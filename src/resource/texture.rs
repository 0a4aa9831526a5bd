//! Handles to textures owned by the asset layer.

use crate::context::{Context, TextureId, TextureTarget};

/// A texture created and owned elsewhere.
///
/// The render passes only need to know whether the texture finished loading
/// and how to bind it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Texture {
    id: TextureId,
    target: TextureTarget,
    loaded: bool,
}

impl Texture {
    /// Wraps a loaded 2D texture.
    pub fn new_2d(id: TextureId) -> Self {
        Texture {
            id,
            target: TextureTarget::Texture2d,
            loaded: true,
        }
    }

    /// Wraps a loaded cube map.
    pub fn new_cube_map(id: TextureId) -> Self {
        Texture {
            id,
            target: TextureTarget::CubeMap,
            loaded: true,
        }
    }

    /// Marks whether the texture data is available on the GPU.
    pub fn with_loaded(mut self, loaded: bool) -> Self {
        self.loaded = loaded;
        self
    }

    /// The driver name of this texture.
    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    /// The binding target of this texture.
    #[inline]
    pub fn target(&self) -> TextureTarget {
        self.target
    }

    /// Whether the texture data is available on the GPU.
    #[inline]
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// Binds this texture to its target on the active texture unit.
    pub fn activate<C: Context + ?Sized>(&self, ctxt: &mut C) {
        ctxt.bind_texture(self.target, Some(self.id));
    }
}
