//! Model-matrix management across consecutive drawables.
//!
//! Camera-relative drawables leave their matrix pushed after they are drawn.
//! The next drawable with a bit-identical transform reuses it as-is, which is
//! common for the sub-meshes of one rigid body. Every other regime pushes its
//! own matrices and pops them when its [`TransformScope`] is dropped.

use crate::camera::CameraInfo;
use crate::context::{Context, MatrixMode};
use crate::scene::{DrawFlags, Drawable};
use glamx::{Mat4, Vec3};
use std::ops::{Deref, DerefMut};

/// Texture unit whose texture matrix is reset for camera-independent drawables.
pub const PROJECTIVE_TEXTURE_UNIT: u32 = 1;

/// How a drawable's transform combines with the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformRegime {
    /// Screen-space overlay in the unit square.
    Overlay2d,
    /// The drawable transform is the whole model-view.
    CameraIndependent,
    /// Camera rotation only, then the drawable transform.
    Skybox,
    /// Camera view, then the drawable transform.
    CameraRelative,
}

impl TransformRegime {
    /// The regime of `drawable`. Flags are checked in priority order.
    pub fn of(drawable: &Drawable) -> Self {
        let flags = drawable.flags();
        if flags.contains(DrawFlags::OVERLAY_2D) {
            TransformRegime::Overlay2d
        } else if flags.contains(DrawFlags::CAMERA_INDEPENDENT) {
            TransformRegime::CameraIndependent
        } else if flags.contains(DrawFlags::SKYBOX) {
            TransformRegime::Skybox
        } else {
            TransformRegime::CameraRelative
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Owed {
    Nothing,
    ModelView,
    ProjectionAndModelView,
    TextureAndModelView,
}

/// Matrices pushed for one draw, popped when dropped.
///
/// The scope dereferences to the context so the draw calls go through it.
pub struct TransformScope<'a, C: Context + ?Sized> {
    ctxt: &'a mut C,
    owed: Owed,
}

impl<'a, C: Context + ?Sized> TransformScope<'a, C> {
    /// Pushes `projection` on the projection stack and `model` (or the
    /// identity) on the model-view stack.
    pub fn overlay(ctxt: &'a mut C, projection: &Mat4, model: Option<&Mat4>) -> Self {
        ctxt.matrix_mode(MatrixMode::Projection);
        ctxt.push_matrix();
        ctxt.load_matrix(projection);
        ctxt.matrix_mode(MatrixMode::ModelView);
        ctxt.push_matrix();
        ctxt.load_identity();
        if let Some(model) = model {
            ctxt.mult_matrix(model);
        }

        TransformScope {
            ctxt,
            owed: Owed::ProjectionAndModelView,
        }
    }

    fn new(ctxt: &'a mut C, owed: Owed) -> Self {
        TransformScope { ctxt, owed }
    }

    /// Whether dropping this scope pops anything.
    pub fn owes_pop(&self) -> bool {
        self.owed != Owed::Nothing
    }
}

impl<C: Context + ?Sized> Deref for TransformScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.ctxt
    }
}

impl<C: Context + ?Sized> DerefMut for TransformScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.ctxt
    }
}

impl<C: Context + ?Sized> Drop for TransformScope<'_, C> {
    fn drop(&mut self) {
        match self.owed {
            Owed::Nothing => {}
            Owed::ModelView => self.ctxt.pop_matrix(),
            Owed::ProjectionAndModelView => {
                self.ctxt.matrix_mode(MatrixMode::Projection);
                self.ctxt.pop_matrix();
                self.ctxt.matrix_mode(MatrixMode::ModelView);
                self.ctxt.pop_matrix();
            }
            Owed::TextureAndModelView => {
                self.ctxt.active_texture(PROJECTIVE_TEXTURE_UNIT);
                self.ctxt.matrix_mode(MatrixMode::Texture);
                self.ctxt.pop_matrix();
                self.ctxt.active_texture(0);
                self.ctxt.matrix_mode(MatrixMode::ModelView);
                self.ctxt.pop_matrix();
            }
        }
    }
}

/// Tracks the camera-relative model matrix left on the model-view stack.
///
/// All methods expect the model-view stack to be selected.
#[derive(Debug, Clone, Default)]
pub struct TransformCoordinator {
    last_transform: Option<Mat4>,
}

impl TransformCoordinator {
    /// Creates a coordinator with nothing cached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the cached transform without touching the driver.
    ///
    /// Only valid when nothing is left pushed, i.e. at the start of a pass.
    pub fn reset(&mut self) {
        self.last_transform = None;
    }

    /// The camera-relative transform currently pushed, if any.
    pub fn cached(&self) -> Option<&Mat4> {
        self.last_transform.as_ref()
    }

    /// Pops the cached camera-relative matrix, if any, and invalidates it.
    pub fn release<C: Context + ?Sized>(&mut self, ctxt: &mut C) {
        if self.last_transform.take().is_some() {
            ctxt.pop_matrix();
        }
    }

    /// Sets up the matrices for drawing `drawable`.
    pub fn begin<'a, C: Context + ?Sized>(
        &mut self,
        ctxt: &'a mut C,
        drawable: &Drawable,
        camera: &CameraInfo,
    ) -> TransformScope<'a, C> {
        match TransformRegime::of(drawable) {
            TransformRegime::Overlay2d => {
                self.release(ctxt);
                let projection = Mat4::orthographic_rh_gl(0.0, 1.0, 1.0, 0.0, -1.0, 1.0);
                TransformScope::overlay(ctxt, &projection, Some(drawable.transform()))
            }
            TransformRegime::CameraIndependent => {
                self.release(ctxt);

                ctxt.active_texture(PROJECTIVE_TEXTURE_UNIT);
                ctxt.matrix_mode(MatrixMode::Texture);
                ctxt.push_matrix();
                ctxt.load_identity();
                ctxt.active_texture(0);
                ctxt.matrix_mode(MatrixMode::ModelView);

                ctxt.push_matrix();
                ctxt.load_matrix(drawable.transform());

                TransformScope::new(ctxt, Owed::TextureAndModelView)
            }
            TransformRegime::Skybox => {
                self.release(ctxt);

                ctxt.push_matrix();
                ctxt.load_matrix(&camera.rotation_matrix());
                if drawable.flags().contains(DrawFlags::VERTICAL_TRACK) {
                    let center = drawable.world_center();
                    ctxt.mult_matrix(&Mat4::from_translation(Vec3::new(0.0, 0.0, -center.z)));
                }
                ctxt.mult_matrix(drawable.transform());

                TransformScope::new(ctxt, Owed::ModelView)
            }
            TransformRegime::CameraRelative => {
                let reuse = self
                    .last_transform
                    .as_ref()
                    .is_some_and(|last| same_bits(last, drawable.transform()));

                if !reuse {
                    self.release(ctxt);
                    ctxt.push_matrix();
                    ctxt.mult_matrix(drawable.transform());
                    self.last_transform = Some(*drawable.transform());
                }

                TransformScope::new(ctxt, Owed::Nothing)
            }
        }
    }
}

/// Exact equality of every matrix element, including the sign of zeros.
fn same_bits(a: &Mat4, b: &Mat4) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| x.to_bits() == y.to_bits())
}
