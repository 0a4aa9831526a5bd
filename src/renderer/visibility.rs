//! Bounding-sphere visibility tests.

use crate::camera::Frustum;
use crate::scene::{DrawFlags, Drawable};
use glamx::Vec3;

/// Whether `drawable` takes part in frustum culling.
///
/// Skyboxes, camera-independent drawables and drawables without a bounding
/// radius are always drawn.
#[inline]
pub fn is_cullable(drawable: &Drawable) -> bool {
    drawable.radius() != 0.0
        && !drawable.flags().contains(DrawFlags::SKYBOX)
        && drawable.camera_relative()
}

/// Returns `true` if `drawable` can be skipped for a camera at
/// `camera_position` seeing up to `far_distance`.
pub fn is_culled(
    drawable: &Drawable,
    frustum: &Frustum,
    camera_position: Vec3,
    far_distance: f32,
) -> bool {
    if !is_cullable(drawable) {
        return false;
    }

    let radius = drawable.radius();
    let center = drawable.world_center();
    let dist_sq = (center - camera_position).length_squared();
    let reach = far_distance + radius;

    if dist_sq > reach * reach {
        true
    } else if dist_sq < radius * radius {
        false
    } else {
        frustum.excludes_sphere(center, radius)
    }
}
