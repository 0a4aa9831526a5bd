//! The directional light shared by the lit shader slots.

use glamx::{Quat, Vec3};

/// A directional light, like the sun.
///
/// The direction is given in world space and rotated into view space by the
/// scene pass before being uploaded as the `lightposition` parameter.
///
/// # Examples
/// ```
/// # use trackside::light::Light;
/// # use glamx::Vec3;
/// let sun = Light::directional(Vec3::new(-1.0, -1.0, 0.5));
/// assert!((sun.direction.length() - 1.0).abs() < 1.0e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Light {
    /// Unit direction of the light, in world space.
    pub direction: Vec3,
}

impl Default for Light {
    fn default() -> Self {
        Light {
            direction: Quat::from_axis_angle(Vec3::X, std::f32::consts::FRAC_PI_2) * Vec3::X,
        }
    }
}

impl Light {
    /// Creates a directional light. `dir` is normalized.
    pub fn directional(dir: Vec3) -> Self {
        Light {
            direction: dir.normalize(),
        }
    }

    /// The light direction expressed in the view space of a camera with the
    /// given world-to-view rotation.
    pub fn view_direction(&self, camera_rotation: Quat) -> Vec3 {
        camera_rotation * self.direction
    }
}
