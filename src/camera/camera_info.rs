use glamx::{Mat4, Quat, Vec3};

/// Near clipping distance of every perspective projection.
pub const NEAR_DISTANCE: f32 = 0.1;

/// Axis-aligned bounds of an orthographic projection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrthoBounds {
    /// Left, bottom and near bounds.
    pub min: Vec3,
    /// Right, top and far bounds.
    pub max: Vec3,
}

impl OrthoBounds {
    /// Creates bounds from their minimum and maximum corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        OrthoBounds { min, max }
    }

    /// The orthographic projection matrix covering these bounds.
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(
            self.min.x, self.max.x, self.min.y, self.max.y, self.min.z, self.max.z,
        )
    }
}

/// Camera parameters set once per frame.
///
/// `rotation` is the rotation taking world directions into view space; the
/// view transform is that rotation applied after moving the world by
/// `-position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraInfo {
    /// World-space position of the eye.
    pub position: Vec3,
    /// World-to-view rotation.
    pub rotation: Quat,
    /// Vertical field of view, in degrees.
    pub fov: f32,
    /// Far clipping and culling distance.
    pub far: f32,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
}

impl Default for CameraInfo {
    fn default() -> Self {
        CameraInfo {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov: 45.0,
            far: 1000.0,
            width: 800.0,
            height: 600.0,
        }
    }
}

impl CameraInfo {
    /// Viewport aspect ratio.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Projection matrix: `ortho` if given, perspective otherwise.
    pub fn projection(&self, ortho: Option<&OrthoBounds>) -> Mat4 {
        match ortho {
            Some(bounds) => bounds.projection(),
            None => Mat4::perspective_rh_gl(
                self.fov.to_radians(),
                self.aspect(),
                NEAR_DISTANCE,
                self.far,
            ),
        }
    }

    /// The camera rotation alone, as a matrix.
    #[inline]
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation)
    }

    /// World-to-view transform.
    pub fn view(&self) -> Mat4 {
        self.rotation_matrix() * Mat4::from_translation(-self.position)
    }

    /// Rotation used to look up environment cube maps from view space.
    ///
    /// The cube maps are authored z-up, so the view rotation is undone and
    /// combined with a fixed quarter-turn basis change.
    pub fn cube_map_rotation(&self) -> Quat {
        let camlook = Quat::from_axis_angle(Vec3::Z, -std::f32::consts::FRAC_PI_2)
            * Quat::from_axis_angle(Vec3::X, std::f32::consts::FRAC_PI_2);
        camlook.conjugate() * self.rotation.conjugate()
    }
}
