use glamx::{Mat4, Vec3, Vec4};

/// Identifies one of the six planes of a [`Frustum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    Right = 0,
    Left = 1,
    Bottom = 2,
    Top = 3,
    Far = 4,
    Near = 5,
}

/// The visible volume of a camera as six inward-facing half-spaces.
///
/// Each plane is stored as `(normal, offset)` with a unit normal, so that
/// `normal.dot(p) + offset` is the signed distance of `p` to the plane,
/// positive inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [Vec4; 6],
}

impl Default for Frustum {
    fn default() -> Self {
        Frustum::from_matrices(&Mat4::IDENTITY, &Mat4::IDENTITY)
    }
}

impl Frustum {
    /// Extracts the planes of the clip volume of `projection * view`.
    pub fn from_matrices(projection: &Mat4, view: &Mat4) -> Self {
        Frustum::from_clip(&(*projection * *view))
    }

    /// Extracts the planes of the clip volume of a combined clip matrix.
    pub fn from_clip(clip: &Mat4) -> Self {
        let x = clip.row(0);
        let y = clip.row(1);
        let z = clip.row(2);
        let w = clip.row(3);

        Frustum {
            planes: [w - x, w + x, w + y, w - y, w - z, w + z].map(normalize_plane),
        }
    }

    /// The planes, indexed by [`FrustumPlane`].
    #[inline]
    pub fn planes(&self) -> &[Vec4; 6] {
        &self.planes
    }

    /// One plane, `xyz` being its unit normal and `w` its offset.
    #[inline]
    pub fn plane(&self, plane: FrustumPlane) -> Vec4 {
        self.planes[plane as usize]
    }

    /// Signed distance from `plane` to `point`, positive inside the frustum.
    #[inline]
    pub fn distance(&self, plane: FrustumPlane, point: Vec3) -> f32 {
        plane_distance(self.plane(plane), point)
    }

    /// Whether the sphere lies entirely outside at least one plane.
    ///
    /// A sphere touching a plane from outside (distance exactly `-radius`)
    /// counts as outside.
    pub fn excludes_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .any(|plane| plane_distance(*plane, center) <= -radius)
    }
}

#[inline]
fn plane_distance(plane: Vec4, point: Vec3) -> f32 {
    plane.truncate().dot(point) + plane.w
}

fn normalize_plane(plane: Vec4) -> Vec4 {
    let len = plane.truncate().length();
    if len > 0.0 {
        plane / len
    } else {
        plane
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraInfo;
    use glamx::Quat;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_plane_normals_have_unit_length() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let axis = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(0.1..1.0),
            )
            .normalize();
            let camera = CameraInfo {
                position: Vec3::new(
                    rng.random_range(-500.0..500.0),
                    rng.random_range(-500.0..500.0),
                    rng.random_range(-50.0..50.0),
                ),
                rotation: Quat::from_axis_angle(axis, rng.random_range(-3.0..3.0)),
                fov: rng.random_range(20.0..110.0),
                far: rng.random_range(10.0..5000.0),
                width: rng.random_range(100.0..4000.0),
                height: rng.random_range(100.0..4000.0),
            };

            let frustum = Frustum::from_matrices(&camera.projection(None), &camera.view());
            for plane in frustum.planes() {
                assert!((plane.truncate().length() - 1.0).abs() < 1.0e-4);
            }
        }
    }

    #[test]
    fn test_identity_clip_is_unit_cube() {
        let frustum = Frustum::default();
        assert_eq!(frustum.plane(FrustumPlane::Right), Vec4::new(-1.0, 0.0, 0.0, 1.0));
        assert_eq!(frustum.plane(FrustumPlane::Left), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(frustum.plane(FrustumPlane::Bottom), Vec4::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(frustum.plane(FrustumPlane::Top), Vec4::new(0.0, -1.0, 0.0, 1.0));
        assert_eq!(frustum.plane(FrustumPlane::Far), Vec4::new(0.0, 0.0, -1.0, 1.0));
        assert_eq!(frustum.plane(FrustumPlane::Near), Vec4::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_perspective_planes_bound_the_view_volume() {
        let camera = CameraInfo {
            fov: 90.0,
            far: 100.0,
            width: 100.0,
            height: 100.0,
            ..Default::default()
        };
        let frustum = Frustum::from_matrices(&camera.projection(None), &camera.view());

        // The camera looks down -z.
        let ahead = Vec3::new(0.0, 0.0, -10.0);
        for plane in frustum.planes() {
            assert!(plane_distance(*plane, ahead) > 0.0);
        }

        assert!(frustum.distance(FrustumPlane::Near, Vec3::new(0.0, 0.0, -0.05)) < 0.0);
        assert!((frustum.distance(FrustumPlane::Far, Vec3::new(0.0, 0.0, -90.0)) - 10.0).abs() < 1.0e-2);
        assert!(frustum.distance(FrustumPlane::Right, Vec3::new(20.0, 0.0, -10.0)) < 0.0);
        assert!(frustum.distance(FrustumPlane::Left, Vec3::new(-20.0, 0.0, -10.0)) < 0.0);
        assert!(frustum.distance(FrustumPlane::Top, Vec3::new(0.0, 20.0, -10.0)) < 0.0);
        assert!(frustum.distance(FrustumPlane::Bottom, Vec3::new(0.0, -20.0, -10.0)) < 0.0);
    }

    #[test]
    fn test_sphere_exactly_touching_a_plane_is_excluded() {
        let frustum = Frustum::default();
        // Right plane is x = 1; a sphere of radius 0.5 centered at x = 1.5 touches it.
        assert!(frustum.excludes_sphere(Vec3::new(1.5, 0.0, 0.0), 0.5));
        assert!(!frustum.excludes_sphere(Vec3::new(1.4, 0.0, 0.0), 0.5));
    }
}
