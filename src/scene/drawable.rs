//! Drawables: the unit of work of the scene pass.

use crate::color::{Color, WHITE};
use crate::context::ListId;
use crate::resource::{Texture, VertexArray};
use glamx::{Mat4, Vec3};
use std::sync::Arc;

bitflags::bitflags! {
    /// Material and transform flags of a drawable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DrawFlags: u16 {
        /// Coplanar detail drawn over other geometry.
        const DECAL                = 1 << 0;
        /// Alpha-blended surface.
        const PARTIAL_TRANSPARENCY = 1 << 1;
        /// The diffuse map is a distance field.
        const DISTANCE_FIELD       = 1 << 2;
        /// Binds the additive maps for self-illumination.
        const SELF_ILLUMINATION    = 1 << 3;
        /// Screen-space overlay in the unit square.
        const OVERLAY_2D           = 1 << 4;
        /// Drawn around the camera, ignoring its translation.
        const SKYBOX               = 1 << 5;
        /// Additively blended particles.
        const SMOKE                = 1 << 6;
        /// Receives lighting.
        const LIT                  = 1 << 7;
        /// Face culling enabled.
        const CULL                 = 1 << 8;
        /// Cull front faces instead of back faces.
        const CULL_FRONT           = 1 << 9;
        /// Alpha test even when the material would blend.
        const FORCE_ALPHA_TEST     = 1 << 10;
        /// Skybox follows the vertical motion of the camera.
        const VERTICAL_TRACK       = 1 << 11;
        /// Transform is used as-is, without the camera transform.
        const CAMERA_INDEPENDENT   = 1 << 12;
    }
}

impl Default for DrawFlags {
    fn default() -> Self {
        DrawFlags::LIT
    }
}

/// The geometry of a drawable.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Compiled draw lists, replayed in order.
    DrawLists(Vec<ListId>),
    /// Indexed triangles from client-side arrays.
    Vertices(Arc<VertexArray>),
    /// A poly-line drawn as a connected line strip.
    Line(Vec<Vec3>),
}

/// One renderable unit: geometry, material flags and transform.
///
/// # Examples
/// ```
/// # use trackside::scene::{Drawable, DrawFlags, Geometry};
/// # use trackside::context::ListId;
/// # use glamx::{Mat4, Vec3};
/// let wheel = Drawable::new(Geometry::DrawLists(vec![ListId(3)]))
///     .with_flags(DrawFlags::LIT | DrawFlags::CULL)
///     .with_transform(Mat4::from_translation(Vec3::new(1.0, 0.0, 0.3)))
///     .with_bounds(Vec3::ZERO, 0.4);
/// assert!(wheel.flags().contains(DrawFlags::CULL));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    flags: DrawFlags,
    color: Color,
    line_width: f32,
    diffuse_map: Option<Arc<Texture>>,
    misc_map: Option<Arc<Texture>>,
    additive_map1: Option<Arc<Texture>>,
    additive_map2: Option<Arc<Texture>>,
    transform: Mat4,
    center: Vec3,
    radius: f32,
    geometry: Geometry,
}

impl Drawable {
    /// Creates a lit, white, untransformed drawable without bounds.
    pub fn new(geometry: Geometry) -> Self {
        Drawable {
            flags: DrawFlags::default(),
            color: WHITE,
            line_width: 1.0,
            diffuse_map: None,
            misc_map: None,
            additive_map1: None,
            additive_map2: None,
            transform: Mat4::IDENTITY,
            center: Vec3::ZERO,
            radius: 0.0,
            geometry,
        }
    }

    /// Replaces all the flags.
    pub fn with_flags(mut self, flags: DrawFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the flat color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the line width used by poly-lines.
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Sets the rotation + translation of the drawable.
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the bounding sphere, in object space.
    ///
    /// A zero radius disables frustum culling for this drawable.
    pub fn with_bounds(mut self, center: Vec3, radius: f32) -> Self {
        self.center = center;
        self.radius = radius;
        self
    }

    /// Sets the diffuse map.
    pub fn with_diffuse_map(mut self, texture: Arc<Texture>) -> Self {
        self.diffuse_map = Some(texture);
        self
    }

    /// Sets the auxiliary (misc) map.
    pub fn with_misc_map(mut self, texture: Arc<Texture>) -> Self {
        self.misc_map = Some(texture);
        self
    }

    /// Sets the two additive maps used for self-illumination.
    pub fn with_additive_maps(mut self, first: Arc<Texture>, second: Arc<Texture>) -> Self {
        self.additive_map1 = Some(first);
        self.additive_map2 = Some(second);
        self
    }

    /// Replaces the transform in place.
    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    /// Replaces the color in place.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// The material and transform flags.
    #[inline]
    pub fn flags(&self) -> DrawFlags {
        self.flags
    }

    /// The flat color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Width of poly-lines, in pixels.
    #[inline]
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Rotation + translation of the drawable.
    #[inline]
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Center of the bounding sphere in object space.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius of the bounding sphere. Zero disables culling.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The geometry payload.
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The diffuse map, if any.
    #[inline]
    pub fn diffuse_map(&self) -> Option<&Texture> {
        self.diffuse_map.as_deref()
    }

    /// The auxiliary map, if any.
    #[inline]
    pub fn misc_map(&self) -> Option<&Texture> {
        self.misc_map.as_deref()
    }

    /// The first additive map, if any.
    #[inline]
    pub fn additive_map1(&self) -> Option<&Texture> {
        self.additive_map1.as_deref()
    }

    /// The second additive map, if any.
    #[inline]
    pub fn additive_map2(&self) -> Option<&Texture> {
        self.additive_map2.as_deref()
    }

    /// Center of the bounding sphere after applying the transform.
    pub fn world_center(&self) -> Vec3 {
        self.transform.transform_point3(self.center)
    }

    /// Whether the drawable is rendered relative to the camera.
    #[inline]
    pub fn camera_relative(&self) -> bool {
        !self.flags.contains(DrawFlags::CAMERA_INDEPENDENT)
    }

    /// Whether the drawable should be drawn with blending rather than alpha testing.
    pub fn wants_blending(&self) -> bool {
        self.flags.intersects(
            DrawFlags::DECAL
                | DrawFlags::OVERLAY_2D
                | DrawFlags::PARTIAL_TRANSPARENCY
                | DrawFlags::DISTANCE_FIELD,
        )
    }
}
