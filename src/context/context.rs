//! Graphics driver abstraction.
//!
//! The render passes never talk to a global driver. Every call goes through a
//! [`Context`] passed explicitly by the caller, which must live on the thread
//! owning the graphics context.

use crate::color::Color;
use crate::context::{DriverError, TextureEnv};
use glamx::{Mat4, Vec3};

/// Name of a texture object known to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Name of a linked shader program known to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(pub u32);

/// Name of a compiled draw list (display list) known to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(pub u32);

/// The matrix stack targeted by matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixMode {
    /// The projection stack.
    Projection,
    /// The model-view stack.
    ModelView,
    /// The texture stack of the active texture unit.
    Texture,
}

/// Driver capabilities toggled through enable/disable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Color blending.
    Blend,
    /// Depth testing.
    DepthTest,
    /// Fixed-function alpha testing.
    AlphaTest,
    /// Face culling.
    CullFace,
    /// Polygon offset for filled polygons.
    PolygonOffsetFill,
    /// Multisample alpha-to-coverage.
    SampleAlphaToCoverage,
    /// 2D texturing on the active unit.
    Texture2d,
    /// Antialiased lines.
    LineSmooth,
}

/// Blend factors used by the scene pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// `0`
    Zero,
    /// `1`
    One,
    /// Source alpha.
    SrcAlpha,
    /// One minus source alpha.
    OneMinusSrcAlpha,
}

/// Which faces are discarded when face culling is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Front faces.
    Front,
    /// Back faces.
    Back,
}

/// Comparison functions for depth and alpha tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareFunc {
    /// Passes if the incoming value is less than the stored one.
    Less,
    /// Passes if the incoming value is less than or equal to the stored one.
    LessEqual,
    /// Passes if the values are equal.
    Equal,
    /// Passes if the incoming value is greater than the reference.
    Greater,
    /// Always passes.
    Always,
}

/// Texture binding targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureTarget {
    /// A regular 2D texture.
    Texture2d,
    /// A cube map.
    CubeMap,
}

/// Texture parameters the passes need to set on the bound 2D texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureParameter {
    /// Disable depth comparison so depth textures sample as plain values.
    CompareModeNone,
    /// Expose depth textures as luminance when sampled.
    DepthTextureModeLuminance,
}

/// Client-side vertex arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientArray {
    /// Positions.
    Vertex,
    /// Normals.
    Normal,
    /// Texture coordinates.
    TexCoord,
}

bitflags::bitflags! {
    /// Buffers cleared by [`Context::clear`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearMask: u8 {
        /// The color buffer.
        const COLOR = 0b01;
        /// The depth buffer.
        const DEPTH = 0b10;
    }
}

/// A vertex of the textured quad drawn by [`Context::draw_quad`].
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// Texture coordinates.
    pub tex_coord: [f32; 2],
    /// Position.
    pub position: [f32; 3],
}

/// The raw graphics driver.
///
/// This mirrors an immediate-mode driver with matrix stacks and texture
/// units. Implementations forward to the real driver; the passes of this
/// crate decide *which* calls to issue and in which order.
///
/// Calls that merely change state are not deduplicated here, see
/// [`GlStateCache`](crate::context::GlStateCache) for that.
pub trait Context {
    // ==================
    // Matrix stacks
    // ==================

    /// Selects the matrix stack subsequent matrix operations apply to.
    fn matrix_mode(&mut self, mode: MatrixMode);
    /// Duplicates the top of the current matrix stack.
    fn push_matrix(&mut self);
    /// Discards the top of the current matrix stack.
    fn pop_matrix(&mut self);
    /// Replaces the top of the current matrix stack with the identity.
    fn load_identity(&mut self);
    /// Replaces the top of the current matrix stack with `matrix`.
    fn load_matrix(&mut self, matrix: &Mat4);
    /// Right-multiplies the top of the current matrix stack by `matrix`.
    fn mult_matrix(&mut self, matrix: &Mat4);

    // ==================
    // Fixed state
    // ==================

    /// Enables a capability.
    fn enable(&mut self, capability: Capability);
    /// Disables a capability.
    fn disable(&mut self, capability: Capability);
    /// Sets the current flat color.
    fn color(&mut self, color: Color);
    /// Sets the blend equation factors.
    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor);
    /// Selects the culled face.
    fn cull_face(&mut self, face: Face);
    /// Sets the alpha test function and reference value.
    fn alpha_func(&mut self, func: CompareFunc, reference: f32);
    /// Enables or disables depth writes.
    fn depth_mask(&mut self, write: bool);
    /// Enables or disables color writes on all channels.
    fn color_mask(&mut self, write: bool);
    /// Sets the depth comparison function.
    fn depth_func(&mut self, func: CompareFunc);
    /// Clears the selected buffers.
    fn clear(&mut self, mask: ClearMask);
    /// Selects the line rasterization quality hint for smooth lines.
    fn line_smooth_hint_nicest(&mut self);
    /// Sets the rasterized line width.
    fn line_width(&mut self, width: f32);

    // ==================
    // Textures
    // ==================

    /// Number of texture image units exposed by the driver.
    fn max_texture_units(&self) -> u32;
    /// Selects the active texture unit.
    fn active_texture(&mut self, unit: u32);
    /// Binds `texture` (or nothing) to `target` on the active unit.
    fn bind_texture(&mut self, target: TextureTarget, texture: Option<TextureId>);
    /// Sets a parameter of the 2D texture bound to the active unit.
    fn texture_parameter(&mut self, parameter: TextureParameter);
    /// Configures the fixed-function texture environment of the active unit.
    fn texture_env(&mut self, env: &TextureEnv);

    // ==================
    // Programs
    // ==================

    /// Makes `program` the active program.
    fn use_program(&mut self, program: ProgramId);
    /// Uploads a scalar uniform to `program`.
    fn uniform_1f(&mut self, program: ProgramId, name: &str, value: f32);
    /// Uploads a 3-component uniform to `program`.
    fn uniform_3f(&mut self, program: ProgramId, name: &str, value: Vec3);

    // ==================
    // Geometry
    // ==================

    /// Enables a client-side array.
    fn enable_client_state(&mut self, array: ClientArray);
    /// Disables a client-side array.
    fn disable_client_state(&mut self, array: ClientArray);
    /// Points the vertex array at tightly packed 3-component positions.
    ///
    /// The slice outlives the next draw call issued by the passes.
    fn vertex_pointer(&mut self, vertices: &[f32]);
    /// Points the normal array at tightly packed 3-component normals.
    fn normal_pointer(&mut self, normals: &[f32]);
    /// Points the texture coordinate array at tightly packed 2-component coordinates.
    fn tex_coord_pointer(&mut self, tex_coords: &[f32]);
    /// Draws indexed triangles from the enabled client arrays.
    fn draw_triangles(&mut self, indices: &[u32]);
    /// Replays a compiled draw list.
    fn call_list(&mut self, list: ListId);
    /// Draws a connected line strip through `points`.
    fn draw_line_strip(&mut self, points: &[Vec3]);
    /// Draws a single textured quad.
    fn draw_quad(&mut self, vertices: &[QuadVertex; 4]);

    // ==================
    // Diagnostics
    // ==================

    /// Pops the oldest pending driver error, if any.
    fn get_error(&mut self) -> Option<DriverError>;
}
