use crate::color::WHITE;
use crate::context::{
    check_errors, Capability, ClearMask, Context, GlStateCache, QuadVertex, TextureParameter,
};
use crate::renderer::TransformScope;
use crate::resource::{Shader, Texture};
use glamx::Mat4;
use std::io::{self, Write};
use std::sync::Arc;

const UNIT_QUAD: [QuadVertex; 4] = [
    QuadVertex {
        tex_coord: [0.0, 0.0],
        position: [0.0, 0.0, 0.0],
    },
    QuadVertex {
        tex_coord: [1.0, 0.0],
        position: [1.0, 0.0, 0.0],
    },
    QuadVertex {
        tex_coord: [1.0, 1.0],
        position: [1.0, 1.0, 0.0],
    },
    QuadVertex {
        tex_coord: [0.0, 1.0],
        position: [0.0, 1.0, 0.0],
    },
];

/// Composites source images through a shader onto the whole render target.
///
/// Source slot `i` is bound to texture unit `i`. Slots may be left empty;
/// their unit is activated but keeps whatever was bound to it. Slots beyond
/// the driver's texture unit count are ignored.
#[derive(Debug, Clone, Default)]
pub struct PostProcessPass {
    shader: Option<Shader>,
    sources: Vec<Option<Arc<Texture>>>,
}

impl PostProcessPass {
    /// Creates a pass without shader nor sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pass compositing `sources` with `shader`.
    pub fn with_shader(shader: Shader, sources: Vec<Option<Arc<Texture>>>) -> Self {
        PostProcessPass {
            shader: Some(shader),
            sources,
        }
    }

    /// Replaces the compositing shader.
    pub fn set_shader(&mut self, shader: Option<Shader>) {
        self.shader = shader;
    }

    /// The compositing shader, if set.
    #[inline]
    pub fn shader(&self) -> Option<&Shader> {
        self.shader.as_ref()
    }

    /// Sets source slot `slot`, growing the slot list with empty slots if needed.
    pub fn set_source(&mut self, slot: usize, texture: Option<Arc<Texture>>) {
        if self.sources.len() <= slot {
            self.sources.resize(slot + 1, None);
        }
        self.sources[slot] = texture;
    }

    /// Replaces all the source slots.
    pub fn set_sources(&mut self, sources: Vec<Option<Arc<Texture>>>) {
        self.sources = sources;
    }

    /// The source slots, empty slots included.
    #[inline]
    pub fn sources(&self) -> &[Option<Arc<Texture>>] {
        &self.sources
    }

    /// Clears the target and draws the unit quad with every source bound.
    ///
    /// # Panics
    /// Panics if no shader was set.
    pub fn render<C: Context + ?Sized>(
        &self,
        ctxt: &mut C,
        glstate: &mut GlStateCache,
        error_output: &mut dyn Write,
    ) -> io::Result<()> {
        let shader = match &self.shader {
            Some(shader) => shader,
            None => panic!("the post-process pass needs a shader to render"),
        };

        let _ = check_errors(ctxt, "postprocess begin", error_output)?;

        ctxt.clear(ClearMask::COLOR | ClearMask::DEPTH);
        shader.enable(ctxt);

        let _ = check_errors(ctxt, "postprocess shader enable", error_output)?;

        {
            let projection = Mat4::orthographic_rh_gl(0.0, 1.0, 0.0, 1.0, -1.0, 1.0);
            let mut scope = TransformScope::overlay(ctxt, &projection, None);
            let ctxt = &mut *scope;

            // The flat color is set through the driver even if the cache
            // believes it is already white.
            ctxt.color(WHITE);
            glstate.set_color(ctxt, WHITE);
            glstate.disable(ctxt, Capability::Blend);
            glstate.disable(ctxt, Capability::DepthTest);
            glstate.enable(ctxt, Capability::Texture2d);

            let _ = check_errors(ctxt, "postprocess flag set", error_output)?;

            let units = ctxt.max_texture_units() as usize;
            for (unit, source) in self.sources.iter().take(units).enumerate() {
                ctxt.active_texture(unit as u32);

                if let Some(texture) = source {
                    texture.activate(ctxt);
                    ctxt.texture_parameter(TextureParameter::CompareModeNone);
                    ctxt.texture_parameter(TextureParameter::DepthTextureModeLuminance);
                    glstate.forget_texture_2d(unit as u32);
                }
            }
            ctxt.active_texture(0);

            let _ = check_errors(ctxt, "postprocess texture set", error_output)?;

            ctxt.draw_quad(&UNIT_QUAD);

            let _ = check_errors(ctxt, "postprocess draw", error_output)?;
        }

        glstate.enable(ctxt, Capability::DepthTest);
        glstate.disable(ctxt, Capability::Texture2d);

        let _ = check_errors(ctxt, "postprocess end", error_output)?;

        Ok(())
    }
}
