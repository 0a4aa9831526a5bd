//! Per-drawable selection of fixed state, shader slot and textures.

use crate::context::{
    BlendFactor, Capability, Combiner, CompareFunc, Context, Face, GlStateCache, TextureEnv,
};
use crate::renderer::PassConfig;
use crate::resource::{ShaderSet, ShaderSlot, Texture};
use crate::scene::{DrawFlags, Drawable};

/// Texture unit of the diffuse map.
pub const DIFFUSE_UNIT: u32 = 0;
/// Texture unit of the misc map.
pub const MISC_UNIT: u32 = 1;
/// Texture unit of the first additive (self-illumination) map.
pub const ADDITIVE_UNIT1: u32 = 8;
/// Texture unit of the second additive (self-illumination) map.
pub const ADDITIVE_UNIT2: u32 = 7;

/// Alpha test reference for distance-field materials.
pub const DISTANCE_FIELD_ALPHA_REF: f32 = 0.5;
/// Alpha test reference for every other material.
pub const DEFAULT_ALPHA_REF: f32 = 0.25;

/// The shader slot `drawable` is drawn with.
pub fn shader_slot(drawable: &Drawable) -> ShaderSlot {
    let flags = drawable.flags();

    if flags.contains(DrawFlags::OVERLAY_2D) {
        if flags.contains(DrawFlags::DISTANCE_FIELD) {
            ShaderSlot::DistanceField
        } else {
            ShaderSlot::Simple
        }
    } else if flags.contains(DrawFlags::SKYBOX) || !flags.contains(DrawFlags::LIT) {
        ShaderSlot::Skybox
    } else if flags.contains(DrawFlags::SMOKE) {
        ShaderSlot::Simple
    } else if flags.intersects(DrawFlags::DECAL | DrawFlags::PARTIAL_TRANSPARENCY) {
        ShaderSlot::FullBlend
    } else {
        ShaderSlot::Full
    }
}

/// Activates the shader slot of `drawable`.
pub fn select_shader<C: Context + ?Sized>(
    shaders: &mut ShaderSet,
    ctxt: &mut C,
    drawable: &Drawable,
) {
    shaders.set_active(ctxt, shader_slot(drawable));
}

/// Sets polygon offset, culling, blending/alpha testing, write masks, depth
/// testing and the flat color for `drawable`.
pub fn select_flags<C: Context + ?Sized>(
    config: &PassConfig,
    glstate: &mut GlStateCache,
    ctxt: &mut C,
    drawable: &Drawable,
) {
    let flags = drawable.flags();

    if flags.intersects(DrawFlags::DECAL | DrawFlags::PARTIAL_TRANSPARENCY) {
        glstate.enable(ctxt, Capability::PolygonOffsetFill);
    } else {
        glstate.disable(ctxt, Capability::PolygonOffsetFill);
    }

    if flags.contains(DrawFlags::CULL) {
        glstate.enable(ctxt, Capability::CullFace);
        if flags.contains(DrawFlags::CULL_FRONT) {
            glstate.set_cull_face(ctxt, Face::Front);
        } else {
            glstate.set_cull_face(ctxt, Face::Back);
        }
    } else {
        glstate.disable(ctxt, Capability::CullFace);
    }

    if drawable.wants_blending() && !flags.contains(DrawFlags::FORCE_ALPHA_TEST) {
        if config.fsaa > 1 {
            glstate.disable(ctxt, Capability::SampleAlphaToCoverage);
        }

        glstate.disable(ctxt, Capability::AlphaTest);
        glstate.enable(ctxt, Capability::Blend);

        if flags.contains(DrawFlags::SMOKE) {
            glstate.set_blend_func(ctxt, BlendFactor::SrcAlpha, BlendFactor::One);
        } else {
            glstate.set_blend_func(ctxt, BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        }
    } else {
        if config.fsaa > 1 && config.shaders {
            glstate.enable(ctxt, Capability::SampleAlphaToCoverage);
        }

        glstate.disable(ctxt, Capability::Blend);

        let reference = if flags.contains(DrawFlags::DISTANCE_FIELD) {
            DISTANCE_FIELD_ALPHA_REF
        } else {
            DEFAULT_ALPHA_REF
        };
        glstate.set_alpha_func(ctxt, CompareFunc::Greater, reference);
        glstate.enable(ctxt, Capability::AlphaTest);
    }

    glstate.set_depth_mask(ctxt, config.write_depth);
    glstate.set_color_mask(ctxt, config.write_color);

    // Nothing later in the draw re-enables depth testing, so this is final.
    if flags.intersects(DrawFlags::SMOKE | DrawFlags::OVERLAY_2D) {
        glstate.disable(ctxt, Capability::DepthTest);
    } else {
        glstate.enable(ctxt, Capability::DepthTest);
    }

    glstate.set_color(ctxt, drawable.color());
}

/// Binds the textures of `drawable`.
///
/// Without a loaded diffuse map, unit 0 is unbound and nothing else changes.
pub fn select_texturing<C: Context + ?Sized>(
    config: &PassConfig,
    glstate: &mut GlStateCache,
    ctxt: &mut C,
    drawable: &Drawable,
) {
    let diffuse = match loaded(drawable.diffuse_map()) {
        Some(diffuse) => diffuse,
        None => {
            glstate.bind_texture_2d(ctxt, DIFFUSE_UNIT, None);
            return;
        }
    };

    glstate.bind_texture_2d(ctxt, DIFFUSE_UNIT, Some(diffuse));

    if config.shaders {
        let (additive1, additive2) = if drawable.flags().contains(DrawFlags::SELF_ILLUMINATION) {
            (loaded(drawable.additive_map1()), loaded(drawable.additive_map2()))
        } else {
            (None, None)
        };

        glstate.bind_texture_2d(ctxt, MISC_UNIT, loaded(drawable.misc_map()));
        glstate.bind_texture_2d(ctxt, ADDITIVE_UNIT1, additive1);
        glstate.bind_texture_2d(ctxt, ADDITIVE_UNIT2, additive2);
    } else if config.paint_combiner {
        ctxt.texture_env(&TextureEnv::Combine(Combiner::paint()));
    } else {
        ctxt.texture_env(&TextureEnv::Modulate);
    }
}

#[inline]
fn loaded(texture: Option<&Texture>) -> Option<&Texture> {
    texture.filter(|t| t.loaded())
}
