//! Shadow copy of driver state used to skip redundant driver calls.

use crate::color::Color;
use crate::context::{BlendFactor, Capability, CompareFunc, Context, Face, TextureId, TextureTarget};
use crate::resource::Texture;
use std::collections::HashMap;

/// Remembers the last value sent to the driver for each piece of state it
/// manages and forwards a call only when the value changes.
///
/// The cache assumes it is the only one changing the state it tracks. Call
/// [`GlStateCache::invalidate`] after foreign code touched the driver.
#[derive(Debug, Default, Clone)]
pub struct GlStateCache {
    capabilities: HashMap<Capability, bool>,
    color: Option<Color>,
    blend_func: Option<(BlendFactor, BlendFactor)>,
    cull_face: Option<Face>,
    alpha_func: Option<(CompareFunc, f32)>,
    depth_mask: Option<bool>,
    color_mask: Option<bool>,
    textures_2d: HashMap<u32, Option<TextureId>>,
}

impl GlStateCache {
    /// Creates a cache that knows nothing about the driver state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every cached value, forcing the next call of each kind through.
    pub fn invalidate(&mut self) {
        *self = Self::default();
    }

    /// Enables `capability` unless it is known to be enabled.
    pub fn enable<C: Context + ?Sized>(&mut self, ctxt: &mut C, capability: Capability) {
        if self.capabilities.insert(capability, true) != Some(true) {
            ctxt.enable(capability);
        }
    }

    /// Disables `capability` unless it is known to be disabled.
    pub fn disable<C: Context + ?Sized>(&mut self, ctxt: &mut C, capability: Capability) {
        if self.capabilities.insert(capability, false) != Some(false) {
            ctxt.disable(capability);
        }
    }

    /// Returns the cached state of `capability`, if known.
    pub fn is_enabled(&self, capability: Capability) -> Option<bool> {
        self.capabilities.get(&capability).copied()
    }

    /// Sets the flat color.
    pub fn set_color<C: Context + ?Sized>(&mut self, ctxt: &mut C, color: Color) {
        if self.color != Some(color) {
            ctxt.color(color);
            self.color = Some(color);
        }
    }

    /// Sets the blend factors.
    pub fn set_blend_func<C: Context + ?Sized>(
        &mut self,
        ctxt: &mut C,
        src: BlendFactor,
        dst: BlendFactor,
    ) {
        if self.blend_func != Some((src, dst)) {
            ctxt.blend_func(src, dst);
            self.blend_func = Some((src, dst));
        }
    }

    /// Selects the culled face.
    pub fn set_cull_face<C: Context + ?Sized>(&mut self, ctxt: &mut C, face: Face) {
        if self.cull_face != Some(face) {
            ctxt.cull_face(face);
            self.cull_face = Some(face);
        }
    }

    /// Sets the alpha test function.
    pub fn set_alpha_func<C: Context + ?Sized>(
        &mut self,
        ctxt: &mut C,
        func: CompareFunc,
        reference: f32,
    ) {
        if self.alpha_func != Some((func, reference)) {
            ctxt.alpha_func(func, reference);
            self.alpha_func = Some((func, reference));
        }
    }

    /// Enables or disables depth writes.
    pub fn set_depth_mask<C: Context + ?Sized>(&mut self, ctxt: &mut C, write: bool) {
        if self.depth_mask != Some(write) {
            ctxt.depth_mask(write);
            self.depth_mask = Some(write);
        }
    }

    /// Enables or disables color writes.
    pub fn set_color_mask<C: Context + ?Sized>(&mut self, ctxt: &mut C, write: bool) {
        if self.color_mask != Some(write) {
            ctxt.color_mask(write);
            self.color_mask = Some(write);
        }
    }

    /// Binds `texture` (or nothing) as the 2D texture of `unit`.
    ///
    /// Texture unit 0 is left active afterwards.
    pub fn bind_texture_2d<C: Context + ?Sized>(
        &mut self,
        ctxt: &mut C,
        unit: u32,
        texture: Option<&Texture>,
    ) {
        let id = texture.map(Texture::id);

        if self.textures_2d.get(&unit) == Some(&id) {
            return;
        }

        ctxt.active_texture(unit);
        ctxt.bind_texture(TextureTarget::Texture2d, id);
        if unit != 0 {
            ctxt.active_texture(0);
        }

        let _ = self.textures_2d.insert(unit, id);
    }

    /// Forgets the cached 2D binding of `unit` after it was changed directly
    /// through the driver.
    pub fn forget_texture_2d(&mut self, unit: u32) {
        let _ = self.textures_2d.remove(&unit);
    }

    /// Returns the cached 2D binding of `unit`, if known.
    pub fn texture_2d(&self, unit: u32) -> Option<Option<TextureId>> {
        self.textures_2d.get(&unit).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Command, RecordingContext};

    #[test]
    fn test_redundant_calls_are_skipped() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();

        glstate.enable(&mut ctxt, Capability::Blend);
        glstate.enable(&mut ctxt, Capability::Blend);
        glstate.set_depth_mask(&mut ctxt, false);
        glstate.set_depth_mask(&mut ctxt, false);
        glstate.set_alpha_func(&mut ctxt, CompareFunc::Greater, 0.25);
        glstate.set_alpha_func(&mut ctxt, CompareFunc::Greater, 0.25);

        assert_eq!(
            ctxt.commands(),
            &[
                Command::Enable(Capability::Blend),
                Command::DepthMask(false),
                Command::AlphaFunc(CompareFunc::Greater, 0.25),
            ]
        );

        glstate.disable(&mut ctxt, Capability::Blend);
        assert_eq!(ctxt.count(|c| *c == Command::Disable(Capability::Blend)), 1);
    }

    #[test]
    fn test_texture_binding_restores_unit_zero() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();
        let tex = Texture::new_2d(TextureId(7));

        glstate.bind_texture_2d(&mut ctxt, 8, Some(&tex));
        glstate.bind_texture_2d(&mut ctxt, 8, Some(&tex));

        assert_eq!(ctxt.bound_texture(8, TextureTarget::Texture2d), Some(TextureId(7)));
        assert_eq!(ctxt.active_unit(), 0);
        assert_eq!(
            ctxt.count(|c| matches!(c, Command::BindTexture(..))),
            1
        );
        assert_eq!(glstate.texture_2d(8), Some(Some(TextureId(7))));
    }

    #[test]
    fn test_invalidate_forces_calls_through() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();

        glstate.set_color_mask(&mut ctxt, true);
        glstate.invalidate();
        glstate.set_color_mask(&mut ctxt, true);

        assert_eq!(ctxt.count(|c| *c == Command::ColorMask(true)), 2);
    }
}
