//! Shader programs and the fixed set of shader slots used by the scene pass.

use crate::context::{Context, ProgramId};
use glamx::Vec3;

/// A linked shader program owned by the shader layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shader {
    program: ProgramId,
}

impl Shader {
    /// Wraps an already linked program.
    pub fn new(program: ProgramId) -> Self {
        Shader { program }
    }

    /// The driver name of the program.
    #[inline]
    pub fn program(&self) -> ProgramId {
        self.program
    }

    /// Makes this program the active one.
    pub fn enable<C: Context + ?Sized>(&self, ctxt: &mut C) {
        ctxt.use_program(self.program);
    }

    /// Uploads a scalar parameter.
    pub fn upload_parameter_1f<C: Context + ?Sized>(&self, ctxt: &mut C, name: &str, value: f32) {
        ctxt.uniform_1f(self.program, name, value);
    }

    /// Uploads a 3-component parameter.
    pub fn upload_parameter_3f<C: Context + ?Sized>(&self, ctxt: &mut C, name: &str, value: Vec3) {
        ctxt.uniform_3f(self.program, name, value);
    }
}

/// Role of a shader program in the scene pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShaderSlot {
    /// Unlit textured geometry, 2D overlays and smoke.
    Simple,
    /// Lit opaque geometry.
    Full,
    /// Lit blended geometry.
    FullBlend,
    /// Skyboxes and unlit 3D geometry.
    Skybox,
    /// Distance-field text and overlays.
    DistanceField,
}

impl ShaderSlot {
    /// Number of slots.
    pub const COUNT: usize = 5;

    /// All slots, in index order.
    pub const ALL: [ShaderSlot; ShaderSlot::COUNT] = [
        ShaderSlot::Simple,
        ShaderSlot::Full,
        ShaderSlot::FullBlend,
        ShaderSlot::Skybox,
        ShaderSlot::DistanceField,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// The shader program bound to each slot and the slot currently active.
///
/// No active slot means no program was enabled since the last reset.
#[derive(Debug, Clone, Default)]
pub struct ShaderSet {
    shaders: [Option<Shader>; ShaderSlot::COUNT],
    active: Option<ShaderSlot>,
}

impl ShaderSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `shader` to `slot`, or clears the slot.
    pub fn set_shader(&mut self, slot: ShaderSlot, shader: Option<Shader>) {
        self.shaders[slot.index()] = shader;
    }

    /// The program bound to `slot`.
    pub fn shader(&self, slot: ShaderSlot) -> Option<&Shader> {
        self.shaders[slot.index()].as_ref()
    }

    /// The program bound to `slot`.
    ///
    /// # Panics
    /// Panics if no program is bound to `slot`.
    pub fn expect_shader(&self, slot: ShaderSlot) -> &Shader {
        match self.shader(slot) {
            Some(shader) => shader,
            None => panic!("no shader program bound to the {:?} slot", slot),
        }
    }

    /// The slot activated last, if any.
    pub fn active(&self) -> Option<ShaderSlot> {
        self.active
    }

    /// Forgets the active slot so that the next activation always goes through.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Activates the program of `slot`.
    ///
    /// Does nothing if `slot` is already active.
    ///
    /// # Panics
    /// Panics if no program is bound to `slot`.
    pub fn set_active<C: Context + ?Sized>(&mut self, ctxt: &mut C, slot: ShaderSlot) {
        if self.active == Some(slot) {
            return;
        }

        self.expect_shader(slot).enable(ctxt);
        self.active = Some(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Command, RecordingContext};

    fn full_set() -> ShaderSet {
        let mut set = ShaderSet::new();
        for (i, slot) in ShaderSlot::ALL.iter().enumerate() {
            set.set_shader(*slot, Some(Shader::new(ProgramId(i as u32 + 1))));
        }
        set
    }

    #[test]
    fn test_selecting_same_slot_twice_enables_once() {
        let mut ctxt = RecordingContext::new();
        let mut set = full_set();

        set.set_active(&mut ctxt, ShaderSlot::Full);
        set.set_active(&mut ctxt, ShaderSlot::Full);

        assert_eq!(ctxt.commands(), &[Command::UseProgram(ProgramId(2))]);
        assert_eq!(set.active(), Some(ShaderSlot::Full));
    }

    #[test]
    fn test_reset_forces_reactivation() {
        let mut ctxt = RecordingContext::new();
        let mut set = full_set();

        set.set_active(&mut ctxt, ShaderSlot::Skybox);
        set.reset();
        set.set_active(&mut ctxt, ShaderSlot::Skybox);
        set.set_active(&mut ctxt, ShaderSlot::Simple);

        assert_eq!(
            ctxt.commands(),
            &[
                Command::UseProgram(ProgramId(4)),
                Command::UseProgram(ProgramId(4)),
                Command::UseProgram(ProgramId(1)),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "no shader program bound to the DistanceField slot")]
    fn test_missing_shader_is_fatal() {
        let mut ctxt = RecordingContext::new();
        let mut set = ShaderSet::new();
        set.set_active(&mut ctxt, ShaderSlot::DistanceField);
    }
}
