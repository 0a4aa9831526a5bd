//! Dummy driver that records calls instead of rendering.
//!
//! This context doesn't talk to any GPU. It keeps enough bookkeeping (matrix
//! stacks, texture units, capabilities, an error queue) to check the passes
//! without graphics hardware.

use crate::color::Color;
use crate::context::{
    BlendFactor, Capability, ClearMask, ClientArray, CompareFunc, Context, DriverError, Face,
    ListId, MatrixMode, ProgramId, QuadVertex, TextureEnv, TextureId, TextureParameter,
    TextureTarget,
};
use glamx::{Mat4, Vec3};
use std::collections::{HashMap, HashSet, VecDeque};

/// One recorded driver call.
///
/// Matrix commands carry the stack they applied to. Texture commands carry
/// the texture unit that was active.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    MatrixMode(MatrixMode),
    PushMatrix(MatrixMode),
    PopMatrix(MatrixMode),
    LoadIdentity(MatrixMode),
    LoadMatrix(MatrixMode, Mat4),
    MultMatrix(MatrixMode, Mat4),
    Enable(Capability),
    Disable(Capability),
    Color(Color),
    BlendFunc(BlendFactor, BlendFactor),
    CullFace(Face),
    AlphaFunc(CompareFunc, f32),
    DepthMask(bool),
    ColorMask(bool),
    DepthFunc(CompareFunc),
    Clear(ClearMask),
    LineSmoothHint,
    LineWidth(f32),
    ActiveTexture(u32),
    BindTexture(u32, TextureTarget, Option<TextureId>),
    TextureParameter(u32, TextureParameter),
    TextureEnv(u32, TextureEnv),
    UseProgram(ProgramId),
    Uniform1f(ProgramId, String, f32),
    Uniform3f(ProgramId, String, Vec3),
    EnableClientState(ClientArray),
    DisableClientState(ClientArray),
    VertexPointer(usize),
    NormalPointer(usize),
    TexCoordPointer(usize),
    DrawTriangles(usize),
    CallList(ListId),
    DrawLineStrip(Vec<Vec3>),
    DrawQuad([QuadVertex; 4]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum StackKey {
    Projection,
    ModelView,
    Texture(u32),
}

/// A [`Context`] that records every call.
#[derive(Debug, Clone)]
pub struct RecordingContext {
    commands: Vec<Command>,
    errors: VecDeque<DriverError>,
    mode: MatrixMode,
    stacks: HashMap<StackKey, Vec<Mat4>>,
    active_unit: u32,
    max_texture_units: u32,
    bindings: HashMap<(u32, TextureTarget), TextureId>,
    enabled: HashSet<Capability>,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingContext {
    /// Creates a recording context exposing 16 texture units.
    pub fn new() -> Self {
        Self::with_texture_units(16)
    }

    /// Creates a recording context exposing `max_texture_units` texture units.
    pub fn with_texture_units(max_texture_units: u32) -> Self {
        RecordingContext {
            commands: Vec::new(),
            errors: VecDeque::new(),
            mode: MatrixMode::ModelView,
            stacks: HashMap::new(),
            active_unit: 0,
            max_texture_units,
            bindings: HashMap::new(),
            enabled: HashSet::new(),
        }
    }

    /// Queues an error to be returned by [`Context::get_error`].
    pub fn push_error(&mut self, error: DriverError) {
        self.errors.push_back(error);
    }

    /// The commands recorded so far.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Forgets the recorded commands, keeping the emulated driver state.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Depth of a matrix stack above its base entry.
    ///
    /// `unit` is only meaningful for [`MatrixMode::Texture`].
    pub fn matrix_depth(&self, mode: MatrixMode, unit: u32) -> usize {
        self.stacks
            .get(&Self::key(mode, unit))
            .map_or(0, |stack| stack.len() - 1)
    }

    /// Top of a matrix stack.
    ///
    /// `unit` is only meaningful for [`MatrixMode::Texture`].
    pub fn matrix(&self, mode: MatrixMode, unit: u32) -> Mat4 {
        self.stacks
            .get(&Self::key(mode, unit))
            .and_then(|stack| stack.last().copied())
            .unwrap_or(Mat4::IDENTITY)
    }

    /// The currently selected matrix stack.
    pub fn matrix_mode_selected(&self) -> MatrixMode {
        self.mode
    }

    /// The active texture unit.
    pub fn active_unit(&self) -> u32 {
        self.active_unit
    }

    /// The texture bound to `target` on `unit`.
    pub fn bound_texture(&self, unit: u32, target: TextureTarget) -> Option<TextureId> {
        self.bindings.get(&(unit, target)).copied()
    }

    /// Whether `capability` is currently enabled.
    pub fn is_enabled(&self, capability: Capability) -> bool {
        self.enabled.contains(&capability)
    }

    fn key(mode: MatrixMode, unit: u32) -> StackKey {
        match mode {
            MatrixMode::Projection => StackKey::Projection,
            MatrixMode::ModelView => StackKey::ModelView,
            MatrixMode::Texture => StackKey::Texture(unit),
        }
    }

    fn current_stack(&mut self) -> &mut Vec<Mat4> {
        let key = Self::key(self.mode, self.active_unit);
        self.stacks
            .entry(key)
            .or_insert_with(|| vec![Mat4::IDENTITY])
    }

    fn record(&mut self, command: Command) {
        log::trace!("RecordingContext: {:?}", command);
        self.commands.push(command);
    }
}

impl Context for RecordingContext {
    fn matrix_mode(&mut self, mode: MatrixMode) {
        self.mode = mode;
        self.record(Command::MatrixMode(mode));
    }

    fn push_matrix(&mut self) {
        let stack = self.current_stack();
        let top = stack.last().copied().unwrap_or(Mat4::IDENTITY);
        stack.push(top);
        self.record(Command::PushMatrix(self.mode));
    }

    fn pop_matrix(&mut self) {
        let stack = self.current_stack();
        let underflow = stack.len() <= 1;
        if !underflow {
            let _ = stack.pop();
        }
        if underflow {
            self.errors.push_back(DriverError::StackUnderflow);
        }
        self.record(Command::PopMatrix(self.mode));
    }

    fn load_identity(&mut self) {
        if let Some(top) = self.current_stack().last_mut() {
            *top = Mat4::IDENTITY;
        }
        self.record(Command::LoadIdentity(self.mode));
    }

    fn load_matrix(&mut self, matrix: &Mat4) {
        if let Some(top) = self.current_stack().last_mut() {
            *top = *matrix;
        }
        self.record(Command::LoadMatrix(self.mode, *matrix));
    }

    fn mult_matrix(&mut self, matrix: &Mat4) {
        if let Some(top) = self.current_stack().last_mut() {
            *top *= *matrix;
        }
        self.record(Command::MultMatrix(self.mode, *matrix));
    }

    fn enable(&mut self, capability: Capability) {
        let _ = self.enabled.insert(capability);
        self.record(Command::Enable(capability));
    }

    fn disable(&mut self, capability: Capability) {
        let _ = self.enabled.remove(&capability);
        self.record(Command::Disable(capability));
    }

    fn color(&mut self, color: Color) {
        self.record(Command::Color(color));
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        self.record(Command::BlendFunc(src, dst));
    }

    fn cull_face(&mut self, face: Face) {
        self.record(Command::CullFace(face));
    }

    fn alpha_func(&mut self, func: CompareFunc, reference: f32) {
        self.record(Command::AlphaFunc(func, reference));
    }

    fn depth_mask(&mut self, write: bool) {
        self.record(Command::DepthMask(write));
    }

    fn color_mask(&mut self, write: bool) {
        self.record(Command::ColorMask(write));
    }

    fn depth_func(&mut self, func: CompareFunc) {
        self.record(Command::DepthFunc(func));
    }

    fn clear(&mut self, mask: ClearMask) {
        self.record(Command::Clear(mask));
    }

    fn line_smooth_hint_nicest(&mut self) {
        self.record(Command::LineSmoothHint);
    }

    fn line_width(&mut self, width: f32) {
        self.record(Command::LineWidth(width));
    }

    fn max_texture_units(&self) -> u32 {
        self.max_texture_units
    }

    fn active_texture(&mut self, unit: u32) {
        if unit >= self.max_texture_units {
            self.errors.push_back(DriverError::InvalidEnum);
        }
        self.active_unit = unit;
        self.record(Command::ActiveTexture(unit));
    }

    fn bind_texture(&mut self, target: TextureTarget, texture: Option<TextureId>) {
        let unit = self.active_unit;
        match texture {
            Some(id) => {
                let _ = self.bindings.insert((unit, target), id);
            }
            None => {
                let _ = self.bindings.remove(&(unit, target));
            }
        }
        self.record(Command::BindTexture(unit, target, texture));
    }

    fn texture_parameter(&mut self, parameter: TextureParameter) {
        self.record(Command::TextureParameter(self.active_unit, parameter));
    }

    fn texture_env(&mut self, env: &TextureEnv) {
        self.record(Command::TextureEnv(self.active_unit, *env));
    }

    fn use_program(&mut self, program: ProgramId) {
        self.record(Command::UseProgram(program));
    }

    fn uniform_1f(&mut self, program: ProgramId, name: &str, value: f32) {
        self.record(Command::Uniform1f(program, name.to_string(), value));
    }

    fn uniform_3f(&mut self, program: ProgramId, name: &str, value: Vec3) {
        self.record(Command::Uniform3f(program, name.to_string(), value));
    }

    fn enable_client_state(&mut self, array: ClientArray) {
        self.record(Command::EnableClientState(array));
    }

    fn disable_client_state(&mut self, array: ClientArray) {
        self.record(Command::DisableClientState(array));
    }

    fn vertex_pointer(&mut self, vertices: &[f32]) {
        self.record(Command::VertexPointer(vertices.len()));
    }

    fn normal_pointer(&mut self, normals: &[f32]) {
        self.record(Command::NormalPointer(normals.len()));
    }

    fn tex_coord_pointer(&mut self, tex_coords: &[f32]) {
        self.record(Command::TexCoordPointer(tex_coords.len()));
    }

    fn draw_triangles(&mut self, indices: &[u32]) {
        self.record(Command::DrawTriangles(indices.len()));
    }

    fn call_list(&mut self, list: ListId) {
        self.record(Command::CallList(list));
    }

    fn draw_line_strip(&mut self, points: &[Vec3]) {
        self.record(Command::DrawLineStrip(points.to_vec()));
    }

    fn draw_quad(&mut self, vertices: &[QuadVertex; 4]) {
        self.record(Command::DrawQuad(*vertices));
    }

    fn get_error(&mut self) -> Option<DriverError> {
        self.errors.pop_front()
    }
}
