//! The scene render pass.

use crate::camera::{CameraInfo, Frustum};
use crate::context::{
    check_errors, Capability, ClearMask, ClientArray, CompareFunc, Context, GlStateCache,
    MatrixMode,
};
use crate::light::Light;
use crate::renderer::render_state::{select_flags, select_shader, select_texturing};
use crate::renderer::transform::TransformCoordinator;
use crate::renderer::visibility::is_culled;
use crate::renderer::PassConfig;
use crate::resource::{Shader, ShaderSet, ShaderSlot, Texture};
use crate::scene::{DrawLists, Drawable, Geometry};
use glamx::{Mat4, Quat, Vec3};
use std::io::{self, Write};
use std::sync::Arc;

/// Texture unit whose texture matrix holds the camera view.
pub const CAMERA_MATRIX_UNIT: u32 = 3;
/// Texture unit whose texture matrix holds the cube map rotation.
pub const CUBE_MATRIX_UNIT: u32 = 2;
/// Texture unit of the reflection cube map.
pub const REFLECTION_UNIT: u32 = 2;
/// Texture unit of the ambient cube map.
pub const AMBIENT_UNIT: u32 = 3;

/// Draws the dynamic and static draw lists of a frame from one camera.
///
/// A pass owns its configuration, the camera and the frustum derived from
/// it, the shader slots and the model-matrix cache. The driver context and
/// the state cache are borrowed for each call.
pub struct ScenePass {
    config: PassConfig,
    camera: CameraInfo,
    frustum: Frustum,
    shaders: ShaderSet,
    light: Light,
    reflection_map: Option<Arc<Texture>>,
    ambient_map: Option<Arc<Texture>>,
    transforms: TransformCoordinator,
}

impl Default for ScenePass {
    fn default() -> Self {
        Self::new(PassConfig::default())
    }
}

impl ScenePass {
    /// Creates a pass with the default camera and light and no shaders.
    pub fn new(config: PassConfig) -> Self {
        let camera = CameraInfo::default();
        let frustum = Frustum::from_matrices(&camera.projection(config.ortho.as_ref()), &camera.view());

        ScenePass {
            config,
            camera,
            frustum,
            shaders: ShaderSet::new(),
            light: Light::default(),
            reflection_map: None,
            ambient_map: None,
            transforms: TransformCoordinator::new(),
        }
    }

    /// The pass configuration.
    #[inline]
    pub fn config(&self) -> &PassConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    ///
    /// Changing the orthographic bounds only affects the frustum after the
    /// next camera update or `render`.
    #[inline]
    pub fn config_mut(&mut self) -> &mut PassConfig {
        &mut self.config
    }

    /// The camera of the last update.
    #[inline]
    pub fn camera(&self) -> &CameraInfo {
        &self.camera
    }

    /// The frustum of the last camera update.
    #[inline]
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// The directional light.
    #[inline]
    pub fn light(&self) -> &Light {
        &self.light
    }

    /// Replaces the directional light.
    pub fn set_light(&mut self, light: Light) {
        self.light = light;
    }

    /// Binds `shader` to `slot`, or clears the slot.
    pub fn set_shader(&mut self, slot: ShaderSlot, shader: Option<Shader>) {
        self.shaders.set_shader(slot, shader);
    }

    /// The shader slots.
    #[inline]
    pub fn shaders(&self) -> &ShaderSet {
        &self.shaders
    }

    /// Sets the cube map sampled for reflections.
    pub fn set_reflection_map(&mut self, map: Option<Arc<Texture>>) {
        self.reflection_map = map;
    }

    /// Sets the cube map sampled for ambient lighting.
    pub fn set_ambient_map(&mut self, map: Option<Arc<Texture>>) {
        self.ambient_map = map;
    }

    /// Sets the camera and loads its projection and view.
    ///
    /// With `restore_matrices`, both matrices are pushed before and popped
    /// after, so the caller's matrices survive and only the frustum changes.
    /// Otherwise the camera matrices stay loaded.
    pub fn set_camera_info<C: Context + ?Sized>(
        &mut self,
        ctxt: &mut C,
        position: Vec3,
        rotation: Quat,
        fov: f32,
        far: f32,
        width: f32,
        height: f32,
        restore_matrices: bool,
    ) -> Frustum {
        let camera = CameraInfo {
            position,
            rotation,
            fov,
            far,
            width,
            height,
        };
        self.set_camera(ctxt, camera, restore_matrices)
    }

    /// Same as [`ScenePass::set_camera_info`], taking the camera as a whole.
    pub fn set_camera<C: Context + ?Sized>(
        &mut self,
        ctxt: &mut C,
        camera: CameraInfo,
        restore_matrices: bool,
    ) -> Frustum {
        self.camera = camera;

        let projection = camera.projection(self.config.ortho.as_ref());
        let view = camera.view();

        ctxt.matrix_mode(MatrixMode::Projection);
        if restore_matrices {
            ctxt.push_matrix();
        }
        ctxt.load_matrix(&projection);

        ctxt.matrix_mode(MatrixMode::ModelView);
        if restore_matrices {
            ctxt.push_matrix();
        }
        ctxt.load_matrix(&view);

        self.frustum = Frustum::from_matrices(&projection, &view);

        if restore_matrices {
            ctxt.pop_matrix();
            ctxt.matrix_mode(MatrixMode::Projection);
            ctxt.pop_matrix();
            ctxt.matrix_mode(MatrixMode::ModelView);
        }

        self.frustum
    }

    /// Draws the dynamic list, frustum-culled, then the static list as-is.
    ///
    /// Driver errors are reported to `error_output` at each stage and never
    /// interrupt the pass.
    ///
    /// # Panics
    /// Panics if shaders are enabled and a drawable needs a shader slot that
    /// has no program.
    pub fn render<C: Context + ?Sized>(
        &mut self,
        ctxt: &mut C,
        glstate: &mut GlStateCache,
        lists: &DrawLists,
        error_output: &mut dyn Write,
    ) -> io::Result<()> {
        let _ = check_errors(ctxt, "scene begin", error_output)?;

        let projection = self.camera.projection(self.config.ortho.as_ref());
        let view = self.camera.view();

        ctxt.matrix_mode(MatrixMode::Projection);
        ctxt.load_matrix(&projection);
        ctxt.matrix_mode(MatrixMode::ModelView);
        ctxt.load_matrix(&view);
        self.frustum = Frustum::from_matrices(&projection, &view);

        let _ = check_errors(ctxt, "scene camera", error_output)?;

        if self.config.shaders {
            self.setup_shaders(ctxt, &view);
            let _ = check_errors(ctxt, "scene shader setup", error_output)?;
        }

        let mut mask = ClearMask::empty();
        if self.config.clear_color {
            mask |= ClearMask::COLOR;
        }
        if self.config.clear_depth {
            mask |= ClearMask::DEPTH;
        }
        if !mask.is_empty() {
            ctxt.clear(mask);
        }

        if self.config.depth_mode_equal {
            ctxt.depth_func(CompareFunc::Equal);
        } else {
            ctxt.depth_func(CompareFunc::LessEqual);
        }

        self.shaders.reset();
        self.transforms.reset();

        let drawn = self.draw_list(ctxt, glstate, lists.dynamic, true);
        log::debug!("drew {} of {} dynamic drawables", drawn, lists.dynamic.len());

        let drawn = self.draw_list(ctxt, glstate, lists.static_list, false);
        log::debug!("drew {} of {} static drawables", drawn, lists.static_list.len());

        let _ = check_errors(ctxt, "scene draw", error_output)?;

        self.transforms.release(ctxt);

        let _ = check_errors(ctxt, "scene end", error_output)?;

        Ok(())
    }

    fn setup_shaders<C: Context + ?Sized>(&mut self, ctxt: &mut C, view: &Mat4) {
        ctxt.active_texture(CAMERA_MATRIX_UNIT);
        ctxt.matrix_mode(MatrixMode::Texture);
        ctxt.load_matrix(view);

        ctxt.active_texture(CUBE_MATRIX_UNIT);
        ctxt.load_matrix(&Mat4::from_quat(self.camera.cube_map_rotation()));

        ctxt.active_texture(0);
        ctxt.matrix_mode(MatrixMode::ModelView);

        let light_position = self.light.view_direction(self.camera.rotation);

        for slot in [ShaderSlot::Full, ShaderSlot::FullBlend].iter() {
            if let Some(shader) = self.shaders.shader(*slot) {
                shader.enable(ctxt);
                shader.upload_parameter_3f(ctxt, "lightposition", light_position);
                shader.upload_parameter_1f(ctxt, "contrast", self.config.contrast);
            }
        }

        if let Some(shader) = self.shaders.shader(ShaderSlot::Skybox) {
            shader.enable(ctxt);
            shader.upload_parameter_1f(ctxt, "contrast", self.config.contrast);
        }

        if let Some(map) = self.reflection_map.as_deref().filter(|m| m.loaded()) {
            ctxt.active_texture(REFLECTION_UNIT);
            map.activate(ctxt);
            ctxt.active_texture(0);
        }

        if let Some(map) = self.ambient_map.as_deref().filter(|m| m.loaded()) {
            ctxt.active_texture(AMBIENT_UNIT);
            map.activate(ctxt);
            ctxt.active_texture(0);
        }
    }

    fn draw_list<C: Context + ?Sized>(
        &mut self,
        ctxt: &mut C,
        glstate: &mut GlStateCache,
        drawables: &[&Drawable],
        cull: bool,
    ) -> usize {
        let mut drawn = 0;

        for drawable in drawables {
            if cull && is_culled(drawable, &self.frustum, self.camera.position, self.camera.far) {
                continue;
            }

            self.draw(ctxt, glstate, drawable);
            drawn += 1;
        }

        drawn
    }

    fn draw<C: Context + ?Sized>(
        &mut self,
        ctxt: &mut C,
        glstate: &mut GlStateCache,
        drawable: &Drawable,
    ) {
        if self.config.shaders {
            select_shader(&mut self.shaders, ctxt, drawable);
        }
        select_flags(&self.config, glstate, ctxt, drawable);
        select_texturing(&self.config, glstate, ctxt, drawable);

        let mut scope = self.transforms.begin(ctxt, drawable, &self.camera);
        dispatch_geometry(&mut *scope, glstate, drawable);
    }
}

/// Issues the draw calls of the geometry of `drawable`.
pub fn dispatch_geometry<C: Context + ?Sized>(
    ctxt: &mut C,
    glstate: &mut GlStateCache,
    drawable: &Drawable,
) {
    match drawable.geometry() {
        Geometry::DrawLists(lists) => {
            for list in lists {
                ctxt.call_list(*list);
            }
        }
        Geometry::Vertices(array) => {
            ctxt.enable_client_state(ClientArray::Vertex);
            ctxt.vertex_pointer(array.vertices());

            if !array.normals().is_empty() {
                ctxt.enable_client_state(ClientArray::Normal);
                ctxt.normal_pointer(array.normals());
            }

            if let Some(tex_coords) = array.tex_coords(0) {
                ctxt.enable_client_state(ClientArray::TexCoord);
                ctxt.tex_coord_pointer(tex_coords);
            }

            ctxt.draw_triangles(array.faces());

            ctxt.disable_client_state(ClientArray::Vertex);
            ctxt.disable_client_state(ClientArray::Normal);
            ctxt.disable_client_state(ClientArray::TexCoord);
        }
        Geometry::Line(points) => {
            if !points.is_empty() {
                glstate.enable(ctxt, Capability::LineSmooth);
                ctxt.line_smooth_hint_nicest();
                ctxt.line_width(drawable.line_width());
                ctxt.draw_line_strip(points);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrthoBounds;
    use crate::context::{Command, DriverError, ListId, ProgramId, RecordingContext, TextureId, TextureTarget};
    use crate::resource::VertexArray;
    use crate::scene::DrawFlags;

    fn shaded_pass() -> ScenePass {
        let mut pass = ScenePass::new(PassConfig::default().with_shaders(true));
        for (i, slot) in ShaderSlot::ALL.iter().enumerate() {
            pass.set_shader(*slot, Some(Shader::new(ProgramId(i as u32 + 1))));
        }
        pass
    }

    fn list(id: u32) -> Drawable {
        Drawable::new(Geometry::DrawLists(vec![ListId(id)]))
    }

    #[test]
    fn test_set_camera_info_restores_matrices() {
        let mut ctxt = RecordingContext::new();
        let mut pass = ScenePass::default();
        let caller = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        ctxt.matrix_mode(MatrixMode::ModelView);
        ctxt.load_matrix(&caller);

        let frustum = pass.set_camera_info(
            &mut ctxt,
            Vec3::new(0.0, 0.0, 10.0),
            Quat::IDENTITY,
            60.0,
            500.0,
            640.0,
            480.0,
            true,
        );

        assert_eq!(ctxt.matrix_depth(MatrixMode::Projection, 0), 0);
        assert_eq!(ctxt.matrix_depth(MatrixMode::ModelView, 0), 0);
        assert_eq!(ctxt.matrix(MatrixMode::ModelView, 0), caller);
        assert_eq!(ctxt.matrix_mode_selected(), MatrixMode::ModelView);
        assert_eq!(&frustum, pass.frustum());
        assert_eq!(pass.camera().far, 500.0);
    }

    #[test]
    fn test_set_camera_without_restore_leaves_camera_loaded() {
        let mut ctxt = RecordingContext::new();
        let mut pass = ScenePass::default();
        let camera = CameraInfo {
            position: Vec3::new(4.0, 0.0, 0.0),
            ..Default::default()
        };

        let _ = pass.set_camera(&mut ctxt, camera, false);

        assert_eq!(ctxt.matrix(MatrixMode::ModelView, 0), camera.view());
        assert_eq!(ctxt.matrix(MatrixMode::Projection, 0), camera.projection(None));
        assert_eq!(ctxt.count(|c| matches!(c, Command::PushMatrix(_))), 0);
    }

    #[test]
    fn test_render_balances_matrix_stacks() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();
        let mut pass = shaded_pass();
        let mut errors = Vec::new();

        let a = list(1);
        let b = list(2).with_flags(DrawFlags::SKYBOX | DrawFlags::LIT);
        let c = list(3).with_flags(DrawFlags::OVERLAY_2D);
        let d = list(4).with_flags(DrawFlags::CAMERA_INDEPENDENT | DrawFlags::LIT);
        let e = list(5).with_transform(Mat4::from_translation(Vec3::X));
        let dynamic = [&a, &b, &c];
        let static_list = [&d, &e];

        pass.render(
            &mut ctxt,
            &mut glstate,
            &DrawLists::new(&dynamic, &static_list),
            &mut errors,
        )
        .unwrap();

        assert!(errors.is_empty());
        assert_eq!(ctxt.matrix_depth(MatrixMode::Projection, 0), 0);
        assert_eq!(ctxt.matrix_depth(MatrixMode::ModelView, 0), 0);
        for unit in 0..4 {
            assert_eq!(ctxt.matrix_depth(MatrixMode::Texture, unit), 0);
        }
        assert_eq!(ctxt.count(|c| matches!(c, Command::CallList(_))), 5);
        assert_eq!(ctxt.active_unit(), 0);
    }

    #[test]
    fn test_identical_transforms_share_one_push() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();
        let mut pass = ScenePass::default();
        let transform = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));

        let a = list(1).with_transform(transform);
        let b = list(2).with_transform(transform);
        let c = list(3).with_transform(Mat4::from_translation(Vec3::new(0.0, 1.0, -5.0)));
        let dynamic = [&a, &b, &c];

        pass.render(&mut ctxt, &mut glstate, &DrawLists::dynamic(&dynamic), &mut io::sink())
            .unwrap();

        assert_eq!(
            ctxt.count(|c| *c == Command::PushMatrix(MatrixMode::ModelView)),
            2
        );
        assert_eq!(
            ctxt.count(|c| *c == Command::PopMatrix(MatrixMode::ModelView)),
            2
        );
    }

    #[test]
    fn test_dynamic_list_is_culled_and_static_list_is_not() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();
        let mut pass = ScenePass::default();

        // The default camera looks down -z.
        let behind = list(1).with_bounds(Vec3::new(0.0, 0.0, 50.0), 1.0);
        let ahead = list(2).with_bounds(Vec3::new(0.0, 0.0, -50.0), 1.0);
        let dynamic = [&behind, &ahead];
        let static_list = [&behind];

        pass.render(
            &mut ctxt,
            &mut glstate,
            &DrawLists::new(&dynamic, &static_list),
            &mut io::sink(),
        )
        .unwrap();

        assert_eq!(
            ctxt.commands()
                .iter()
                .filter_map(|c| match c {
                    Command::CallList(id) => Some(id.0),
                    _ => None,
                })
                .collect::<Vec<_>>(),
            vec![2, 1]
        );
    }

    #[test]
    fn test_shader_setup_uploads_parameters_and_binds_loaded_cube_maps() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();
        let mut pass = shaded_pass();
        pass.config_mut().contrast = 1.5;
        pass.set_reflection_map(Some(Arc::new(Texture::new_cube_map(TextureId(20)))));
        pass.set_ambient_map(Some(Arc::new(
            Texture::new_cube_map(TextureId(21)).with_loaded(false),
        )));

        pass.render(&mut ctxt, &mut glstate, &DrawLists::dynamic(&[]), &mut io::sink())
            .unwrap();

        let full = ProgramId(2);
        let skybox = ProgramId(4);
        assert_eq!(
            ctxt.count(|c| matches!(c, Command::Uniform3f(p, name, _) if *p == full && name == "lightposition")),
            1
        );
        assert_eq!(
            ctxt.count(|c| *c == Command::Uniform1f(skybox, "contrast".to_string(), 1.5)),
            1
        );
        assert_eq!(ctxt.bound_texture(REFLECTION_UNIT, TextureTarget::CubeMap), Some(TextureId(20)));
        assert_eq!(ctxt.bound_texture(AMBIENT_UNIT, TextureTarget::CubeMap), None);
        assert_eq!(
            ctxt.matrix(MatrixMode::Texture, CAMERA_MATRIX_UNIT),
            pass.camera().view()
        );
    }

    #[test]
    fn test_same_shader_slot_is_enabled_once() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();
        let mut pass = shaded_pass();

        let a = list(1);
        let b = list(2);
        let dynamic = [&a, &b];
        pass.render(&mut ctxt, &mut glstate, &DrawLists::dynamic(&dynamic), &mut io::sink())
            .unwrap();

        let first_draw = ctxt
            .commands()
            .iter()
            .position(|c| matches!(c, Command::CallList(_)))
            .unwrap();
        let enables = ctxt.commands()[..first_draw]
            .iter()
            .rev()
            .take_while(|c| !matches!(c, Command::DepthFunc(_)))
            .filter(|c| matches!(c, Command::UseProgram(_)))
            .count();
        assert_eq!(enables, 1);
        assert_eq!(ctxt.commands().last(), Some(&Command::PopMatrix(MatrixMode::ModelView)));
        assert_eq!(
            ctxt.commands()
                .iter()
                .skip(first_draw)
                .filter(|c| matches!(c, Command::UseProgram(_)))
                .count(),
            0
        );
    }

    #[test]
    #[should_panic(expected = "no shader program bound")]
    fn test_missing_shader_panics() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();
        let mut pass = ScenePass::new(PassConfig::default().with_shaders(true));
        let a = list(1);
        let dynamic = [&a];
        let _ = pass.render(&mut ctxt, &mut glstate, &DrawLists::dynamic(&dynamic), &mut io::sink());
    }

    #[test]
    fn test_driver_errors_are_reported_with_checkpoint() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();
        let mut pass = ScenePass::default();
        let mut errors = Vec::new();
        ctxt.push_error(DriverError::InvalidOperation);

        pass.render(&mut ctxt, &mut glstate, &DrawLists::dynamic(&[]), &mut errors)
            .unwrap();

        assert_eq!(
            String::from_utf8(errors).unwrap(),
            "OpenGL error \"invalid operation\" during: scene begin\n"
        );
    }

    fn render_with(config: PassConfig, dynamic: &[&Drawable]) -> (ScenePass, RecordingContext) {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();
        let mut pass = ScenePass::new(config);
        pass.render(&mut ctxt, &mut glstate, &DrawLists::dynamic(dynamic), &mut io::sink())
            .unwrap();
        (pass, ctxt)
    }

    #[test]
    fn test_depth_func_follows_depth_mode() {
        let (_, ctxt) = render_with(PassConfig::default(), &[]);
        assert_eq!(ctxt.count(|c| *c == Command::DepthFunc(CompareFunc::LessEqual)), 1);
        assert_eq!(ctxt.count(|c| *c == Command::DepthFunc(CompareFunc::Equal)), 0);

        let (_, ctxt) = render_with(PassConfig::default().with_depth_mode_equal(true), &[]);
        assert_eq!(ctxt.count(|c| *c == Command::DepthFunc(CompareFunc::Equal)), 1);
        assert_eq!(ctxt.count(|c| *c == Command::DepthFunc(CompareFunc::LessEqual)), 0);
    }

    #[test]
    fn test_clear_uses_one_combined_mask() {
        let clears = |color, depth| {
            let (_, ctxt) = render_with(PassConfig::default().with_clear(color, depth), &[]);
            ctxt.commands()
                .iter()
                .filter_map(|c| match c {
                    Command::Clear(mask) => Some(*mask),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(clears(true, false), vec![ClearMask::COLOR]);
        assert_eq!(clears(false, true), vec![ClearMask::DEPTH]);
        assert_eq!(clears(true, true), vec![ClearMask::COLOR | ClearMask::DEPTH]);
        assert!(clears(false, false).is_empty());
    }

    #[test]
    fn test_ortho_bounds_replace_perspective() {
        let bounds = OrthoBounds::new(Vec3::new(-10.0, -10.0, -1.0), Vec3::new(10.0, 10.0, 100.0));
        let (pass, ctxt) = render_with(PassConfig::default().with_ortho(Some(bounds)), &[]);

        assert_eq!(ctxt.matrix(MatrixMode::Projection, 0), bounds.projection());
        assert_ne!(bounds.projection(), pass.camera().projection(None));
        assert_eq!(
            pass.frustum(),
            &Frustum::from_matrices(&bounds.projection(), &pass.camera().view())
        );
    }

    #[test]
    fn test_disabled_color_writes_are_masked() {
        let a = list(1);
        let (_, ctxt) = render_with(PassConfig::default().with_write_color(false), &[&a]);

        assert_eq!(ctxt.count(|c| *c == Command::ColorMask(false)), 1);
        assert_eq!(ctxt.count(|c| *c == Command::ColorMask(true)), 0);
    }

    #[test]
    fn test_smoke_is_drawn_without_depth_test() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();
        let mut pass = shaded_pass();
        let solid = list(1).with_flags(DrawFlags::LIT);
        let smoke = list(2)
            .with_flags(DrawFlags::SMOKE | DrawFlags::LIT)
            .with_transform(Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)));
        let dynamic = [&solid, &smoke];

        pass.render(&mut ctxt, &mut glstate, &DrawLists::dynamic(&dynamic), &mut io::sink())
            .unwrap();

        let smoke_draw = ctxt
            .commands()
            .iter()
            .position(|c| *c == Command::CallList(ListId(2)))
            .unwrap();
        assert_eq!(
            ctxt.commands()[..smoke_draw]
                .iter()
                .rev()
                .find(|c| matches!(
                    c,
                    Command::Enable(Capability::DepthTest) | Command::Disable(Capability::DepthTest)
                )),
            Some(&Command::Disable(Capability::DepthTest))
        );
        assert!(!ctxt.is_enabled(Capability::DepthTest));
    }

    #[test]
    fn test_vertex_arrays_enable_present_attributes_only() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();
        let array = VertexArray::new(vec![0.0; 9], vec![0, 1, 2]).with_tex_coords(vec![0.0; 6]);
        let d = Drawable::new(Geometry::Vertices(Arc::new(array)));

        dispatch_geometry(&mut ctxt, &mut glstate, &d);

        assert_eq!(
            ctxt.commands(),
            &[
                Command::EnableClientState(ClientArray::Vertex),
                Command::VertexPointer(9),
                Command::EnableClientState(ClientArray::TexCoord),
                Command::TexCoordPointer(6),
                Command::DrawTriangles(3),
                Command::DisableClientState(ClientArray::Vertex),
                Command::DisableClientState(ClientArray::Normal),
                Command::DisableClientState(ClientArray::TexCoord),
            ]
        );
    }

    #[test]
    fn test_empty_line_draws_nothing() {
        let mut ctxt = RecordingContext::new();
        let mut glstate = GlStateCache::new();

        dispatch_geometry(&mut ctxt, &mut glstate, &Drawable::new(Geometry::Line(vec![])));
        assert!(ctxt.commands().is_empty());

        let line = Drawable::new(Geometry::Line(vec![Vec3::ZERO, Vec3::Y])).with_line_width(3.0);
        dispatch_geometry(&mut ctxt, &mut glstate, &line);
        assert!(ctxt.is_enabled(Capability::LineSmooth));
        assert_eq!(ctxt.count(|c| *c == Command::LineWidth(3.0)), 1);
        assert_eq!(
            ctxt.count(|c| *c == Command::DrawLineStrip(vec![Vec3::ZERO, Vec3::Y])),
            1
        );
    }
}
