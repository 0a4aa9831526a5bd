use crate::camera::OrthoBounds;

/// Options of a [`ScenePass`](crate::renderer::ScenePass).
///
/// # Examples
/// ```
/// # use trackside::renderer::PassConfig;
/// let config = PassConfig::default()
///     .with_shaders(true)
///     .with_clear(true, true)
///     .with_fsaa(4);
/// assert!(config.write_depth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PassConfig {
    /// Draw with the shader slots instead of the fixed-function pipeline.
    pub shaders: bool,
    /// Clear the color buffer before drawing.
    pub clear_color: bool,
    /// Clear the depth buffer before drawing.
    pub clear_depth: bool,
    /// Orthographic bounds replacing the perspective projection.
    pub ortho: Option<OrthoBounds>,
    /// Depth test with "equal" instead of "less or equal".
    pub depth_mode_equal: bool,
    /// Write to the color buffer.
    pub write_color: bool,
    /// Write to the depth buffer.
    pub write_depth: bool,
    /// Multisample count of the render target.
    pub fsaa: u32,
    /// Fixed-function texture environment blending toward the flat color.
    pub paint_combiner: bool,
    /// Value of the `contrast` shader parameter.
    pub contrast: f32,
}

impl Default for PassConfig {
    fn default() -> Self {
        PassConfig {
            shaders: false,
            clear_color: false,
            clear_depth: false,
            ortho: None,
            depth_mode_equal: false,
            write_color: true,
            write_depth: true,
            fsaa: 1,
            paint_combiner: false,
            contrast: 1.0,
        }
    }
}

impl PassConfig {
    /// Enables or disables the shader slots.
    pub fn with_shaders(mut self, shaders: bool) -> Self {
        self.shaders = shaders;
        self
    }

    /// Sets which buffers are cleared at the start of the pass.
    pub fn with_clear(mut self, color: bool, depth: bool) -> Self {
        self.clear_color = color;
        self.clear_depth = depth;
        self
    }

    /// Sets the orthographic bounds, or `None` for a perspective projection.
    pub fn with_ortho(mut self, ortho: Option<OrthoBounds>) -> Self {
        self.ortho = ortho;
        self
    }

    /// Selects the "equal" depth test instead of "less or equal".
    pub fn with_depth_mode_equal(mut self, equal: bool) -> Self {
        self.depth_mode_equal = equal;
        self
    }

    /// Enables or disables color writes.
    pub fn with_write_color(mut self, write: bool) -> Self {
        self.write_color = write;
        self
    }

    /// Enables or disables depth writes.
    pub fn with_write_depth(mut self, write: bool) -> Self {
        self.write_depth = write;
        self
    }

    /// Sets the multisample count of the render target.
    pub fn with_fsaa(mut self, samples: u32) -> Self {
        self.fsaa = samples;
        self
    }

    /// Enables the paint texture combiner of the fixed-function path.
    pub fn with_paint_combiner(mut self, paint: bool) -> Self {
        self.paint_combiner = paint;
        self
    }

    /// Sets the `contrast` shader parameter.
    pub fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }
}
