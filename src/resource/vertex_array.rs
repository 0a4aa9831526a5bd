//! CPU-side indexed triangle buffers.

/// Indexed triangle geometry kept in client memory.
///
/// Positions and normals are tightly packed 3-component floats, texture
/// coordinates tightly packed 2-component floats. Only the first texture
/// coordinate set is used for drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexArray {
    vertices: Vec<f32>,
    normals: Vec<f32>,
    tex_coords: Vec<Vec<f32>>,
    faces: Vec<u32>,
}

impl VertexArray {
    /// Creates a vertex array from positions and triangle indices.
    pub fn new(vertices: Vec<f32>, faces: Vec<u32>) -> Self {
        VertexArray {
            vertices,
            faces,
            ..Default::default()
        }
    }

    /// Sets the per-vertex normals.
    pub fn with_normals(mut self, normals: Vec<f32>) -> Self {
        self.normals = normals;
        self
    }

    /// Adds a texture coordinate set.
    pub fn with_tex_coords(mut self, tex_coords: Vec<f32>) -> Self {
        self.tex_coords.push(tex_coords);
        self
    }

    /// Packed positions.
    #[inline]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Packed normals, possibly empty.
    #[inline]
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Number of texture coordinate sets.
    #[inline]
    pub fn tex_coord_sets(&self) -> usize {
        self.tex_coords.len()
    }

    /// The texture coordinate set `set`, if present.
    #[inline]
    pub fn tex_coords(&self, set: usize) -> Option<&[f32]> {
        self.tex_coords.get(set).map(Vec::as_slice)
    }

    /// Triangle indices.
    #[inline]
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }
}
