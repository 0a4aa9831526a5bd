//! Handles to GPU resources owned by the asset and shader layers.

pub use crate::resource::shader::{Shader, ShaderSet, ShaderSlot};
pub use crate::resource::texture::Texture;
pub use crate::resource::vertex_array::VertexArray;

mod shader;
mod texture;
mod vertex_array;
