//! Thin wrappers over the SDL2 window and the OpenGL objects the playground needs:
//! application setup, shaders, meshes and textures.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
