//! Drawing one glyph bitmap onto a textured unit quad.

use std::sync::Arc;

use glam::{Vec2, Vec4};
use glow::HasContext;

use crate::{
    abs::{Mesh, ShaderProgram, Texture, Vertex},
    font::GlyphBitmap,
};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadVertex {
    pub position: Vec2,
    pub uv: Vec2,
}

impl Vertex for QuadVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<QuadVertex>() as i32;
            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, stride, 0);
            // UV attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(
                1,
                2,
                glow::FLOAT,
                false,
                stride,
                std::mem::size_of::<Vec2>() as i32,
            );
        }
    }
}

pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// The unit quad from the origin to `(1, 1)` in clip space.
///
/// V is flipped so that bitmap row 0 lands at the top edge.
pub fn quad_vertices() -> [QuadVertex; 4] {
    [
        QuadVertex {
            position: Vec2::new(0.0, 0.0),
            uv: Vec2::new(0.0, 1.0),
        },
        QuadVertex {
            position: Vec2::new(1.0, 0.0),
            uv: Vec2::new(1.0, 1.0),
        },
        QuadVertex {
            position: Vec2::new(1.0, 1.0),
            uv: Vec2::new(1.0, 0.0),
        },
        QuadVertex {
            position: Vec2::new(0.0, 1.0),
            uv: Vec2::new(0.0, 0.0),
        },
    ]
}

/// Draws a glyph bitmap stretched over the unit quad.
pub struct GlyphRenderer {
    gl: Arc<glow::Context>,
    shader_program: ShaderProgram,
    quad: Mesh,
}

impl GlyphRenderer {
    pub fn new(gl: &Arc<glow::Context>, shader_program: ShaderProgram) -> Result<Self, String> {
        let quad = Mesh::new(gl, &quad_vertices(), &QUAD_INDICES, glow::TRIANGLES)?;
        Ok(Self {
            gl: Arc::clone(gl),
            shader_program,
            quad,
        })
    }

    /// Uploads `bitmap` into a fresh texture, draws it tinted with `color`, then frees the
    /// texture again.
    pub fn draw(&self, bitmap: &GlyphBitmap, color: Vec4) -> Result<(), String> {
        if bitmap.is_empty() {
            return Ok(());
        }

        let texture = Texture::from_glyph(&self.gl, bitmap)?;
        log::trace!("Uploaded {}x{} glyph texture", texture.width(), texture.height());

        unsafe {
            self.gl.enable(glow::BLEND);
            self.gl
                .blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
        }

        texture.bind(0);
        self.shader_program.use_program();
        self.shader_program.set_uniform("u_tex", 0);
        self.shader_program.set_uniform("u_color", color);
        self.quad.draw();

        unsafe {
            self.gl.disable(glow::BLEND);
            self.gl.bind_texture(glow::TEXTURE_2D, None);
        }

        Ok(())
    }
}
