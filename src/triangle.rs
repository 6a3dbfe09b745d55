//! The hardcoded triangle drawn by the static shader program.

use std::sync::Arc;

use glam::Vec3;
use glow::HasContext;

use crate::abs::{Mesh, Vertex};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionVertex {
    pub position: Vec3,
}

impl Vertex for PositionVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<PositionVertex>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        }
    }
}

pub const TRIANGLE_VERTICES: [PositionVertex; 3] = [
    PositionVertex {
        position: Vec3::new(-0.5, -0.5, 0.0),
    },
    PositionVertex {
        position: Vec3::new(0.5, -0.5, 0.0),
    },
    PositionVertex {
        position: Vec3::new(0.0, 0.5, 0.0),
    },
];

pub const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

pub fn triangle_mesh(gl: &Arc<glow::Context>) -> Result<Mesh, String> {
    Mesh::new(gl, &TRIANGLE_VERTICES, &TRIANGLE_INDICES, glow::TRIANGLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_counter_clockwise() {
        let [a, b, c] = TRIANGLE_VERTICES.map(|v| v.position);
        let normal = (b - a).cross(c - a);
        assert!(normal.z > 0.0);
    }

    #[test]
    fn triangle_stays_inside_clip_space() {
        for v in TRIANGLE_VERTICES {
            assert!(v.position.abs().max_element() <= 1.0);
        }
    }

    #[test]
    fn vertex_has_no_padding() {
        assert_eq!(std::mem::size_of::<PositionVertex>(), 12);
    }
}
