//! Turns recorded draw commands into a triangle list.
//!
//! Lines become quads, filled circles become fans, stroked circles become
//! rings. Gradients are linear along the line, so splitting a line at each
//! color stop and letting the rasterizer interpolate vertex colors matches
//! the gradient exactly.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::render::DrawCommand;

/// Segments used for circles and rings.
pub const CIRCLE_SEGMENTS: usize = 32;

/// A colored vertex in logical pixel space.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    fn new(position: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Replace the contents of `out` with triangles for `commands`.
///
/// A `Clear` discards everything emitted before it.
pub fn tessellate(commands: &[DrawCommand], out: &mut Vec<Vertex>) {
    out.clear();
    for command in commands {
        match command {
            DrawCommand::Clear { .. } => out.clear(),
            DrawCommand::GradientLine {
                from,
                to,
                stops,
                width,
            } => {
                for pair in stops.windows(2) {
                    let a = from.lerp(*to, pair[0].offset);
                    let b = from.lerp(*to, pair[1].offset);
                    push_quad(out, a, b, *width, pair[0].color.to_array(), pair[1].color.to_array());
                }
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                let color = color.to_array();
                push_quad(out, *from, *to, *width, color, color);
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => push_disc(out, *center, *radius, color.to_array()),
            DrawCommand::StrokeCircle {
                center,
                radius,
                color,
                width,
            } => {
                let half = width * 0.5;
                push_ring(out, *center, (radius - half).max(0.0), radius + half, color.to_array());
            }
        }
    }
}

fn push_quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, width: f32, color_a: [f32; 4], color_b: [f32; 4]) {
    let dir = b - a;
    if dir.length_squared() == 0.0 || width <= 0.0 {
        return;
    }
    let n = dir.normalize().perp() * (width * 0.5);

    out.extend_from_slice(&[
        Vertex::new(a + n, color_a),
        Vertex::new(a - n, color_a),
        Vertex::new(b + n, color_b),
        Vertex::new(b + n, color_b),
        Vertex::new(a - n, color_a),
        Vertex::new(b - n, color_b),
    ]);
}

fn circle_point(center: Vec2, radius: f32, segment: usize) -> Vec2 {
    let angle = segment as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
    center + Vec2::from_angle(angle) * radius
}

fn push_disc(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4]) {
    if radius <= 0.0 {
        return;
    }
    for i in 0..CIRCLE_SEGMENTS {
        out.extend_from_slice(&[
            Vertex::new(center, color),
            Vertex::new(circle_point(center, radius, i), color),
            Vertex::new(circle_point(center, radius, i + 1), color),
        ]);
    }
}

fn push_ring(out: &mut Vec<Vertex>, center: Vec2, inner: f32, outer: f32, color: [f32; 4]) {
    if outer <= inner {
        return;
    }
    for i in 0..CIRCLE_SEGMENTS {
        let i0 = circle_point(center, inner, i);
        let i1 = circle_point(center, inner, i + 1);
        let o0 = circle_point(center, outer, i);
        let o1 = circle_point(center, outer, i + 1);
        out.extend_from_slice(&[
            Vertex::new(o0, color),
            Vertex::new(i0, color),
            Vertex::new(o1, color),
            Vertex::new(o1, color),
            Vertex::new(i0, color),
            Vertex::new(i1, color),
        ]);
    }
}
