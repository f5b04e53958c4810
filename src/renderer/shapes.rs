//! Shape registry - immutable cube and axis geometry
//!
//! All shapes are expanded into one shared vertex list at startup; each
//! shape records its range and primitive kind so draws are just vertex
//! ranges into a single static buffer.

use crate::scene::ShapeId;

/// Vertex structure for rendering colored shapes
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// How a shape's vertex range is interpreted by the pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Lines,
    LineStrip,
    Triangles,
}

/// A shape's slice of the shared vertex buffer
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    pub start: u32,
    pub count: u32,
    pub kind: PrimitiveKind,
}

/// All registered shapes, keyed by `ShapeId`
pub struct ShapeSet {
    wire_cube: Shape,
    solid_cube: Shape,
    axes: Shape,
}

impl ShapeSet {
    pub fn get(&self, id: ShapeId) -> Shape {
        match id {
            ShapeId::WireCube => self.wire_cube,
            ShapeId::SolidCube => self.solid_cube,
            ShapeId::Axes => self.axes,
        }
    }
}

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const LIGHT_RED: [f32; 4] = [1.0, 0.5, 0.5, 1.0];
const LIGHT_GREEN: [f32; 4] = [0.5, 1.0, 0.5, 1.0];
const LIGHT_BLUE: [f32; 4] = [0.5, 0.5, 1.0, 1.0];

/// Corners of a unit cube centered at the origin
const CUBE_VERTS: [[f32; 3]; 8] = [
    [0.5, 0.5, 0.5],    // 0
    [0.5, 0.5, -0.5],   // 1
    [0.5, -0.5, 0.5],   // 2
    [0.5, -0.5, -0.5],  // 3
    [-0.5, 0.5, 0.5],   // 4
    [-0.5, 0.5, -0.5],  // 5
    [-0.5, -0.5, 0.5],  // 6
    [-0.5, -0.5, -0.5], // 7
];

/// Line-strip walk over the cube edges, five corners per face loop
#[rustfmt::skip]
const WIRE_CUBE_LOOKUPS: [usize; 30] = [
    0, 4, 6, 2, 0, // front
    1, 0, 2, 3, 1, // right
    5, 1, 3, 7, 5, // back
    4, 5, 7, 6, 4, // left
    4, 0, 1, 5, 4, // top
    6, 7, 3, 2, 6, // bottom
];

/// Two triangles per face, counter-clockwise from outside
#[rustfmt::skip]
const SOLID_CUBE_LOOKUPS: [usize; 36] = [
    0, 4, 6, 0, 6, 2, // front
    1, 0, 2, 1, 2, 3, // right
    5, 1, 3, 5, 3, 7, // back
    4, 5, 7, 4, 7, 6, // left
    4, 0, 1, 4, 1, 5, // top
    6, 7, 3, 6, 3, 2, // bottom
];

/// One flat color per solid-cube face so the 3D shape reads without lighting
const FACE_COLORS: [[f32; 4]; 6] = [LIGHT_BLUE, LIGHT_GREEN, LIGHT_RED, BLUE, RED, GREEN];

/// Expand the shape tables into one vertex list and a registry over it
pub fn build_shapes() -> (ShapeSet, Vec<Vertex>) {
    let mut vertices = Vec::with_capacity(WIRE_CUBE_LOOKUPS.len() + SOLID_CUBE_LOOKUPS.len() + 6);

    let wire_start = vertices.len() as u32;
    for &corner in WIRE_CUBE_LOOKUPS.iter() {
        vertices.push(Vertex {
            position: CUBE_VERTS[corner],
            color: WHITE,
        });
    }
    let wire_cube = Shape {
        start: wire_start,
        count: vertices.len() as u32 - wire_start,
        kind: PrimitiveKind::LineStrip,
    };

    let solid_start = vertices.len() as u32;
    for (i, &corner) in SOLID_CUBE_LOOKUPS.iter().enumerate() {
        vertices.push(Vertex {
            position: CUBE_VERTS[corner],
            color: FACE_COLORS[i / 6], // 6 vertices per face
        });
    }
    let solid_cube = Shape {
        start: solid_start,
        count: vertices.len() as u32 - solid_start,
        kind: PrimitiveKind::Triangles,
    };

    // Three axes: x green, y red, z blue
    let axes_start = vertices.len() as u32;
    let axis_lines: [([f32; 3], [f32; 3], [f32; 4]); 3] = [
        ([2.0, 0.0, 0.0], [-2.0, 0.0, 0.0], GREEN),
        ([0.0, 2.0, 0.0], [0.0, -2.0, 0.0], RED),
        ([0.0, 0.0, 2.0], [0.0, 0.0, -2.0], BLUE),
    ];
    for (a, b, color) in axis_lines.iter() {
        vertices.push(Vertex {
            position: *a,
            color: *color,
        });
        vertices.push(Vertex {
            position: *b,
            color: *color,
        });
    }
    let axes = Shape {
        start: axes_start,
        count: vertices.len() as u32 - axes_start,
        kind: PrimitiveKind::Lines,
    };

    (
        ShapeSet {
            wire_cube,
            solid_cube,
            axes,
        },
        vertices,
    )
}
