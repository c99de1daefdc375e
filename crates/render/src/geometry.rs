//! Unit cube, two triangles per face, interleaved position + texcoord.

pub const COORDS_PER_VERTEX: usize = 3;
pub const TEX_COORDS_PER_VERTEX: usize = 2;
pub const FLOATS_PER_VERTEX: usize = COORDS_PER_VERTEX + TEX_COORDS_PER_VERTEX;

/// Bytes between consecutive vertices.
pub const STRIDE: i32 = (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as i32;
/// Byte offset of the position within a vertex.
pub const POSITION_OFFSET: i32 = 0;
/// Byte offset of the texture coordinate within a vertex.
pub const TEX_COORD_OFFSET: i32 = (COORDS_PER_VERTEX * std::mem::size_of::<f32>()) as i32;

pub const VERTEX_COUNT: usize = CUBE_VERTICES.len() / FLOATS_PER_VERTEX;

#[rustfmt::skip]
pub const CUBE_VERTICES: [f32; 180] = [
    //  X,    Y,    Z,   U,   V
    // Bottom
    -1.0, -1.0, -1.0, 0.0, 0.0,
     1.0, -1.0, -1.0, 1.0, 0.0,
    -1.0, -1.0,  1.0, 0.0, 1.0,
     1.0, -1.0, -1.0, 1.0, 0.0,
     1.0, -1.0,  1.0, 1.0, 1.0,
    -1.0, -1.0,  1.0, 0.0, 1.0,

    // Top
    -1.0,  1.0, -1.0, 0.0, 0.0,
    -1.0,  1.0,  1.0, 0.0, 1.0,
     1.0,  1.0, -1.0, 1.0, 0.0,
     1.0,  1.0, -1.0, 1.0, 0.0,
    -1.0,  1.0,  1.0, 0.0, 1.0,
     1.0,  1.0,  1.0, 1.0, 1.0,

    // Front
    -1.0, -1.0,  1.0, 1.0, 0.0,
     1.0, -1.0,  1.0, 0.0, 0.0,
    -1.0,  1.0,  1.0, 1.0, 1.0,
     1.0, -1.0,  1.0, 0.0, 0.0,
     1.0,  1.0,  1.0, 0.0, 1.0,
    -1.0,  1.0,  1.0, 1.0, 1.0,

    // Back
    -1.0, -1.0, -1.0, 0.0, 0.0,
    -1.0,  1.0, -1.0, 0.0, 1.0,
     1.0, -1.0, -1.0, 1.0, 0.0,
     1.0, -1.0, -1.0, 1.0, 0.0,
    -1.0,  1.0, -1.0, 0.0, 1.0,
     1.0,  1.0, -1.0, 1.0, 1.0,

    // Left
    -1.0, -1.0,  1.0, 0.0, 1.0,
    -1.0,  1.0, -1.0, 1.0, 0.0,
    -1.0, -1.0, -1.0, 0.0, 0.0,
    -1.0, -1.0,  1.0, 0.0, 1.0,
    -1.0,  1.0,  1.0, 1.0, 1.0,
    -1.0,  1.0, -1.0, 1.0, 0.0,

    // Right
     1.0, -1.0,  1.0, 1.0, 1.0,
     1.0, -1.0, -1.0, 1.0, 0.0,
     1.0,  1.0, -1.0, 0.0, 0.0,
     1.0, -1.0,  1.0, 1.0, 1.0,
     1.0,  1.0, -1.0, 0.0, 0.0,
     1.0,  1.0,  1.0, 0.0, 1.0,
];
