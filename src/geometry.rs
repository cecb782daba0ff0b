use bytemuck::{Pod, Zeroable};

/// Interleaved vertex as uploaded to the GPU: position, normal, texture
/// coordinate. Immutable once uploaded.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Position-only vertex used by the skybox cube.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SkyVertex {
    pub position: [f32; 3],
}

impl SkyVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SkyVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Screen-space vertex for the full-screen post-process quad.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl QuadVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Triangle count of the unit cube times three.
pub const CUBE_VERTEX_COUNT: u32 = 36;

pub const SKYBOX_VERTEX_COUNT: u32 = 36;

pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Unindexed unit cube, 12 triangles, interleaved position/normal/uv.
#[rustfmt::skip]
const CUBE_VERTEX_DATA: [f32; 36 * 8] = [
    // back face (-Z)
    -0.5, -0.5, -0.5,  0.0,  0.0, -1.0,  0.0, 0.0,
     0.5, -0.5, -0.5,  0.0,  0.0, -1.0,  1.0, 0.0,
     0.5,  0.5, -0.5,  0.0,  0.0, -1.0,  1.0, 1.0,
     0.5,  0.5, -0.5,  0.0,  0.0, -1.0,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0,  0.0, -1.0,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0,  0.0, -1.0,  0.0, 0.0,
    // front face (+Z)
    -0.5, -0.5,  0.5,  0.0,  0.0,  1.0,  0.0, 0.0,
     0.5, -0.5,  0.5,  0.0,  0.0,  1.0,  1.0, 0.0,
     0.5,  0.5,  0.5,  0.0,  0.0,  1.0,  1.0, 1.0,
     0.5,  0.5,  0.5,  0.0,  0.0,  1.0,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0,  0.0,  1.0,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0,  0.0,  1.0,  0.0, 0.0,
    // left face (-X)
    -0.5,  0.5,  0.5, -1.0,  0.0,  0.0,  1.0, 0.0,
    -0.5,  0.5, -0.5, -1.0,  0.0,  0.0,  1.0, 1.0,
    -0.5, -0.5, -0.5, -1.0,  0.0,  0.0,  0.0, 1.0,
    -0.5, -0.5, -0.5, -1.0,  0.0,  0.0,  0.0, 1.0,
    -0.5, -0.5,  0.5, -1.0,  0.0,  0.0,  0.0, 0.0,
    -0.5,  0.5,  0.5, -1.0,  0.0,  0.0,  1.0, 0.0,
    // right face (+X)
     0.5,  0.5,  0.5,  1.0,  0.0,  0.0,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0,  0.0,  0.0,  1.0, 1.0,
     0.5, -0.5, -0.5,  1.0,  0.0,  0.0,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0,  0.0,  0.0,  0.0, 1.0,
     0.5, -0.5,  0.5,  1.0,  0.0,  0.0,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0,  0.0,  0.0,  1.0, 0.0,
    // bottom face (-Y)
    -0.5, -0.5, -0.5,  0.0, -1.0,  0.0,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, -1.0,  0.0,  1.0, 1.0,
     0.5, -0.5,  0.5,  0.0, -1.0,  0.0,  1.0, 0.0,
     0.5, -0.5,  0.5,  0.0, -1.0,  0.0,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, -1.0,  0.0,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, -1.0,  0.0,  0.0, 1.0,
    // top face (+Y)
    -0.5,  0.5, -0.5,  0.0,  1.0,  0.0,  0.0, 1.0,
     0.5,  0.5, -0.5,  0.0,  1.0,  0.0,  1.0, 1.0,
     0.5,  0.5,  0.5,  0.0,  1.0,  0.0,  1.0, 0.0,
     0.5,  0.5,  0.5,  0.0,  1.0,  0.0,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0,  1.0,  0.0,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0,  1.0,  0.0,  0.0, 1.0,
];

pub fn cube_vertices() -> Vec<Vertex> {
    CUBE_VERTEX_DATA
        .chunks_exact(8)
        .map(|chunk| Vertex {
            position: [chunk[0], chunk[1], chunk[2]],
            normal: [chunk[3], chunk[4], chunk[5]],
            uv: [chunk[6], chunk[7]],
        })
        .collect()
}

/// Unit cube rendered from the inside; the local position doubles as the
/// cubemap sampling direction.
#[rustfmt::skip]
const SKYBOX_VERTEX_DATA: [f32; 36 * 3] = [
    -1.0,  1.0, -1.0,  -1.0, -1.0, -1.0,   1.0, -1.0, -1.0,
     1.0, -1.0, -1.0,   1.0,  1.0, -1.0,  -1.0,  1.0, -1.0,

    -1.0, -1.0,  1.0,  -1.0, -1.0, -1.0,  -1.0,  1.0, -1.0,
    -1.0,  1.0, -1.0,  -1.0,  1.0,  1.0,  -1.0, -1.0,  1.0,

     1.0, -1.0, -1.0,   1.0, -1.0,  1.0,   1.0,  1.0,  1.0,
     1.0,  1.0,  1.0,   1.0,  1.0, -1.0,   1.0, -1.0, -1.0,

    -1.0, -1.0,  1.0,  -1.0,  1.0,  1.0,   1.0,  1.0,  1.0,
     1.0,  1.0,  1.0,   1.0, -1.0,  1.0,  -1.0, -1.0,  1.0,

    -1.0,  1.0, -1.0,   1.0,  1.0, -1.0,   1.0,  1.0,  1.0,
     1.0,  1.0,  1.0,  -1.0,  1.0,  1.0,  -1.0,  1.0, -1.0,

    -1.0, -1.0, -1.0,  -1.0, -1.0,  1.0,   1.0, -1.0, -1.0,
     1.0, -1.0, -1.0,  -1.0, -1.0,  1.0,   1.0, -1.0,  1.0,
];

pub fn skybox_vertices() -> Vec<SkyVertex> {
    SKYBOX_VERTEX_DATA
        .chunks_exact(3)
        .map(|chunk| SkyVertex {
            position: [chunk[0], chunk[1], chunk[2]],
        })
        .collect()
}

/// Full-screen quad in normalized device coordinates, two triangles.
pub fn quad_vertices() -> Vec<QuadVertex> {
    [
        ([-1.0, 1.0], [0.0, 0.0]),
        ([-1.0, -1.0], [0.0, 1.0]),
        ([1.0, -1.0], [1.0, 1.0]),
        ([-1.0, 1.0], [0.0, 0.0]),
        ([1.0, -1.0], [1.0, 1.0]),
        ([1.0, 1.0], [1.0, 0.0]),
    ]
    .into_iter()
    .map(|(position, uv)| QuadVertex { position, uv })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn cube_has_36_unit_normal_vertices() {
        let vertices = cube_vertices();
        assert_eq!(vertices.len(), CUBE_VERTEX_COUNT as usize);
        for vertex in &vertices {
            assert!((Vec3::from(vertex.normal).length() - 1.0).abs() < 1e-6);
            assert!(vertex.uv[0] >= 0.0 && vertex.uv[0] <= 1.0);
            assert!(vertex.uv[1] >= 0.0 && vertex.uv[1] <= 1.0);
        }
    }

    #[test]
    fn cube_corners_sit_on_the_half_unit_box() {
        for vertex in cube_vertices() {
            for component in vertex.position {
                assert!((component.abs() - 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn skybox_and_quad_counts_match_constants() {
        assert_eq!(skybox_vertices().len(), SKYBOX_VERTEX_COUNT as usize);
        assert_eq!(quad_vertices().len(), QUAD_VERTEX_COUNT as usize);
    }

    #[test]
    fn quad_covers_clip_space() {
        let xs: Vec<f32> = quad_vertices().iter().map(|v| v.position[0]).collect();
        assert!(xs.contains(&-1.0) && xs.contains(&1.0));
    }
}
