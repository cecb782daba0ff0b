use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use glam::{Vec2, Vec3};

use crate::geometry::Vertex;

/// GPU ready mesh produced from an OBJ file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl ObjMesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Parses an OBJ file from memory into an indexed vertex list.
///
/// Polygon faces are fan-triangulated; missing normals are generated from
/// face geometry, and missing texture coordinates default to the origin.
pub fn load_obj_from_str(data: &str) -> Result<ObjMesh> {
    let mut positions = Vec::new();
    let mut texcoords = Vec::new();
    let mut normals = Vec::new();
    let mut faces: Vec<[FaceIndex; 3]> = Vec::new();

    for (line_no, line) in data.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut parts = trimmed.split_whitespace();
        let Some(tag) = parts.next() else {
            continue;
        };
        match tag {
            "v" => positions.push(
                parse_vec3(parts)
                    .with_context(|| format!("invalid vertex on line {}", line_no + 1))?,
            ),
            "vt" => texcoords.push(
                parse_vec2(parts)
                    .with_context(|| format!("invalid texcoord on line {}", line_no + 1))?,
            ),
            "vn" => normals.push(
                parse_vec3(parts)
                    .with_context(|| format!("invalid normal on line {}", line_no + 1))?,
            ),
            "f" => {
                let polygon = parse_face(parts)
                    .with_context(|| format!("invalid face on line {}", line_no + 1))?;
                triangulate_face(&polygon, &mut faces);
            }
            _ => {}
        }
    }

    if positions.is_empty() {
        return Err(anyhow!("OBJ file does not define any vertices"));
    }

    let mut mesh = build_mesh(&positions, &texcoords, &normals, &faces)?;
    if needs_normals(&mesh.vertices) {
        compute_normals(&mut mesh);
    }
    Ok(mesh)
}

fn parse_vec3<'a>(mut parts: impl Iterator<Item = &'a str>) -> Result<Vec3> {
    let x = next_component(&mut parts)?;
    let y = next_component(&mut parts)?;
    let z = next_component(&mut parts)?;
    Ok(Vec3::new(x, y, z))
}

fn parse_vec2<'a>(mut parts: impl Iterator<Item = &'a str>) -> Result<Vec2> {
    let u = next_component(&mut parts)?;
    let v = next_component(&mut parts)?;
    Ok(Vec2::new(u, v))
}

fn next_component<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<f32> {
    Ok(parts
        .next()
        .ok_or_else(|| anyhow!("missing vector component"))?
        .parse::<f32>()?)
}

fn parse_face<'a>(parts: impl Iterator<Item = &'a str>) -> Result<Vec<FaceIndex>> {
    let mut indices = Vec::new();
    for part in parts {
        let mut segments = part.split('/');
        let v = segments
            .next()
            .ok_or_else(|| anyhow!("missing vertex index"))?
            .parse::<i32>()?;
        let vt = parse_optional_index(segments.next());
        let vn = parse_optional_index(segments.next());
        indices.push(FaceIndex { v, vt, vn });
    }
    if indices.len() < 3 {
        return Err(anyhow!("faces must reference at least 3 vertices"));
    }
    Ok(indices)
}

fn parse_optional_index(segment: Option<&str>) -> i32 {
    segment
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i32>().ok())
        .unwrap_or(0)
}

fn triangulate_face(polygon: &[FaceIndex], faces: &mut Vec<[FaceIndex; 3]>) {
    if polygon.len() < 3 {
        return;
    }
    for i in 1..(polygon.len() - 1) {
        faces.push([polygon[0], polygon[i], polygon[i + 1]]);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Key {
    position: usize,
    texcoord: Option<usize>,
    normal: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct FaceIndex {
    v: i32,
    vt: i32,
    vn: i32,
}

fn build_mesh(
    positions: &[Vec3],
    texcoords: &[Vec2],
    normals: &[Vec3],
    faces: &[[FaceIndex; 3]],
) -> Result<ObjMesh> {
    let mut lookup: HashMap<Key, u32> = HashMap::new();
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut indices = Vec::new();

    for face in faces {
        for idx in face {
            let pos_index =
                fix_index(idx.v, positions.len()).ok_or_else(|| anyhow!("invalid vertex index"))?;
            let texcoord_index = fix_index(idx.vt, texcoords.len());
            let normal_index = fix_index(idx.vn, normals.len());
            let key = Key {
                position: pos_index,
                texcoord: texcoord_index,
                normal: normal_index,
            };
            let next_index = vertices.len() as u32;
            let entry = lookup.entry(key).or_insert_with(|| {
                let normal = normal_index.map(|i| normals[i]).unwrap_or(Vec3::ZERO);
                let uv = texcoord_index.map(|i| texcoords[i]).unwrap_or(Vec2::ZERO);
                vertices.push(Vertex {
                    position: positions[pos_index].to_array(),
                    normal: normal.to_array(),
                    uv: uv.to_array(),
                });
                next_index
            });
            indices.push(*entry);
        }
    }

    Ok(ObjMesh { vertices, indices })
}

fn fix_index(index: i32, len: usize) -> Option<usize> {
    if index > 0 {
        let zero_based = index as usize - 1;
        (zero_based < len).then_some(zero_based)
    } else if index < 0 {
        let abs = (-index) as usize;
        (abs <= len).then_some(len - abs)
    } else {
        None
    }
}

fn needs_normals(vertices: &[Vertex]) -> bool {
    vertices.iter().any(|vertex| vertex.normal == [0.0; 3])
}

fn compute_normals(mesh: &mut ObjMesh) {
    let mut accum = vec![Vec3::ZERO; mesh.vertices.len()];

    for triangle in mesh.indices.chunks_exact(3) {
        let i0 = triangle[0] as usize;
        let i1 = triangle[1] as usize;
        let i2 = triangle[2] as usize;
        let p0 = Vec3::from(mesh.vertices[i0].position);
        let p1 = Vec3::from(mesh.vertices[i1].position);
        let p2 = Vec3::from(mesh.vertices[i2].position);
        let normal = (p1 - p0).cross(p2 - p0);
        if normal.length_squared() > f32::EPSILON {
            let normal = normal.normalize();
            accum[i0] += normal;
            accum[i1] += normal;
            accum[i2] += normal;
        }
    }

    for (vertex, normal) in mesh.vertices.iter_mut().zip(accum) {
        vertex.normal = normal.normalize_or_zero().to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_triangle() {
        let obj = "\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = load_obj_from_str(obj).unwrap();
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.vertices.len(), 3);
    }

    #[test]
    fn computes_missing_normals() {
        let obj = "\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = load_obj_from_str(obj).unwrap();
        for vertex in &mesh.vertices {
            assert!((Vec3::from(vertex.normal).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn resolves_texcoords_per_face_corner() {
        let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\nvn 0 0 1\nf 1/1/1 2/2/1 3/3/1\n";
        let mesh = load_obj_from_str(obj).unwrap();
        assert_eq!(mesh.vertices[1].uv, [1.0, 0.0]);
        assert_eq!(mesh.vertices[2].uv, [0.0, 1.0]);
    }

    #[test]
    fn quads_are_triangulated() {
        let obj = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let mesh = load_obj_from_str(obj).unwrap();
        assert_eq!(mesh.indices.len(), 6);
    }

    #[test]
    fn negative_indices_count_from_the_end() {
        let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n";
        let mesh = load_obj_from_str(obj).unwrap();
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(load_obj_from_str("# nothing here\n").is_err());
    }
}
