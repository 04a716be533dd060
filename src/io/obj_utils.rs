// Copyright @yucwang 2023

use crate::math::constants::{ Vector2f, Vector3f };

use std::fmt;
use std::fs;
use std::path::Path;

use wavefront_obj::{ obj, ParseError };

#[derive(Debug)]
pub enum ObjLoadError {
    Io(std::io::Error),
    Parse(ParseError),
    IndexOutOfRange { what: &'static str, index: usize, len: usize },
}

impl From<std::io::Error> for ObjLoadError {
    fn from(err: std::io::Error) -> Self {
        ObjLoadError::Io(err)
    }
}

impl From<ParseError> for ObjLoadError {
    fn from(err: ParseError) -> Self {
        ObjLoadError::Parse(err)
    }
}

impl fmt::Display for ObjLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjLoadError::Io(err) => write!(f, "io error: {}", err),
            ObjLoadError::Parse(err) => write!(f, "parse error: {}", err),
            ObjLoadError::IndexOutOfRange { what, index, len } =>
                write!(f, "{} index {} out of range (have {})", what, index, len),
        }
    }
}

impl std::error::Error for ObjLoadError {}

/// One triangle corner, indexing into the flattened attribute arrays.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FaceVertex {
    pub position: usize,
    pub uv: Option<usize>,
    pub normal: Option<usize>,
}

/// All objects of an OBJ file merged into one indexed triangle list.
#[derive(Debug, Default, Clone)]
pub struct ObjMeshData {
    pub positions: Vec<Vector3f>,
    pub uvs: Vec<Vector2f>,
    pub normals: Vec<Vector3f>,
    pub faces: Vec<[FaceVertex; 3]>,
}

pub fn load_obj_from_str<S: AsRef<str>>(input: S) -> Result<ObjMeshData, ObjLoadError> {
    let obj_set = obj::parse(fan_triangulate(input.as_ref()))?;
    let mut data = ObjMeshData::default();

    for object in obj_set.objects {
        let base_p = data.positions.len();
        let base_uv = data.uvs.len();
        let base_n = data.normals.len();
        let (np, nuv, nn) = (object.vertices.len(), object.tex_vertices.len(), object.normals.len());

        data.positions.extend(object.vertices.iter().map(|v| Vector3f::new(v.x as f32, v.y as f32, v.z as f32)));
        data.uvs.extend(object.tex_vertices.iter().map(|vt| Vector2f::new(vt.u as f32, vt.v as f32)));
        data.normals.extend(object.normals.iter().map(|vn| Vector3f::new(vn.x as f32, vn.y as f32, vn.z as f32)));

        let mut skipped = 0usize;
        for geom in object.geometry {
            for shape in geom.shapes {
                if let obj::Primitive::Triangle(a, b, c) = shape.primitive {
                    let mut face = [FaceVertex { position: 0, uv: None, normal: None }; 3];
                    for (slot, corner) in face.iter_mut().zip([a, b, c].iter()) {
                        *slot = FaceVertex {
                            position: base_p + check_index("position", corner.0, np)?,
                            uv: match corner.1 {
                                Some(i) => Some(base_uv + check_index("uv", i, nuv)?),
                                None => None,
                            },
                            normal: match corner.2 {
                                Some(i) => Some(base_n + check_index("normal", i, nn)?),
                                None => None,
                            },
                        };
                    }
                    data.faces.push(face);
                } else {
                    skipped += 1;
                }
            }
        }

        log::debug!("OBJ object '{}': {} positions, {} uvs, {} normals, {} non-triangle primitives skipped.",
                    object.name, np, nuv, nn, skipped);
    }

    Ok(data)
}

pub fn load_obj_from_file<P: AsRef<Path>>(path: P) -> Result<ObjMeshData, ObjLoadError> {
    log::info!("Starting reading OBJ mesh from: {}.", path.as_ref().display());
    let text = fs::read_to_string(path)?;
    load_obj_from_str(text)
}

fn check_index(what: &'static str, index: usize, len: usize) -> Result<usize, ObjLoadError> {
    if index < len {
        Ok(index)
    } else {
        Err(ObjLoadError::IndexOutOfRange { what, index, len })
    }
}

// The parser only takes triangles, so polygons become fans around their
// first corner.
fn fan_triangulate(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for line in input.lines() {
        let corners: Vec<&str> = line.split_whitespace().collect();
        if corners.len() > 4 && corners[0] == "f" {
            for pair in corners[2..].windows(2) {
                out.push_str(&format!("f {} {} {}\n", corners[1], pair[0], pair[1]));
            }
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_triangle_with_uvs() {
        let input = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
f 1/1 2/2 3/3
";
        let data = load_obj_from_str(input).expect("failed to parse obj");
        assert_eq!(data.positions.len(), 3);
        assert_eq!(data.uvs.len(), 3);
        assert_eq!(data.faces.len(), 1);
        assert_eq!(data.faces[0][1], FaceVertex { position: 1, uv: Some(1), normal: None });
    }

    #[test]
    fn test_quad_is_fan_triangulated() {
        let input = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
v -0.5 0.5 0.0
f 1 2 3 4 5
";
        let data = load_obj_from_str(input).expect("failed to parse obj");
        assert_eq!(data.faces.len(), 3);
        for face in &data.faces {
            assert_eq!(face[0].position, 0);
        }
        assert_eq!(data.faces[2][2].position, 4);
    }

    #[test]
    fn test_fan_triangulate_keeps_other_lines() {
        let out = fan_triangulate("v 1 2 3\nf 1 2 3 4\n");
        assert_eq!(out, "v 1 2 3\nf 1 2 3\nf 1 3 4\n");
    }

    #[test]
    fn test_missing_file() {
        let result = load_obj_from_file("/definitely/not/here.obj");
        assert!(matches!(result, Err(ObjLoadError::Io(_))));
    }
}
