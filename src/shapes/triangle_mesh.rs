// Copyright @yucwang 2023

use super::triangle::Triangle;

use crate::core::tangent_frame::orthogonalize;
use crate::io::obj_utils;
use crate::io::obj_utils::{ FaceVertex, ObjLoadError, ObjMeshData };
use crate::math::constants::{ EPSILON, Float, Vector3f };

use std::path::Path;
use std::vec::Vec;

pub struct TriangleMesh {
    vertices: Vec<Vector3f>,
    normals:  Vec<Vector3f>,
    triangles: Vec<Triangle>,
    tri_corners: Vec<[FaceVertex; 3]>,
    tri_areas: Vec<Float>,
    total_area: Float,
}

impl TriangleMesh {
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, ObjLoadError> {
        let data = obj_utils::load_obj_from_file(path)?;
        Ok(Self::from_data(data))
    }

    pub fn from_obj_str(input: &str) -> Result<Self, ObjLoadError> {
        let data = obj_utils::load_obj_from_str(input)?;
        Ok(Self::from_data(data))
    }

    pub fn from_data(data: ObjMeshData) -> Self {
        let mut triangles = Vec::with_capacity(data.faces.len());
        let mut tri_areas = Vec::with_capacity(data.faces.len());
        let mut total_area = 0.0;

        for face in &data.faces {
            let mut tri = Triangle::new(data.positions[face[0].position],
                                        data.positions[face[1].position],
                                        data.positions[face[2].position]);
            if let (Some(a), Some(b), Some(c)) = (face[0].uv, face[1].uv, face[2].uv) {
                tri = tri.with_uvs(data.uvs[a], data.uvs[b], data.uvs[c]);
            }

            let area = tri.surface_area();
            total_area += area;
            tri_areas.push(area);
            triangles.push(tri);
        }

        log::info!("Mesh loaded, vertices = {}, triangles = {}, area = {}.",
                   data.positions.len(), triangles.len(), total_area);

        Self {
            vertices: data.positions,
            normals: data.normals,
            triangles,
            tri_corners: data.faces,
            tri_areas,
            total_area,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    pub fn total_area(&self) -> Float {
        self.total_area
    }

    pub fn triangle(&self, idx: usize) -> Option<&Triangle> {
        self.triangles.get(idx)
    }

    /// One tangent per triangle, in file order. Degenerate triangles keep
    /// their NaN tangent.
    pub fn face_tangents(&self) -> Vec<Vector3f> {
        let tangents: Vec<Vector3f> = self.triangles.iter().map(|tri| tri.tangent()).collect();
        let degenerate = tangents.iter().filter(|t| !is_finite(t)).count();
        if degenerate > 0 {
            log::warn!("{} of {} triangles have a degenerate tangent.", degenerate, tangents.len());
        }
        tangents
    }

    /// One unit tangent per position: the area-weighted sum of the face
    /// tangents around it, made orthogonal to the vertex normal.
    pub fn vertex_tangents(&self) -> Vec<Vector3f> {
        let mut tangent_sum = vec![Vector3f::zeros(); self.vertices.len()];
        let mut normal_sum = vec![Vector3f::zeros(); self.vertices.len()];
        let mut skipped = 0usize;

        for ((tri, corners), area) in self.triangles.iter().zip(&self.tri_corners).zip(&self.tri_areas) {
            let face_normal = tri.geometric_normal();
            let face_tangent = tri.tangent();
            let usable = is_finite(&face_tangent) && is_finite(&face_normal);
            if !usable {
                skipped += 1;
            }

            for corner in corners.iter() {
                if usable {
                    tangent_sum[corner.position] += face_tangent * *area;
                }

                match corner.normal.and_then(|i| self.normals.get(i)) {
                    Some(n) => normal_sum[corner.position] += n,
                    None if usable => normal_sum[corner.position] += face_normal * *area,
                    None => {}
                }
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {} degenerate triangles while accumulating vertex tangents.", skipped);
        }

        tangent_sum.iter()
            .zip(normal_sum.iter())
            .map(|(t, n)| {
                let len = n.norm();
                let n = if len > EPSILON { n / len } else { Vector3f::new(0.0, 0.0, 1.0) };
                orthogonalize(t, &n)
            })
            .collect()
    }
}

fn is_finite(v: &Vector3f) -> bool {
    v.iter().all(|c| c.is_finite())
}
