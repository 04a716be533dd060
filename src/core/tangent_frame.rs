// Copyright @yucwang 2026

use crate::math::constants::{ EPSILON, Float, Vector3f };

/// Tangent, binormal and face normal of one triangle after the handedness
/// correction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TangentBasis {
    pub tangent: Vector3f,
    pub binormal: Vector3f,
    pub normal: Vector3f,
}

pub fn calculate_tri_normal(p1: &Vector3f, p2: &Vector3f, p3: &Vector3f) -> Vector3f {
    let side0 = p1 - p2;
    let side1 = p3 - p1;
    side1.cross(&side0).normalize()
}

/// Tangent-space basis of a triangle from its positions and texture
/// coordinates. Degenerate triangles or UV mappings come out as NaN; nothing
/// is checked here.
pub fn calculate_tri_basis(p1: &Vector3f, p2: &Vector3f, p3: &Vector3f,
                           u1: Float, v1: Float,
                           u2: Float, v2: Float,
                           u3: Float, v3: Float) -> TangentBasis {
    let side0 = p1 - p2;
    let side1 = p3 - p1;

    let normal = side1.cross(&side0).normalize();

    let delta_v0 = v1 - v2;
    let delta_v1 = v3 - v1;
    let mut tangent = (delta_v1 * side0 - delta_v0 * side1).normalize();

    let delta_u0 = u1 - u2;
    let delta_u1 = u3 - u1;
    let mut binormal = (delta_u1 * side0 - delta_u0 * side1).normalize();

    // A mirrored UV mapping flips the frame; turn it back so it stays
    // right-handed around the face normal.
    if tangent.cross(&binormal).dot(&normal) < 0.0 {
        tangent = -tangent;
        binormal = -binormal;
    }

    TangentBasis { tangent, binormal, normal }
}

/// Only the tangent is returned. Callers that need the binormal use
/// `calculate_tri_basis`.
pub fn calculate_tri_tangent(p1: &Vector3f, p2: &Vector3f, p3: &Vector3f,
                             u1: Float, v1: Float,
                             u2: Float, v2: Float,
                             u3: Float, v3: Float) -> Vector3f {
    calculate_tri_basis(p1, p2, p3, u1, v1, u2, v2, u3, v3).tangent
}

pub fn build_tangent_frame(n: &Vector3f) -> (Vector3f, Vector3f) {
    let up = if n.z.abs() < 0.999 {
        Vector3f::new(0.0, 0.0, 1.0)
    } else {
        Vector3f::new(1.0, 0.0, 0.0)
    };
    let tangent = n.cross(&up).normalize();
    let bitangent = n.cross(&tangent).normalize();
    (tangent, bitangent)
}

/// Gram-Schmidt `tangent` against the unit normal `n`. Falls back to an
/// arbitrary frame tangent when nothing is left after the projection.
pub fn orthogonalize(tangent: &Vector3f, n: &Vector3f) -> Vector3f {
    let projected = tangent - n * n.dot(tangent);
    let len = projected.norm();
    if len.is_finite() && len > EPSILON {
        projected / len
    } else {
        build_tangent_frame(n).0
    }
}

pub fn world_to_local(v: &Vector3f, t: &Vector3f, b: &Vector3f, n: &Vector3f) -> Vector3f {
    Vector3f::new(v.dot(t), v.dot(b), v.dot(n))
}

pub fn local_to_world(v: &Vector3f, t: &Vector3f, b: &Vector3f, n: &Vector3f) -> Vector3f {
    t * v.x + b * v.y + n * v.z
}
