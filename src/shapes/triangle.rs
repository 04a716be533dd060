// Copyright @yucwang 2023

use crate::core::tangent_frame::{ build_tangent_frame, calculate_tri_normal, calculate_tri_tangent };
use crate::math::constants::{ Float, Vector2f, Vector3f };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    p0: Vector3f,
    p1: Vector3f,
    p2: Vector3f,
    uvs: Option<[Vector2f; 3]>,
}

impl Triangle {
    pub fn new(new_p0: Vector3f, new_p1: Vector3f, new_p2: Vector3f) -> Self {
        Triangle {
            p0: new_p0,
            p1: new_p1,
            p2: new_p2,
            uvs: None,
        }
    }

    pub fn with_uvs(mut self, uv0: Vector2f, uv1: Vector2f, uv2: Vector2f) -> Self {
        self.uvs = Some([uv0, uv1, uv2]);
        self
    }

    pub fn vertices(&self) -> (Vector3f, Vector3f, Vector3f) {
        (self.p0, self.p1, self.p2)
    }

    pub fn uvs(&self) -> Option<[Vector2f; 3]> {
        self.uvs
    }

    pub fn geometric_normal(&self) -> Vector3f {
        calculate_tri_normal(&self.p0, &self.p1, &self.p2)
    }

    pub fn surface_area(&self) -> Float {
        0.5 * (self.p1 - self.p0).cross(&(self.p2 - self.p0)).norm()
    }

    /// Tangent from the UV mapping, or an arbitrary in-plane direction
    /// when the triangle carries no UVs.
    pub fn tangent(&self) -> Vector3f {
        match self.uvs {
            Some([uv0, uv1, uv2]) => calculate_tri_tangent(&self.p0, &self.p1, &self.p2,
                                                           uv0.x, uv0.y,
                                                           uv1.x, uv1.y,
                                                           uv2.x, uv2.y),
            None => build_tangent_frame(&self.geometric_normal()).0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_area() {
        let triangle = Triangle::new(Vector3f::new(0.0, 0.0, 0.0),
                                     Vector3f::new(2.0, 0.0, 0.0),
                                     Vector3f::new(0.0, 3.0, 0.0));
        assert!((triangle.surface_area() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_geometric_normal_follows_winding() {
        let ccw = Triangle::new(Vector3f::new(1.0, 1.0, 0.0),
                                Vector3f::new(2.0, 1.0, 0.0),
                                Vector3f::new(2.0, 2.0, 0.0));
        let cw = Triangle::new(Vector3f::new(1.0, 1.0, 0.0),
                               Vector3f::new(2.0, 2.0, 0.0),
                               Vector3f::new(2.0, 1.0, 0.0));
        assert!((ccw.geometric_normal() - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-6);
        assert!((cw.geometric_normal() - Vector3f::new(0.0, 0.0, -1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_tangent_with_and_without_uvs() {
        let triangle = Triangle::new(Vector3f::new(0.0, 0.0, 0.0),
                                     Vector3f::new(1.0, 0.0, 0.0),
                                     Vector3f::new(0.0, 1.0, 0.0));
        let untextured = triangle.tangent();
        assert!(untextured.dot(&triangle.geometric_normal()).abs() < 1e-6);
        assert!((untextured.norm() - 1.0).abs() < 1e-6);

        let textured = triangle.with_uvs(Vector2f::new(0.0, 0.0),
                                         Vector2f::new(1.0, 0.0),
                                         Vector2f::new(0.0, 1.0));
        assert!((textured.tangent() - Vector3f::new(1.0, 0.0, 0.0)).norm() < 1e-6);
    }
}
