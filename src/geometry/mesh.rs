// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh representation and utilities

use super::{BoundingBox, Vec3};
use serde::{Deserialize, Serialize};

/// Triangle with explicit corner positions and a facet normal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
    pub normal: Vec3,
}

impl Triangle {
    /// Triangle with a zero normal
    pub fn new(vertices: [Vec3; 3]) -> Self {
        Self {
            vertices,
            normal: Vec3::zeros(),
        }
    }

    pub fn with_normal(vertices: [Vec3; 3], normal: Vec3) -> Self {
        Self { vertices, normal }
    }

    pub fn area(&self) -> f64 {
        let [v0, v1, v2] = &self.vertices;
        (v1 - v0).cross(&(v2 - v0)).norm() * 0.5
    }

    /// Normal derived from the winding order, zero for degenerate triangles
    pub fn geometric_normal(&self) -> Vec3 {
        let [v0, v1, v2] = &self.vertices;
        (v1 - v0)
            .cross(&(v2 - v0))
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vec3::zeros)
    }
}

/// Triangle soup. Coincident faces are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new()
    }

    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Add a triangle
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Corner count, three per triangle since nothing is shared
    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.triangles.iter().flat_map(|t| t.vertices.iter()))
    }

    pub fn surface_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Append another mesh's triangles
    pub fn merge(&mut self, other: &Mesh) {
        self.triangles.extend_from_slice(&other.triangles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_area_and_normal() {
        let tri = Triangle::new([
            Vec3::zeros(),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        ]);
        assert_eq!(tri.area(), 2.0);
        assert_eq!(tri.normal, Vec3::zeros());
        assert_eq!(tri.geometric_normal(), Vec3::new(0.0, 0.0, 1.0));

        let flat = Triangle::new([Vec3::zeros(), Vec3::zeros(), Vec3::repeat(1.0)]);
        assert_eq!(flat.geometric_normal(), Vec3::zeros());
    }

    #[test]
    fn test_merge_and_bounds() {
        let mut mesh = Mesh::new();
        mesh.add_triangle(Triangle::new([
            Vec3::zeros(),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]));

        let mut other = Mesh::with_capacity(1);
        other.add_triangle(Triangle::new([
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(1.0, 0.0, 3.0),
            Vec3::new(0.0, -1.0, 3.0),
        ]));

        mesh.merge(&other);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 6);

        let bbox = mesh.bounding_box();
        assert_eq!(bbox.min, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(bbox.max, Vec3::new(1.0, 1.0, 3.0));
    }
}
