// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry analytics and statistics

use super::{BoundingBox, Mesh};
use serde::{Deserialize, Serialize};

/// Statistics over an accepted-box set and the mesh extracted from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryStats {
    /// Number of accepted boxes
    pub box_count: usize,
    /// Sum of accepted box volumes
    pub volume: f64,
    /// Signed volume enclosed by the mesh triangles
    pub mesh_volume: f64,
    /// Total triangle area, internal faces included
    pub surface_area: f64,
    /// Bounding box [min_x, min_y, min_z, max_x, max_y, max_z]
    pub bbox: [f64; 6],
    /// Volume-weighted centroid [x, y, z]
    pub centroid: [f64; 3],
    /// Smallest and largest accepted box diagonal
    pub min_diagonal: f64,
    pub max_diagonal: f64,
    /// Number of triangles
    pub triangle_count: usize,
}

impl GeometryStats {
    /// Create empty stats
    pub fn empty() -> Self {
        Self {
            box_count: 0,
            volume: 0.0,
            mesh_volume: 0.0,
            surface_area: 0.0,
            bbox: [0.0; 6],
            centroid: [0.0; 3],
            min_diagonal: 0.0,
            max_diagonal: 0.0,
            triangle_count: 0,
        }
    }

    /// Pretty print statistics
    pub fn print(&self) {
        println!("╔══════════════════════════════════════════════════════════╗");
        println!("║              CARVE ANALYTICS                             ║");
        println!("╠══════════════════════════════════════════════════════════╣");
        println!(
            "║ Boxes:           {:>10}                              ║",
            self.box_count
        );
        println!(
            "║ Volume:          {:>10.4} u³                       ║",
            self.volume
        );
        println!(
            "║ Surface Area:    {:>10.4} u²                       ║",
            self.surface_area
        );
        println!(
            "║ Centroid:        ({:>7.2}, {:>7.2}, {:>7.2})            ║",
            self.centroid[0], self.centroid[1], self.centroid[2]
        );
        println!("║                                                          ║");
        println!("║ Bounding Box:                                            ║");
        println!(
            "║   Min: ({:>7.2}, {:>7.2}, {:>7.2})                      ║",
            self.bbox[0], self.bbox[1], self.bbox[2]
        );
        println!(
            "║   Max: ({:>7.2}, {:>7.2}, {:>7.2})                      ║",
            self.bbox[3], self.bbox[4], self.bbox[5]
        );
        println!(
            "║ Box diagonal:    {:>7.4} .. {:>7.4}                    ║",
            self.min_diagonal, self.max_diagonal
        );
        println!("║                                                          ║");
        println!(
            "║ Triangles:       {:>10}                              ║",
            self.triangle_count
        );
        println!("╚══════════════════════════════════════════════════════════╝");
    }
}

/// Compute statistics for a box set and its extracted mesh
pub fn analyze(boxes: &[BoundingBox], mesh: &Mesh) -> GeometryStats {
    if boxes.is_empty() {
        return GeometryStats {
            triangle_count: mesh.triangle_count(),
            ..GeometryStats::empty()
        };
    }

    let volume = boxes.iter().map(BoundingBox::volume).sum();
    let (min_diagonal, max_diagonal) = boxes.iter().map(BoundingBox::diagonal_length).fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), d| (lo.min(d), hi.max(d)),
    );

    GeometryStats {
        box_count: boxes.len(),
        volume,
        mesh_volume: calculate_mesh_volume(mesh),
        surface_area: mesh.surface_area(),
        bbox: calculate_bounding_box(boxes),
        centroid: calculate_centroid(boxes, volume),
        min_diagonal,
        max_diagonal,
        triangle_count: mesh.triangle_count(),
    }
}

fn calculate_bounding_box(boxes: &[BoundingBox]) -> [f64; 6] {
    let bbox = boxes
        .iter()
        .fold(BoundingBox::empty(), |acc, b| acc.union(b));
    [
        bbox.min.x, bbox.min.y, bbox.min.z, bbox.max.x, bbox.max.y, bbox.max.z,
    ]
}

/// Signed volume of tetrahedra formed by each triangle and the origin.
/// Faces shared by two boxes have opposite windings and cancel out.
fn calculate_mesh_volume(mesh: &Mesh) -> f64 {
    mesh.triangles
        .iter()
        .map(|t| {
            let [v0, v1, v2] = &t.vertices;
            v0.dot(&v1.cross(v2)) / 6.0
        })
        .sum::<f64>()
}

fn calculate_centroid(boxes: &[BoundingBox], volume: f64) -> [f64; 3] {
    if volume == 0.0 {
        return [0.0; 3];
    }
    let weighted = boxes
        .iter()
        .fold(super::Vec3::zeros(), |acc, b| acc + b.center() * b.volume());
    let centroid = weighted / volume;
    [centroid.x, centroid.y, centroid.z]
}
