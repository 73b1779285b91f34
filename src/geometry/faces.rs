// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Face extraction: accepted boxes to triangles

use super::{BoundingBox, Mesh, Triangle, Vec3};
use serde::{Deserialize, Serialize};

/// What to store in each triangle's normal slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceNormals {
    /// Zero vector; consumers recompute normals themselves
    #[default]
    Zero,
    /// Axis-aligned outward normal of the box face
    Outward,
}

/// Corner indices of the two triangles of each face, with the face's outward normal.
/// Corners are numbered like [`BoundingBox::octants`]: bit 0 = x, bit 1 = y, bit 2 = z.
const BOX_FACES: [([[usize; 3]; 2], [f64; 3]); 6] = [
    // Bottom (y-)
    ([[0, 1, 5], [0, 5, 4]], [0.0, -1.0, 0.0]),
    // Top (y+)
    ([[2, 6, 7], [2, 7, 3]], [0.0, 1.0, 0.0]),
    // Left (x-)
    ([[0, 4, 6], [0, 6, 2]], [-1.0, 0.0, 0.0]),
    // Right (x+)
    ([[1, 3, 7], [1, 7, 5]], [1.0, 0.0, 0.0]),
    // Back (z-)
    ([[0, 2, 3], [0, 3, 1]], [0.0, 0.0, -1.0]),
    // Front (z+)
    ([[4, 5, 7], [4, 7, 6]], [0.0, 0.0, 1.0]),
];

/// Triangles emitted per box
pub const TRIANGLES_PER_BOX: usize = 12;

fn box_corners(bbox: &BoundingBox) -> [Vec3; 8] {
    std::array::from_fn(|index| {
        Vec3::new(
            if index & 1 != 0 { bbox.max.x } else { bbox.min.x },
            if index & 2 != 0 { bbox.max.y } else { bbox.min.y },
            if index & 4 != 0 { bbox.max.z } else { bbox.min.z },
        )
    })
}

/// Append the 12 surface triangles of one box
pub fn push_box_faces(mesh: &mut Mesh, bbox: &BoundingBox, normals: FaceNormals) {
    let corners = box_corners(bbox);

    for (triangles, normal) in BOX_FACES {
        let normal = match normals {
            FaceNormals::Zero => Vec3::zeros(),
            FaceNormals::Outward => Vec3::from(normal),
        };
        for [a, b, c] in triangles {
            mesh.add_triangle(Triangle::with_normal(
                [corners[a], corners[b], corners[c]],
                normal,
            ));
        }
    }
}

/// Turn every box into its 12 surface triangles.
///
/// Boxes are handled independently: a face shared by two neighbouring boxes
/// is emitted once for each of them.
pub fn extract_faces(boxes: &[BoundingBox], normals: FaceNormals) -> Mesh {
    let mut mesh = Mesh::with_capacity(boxes.len() * TRIANGLES_PER_BOX);
    for bbox in boxes {
        push_box_faces(&mut mesh, bbox, normals);
    }
    mesh
}
