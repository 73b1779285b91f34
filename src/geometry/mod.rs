// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - vectors, boxes, meshes and face extraction

mod analytics;
mod bbox;
mod faces;
mod mesh;

/// 3D point or direction
pub type Vec3 = nalgebra::Vector3<f64>;

pub use analytics::{analyze, GeometryStats};
pub use bbox::BoundingBox;
pub use faces::{extract_faces, push_box_faces, FaceNormals, TRIANGLES_PER_BOX};
pub use mesh::{Mesh, Triangle};
