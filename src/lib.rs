// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Octocarve
//!
//! Turns implicit CSG solids into printable meshes. A solid tree built from
//! cubes, spheres, cylinders, translations and boolean operations is sampled
//! on an octree; the cells judged fully inside become axis-aligned cubes,
//! whose faces are written out as STL triangles.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod scene;
pub mod solid;
pub mod tessellate;

pub use config::{CarveConfig, OutputConfig};
pub use error::{SolidError, TessellateError};
pub use geometry::{extract_faces, BoundingBox, FaceNormals, Mesh, Triangle, Vec3};
pub use io::{export_stl, load_scene, UpAxis};
pub use kernel::{CarveOutput, Kernel};
pub use solid::{CylinderAxis, Solid};
pub use tessellate::{tessellate, tessellate_box, Tessellation, TessellationConfig};

use anyhow::Result;

/// Render a solid with default settings
pub fn render(solid: &Solid) -> Result<Mesh> {
    Ok(Kernel::default().render(solid)?.mesh)
}

/// Render a scene file with default settings
pub fn render_file(path: &str) -> Result<Mesh> {
    let solid = load_scene(path)?;
    render(&solid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_cube() {
        let result = render(&Solid::cube(2.0).unwrap());
        assert!(result.is_ok());
        assert!(!result.unwrap().is_empty());
    }
}
