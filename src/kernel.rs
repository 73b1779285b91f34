// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Kernel API: solid to boxes to mesh to file

use crate::config::CarveConfig;
use crate::geometry::{analyze, extract_faces, GeometryStats, Mesh};
use crate::io;
use crate::solid::Solid;
use crate::tessellate::{tessellate, Tessellation};
use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use std::time::{Duration, Instant};

/// Everything produced by one render
#[derive(Debug, Clone)]
pub struct CarveOutput {
    pub tessellation: Tessellation,
    pub mesh: Mesh,
    pub elapsed: Duration,
}

impl CarveOutput {
    pub fn stats(&self) -> GeometryStats {
        analyze(&self.tessellation.boxes, &self.mesh)
    }
}

/// Configured carving pipeline
#[derive(Debug, Clone, Default)]
pub struct Kernel {
    config: CarveConfig,
}

impl Kernel {
    /// Create a new kernel
    pub fn new(config: CarveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CarveConfig {
        &self.config
    }

    /// Tessellate without extracting faces
    pub fn tessellate(&self, solid: &Solid) -> Result<Tessellation> {
        tessellate(solid, &self.config.tessellation).context("Tessellation failed")
    }

    /// Tessellate and extract the surface mesh
    pub fn render(&self, solid: &Solid) -> Result<CarveOutput> {
        let start = Instant::now();
        let tessellation = self.tessellate(solid)?;
        let mesh = extract_faces(&tessellation.boxes, self.config.output.normals);
        let elapsed = start.elapsed();

        info!(
            "rendered {} boxes into {} triangles in {:.2?}",
            tessellation.len(),
            mesh.triangle_count(),
            elapsed
        );

        Ok(CarveOutput {
            tessellation,
            mesh,
            elapsed,
        })
    }

    /// Render and write the mesh as STL
    pub fn render_to_file(&self, solid: &Solid, path: impl AsRef<Path>) -> Result<CarveOutput> {
        let path = path.as_ref();
        let output = self.render(solid)?;
        io::export_stl(&output.mesh, path, &self.config.output)?;
        info!("wrote {}", path.display());
        Ok(output)
    }
}
