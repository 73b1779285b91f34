// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Tessellation: approximate a solid's volume by axis-aligned cubes
//!
//! The starting box is split into octants until a box either passes the
//! sampled containment test (accepted) or its diagonal falls below the
//! resolution floor (dropped).

mod config;
mod octree;
mod sampler;

pub use config::{
    TessellationConfig, DEFAULT_MIN_DIAGONAL, DEFAULT_SAMPLE_STEPS, MAX_SAMPLE_STEPS,
};
pub use octree::{tessellate, tessellate_box, Tessellation, TessellationStats};
pub use sampler::{probably_inside, sample_points, ContainmentSampler};
