// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Tessellation parameters

use crate::error::TessellateError;
use serde::{Deserialize, Serialize};

/// Default resolution floor: boxes with a shorter diagonal are dropped
pub const DEFAULT_MIN_DIAGONAL: f64 = 0.15;

/// Default number of sample divisions per axis
pub const DEFAULT_SAMPLE_STEPS: u32 = 10;

/// Largest accepted number of sample divisions per axis
pub const MAX_SAMPLE_STEPS: u32 = 1024;

/// Tessellation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationConfig {
    /// Boxes whose diagonal is shorter than this are dropped unexamined
    pub min_diagonal: f64,
    /// Sample divisions per axis for the containment test
    pub sample_steps: u32,
    /// Hard cap on subdivision depth, on top of the one implied by `min_diagonal`
    pub max_depth: Option<u32>,
    /// Start from [`crate::Solid::tight_bounds`] instead of [`crate::Solid::bounds`]
    pub tighten_bounds: bool,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            min_diagonal: DEFAULT_MIN_DIAGONAL,
            sample_steps: DEFAULT_SAMPLE_STEPS,
            max_depth: None,
            tighten_bounds: false,
        }
    }
}

impl TessellationConfig {
    pub fn with_min_diagonal(mut self, min_diagonal: f64) -> Self {
        self.min_diagonal = min_diagonal;
        self
    }

    pub fn with_sample_steps(mut self, sample_steps: u32) -> Self {
        self.sample_steps = sample_steps;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_tight_bounds(mut self, tighten_bounds: bool) -> Self {
        self.tighten_bounds = tighten_bounds;
        self
    }

    pub fn validate(&self) -> Result<(), TessellateError> {
        if !self.min_diagonal.is_finite() || self.min_diagonal <= 0.0 {
            return Err(TessellateError::invalid_config(format!(
                "min_diagonal must be a positive finite number (got {})",
                self.min_diagonal
            )));
        }
        if self.sample_steps == 0 || self.sample_steps > MAX_SAMPLE_STEPS {
            return Err(TessellateError::invalid_config(format!(
                "sample_steps must be between 1 and {} (got {})",
                MAX_SAMPLE_STEPS, self.sample_steps
            )));
        }
        Ok(())
    }

    /// Deepest level worth visiting for a root box with the given diagonal.
    ///
    /// A box at depth `d` has diagonal `root / 2^d`, so the floor alone stops
    /// at `floor(log2(root / min_diagonal))`. One extra level is allowed for
    /// rounding.
    pub fn depth_limit(&self, root_diagonal: f64) -> u32 {
        let ratio = root_diagonal / self.min_diagonal;
        let geometric = if ratio.is_finite() && ratio > 1.0 {
            ratio.log2().ceil() as u32 + 1
        } else {
            0
        };
        match self.max_depth {
            Some(max_depth) => geometric.min(max_depth),
            None => geometric,
        }
    }
}
