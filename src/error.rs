// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for solid construction and tessellation

use crate::geometry::Vec3;
use thiserror::Error;

/// Errors raised while building or validating a solid tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolidError {
    /// A parameter was NaN or infinite
    #[error("{variant}: parameter `{parameter}` is not finite ({value})")]
    NonFinite {
        variant: &'static str,
        parameter: &'static str,
        value: f64,
    },

    /// A size-like parameter was negative
    #[error("{variant}: parameter `{parameter}` must be non-negative (got {value})")]
    Negative {
        variant: &'static str,
        parameter: &'static str,
        value: f64,
    },

    /// A transform or boolean node has no operand
    #[error("{variant}: missing child `{child}`")]
    MissingChild {
        variant: &'static str,
        child: &'static str,
    },
}

impl SolidError {
    /// Checks that `value` is finite.
    pub fn check_finite(
        variant: &'static str,
        parameter: &'static str,
        value: f64,
    ) -> Result<(), SolidError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::NonFinite {
                variant,
                parameter,
                value,
            })
        }
    }

    /// Checks that `value` is finite and not negative.
    pub fn check_extent(
        variant: &'static str,
        parameter: &'static str,
        value: f64,
    ) -> Result<(), SolidError> {
        Self::check_finite(variant, parameter, value)?;
        if value < 0.0 {
            return Err(Self::Negative {
                variant,
                parameter,
                value,
            });
        }
        Ok(())
    }
}

/// Errors raised by the tessellator before any subdivision happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TessellateError {
    /// Starting box is inverted or has non-finite corners
    #[error("invalid bounding box: min {min:?} max {max:?}")]
    InvalidBounds { min: [f64; 3], max: [f64; 3] },

    /// Starting box has a zero-length diagonal
    #[error("degenerate bounding box at {at:?}")]
    DegenerateBounds { at: [f64; 3] },

    /// Tessellation parameters are unusable
    #[error("invalid tessellation config: {message}")]
    InvalidConfig { message: String },

    /// The solid tree itself is malformed
    #[error(transparent)]
    Solid(#[from] SolidError),
}

impl TessellateError {
    pub fn invalid_bounds(min: &Vec3, max: &Vec3) -> Self {
        Self::InvalidBounds {
            min: [min.x, min.y, min.z],
            max: [max.x, max.y, max.z],
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
