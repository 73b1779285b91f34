// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Checked constructors and tree validation

use super::{CylinderAxis, Solid};
use crate::error::SolidError;
use crate::geometry::Vec3;
use std::sync::Arc;

impl Solid {
    pub fn cube(size: f64) -> Result<Self, SolidError> {
        SolidError::check_extent("Cube", "size", size)?;
        Ok(Self::Cube { size })
    }

    pub fn sphere(radius: f64) -> Result<Self, SolidError> {
        SolidError::check_extent("Sphere", "radius", radius)?;
        Ok(Self::Sphere { radius })
    }

    pub fn cylinder(radius: f64, height: f64, axis: CylinderAxis) -> Result<Self, SolidError> {
        SolidError::check_extent("Cylinder", "radius", radius)?;
        SolidError::check_extent("Cylinder", "height", height)?;
        Ok(Self::Cylinder {
            radius,
            height,
            axis,
        })
    }

    pub fn translate(offset: Vec3, solid: impl Into<Arc<Solid>>) -> Result<Self, SolidError> {
        check_offset(&offset)?;
        Ok(Self::Transform {
            offset,
            solid: solid.into(),
        })
    }

    pub fn union(a: impl Into<Arc<Solid>>, b: impl Into<Arc<Solid>>) -> Self {
        Self::Union(a.into(), b.into())
    }

    pub fn intersection(a: impl Into<Arc<Solid>>, b: impl Into<Arc<Solid>>) -> Self {
        Self::Intersection(a.into(), b.into())
    }

    pub fn difference(a: impl Into<Arc<Solid>>, b: impl Into<Arc<Solid>>) -> Self {
        Self::Difference(a.into(), b.into())
    }

    /// Re-check every parameter in the tree.
    ///
    /// The variants are public, so trees built by hand can skip the checked
    /// constructors; the tessellator calls this before sampling anything.
    pub fn validate(&self) -> Result<(), SolidError> {
        match self {
            Solid::Cube { size } => SolidError::check_extent("Cube", "size", *size),
            Solid::Sphere { radius } => SolidError::check_extent("Sphere", "radius", *radius),
            Solid::Cylinder { radius, height, .. } => {
                SolidError::check_extent("Cylinder", "radius", *radius)?;
                SolidError::check_extent("Cylinder", "height", *height)
            }
            Solid::Transform { offset, solid } => {
                check_offset(offset)?;
                solid.validate()
            }
            Solid::Union(a, b) | Solid::Intersection(a, b) | Solid::Difference(a, b) => {
                a.validate()?;
                b.validate()
            }
        }
    }
}

fn check_offset(offset: &Vec3) -> Result<(), SolidError> {
    SolidError::check_finite("Transform", "offset.x", offset.x)?;
    SolidError::check_finite("Transform", "offset.y", offset.y)?;
    SolidError::check_finite("Transform", "offset.z", offset.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(matches!(
            Solid::cube(f64::NAN),
            Err(SolidError::NonFinite { variant: "Cube", .. })
        ));
        assert!(matches!(
            Solid::sphere(-1.0),
            Err(SolidError::Negative { variant: "Sphere", .. })
        ));
        assert!(matches!(
            Solid::cylinder(1.0, f64::INFINITY, CylinderAxis::Y),
            Err(SolidError::NonFinite {
                parameter: "height",
                ..
            })
        ));
        assert!(matches!(
            Solid::translate(Vec3::new(0.0, f64::NAN, 0.0), Solid::sphere(1.0).unwrap()),
            Err(SolidError::NonFinite {
                parameter: "offset.y",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_walks_tree() {
        let good = Solid::difference(Solid::cube(2.0).unwrap(), Solid::sphere(0.5).unwrap());
        assert!(good.validate().is_ok());

        let bad = Solid::union(
            Solid::cube(1.0).unwrap(),
            Solid::Transform {
                offset: Vec3::zeros(),
                solid: Arc::new(Solid::Sphere { radius: f64::NAN }),
            },
        );
        assert!(matches!(
            bad.validate(),
            Err(SolidError::NonFinite {
                variant: "Sphere",
                ..
            })
        ));
    }
}
