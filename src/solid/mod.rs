// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Implicit solids
//!
//! A [`Solid`] answers two questions: does it contain a point, and which
//! axis-aligned box encloses every point it contains. Primitives compose
//! through translation and boolean operations into an immutable tree whose
//! children are reference counted, so a subtree may be shared by several
//! parents.

mod builder;

use crate::geometry::{BoundingBox, Vec3};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Orientation of a cylinder's axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CylinderAxis {
    /// Axis along +Y, base disc centred on the origin in the XZ plane
    #[default]
    Y,
    /// Axis along +X: containment swaps the x and y components before
    /// testing the Y-axis cylinder
    X,
}

/// Implicit solid tree
#[derive(Debug, Clone, PartialEq)]
pub enum Solid {
    /// Points with every coordinate in `[0, size)`
    Cube { size: f64 },
    /// Points within `radius` of the origin, boundary included
    Sphere { radius: f64 },
    /// Cylinder of `radius` extending from 0 to `height` along `axis`
    Cylinder {
        radius: f64,
        height: f64,
        axis: CylinderAxis,
    },
    /// `solid` moved by `offset`
    Transform { offset: Vec3, solid: Arc<Solid> },
    Union(Arc<Solid>, Arc<Solid>),
    Intersection(Arc<Solid>, Arc<Solid>),
    /// Points of the first operand not in the second
    Difference(Arc<Solid>, Arc<Solid>),
}

impl Solid {
    /// Point containment
    pub fn contains(&self, point: &Vec3) -> bool {
        match self {
            Solid::Cube { size } => point.iter().all(|c| (0.0..*size).contains(c)),
            Solid::Sphere { radius } => point.norm() <= *radius,
            Solid::Cylinder {
                radius,
                height,
                axis,
            } => {
                let (along, across) = match axis {
                    CylinderAxis::Y => (point.y, point.x),
                    CylinderAxis::X => (point.x, point.y),
                };
                (across * across + point.z * point.z).sqrt() <= *radius
                    && (0.0..=*height).contains(&along)
            }
            Solid::Transform { offset, solid } => solid.contains(&(point - offset)),
            Solid::Union(a, b) => a.contains(point) || b.contains(point),
            Solid::Intersection(a, b) => a.contains(point) && b.contains(point),
            Solid::Difference(a, b) => a.contains(point) && !b.contains(point),
        }
    }

    /// Box enclosing every contained point.
    ///
    /// Boolean nodes report the union of their operands' boxes, which
    /// over-approximates intersections and differences.
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Solid::Cube { size } => BoundingBox::new(Vec3::zeros(), Vec3::repeat(*size)),
            Solid::Sphere { radius } => {
                BoundingBox::new(Vec3::repeat(-radius), Vec3::repeat(*radius))
            }
            Solid::Cylinder {
                radius,
                height,
                axis,
            } => cylinder_bounds(*radius, *height, *axis),
            Solid::Transform { offset, solid } => solid.bounds().translated(offset),
            Solid::Union(a, b) | Solid::Intersection(a, b) | Solid::Difference(a, b) => {
                a.bounds().union(&b.bounds())
            }
        }
    }

    /// Like [`Solid::bounds`], but intersections keep only the overlap of
    /// their operands and differences keep only the first operand's box.
    /// Falls back to the union when an intersection's operands are disjoint.
    pub fn tight_bounds(&self) -> BoundingBox {
        match self {
            Solid::Transform { offset, solid } => solid.tight_bounds().translated(offset),
            Solid::Union(a, b) => a.tight_bounds().union(&b.tight_bounds()),
            Solid::Intersection(a, b) => {
                let (a, b) = (a.tight_bounds(), b.tight_bounds());
                a.intersection(&b).unwrap_or_else(|| a.union(&b))
            }
            Solid::Difference(a, _) => a.tight_bounds(),
            primitive => primitive.bounds(),
        }
    }

    /// Number of nodes, counting shared subtrees once per reference
    pub fn node_count(&self) -> usize {
        match self {
            Solid::Cube { .. } | Solid::Sphere { .. } | Solid::Cylinder { .. } => 1,
            Solid::Transform { solid, .. } => 1 + solid.node_count(),
            Solid::Union(a, b) | Solid::Intersection(a, b) | Solid::Difference(a, b) => {
                1 + a.node_count() + b.node_count()
            }
        }
    }

    /// Longest root-to-leaf path, a lone primitive has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Solid::Cube { .. } | Solid::Sphere { .. } | Solid::Cylinder { .. } => 1,
            Solid::Transform { solid, .. } => 1 + solid.depth(),
            Solid::Union(a, b) | Solid::Intersection(a, b) | Solid::Difference(a, b) => {
                1 + a.depth().max(b.depth())
            }
        }
    }

    /// Short variant name used in logs and errors
    pub fn kind(&self) -> &'static str {
        match self {
            Solid::Cube { .. } => "Cube",
            Solid::Sphere { .. } => "Sphere",
            Solid::Cylinder { .. } => "Cylinder",
            Solid::Transform { .. } => "Transform",
            Solid::Union(..) => "Union",
            Solid::Intersection(..) => "Intersection",
            Solid::Difference(..) => "Difference",
        }
    }
}

fn cylinder_bounds(radius: f64, height: f64, axis: CylinderAxis) -> BoundingBox {
    match axis {
        CylinderAxis::Y => BoundingBox::new(
            Vec3::new(-radius, 0.0, -radius),
            Vec3::new(radius, height, radius),
        ),
        CylinderAxis::X => BoundingBox::new(
            Vec3::new(0.0, -radius, -radius),
            Vec3::new(height, radius, radius),
        ),
    }
}
