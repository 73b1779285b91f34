// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene files: serde descriptions of solid trees
//!
//! ```json
//! { "type": "difference",
//!   "a": { "type": "cube", "size": 2.0 },
//!   "b": { "type": "sphere", "radius": 0.5 } }
//! ```

use crate::error::SolidError;
use crate::geometry::Vec3;
use crate::solid::{CylinderAxis, Solid};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk node. Operands are optional here so that a missing one is
/// reported as [`SolidError::MissingChild`] instead of a generic parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneNode {
    Cube {
        size: f64,
    },
    Sphere {
        radius: f64,
    },
    Cylinder {
        radius: f64,
        height: f64,
        #[serde(default)]
        axis: CylinderAxis,
    },
    Translate {
        offset: [f64; 3],
        child: Option<Box<SceneNode>>,
    },
    Union {
        a: Option<Box<SceneNode>>,
        b: Option<Box<SceneNode>>,
    },
    Intersection {
        a: Option<Box<SceneNode>>,
        b: Option<Box<SceneNode>>,
    },
    Difference {
        a: Option<Box<SceneNode>>,
        b: Option<Box<SceneNode>>,
    },
}

fn operand(
    node: &Option<Box<SceneNode>>,
    variant: &'static str,
    child: &'static str,
) -> Result<Solid, SolidError> {
    match node {
        Some(node) => Solid::try_from(node.as_ref()),
        None => Err(SolidError::MissingChild { variant, child }),
    }
}

impl TryFrom<&SceneNode> for Solid {
    type Error = SolidError;

    fn try_from(node: &SceneNode) -> Result<Self, Self::Error> {
        match node {
            SceneNode::Cube { size } => Solid::cube(*size),
            SceneNode::Sphere { radius } => Solid::sphere(*radius),
            SceneNode::Cylinder {
                radius,
                height,
                axis,
            } => Solid::cylinder(*radius, *height, *axis),
            SceneNode::Translate { offset, child } => {
                Solid::translate(Vec3::from(*offset), operand(child, "Translate", "child")?)
            }
            SceneNode::Union { a, b } => Ok(Solid::union(
                operand(a, "Union", "a")?,
                operand(b, "Union", "b")?,
            )),
            SceneNode::Intersection { a, b } => Ok(Solid::intersection(
                operand(a, "Intersection", "a")?,
                operand(b, "Intersection", "b")?,
            )),
            SceneNode::Difference { a, b } => Ok(Solid::difference(
                operand(a, "Difference", "a")?,
                operand(b, "Difference", "b")?,
            )),
        }
    }
}

impl From<&Solid> for SceneNode {
    fn from(solid: &Solid) -> Self {
        let boxed = |s: &Solid| Some(Box::new(SceneNode::from(s)));
        match solid {
            Solid::Cube { size } => SceneNode::Cube { size: *size },
            Solid::Sphere { radius } => SceneNode::Sphere { radius: *radius },
            Solid::Cylinder {
                radius,
                height,
                axis,
            } => SceneNode::Cylinder {
                radius: *radius,
                height: *height,
                axis: *axis,
            },
            Solid::Transform { offset, solid } => SceneNode::Translate {
                offset: [offset.x, offset.y, offset.z],
                child: boxed(solid),
            },
            Solid::Union(a, b) => SceneNode::Union {
                a: boxed(a),
                b: boxed(b),
            },
            Solid::Intersection(a, b) => SceneNode::Intersection {
                a: boxed(a),
                b: boxed(b),
            },
            Solid::Difference(a, b) => SceneNode::Difference {
                a: boxed(a),
                b: boxed(b),
            },
        }
    }
}

/// Parse a JSON scene
pub fn parse_scene_json(source: &str) -> Result<Solid> {
    let node: SceneNode = serde_json::from_str(source).context("Failed to parse JSON scene")?;
    Ok(Solid::try_from(&node)?)
}

/// Parse a TOML scene
pub fn parse_scene_toml(source: &str) -> Result<Solid> {
    let node: SceneNode = toml::from_str(source).context("Failed to parse TOML scene")?;
    Ok(Solid::try_from(&node)?)
}

/// Load a scene file, picking the format from the extension
pub fn load_scene(path: impl AsRef<Path>) -> Result<Solid> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let solid = match extension.as_deref() {
        Some("json") => parse_scene_json(&source),
        Some("toml") => parse_scene_toml(&source),
        _ => bail!(
            "Unsupported scene format: {} (expected .json or .toml)",
            path.display()
        ),
    }
    .with_context(|| format!("Invalid scene file: {}", path.display()))?;

    log::info!(
        "loaded scene {} ({} nodes, depth {})",
        path.display(),
        solid.node_count(),
        solid.depth()
    );
    Ok(solid)
}

/// Serialize a solid tree as pretty JSON
pub fn scene_to_json(solid: &Solid) -> Result<String> {
    serde_json::to_string_pretty(&SceneNode::from(solid)).context("Failed to serialize scene")
}
