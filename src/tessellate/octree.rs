// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Octree subdivision of a solid's bounding box

use super::{ContainmentSampler, TessellationConfig};
use crate::error::TessellateError;
use crate::geometry::BoundingBox;
use crate::solid::Solid;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

/// Counters collected during one tessellation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TessellationStats {
    /// Boxes taken off the work stack
    pub visited: u64,
    /// Boxes judged inside and kept
    pub accepted: u64,
    /// Boxes below the resolution floor
    pub dropped: u64,
    /// Boxes beyond the depth limit
    pub truncated: u64,
    /// Boxes split into octants
    pub subdivided: u64,
    /// Deepest level visited, the root is level 0
    pub max_depth_reached: u32,
    /// Point containment queries issued by the sampler
    pub samples_evaluated: u64,
}

/// Boxes accepted by one tessellation run
#[derive(Debug, Clone, PartialEq)]
pub struct Tessellation {
    /// Box the subdivision started from
    pub root: BoundingBox,
    /// Accepted boxes in depth-first octant order
    pub boxes: Vec<BoundingBox>,
    pub stats: TessellationStats,
}

impl Tessellation {
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Sum of accepted box volumes
    pub fn volume(&self) -> f64 {
        self.boxes.iter().map(BoundingBox::volume).sum()
    }

    pub fn into_boxes(self) -> Vec<BoundingBox> {
        self.boxes
    }
}

/// Tessellate `solid` starting from its bounding box
pub fn tessellate(
    solid: &Solid,
    config: &TessellationConfig,
) -> Result<Tessellation, TessellateError> {
    let root = if config.tighten_bounds {
        solid.tight_bounds()
    } else {
        solid.bounds()
    };
    tessellate_box(solid, root, config)
}

/// Tessellate `solid` inside an explicit starting box
pub fn tessellate_box(
    solid: &Solid,
    root: BoundingBox,
    config: &TessellationConfig,
) -> Result<Tessellation, TessellateError> {
    config.validate()?;
    solid.validate()?;
    let root = BoundingBox::try_new(root.min, root.max)?;
    if root.is_degenerate() {
        return Err(TessellateError::DegenerateBounds {
            at: [root.min.x, root.min.y, root.min.z],
        });
    }

    let tessellation = Octree::new(solid, config, root).run();

    debug!(
        "tessellated {} ({} nodes): {} boxes accepted, {} visited, {} dropped, max depth {}, {} samples",
        solid.kind(),
        solid.node_count(),
        tessellation.stats.accepted,
        tessellation.stats.visited,
        tessellation.stats.dropped,
        tessellation.stats.max_depth_reached,
        tessellation.stats.samples_evaluated,
    );
    Ok(tessellation)
}

/// State of one run. Owned by the call, so nothing leaks between runs.
struct Octree<'a> {
    solid: &'a Solid,
    min_diagonal: f64,
    depth_limit: u32,
    sampler: ContainmentSampler,
    stack: Vec<(BoundingBox, u32)>,
    boxes: Vec<BoundingBox>,
    stats: TessellationStats,
}

impl<'a> Octree<'a> {
    fn new(solid: &'a Solid, config: &TessellationConfig, root: BoundingBox) -> Self {
        Self {
            solid,
            min_diagonal: config.min_diagonal,
            depth_limit: config.depth_limit(root.diagonal_length()),
            sampler: ContainmentSampler::new(config.sample_steps),
            stack: vec![(root, 0)],
            boxes: Vec::new(),
            stats: TessellationStats::default(),
        }
    }

    fn run(mut self) -> Tessellation {
        let root = self.stack[0].0;

        while let Some((bbox, depth)) = self.stack.pop() {
            self.evaluate(bbox, depth);
        }

        if self.stats.truncated > 0 {
            warn!(
                "depth limit {} cut off {} boxes above the resolution floor",
                self.depth_limit, self.stats.truncated
            );
        }

        self.stats.samples_evaluated = self.sampler.evaluated();
        Tessellation {
            root,
            boxes: self.boxes,
            stats: self.stats,
        }
    }

    fn evaluate(&mut self, bbox: BoundingBox, depth: u32) {
        self.stats.visited += 1;
        self.stats.max_depth_reached = self.stats.max_depth_reached.max(depth);

        if bbox.diagonal_length() < self.min_diagonal {
            self.stats.dropped += 1;
            return;
        }
        if depth > self.depth_limit {
            self.stats.truncated += 1;
            return;
        }

        if self.sampler.probably_inside(&bbox, self.solid) {
            trace!("accept depth {} {:?}..{:?}", depth, bbox.min, bbox.max);
            self.stats.accepted += 1;
            self.boxes.push(bbox);
            return;
        }

        self.stats.subdivided += 1;
        // Reversed so octant 0 is popped first, as a recursive walk would visit it
        for child in bbox.octants().into_iter().rev() {
            self.stack.push((child, depth + 1));
        }
    }
}
