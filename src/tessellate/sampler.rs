// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grid-sampled containment test

use super::config::MAX_SAMPLE_STEPS;
use crate::geometry::{BoundingBox, Vec3};
use crate::solid::Solid;

/// Evenly spaced coordinates along one axis, both ends included.
///
/// Coordinates are derived from the sample index rather than by adding a
/// step repeatedly, so the last sample is exactly `max`.
#[derive(Debug, Clone, Copy)]
struct AxisSamples {
    min: f64,
    max: f64,
    steps: u32,
}

impl AxisSamples {
    fn new(min: f64, max: f64, steps: u32) -> Self {
        Self {
            min,
            max,
            steps: clamp_steps(steps),
        }
    }

    /// A flat axis has a single sample
    fn count(&self) -> u64 {
        if self.max == self.min {
            1
        } else {
            u64::from(self.steps) + 1
        }
    }

    fn at(&self, index: u64) -> f64 {
        if index >= u64::from(self.steps) {
            self.max
        } else {
            self.min + (self.max - self.min) * index as f64 / f64::from(self.steps)
        }
    }
}

/// Sample divisions actually used: at least 1, at most [`MAX_SAMPLE_STEPS`]
fn clamp_steps(steps: u32) -> u32 {
    steps.clamp(1, MAX_SAMPLE_STEPS)
}

fn axes(bbox: &BoundingBox, steps: u32) -> [AxisSamples; 3] {
    std::array::from_fn(|axis| AxisSamples::new(bbox.min[axis], bbox.max[axis], steps))
}

/// Every sample point of the `(steps + 1)³` grid over `bbox`, x-major.
/// `steps` is clamped like [`ContainmentSampler::new`].
pub fn sample_points(bbox: &BoundingBox, steps: u32) -> Vec<Vec3> {
    let [xs, ys, zs] = axes(bbox, steps);
    let capacity = xs.count() * ys.count() * zs.count();
    let mut points = Vec::with_capacity(usize::try_from(capacity).unwrap_or(0));
    for i in 0..xs.count() {
        for j in 0..ys.count() {
            for k in 0..zs.count() {
                points.push(Vec3::new(xs.at(i), ys.at(j), zs.at(k)));
            }
        }
    }
    points
}

/// Estimates whether `bbox` lies entirely inside `solid` and counts the
/// containment queries it makes.
#[derive(Debug, Clone)]
pub struct ContainmentSampler {
    steps: u32,
    evaluated: u64,
}

impl ContainmentSampler {
    /// `steps` divisions per axis, clamped to `1..=MAX_SAMPLE_STEPS`
    pub fn new(steps: u32) -> Self {
        Self {
            steps: clamp_steps(steps),
            evaluated: 0,
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Containment queries made so far
    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// True iff every grid sample is inside. Stops at the first miss.
    ///
    /// This is a heuristic: a boundary passing between samples goes unseen.
    pub fn probably_inside(&mut self, bbox: &BoundingBox, solid: &Solid) -> bool {
        let [xs, ys, zs] = axes(bbox, self.steps);
        for i in 0..xs.count() {
            let x = xs.at(i);
            for j in 0..ys.count() {
                let y = ys.at(j);
                for k in 0..zs.count() {
                    self.evaluated += 1;
                    if !solid.contains(&Vec3::new(x, y, zs.at(k))) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// One-shot form of [`ContainmentSampler::probably_inside`]
pub fn probably_inside(bbox: &BoundingBox, solid: &Solid, steps: u32) -> bool {
    ContainmentSampler::new(steps).probably_inside(bbox, solid)
}
