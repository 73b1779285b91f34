// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bounding box utilities

use super::Vec3;
use crate::error::TessellateError;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box covering the closed region `[min, max]`.
///
/// `min <= max` on every axis is expected. [`BoundingBox::new`] does not check
/// it; use [`BoundingBox::try_new`] for boxes that come from user input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Build a box, rejecting non-finite corners and inverted axes
    pub fn try_new(min: Vec3, max: Vec3) -> Result<Self, TessellateError> {
        let finite = min.iter().chain(max.iter()).all(|c| c.is_finite());
        let ordered = (0..3).all(|axis| min[axis] <= max[axis]);
        if !finite || !ordered {
            return Err(TessellateError::invalid_bounds(&min, &max));
        }
        Ok(Self { min, max })
    }

    pub fn empty() -> Self {
        Self {
            min: Vec3::repeat(f64::INFINITY),
            max: Vec3::repeat(f64::NEG_INFINITY),
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Self {
        let mut bbox = Self::empty();
        for point in points {
            bbox.expand_to_include(point);
        }
        bbox
    }

    pub fn is_empty(&self) -> bool {
        (0..3).any(|axis| self.min[axis] > self.max[axis])
    }

    pub fn expand_to_include(&mut self, point: &Vec3) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Vector from `min` to `max`
    pub fn diagonal(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn diagonal_length(&self) -> f64 {
        self.diagonal().norm()
    }

    /// True when the box has no extent along at least one axis, so it
    /// encloses no volume (a point, a segment or a flat rectangle)
    pub fn is_degenerate(&self) -> bool {
        (0..3).any(|axis| self.max[axis] <= self.min[axis])
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vec3 {
        self.diagonal()
    }

    pub fn volume(&self) -> f64 {
        let size = self.size();
        size.x * size.y * size.z
    }

    /// Smallest box enclosing both boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(self.min.inf(&other.min), self.max.sup(&other.max))
    }

    /// Overlap of two boxes, `None` when they are disjoint
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let bbox = BoundingBox::new(self.min.sup(&other.min), self.max.inf(&other.max));
        if bbox.is_empty() {
            None
        } else {
            Some(bbox)
        }
    }

    pub fn translated(&self, offset: &Vec3) -> BoundingBox {
        BoundingBox::new(self.min + offset, self.max + offset)
    }

    pub fn contains_point(&self, point: &Vec3) -> bool {
        (0..3).all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }

    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Split at the per-axis midpoint into 8 equal sub-boxes.
    ///
    /// Index bit 0 selects the upper x half, bit 1 the upper y half and
    /// bit 2 the upper z half.
    pub fn octants(&self) -> [BoundingBox; 8] {
        let mid = self.center();
        std::array::from_fn(|index| {
            let mut min = self.min;
            let mut max = mid;
            for axis in 0..3 {
                if index & (1 << axis) != 0 {
                    min[axis] = mid[axis];
                    max[axis] = self.max[axis];
                }
            }
            BoundingBox::new(min, max)
        })
    }

    /// Check if two bounding boxes are approximately equal within tolerance
    pub fn approx_eq(&self, other: &BoundingBox, tolerance: f64) -> bool {
        (self.min - other.min).amax() < tolerance && (self.max - other.max).amax() < tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> BoundingBox {
        BoundingBox::new(Vec3::zeros(), Vec3::repeat(1.0))
    }

    #[test]
    fn test_bounding_box() {
        let mut bbox = BoundingBox::empty();
        assert!(bbox.is_empty());
        bbox.expand_to_include(&Vec3::new(1.0, 2.0, 3.0));
        bbox.expand_to_include(&Vec3::new(-1.0, -2.0, -3.0));

        assert_eq!(bbox.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(bbox.max, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(bbox.center(), Vec3::zeros());
        assert_eq!(bbox.volume(), 48.0);
    }

    #[test]
    fn test_try_new_rejects_inverted_and_nan() {
        assert!(BoundingBox::try_new(Vec3::zeros(), Vec3::repeat(1.0)).is_ok());
        assert!(matches!(
            BoundingBox::try_new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0)),
            Err(TessellateError::InvalidBounds { .. })
        ));
        assert!(BoundingBox::try_new(Vec3::new(f64::NAN, 0.0, 0.0), Vec3::repeat(1.0)).is_err());
        assert!(BoundingBox::try_new(Vec3::zeros(), Vec3::repeat(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_diagonal_length() {
        let bbox = BoundingBox::new(Vec3::zeros(), Vec3::new(3.0, 4.0, 12.0));
        assert_eq!(bbox.diagonal_length(), 13.0);
        assert!(!bbox.is_degenerate());

        let point = BoundingBox::new(Vec3::repeat(2.0), Vec3::repeat(2.0));
        assert!(point.is_degenerate());

        let flat = BoundingBox::new(Vec3::zeros(), Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(flat.diagonal_length(), 5.0);
        assert!(flat.is_degenerate());

        let segment = BoundingBox::new(Vec3::zeros(), Vec3::new(0.0, 2.0, 0.0));
        assert!(segment.is_degenerate());
    }

    #[test]
    fn test_octants_tile_parent() {
        let parent = BoundingBox::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 4.0, 6.0));
        let children = parent.octants();

        let total: f64 = children.iter().map(BoundingBox::volume).sum();
        assert_eq!(total, parent.volume());

        for child in &children {
            assert!(parent.contains_box(child));
            assert_eq!(child.size(), parent.size() / 2.0);
        }

        assert_eq!(children[0].min, parent.min);
        assert_eq!(children[7].max, parent.max);
        assert_eq!(children[1].min, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(children[2].min, Vec3::new(-1.0, 2.0, 2.0));
        assert_eq!(children[4].min, Vec3::new(-1.0, 0.0, 4.0));
    }

    #[test]
    fn test_union_and_intersection() {
        let a = unit();
        let b = a.translated(&Vec3::new(0.5, 0.5, 0.5));

        let union = a.union(&b);
        assert_eq!(union.min, Vec3::zeros());
        assert_eq!(union.max, Vec3::repeat(1.5));

        let overlap = a.intersection(&b).unwrap();
        assert!(overlap.approx_eq(
            &BoundingBox::new(Vec3::repeat(0.5), Vec3::repeat(1.0)),
            1e-12
        ));

        let far = a.translated(&Vec3::new(5.0, 0.0, 0.0));
        assert!(a.intersection(&far).is_none());
    }
}
