// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Built-in demo object

use crate::error::SolidError;
use crate::geometry::Vec3;
use crate::solid::{CylinderAxis, Solid};

/// Name written into the STL header for the demo object
pub const DEMO_NAME: &str = "cube_corner";

/// A 3-unit block standing on a short post, capped by a horizontal half-round
/// with a bore through it.
///
/// Built Y-up: the post runs along +Y, the cap and bore along +X.
pub fn demo_scene() -> Result<Solid, SolidError> {
    let post = Solid::cylinder(1.0, 2.0, CylinderAxis::Y)?;
    let block = Solid::translate(Vec3::new(-1.5, 2.0, -1.5), Solid::cube(3.0)?)?;
    let base = Solid::union(block, post);

    let cap = Solid::translate(
        Vec3::new(-1.5, 5.0, 0.0),
        Solid::cylinder(1.5, 3.0, CylinderAxis::X)?,
    )?;
    let body = Solid::union(base, cap);

    let bore = Solid::translate(
        Vec3::new(-1.5, 5.0, 0.0),
        Solid::cylinder(0.7, 3.0, CylinderAxis::X)?,
    )?;
    Ok(Solid::difference(body, bore))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;

    #[test]
    fn test_demo_shape() {
        let demo = demo_scene().unwrap();
        assert_eq!(demo.node_count(), 10);
        assert_eq!(demo.depth(), 5);

        // Post, block, cap material
        assert!(demo.contains(&Vec3::new(0.0, 1.0, 0.0)));
        assert!(demo.contains(&Vec3::new(0.0, 3.0, 0.0)));
        assert!(demo.contains(&Vec3::new(0.0, 6.2, 0.0)));
        // Bore axis is empty
        assert!(!demo.contains(&Vec3::new(0.0, 5.0, 0.0)));
        assert!(!demo.contains(&Vec3::new(1.0, 5.0, 0.5)));
        // Beside the post
        assert!(!demo.contains(&Vec3::new(1.2, 1.0, 0.0)));

        assert_eq!(
            demo.bounds(),
            BoundingBox::new(Vec3::new(-1.5, 0.0, -1.5), Vec3::new(1.5, 6.5, 1.5))
        );
    }
}
