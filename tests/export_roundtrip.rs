// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Round-trip export/import tests

use anyhow::Result;
use approx::assert_relative_eq;
use octocarve::io::{parse_ascii_stl, to_ascii_stl};
use octocarve::{CarveConfig, FaceNormals, Kernel, Solid, UpAxis, Vec3};
use tempfile::NamedTempFile;

fn coarse_config() -> CarveConfig {
    let mut config = CarveConfig::default();
    config.tessellation.min_diagonal = 0.5;
    config
}

#[test]
fn test_roundtrip_ascii_stl() -> Result<()> {
    let kernel = Kernel::new(coarse_config());
    let file = NamedTempFile::with_suffix(".stl")?;

    let sphere = Solid::sphere(1.0)?;
    let output = kernel.render_to_file(&sphere, file.path())?;

    let text = std::fs::read_to_string(file.path())?;
    assert!(text.starts_with("solid cube_corner\n"));
    assert!(text.ends_with("endfacet\nendsolid"));

    let parsed = parse_ascii_stl(&text, UpAxis::Z)?;
    assert_eq!(parsed.triangles.len(), output.mesh.triangle_count());
    assert_eq!(parsed.triangles, output.mesh.triangles);

    Ok(())
}

#[test]
fn test_up_axis_swaps_written_coordinates() -> Result<()> {
    let kernel = Kernel::new(coarse_config());
    let tall = Solid::cylinder(0.5, 4.0, Default::default())?;
    let mesh = kernel.render(&tall)?.mesh;

    let z_up = parse_ascii_stl(&to_ascii_stl(&mesh, "tall", UpAxis::Z)?, UpAxis::Y)?;
    let y_up = parse_ascii_stl(&to_ascii_stl(&mesh, "tall", UpAxis::Y)?, UpAxis::Y)?;

    let file_extent = |triangles: &[octocarve::Triangle]| {
        let mut max = Vec3::repeat(f64::MIN);
        for v in triangles.iter().flat_map(|t| t.vertices.iter()) {
            max = max.sup(v);
        }
        max
    };
    let z_max = file_extent(&z_up.triangles);
    let y_max = file_extent(&y_up.triangles);

    // Height runs along scene Y; with Z up it lands on the file's Z axis
    assert_relative_eq!(z_max.z, y_max.y, epsilon = 1e-12);
    assert_relative_eq!(z_max.y, y_max.z, epsilon = 1e-12);
    assert!(z_max.z > z_max.y);

    Ok(())
}

#[test]
fn test_outward_normals_survive_export() -> Result<()> {
    let mut config = coarse_config();
    config.output.normals = FaceNormals::Outward;
    config.output.up_axis = UpAxis::Y;
    let kernel = Kernel::new(config);

    let file = NamedTempFile::with_suffix(".stl")?;
    kernel.render_to_file(&Solid::cube(1.0)?, file.path())?;

    let parsed = parse_ascii_stl(&std::fs::read_to_string(file.path())?, UpAxis::Y)?;
    assert!(!parsed.triangles.is_empty());
    for triangle in &parsed.triangles {
        assert_relative_eq!(triangle.normal.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            triangle.normal,
            triangle.geometric_normal(),
            epsilon = 1e-9
        );
    }

    Ok(())
}

#[test]
fn test_binary_stl_export() -> Result<()> {
    let mut config = coarse_config();
    config.output.binary = true;
    let kernel = Kernel::new(config);

    let file = NamedTempFile::with_suffix(".stl")?;
    let output = kernel.render_to_file(&Solid::sphere(1.0)?, file.path())?;

    let bytes = std::fs::read(file.path())?;
    let count = output.mesh.triangle_count();
    assert_eq!(bytes.len(), 84 + 50 * count);

    let stored = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
    assert_eq!(stored as usize, count);

    Ok(())
}
