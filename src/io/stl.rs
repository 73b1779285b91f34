// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL import/export

use crate::config::OutputConfig;
use crate::geometry::{Mesh, Triangle, Vec3};
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Which scene axis ends up as the file's vertical axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpAxis {
    /// Coordinates are written as they are
    Y,
    /// Y and Z are exchanged on write, turning a Y-up scene into a Z-up file
    #[default]
    Z,
}

impl UpAxis {
    /// Scene coordinates to file coordinates
    pub fn to_file(self, v: &Vec3) -> [f64; 3] {
        match self {
            UpAxis::Y => [v.x, v.y, v.z],
            UpAxis::Z => [v.x, v.z, v.y],
        }
    }

    /// File coordinates back to scene coordinates
    pub fn from_file(self, [a, b, c]: [f64; 3]) -> Vec3 {
        match self {
            UpAxis::Y => Vec3::new(a, b, c),
            UpAxis::Z => Vec3::new(a, c, b),
        }
    }
}

impl std::str::FromStr for UpAxis {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "y" => Ok(UpAxis::Y),
            "z" => Ok(UpAxis::Z),
            other => Err(anyhow!("Unknown up axis `{}` (expected y or z)", other)),
        }
    }
}

/// Export mesh to STL format, binary when `options.binary` is set
pub fn export_stl(mesh: &Mesh, path: impl AsRef<Path>, options: &OutputConfig) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create STL file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let written = if options.binary {
        write_binary_stl(&mut writer, mesh, options.up_axis)
    } else {
        write_ascii_stl(&mut writer, mesh, &options.solid_name, options.up_axis)
    };
    written.with_context(|| format!("Failed to write STL file {}", path.display()))?;

    writer.flush().context("Failed to flush STL file")?;
    Ok(())
}

/// Write the ASCII faceted-solid form. The closing `endsolid` has no newline.
pub fn write_ascii_stl<W: Write>(
    writer: &mut W,
    mesh: &Mesh,
    name: &str,
    up_axis: UpAxis,
) -> Result<()> {
    writeln!(writer, "solid {}", name)?;

    for tri in &mesh.triangles {
        let [nx, ny, nz] = up_axis.to_file(&tri.normal);
        writeln!(writer, "facet normal  {:.1}  {:.1}  {:.1}", nx, ny, nz)?;
        writeln!(writer, "outer loop")?;
        for vertex in &tri.vertices {
            let [x, y, z] = up_axis.to_file(vertex);
            writeln!(writer, "vertex {} {} {}", x, y, z)?;
        }
        writeln!(writer, "endloop")?;
        writeln!(writer, "endfacet")?;
    }

    write!(writer, "endsolid")?;
    Ok(())
}

/// Render the ASCII form into a string
pub fn to_ascii_stl(mesh: &Mesh, name: &str, up_axis: UpAxis) -> Result<String> {
    let mut buffer = Vec::new();
    write_ascii_stl(&mut buffer, mesh, name, up_axis)?;
    String::from_utf8(buffer).context("STL output is not valid UTF-8")
}

/// Write binary STL through `stl_io`. Coordinates are narrowed to `f32`.
pub fn write_binary_stl<W: Write>(writer: &mut W, mesh: &Mesh, up_axis: UpAxis) -> Result<()> {
    use stl_io::{Normal, Triangle as StlTriangle, Vertex as StlVertex};

    let narrow = |v: &Vec3| {
        let [x, y, z] = up_axis.to_file(v);
        [x as f32, y as f32, z as f32]
    };

    let triangles: Vec<StlTriangle> = mesh
        .triangles
        .iter()
        .map(|tri| StlTriangle {
            normal: Normal::new(narrow(&tri.normal)),
            vertices: [
                StlVertex::new(narrow(&tri.vertices[0])),
                StlVertex::new(narrow(&tri.vertices[1])),
                StlVertex::new(narrow(&tri.vertices[2])),
            ],
        })
        .collect();

    stl_io::write_stl(writer, triangles.iter()).context("Failed to encode binary STL")?;
    Ok(())
}

/// Contents of an ASCII STL document
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiStl {
    pub name: String,
    pub triangles: Vec<Triangle>,
}

/// Parse the ASCII form written by [`write_ascii_stl`] back into scene
/// coordinates. Indentation and the spacing between tokens are not significant.
pub fn parse_ascii_stl(source: &str, up_axis: UpAxis) -> Result<AsciiStl> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or_else(|| anyhow!("Empty STL document"))?;
    let name = match header.split_once(char::is_whitespace) {
        Some(("solid", name)) => name.trim().to_string(),
        None if header == "solid" => String::new(),
        _ => bail!("Line 1: expected `solid`, found `{}`", header),
    };

    let mut triangles = Vec::new();
    loop {
        let (number, line) = lines
            .next()
            .ok_or_else(|| anyhow!("Missing `endsolid`"))?;
        if line.starts_with("endsolid") {
            break;
        }

        let normal = parse_tagged_triple(number, line, "facet normal")?;
        expect_line(lines.next(), "outer loop")?;
        let mut vertices = [Vec3::zeros(); 3];
        for vertex in &mut vertices {
            let (number, line) = lines
                .next()
                .ok_or_else(|| anyhow!("Unexpected end of file inside facet"))?;
            *vertex = up_axis.from_file(parse_tagged_triple(number, line, "vertex")?);
        }
        expect_line(lines.next(), "endloop")?;
        expect_line(lines.next(), "endfacet")?;

        triangles.push(Triangle::with_normal(vertices, up_axis.from_file(normal)));
    }

    Ok(AsciiStl { name, triangles })
}

fn expect_line(line: Option<(usize, &str)>, keyword: &str) -> Result<()> {
    match line {
        Some((_, text)) if text == keyword => Ok(()),
        Some((number, text)) => bail!("Line {}: expected `{}`, found `{}`", number, keyword, text),
        None => bail!("Unexpected end of file, expected `{}`", keyword),
    }
}

fn parse_tagged_triple(number: usize, line: &str, tag: &str) -> Result<[f64; 3]> {
    let mut tokens = line.split_whitespace();
    for expected in tag.split_whitespace() {
        if tokens.next() != Some(expected) {
            bail!("Line {}: expected `{}`, found `{}`", number, tag, line);
        }
    }

    let mut values = [0.0; 3];
    for value in &mut values {
        let token = tokens
            .next()
            .ok_or_else(|| anyhow!("Line {}: `{}` needs three numbers", number, tag))?;
        *value = token
            .parse()
            .with_context(|| format!("Line {}: invalid number `{}`", number, token))?;
    }
    if tokens.next().is_some() {
        bail!("Line {}: trailing data after `{}`", number, tag);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{extract_faces, BoundingBox, FaceNormals};
    use tempfile::NamedTempFile;

    fn sample_mesh() -> Mesh {
        let bbox = BoundingBox::new(Vec3::new(-1.5, 2.0, 0.25), Vec3::new(-1.0, 2.5, 0.75));
        extract_faces(&[bbox], FaceNormals::Zero)
    }

    #[test]
    fn test_ascii_layout() -> Result<()> {
        let mut mesh = Mesh::new();
        mesh.add_triangle(Triangle::new([
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(1.5, 1.0, 2.0),
            Vec3::new(1.5, 3.0, 2.0),
        ]));

        let text = to_ascii_stl(&mesh, "cube_corner", UpAxis::Z)?;
        let expected = "solid cube_corner\n\
                        facet normal  0.0  0.0  0.0\n\
                        outer loop\n\
                        vertex 0 2 1\n\
                        vertex 1.5 2 1\n\
                        vertex 1.5 2 3\n\
                        endloop\n\
                        endfacet\n\
                        endsolid";
        assert_eq!(text, expected);
        Ok(())
    }

    #[test]
    fn test_ascii_roundtrip() -> Result<()> {
        let mesh = sample_mesh();
        for up_axis in [UpAxis::Y, UpAxis::Z] {
            let text = to_ascii_stl(&mesh, "part", up_axis)?;
            let parsed = parse_ascii_stl(&text, up_axis)?;
            assert_eq!(parsed.name, "part");
            assert_eq!(parsed.triangles, mesh.triangles);
        }
        Ok(())
    }

    #[test]
    fn test_outward_normals_written() -> Result<()> {
        let bbox = BoundingBox::new(Vec3::zeros(), Vec3::repeat(1.0));
        let mesh = extract_faces(&[bbox], FaceNormals::Outward);
        let text = to_ascii_stl(&mesh, "n", UpAxis::Y)?;
        assert!(text.contains("facet normal  0.0  -1.0  0.0"));

        let parsed = parse_ascii_stl(&text, UpAxis::Y)?;
        assert_eq!(parsed.triangles, mesh.triangles);
        Ok(())
    }

    #[test]
    fn test_header_name() -> Result<()> {
        assert_eq!(parse_ascii_stl("solid\nendsolid", UpAxis::Y)?.name, "");
        assert_eq!(parse_ascii_stl("solid  my part \nendsolid", UpAxis::Y)?.name, "my part");
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_ascii_stl("", UpAxis::Y).is_err());
        assert!(parse_ascii_stl("solidfoo\nendsolid", UpAxis::Y).is_err());
        assert!(parse_ascii_stl("facet normal 0 0 0\nendsolid", UpAxis::Y).is_err());
        assert!(parse_ascii_stl("solid x\n", UpAxis::Y).is_err());
        assert!(parse_ascii_stl("solid x\nfacet normal 0 0\n", UpAxis::Y).is_err());

        let bad_vertex = "solid x\nfacet normal 0 0 0\nouter loop\nvertex 0 0 zero\n";
        let err = parse_ascii_stl(bad_vertex, UpAxis::Y).unwrap_err();
        assert!(format!("{:#}", err).contains("Line 4"));
    }

    #[test]
    fn test_export_files() -> Result<()> {
        let mesh = sample_mesh();

        let ascii = NamedTempFile::with_suffix(".stl")?;
        export_stl(&mesh, ascii.path(), &OutputConfig::default())?;
        let text = std::fs::read_to_string(ascii.path())?;
        assert!(text.starts_with("solid cube_corner\n"));
        assert!(text.ends_with("endsolid"));

        let binary = NamedTempFile::with_suffix(".stl")?;
        let options = OutputConfig {
            binary: true,
            ..OutputConfig::default()
        };
        export_stl(&mesh, binary.path(), &options)?;
        // 80-byte header, u32 count, 50 bytes per triangle
        let bytes = std::fs::read(binary.path())?;
        assert_eq!(bytes.len(), 84 + 50 * mesh.triangle_count());
        assert_eq!(
            u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize,
            mesh.triangle_count()
        );
        Ok(())
    }
}
