// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Configuration: tessellation and output settings

use crate::geometry::FaceNormals;
use crate::io::UpAxis;
use crate::scene::DEMO_NAME;
use crate::tessellate::TessellationConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File picked up by [`CarveConfig::load`] from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "octocarve.toml";

/// Mesh output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Name written after `solid` in ASCII STL
    pub solid_name: String,
    /// Axis convention of the written file
    pub up_axis: UpAxis,
    /// Normal stored with each triangle
    pub normals: FaceNormals,
    /// Write binary instead of ASCII STL
    pub binary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            solid_name: DEMO_NAME.to_string(),
            up_axis: UpAxis::default(),
            normals: FaceNormals::default(),
            binary: false,
        }
    }
}

/// Full pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarveConfig {
    pub tessellation: TessellationConfig,
    pub output: OutputConfig,
}

impl CarveConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: CarveConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `OCTOCARVE_*` overrides read through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup("OCTOCARVE_MIN_DIAGONAL") {
            self.tessellation.min_diagonal = value
                .parse()
                .with_context(|| format!("OCTOCARVE_MIN_DIAGONAL: invalid number `{}`", value))?;
        }

        if let Some(value) = lookup("OCTOCARVE_SAMPLE_STEPS") {
            self.tessellation.sample_steps = value
                .parse()
                .with_context(|| format!("OCTOCARVE_SAMPLE_STEPS: invalid count `{}`", value))?;
        }

        if let Some(value) = lookup("OCTOCARVE_MAX_DEPTH") {
            self.tessellation.max_depth = Some(
                value
                    .parse()
                    .with_context(|| format!("OCTOCARVE_MAX_DEPTH: invalid depth `{}`", value))?,
            );
        }

        if let Some(value) = lookup("OCTOCARVE_UP_AXIS") {
            self.output.up_axis = value.parse()?;
        }

        self.validate()
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.tessellation
            .validate()
            .map_err(|e| anyhow!(e).context("Invalid tessellation settings"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_toml_uses_defaults() -> Result<()> {
        let config: CarveConfig = toml::from_str(
            r#"
            [tessellation]
            min_diagonal = 0.3

            [output]
            up_axis = "y"
            normals = "outward"
            "#,
        )?;

        assert_eq!(config.tessellation.min_diagonal, 0.3);
        assert_eq!(config.tessellation.sample_steps, 10);
        assert_eq!(config.output.up_axis, UpAxis::Y);
        assert_eq!(config.output.normals, FaceNormals::Outward);
        assert_eq!(config.output.solid_name, "cube_corner");
        Ok(())
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let mut config = CarveConfig::default();
        config.tessellation.max_depth = Some(6);
        config.output.binary = true;

        let file = NamedTempFile::with_suffix(".toml")?;
        config.save(file.path())?;
        assert_eq!(CarveConfig::from_file(file.path())?, config);
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let env: HashMap<&str, &str> = [
            ("OCTOCARVE_MIN_DIAGONAL", "0.5"),
            ("OCTOCARVE_SAMPLE_STEPS", "4"),
            ("OCTOCARVE_UP_AXIS", "Y"),
        ]
        .into_iter()
        .collect();

        let mut config = CarveConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()))?;
        assert_eq!(config.tessellation.min_diagonal, 0.5);
        assert_eq!(config.tessellation.sample_steps, 4);
        assert_eq!(config.tessellation.max_depth, None);
        assert_eq!(config.output.up_axis, UpAxis::Y);
        Ok(())
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = CarveConfig::default();
        assert!(config
            .apply_env(|key| (key == "OCTOCARVE_SAMPLE_STEPS").then(|| "many".to_string()))
            .is_err());

        let mut config = CarveConfig::default();
        assert!(config
            .apply_env(|key| (key == "OCTOCARVE_MIN_DIAGONAL").then(|| "-1".to_string()))
            .is_err());

        let file = NamedTempFile::with_suffix(".toml").unwrap();
        std::fs::write(file.path(), "[tessellation]\nsample_steps = 0\n").unwrap();
        assert!(CarveConfig::from_file(file.path()).is_err());
    }
}
