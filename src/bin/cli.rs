// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Octocarve CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use octocarve::cli::Reporter;
use octocarve::config::DEFAULT_CONFIG_FILE;
use octocarve::io::{load_scene, scene_to_json};
use octocarve::scene::demo_scene;
use octocarve::{CarveConfig, Kernel, Solid, UpAxis};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "octocarve")]
#[command(about = "Octocarve - carve CSG solids into printable box meshes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./octocarve.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Smallest box diagonal the octree may produce
    #[arg(long, global = true)]
    min_diagonal: Option<f64>,

    /// Sample intervals per axis for the containment test
    #[arg(long, global = true)]
    steps: Option<u32>,

    /// Maximum subdivision depth
    #[arg(long, global = true)]
    max_depth: Option<u32>,

    /// Start from tight bounds for intersections and differences
    #[arg(long, global = true)]
    tight_bounds: bool,

    /// Write binary STL
    #[arg(long, global = true)]
    binary: bool,

    /// Up axis of the written file (y or z)
    #[arg(long, global = true)]
    up_axis: Option<UpAxis>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene file (JSON or TOML) to STL
    Render {
        /// Input scene file
        scene: String,

        /// Output STL file
        #[arg(short, long)]
        output: String,
    },

    /// Render the built-in demo object
    Demo {
        /// Output STL file
        #[arg(short, long, default_value = "cube_corner.stl")]
        output: String,

        /// Also write the demo scene as JSON
        #[arg(long, value_name = "FILE")]
        scene_out: Option<String>,
    },

    /// Tessellate a scene and print statistics without writing a mesh
    Stats {
        /// Input scene file
        scene: String,
    },

    /// Write the effective configuration as TOML
    Config {
        /// Output file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: String,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&cli) {
        Reporter::report_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Render { scene, output } => {
            let kernel = Kernel::new(effective_config(cli)?);
            let solid = load_input(scene)?;
            render_command(&kernel, &solid, scene, output)
        }
        Commands::Demo { output, scene_out } => {
            let kernel = Kernel::new(effective_config(cli)?);
            let solid = demo_scene().context("Failed to build demo scene")?;

            if let Some(path) = scene_out {
                std::fs::write(path, scene_to_json(&solid)?)
                    .with_context(|| format!("Failed to write scene file: {}", path))?;
                Reporter::report_info(&format!("Scene written to {}", path));
            }

            render_command(&kernel, &solid, "demo", output)
        }
        Commands::Stats { scene } => {
            let kernel = Kernel::new(effective_config(cli)?);
            let solid = load_input(scene)?;
            Reporter::progress(&format!("Tessellating {}", scene));

            let output = kernel.render(&solid)?;
            let stats = output.stats();
            Reporter::report_render(scene, &stats, &output.tessellation.stats, output.elapsed);
            stats.print();
            Ok(())
        }
        Commands::Config { output } => {
            let config = effective_config(cli)?;
            config.save(output)?;
            Reporter::success(&format!("Configuration written to {}", output));
            Ok(())
        }
        Commands::Version => {
            println!("Octocarve v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Config file (explicit or default), then environment, then flags
fn effective_config(cli: &Cli) -> Result<CarveConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = CarveConfig::from_file(path)?;
            config.apply_env(|key| std::env::var(key).ok())?;
            config
        }
        None => CarveConfig::load()?,
    };

    if let Some(min_diagonal) = cli.min_diagonal {
        config.tessellation.min_diagonal = min_diagonal;
    }
    if let Some(steps) = cli.steps {
        config.tessellation.sample_steps = steps;
    }
    if let Some(max_depth) = cli.max_depth {
        config.tessellation.max_depth = Some(max_depth);
    }
    if cli.tight_bounds {
        config.tessellation.tighten_bounds = true;
    }
    if cli.binary {
        config.output.binary = true;
    }
    if let Some(up_axis) = cli.up_axis {
        config.output.up_axis = up_axis;
    }

    config.validate()?;
    Ok(config)
}

fn load_input(scene: &str) -> Result<Solid> {
    if !Path::new(scene).exists() {
        anyhow::bail!("Input file not found: {}", scene);
    }
    load_scene(scene)
}

fn render_command(kernel: &Kernel, solid: &Solid, source: &str, output: &str) -> Result<()> {
    Reporter::progress(&format!("Rendering {}", source));

    let result = kernel.render_to_file(solid, output)?;
    let stats = result.stats();

    if result.tessellation.stats.truncated > 0 {
        Reporter::report_warning(&format!(
            "{} boxes hit the depth limit and were dropped",
            result.tessellation.stats.truncated
        ));
    }

    Reporter::report_render(source, &stats, &result.tessellation.stats, result.elapsed);
    Reporter::success(&format!("{} -> {}", source, output));
    Ok(())
}
