//! CLI command implementations

pub mod config;
pub mod frames;
pub mod matrix;
pub mod mvp;
pub mod project;

use anyhow::{Context, Result};
use clap::ValueEnum;
use gltut_math::Mat4;
use gltut_scene::{Scene, SceneConfig};
use std::path::Path;
use tracing::debug;

/// How a matrix is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Layout {
    /// Row-major, as the math is written
    #[default]
    Rows,
    /// Column-major, as `glUniformMatrix4fv` receives it
    Cols,
}

impl Layout {
    pub fn name(self) -> &'static str {
        match self {
            Layout::Rows => "rows",
            Layout::Cols => "cols",
        }
    }

    /// The four lines of `m` in this layout: rows, or columns.
    pub fn lines(self, m: &Mat4) -> [[f32; 4]; 4] {
        match self {
            Layout::Rows => m.m,
            Layout::Cols => m.transpose().m,
        }
    }
}

/// Loads the scene config from `path`, or the defaults when absent.
pub fn load_config(path: Option<&Path>) -> Result<SceneConfig> {
    match path {
        Some(path) => SceneConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => {
            debug!("No config given, using defaults");
            Ok(SceneConfig::default())
        }
    }
}

/// Loads and builds the scene.
pub fn load_scene(path: Option<&Path>) -> Result<Scene> {
    let config = load_config(path)?;
    config.build().context("Invalid scene")
}

/// Prints a matrix as four aligned lines.
pub fn print_matrix(label: &str, m: &Mat4, layout: Layout) {
    if !label.is_empty() {
        println!("{} ({}):", label, layout.name());
    }
    for line in layout.lines(m) {
        println!(
            "  [{:>10.6} {:>10.6} {:>10.6} {:>10.6}]",
            line[0], line[1], line[2], line[3]
        );
    }
}
