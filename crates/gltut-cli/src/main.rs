//! gltut - inspect the tutorial transform pipeline
//!
//! Evaluates the same model/view/projection chain the OpenGL tutorials
//! upload every frame, and prints it instead of drawing it.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Layout;

#[derive(Parser)]
#[command(name = "gltut")]
#[command(author, version, about = "Inspect the OpenGL tutorial transform pipeline")]
#[command(long_about = "
Evaluates the camera, model and animation transforms of the OpenGL
tutorials and prints the matrices that would be uploaded to the shader.

Examples:
  gltut mvp                              # Default cube scene at t = 0
  gltut mvp --time 1.5 --layout cols     # Uniform payload at t = 1.5
  gltut frames --count 5 --fps 60 --json # First five frames as JSON
  gltut project -c scene.yaml --time 2   # Where the mesh lands in NDC
  gltut matrix rotate 90 0 0 1           # One kernel matrix
  gltut matrix look-at 0 0 5 0 0 0 0 1 0
  gltut config > scene.yaml              # Start a config from defaults
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the combined transform for one point in time
    Mvp(MvpArgs),

    /// Print the upload payload for consecutive frames
    #[command(visible_alias = "f")]
    Frames(FramesArgs),

    /// Project the mesh vertices to normalized device coordinates
    #[command(visible_alias = "p")]
    Project(ProjectArgs),

    /// Print a single kernel matrix
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// Print the effective scene configuration as YAML
    Config(ConfigArgs),
}

/// Scene source shared by the scene-driven commands.
#[derive(Args)]
struct SceneArgs {
    /// Scene config file (YAML); defaults to the cube tutorial
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct MvpArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Time in seconds
    #[arg(short, long, default_value = "0")]
    time: f32,

    /// Matrix layout: rows (math order) or cols (GL upload order)
    #[arg(short, long, value_enum, default_value_t = Layout::Rows)]
    layout: Layout,

    /// Also print the projection, view, model and animation factors
    #[arg(short, long)]
    all: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FramesArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames
    #[arg(short = 'n', long, default_value = "60")]
    count: usize,

    /// Frames per second
    #[arg(long, default_value = "60")]
    fps: f32,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ProjectArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Time in seconds
    #[arg(short, long, default_value = "0")]
    time: f32,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct MatrixArgs {
    #[command(subcommand)]
    kind: MatrixKind,

    /// Matrix layout: rows (math order) or cols (GL upload order)
    #[arg(short, long, value_enum, default_value_t = Layout::Rows, global = true)]
    layout: Layout,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum MatrixKind {
    /// Identity
    Identity,

    /// Non-uniform scale
    #[command(allow_negative_numbers = true)]
    Scale { x: f32, y: f32, z: f32 },

    /// Translation
    #[command(allow_negative_numbers = true)]
    Translate { x: f32, y: f32, z: f32 },

    /// Rotation about +X (degrees)
    #[command(allow_negative_numbers = true)]
    RotateX { degrees: f32 },

    /// Rotation about +Y (degrees)
    #[command(allow_negative_numbers = true)]
    RotateY { degrees: f32 },

    /// Rotation about +Z (degrees)
    #[command(allow_negative_numbers = true)]
    RotateZ { degrees: f32 },

    /// Rotation about an arbitrary axis (degrees, axis is normalized)
    #[command(allow_negative_numbers = true)]
    Rotate { degrees: f32, ax: f32, ay: f32, az: f32 },

    /// Perspective projection (vertical FOV in degrees)
    #[command(allow_negative_numbers = true)]
    Perspective {
        fovy_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },

    /// Look-at view matrix
    #[command(allow_negative_numbers = true)]
    LookAt {
        ex: f32,
        ey: f32,
        ez: f32,
        tx: f32,
        ty: f32,
        tz: f32,
        ux: f32,
        uy: f32,
        uz: f32,
    },
}

#[derive(Args)]
struct ConfigArgs {
    #[command(flatten)]
    scene: SceneArgs,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Mvp(args) => commands::mvp::run(args, cli.verbose),
        Commands::Frames(args) => commands::frames::run(args, cli.verbose),
        Commands::Project(args) => commands::project::run(args, cli.verbose),
        Commands::Matrix(args) => commands::matrix::run(args, cli.verbose),
        Commands::Config(args) => commands::config::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_matrix_negative_args() {
        let cli = Cli::try_parse_from(["gltut", "matrix", "translate", "1", "-2", "3.5", "--layout", "cols"]).unwrap();
        match cli.command {
            Commands::Matrix(args) => {
                assert!(matches!(args.kind, MatrixKind::Translate { x, y, z } if x == 1.0 && y == -2.0 && z == 3.5));
                assert_eq!(args.layout, Layout::Cols);
            }
            _ => panic!("expected matrix command"),
        }
    }

    #[test]
    fn test_parse_verbose_count() {
        let cli = Cli::try_parse_from(["gltut", "-vv", "frames", "-n", "3"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Frames(args) => {
                assert_eq!(args.count, 3);
                assert_eq!(args.fps, 60.0);
                assert!(args.scene.config.is_none());
            }
            _ => panic!("expected frames command"),
        }
    }
}
