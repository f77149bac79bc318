//! # gltut-scene
//!
//! The per-frame transform pipeline of the OpenGL tutorials, without the
//! window or the GL context.
//!
//! A [`Scene`] ties together:
//!
//! - [`Camera`] - eye, target, up and a perspective frustum
//! - [`Model`] - static placement of the mesh in the world
//! - [`Animation`] - a time-dependent transform (spin, swing)
//! - [`MeshKind`] / [`Mesh`] - the tutorial geometry
//!
//! and evaluates them per frame:
//!
//! ```text
//! mvp = identity * projection * view * model * animation(t)
//! ```
//!
//! [`SceneConfig`] loads all of the above from YAML; every field falls back
//! to the values the cube tutorials hard-code.
//!
//! # Usage
//!
//! ```rust
//! use gltut_scene::{FrameRecord, SceneConfig};
//!
//! let scene = SceneConfig::from_yaml_str("mesh: cube").unwrap().build().unwrap();
//! for (n, frame) in scene.frames(3, 60.0) {
//!     let record = FrameRecord::new(n, &frame);
//!     assert_eq!(record.uniform, frame.mvp.transpose().to_rows_array());
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod animation;
mod camera;
mod config;
mod error;
mod frame;
mod mesh;
mod model;
mod scene;

pub use animation::Animation;
pub use camera::Camera;
pub use config::{CameraConfig, SceneConfig, Viewport};
pub use error::{SceneError, SceneResult};
pub use frame::{FrameClock, FrameRecord, FrameTransform};
pub use mesh::{Mesh, MeshKind, ProjectedVertex};
pub use model::Model;
pub use scene::Scene;
