//! # gltut-math
//!
//! The linear-algebra kernel behind the gltut transform pipeline.
//!
//! This crate provides the minimal set of primitives needed to place,
//! view and project 3D geometry for OpenGL:
//!
//! - [`Mat4`] - 4x4 transforms: identity, scale, translation, axis and
//!   arbitrary-axis rotation, look-at, perspective
//! - [`Vec3`] - positions and directions: cross, dot, subtract, normalize
//! - [`Vec4`] - homogeneous points for applying a [`Mat4`]
//! - [`compose`] - left-to-right product of a transform chain
//!
//! # Design
//!
//! All matrices are built in **row-major** order and act on **column
//! vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! OpenGL expects uniform matrices column-major. Nothing here transposes
//! implicitly; use [`Mat4::transpose`] or [`Mat4::to_cols_array`] at the
//! upload boundary.
//!
//! Vector normalization comes in two named families:
//! [`Vec3::normalize`] mutates in place, [`Vec3::normalized`] returns a
//! new value. Both reject zero-length input with
//! [`Error::ZeroLengthVector`](gltut_core::Error::ZeroLengthVector).
//!
//! # Usage
//!
//! ```rust
//! use gltut_math::{Mat4, Vec3};
//!
//! let projection = Mat4::perspective(45f32.to_radians(), 800.0 / 600.0, 0.1, 10.0);
//! let view = Mat4::look_at(
//!     Vec3::new(0.0, 2.0, 0.0),
//!     Vec3::new(0.0, 0.0, -4.0),
//!     Vec3::Y,
//! ).unwrap();
//! let model = Mat4::translation(0.0, 0.0, -4.0);
//!
//! let mvp = Mat4::IDENTITY * projection * view * model;
//! let uniform: [f32; 16] = mvp.to_cols_array();
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop and reference conventions
//! - [`approx`] - tolerance comparisons for matrices and vectors
//! - `gltut-core` - error types
//!
//! # Used By
//!
//! - `gltut-scene` - camera, animation and per-frame transforms
//! - `gltut-cli` - matrix inspection

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod compose;
mod mat4;
mod vec3;
mod vec4;

pub use compose::*;
pub use mat4::*;
pub use vec3::*;
pub use vec4::*;

pub use gltut_core::{Error, Result};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Vec3 as GlamVec3, Vec4 as GlamVec4};
}
