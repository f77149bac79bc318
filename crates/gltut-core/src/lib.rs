//! # gltut-core
//!
//! Foundation types shared by every gltut crate.
//!
//! At the moment this is the error vocabulary: the kernel in `gltut-math`
//! reports degenerate inputs (zero-length vectors, collapsed camera bases)
//! through [`Error`], and `gltut-scene` reuses the same type when it
//! validates camera and viewport parameters.
//!
//! ## Crate Structure
//!
//! ```text
//! gltut-core (this crate)
//!    ^
//!    |
//!    +-- gltut-math (Mat4, Vec3, Vec4)
//!    +-- gltut-scene (camera, animation, frame transform, config)
//!    +-- gltut-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use gltut_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
}
