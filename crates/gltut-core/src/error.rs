//! Error types for gltut operations.
//!
//! The math kernel is total for almost every input. The exceptions are
//! degenerate geometric inputs, which are reported here instead of being
//! allowed to leak `NaN`/`Inf` into a transform:
//!
//! - normalizing a vector of zero (or non-finite) length
//! - building a camera basis whose `up` is parallel to the view direction
//! - perspective parameters that describe no frustum
//!
//! # Usage
//!
//! ```rust
//! use gltut_core::{Error, Result};
//!
//! fn checked_aspect(width: u32, height: u32) -> Result<f32> {
//!     if width == 0 || height == 0 {
//!         return Err(Error::invalid_config("viewport", "width and height must be non-zero"));
//!     }
//!     Ok(width as f32 / height as f32)
//! }
//!
//! assert!(checked_aspect(800, 0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `gltut-math` - vector normalization, look-at, checked perspective
//! - `gltut-scene` - camera and viewport validation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the transform kernel and its callers.
///
/// # Categories
///
/// - **Degenerate geometry**: [`ZeroLengthVector`](Error::ZeroLengthVector),
///   [`DegenerateBasis`](Error::DegenerateBasis)
/// - **Parameter errors**: [`InvalidProjection`](Error::InvalidProjection),
///   [`InvalidConfig`](Error::InvalidConfig)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A vector with zero or non-finite magnitude cannot be normalized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gltut_core::Error;
    ///
    /// let err = Error::ZeroLengthVector;
    /// assert!(err.to_string().contains("zero length"));
    /// ```
    #[error("cannot normalize a vector of zero length")]
    ZeroLengthVector,

    /// Camera basis vectors collapsed (e.g. `up` parallel to the view direction).
    #[error("degenerate camera basis: {reason}")]
    DegenerateBasis {
        /// What collapsed
        reason: String,
    },

    /// Perspective parameters that do not describe a frustum.
    #[error("invalid projection: {reason}")]
    InvalidProjection {
        /// Which constraint failed
        reason: String,
    },

    /// A configuration value is out of range.
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig {
        /// Dotted path of the offending field
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::DegenerateBasis`] error.
    #[inline]
    pub fn degenerate_basis(reason: impl Into<String>) -> Self {
        Self::DegenerateBasis {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidProjection`] error.
    #[inline]
    pub fn invalid_projection(reason: impl Into<String>) -> Self {
        Self::InvalidProjection {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidConfig`] error.
    #[inline]
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if the error comes from degenerate geometric input.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::ZeroLengthVector | Self::DegenerateBasis { .. })
    }

    /// Returns `true` if this is a parameter validation error.
    #[inline]
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidProjection { .. } | Self::InvalidConfig { .. }
        )
    }
}
