//! Integration tests for gltut crates.
//!
//! End-to-end checks across the kernel, the scene pipeline and the
//! config layer, plus cross-checks of the kernel against glam's
//! OpenGL-convention constructors.
