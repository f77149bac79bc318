//! Static model placement.

use gltut_core::{Error, Result};
use gltut_math::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Where the mesh sits in the world before animation.
///
/// The matrix is `translation * rotation * scale`: scale first, then the
/// Euler rotation (Z, then Y, then X), then translation.
///
/// # Example
///
/// ```rust
/// use gltut_math::{Mat4, Vec3};
/// use gltut_scene::Model;
///
/// let model = Model::default();
/// assert_eq!(model.matrix(), Mat4::translation(0.0, 0.0, -4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    /// World-space offset.
    pub translation: Vec3,
    /// Euler angles in degrees.
    pub rotation_degrees: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            translation: Vec3::new(0.0, 0.0, -4.0),
            rotation_degrees: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Model {
    /// Model-to-world matrix.
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation_degrees;
        let rotation = if r == Vec3::ZERO {
            Mat4::IDENTITY
        } else {
            Mat4::rotation_euler(r.x.to_radians(), r.y.to_radians(), r.z.to_radians())
        };
        let s = self.scale;

        Mat4::from_translation(self.translation) * rotation * Mat4::scale(s.x, s.y, s.z)
    }

    /// Rejects non-finite values.
    pub fn validate(&self) -> Result<()> {
        for (field, v) in [
            ("model.translation", self.translation),
            ("model.rotation_degrees", self.rotation_degrees),
            ("model.scale", self.scale),
        ] {
            if !v.is_finite() {
                return Err(Error::invalid_config(field, "components must be finite"));
            }
        }
        Ok(())
    }
}
