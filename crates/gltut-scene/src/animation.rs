//! Time-driven model animation.
//!
//! Each [`Animation`] maps a time in seconds to a matrix that is applied
//! to the model before everything else:
//!
//! ```text
//! mvp = projection * view * model * animation(t)
//! ```
//!
//! # Variants
//!
//! - [`Animation::None`] - identity at every time
//! - [`Animation::SpinY`] - rotation about +Y at `speed` rad/s (the cube tutorials)
//! - [`Animation::SwingZ`] - slide along X by `amplitude * sin(speed * t)` while
//!   spinning about +Z (the transformation-matrix tutorial)
//! - [`Animation::Spin`] - rotation about an arbitrary axis

use gltut_core::{Error, Result};
use gltut_math::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

fn one() -> f32 {
    1.0
}

fn default_axis() -> Vec3 {
    Vec3::Y
}

/// Per-frame model animation.
///
/// # Example
///
/// ```rust
/// use gltut_math::Mat4;
/// use gltut_scene::Animation;
///
/// let spin = Animation::SpinY { speed: 2.0 };
/// assert_eq!(spin.matrix_at(0.5), Mat4::rotation_y(1.0));
/// assert_eq!(Animation::None.matrix_at(10.0), Mat4::IDENTITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Animation {
    /// No animation.
    None,

    /// Spin about the Y axis.
    SpinY {
        /// Angular speed in radians per second.
        #[serde(default = "one")]
        speed: f32,
    },

    /// Oscillate along X while spinning about Z.
    SwingZ {
        /// Angular speed in radians per second; also the oscillation frequency.
        #[serde(default = "one")]
        speed: f32,
        /// Peak X offset.
        #[serde(default = "one")]
        amplitude: f32,
    },

    /// Spin about an arbitrary axis.
    Spin {
        /// Rotation axis; normalized by [`Animation::normalized`].
        #[serde(default = "default_axis")]
        axis: Vec3,
        /// Angular speed in radians per second.
        #[serde(default = "one")]
        speed: f32,
    },
}

impl Default for Animation {
    fn default() -> Self {
        Self::SpinY { speed: 1.0 }
    }
}

impl Animation {
    /// Animation matrix at `time` seconds.
    ///
    /// [`Animation::Spin`] uses its axis as given; run
    /// [`Animation::normalized`] first if the axis may not be unit length.
    pub fn matrix_at(&self, time: f32) -> Mat4 {
        match *self {
            Self::None => Mat4::IDENTITY,
            Self::SpinY { speed } => Mat4::rotation_y(speed * time),
            Self::SwingZ { speed, amplitude } => {
                let angle = speed * time;
                Mat4::translation(amplitude * angle.sin(), 0.0, 0.0) * Mat4::rotation_z(angle)
            }
            Self::Spin { axis, speed } => Mat4::rotation(speed * time, axis),
        }
    }

    /// Returns a copy with a unit-length spin axis.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] if the axis has zero length, or a speed or
    /// amplitude is not finite.
    pub fn normalized(self) -> Result<Self> {
        let finite = match self {
            Self::None => true,
            Self::SpinY { speed } => speed.is_finite(),
            Self::SwingZ { speed, amplitude } => speed.is_finite() && amplitude.is_finite(),
            Self::Spin { speed, .. } => speed.is_finite(),
        };
        if !finite {
            return Err(Error::invalid_config("animation", "speed and amplitude must be finite"));
        }

        match self {
            Self::Spin { axis, speed } => {
                let axis = axis
                    .normalized()
                    .map_err(|_| Error::invalid_config("animation.axis", "axis must have non-zero length"))?;
                Ok(Self::Spin { axis, speed })
            }
            other => Ok(other),
        }
    }
}
