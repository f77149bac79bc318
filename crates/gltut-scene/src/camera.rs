//! Look-at camera with a symmetric perspective frustum.
//!
//! A [`Camera`] is plain data: eye, target, up and the projection
//! parameters. The view and projection matrices are derived on demand, so
//! a caller can animate any field and rebuild the matrices per frame.

use gltut_core::{Error, Result};
use gltut_math::{Mat4, Vec3};
use tracing::trace;

/// A perspective camera looking from `eye` towards `target`.
///
/// # Example
///
/// ```rust
/// use gltut_math::Vec3;
/// use gltut_scene::Camera;
///
/// let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
///     .with_fov_degrees(60.0)
///     .with_aspect(16.0 / 9.0);
///
/// let view_projection = camera.view_projection().unwrap();
/// assert!(view_projection.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Approximate up direction; need not be orthogonal to the view direction.
    pub up: Vec3,
    /// Full vertical field of view in radians.
    pub fovy: f32,
    /// Viewport width / height.
    pub aspect: f32,
    /// Distance to the near clip plane.
    pub near: f32,
    /// Distance to the far clip plane.
    pub far: f32,
}

impl Default for Camera {
    /// Camera of the cube tutorials: above the origin, looking at a cube
    /// four units down `-Z`, 45° vertical FOV on an 800x600 viewport.
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 2.0, 0.0),
            target: Vec3::new(0.0, 0.0, -4.0),
            up: Vec3::Y,
            fovy: 45f32.to_radians(),
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

impl Camera {
    /// Creates a camera with default projection parameters.
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            target,
            up,
            ..Self::default()
        }
    }

    /// Sets the vertical field of view in degrees.
    pub fn with_fov_degrees(mut self, degrees: f32) -> Self {
        self.fovy = degrees.to_radians();
        self
    }

    /// Sets the aspect ratio (width / height).
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Sets the near and far clip distances.
    pub fn with_clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Unit vector from `eye` towards `target`.
    pub fn forward(&self) -> Result<Vec3> {
        self.target.subtract(self.eye).normalized()
    }

    /// World-to-camera matrix.
    ///
    /// # Errors
    ///
    /// Propagates [`Mat4::look_at`] failures: `eye == target`, or `up`
    /// parallel to the view direction.
    pub fn view(&self) -> Result<Mat4> {
        trace!(eye = ?self.eye, target = ?self.target, "camera::view");
        Mat4::look_at(self.eye, self.target, self.up)
    }

    /// Camera-to-clip matrix.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidProjection`] for parameters that describe no frustum.
    pub fn projection(&self) -> Result<Mat4> {
        trace!(fovy = self.fovy, aspect = self.aspect, near = self.near, far = self.far, "camera::projection");
        Mat4::try_perspective(self.fovy, self.aspect, self.near, self.far)
    }

    /// `projection * view`.
    pub fn view_projection(&self) -> Result<Mat4> {
        Ok(self.projection()? * self.view()?)
    }

    /// Checks that both matrices can be built and are finite.
    pub fn validate(&self) -> Result<()> {
        let vp = self.view_projection()?;
        if !vp.is_finite() {
            return Err(Error::other("camera produces a non-finite view-projection"));
        }
        Ok(())
    }
}
