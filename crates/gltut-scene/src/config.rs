//! YAML scene configuration.
//!
//! Every field is optional; a missing field takes the value the cube
//! tutorials hard-code. An empty document therefore describes the
//! spinning cube seen from above.
//!
//! ```yaml
//! viewport: { width: 800, height: 600 }
//! camera:
//!   eye: [0.0, 2.0, 0.0]
//!   target: [0.0, 0.0, -4.0]
//!   up: [0.0, 1.0, 0.0]
//!   fovy_degrees: 45.0
//!   near: 0.1
//!   far: 10.0
//! model:
//!   translation: [0.0, 0.0, -4.0]
//!   rotation_degrees: [0.0, 0.0, 0.0]
//!   scale: [1.0, 1.0, 1.0]
//! animation:
//!   kind: spin-y
//!   speed: 1.0
//! mesh: cube
//! ```

use std::path::Path;

use gltut_core::Error;
use gltut_math::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Animation, Camera, MeshKind, Model, Scene, SceneError, SceneResult};

/// Output surface size in pixels; only the aspect ratio matters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl Viewport {
    /// Width / height.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Camera section; the field of view is given in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position.
    pub eye: Vec3,
    /// Look-at point.
    pub target: Vec3,
    /// Up hint.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy_degrees: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let camera = Camera::default();
        Self {
            eye: camera.eye,
            target: camera.target,
            up: camera.up,
            fovy_degrees: 45.0,
            near: camera.near,
            far: camera.far,
        }
    }
}

/// Top-level scene file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Output size.
    pub viewport: Viewport,
    /// Camera.
    pub camera: CameraConfig,
    /// Model placement.
    pub model: Model,
    /// Model animation.
    pub animation: Animation,
    /// Mesh to draw.
    pub mesh: MeshKind,
}

impl SceneConfig {
    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SceneError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), "Loading scene config");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads configuration from a YAML string.
    ///
    /// An empty or whitespace-only document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> SceneResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> SceneResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Range-checks every field, naming the first offending one.
    pub fn validate(&self) -> gltut_core::Result<()> {
        if self.viewport.width == 0 {
            return Err(Error::invalid_config("viewport.width", "must be non-zero"));
        }
        if self.viewport.height == 0 {
            return Err(Error::invalid_config("viewport.height", "must be non-zero"));
        }

        let cam = &self.camera;
        for (field, v) in [
            ("camera.eye", cam.eye),
            ("camera.target", cam.target),
            ("camera.up", cam.up),
        ] {
            if !v.is_finite() {
                return Err(Error::invalid_config(field, "components must be finite"));
            }
        }
        if !(cam.fovy_degrees > 0.0 && cam.fovy_degrees < 180.0) {
            return Err(Error::invalid_config(
                "camera.fovy_degrees",
                format!("{} is outside (0, 180)", cam.fovy_degrees),
            ));
        }
        if !(cam.near > 0.0 && cam.near.is_finite()) {
            return Err(Error::invalid_config("camera.near", format!("{} must be positive", cam.near)));
        }
        if !(cam.far > cam.near && cam.far.is_finite()) {
            return Err(Error::invalid_config(
                "camera.far",
                format!("{} must be greater than near ({})", cam.far, cam.near),
            ));
        }

        self.model.validate()
    }

    /// The camera described by this config, with the viewport's aspect.
    pub fn camera(&self) -> Camera {
        let cam = &self.camera;
        Camera::new(cam.eye, cam.target, cam.up)
            .with_fov_degrees(cam.fovy_degrees)
            .with_aspect(self.viewport.aspect())
            .with_clip(cam.near, cam.far)
    }

    /// Validates and builds a [`Scene`].
    pub fn build(&self) -> SceneResult<Scene> {
        self.validate()?;
        Ok(Scene::new(self.camera(), self.model, self.animation, self.mesh)?)
    }
}
