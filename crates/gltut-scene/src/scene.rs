//! A validated scene: camera, model placement, animation and mesh.

use gltut_core::Result;
use gltut_math::Mat4;
use tracing::debug;

use crate::{Animation, Camera, FrameClock, FrameTransform, Mesh, MeshKind, Model, ProjectedVertex};

/// Everything needed to evaluate a frame.
///
/// Construction validates the camera and animation once and caches the
/// view and projection matrices; [`Scene::frame`] is then infallible.
///
/// # Example
///
/// ```rust
/// use gltut_scene::Scene;
///
/// let scene = Scene::tutorial().unwrap();
/// let frame = scene.frame(0.0);
/// assert_eq!(frame.mvp, scene.projection() * scene.view() * scene.model().matrix());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    camera: Camera,
    model: Model,
    animation: Animation,
    mesh: MeshKind,
    projection: Mat4,
    view: Mat4,
    model_matrix: Mat4,
}

impl Scene {
    /// Builds a scene.
    ///
    /// # Errors
    ///
    /// Any camera, model or animation validation failure.
    pub fn new(camera: Camera, model: Model, animation: Animation, mesh: MeshKind) -> Result<Self> {
        model.validate()?;
        let animation = animation.normalized()?;
        let projection = camera.projection()?;
        let view = camera.view()?;
        camera.validate()?;

        debug!(?mesh, ?animation, fovy = camera.fovy, aspect = camera.aspect, "Built scene");

        Ok(Self {
            camera,
            model,
            animation,
            mesh,
            projection,
            view,
            model_matrix: model.matrix(),
        })
    }

    /// The spinning cube with the default camera.
    pub fn tutorial() -> Result<Self> {
        Self::new(Camera::default(), Model::default(), Animation::default(), MeshKind::Cube)
    }

    /// Camera parameters.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Model placement.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Animation (with a normalized axis).
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Mesh kind.
    pub fn mesh_kind(&self) -> MeshKind {
        self.mesh
    }

    /// Builds the mesh data.
    pub fn mesh(&self) -> Mesh {
        self.mesh.build()
    }

    /// Cached projection matrix.
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Cached view matrix.
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// Transform for time `time` in seconds.
    pub fn frame(&self, time: f32) -> FrameTransform {
        FrameTransform::at(time, self.projection, self.view, self.model_matrix, &self.animation)
    }

    /// `count` consecutive frames at `fps`, starting at `t = 0`.
    pub fn frames(&self, count: usize, fps: f32) -> impl Iterator<Item = (u64, FrameTransform)> + '_ {
        FrameClock::new(fps)
            .take(count)
            .map(move |(n, t)| (n, self.frame(t)))
    }

    /// The scene's mesh projected at `time`.
    pub fn project(&self, time: f32) -> Vec<ProjectedVertex> {
        self.mesh().project(&self.frame(time).mvp)
    }
}
