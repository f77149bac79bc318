//! Per-frame transform evaluation.
//!
//! The render loop's only math is
//!
//! ```text
//! mvp = identity * projection * view * model * animation(t)
//! upload(transpose(mvp))
//! ```
//!
//! [`FrameTransform`] is that computation as a value: a pure function of
//! time and the scene, with no matrix kept in process-wide state.
//! [`FrameClock`] replaces the fixed-rate ticker with a deterministic
//! sequence of frame times.

use gltut_math::{compose, Mat4};
use serde::Serialize;
use tracing::trace;

use crate::Animation;

/// Every factor of one frame's transform, plus the product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    /// Time in seconds this frame was evaluated at.
    pub time: f32,
    /// Camera-to-clip.
    pub projection: Mat4,
    /// World-to-camera.
    pub view: Mat4,
    /// Model-to-world.
    pub model: Mat4,
    /// Animation at `time`.
    pub animation: Mat4,
    /// `identity * projection * view * model * animation`.
    pub mvp: Mat4,
}

impl FrameTransform {
    /// Composes the factors in pipeline order.
    pub fn new(time: f32, projection: Mat4, view: Mat4, model: Mat4, animation: Mat4) -> Self {
        let mvp = compose([projection, view, model, animation]);
        Self {
            time,
            projection,
            view,
            model,
            animation,
            mvp,
        }
    }

    /// Evaluates `animation` at `time` and composes the frame.
    pub fn at(time: f32, projection: Mat4, view: Mat4, model: Mat4, animation: &Animation) -> Self {
        trace!(time, "frame::at");
        Self::new(time, projection, view, model, animation.matrix_at(time))
    }

    /// The 16 floats for `glUniformMatrix4fv(.., GL_FALSE, ..)`.
    ///
    /// Column-major, i.e. the transpose of the row-major `mvp`.
    pub fn uniform(&self) -> [f32; 16] {
        self.mvp.to_cols_array()
    }
}

/// A frame's payload as the CLI reports it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    /// Zero-based frame number.
    pub frame: u64,
    /// Time in seconds.
    pub time: f32,
    /// Uniform payload (column-major).
    pub uniform: [f32; 16],
}

impl FrameRecord {
    /// Snapshot of frame `frame`.
    pub fn new(frame: u64, transform: &FrameTransform) -> Self {
        Self {
            frame,
            time: transform.time,
            uniform: transform.uniform(),
        }
    }
}

/// Fixed-rate sequence of frame times starting at `t = 0`.
///
/// # Example
///
/// ```rust
/// use gltut_scene::FrameClock;
///
/// let times: Vec<f32> = FrameClock::new(4.0).take(3).map(|(_, t)| t).collect();
/// assert_eq!(times, vec![0.0, 0.25, 0.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    fps: f32,
    next: u64,
}

impl FrameClock {
    /// The tutorials cap the loop at 60 frames per second.
    pub const DEFAULT_FPS: f32 = 60.0;

    /// Creates a clock ticking `fps` times per second.
    pub fn new(fps: f32) -> Self {
        Self { fps, next: 0 }
    }

    /// Frames per second.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Time of frame `frame`.
    pub fn time_of(&self, frame: u64) -> f32 {
        // f64 keeps late frames from drifting
        (frame as f64 / f64::from(self.fps)) as f32
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FPS)
    }
}

impl Iterator for FrameClock {
    type Item = (u64, f32);

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.next;
        self.next += 1;
        Some((frame, self.time_of(frame)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gltut_math::Vec3;

    #[test]
    fn test_mvp_order() {
        let projection = Mat4::perspective(1.0, 1.0, 0.1, 10.0);
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y).unwrap();
        let model = Mat4::translation(0.5, 0.0, 0.0);
        let animation = Mat4::rotation_y(0.3);

        let frame = FrameTransform::new(0.3, projection, view, model, animation);
        assert_eq!(frame.mvp, Mat4::IDENTITY * projection * view * model * animation);
    }

    #[test]
    fn test_at_evaluates_animation() {
        let spin = Animation::SpinY { speed: 2.0 };
        let frame = FrameTransform::at(0.25, Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY, &spin);
        assert_eq!(frame.animation, Mat4::rotation_y(0.5));
        assert_eq!(frame.mvp, Mat4::rotation_y(0.5));
    }

    #[test]
    fn test_uniform_is_transposed() {
        let model = Mat4::translation(1.0, 2.0, 3.0);
        let frame = FrameTransform::new(0.0, Mat4::IDENTITY, Mat4::IDENTITY, model, Mat4::IDENTITY);
        let uniform = frame.uniform();
        // translation lands in elements 12..15 of the column-major payload
        assert_eq!(&uniform[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(uniform, frame.mvp.transpose().to_rows_array());
    }

    #[test]
    fn test_clock() {
        let clock = FrameClock::default();
        assert_eq!(clock.fps(), 60.0);
        assert_eq!(clock.time_of(0), 0.0);
        assert_eq!(clock.time_of(120), 2.0);

        let frames: Vec<_> = FrameClock::new(2.0).take(3).collect();
        assert_eq!(frames, vec![(0, 0.0), (1, 0.5), (2, 1.0)]);
    }

    #[test]
    fn test_record() {
        let frame = FrameTransform::new(1.5, Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY);
        let record = FrameRecord::new(7, &frame);
        assert_eq!(record.frame, 7);
        assert_eq!(record.time, 1.5);
        assert_eq!(record.uniform, Mat4::IDENTITY.to_cols_array());
    }
}
