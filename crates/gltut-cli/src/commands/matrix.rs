//! Single kernel matrix.

use anyhow::{Context, Result};
use gltut_math::{Mat4, Vec3};
use serde::Serialize;
use tracing::debug;

use super::print_matrix;
use crate::{MatrixArgs, MatrixKind};

#[derive(Serialize)]
struct MatrixReport {
    kind: String,
    layout: &'static str,
    matrix: [[f32; 4]; 4],
}

pub fn run(args: MatrixArgs, verbose: u8) -> Result<()> {
    let m = build(args.kind)?;
    debug!(kind = ?args.kind, "Built matrix");

    if args.json {
        let report = MatrixReport {
            kind: format!("{:?}", args.kind),
            layout: args.layout.name(),
            matrix: args.layout.lines(&m),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let label = if verbose > 0 { format!("{:?}", args.kind) } else { String::new() };
    print_matrix(&label, &m, args.layout);
    Ok(())
}

fn build(kind: MatrixKind) -> Result<Mat4> {
    let m = match kind {
        MatrixKind::Identity => Mat4::identity(),
        MatrixKind::Scale { x, y, z } => Mat4::scale(x, y, z),
        MatrixKind::Translate { x, y, z } => Mat4::translation(x, y, z),
        MatrixKind::RotateX { degrees } => Mat4::rotation_x(degrees.to_radians()),
        MatrixKind::RotateY { degrees } => Mat4::rotation_y(degrees.to_radians()),
        MatrixKind::RotateZ { degrees } => Mat4::rotation_z(degrees.to_radians()),
        MatrixKind::Rotate { degrees, ax, ay, az } => {
            // rotation() expects a unit axis
            let axis = Vec3::new(ax, ay, az)
                .normalized()
                .context("Rotation axis must be non-zero")?;
            Mat4::rotation(degrees.to_radians(), axis)
        }
        MatrixKind::Perspective {
            fovy_degrees,
            aspect,
            near,
            far,
        } => Mat4::try_perspective(fovy_degrees.to_radians(), aspect, near, far)?,
        MatrixKind::LookAt {
            ex,
            ey,
            ez,
            tx,
            ty,
            tz,
            ux,
            uy,
            uz,
        } => Mat4::look_at(Vec3::new(ex, ey, ez), Vec3::new(tx, ty, tz), Vec3::new(ux, uy, uz))?,
    };
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Layout;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_build_rotate_normalizes_axis() {
        let m = build(MatrixKind::Rotate { degrees: 90.0, ax: 0.0, ay: 0.0, az: 2.0 }).unwrap();
        assert_abs_diff_eq!(m, Mat4::rotation_z(90f32.to_radians()), epsilon = 1e-6);
    }

    #[test]
    fn test_build_errors() {
        assert!(build(MatrixKind::Rotate { degrees: 90.0, ax: 0.0, ay: 0.0, az: 0.0 }).is_err());
        assert!(build(MatrixKind::Perspective { fovy_degrees: 45.0, aspect: 1.0, near: 2.0, far: 1.0 }).is_err());
        let look = MatrixKind::LookAt {
            ex: 0.0,
            ey: 0.0,
            ez: 0.0,
            tx: 0.0,
            ty: 1.0,
            tz: 0.0,
            ux: 0.0,
            uy: 1.0,
            uz: 0.0,
        };
        assert!(build(look).is_err());
    }

    #[test]
    fn test_layout_output() {
        let m = build(MatrixKind::Translate { x: 1.0, y: 2.0, z: 3.0 }).unwrap();
        assert_eq!(Layout::Rows.lines(&m)[1], [0.0, 1.0, 0.0, 2.0]);
    }
}
