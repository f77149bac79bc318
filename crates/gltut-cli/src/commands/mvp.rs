//! Combined transform for one point in time.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::{load_scene, print_matrix};
use crate::MvpArgs;

#[derive(Serialize)]
struct MvpReport {
    time: f32,
    layout: &'static str,
    mvp: [[f32; 4]; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    factors: Option<Factors>,
}

#[derive(Serialize)]
struct Factors {
    projection: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    animation: [[f32; 4]; 4],
}

pub fn run(args: MvpArgs, verbose: u8) -> Result<()> {
    let scene = load_scene(args.scene.config.as_deref())?;
    let frame = scene.frame(args.time);
    info!(time = args.time, mesh = %scene.mesh_kind(), "Evaluated frame");

    if args.json {
        let layout = args.layout;
        let report = MvpReport {
            time: frame.time,
            layout: layout.name(),
            mvp: layout.lines(&frame.mvp),
            factors: args.all.then(|| Factors {
                projection: layout.lines(&frame.projection),
                view: layout.lines(&frame.view),
                model: layout.lines(&frame.model),
                animation: layout.lines(&frame.animation),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if verbose > 0 {
        let camera = scene.camera();
        println!("Camera: eye {:?} target {:?} up {:?}", camera.eye, camera.target, camera.up);
        println!(
            "        fovy {:.2} deg, aspect {:.4}, near {}, far {}",
            camera.fovy.to_degrees(),
            camera.aspect,
            camera.near,
            camera.far
        );
    }

    println!("t = {}", frame.time);
    if args.all {
        print_matrix("projection", &frame.projection, args.layout);
        print_matrix("view", &frame.view, args.layout);
        print_matrix("model", &frame.model, args.layout);
        print_matrix("animation", &frame.animation, args.layout);
    }
    print_matrix("mvp", &frame.mvp, args.layout);

    Ok(())
}
