//! Mesh projection to NDC.

use anyhow::Result;
use gltut_scene::ProjectedVertex;
use serde::Serialize;

use super::load_scene;
use crate::ProjectArgs;

#[derive(Serialize)]
struct ProjectReport<'a> {
    time: f32,
    mesh: &'static str,
    visible: usize,
    vertices: &'a [ProjectedVertex],
}

pub fn run(args: ProjectArgs, verbose: u8) -> Result<()> {
    let scene = load_scene(args.scene.config.as_deref())?;
    let vertices = scene.project(args.time);
    let visible = vertices.iter().filter(|v| v.is_visible()).count();

    if args.json {
        let report = ProjectReport {
            time: args.time,
            mesh: scene.mesh_kind().name(),
            visible,
            vertices: &vertices,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} at t = {}", scene.mesh_kind(), args.time);
    for v in &vertices {
        let mark = if v.is_visible() { " " } else { "x" };
        match v.ndc {
            Some(ndc) => println!(
                "{} {:>3}  ndc [{:>9.5} {:>9.5} {:>9.5}]",
                mark, v.index, ndc.x, ndc.y, ndc.z
            ),
            None => println!("{} {:>3}  behind camera (w = {:.5})", mark, v.index, v.clip.w),
        }
        if verbose > 0 {
            println!(
                "       clip [{:>9.5} {:>9.5} {:>9.5} {:>9.5}]",
                v.clip.x, v.clip.y, v.clip.z, v.clip.w
            );
        }
    }
    println!("{}/{} vertices inside the clip volume", visible, vertices.len());

    Ok(())
}
