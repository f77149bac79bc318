//! Upload payloads for a run of frames.
//!
//! Stands in for the render loop: same clock, same math, no window.

use anyhow::{bail, Result};
use gltut_scene::FrameRecord;
use tracing::{debug, info};

use super::load_scene;
use crate::FramesArgs;

pub fn run(args: FramesArgs, verbose: u8) -> Result<()> {
    if !(args.fps > 0.0 && args.fps.is_finite()) {
        bail!("fps must be positive, got {}", args.fps);
    }

    let scene = load_scene(args.scene.config.as_deref())?;
    debug!(count = args.count, fps = args.fps, "Generating frames");

    let records: Vec<FrameRecord> = scene
        .frames(args.count, args.fps)
        .map(|(n, frame)| FrameRecord::new(n, &frame))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            let values: Vec<String> = record.uniform.iter().map(|v| format!("{:.6}", v)).collect();
            if verbose > 0 {
                println!("frame {:>5}  t = {:.4}", record.frame, record.time);
                println!("  {}", values.join(" "));
            } else {
                println!("{}", values.join(" "));
            }
        }
    }

    info!(frames = records.len(), "Done");
    Ok(())
}
