//! Effective configuration dump.

use anyhow::{Context, Result};

use super::load_config;
use crate::ConfigArgs;

pub fn run(args: ConfigArgs, verbose: u8) -> Result<()> {
    let config = load_config(args.scene.config.as_deref())?;
    config.validate().context("Invalid scene")?;

    if verbose > 0 {
        match &args.scene.config {
            Some(path) => println!("# merged with defaults: {}", path.display()),
            None => println!("# defaults"),
        }
    }
    print!("{}", config.to_yaml()?);
    Ok(())
}
