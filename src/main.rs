use anyhow::Context;
use clap::Parser;
use log::info;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use raycast::{demo, render, save_ppm, Camera, Viewport};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    info!("rendering into '{}'", args.output.display());

    let camera = Camera::default();
    let viewport = Viewport::default();
    let scene = demo::create_scene().context("invalid demo scene")?;

    let frame = render(&camera, viewport, &scene, demo::BACKGROUND);
    save_ppm(&frame, &args.output)
        .with_context(|| format!("could not save image to '{}'", args.output.display()))?;

    Ok(())
}
