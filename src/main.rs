use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;

mod camera;
mod core;
mod light;
mod renderer;
mod scene;
mod shooting;
mod surface;

use crate::shooting::{Shooting, ShootingT, ShotModes, SphereShooting};

/// Batch-render a shooting's full grid of test shots into numbered EXRs.
#[derive(StructOpt)]
#[structopt(name = "shooting-gallery")]
struct Opt {
    /// Directory the numbered shots are written to (created if missing).
    #[structopt(parse(from_os_str))]
    path: PathBuf,

    #[structopt(long = "cam_mode", default_value = "0")]
    cam_mode: u32,

    #[structopt(long = "env_light_mode", default_value = "0")]
    env_light_mode: u32,

    #[structopt(long = "lights_mode", default_value = "0")]
    lights_mode: u32,

    #[structopt(long = "surfaces_mode", default_value = "0")]
    surfaces_mode: u32,

    #[structopt(long = "render_params_mode", default_value = "0")]
    render_params_mode: u32,
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Opt::from_args();
    std::fs::create_dir_all(&opt.path)?;

    let modes = ShotModes {
        camera: opt.cam_mode,
        env_light: opt.env_light_mode,
        lights: opt.lights_mode,
        surfaces: opt.surfaces_mode,
        render_params: opt.render_params_mode,
    };

    let shooting: Shooting = SphereShooting::default().into();
    shooting.render(&opt.path, modes)
}
