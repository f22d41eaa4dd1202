//! Projects the corners of a rotated unit cube to normalized device coordinates.
//!
//! Usage: `vecta [EYE_X EYE_Y EYE_Z] [FOV_Y_DEGREES]`

use std::env;

use anyhow::{bail, Context};
use itertools::iproduct;
use vecta::{vec3, vec4, Mat4f, Vec3f};

const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;
const ASPECT: f32 = 16.0 / 9.0;
const USAGE: &str = "usage: vecta [EYE_X EYE_Y EYE_Z] [FOV_Y_DEGREES]";

struct Camera {
    eye: Vec3f,
    fov_y: f32,
}

impl Camera {
    fn from_args(args: &[String]) -> anyhow::Result<Self> {
        let parse = |i: usize| -> anyhow::Result<f32> {
            args[i]
                .parse()
                .with_context(|| format!("invalid number '{}' (argument {})", args[i], i + 1))
        };

        let (eye, fov_y) = match args.len() {
            0 => (vec3(4.0, 3.0, 5.0), 60.0),
            1 => (vec3(4.0, 3.0, 5.0), parse(0)?),
            3 => (vec3(parse(0)?, parse(1)?, parse(2)?), 60.0),
            4 => (vec3(parse(0)?, parse(1)?, parse(2)?), parse(3)?),
            _ => bail!("{USAGE}"),
        };
        if !(fov_y > 0.0 && fov_y < 180.0) {
            bail!("field of view must be between 0 and 180 degrees, got {fov_y}");
        }
        if vecta::math::is_zero(&eye) {
            bail!("the camera must not sit at the origin it is looking at");
        }
        if eye.cross(Vec3f::Y).try_normalize().is_none() {
            bail!("the camera must not look straight up or down (eye {eye} is on the Y axis)");
        }
        Ok(Self { eye, fov_y })
    }
}

fn main() -> anyhow::Result<()> {
    vecta::init_logger!();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let camera = Camera::from_args(&args)?;

    let model = Mat4f::rotate_y(30.0) * Mat4f::scale_uniform(0.5);
    let view = Mat4f::view(camera.eye, Vec3f::ZERO, Vec3f::Y);
    let projection = Mat4f::projection(NEAR, FAR, camera.fov_y, ASPECT);
    log::debug!("model: {model:?}");
    log::debug!("view: {view:?}");
    log::debug!("projection: {projection:?}");

    let mvp = projection * view * model;
    for (x, y, z) in iproduct!([-1.0f32, 1.0], [-1.0f32, 1.0], [-1.0f32, 1.0]) {
        let clip = mvp * vec4(x, y, z, 1.0);
        let ndc = clip
            .truncate()
            .checked_div(clip.w)
            .with_context(|| format!("corner {:?} projects to w = 0", (x, y, z)))?;
        println!("{} -> {ndc}", vec3(x, y, z));
    }

    Ok(())
}
