extern crate pinhole_tracer as root;

use root::math::*;
use root::ppm::write_film_to_file;
use root::renderer::{Film, Vec2D};
use root::tonemap::Passthrough;

#[macro_use]
extern crate tracing;

use std::path::PathBuf;
use std::process::ExitCode;

use structopt::StructOpt;

/// Writes a red/green gradient test pattern, useful for checking an image viewer.
#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "256")]
    pub width: usize,
    #[structopt(long, default_value = "256")]
    pub height: usize,
    #[structopt(short, long, default_value = "output/gradient.ppm")]
    pub output: PathBuf,
}

// red grows left to right, green top to bottom
fn gradient_film(width: usize, height: usize) -> Film {
    let mut film = Vec2D::new(width, height, BLACK);
    let span = |n: usize| (n.max(2) - 1) as f64;
    for j in 0..height {
        for i in 0..width {
            let color = Vec3::new(i as f64 / span(width), j as f64 / span(height), 0.0);
            film.write_at(i, j, color);
        }
    }
    film
}

fn main() -> ExitCode {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    if opts.width == 0 || opts.height == 0 {
        error!("width and height must be at least 1");
        return ExitCode::FAILURE;
    }
    let film = gradient_film(opts.width, opts.height);
    match write_film_to_file(&opts.output, &film, &Passthrough) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("failed to write gradient, error is {:?}", e);
            ExitCode::FAILURE
        }
    }
}
