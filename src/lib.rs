#[macro_use]
extern crate tracing;

pub mod camera;
pub mod geometry;
pub mod hittable;
pub mod math;
pub mod parsing;
pub mod ppm;
pub mod profile;
pub mod renderer;
pub mod tonemap;
pub mod world;
