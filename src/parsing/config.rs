use crate::tonemap::TonemapSettings;
use crate::world::HitPolicy;

use serde::Deserialize;

use std::path::PathBuf;

use super::cameras::CameraData;
use super::environment::EnvironmentData;
use super::primitives::SolidData;

pub const DEFAULT_WIDTH: usize = 400;
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;
pub const DEFAULT_OUTPUT_FILE: &str = "output/image.ppm";

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct ImageData {
    pub width: Option<usize>,        // defaults to 400
    pub aspect_ratio: Option<f64>,   // defaults to 16/9
}

#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RendererType {
    #[default]
    Naive,
    Tiled,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct TOMLConfig {
    pub output_file: Option<String>,
    pub renderer: Option<RendererType>,
    pub threads: Option<u16>,
    pub show_progress: Option<bool>,
    pub hit_policy: Option<HitPolicy>,
    pub tonemap: Option<TonemapSettings>,
    pub image: Option<ImageData>,
    pub camera: Option<CameraData>,
    pub environment: Option<EnvironmentData>,
    // None means the default scene, an empty list means no solids at all
    pub solids: Option<Vec<SolidData>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: PathBuf,
    pub resolution: Resolution,
    pub threads: Option<u16>,
    pub show_progress: bool,
    pub tonemap_settings: TonemapSettings,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub renderer: RendererType,
    pub render_settings: RenderSettings,
}
