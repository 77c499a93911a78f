use crate::math::RGBColor;

use serde::Deserialize;

mod clamp;

pub use clamp::Clamp;

/// Maps a rendered color to the color handed to the quantizer.
pub trait Tonemapper: Send + Sync {
    fn map(&self, color: RGBColor) -> RGBColor;
}

/// Hands colors through untouched. The shading formulas already stay inside
/// [0, 1], so this reproduces the reference output exactly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passthrough;

impl Tonemapper for Passthrough {
    fn map(&self, color: RGBColor) -> RGBColor {
        color
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(tag = "type")]
pub enum TonemapSettings {
    #[default]
    Passthrough,
    Clamp {
        exposure: Option<f64>,
    },
}

pub fn parse_tonemapper(settings: TonemapSettings) -> Box<dyn Tonemapper> {
    match settings {
        TonemapSettings::Passthrough => Box::new(Passthrough),
        TonemapSettings::Clamp { exposure } => Box::new(Clamp::new(exposure.unwrap_or(0.0))),
    }
}
