use crate::math::*;

use super::Tonemapper;

/// Scales by `10^exposure` and clamps every channel to [0, 1].
#[derive(Clone, Debug)]
pub struct Clamp {
    exposure: f64,
}

impl Clamp {
    pub fn new(exposure: f64) -> Self {
        Self { exposure }
    }
}

impl Tonemapper for Clamp {
    fn map(&self, color: RGBColor) -> RGBColor {
        if !color.is_finite() {
            warn!("non finite color {:?} clamped to black", color);
            return BLACK;
        }
        let scaled = color * 10.0f64.powf(self.exposure);
        Vec3::new(
            scaled.x.clamp(0.0, 1.0),
            scaled.y.clamp(0.0, 1.0),
            scaled.z.clamp(0.0, 1.0),
        )
    }
}
