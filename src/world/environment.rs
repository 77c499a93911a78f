use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EnvironmentMap {
    Constant {
        color: RGBColor,
    },
    // blends from `bottom` when looking straight down to `top` when looking straight up
    Gradient {
        bottom: RGBColor,
        top: RGBColor,
    },
}

impl Default for EnvironmentMap {
    fn default() -> Self {
        EnvironmentMap::Gradient {
            bottom: WHITE,
            top: SKY_BLUE,
        }
    }
}

impl EnvironmentMap {
    // evaluate the background for a ray that escaped the scene
    pub fn emission(&self, direction: Vec3) -> RGBColor {
        match *self {
            EnvironmentMap::Constant { color } => color,
            EnvironmentMap::Gradient { bottom, top } => {
                let unit_direction = unit_vector(direction);
                let a = 0.5 * (unit_direction.y() + 1.0);
                (1.0 - a) * bottom + a * top
            }
        }
    }
}
