use crate::math::*;
use crate::world::EnvironmentMap;

use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum EnvironmentData {
    Constant {
        color: [f64; 3],
    },
    Gradient {
        bottom: Option<[f64; 3]>, // defaults to white
        top: Option<[f64; 3]>,    // defaults to sky blue
    },
}

pub fn parse_environment(data: Option<EnvironmentData>) -> EnvironmentMap {
    match data {
        None => EnvironmentMap::default(),
        Some(EnvironmentData::Constant { color }) => EnvironmentMap::Constant {
            color: color.into(),
        },
        Some(EnvironmentData::Gradient { bottom, top }) => EnvironmentMap::Gradient {
            bottom: bottom.map(RGBColor::from).unwrap_or(WHITE),
            top: top.map(RGBColor::from).unwrap_or(SKY_BLUE),
        },
    }
}
