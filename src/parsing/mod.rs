pub mod cameras;
pub mod config;
pub mod environment;
pub mod primitives;

pub use cameras::parse_config_and_camera;
pub use config::{Config, RenderSettings, RendererType, Resolution, TOMLConfig};
pub use environment::parse_environment;

use crate::world::World;

use anyhow::Context;

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub type Point3Data = [f64; 3];

pub fn parse_settings(input: &str) -> anyhow::Result<TOMLConfig> {
    let settings: TOMLConfig = toml::from_str(input).inspect_err(|e| {
        error!("encountered error when parsing config: {}", e);
    })?;
    Ok(settings)
}

pub fn get_settings(filepath: &Path) -> anyhow::Result<TOMLConfig> {
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read config file {}", filepath.display()))?;
    info!("loaded {}: {} bytes", filepath.display(), read_count);

    parse_settings(&input).with_context(|| format!("failed to parse {}", filepath.display()))
}

/// Builds the world described by the config, or the default two solid scene
/// when the config names no solids.
pub fn construct_world(settings: &TOMLConfig) -> anyhow::Result<World> {
    let hit_policy = settings.hit_policy.unwrap_or_default();
    let environment = parse_environment(settings.environment);
    let world = match &settings.solids {
        None => {
            info!("no solids configured, using the default scene");
            let mut world = World::default_scene();
            world.environment = environment;
            world.hit_policy = hit_policy;
            world
        }
        Some(solids) => {
            let solids = solids
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, data)| {
                    data.parse(index)
                        .with_context(|| format!("invalid solid at index {}", index))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            World::new(solids, environment, hit_policy)
        }
    };
    info!(
        "constructed world with {} solids, hit policy {:?}",
        world.instances.len(),
        world.hit_policy
    );
    Ok(world)
}
