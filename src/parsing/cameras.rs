use crate::camera::{image_height, PinholeCamera};
use crate::math::*;
use crate::tonemap::TonemapSettings;

use anyhow::ensure;
use serde::Deserialize;

use std::path::PathBuf;

use super::config::{
    Config, RenderSettings, Resolution, TOMLConfig, DEFAULT_ASPECT_RATIO, DEFAULT_OUTPUT_FILE,
    DEFAULT_WIDTH,
};

#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct CameraData {
    pub center: Option<[f64; 3]>,    // defaults to the origin
    pub focal_length: Option<f64>,   // defaults to 1.0
    pub viewport_height: Option<f64>, // defaults to 2.0
}

/// Resolves image and camera settings, filling in defaults and rejecting
/// degenerate values.
pub fn parse_config_and_camera(settings: &TOMLConfig) -> anyhow::Result<(Config, PinholeCamera)> {
    let image = settings.image.unwrap_or_default();
    let width = image.width.unwrap_or(DEFAULT_WIDTH);
    let aspect_ratio = image.aspect_ratio.unwrap_or(DEFAULT_ASPECT_RATIO);
    ensure!(width >= 1, "image.width must be at least 1, got {}", width);
    ensure!(
        aspect_ratio.is_finite() && aspect_ratio > 0.0,
        "image.aspect_ratio must be positive, got {}",
        aspect_ratio
    );
    let height = image_height(width, aspect_ratio);

    let camera_data = settings.camera.unwrap_or_default();
    let center = Point3::from(camera_data.center.unwrap_or([0.0, 0.0, 0.0]));
    let focal_length = camera_data.focal_length.unwrap_or(1.0);
    let viewport_height = camera_data.viewport_height.unwrap_or(2.0);
    ensure!(center.is_finite(), "camera.center must be finite");
    ensure!(
        focal_length.is_finite() && focal_length > 0.0,
        "camera.focal_length must be positive and finite, got {}",
        focal_length
    );
    ensure!(
        viewport_height.is_finite() && viewport_height > 0.0,
        "camera.viewport_height must be positive and finite, got {}",
        viewport_height
    );
    if let Some(threads) = settings.threads {
        ensure!(threads > 0, "threads must be at least 1");
    }

    let config = Config {
        renderer: settings.renderer.unwrap_or_default(),
        render_settings: RenderSettings {
            filename: PathBuf::from(
                settings
                    .output_file
                    .clone()
                    .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
            ),
            resolution: Resolution { width, height },
            threads: settings.threads,
            show_progress: settings.show_progress.unwrap_or(true),
            tonemap_settings: settings.tonemap.unwrap_or(TonemapSettings::Passthrough),
        },
    };
    let camera = PinholeCamera::new(center, focal_length, viewport_height, width, height);
    Ok((config, camera))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::config::{ImageData, RendererType};

    #[test]
    fn test_defaults() {
        let (config, camera) = parse_config_and_camera(&TOMLConfig::default()).unwrap();
        assert_eq!(
            config.render_settings.resolution,
            Resolution {
                width: 400,
                height: 225
            }
        );
        assert_eq!(config.renderer, RendererType::Naive);
        assert_eq!(
            config.render_settings.filename,
            PathBuf::from("output/image.ppm")
        );
        assert!(config.render_settings.show_progress);
        assert_eq!(camera.origin, Point3::ORIGIN);
        assert_eq!(camera.focal_length, 1.0);
        assert_eq!(camera.viewport_height, 2.0);
    }

    #[test]
    fn test_rejects_degenerate_values() {
        let mut settings = TOMLConfig {
            image: Some(ImageData {
                width: Some(0),
                aspect_ratio: None,
            }),
            ..Default::default()
        };
        assert!(parse_config_and_camera(&settings).is_err());

        settings.image = Some(ImageData {
            width: Some(10),
            aspect_ratio: Some(-1.0),
        });
        assert!(parse_config_and_camera(&settings).is_err());

        settings.image = None;
        settings.camera = Some(CameraData {
            focal_length: Some(0.0),
            ..Default::default()
        });
        assert!(parse_config_and_camera(&settings).is_err());

        settings.camera = Some(CameraData {
            viewport_height: Some(f64::INFINITY),
            ..Default::default()
        });
        assert!(parse_config_and_camera(&settings).is_err());

        settings.camera = Some(CameraData {
            focal_length: Some(f64::NAN),
            ..Default::default()
        });
        assert!(parse_config_and_camera(&settings).is_err());

        settings.camera = Some(CameraData {
            center: Some([0.0, f64::NEG_INFINITY, 0.0]),
            ..Default::default()
        });
        assert!(parse_config_and_camera(&settings).is_err());

        settings.camera = None;
        settings.threads = Some(0);
        assert!(parse_config_and_camera(&settings).is_err());
    }
}
