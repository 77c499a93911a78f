mod naive;
mod tiled;
mod vec2d;

pub use naive::NaiveRenderer;
pub use tiled::TiledRenderer;
pub use vec2d::Vec2D;

use crate::camera::PinholeCamera;
use crate::math::*;
use crate::parsing::config::{RenderSettings, RendererType};
use crate::ppm::{verify_film_file, write_film_to_file};
use crate::profile::Profile;
use crate::tonemap::parse_tonemapper;
use crate::world::World;

use std::time::Instant;

pub type Film = Vec2D<RGBColor>;

pub trait Renderer {
    /// Renders one ray per pixel into a film in raster order.
    fn render(
        &self,
        world: &World,
        camera: &PinholeCamera,
        settings: &RenderSettings,
    ) -> (Film, Profile);
}

pub fn construct_renderer(renderer_type: RendererType) -> Box<dyn Renderer> {
    match renderer_type {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
        RendererType::Tiled => Box::new(TiledRenderer::new()),
    }
}

// shades row `j` of the image into `row`
pub(crate) fn render_row(
    world: &World,
    camera: &PinholeCamera,
    j: usize,
    row: &mut [RGBColor],
) -> Profile {
    let mut profile = Profile::default();
    for (i, pixel_ref) in row.iter_mut().enumerate() {
        let r = camera.get_ray(i, j);
        *pixel_ref = world.color_with_profile(r, &mut profile);
    }
    profile
}

pub fn output_film(render_settings: &RenderSettings, film: &Film) -> anyhow::Result<()> {
    let tonemapper = parse_tonemapper(render_settings.tonemap_settings);
    write_film_to_file(&render_settings.filename, film, tonemapper.as_ref())
}

/// Checks that the configured output file decodes back to `film`.
pub fn verify_output(render_settings: &RenderSettings, film: &Film) -> anyhow::Result<()> {
    let tonemapper = parse_tonemapper(render_settings.tonemap_settings);
    verify_film_file(&render_settings.filename, film, tonemapper.as_ref())
}

/// Renders with `renderer` and writes the result to the configured file.
pub fn render_to_file(
    renderer: &dyn Renderer,
    world: &World,
    camera: &PinholeCamera,
    settings: &RenderSettings,
) -> anyhow::Result<Film> {
    let (width, height) = (settings.resolution.width, settings.resolution.height);
    info!("starting render with film resolution {}x{}", width, height);

    let now = Instant::now();
    let (film, profile) = renderer.render(world, camera, settings);
    let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
    info!("took {}s", elapsed);
    profile.pretty_print(
        elapsed,
        settings.threads.map(|t| t as usize).unwrap_or(1),
    );
    for instance in world.instances.iter() {
        info!(
            "{} {:?}: {} hits",
            instance.aggregate.kind(),
            instance.name,
            profile.hits_for(instance.instance_id)
        );
    }

    output_film(settings, &film)?;
    Ok(film)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::config::Resolution;
    use crate::ppm::read_ppm;
    use crate::tonemap::TonemapSettings;

    use std::path::PathBuf;

    fn settings(width: usize, height: usize, filename: PathBuf) -> RenderSettings {
        RenderSettings {
            filename,
            resolution: Resolution { width, height },
            threads: Some(2),
            show_progress: false,
            tonemap_settings: TonemapSettings::Passthrough,
        }
    }

    #[test]
    fn test_reference_image_center_hits_sphere() {
        let camera = PinholeCamera::with_aspect_ratio(Point3::ORIGIN, 1.0, 2.0, 400, 16.0 / 9.0);
        assert_eq!((camera.width, camera.height), (400, 225));
        let world = World::default_scene();

        let sphere_center = Point3::new(0.5, 0.0, -1.0);
        let r = Ray::new(camera.origin, sphere_center - camera.origin);
        let hit = world.hit(r).expect("ray toward the sphere center should hit");
        assert_eq!(world.get_primitive(hit.instance_id).name, "sphere");
        assert!(hit.normal.z > 0.0, "{:?}", hit.normal);
        assert!(hit.normal.dot(r.direction) < 0.0);
        assert!((hit.normal.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_renderers_agree() {
        let camera = PinholeCamera::with_aspect_ratio(Point3::ORIGIN, 1.0, 2.0, 64, 16.0 / 9.0);
        let world = World::default_scene();
        let settings = settings(camera.width, camera.height, PathBuf::from("unused.ppm"));

        let (naive, naive_profile) = NaiveRenderer::new().render(&world, &camera, &settings);
        let (tiled, tiled_profile) = TiledRenderer::new().render(&world, &camera, &settings);
        assert_eq!(naive, tiled);
        assert_eq!(naive_profile, tiled_profile);
        assert_eq!(naive_profile.camera_rays, 64 * 36);
        assert!(naive_profile.solid_hits > 0 && naive_profile.env_hits > 0);
        assert_eq!(naive_profile.instance_hits.len(), 2);
        assert!(naive_profile.hits_for(0) > 0 && naive_profile.hits_for(1) > 0);
        assert_eq!(
            naive_profile.hits_for(0) + naive_profile.hits_for(1),
            naive_profile.solid_hits
        );

        // top left corner looks up and left into the sky
        let corner = naive.at(0, 0);
        assert_eq!(corner, world.color(camera.get_ray(0, 0)));
    }

    #[test]
    fn test_render_to_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "pinhole_tracer_render_test_{}.ppm",
            std::process::id()
        ));
        let camera = PinholeCamera::with_aspect_ratio(Point3::ORIGIN, 1.0, 2.0, 40, 16.0 / 9.0);
        let world = World::default_scene();
        let settings = settings(camera.width, camera.height, path.clone());

        let film = render_to_file(&NaiveRenderer::new(), &world, &camera, &settings).unwrap();
        let verified = verify_output(&settings, &film);
        let data = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(verified.is_ok(), "{:?}", verified);

        let text = String::from_utf8(data.clone()).unwrap();
        assert!(text.starts_with("P3\n40 22\n255\n"), "{}", &text[..20]);
        let image = read_ppm(&data[..]).unwrap();
        assert_eq!((image.width, image.height), (40, 22));
        assert_eq!(image.max_value, 255);
        assert_eq!(image.pixels.len(), 40 * 22);
        assert_eq!(image.pixels[0], to_bytes(film.at(0, 0)));
        for pixel in image.pixels.iter() {
            assert!(pixel.iter().all(|&c| (0..=255).contains(&c)), "{:?}", pixel);
        }
    }
}
