use super::{render_row, Film, Renderer, Vec2D};

use crate::camera::PinholeCamera;
use crate::math::*;
use crate::parsing::config::RenderSettings;
use crate::profile::Profile;
use crate::world::World;

use pbr::ProgressBar;

use std::io::stderr;

/// Renders on the calling thread, row by row from the top.
#[derive(Default, Copy, Clone)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Renderer for NaiveRenderer {
    fn render(
        &self,
        world: &World,
        camera: &PinholeCamera,
        settings: &RenderSettings,
    ) -> (Film, Profile) {
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        debug_assert_eq!((width, height), (camera.width, camera.height));
        let mut film: Film = Vec2D::new(width, height, BLACK);

        let mut pb = if settings.show_progress {
            let mut pb = ProgressBar::on(stderr(), height as u64);
            pb.message("scanlines ");
            Some(pb)
        } else {
            None
        };

        let mut profile = Profile::default();
        for (j, row) in film.buffer.chunks_mut(width).enumerate() {
            if let Some(pb) = pb.as_mut() {
                pb.message(&format!("scanlines remaining: {} ", height - j));
                pb.inc();
            }
            profile = profile.combine(render_row(world, camera, j, row));
        }

        if let Some(mut pb) = pb {
            pb.finish_println("done\n");
        }
        (film, profile)
    }
}
