use super::{render_row, Film, Renderer, Vec2D};

use crate::camera::PinholeCamera;
use crate::math::*;
use crate::parsing::config::RenderSettings;
use crate::profile::Profile;
use crate::world::World;

use std::io::stderr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pbr::ProgressBar;
use rayon::prelude::*;

/// Renders whole rows as independent tiles on the rayon pool. pixels only
/// depend on their own ray, so the film matches [`super::NaiveRenderer`]
/// exactly.
#[derive(Default, Copy, Clone)]
pub struct TiledRenderer {}

impl TiledRenderer {
    pub fn new() -> TiledRenderer {
        TiledRenderer {}
    }
}

impl Renderer for TiledRenderer {
    fn render(
        &self,
        world: &World,
        camera: &PinholeCamera,
        settings: &RenderSettings,
    ) -> (Film, Profile) {
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        debug_assert_eq!((width, height), (camera.width, camera.height));
        let mut film: Film = Vec2D::new(width, height, BLACK);

        let rows_done = Arc::new(AtomicUsize::new(0));
        let progress_thread = if settings.show_progress {
            let clone1 = rows_done.clone();
            Some(thread::spawn(move || {
                let mut pb = ProgressBar::on(stderr(), height as u64);
                let mut local_index = 0;
                while local_index < height {
                    let rows_to_increment = clone1.load(Ordering::Relaxed) - local_index;
                    pb.add(rows_to_increment as u64);
                    local_index += rows_to_increment;
                    pb.message(&format!("scanlines remaining: {} ", height - local_index));

                    thread::sleep(Duration::from_millis(100));
                }
                pb.finish_println("done\n");
            }))
        } else {
            None
        };

        let clone2 = rows_done.clone();
        let profile = film
            .buffer
            .par_chunks_mut(width)
            .enumerate()
            .map(|(j, row)| {
                let profile = render_row(world, camera, j, row);
                clone2.fetch_add(1, Ordering::Relaxed);
                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b));

        if let Some(thread) = progress_thread {
            if let Err(panic) = thread.join() {
                warn!("progress bar incrementing thread threw an error {:?}", panic);
            }
        }
        (film, profile)
    }
}
