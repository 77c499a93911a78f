#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize,          // one per pixel
    pub solid_hits: usize,           // camera rays shaded by a solid
    pub env_hits: usize,             // camera rays that fell through to the background
    pub instance_hits: Vec<usize>,   // solid hits split by instance id
}

impl Profile {
    pub fn new(camera_rays: usize, solid_hits: usize, env_hits: usize) -> Self {
        Profile {
            camera_rays,
            solid_hits,
            env_hits,
            instance_hits: Vec::new(),
        }
    }

    pub fn record_solid_hit(&mut self, instance_id: usize) {
        self.solid_hits += 1;
        if self.instance_hits.len() <= instance_id {
            self.instance_hits.resize(instance_id + 1, 0);
        }
        self.instance_hits[instance_id] += 1;
    }

    pub fn hits_for(&self, instance_id: usize) -> usize {
        self.instance_hits.get(instance_id).copied().unwrap_or(0)
    }

    pub fn combine(&self, other: Self) -> Self {
        let mut instance_hits = other.instance_hits;
        if instance_hits.len() < self.instance_hits.len() {
            instance_hits.resize(self.instance_hits.len(), 0);
        }
        for (total, &hits) in instance_hits.iter_mut().zip(self.instance_hits.iter()) {
            *total += hits;
        }
        Profile {
            camera_rays: self.camera_rays + other.camera_rays,
            solid_hits: self.solid_hits + other.solid_hits,
            env_hits: self.env_hits + other.env_hits,
            instance_hits,
        }
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let Profile {
            camera_rays,
            solid_hits,
            env_hits,
            ..
        } = *self;
        let elapsed = elapsed.max(f32::EPSILON);
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads.max(1) as f32)
        );
        info!("{} total solid hits, {} total env hits", solid_hits, env_hits);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_combine() {
        let empty = Profile::default();
        let a = Profile::new(3, 2, 1);
        assert_eq!(empty.combine(a.clone()), a);
        assert_eq!(a.combine(a.clone()), Profile::new(6, 4, 2));
    }

    #[test]
    fn test_instance_hits() {
        let mut a = Profile::new(2, 0, 0);
        a.record_solid_hit(1);
        a.record_solid_hit(1);
        let mut b = Profile::new(1, 0, 0);
        b.record_solid_hit(0);

        assert_eq!(a.instance_hits, vec![0, 2]);
        let total = b.combine(a);
        assert_eq!(total.solid_hits, 3);
        assert_eq!(total.instance_hits, vec![1, 2]);
        assert_eq!(total.hits_for(1), 2);
        assert_eq!(total.hits_for(5), 0);
    }
}
