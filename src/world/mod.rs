mod environment;

pub use environment::EnvironmentMap;

use crate::geometry::*;
use crate::hittable::{HitRecord, Hittable};
use crate::math::*;
use crate::profile::Profile;

use serde::Deserialize;

/// How the world resolves a ray that could hit more than one solid.
#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HitPolicy {
    /// Solids are tested in list order and the first positive hit wins, even
    /// if a later solid is closer along the ray.
    #[default]
    FirstInOrder,
    /// Every solid is tested and the smallest positive hit time wins. hits
    /// whose point is not on the solid's surface are dropped first.
    Nearest,
}

#[derive(Clone, Debug)]
pub struct World {
    pub instances: Vec<Instance>,
    pub environment: EnvironmentMap,
    pub hit_policy: HitPolicy,
}

impl World {
    pub fn new(
        solids: Vec<(String, Aggregate)>,
        environment: EnvironmentMap,
        hit_policy: HitPolicy,
    ) -> Self {
        let instances: Vec<Instance> = solids
            .into_iter()
            .enumerate()
            .map(|(instance_id, (name, aggregate))| Instance::new(name, aggregate, instance_id))
            .collect();
        for instance in instances.iter() {
            info!(
                "added {} {:?} with instance id {}",
                instance.aggregate.kind(),
                instance.name,
                instance.instance_id
            );
        }
        if instances.is_empty() {
            warn!("world has no solids, every pixel will show the environment");
        }
        World {
            instances,
            environment,
            hit_policy,
        }
    }

    /// A sphere in front and to the right of the camera, tested first, and an
    /// octahedron to the left.
    pub fn default_scene() -> Self {
        World::new(
            vec![
                (
                    "sphere".to_string(),
                    Sphere::new(0.5, Point3::new(0.5, 0.0, -1.0)).into(),
                ),
                (
                    "octahedron".to_string(),
                    Octahedron::new(0.5, Point3::new(-0.5, 0.0, -1.0)).into(),
                ),
            ],
            EnvironmentMap::default(),
            HitPolicy::FirstInOrder,
        )
    }

    pub fn get_primitive(&self, index: InstanceId) -> &Instance {
        &self.instances[index]
    }

    pub fn hit(&self, r: Ray) -> Option<HitRecord> {
        match self.hit_policy {
            HitPolicy::FirstInOrder => self.instances.iter().find_map(|instance| instance.hit(r)),
            HitPolicy::Nearest => self
                .instances
                .iter()
                .filter_map(|instance| instance.hit(r))
                .filter(|hit| {
                    self.get_primitive(hit.instance_id)
                        .aggregate
                        .is_on_surface(hit.point)
                })
                .min_by(|a, b| a.time.total_cmp(&b.time)),
        }
    }

    pub fn color(&self, r: Ray) -> RGBColor {
        self.color_with_profile(r, &mut Profile::default())
    }

    pub fn color_with_profile(&self, r: Ray, profile: &mut Profile) -> RGBColor {
        profile.camera_rays += 1;
        match self.hit(r) {
            Some(hit) => {
                profile.record_solid_hit(hit.instance_id);
                normal_to_color(hit.normal)
            }
            None => {
                profile.env_hits += 1;
                self.environment.emission(r.direction)
            }
        }
    }
}
