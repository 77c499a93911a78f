mod instance;
mod octahedron;
mod sphere;

pub use instance::{Instance, InstanceId};
pub use octahedron::{hit_octahedron, l1_distance, octahedron_normal, Octahedron};
pub use sphere::{hit_sphere, sphere_normal, Sphere};

use crate::hittable::Hittable;
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Aggregate {
    Sphere(Sphere),
    Octahedron(Octahedron),
}

impl From<Sphere> for Aggregate {
    fn from(data: Sphere) -> Self {
        Aggregate::Sphere(data)
    }
}

impl From<Octahedron> for Aggregate {
    fn from(data: Octahedron) -> Self {
        Aggregate::Octahedron(data)
    }
}

impl Aggregate {
    pub fn kind(&self) -> &'static str {
        match self {
            Aggregate::Sphere(_) => "sphere",
            Aggregate::Octahedron(_) => "octahedron",
        }
    }
}

impl Hittable for Aggregate {
    fn hit_time(&self, r: Ray) -> f64 {
        match self {
            Aggregate::Sphere(sphere) => sphere.hit_time(r),
            Aggregate::Octahedron(octahedron) => octahedron.hit_time(r),
        }
    }
    fn normal_at(&self, point: Point3) -> Vec3 {
        match self {
            Aggregate::Sphere(sphere) => sphere.normal_at(point),
            Aggregate::Octahedron(octahedron) => octahedron.normal_at(point),
        }
    }
    fn is_on_surface(&self, point: Point3) -> bool {
        match self {
            Aggregate::Sphere(sphere) => sphere.is_on_surface(point),
            Aggregate::Octahedron(octahedron) => octahedron.is_on_surface(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_dispatch() {
        let sphere = Sphere::new(0.5, Point3::new(0.5, 0.0, -1.0));
        let octahedron = Octahedron::new(0.5, Point3::new(-0.5, 0.0, -1.0));

        let aggregate1 = Aggregate::from(sphere);
        let aggregate2 = Aggregate::from(octahedron);

        let to_sphere = Ray::new(Point3::ORIGIN, Vec3::new(0.5, 0.0, -1.0));
        let to_octahedron = Ray::new(Point3::ORIGIN, Vec3::new(-0.5, 0.0, -1.0));

        assert_eq!(aggregate1.hit_time(to_sphere), sphere.hit_time(to_sphere));
        assert_eq!(
            aggregate2.hit_time(to_octahedron),
            octahedron.hit_time(to_octahedron)
        );
        assert!(aggregate1.hit(to_octahedron, 0).is_none());
        assert!(aggregate2.hit(to_sphere, 0).is_none());
        assert_eq!(aggregate1.kind(), "sphere");
        assert_eq!(aggregate2.kind(), "octahedron");
    }
}
