use crate::hittable::{Hittable, NO_HIT};
use crate::math::*;

/// Closed form ray/sphere test.
///
/// Always returns the near root of the quadratic, or [`NO_HIT`] when the
/// discriminant is negative. The far root is never considered, so a ray that
/// starts inside the sphere gets a negative time and is treated as a miss by
/// callers. No sign check is done here.
pub fn hit_sphere(center: Point3, radius: f64, r: Ray) -> f64 {
    let oc: Vec3 = center - r.origin;
    let a = r.direction.norm_squared();
    let h = r.direction.dot(oc);
    let c = oc.norm_squared() - radius * radius;
    let discriminant = h * h - a * c;

    if discriminant < 0.0 {
        NO_HIT
    } else {
        (h - discriminant.sqrt()) / a
    }
}

pub fn sphere_normal(center: Point3, point: Point3) -> Vec3 {
    unit_vector(point - center)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    pub origin: Point3,
}

impl Sphere {
    pub fn new(radius: f64, origin: Point3) -> Sphere {
        debug_assert!(radius > 0.0);
        Sphere { radius, origin }
    }
}

impl Hittable for Sphere {
    fn hit_time(&self, r: Ray) -> f64 {
        hit_sphere(self.origin, self.radius, r)
    }
    fn normal_at(&self, point: Point3) -> Vec3 {
        sphere_normal(self.origin, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn random_vec(rng: &mut impl Rng, scale: f64) -> Vec3 {
        Vec3::new(
            rng.gen_range(-scale..scale),
            rng.gen_range(-scale..scale),
            rng.gen_range(-scale..scale),
        )
    }

    #[test]
    fn test_hit_from_outside() {
        let center = Point3::new(0.0, 0.0, -1.0);
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let t = hit_sphere(center, 0.5, r);
        assert!((t - 0.5).abs() < 1e-12, "{}", t);

        // unnormalized directions scale the parameter
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -2.0));
        let t = hit_sphere(center, 0.5, r);
        assert!((t - 0.25).abs() < 1e-12, "{}", t);
    }

    #[test]
    fn test_miss_returns_sentinel() {
        let r = Ray::new(Point3::ORIGIN, Vec3::Y);
        assert_eq!(hit_sphere(Point3::new(0.0, 0.0, -1.0), 0.5, r), NO_HIT);
    }

    #[test]
    fn test_inside_reports_near_root_only() {
        // origin at the center, near root is behind the ray
        let r = Ray::new(Point3::ORIGIN, Vec3::X);
        let t = hit_sphere(Point3::ORIGIN, 1.0, r);
        assert!((t + 1.0).abs() < 1e-12, "{}", t);
        assert!(Sphere::new(1.0, Point3::ORIGIN).hit(r, 0).is_none());
    }

    #[test]
    fn test_hit_lies_on_surface() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut hits = 0;
        for _ in 0..10000 {
            let center = random_vec(&mut rng, 3.0);
            let radius = rng.gen_range(0.1..2.0);
            let r = Ray::new(random_vec(&mut rng, 5.0), random_vec(&mut rng, 1.0));
            if r.direction.norm_squared() < 1e-6 {
                continue;
            }
            let t = hit_sphere(center, radius, r);
            if t == NO_HIT {
                continue;
            }
            hits += 1;
            let distance = (r.at(t) - center).norm();
            assert!(
                (distance - radius).abs() < 1e-6,
                "{:?} {} {} {}",
                r,
                t,
                distance,
                radius
            );
        }
        assert!(hits > 0);
    }

    #[test]
    fn test_normal_is_unit_length() {
        let sphere = Sphere::new(0.5, Point3::new(0.5, 0.0, -1.0));
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.4, 0.1, -1.0));
        let hit = sphere.hit(r, 3).expect("ray should hit the sphere");
        assert_eq!(hit.instance_id, 3);
        assert!((hit.normal.norm() - 1.0).abs() < 1e-9);
        // facing back toward the camera
        assert!(hit.normal.dot(r.direction) < 0.0);
    }
}
