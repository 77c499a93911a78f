use crate::math::*;

/// Returned by the raw intersectors when the ray misses.
pub const NO_HIT: f64 = -1.0;

#[derive(Copy, Clone, Debug)]
pub struct HitRecord {
    pub time: f64,
    pub point: Point3,
    pub normal: Vec3,
    pub instance_id: usize,
}

impl HitRecord {
    pub fn new(time: f64, point: Point3, normal: Vec3, instance_id: usize) -> Self {
        HitRecord {
            time,
            point,
            normal,
            instance_id,
        }
    }
}

pub trait Hittable {
    /// Raw hit parameter along `r`. any value <= 0 means no hit.
    fn hit_time(&self, r: Ray) -> f64;
    /// Surface normal at a point known to lie on the surface.
    fn normal_at(&self, point: Point3) -> Vec3;
    /// Whether a point reported by [`Hittable::hit_time`] actually lies on the
    /// surface. exact intersectors keep the default.
    fn is_on_surface(&self, _point: Point3) -> bool {
        true
    }

    fn hit(&self, r: Ray, instance_id: usize) -> Option<HitRecord> {
        let time = self.hit_time(r);
        if time > 0.0 {
            let point = r.point_at_parameter(time);
            Some(HitRecord::new(
                time,
                point,
                self.normal_at(point),
                instance_id,
            ))
        } else {
            None
        }
    }
}
