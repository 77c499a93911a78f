use super::{Point3, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    // direction is not normalized, intersectors account for its magnitude.
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f64) -> Point3 {
        self.origin + self.direction * time
    }

    pub fn at(self, time: f64) -> Point3 {
        self.point_at_parameter(time)
    }
}
