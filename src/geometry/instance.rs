use crate::geometry::Aggregate;
use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

pub type InstanceId = usize;

/// A labeled solid in the scene. the instance id is its position in the
/// world's priority order.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub name: String,
    pub aggregate: Aggregate,
    pub instance_id: InstanceId,
}

impl Instance {
    pub fn new(name: impl Into<String>, aggregate: Aggregate, instance_id: InstanceId) -> Self {
        Instance {
            name: name.into(),
            aggregate,
            instance_id,
        }
    }

    pub fn get_instance_id(&self) -> InstanceId {
        self.instance_id
    }

    pub fn hit(&self, r: Ray) -> Option<HitRecord> {
        debug_assert!(r.origin.is_finite());
        debug_assert!(r.direction.is_finite());
        let hit = self.aggregate.hit(r, self.instance_id)?;
        debug_assert!(
            hit.point.is_finite() && hit.normal.is_finite() && hit.time.is_finite(),
            "{:?}",
            hit
        );
        Some(hit)
    }
}
