use crate::hittable::{Hittable, NO_HIT};
use crate::math::*;

use smallvec::SmallVec;

// directions below this magnitude on an axis contribute no breakpoint.
const AXIS_EPSILON: f64 = 1e-8;
const SURFACE_TOLERANCE: f64 = 1e-6;
const MIN_TIME: f64 = 0.001;
const SEARCH_BOUND: f64 = 1000.0;
const BISECTION_ITERATIONS: usize = 50;

/// L1 distance between `a` and `t * d`, i.e. how far along the ray at `t` is
/// from the octahedron center when `a = center - origin`.
#[inline(always)]
pub fn l1_distance(a: Vec3, d: Vec3, t: f64) -> f64 {
    (a.x - t * d.x).abs() + (a.y - t * d.y).abs() + (a.z - t * d.z).abs()
}

/// Ray test against the solid |x-cx| + |y-cy| + |z-cz| <= edge / 2.
///
/// The L1 distance along the ray is piecewise linear, with kinks where one of
/// the components crosses zero. Those kinks plus two far bounds are the
/// candidates. If none of them is far enough along the ray and inside the
/// solid, a bisection over [0.001, 1000] looks for the crossing instead.
///
/// This is a numeric approximation. Rays grazing edges or vertices can be
/// missed, and a candidate strictly inside the solid is accepted as the entry
/// point. Returns [`NO_HIT`] when the line never comes within reach of the
/// solid.
///
/// The reach test looks at the whole line, not just t > 0. When the line only
/// passes through the solid behind the origin, the bisection never converges
/// and the last midpoint, just above 0.001, comes back as a hit that is not on
/// the surface. [`Octahedron::is_on_surface`] tells those apart.
pub fn hit_octahedron(center: Point3, edge: f64, r: Ray) -> f64 {
    let a = center - r.origin;
    let d = r.direction;
    let f = edge / 2.0;

    let mut candidates: SmallVec<[f64; 5]> = SmallVec::new();
    for axis in 0..3 {
        if d[axis].abs() > AXIS_EPSILON {
            candidates.push(a[axis] / d[axis]);
        }
    }
    candidates.push(-SEARCH_BOUND);
    candidates.push(SEARCH_BOUND);

    let g_min = candidates
        .iter()
        .map(|&t| l1_distance(a, d, t))
        .fold(f64::MAX, f64::min);

    if f < g_min {
        return NO_HIT;
    }

    let best = candidates
        .iter()
        .copied()
        .filter(|&t| t > MIN_TIME && l1_distance(a, d, t) <= f + SURFACE_TOLERANCE)
        .reduce(f64::min);

    match best {
        Some(t) => t,
        None => bisect(a, d, f),
    }
}

// g(mid) > f moves the right bound down, otherwise the left bound up.
fn bisect(a: Vec3, d: Vec3, f: f64) -> f64 {
    let (mut left, mut right) = (MIN_TIME, SEARCH_BOUND);
    for _ in 0..BISECTION_ITERATIONS {
        let mid = (left + right) / 2.0;
        let g_mid = l1_distance(a, d, mid);
        if (g_mid - f).abs() < SURFACE_TOLERANCE {
            return mid;
        }
        if g_mid > f {
            right = mid;
        } else {
            left = mid;
        }
    }
    (left + right) / 2.0
}

/// One of the eight diagonal face normals, picked by the octant of the hit
/// point. zero components count as positive.
pub fn octahedron_normal(center: Point3, point: Point3) -> Vec3 {
    let local = point - center;
    let sign = |v: f64| if v >= 0.0 { 1.0 } else { -1.0 };
    unit_vector(Vec3::new(sign(local.x), sign(local.y), sign(local.z)))
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Octahedron {
    pub edge: f64,
    pub origin: Point3,
}

impl Octahedron {
    pub fn new(edge: f64, origin: Point3) -> Octahedron {
        debug_assert!(edge > 0.0);
        Octahedron { edge, origin }
    }

    /// The L1 radius of the solid.
    pub fn half_edge(&self) -> f64 {
        self.edge / 2.0
    }
}

impl Hittable for Octahedron {
    fn hit_time(&self, r: Ray) -> f64 {
        hit_octahedron(self.origin, self.edge, r)
    }
    fn normal_at(&self, point: Point3) -> Vec3 {
        octahedron_normal(self.origin, point)
    }
    // interior points pass too, the intersector accepts those as entries
    fn is_on_surface(&self, point: Point3) -> bool {
        let local = point - self.origin;
        local.x.abs() + local.y.abs() + local.z.abs() <= self.half_edge() + SURFACE_TOLERANCE
    }
}
