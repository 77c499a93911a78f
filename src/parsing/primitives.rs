use crate::geometry::*;
use crate::math::*;

use anyhow::ensure;
use serde::Deserialize;

use super::Point3Data;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SphereData {
    pub name: Option<String>,
    pub center: Point3Data,
    pub radius: f64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct OctahedronData {
    pub name: Option<String>,
    pub center: Point3Data,
    pub edge: f64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum SolidData {
    Sphere(SphereData),
    Octahedron(OctahedronData),
}

impl SolidData {
    /// Builds the solid and its label. unnamed solids are labeled with their
    /// kind and position in the list.
    pub fn parse(self, index: usize) -> anyhow::Result<(String, Aggregate)> {
        let (name, aggregate) = match self {
            SolidData::Sphere(data) => {
                ensure!(
                    Point3::from(data.center).is_finite(),
                    "sphere center must be finite, got {:?}",
                    data.center
                );
                ensure!(
                    data.radius.is_finite() && data.radius > 0.0,
                    "sphere radius must be positive and finite, got {}",
                    data.radius
                );
                info!("parsed sphere data");
                (
                    data.name,
                    Aggregate::Sphere(Sphere::new(data.radius, Point3::from(data.center))),
                )
            }
            SolidData::Octahedron(data) => {
                ensure!(
                    Point3::from(data.center).is_finite(),
                    "octahedron center must be finite, got {:?}",
                    data.center
                );
                ensure!(
                    data.edge.is_finite() && data.edge > 0.0,
                    "octahedron edge must be positive and finite, got {}",
                    data.edge
                );
                info!("parsed octahedron data");
                (
                    data.name,
                    Aggregate::Octahedron(Octahedron::new(data.edge, Point3::from(data.center))),
                )
            }
        };
        let name = name.unwrap_or_else(|| format!("{}{}", aggregate.kind(), index));
        Ok((name, aggregate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_finite_values() {
        let sphere = |center: Point3Data, radius: f64| {
            SolidData::Sphere(SphereData {
                name: None,
                center,
                radius,
            })
        };
        let octahedron = |center: Point3Data, edge: f64| {
            SolidData::Octahedron(OctahedronData {
                name: None,
                center,
                edge,
            })
        };

        assert!(sphere([0.0, 0.0, f64::INFINITY], 0.5).parse(0).is_err());
        assert!(sphere([0.0, 0.0, -1.0], f64::INFINITY).parse(0).is_err());
        assert!(octahedron([f64::NAN, 0.0, -1.0], 0.5).parse(1).is_err());
        assert!(octahedron([0.0, 0.0, -1.0], f64::INFINITY).parse(1).is_err());

        let (name, aggregate) = octahedron([0.0, 0.0, -1.0], 0.5).parse(1).unwrap();
        assert_eq!(name, "octahedron1");
        assert_eq!(aggregate.kind(), "octahedron");
    }
}
