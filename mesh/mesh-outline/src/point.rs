//! Input point type for scanned surface patches.

use nalgebra::{Point3, Vector3};

/// A sampled surface point with an optional normal estimate.
///
/// Normals typically come from the sensor or from a local neighborhood
/// fit upstream. They are optional per point; the importer only needs
/// one to orient the fitted plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfacePoint {
    /// Position in world coordinates.
    pub position: Point3<f64>,
    /// Estimated outward surface normal, if known.
    pub normal: Option<Vector3<f64>>,
}

impl SurfacePoint {
    /// Create a point without a normal estimate.
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            normal: None,
        }
    }

    /// Create a point from raw coordinates.
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Attach a normal estimate.
    #[must_use]
    pub fn with_normal(mut self, normal: Vector3<f64>) -> Self {
        self.normal = Some(normal);
        self
    }
}

impl From<Point3<f64>> for SurfacePoint {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for SurfacePoint {
    fn from(coords: [f64; 3]) -> Self {
        Self::new(Point3::new(coords[0], coords[1], coords[2]))
    }
}
