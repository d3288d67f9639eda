//! Plane representation in Hessian normal form.

use nalgebra::{Point3, Vector3};

/// A plane in Hessian normal form.
///
/// Points `p` on the plane satisfy `normal · p + offset = 0`, with a
/// unit-length normal. Flipping negates the normal and the offset
/// together so both orientations describe the same point set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// Unit-length plane normal.
    pub normal: Vector3<f64>,
    /// Offset `d` in the plane equation `normal · p + d = 0`.
    pub offset: f64,
}

impl Plane {
    /// Create a plane from raw coefficients.
    ///
    /// The coefficients are rescaled so the stored normal is unit
    /// length; the described plane is unchanged.
    ///
    /// Returns `None` if the normal is zero.
    #[must_use]
    pub fn new(normal: Vector3<f64>, offset: f64) -> Option<Self> {
        let norm = normal.norm();
        if norm < f64::EPSILON {
            return None;
        }
        Some(Self {
            normal: normal / norm,
            offset: offset / norm,
        })
    }

    /// Create a plane through a point with the given normal.
    ///
    /// Returns `None` if the normal is zero.
    #[must_use]
    pub fn from_point_normal(point: Point3<f64>, normal: Vector3<f64>) -> Option<Self> {
        let norm = normal.norm();
        if norm < f64::EPSILON {
            return None;
        }
        let normal = normal / norm;
        Some(Self {
            offset: -normal.dot(&point.coords),
            normal,
        })
    }

    /// Create a plane through three points.
    ///
    /// The normal follows the right-hand rule around `p0 -> p1 -> p2`.
    /// Returns `None` if the points are collinear.
    #[must_use]
    pub fn from_points(p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>) -> Option<Self> {
        let normal = (p1 - p0).cross(&(p2 - p0));
        Self::from_point_normal(p0, normal)
    }

    /// Signed distance from a point to the plane.
    ///
    /// Positive on the side the normal points into.
    #[must_use]
    pub fn signed_distance(&self, point: Point3<f64>) -> f64 {
        self.normal.dot(&point.coords) + self.offset
    }

    /// Absolute distance from a point to the plane.
    #[must_use]
    pub fn distance(&self, point: Point3<f64>) -> f64 {
        self.signed_distance(point).abs()
    }

    /// Orthogonal projection of a point onto the plane.
    #[must_use]
    pub fn project(&self, point: Point3<f64>) -> Point3<f64> {
        point - self.signed_distance(point) * self.normal
    }

    /// Whether a point lies within `threshold` of the plane.
    #[must_use]
    pub fn is_inlier(&self, point: Point3<f64>, threshold: f64) -> bool {
        self.distance(point) < threshold
    }

    /// The same plane with the opposite orientation.
    ///
    /// Negates the normal and the offset together, keeping the plane
    /// equation valid.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }
}

#[cfg(test)]
fn default_plane() -> Plane {
    Plane {
        normal: Vector3::z(),
        offset: 0.0,
    }
}
