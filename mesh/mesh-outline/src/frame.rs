//! Local frame construction on a fitted plane.

use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

use crate::plane::Plane;

/// Default dot-product threshold steering the in-plane axis choice.
pub const DEFAULT_AXIS_ALIGNMENT_THRESHOLD: f64 = 0.8;

/// A right-handed orthonormal frame attached to a plane.
///
/// The rotation columns are the local x, y and z axes expressed in
/// world coordinates; the z axis is the plane normal and the origin is
/// the anchor point projected onto the plane. The frame maps local
/// coordinates to world coordinates, and [`PlaneFrame::to_local_point`]
/// applies the rigid inverse, so points on the plane come out with a
/// zero local z coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneFrame {
    rotation: Matrix3<f64>,
    translation: Vector3<f64>,
}

impl PlaneFrame {
    /// Build the frame for a plane, anchored at `anchor`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_outline::{Plane, PlaneFrame};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let plane = Plane::new(Vector3::z(), 0.0).unwrap();
    /// let frame = PlaneFrame::from_plane(&plane, Point3::new(1.0, 2.0, 5.0));
    ///
    /// // The anchor is projected onto the plane to form the origin
    /// assert_eq!(frame.origin(), Point3::new(1.0, 2.0, 0.0));
    /// assert_eq!(frame.z_axis(), Vector3::z());
    /// ```
    #[must_use]
    pub fn from_plane(plane: &Plane, anchor: Point3<f64>) -> Self {
        Self::from_plane_with_threshold(plane, anchor, DEFAULT_AXIS_ALIGNMENT_THRESHOLD)
    }

    /// Build the frame with an explicit axis-alignment threshold.
    ///
    /// When `|normal · world_x|` is below the threshold, the local x
    /// axis is the world x direction projected into the plane and the
    /// local y axis completes the right-handed triad. Otherwise the
    /// world x direction is too close to the normal, so the local y
    /// axis comes from the world y direction instead. The threshold
    /// must lie in `(0, 1]` for the projected direction to be non-zero.
    #[must_use]
    pub fn from_plane_with_threshold(plane: &Plane, anchor: Point3<f64>, threshold: f64) -> Self {
        let normal = plane.normal;
        let origin = plane.project(anchor);

        let (x_axis, y_axis) = if normal.dot(&Vector3::x()).abs() < threshold {
            let x_axis = project_direction(Vector3::x(), normal);
            (x_axis, normal.cross(&x_axis))
        } else {
            let y_axis = project_direction(Vector3::y(), normal);
            (y_axis.cross(&normal), y_axis)
        };

        Self {
            rotation: Matrix3::from_columns(&[x_axis, y_axis, normal]),
            translation: origin.coords,
        }
    }

    /// Rotation whose columns are the local axes in world coordinates.
    #[must_use]
    pub const fn rotation(&self) -> &Matrix3<f64> {
        &self.rotation
    }

    /// World position of the frame origin.
    #[must_use]
    pub fn origin(&self) -> Point3<f64> {
        Point3::from(self.translation)
    }

    /// Local x axis in world coordinates.
    #[must_use]
    pub fn x_axis(&self) -> Vector3<f64> {
        self.rotation.column(0).into_owned()
    }

    /// Local y axis in world coordinates.
    #[must_use]
    pub fn y_axis(&self) -> Vector3<f64> {
        self.rotation.column(1).into_owned()
    }

    /// Local z axis in world coordinates (the plane normal).
    #[must_use]
    pub fn z_axis(&self) -> Vector3<f64> {
        self.rotation.column(2).into_owned()
    }

    /// Map a local point to world coordinates.
    #[must_use]
    pub fn to_world_point(&self, point: Point3<f64>) -> Point3<f64> {
        Point3::from(self.rotation * point.coords + self.translation)
    }

    /// Map a local direction to world coordinates.
    #[must_use]
    pub fn to_world_vector(&self, vector: Vector3<f64>) -> Vector3<f64> {
        self.rotation * vector
    }

    /// Map a world point into local coordinates.
    ///
    /// This is the rigid inverse of [`PlaneFrame::to_world_point`].
    #[must_use]
    pub fn to_local_point(&self, point: Point3<f64>) -> Point3<f64> {
        Point3::from(self.rotation.transpose() * (point.coords - self.translation))
    }

    /// Map a world direction into local coordinates.
    #[must_use]
    pub fn to_local_vector(&self, vector: Vector3<f64>) -> Vector3<f64> {
        self.rotation.transpose() * vector
    }

    /// The frame as a homogeneous matrix mapping local to world.
    #[must_use]
    pub fn to_homogeneous(&self) -> Matrix4<f64> {
        let mut matrix = Matrix4::identity();
        matrix.fixed_view_mut::<3, 3>(0, 0).copy_from(&self.rotation);
        matrix
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&self.translation);
        matrix
    }
}

/// Remove the normal component of a world direction and normalize.
fn project_direction(direction: Vector3<f64>, normal: Vector3<f64>) -> Vector3<f64> {
    (direction - normal.dot(&direction) * normal).normalize()
}
