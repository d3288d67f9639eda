//! Projected 2D boundary polygons.
//!
//! The projector emits boundary loops as flat polygons in plane-local
//! coordinates. Winding is inherited from the mesh connectivity, so
//! the signed area tells outer boundaries (counter-clockwise) apart
//! from holes (clockwise).

/// A point in plane-local 2D coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonPoint {
    /// Coordinate along the local x axis.
    pub x: f64,
    /// Coordinate along the local y axis.
    pub y: f64,
}

impl PolygonPoint {
    /// Create a point from local coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A closed polygon in plane-local coordinates.
///
/// The points list the vertices in order; the closing edge from the
/// last point back to the first is implicit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonBoundary {
    /// Vertices in loop order.
    pub points: Vec<PolygonPoint>,
}

impl PolygonBoundary {
    /// Create a boundary from ordered vertices.
    #[must_use]
    pub const fn new(points: Vec<PolygonPoint>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the boundary has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area by the shoelace formula.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise,
    /// zero for degenerate polygons with fewer than three vertices.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for (i, a) in self.points.iter().enumerate() {
            let b = &self.points[(i + 1) % self.points.len()];
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }

    /// Enclosed area, ignoring winding.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Total edge length, including the closing edge.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let mut sum = 0.0;
        for (i, a) in self.points.iter().enumerate() {
            let b = self.points[(i + 1) % self.points.len()];
            sum += a.distance_to(b);
        }
        sum
    }

    /// Area-weighted centroid.
    ///
    /// Falls back to the vertex mean for degenerate polygons and
    /// returns `None` when there are no vertices at all.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision loss: vertex counts beyond 2^52 are unsupported
    pub fn centroid(&self) -> Option<PolygonPoint> {
        if self.points.is_empty() {
            return None;
        }

        let area = self.signed_area();
        if area.abs() < f64::EPSILON {
            let n = self.points.len() as f64;
            let (sx, sy) = self
                .points
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            return Some(PolygonPoint::new(sx / n, sy / n));
        }

        let (mut cx, mut cy) = (0.0, 0.0);
        for (i, a) in self.points.iter().enumerate() {
            let b = &self.points[(i + 1) % self.points.len()];
            let cross = a.x * b.y - b.x * a.y;
            cx += (a.x + b.x) * cross;
            cy += (a.y + b.y) * cross;
        }
        Some(PolygonPoint::new(cx / (6.0 * area), cy / (6.0 * area)))
    }

    /// Whether the boundary is wound counter-clockwise (an outer
    /// boundary).
    #[must_use]
    pub fn is_outer(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Whether the boundary is wound clockwise (a hole).
    #[must_use]
    pub fn is_hole(&self) -> bool {
        self.signed_area() < 0.0
    }
}
