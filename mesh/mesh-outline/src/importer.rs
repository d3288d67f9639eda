//! The import pipeline: plane fit, frame, mesh, boundary walk,
//! projection.

use nalgebra::{Point3, Vector3};
use tracing::{debug, info};

use crate::boundary::extract_boundary_loops;
use crate::error::{OutlineError, OutlineResult};
use crate::frame::{DEFAULT_AXIS_ALIGNMENT_THRESHOLD, PlaneFrame};
use crate::half_edge::HalfEdgeMesh;
use crate::plane::Plane;
use crate::point::SurfacePoint;
use crate::polygon::PolygonBoundary;
use crate::project::project_boundary;
use crate::ransac::{FitConfig, fit_plane};

/// Configuration for the import pipeline.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Plane fit configuration.
    pub fit: FitConfig,
    /// Dot-product threshold steering the local frame's in-plane axis
    /// choice.
    pub axis_alignment_threshold: f64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            fit: FitConfig::default(),
            axis_alignment_threshold: DEFAULT_AXIS_ALIGNMENT_THRESHOLD,
        }
    }
}

impl ImportConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the plane fit configuration.
    #[must_use]
    pub const fn with_fit(mut self, fit: FitConfig) -> Self {
        self.fit = fit;
        self
    }

    /// Set the axis-alignment threshold for the local frame.
    #[must_use]
    pub const fn with_axis_alignment_threshold(mut self, threshold: f64) -> Self {
        self.axis_alignment_threshold = threshold;
        self
    }

    /// Set the RNG seed of the plane fit for reproducible imports.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.fit.seed = Some(seed);
        self
    }
}

/// A triangulated surface patch to import.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPatch {
    /// Sampled surface points, some of which may carry normals.
    pub points: Vec<SurfacePoint>,
    /// Faces as raw indices into `points`; only triangles are
    /// accepted.
    pub faces: Vec<Vec<u32>>,
}

impl MeshPatch {
    /// Create a patch from points and faces.
    #[must_use]
    pub const fn new(points: Vec<SurfacePoint>, faces: Vec<Vec<u32>>) -> Self {
        Self { points, faces }
    }

    /// Number of input points.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Everything the import produces.
///
/// Callers keep the frame alongside the boundaries: a planned path
/// point `(x, y)` in boundary coordinates maps back to world space as
/// `frame.to_world_point(Point3::new(x, y, 0.0))`.
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// Projected boundary polygons, in extraction order. Outer
    /// boundaries are wound counter-clockwise, holes clockwise.
    pub boundaries: Vec<PolygonBoundary>,
    /// Local frame on the fitted plane, anchored at the patch
    /// centroid.
    pub frame: PlaneFrame,
    /// The fitted plane in world coordinates.
    pub plane: Plane,
    /// Fraction of input points within the fit distance threshold.
    pub inlier_ratio: f64,
    /// Plane fit iterations used.
    pub fit_iterations: usize,
}

impl ImportResult {
    /// Number of extracted boundaries.
    #[must_use]
    pub fn boundary_count(&self) -> usize {
        self.boundaries.len()
    }

    /// The largest counter-clockwise boundary, if any.
    #[must_use]
    pub fn outer_boundary(&self) -> Option<&PolygonBoundary> {
        self.boundaries
            .iter()
            .filter(|boundary| boundary.is_outer())
            .max_by(|a, b| a.area().total_cmp(&b.area()))
    }

    /// Boundaries wound clockwise (holes).
    pub fn holes(&self) -> impl Iterator<Item = &PolygonBoundary> {
        self.boundaries.iter().filter(|boundary| boundary.is_hole())
    }
}

/// Imports a planar surface patch and extracts its 2D boundaries.
///
/// The pipeline runs in fixed order: fit a plane to the points under
/// the normal prior, anchor a local frame at the projected centroid,
/// build the half-edge mesh, walk its boundary loops, and project each
/// loop into the frame.
#[derive(Debug, Clone, Default)]
pub struct MeshImporter {
    config: ImportConfig,
}

impl MeshImporter {
    /// Create an importer with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an importer with the given configuration.
    #[must_use]
    pub const fn with_config(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Run the full import pipeline on a patch.
    ///
    /// # Errors
    ///
    /// - [`OutlineError::EmptyMesh`] if the patch has no faces
    /// - [`OutlineError::InsufficientPoints`] with fewer than three
    ///   points
    /// - [`OutlineError::MissingNormals`] if no point carries a normal
    ///   to derive the fit prior from
    /// - any plane fit error from [`fit_plane`]
    /// - any mesh construction error from [`HalfEdgeMesh::from_faces`]
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_outline::{MeshImporter, MeshPatch, SurfacePoint};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let points = vec![
    ///     SurfacePoint::from_coords(0.0, 0.0, 0.0).with_normal(Vector3::z()),
    ///     SurfacePoint::from_coords(1.0, 0.0, 0.0).with_normal(Vector3::z()),
    ///     SurfacePoint::from_coords(1.0, 1.0, 0.0).with_normal(Vector3::z()),
    ///     SurfacePoint::from_coords(0.0, 1.0, 0.0).with_normal(Vector3::z()),
    /// ];
    /// let faces = vec![vec![0, 1, 2], vec![0, 2, 3]];
    ///
    /// let result = MeshImporter::new()
    ///     .import(&MeshPatch::new(points, faces))
    ///     .unwrap();
    /// assert_eq!(result.boundary_count(), 1);
    /// assert!(result.boundaries[0].is_outer());
    /// ```
    pub fn import(&self, patch: &MeshPatch) -> OutlineResult<ImportResult> {
        if patch.faces.is_empty() {
            return Err(OutlineError::EmptyMesh);
        }
        let total = patch.points.len();
        if total < 3 {
            return Err(OutlineError::InsufficientPoints {
                required: 3,
                actual: total,
            });
        }

        let prior = patch
            .points
            .iter()
            .find_map(|point| point.normal)
            .ok_or(OutlineError::MissingNormals)?;

        let positions: Vec<Point3<f64>> =
            patch.points.iter().map(|point| point.position).collect();

        let fit = fit_plane(&positions, prior, &self.config.fit)?;
        debug!(
            inliers = fit.inliers.len(),
            iterations = fit.iterations,
            "Fitted patch plane"
        );

        let frame = PlaneFrame::from_plane_with_threshold(
            &fit.plane,
            centroid(&positions),
            self.config.axis_alignment_threshold,
        );

        let mesh = HalfEdgeMesh::from_faces(&positions, &patch.faces)?;
        debug!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "Built patch connectivity"
        );

        let loops = extract_boundary_loops(&mesh);
        let boundaries: Vec<PolygonBoundary> = loops
            .iter()
            .map(|boundary| project_boundary(boundary, &mesh, &fit.plane, &frame))
            .collect();

        info!(
            boundaries = boundaries.len(),
            points = total,
            faces = patch.faces.len(),
            "Imported planar patch"
        );

        Ok(ImportResult {
            boundaries,
            frame,
            plane: fit.plane,
            inlier_ratio: fit.inlier_ratio(total),
            fit_iterations: fit.iterations,
        })
    }
}

/// Mean position of a non-empty point set.
#[allow(clippy::cast_precision_loss)]
// Precision loss: point counts beyond 2^52 are unsupported
fn centroid(positions: &[Point3<f64>]) -> Point3<f64> {
    let mut sum = Vector3::zeros();
    for position in positions {
        sum += position.coords;
    }
    Point3::from(sum / positions.len() as f64)
}
