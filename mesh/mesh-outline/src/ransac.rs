//! Prior-constrained RANSAC plane fitting.
//!
//! Fits a plane to noisy point data by sampling minimal point sets and
//! keeping the candidate with the largest consensus. Candidates whose
//! normal falls outside an angular band around an expected direction
//! never enter the competition, which keeps the fit from locking onto
//! a secondary surface in the patch.

use nalgebra::{Matrix3, Point3, SymmetricEigen, Vector3};
use rand::prelude::*;
use tracing::{debug, warn};

use crate::error::{OutlineError, OutlineResult};
use crate::plane::Plane;

/// Configuration for the robust plane fit.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Maximum number of candidate iterations.
    pub max_iterations: usize,
    /// Distance threshold for classifying inliers.
    pub distance_threshold: f64,
    /// Angular tolerance in radians between the fitted normal and the
    /// expected normal.
    pub angle_tolerance: f64,
    /// Minimum fraction of points that must be inliers for the fit to
    /// be accepted.
    pub min_inlier_ratio: f64,
    /// Seed for reproducible fits. `None` uses a thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            distance_threshold: 0.01,
            angle_tolerance: 0.5,
            min_inlier_ratio: 0.9,
            seed: None,
        }
    }
}

impl FitConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of iterations.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the inlier distance threshold.
    #[must_use]
    pub const fn with_distance_threshold(mut self, threshold: f64) -> Self {
        self.distance_threshold = threshold;
        self
    }

    /// Set the angular tolerance in radians.
    #[must_use]
    pub const fn with_angle_tolerance(mut self, tolerance: f64) -> Self {
        self.angle_tolerance = tolerance;
        self
    }

    /// Set the minimum inlier fraction.
    #[must_use]
    pub const fn with_min_inlier_ratio(mut self, ratio: f64) -> Self {
        self.min_inlier_ratio = ratio;
        self
    }

    /// Set the RNG seed for reproducible fits.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of a successful plane fit.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneFit {
    /// The fitted plane, oriented along the expected normal.
    pub plane: Plane,
    /// Indices of input points within the distance threshold.
    pub inliers: Vec<usize>,
    /// Number of candidate iterations performed.
    pub iterations: usize,
}

impl PlaneFit {
    /// Fraction of the input points that are inliers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision loss: point counts beyond 2^52 are unsupported
    pub fn inlier_ratio(&self, total_points: usize) -> f64 {
        if total_points == 0 {
            return 0.0;
        }
        self.inliers.len() as f64 / total_points as f64
    }
}

/// Fit a plane to a point set under a directional prior.
///
/// The search samples random point triples, rejects candidates whose
/// normal is outside the angular tolerance of `expected_normal`
/// (ignoring sign), and keeps the candidate with the most inliers. The
/// winner is refined by least squares over its consensus set, inliers
/// are recounted against the refined plane, and the final normal is
/// oriented to point along the prior.
///
/// # Errors
///
/// - [`OutlineError::InsufficientPoints`] with fewer than three points
/// - [`OutlineError::DegeneratePrior`] if `expected_normal` is zero
/// - [`OutlineError::FitFailed`] if no candidate was ever accepted
/// - [`OutlineError::InsufficientInliers`] if the consensus fraction
///   stays below `min_inlier_ratio`
/// - [`OutlineError::NormalOutOfTolerance`] if the refined normal ends
///   up outside the angular tolerance
///
/// # Example
///
/// ```
/// use mesh_outline::{fit_plane, FitConfig};
/// use nalgebra::{Point3, Vector3};
///
/// let mut points = Vec::new();
/// for i in 0..5 {
///     for j in 0..5 {
///         points.push(Point3::new(f64::from(i), f64::from(j), 0.0));
///     }
/// }
///
/// let config = FitConfig::new().with_seed(42);
/// let fit = fit_plane(&points, Vector3::z(), &config).unwrap();
/// assert!(fit.plane.normal.z > 0.99);
/// assert_eq!(fit.inliers.len(), 25);
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Casts: the inlier floor is bounded by the point count, which fits in usize
pub fn fit_plane(
    points: &[Point3<f64>],
    expected_normal: Vector3<f64>,
    config: &FitConfig,
) -> OutlineResult<PlaneFit> {
    let total = points.len();
    if total < 3 {
        return Err(OutlineError::InsufficientPoints {
            required: 3,
            actual: total,
        });
    }

    let Some(prior) = expected_normal.try_normalize(f64::EPSILON) else {
        return Err(OutlineError::DegeneratePrior);
    };

    let mut rng: Box<dyn RngCore> = if let Some(seed) = config.seed {
        Box::new(rand::rngs::StdRng::seed_from_u64(seed))
    } else {
        Box::new(rand::thread_rng())
    };

    let min_inliers = (total as f64 * config.min_inlier_ratio).ceil() as usize;
    let cos_tolerance = config.angle_tolerance.cos();

    let mut best_plane: Option<Plane> = None;
    let mut best_inliers: Vec<usize> = Vec::new();
    let mut iterations_used = 0;

    for iteration in 0..config.max_iterations {
        iterations_used = iteration + 1;

        // Sample 3 random distinct points
        let i0 = rng.gen_range(0..total);
        let mut i1 = rng.gen_range(0..total);
        while i1 == i0 {
            i1 = rng.gen_range(0..total);
        }
        let mut i2 = rng.gen_range(0..total);
        while i2 == i0 || i2 == i1 {
            i2 = rng.gen_range(0..total);
        }

        let Some(candidate) = Plane::from_points(points[i0], points[i1], points[i2]) else {
            // Collinear sample, try again
            continue;
        };

        // Sign-insensitive prior gate; orientation is fixed after
        // refinement.
        if candidate.normal.dot(&prior).abs() < cos_tolerance {
            continue;
        }

        let inliers: Vec<usize> = (0..total)
            .filter(|&i| candidate.is_inlier(points[i], config.distance_threshold))
            .collect();

        if inliers.len() > best_inliers.len() {
            best_plane = Some(candidate);
            best_inliers = inliers;

            if best_inliers.len() >= min_inliers {
                break;
            }
        }
    }

    let Some(plane) = best_plane else {
        return Err(OutlineError::FitFailed {
            iterations: iterations_used,
        });
    };

    // Least-squares refinement over the consensus set, then a recount
    // against the refined plane.
    let plane = refine_plane(points, &best_inliers).unwrap_or(plane);
    let inliers: Vec<usize> = (0..total)
        .filter(|&i| plane.is_inlier(points[i], config.distance_threshold))
        .collect();

    if inliers.len() < min_inliers {
        warn!(
            inliers = inliers.len(),
            total, "Plane fit rejected: inlier fraction below the floor"
        );
        return Err(OutlineError::InsufficientInliers {
            inliers: inliers.len(),
            total,
            min_ratio: config.min_inlier_ratio,
        });
    }

    let plane = orient_along_prior(plane, prior, cos_tolerance)?;

    debug!(
        inliers = inliers.len(),
        iterations = iterations_used,
        normal = ?plane.normal,
        "Plane fit accepted"
    );

    Ok(PlaneFit {
        plane,
        inliers,
        iterations: iterations_used,
    })
}

/// Orient a fitted plane along the expected normal and enforce the
/// angular tolerance gate.
///
/// Flipping negates the normal and the offset together, so the plane
/// equation stays consistent.
fn orient_along_prior(
    plane: Plane,
    prior: Vector3<f64>,
    cos_tolerance: f64,
) -> OutlineResult<Plane> {
    let plane = if plane.normal.dot(&prior) < 0.0 {
        warn!("Flipping fitted plane normal to match the expected direction");
        plane.flipped()
    } else {
        plane
    };

    let cos_angle = plane.normal.dot(&prior);
    if cos_angle < cos_tolerance {
        warn!(
            cos_angle,
            cos_tolerance, "Fitted plane normal out of tolerance"
        );
        return Err(OutlineError::NormalOutOfTolerance {
            cos_angle,
            min_cos: cos_tolerance,
        });
    }

    Ok(plane)
}

/// Refine a plane by least squares over an inlier set.
///
/// The refined normal is the eigenvector of the inlier covariance with
/// the smallest eigenvalue, and the plane passes through the inlier
/// centroid.
#[allow(clippy::cast_precision_loss)]
// Precision loss: inlier counts beyond 2^52 are unsupported
fn refine_plane(points: &[Point3<f64>], inliers: &[usize]) -> Option<Plane> {
    if inliers.len() < 3 {
        return None;
    }

    let mut centroid = Vector3::zeros();
    for &i in inliers {
        centroid += points[i].coords;
    }
    centroid /= inliers.len() as f64;

    let mut covariance = Matrix3::zeros();
    for &i in inliers {
        let d = points[i].coords - centroid;
        covariance += d * d.transpose();
    }

    let eigen = SymmetricEigen::new(covariance);
    let mut smallest = 0;
    for k in 1..3 {
        if eigen.eigenvalues[k] < eigen.eigenvalues[smallest] {
            smallest = k;
        }
    }

    let normal = eigen.eigenvectors.column(smallest).into_owned();
    Plane::from_point_normal(Point3::from(centroid), normal)
}
