//! Error types for planar outline extraction.

use thiserror::Error;

/// Result type for outline extraction operations.
pub type OutlineResult<T> = Result<T, OutlineError>;

/// Errors that can occur while extracting a planar outline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlineError {
    /// Not enough points to attempt a plane fit.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum number of points required.
        required: usize,
        /// Number of points actually provided.
        actual: usize,
    },

    /// No input point carries a normal estimate to derive the prior from.
    #[error("no input point carries a normal estimate")]
    MissingNormals,

    /// The expected normal has zero length.
    #[error("expected normal has zero length")]
    DegeneratePrior,

    /// No plane candidate was ever accepted during the search.
    #[error("plane fit failed after {iterations} iterations")]
    FitFailed {
        /// Number of iterations performed before giving up.
        iterations: usize,
    },

    /// The consensus set is too small a fraction of the input.
    #[error("plane fit rejected: {inliers} of {total} points within threshold, need ratio {min_ratio}")]
    InsufficientInliers {
        /// Number of points within the distance threshold.
        inliers: usize,
        /// Total number of input points.
        total: usize,
        /// Required inlier fraction.
        min_ratio: f64,
    },

    /// The fitted normal deviates too far from the expected normal.
    #[error("fitted normal out of tolerance: cos angle {cos_angle:.4} below {min_cos:.4}")]
    NormalOutOfTolerance {
        /// Cosine of the angle between the fitted and expected normals.
        cos_angle: f64,
        /// Minimum acceptable cosine.
        min_cos: f64,
    },

    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face does not have exactly three vertices.
    #[error("face {face} has {arity} vertices, only triangles are supported")]
    NonTriangularFace {
        /// Index of the offending face.
        face: usize,
        /// Number of vertices the face actually has.
        arity: usize,
    },

    /// A face references the same vertex more than once.
    #[error("face {face} repeats a vertex")]
    DegenerateFace {
        /// Index of the offending face.
        face: usize,
    },

    /// A face references a vertex index outside the point set.
    #[error("vertex index {index} out of range (mesh has {vertex_count} vertices)")]
    InvalidIndex {
        /// The out-of-range raw vertex index.
        index: u32,
        /// Number of vertices in the point set.
        vertex_count: usize,
    },

    /// The same directed edge appears in two faces, so the faces
    /// disagree on winding or the mesh is non-manifold.
    #[error("directed edge {from} -> {to} appears in more than one face")]
    InconsistentWinding {
        /// Raw index of the edge origin vertex.
        from: u32,
        /// Raw index of the edge destination vertex.
        to: u32,
    },
}
