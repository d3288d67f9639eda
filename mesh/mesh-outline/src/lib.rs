//! Planar boundary extraction from scanned surface patches.
//!
//! This crate provides tools for:
//! - Robust plane fitting under an expected-normal prior (RANSAC with
//!   least-squares refinement)
//! - Right-handed local frames anchored on the fitted plane
//! - Half-edge triangle meshes with twin linking and boundary
//!   detection
//! - Ordered boundary-loop extraction and projection into 2D polygons
//!
//! The [`MeshImporter`] pipeline composes the stages: fit a plane to
//! the patch points, anchor a frame at the projected centroid, build
//! the half-edge mesh, walk its boundary loops, and project each loop
//! into the frame. Winding is inherited from the face connectivity, so
//! outer boundaries come out counter-clockwise and holes clockwise,
//! and the signed area tells them apart.
//!
//! # Example
//!
//! ```
//! use mesh_outline::{MeshImporter, MeshPatch, SurfacePoint};
//! use nalgebra::{Point3, Vector3};
//!
//! // A one-quad patch on the z = 0 plane
//! let points = vec![
//!     SurfacePoint::from_coords(0.0, 0.0, 0.0).with_normal(Vector3::z()),
//!     SurfacePoint::from_coords(1.0, 0.0, 0.0).with_normal(Vector3::z()),
//!     SurfacePoint::from_coords(1.0, 1.0, 0.0).with_normal(Vector3::z()),
//!     SurfacePoint::from_coords(0.0, 1.0, 0.0).with_normal(Vector3::z()),
//! ];
//! let faces = vec![vec![0, 1, 2], vec![0, 2, 3]];
//! let patch = MeshPatch::new(points, faces);
//!
//! let result = MeshImporter::new().import(&patch).unwrap();
//! assert_eq!(result.boundary_count(), 1);
//! assert!(result.boundaries[0].is_outer());
//!
//! // Boundary points map back to world space through the frame
//! let first = result.boundaries[0].points[0];
//! let world = result.frame.to_world_point(Point3::new(first.x, first.y, 0.0));
//! assert!(result.plane.distance(world) < 1e-9);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod boundary;
mod error;
mod frame;
mod half_edge;
mod importer;
mod plane;
mod point;
mod polygon;
mod project;
mod ransac;

pub use boundary::{BoundaryLoop, extract_boundary_loops};
pub use error::{OutlineError, OutlineResult};
pub use frame::{DEFAULT_AXIS_ALIGNMENT_THRESHOLD, PlaneFrame};
pub use half_edge::{HalfEdge, HalfEdgeMesh};
pub use importer::{ImportConfig, ImportResult, MeshImporter, MeshPatch};
pub use plane::Plane;
pub use point::SurfacePoint;
pub use polygon::{PolygonBoundary, PolygonPoint};
pub use project::project_boundary;
pub use ransac::{FitConfig, PlaneFit, fit_plane};
