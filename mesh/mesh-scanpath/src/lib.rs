//! Serpentine raster scan paths over projected surface outlines.
//!
//! Consumes the plane-local boundary polygons produced by
//! `mesh-outline` and plans a coverage path for a stripe sensor:
//! - Grow the boundary's bounding box so the path overruns the edges
//! - Slice the box into stripes of effective width
//!   `scan_width - overlap`
//! - Interpolate evenly spaced points along each stripe and stitch the
//!   stripes into one serpentine pass
//!
//! Path points are 2D in the boundary's plane frame; callers map them
//! back to world space through the frame the import produced.
//!
//! # Example
//!
//! ```
//! use mesh_outline::{PolygonBoundary, PolygonPoint};
//! use mesh_scanpath::{ScanPathConfig, generate_raster_path};
//!
//! let boundary = PolygonBoundary::new(vec![
//!     PolygonPoint::new(0.0, 0.0),
//!     PolygonPoint::new(2.0, 0.0),
//!     PolygonPoint::new(2.0, 1.0),
//!     PolygonPoint::new(0.0, 1.0),
//! ]);
//!
//! let config = ScanPathConfig::new().with_scan_width(0.25).with_overlap(0.05);
//! let path = generate_raster_path(&boundary, &config).unwrap();
//!
//! // The path sweeps the whole box, so it spans the boundary's width
//! let min_x = path.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
//! let max_x = path.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
//! assert!(max_x - min_x >= 2.0);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod params;
mod raster;

pub use error::{ScanPathError, ScanPathResult};
pub use params::ScanPathConfig;
pub use raster::generate_raster_path;
