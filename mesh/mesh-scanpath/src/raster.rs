//! Serpentine raster path generation.
//!
//! Covers the bounding box of a projected boundary with parallel
//! stripes, interpolates evenly spaced points along each stripe, and
//! stitches the stripes into a single serpentine path with
//! interpolated bridges between them.

// Precision loss and truncation: stripe and point counts are small
// positive values derived from workspace-sized lengths
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]

use mesh_outline::{PolygonBoundary, PolygonPoint};
use tracing::{debug, info, warn};

use crate::error::ScanPathResult;
use crate::params::ScanPathConfig;

/// A stripe rectangle: center, extents, and rotation from upright.
#[derive(Debug, Clone, Copy)]
struct StripeRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    angle: f64,
}

/// Generate a serpentine raster path covering a boundary.
///
/// The boundary's bounding box is grown by the configured factor,
/// sliced into stripes with an effective width of
/// `scan_width - overlap`, and traversed in alternating directions.
/// Consecutive stripes are joined by interpolated bridge points, so
/// the whole path keeps roughly the configured point spacing.
///
/// An empty boundary yields an empty path with a warning; that is not
/// an error.
///
/// # Errors
///
/// Returns a [`crate::ScanPathError`] if the configuration is
/// inconsistent.
///
/// # Example
///
/// ```
/// use mesh_outline::{PolygonBoundary, PolygonPoint};
/// use mesh_scanpath::{ScanPathConfig, generate_raster_path};
///
/// let square = PolygonBoundary::new(vec![
///     PolygonPoint::new(0.0, 0.0),
///     PolygonPoint::new(1.0, 0.0),
///     PolygonPoint::new(1.0, 1.0),
///     PolygonPoint::new(0.0, 1.0),
/// ]);
///
/// let config = ScanPathConfig::new().with_scan_width(0.2);
/// let path = generate_raster_path(&square, &config).unwrap();
/// assert!(!path.is_empty());
/// ```
pub fn generate_raster_path(
    boundary: &PolygonBoundary,
    config: &ScanPathConfig,
) -> ScanPathResult<Vec<PolygonPoint>> {
    config.validate()?;

    if boundary.is_empty() {
        warn!("Cannot generate a raster path for an empty boundary");
        return Ok(Vec::new());
    }

    let bbox = bounding_stripe(boundary, config.growth_factor);
    let stripes = slice_bounding_box(&bbox, config.scan_width, config.overlap);
    debug!(
        "Sliced a {:.3} x {:.3} region into {} stripes",
        bbox.width,
        bbox.height,
        stripes.len()
    );

    let stripe_points: Vec<Vec<PolygonPoint>> = stripes
        .iter()
        .map(|stripe| interpolate_along_axis(stripe, config.step))
        .collect();

    let path = stitch_and_flatten(&stripe_points, config.step);
    info!("Generated raster path with {} points", path.len());

    Ok(path)
}

/// Axis-aligned bounding box of the boundary, grown by the factor.
fn bounding_stripe(boundary: &PolygonBoundary, growth_factor: f64) -> StripeRect {
    let first = boundary.points[0];
    let mut min_x = first.x;
    let mut max_x = first.x;
    let mut min_y = first.y;
    let mut max_y = first.y;

    for point in &boundary.points[1..] {
        min_x = min_x.min(point.x);
        max_x = max_x.max(point.x);
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }

    StripeRect {
        x: f64::midpoint(min_x, max_x),
        y: f64::midpoint(min_y, max_y),
        width: (max_x - min_x) * growth_factor,
        height: (max_y - min_y) * growth_factor,
        angle: 0.0,
    }
}

/// Slice the box across its height into stripes of effective width
/// `scan_width - overlap`.
fn slice_bounding_box(bbox: &StripeRect, scan_width: f64, overlap: f64) -> Vec<StripeRect> {
    let effective = scan_width - overlap;
    let count = (bbox.height / effective) as usize + 1;

    // Unit direction from one stripe center to the next
    let dx = -bbox.angle.sin();
    let dy = bbox.angle.cos();

    let mut x = bbox.x - dx * (bbox.height - effective) / 2.0;
    let mut y = bbox.y - dy * (bbox.height - effective) / 2.0;

    let mut stripes = Vec::with_capacity(count);
    for _ in 0..count {
        stripes.push(StripeRect {
            x,
            y,
            width: bbox.width,
            height: effective,
            angle: bbox.angle,
        });
        x += dx * effective;
        y += dy * effective;
    }
    stripes
}

/// Evenly spaced points along the stripe's long axis.
fn interpolate_along_axis(stripe: &StripeRect, step: f64) -> Vec<PolygonPoint> {
    let count = (stripe.width / step) as usize;
    let dx = stripe.angle.cos();
    let dy = stripe.angle.sin();

    let mut x = stripe.x - dx * stripe.width / 2.0;
    let mut y = stripe.y - dy * stripe.width / 2.0;

    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        points.push(PolygonPoint::new(x, y));
        x += dx * step;
        y += dy * step;
    }
    points
}

/// Interpolated bridge from `a` toward `b`, excluding both endpoints.
fn make_stitch(a: PolygonPoint, b: PolygonPoint, step: f64) -> Vec<PolygonPoint> {
    let span = a.distance_to(b);
    if span < f64::EPSILON {
        return Vec::new();
    }

    let count = (span / step) as usize;
    let ux = (b.x - a.x) / span;
    let uy = (b.y - a.y) / span;

    (1..count)
        .map(|i| {
            let d = i as f64 * step;
            PolygonPoint::new(a.x + ux * d, a.y + uy * d)
        })
        .collect()
}

/// Concatenate stripes serpentine fashion with bridges between them.
fn stitch_and_flatten(stripes: &[Vec<PolygonPoint>], step: f64) -> Vec<PolygonPoint> {
    let mut path: Vec<PolygonPoint> = Vec::new();
    let mut forward = true;

    for (k, stripe) in stripes.iter().enumerate() {
        if forward {
            path.extend(stripe.iter().copied());
        } else {
            path.extend(stripe.iter().rev().copied());
        }
        forward = !forward;

        // Bridge toward the end of the next stripe we will start from
        if let Some(next) = stripes.get(k + 1) {
            let landing = if forward { next.first() } else { next.last() };
            if let (Some(&from), Some(&to)) = (path.last(), landing) {
                path.extend(make_stitch(from, to, step));
            }
        }
    }

    path
}
