//! Scan path parameters.

use crate::error::{ScanPathError, ScanPathResult};

/// Parameters for raster scan path generation.
///
/// All lengths are in the plane-local units of the boundary being
/// covered.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanPathConfig {
    /// Width of the sensor stripe.
    pub scan_width: f64,
    /// Overlap between neighboring stripes.
    pub overlap: f64,
    /// Spacing between consecutive path points.
    pub step: f64,
    /// Factor by which the bounding box is grown, so the path overruns
    /// the boundary edges.
    pub growth_factor: f64,
}

impl Default for ScanPathConfig {
    fn default() -> Self {
        Self {
            scan_width: 0.05,
            overlap: 0.01,
            step: 0.01,
            growth_factor: 1.1,
        }
    }
}

impl ScanPathConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stripe width.
    #[must_use]
    pub const fn with_scan_width(mut self, scan_width: f64) -> Self {
        self.scan_width = scan_width;
        self
    }

    /// Set the stripe overlap.
    #[must_use]
    pub const fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap;
        self
    }

    /// Set the point spacing.
    #[must_use]
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the bounding box growth factor.
    #[must_use]
    pub const fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Check the parameters for consistency.
    ///
    /// # Errors
    ///
    /// - [`ScanPathError::InvalidScanWidth`] if the stripe width is not
    ///   positive
    /// - [`ScanPathError::InvalidStep`] if the point spacing is not
    ///   positive
    /// - [`ScanPathError::OverlapOutOfRange`] if the overlap is
    ///   negative or at least as large as the stripe width
    /// - [`ScanPathError::InvalidGrowthFactor`] if the growth factor is
    ///   not positive
    pub fn validate(&self) -> ScanPathResult<()> {
        if self.scan_width <= 0.0 {
            return Err(ScanPathError::InvalidScanWidth {
                width: self.scan_width,
            });
        }
        if self.step <= 0.0 {
            return Err(ScanPathError::InvalidStep { step: self.step });
        }
        if self.overlap < 0.0 || self.overlap >= self.scan_width {
            return Err(ScanPathError::OverlapOutOfRange {
                overlap: self.overlap,
                scan_width: self.scan_width,
            });
        }
        if self.growth_factor <= 0.0 {
            return Err(ScanPathError::InvalidGrowthFactor {
                factor: self.growth_factor,
            });
        }
        Ok(())
    }
}
