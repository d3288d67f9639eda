//! Error types for scan path generation.

use thiserror::Error;

/// Result type for scan path operations.
pub type ScanPathResult<T> = Result<T, ScanPathError>;

/// Errors that can occur while generating a scan path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanPathError {
    /// The stripe width is zero or negative.
    #[error("scan width must be positive, got {width}")]
    InvalidScanWidth {
        /// Configured stripe width.
        width: f64,
    },

    /// The point spacing is zero or negative.
    #[error("step must be positive, got {step}")]
    InvalidStep {
        /// Configured point spacing.
        step: f64,
    },

    /// The stripe overlap does not leave a positive effective width.
    #[error("overlap {overlap} must be non-negative and smaller than scan width {scan_width}")]
    OverlapOutOfRange {
        /// Configured overlap between neighboring stripes.
        overlap: f64,
        /// Configured stripe width.
        scan_width: f64,
    },

    /// The bounding box growth factor is zero or negative.
    #[error("growth factor must be positive, got {factor}")]
    InvalidGrowthFactor {
        /// Configured growth factor.
        factor: f64,
    },
}
