//! Error types for screener transforms.
//!
//! The display transforms themselves are total; these errors cover the
//! surrounding surface: parsing period and lag keys, validating options,
//! sizing the option-chain cache and writing CSV exports.

use thiserror::Error;

/// Errors raised by `screener_core`.
///
/// # Examples
/// ```
/// use screener_core::types::ScreenerError;
///
/// let err = ScreenerError::UnknownPeriod("Next Decade".to_string());
/// assert_eq!(format!("{}", err), "Unknown EPS period: Next Decade");
/// ```
#[derive(Debug, Error)]
pub enum ScreenerError {
    /// Period key is not one of the four estimate periods.
    #[error("Unknown EPS period: {0}")]
    UnknownPeriod(String),

    /// Lag key is not one of the five lookback windows.
    #[error("Unknown EPS lag: {0}")]
    UnknownLag(String),

    /// Heatmap options failed validation.
    #[error("Invalid heatmap options: {0}")]
    InvalidOptions(String),

    /// Cache constructed with a capacity of zero.
    #[error("Cache capacity must be greater than zero")]
    ZeroCapacity,

    /// CSV writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO failure while flushing an export.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for `screener_core` operations.
pub type Result<T> = std::result::Result<T, ScreenerError>;
