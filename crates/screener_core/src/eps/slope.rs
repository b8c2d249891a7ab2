//! Trend slope of an estimate series.

use serde::Serialize;

/// Default band around zero treated as flat by the timeline view.
pub const DEFAULT_FLAT_THRESHOLD: f64 = 0.1;

/// Percentage change from the first to the last present sample.
///
/// Absent and NaN samples are skipped; gaps in the middle of the series do
/// not affect the result. Returns `None` when fewer than two samples are
/// present or when the first present sample is zero.
///
/// # Examples
/// ```
/// use screener_core::eps::compute_slope;
///
/// assert_eq!(compute_slope(&[Some(10.0), Some(15.0)]), Some(50.0));
/// assert_eq!(compute_slope(&[Some(10.0), None, None, None, Some(20.0)]), Some(100.0));
/// assert_eq!(compute_slope(&[Some(0.0), Some(10.0)]), None);
/// ```
pub fn compute_slope(samples: &[Option<f64>]) -> Option<f64> {
    let mut present = samples.iter().flatten().copied().filter(|v| !v.is_nan());
    let first = present.next()?;
    let last = present.last()?;

    if first == 0.0 {
        return None;
    }

    Some((last - first) / first.abs() * 100.0)
}

/// Direction glyph shown next to a slope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendArrow {
    /// Rising estimates.
    Up,
    /// Falling estimates.
    Down,
    /// No meaningful change.
    Flat,
    /// No slope available.
    Unknown,
}

impl TrendArrow {
    /// Heatmap cell arrow: strict sign, `Unknown` when absent.
    pub fn from_sign(slope_pct: Option<f64>) -> Self {
        match slope_pct.filter(|v| !v.is_nan()) {
            None => TrendArrow::Unknown,
            Some(v) if v > 0.0 => TrendArrow::Up,
            Some(v) if v < 0.0 => TrendArrow::Down,
            Some(_) => TrendArrow::Flat,
        }
    }

    /// Timeline arrow: absent or within `flat_threshold` of zero is flat.
    pub fn with_threshold(slope_pct: Option<f64>, flat_threshold: f64) -> Self {
        match slope_pct.filter(|v| !v.is_nan()) {
            None => TrendArrow::Flat,
            Some(v) if v.abs() < flat_threshold => TrendArrow::Flat,
            Some(v) if v > 0.0 => TrendArrow::Up,
            Some(_) => TrendArrow::Down,
        }
    }

    /// Glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            TrendArrow::Up => "↗",
            TrendArrow::Down => "↘",
            TrendArrow::Flat => "→",
            TrendArrow::Unknown => "?",
        }
    }

    /// Text colour class.
    pub fn color_class(&self) -> &'static str {
        match self {
            TrendArrow::Up => "text-green-400",
            TrendArrow::Down => "text-red-400",
            TrendArrow::Flat | TrendArrow::Unknown => "text-gray-400",
        }
    }
}
