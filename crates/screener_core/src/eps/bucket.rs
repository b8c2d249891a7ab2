//! Heatmap colour buckets.
//!
//! A slope is scaled against the largest absolute slope of the displayed
//! batch, so intensities are comparable across the whole grid. Intervals are
//! half-open: a ratio of exactly 0.2 already belongs to the second step, and
//! any ratio of 0.8 or more is the strongest step.

use serde::Serialize;

/// Smallest batch scale, in percent.
pub const DEFAULT_SCALE_FLOOR: f64 = 5.0;

/// Lower bounds of the steps above [`Intensity::Faint`].
const STEP_BOUNDS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// Strength of a heatmap cell, weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Ratio below 0.2.
    Faint,
    /// Ratio in [0.2, 0.4).
    Light,
    /// Ratio in [0.4, 0.6).
    Moderate,
    /// Ratio in [0.6, 0.8).
    Strong,
    /// Ratio of 0.8 and above.
    Saturated,
}

impl Intensity {
    /// All steps, weakest first.
    pub const ALL: [Intensity; 5] = [
        Intensity::Faint,
        Intensity::Light,
        Intensity::Moderate,
        Intensity::Strong,
        Intensity::Saturated,
    ];

    /// Step for a ratio of `|slope| / scale`.
    pub fn from_ratio(ratio: f64) -> Self {
        let step = STEP_BOUNDS.iter().take_while(|bound| ratio >= **bound).count();
        Self::ALL[step]
    }

    fn shade(&self) -> &'static str {
        match self {
            Intensity::Faint => "900/40",
            Intensity::Light => "800/60",
            Intensity::Moderate => "700/80",
            Intensity::Strong => "600",
            Intensity::Saturated => "500",
        }
    }
}

/// Colour of one heatmap cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "intensity", rename_all = "lowercase")]
pub enum ColorBucket {
    /// No slope available.
    Neutral,
    /// Rising estimates.
    Gain(Intensity),
    /// Flat or falling estimates.
    Loss(Intensity),
}

impl ColorBucket {
    /// Background class for the cell.
    pub fn color_class(&self) -> String {
        match self {
            ColorBucket::Neutral => "bg-gray-600".to_string(),
            ColorBucket::Gain(i) => format!("bg-green-{}", i.shade()),
            ColorBucket::Loss(i) => format!("bg-red-{}", i.shade()),
        }
    }

    /// Intensity, if the cell has a slope.
    pub fn intensity(&self) -> Option<Intensity> {
        match self {
            ColorBucket::Neutral => None,
            ColorBucket::Gain(i) | ColorBucket::Loss(i) => Some(*i),
        }
    }
}

/// Scale for a batch: the largest absolute slope, floored at `floor`.
///
/// Absent and NaN slopes are ignored.
pub fn batch_max_abs<I>(slopes: I, floor: f64) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    slopes
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .map(f64::abs)
        .fold(floor, f64::max)
}

/// Bucket for one slope against the batch scale.
///
/// Strictly positive slopes are gains; zero and negative slopes use the loss
/// scale. An absent slope is always [`ColorBucket::Neutral`].
///
/// # Examples
/// ```
/// use screener_core::eps::{color_bucket, ColorBucket, Intensity};
///
/// assert_eq!(color_bucket(None, 5.0), ColorBucket::Neutral);
/// assert_eq!(color_bucket(Some(0.5), 5.0), ColorBucket::Gain(Intensity::Faint));
/// assert_eq!(color_bucket(Some(-4.0), 5.0), ColorBucket::Loss(Intensity::Saturated));
/// ```
pub fn color_bucket(slope_pct: Option<f64>, batch_max_abs: f64) -> ColorBucket {
    let Some(value) = slope_pct.filter(|v| !v.is_nan()) else {
        return ColorBucket::Neutral;
    };

    let intensity = Intensity::from_ratio(value.abs() / batch_max_abs);
    if value > 0.0 {
        ColorBucket::Gain(intensity)
    } else {
        ColorBucket::Loss(intensity)
    }
}
