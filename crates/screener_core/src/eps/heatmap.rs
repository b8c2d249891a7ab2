//! EPS trend heatmap: periods down, tickers across.

use super::bucket::{batch_max_abs, color_bucket, ColorBucket, DEFAULT_SCALE_FLOOR};
use super::period::EpsPeriod;
use super::row::{EpsRow, Samples};
use super::slope::{compute_slope, TrendArrow};
use crate::format::{format_currency, format_slope};
use crate::types::{Result, ScreenerError};
use serde::Serialize;

/// Default length of the quick-watch list.
pub const DEFAULT_WATCH_LIMIT: usize = 8;

/// Heatmap scaling options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatmapOptions {
    /// Floor for the batch scale, in percent.
    pub scale_floor: f64,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            scale_floor: DEFAULT_SCALE_FLOOR,
        }
    }
}

impl HeatmapOptions {
    /// Create options with a custom scale floor.
    pub fn new(scale_floor: f64) -> Result<Self> {
        let options = Self { scale_floor };
        options.validate()?;
        Ok(options)
    }

    /// Check the floor is finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !self.scale_floor.is_finite() || self.scale_floor <= 0.0 {
            return Err(ScreenerError::InvalidOptions(format!(
                "scale_floor must be a positive number, got {}",
                self.scale_floor
            )));
        }
        Ok(())
    }
}

/// One heatmap cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EpsPeriodSlope {
    /// Ticker of the column.
    pub ticker: String,
    /// Period of the row.
    pub period: EpsPeriod,
    /// Observations, oldest first.
    pub samples: Samples,
    /// Trend in percent.
    pub slope_pct: Option<f64>,
    /// Colour against the batch scale.
    pub color_bucket: ColorBucket,
}

impl EpsPeriodSlope {
    /// Arrow shown under the value.
    pub fn arrow(&self) -> TrendArrow {
        TrendArrow::from_sign(self.slope_pct)
    }

    /// Cell text, e.g. `+12.5%`.
    pub fn display_value(&self) -> String {
        format_slope(self.slope_pct)
    }

    /// Hover text for the cell.
    pub fn tooltip(&self) -> String {
        let Some(slope) = self.slope_pct else {
            return format!("{} {}: No data", self.ticker, self.period);
        };

        let start = self.samples[0];
        let current = self.samples[4];
        let change = match (start, current) {
            (Some(s), Some(c)) => Some(c - s),
            _ => None,
        };
        let sign = if change.is_some_and(|c| c >= 0.0) { "+" } else { "" };

        format!(
            "{} - {}\n90d ago: {}\nCurrent: {}\nChange: {}{} ({})",
            self.ticker,
            self.period,
            format_currency(start),
            format_currency(current),
            sign,
            format_currency(change),
            format_slope(Some(slope)),
        )
    }
}

/// Slopes for every period and ticker of a batch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Heatmap {
    /// Row headers.
    pub periods: Vec<EpsPeriod>,
    /// Column headers.
    pub tickers: Vec<String>,
    /// `cells[p][t]` is period `p`, ticker `t`.
    pub cells: Vec<Vec<EpsPeriodSlope>>,
    /// Scale shared by every cell.
    pub max_abs: f64,
}

impl Heatmap {
    /// Cell at (`period`, `ticker`).
    pub fn cell(&self, period: EpsPeriod, ticker: &str) -> Option<&EpsPeriodSlope> {
        let p = self.periods.iter().position(|x| *x == period)?;
        let t = self.tickers.iter().position(|x| x == ticker)?;
        self.cells.get(p).and_then(|row| row.get(t))
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }

    /// Iterate all cells row by row.
    pub fn iter(&self) -> impl Iterator<Item = &EpsPeriodSlope> {
        self.cells.iter().flatten()
    }
}

/// Build the heatmap with default options.
///
/// Each cell reads the first row whose ticker matches; a ticker with no row
/// yields an all-absent cell.
pub fn build_heatmap(rows: &[EpsRow], tickers: &[String], periods: &[EpsPeriod]) -> Heatmap {
    build_heatmap_with(rows, tickers, periods, &HeatmapOptions::default())
}

/// Build the heatmap with explicit options.
pub fn build_heatmap_with(
    rows: &[EpsRow],
    tickers: &[String],
    periods: &[EpsPeriod],
    options: &HeatmapOptions,
) -> Heatmap {
    let slopes: Vec<Vec<(Samples, Option<f64>)>> = periods
        .iter()
        .map(|period| {
            tickers
                .iter()
                .map(|ticker| {
                    let samples = rows
                        .iter()
                        .find(|r| r.ticker() == Some(ticker.as_str()))
                        .map(|r| r.samples(*period))
                        .unwrap_or([None; 5]);
                    (samples, compute_slope(&samples))
                })
                .collect()
        })
        .collect();

    let max_abs = batch_max_abs(
        slopes.iter().flatten().map(|(_, slope)| *slope),
        options.scale_floor,
    );
    tracing::debug!(
        periods = periods.len(),
        tickers = tickers.len(),
        max_abs,
        "Heatmap batch scale fixed"
    );

    let cells = periods
        .iter()
        .zip(slopes)
        .map(|(period, row)| {
            tickers
                .iter()
                .zip(row)
                .map(|(ticker, (samples, slope_pct))| EpsPeriodSlope {
                    ticker: ticker.clone(),
                    period: *period,
                    samples,
                    slope_pct,
                    color_bucket: color_bucket(slope_pct, max_abs),
                })
                .collect()
        })
        .collect();

    Heatmap {
        periods: periods.to_vec(),
        tickers: tickers.to_vec(),
        cells,
        max_abs,
    }
}

/// Tickers not yet on the watchlist, capped at `limit`.
pub fn unwatched_tickers(tickers: &[String], watched: &[String], limit: usize) -> Vec<String> {
    tickers
        .iter()
        .filter(|t| !watched.iter().any(|w| w == *t))
        .take(limit)
        .cloned()
        .collect()
}
