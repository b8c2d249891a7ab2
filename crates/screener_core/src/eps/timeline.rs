//! Per-ticker estimate timeline.

use super::period::{EpsLag, EpsPeriod};
use super::row::{EpsRow, Samples};
use super::slope::{compute_slope, TrendArrow, DEFAULT_FLAT_THRESHOLD};
use crate::format::format_currency;
use serde::Serialize;

/// Text shown when the 90-day or current estimate is missing.
pub const INSUFFICIENT_DATA: &str = "Insufficient data";

/// One period line of a ticker's timeline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineEntry {
    /// Estimate period.
    pub period: EpsPeriod,
    /// Observations, oldest first.
    pub samples: Samples,
    /// Trend in percent.
    pub slope_pct: Option<f64>,
    /// Arrow using the flat threshold.
    pub trend: TrendArrow,
}

impl TimelineEntry {
    /// `"$a → $b"` from the 90-day to the current estimate.
    ///
    /// Both ends must be present and non-zero.
    pub fn range_summary(&self) -> String {
        let start = self.samples[0].filter(|v| *v != 0.0);
        let current = self.samples[4].filter(|v| *v != 0.0);
        match (start, current) {
            (Some(_), Some(_)) => format!(
                "{} → {}",
                format_currency(start),
                format_currency(current)
            ),
            _ => INSUFFICIENT_DATA.to_string(),
        }
    }

    /// Sample at one lag.
    pub fn sample(&self, lag: EpsLag) -> Option<f64> {
        let index = EpsLag::ALL.iter().position(|l| *l == lag)?;
        self.samples[index]
    }
}

/// All periods for one ticker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EpsTimeline {
    /// Ticker symbol; empty when the row had none.
    pub ticker: String,
    /// One entry per period, in display order.
    pub entries: Vec<TimelineEntry>,
}

impl EpsTimeline {
    /// Timeline of `row` with the default flat threshold.
    pub fn from_row(row: &EpsRow) -> Self {
        Self::with_threshold(row, DEFAULT_FLAT_THRESHOLD)
    }

    /// Timeline of `row`, treating `|slope| < flat_threshold` as flat.
    pub fn with_threshold(row: &EpsRow, flat_threshold: f64) -> Self {
        let entries = EpsPeriod::ALL
            .into_iter()
            .map(|period| {
                let samples = row.samples(period);
                let slope_pct = compute_slope(&samples);
                TimelineEntry {
                    period,
                    samples,
                    slope_pct,
                    trend: TrendArrow::with_threshold(slope_pct, flat_threshold),
                }
            })
            .collect();

        Self {
            ticker: row.ticker().unwrap_or_default().to_string(),
            entries,
        }
    }
}

/// Timelines for every row of a batch.
pub fn build_timelines(rows: &[EpsRow], flat_threshold: f64) -> Vec<EpsTimeline> {
    rows.iter()
        .map(|row| EpsTimeline::with_threshold(row, flat_threshold))
        .collect()
}
