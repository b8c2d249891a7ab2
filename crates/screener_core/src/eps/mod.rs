//! EPS estimate trends.
//!
//! Each ticker row carries estimates for four fiscal periods observed at five
//! lookback windows. This module computes the trend slope of each series,
//! buckets it into heatmap colours, and assembles the heatmap and the
//! per-ticker timeline views.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               EPS Trends                      │
//! ├──────────────────────────────────────────────┤
//! │  EpsPeriod / EpsLag - Field naming            │
//! │  EpsRow             - Backend ticker row      │
//! │  compute_slope      - First-to-last % change  │
//! │  color_bucket       - Batch-scaled intensity  │
//! │  Heatmap            - Periods x tickers       │
//! │  EpsTimeline        - Per-ticker detail       │
//! └──────────────────────────────────────────────┘
//! ```

mod bucket;
mod heatmap;
mod period;
mod row;
mod slope;
mod timeline;

pub use bucket::{batch_max_abs, color_bucket, ColorBucket, Intensity, DEFAULT_SCALE_FLOOR};
pub use heatmap::{
    build_heatmap, build_heatmap_with, unwatched_tickers, EpsPeriodSlope, Heatmap,
    HeatmapOptions, DEFAULT_WATCH_LIMIT,
};
pub use period::{EpsLag, EpsPeriod};
pub use row::{tickers, EpsRow, Samples};
pub use slope::{compute_slope, TrendArrow, DEFAULT_FLAT_THRESHOLD};
pub use timeline::{build_timelines, EpsTimeline, TimelineEntry, INSUFFICIENT_DATA};
