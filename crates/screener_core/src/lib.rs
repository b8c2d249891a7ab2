//! # Screener Core
//!
//! Display transforms for the options screener and watchlist.
//!
//! The backend simulates option premiums and collects EPS estimates; this
//! crate turns its rows into what the screener shows:
//! - Ordered scenario tables (`Current`, `+N%`, `-N%`)
//! - EPS trend slopes, colour buckets and the period x ticker heatmap
//! - Per-ticker EPS timelines and watchlist quick actions
//! - A bounded option-chain cache and CSV export
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             screener_core               │
//! ├─────────────────────────────────────────┤
//! │  scenarios/ - Scenario table            │
//! │  eps/       - Slopes, heatmap, timeline │
//! │  format     - Currency & percent text   │
//! │  cache      - Option chain LRU          │
//! │  export     - CSV writers               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! All transforms are pure and synchronous: inputs are borrowed, never
//! mutated, and every call recomputes from scratch.
//!
//! ## Example
//!
//! ```
//! use screener_core::scenarios::{summarize, ScenarioRow};
//!
//! let row = ScenarioRow {
//!     scenario_change_label: Some("±5%".to_string()),
//!     current_underlying: Some(100.0),
//!     current_premium: Some(1.0),
//!     simulated_underlying_up: Some(105.0),
//!     simulated_underlying_down: Some(95.0),
//!     simulated_premium_up: Some(1.5),
//!     simulated_premium_down: Some(0.3),
//!     simulated_premium_up_change_pct: Some(50.0),
//!     simulated_premium_down_change_pct: Some(-70.0),
//! };
//!
//! let table = summarize(&[row]);
//! let labels: Vec<String> = table.iter().map(|s| s.label.to_string()).collect();
//! assert_eq!(labels, ["Current", "+5%", "-5%"]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cache;
pub mod eps;
pub mod export;
pub mod format;
pub mod scenarios;
pub mod types;

// Re-export commonly used types
pub use cache::{OptionChain, OptionChainCache};
pub use eps::{
    build_heatmap, color_bucket, compute_slope, ColorBucket, EpsPeriod, EpsPeriodSlope, EpsRow,
    Heatmap,
};
pub use scenarios::{summarize, ScenarioRow, ScenarioSummary};
pub use types::{Result, ScreenerError};
