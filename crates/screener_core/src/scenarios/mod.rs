//! Option scenario table.
//!
//! The backend simulates an option's premium under a set of symmetric
//! underlying moves. This module turns those rows into the ordered table the
//! screener shows next to each contract.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Scenario Table                   │
//! ├──────────────────────────────────────────────┤
//! │  ScenarioRow      - Backend simulation row   │
//! │  ScenarioLabel    - Current / +N% / -N%      │
//! │  ScenarioSummary  - Display entry            │
//! │  summarize        - Ordering & expansion     │
//! └──────────────────────────────────────────────┘
//! ```

mod row;
mod summarizer;
mod summary;

pub use row::{parse_move_pct, ScenarioRow};
pub use summarizer::{expected_entries, scenario_count, summarize};
pub use summary::{ScenarioLabel, ScenarioSummary, Tone};
