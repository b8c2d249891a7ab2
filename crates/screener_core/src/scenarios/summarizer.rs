//! Turning a simulation batch into the scenario table.

use super::row::ScenarioRow;
use super::summary::{ScenarioLabel, ScenarioSummary};

/// Build the ordered scenario table for one simulation batch.
///
/// The first row supplies the `Current` baseline. Each row whose label
/// carries a parseable percentage contributes one `+N%` and one `-N%` entry;
/// other rows are skipped. Values the backend did not price stay `None`
/// on their entry rather than rejecting the batch. The result starts with `Current`, followed by all
/// up-moves and then all down-moves, each ascending by magnitude. Entries of
/// equal label keep their input order.
///
/// An empty batch yields an empty table.
///
/// # Examples
/// ```
/// use screener_core::scenarios::{summarize, ScenarioRow};
///
/// assert!(summarize(&[]).is_empty());
/// ```
pub fn summarize(rows: &[ScenarioRow]) -> Vec<ScenarioSummary> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let mut summaries = Vec::with_capacity(1 + 2 * rows.len());
    summaries.push(ScenarioSummary::current(
        first.current_underlying,
        first.current_premium,
    ));

    for (index, row) in rows.iter().enumerate() {
        let Some(pct) = row.move_pct() else {
            tracing::debug!(
                index,
                label = ?row.scenario_change_label,
                "Skipping scenario row without a parseable move"
            );
            continue;
        };

        summaries.push(ScenarioSummary::new(
            ScenarioLabel::Up(pct),
            row.simulated_underlying_up,
            row.simulated_premium_up,
            row.simulated_premium_up_change_pct,
        ));
        summaries.push(ScenarioSummary::new(
            ScenarioLabel::Down(pct),
            row.simulated_underlying_down,
            row.simulated_premium_down,
            row.simulated_premium_down_change_pct,
        ));
    }

    summaries.sort_by_key(|s| s.label);
    summaries
}

/// Number of simulated moves in the batch.
pub fn scenario_count(rows: &[ScenarioRow]) -> usize {
    rows.len()
}

/// Entry count shown in the section header: two per move plus the baseline.
pub fn expected_entries(rows: &[ScenarioRow]) -> usize {
    2 * rows.len() + 1
}
