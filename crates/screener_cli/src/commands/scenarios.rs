//! Scenarios command implementation
//!
//! Turns a simulation batch into the ordered scenario table.

use screener_core::export::write_scenarios_csv;
use screener_core::scenarios::{expected_entries, scenario_count, summarize, ScenarioRow};
use tracing::info;

use super::{print_json, print_text};
use crate::config::OutputFormat;
use crate::input::load_rows;
use crate::output::scenarios_table;
use crate::Result;

/// Message shown for an empty batch.
pub const EMPTY_MESSAGE: &str = "No simulation data available";

/// Run the scenarios command
pub fn run(input: &str, format: OutputFormat) -> Result<()> {
    let rows: Vec<ScenarioRow> = load_rows(input)?;
    info!(
        "Simulation Scenarios ({} expected entries)",
        expected_entries(&rows)
    );

    if rows.is_empty() {
        return print_text(&format!("{}\n", EMPTY_MESSAGE));
    }

    let summaries = summarize(&rows);
    info!(
        "Built {} scenario entries from {} rows",
        summaries.len(),
        rows.len()
    );

    match format {
        OutputFormat::Table => print_text(&scenarios_table(&summaries, scenario_count(&rows))),
        OutputFormat::Csv => {
            write_scenarios_csv(std::io::stdout().lock(), &summaries)?;
            Ok(())
        }
        OutputFormat::Json => print_json(&summaries),
    }
}
