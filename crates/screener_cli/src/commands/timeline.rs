//! Timeline command implementation
//!
//! Shows every ticker's estimates at each lookback window.

use screener_core::eps::{build_timelines, EpsRow};
use screener_core::export::write_timelines_csv;
use tracing::info;

use super::heatmap::EMPTY_MESSAGE;
use super::{print_json, print_text};
use crate::config::{OutputFormat, ScreenerConfig};
use crate::input::load_rows;
use crate::output::timelines_table;
use crate::Result;

/// Run the timeline command
pub fn run(input: &str, format: OutputFormat, config: &ScreenerConfig) -> Result<()> {
    let rows: Vec<EpsRow> = load_rows(input)?;

    if rows.is_empty() {
        return print_text(&format!("{}\n", EMPTY_MESSAGE));
    }

    let timelines = build_timelines(&rows, config.flat_threshold);
    info!("Built timelines for {} tickers", timelines.len());

    match format {
        OutputFormat::Table => print_text(&timelines_table(&timelines, &config.watched)),
        OutputFormat::Csv => {
            write_timelines_csv(std::io::stdout().lock(), &timelines)?;
            Ok(())
        }
        OutputFormat::Json => print_json(&timelines),
    }
}
