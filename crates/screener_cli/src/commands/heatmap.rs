//! Heatmap command implementation
//!
//! Builds the EPS trend heatmap and the quick-watch list.

use screener_core::eps::{build_heatmap_with, tickers, unwatched_tickers, EpsPeriod, EpsRow};
use screener_core::export::write_heatmap_csv;
use serde::Serialize;
use tracing::info;

use super::{print_json, print_text};
use crate::config::{OutputFormat, ScreenerConfig};
use crate::input::load_rows;
use crate::output::heatmap_table;
use crate::{CliError, Result};

/// Message shown for an empty batch.
pub const EMPTY_MESSAGE: &str = "No EPS trends data available";

/// Resolve period flags; all periods when none are given.
pub fn parse_periods(keys: &[String]) -> Result<Vec<EpsPeriod>> {
    if keys.is_empty() {
        return Ok(EpsPeriod::ALL.to_vec());
    }

    let mut periods = Vec::with_capacity(keys.len());
    for key in keys {
        let period: EpsPeriod = key.parse()?;
        if periods.contains(&period) {
            return Err(CliError::InvalidArgument(format!(
                "Period listed twice: {}",
                period
            )));
        }
        periods.push(period);
    }
    Ok(periods)
}

#[derive(Serialize)]
struct HeatmapOutput<'a> {
    heatmap: &'a screener_core::Heatmap,
    quick_watch: Vec<String>,
}

/// Run the heatmap command
pub fn run(
    input: &str,
    period_keys: &[String],
    format: OutputFormat,
    config: &ScreenerConfig,
) -> Result<()> {
    let periods = parse_periods(period_keys)?;
    let rows: Vec<EpsRow> = load_rows(input)?;

    if rows.is_empty() {
        return print_text(&format!("{}\n", EMPTY_MESSAGE));
    }

    let names = tickers(&rows);
    let options = config.heatmap_options()?;
    let heatmap = build_heatmap_with(&rows, &names, &periods, &options);
    let quick_watch = unwatched_tickers(&names, &config.watched, config.watch_limit);
    info!(
        "Heatmap: {} periods x {} tickers, scale ±{:.1}%",
        periods.len(),
        names.len(),
        heatmap.max_abs
    );

    match format {
        OutputFormat::Table => {
            let mut text = heatmap_table(&heatmap);
            if !quick_watch.is_empty() {
                text.push_str(&format!("Quick watch: {}\n", quick_watch.join(", ")));
            }
            print_text(&text)
        }
        OutputFormat::Csv => {
            write_heatmap_csv(std::io::stdout().lock(), &heatmap)?;
            Ok(())
        }
        OutputFormat::Json => print_json(&HeatmapOutput {
            heatmap: &heatmap,
            quick_watch,
        }),
    }
}
