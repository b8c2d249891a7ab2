//! CSV export of the screener views.

use crate::eps::{EpsLag, EpsTimeline, Heatmap};
use crate::format::{format_currency, format_signed_percent, format_slope};
use crate::scenarios::ScenarioSummary;
use crate::types::Result;
use std::io::Write;

/// Write the scenario table.
///
/// Columns: `Scenario,Underlying,Premium,% Change`.
pub fn write_scenarios_csv<W: Write>(writer: W, summaries: &[ScenarioSummary]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Scenario", "Underlying", "Premium", "% Change"])?;

    for summary in summaries {
        csv.write_record([
            summary.label.to_string(),
            format_currency(summary.underlying),
            format_currency(summary.premium),
            format_signed_percent(summary.change_pct),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the heatmap: one row per period, one column per ticker.
pub fn write_heatmap_csv<W: Write>(writer: W, heatmap: &Heatmap) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec!["Period".to_string()];
    header.extend(heatmap.tickers.iter().cloned());
    csv.write_record(&header)?;

    for (period, row) in heatmap.periods.iter().zip(&heatmap.cells) {
        let mut record = vec![period.to_string()];
        record.extend(row.iter().map(|cell| format_slope(cell.slope_pct)));
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}

/// Write every timeline, one line per ticker and period.
pub fn write_timelines_csv<W: Write>(writer: W, timelines: &[EpsTimeline]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec!["Ticker", "Period"];
    header.extend(EpsLag::ALL.iter().map(EpsLag::header));
    header.push("Trend");
    csv.write_record(&header)?;

    for timeline in timelines {
        for entry in &timeline.entries {
            let mut record = vec![timeline.ticker.clone(), entry.period.label().to_string()];
            record.extend(entry.samples.iter().map(|s| format_currency(*s)));
            record.push(format_slope(entry.slope_pct));
            csv.write_record(&record)?;
        }
    }

    csv.flush()?;
    Ok(())
}
