//! Text rendering of command results.

use screener_core::eps::{EpsLag, EpsTimeline, Heatmap};
use screener_core::format::{format_currency, format_signed_percent, format_slope};
use screener_core::ScenarioSummary;
use std::fmt::Write;

/// Render the scenario table.
pub fn scenarios_table(summaries: &[ScenarioSummary], moves: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>12} {:>12} {:>10}",
        "Scenario", "Underlying", "Premium", "% Change"
    );
    for s in summaries {
        let _ = writeln!(
            out,
            "{:<12} {:>12} {:>12} {:>10}",
            format!("{} {}", s.icon, s.label),
            format_currency(s.underlying),
            format_currency(s.premium),
            format_signed_percent(s.change_pct),
        );
    }
    let plural = if moves == 1 { "" } else { "s" };
    let _ = writeln!(out, "{} scenario{} calculated", moves, plural);
    out
}

/// Render the heatmap grid with trend arrows.
pub fn heatmap_table(heatmap: &Heatmap) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<16}", "Period");
    for ticker in &heatmap.tickers {
        let _ = write!(out, " {:>10}", ticker);
    }
    let _ = writeln!(out);

    for (period, row) in heatmap.periods.iter().zip(&heatmap.cells) {
        let _ = write!(out, "{:<16}", format!("{} Trend", period));
        for cell in row {
            let text = format!("{} {}", cell.display_value(), cell.arrow().glyph());
            let _ = write!(out, " {:>10}", text);
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "Scale: ±{:.1}%", heatmap.max_abs);
    out
}

/// Render one block per ticker.
pub fn timelines_table(timelines: &[EpsTimeline], watched: &[String]) -> String {
    let mut out = String::new();
    for timeline in timelines {
        let star = if watched.iter().any(|w| *w == timeline.ticker) {
            "⭐ "
        } else {
            ""
        };
        let _ = writeln!(out, "{}{} - EPS Estimate Timeline", star, timeline.ticker);

        let _ = write!(out, "{:<16}", "Period");
        for lag in EpsLag::ALL {
            let _ = write!(out, " {:>9}", lag.header());
        }
        let _ = writeln!(out, " {:>10}", "Trend");

        for entry in &timeline.entries {
            let _ = write!(out, "{:<16}", entry.period.label());
            for sample in entry.samples {
                let _ = write!(out, " {:>9}", format_currency(sample));
            }
            let change = match entry.slope_pct {
                Some(_) => format!(" {}", format_slope(entry.slope_pct)),
                None => String::new(),
            };
            let _ = writeln!(out, " {:>10}", format!("{}{}", entry.trend.glyph(), change));
        }

        for entry in &timeline.entries {
            let _ = writeln!(out, "  {}: {}", entry.period.label(), entry.range_summary());
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(
        out,
        "Showing detailed EPS estimate timeline for {} stocks",
        timelines.len()
    );
    out
}
