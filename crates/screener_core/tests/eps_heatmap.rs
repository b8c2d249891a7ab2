//! Integration tests for EPS slopes and the heatmap built from backend JSON.

use approx::assert_relative_eq;
use screener_core::eps::{
    build_heatmap, build_timelines, color_bucket, compute_slope, tickers, unwatched_tickers,
    ColorBucket, EpsPeriod, EpsRow, Intensity, TrendArrow, DEFAULT_FLAT_THRESHOLD,
    DEFAULT_WATCH_LIMIT,
};

const ROWS: &str = r#"[
    {
        "Ticker": "AAPL",
        "Curr Qtr 90": 1.50, "Curr Qtr 60": 1.52, "Curr Qtr 30": 1.55, "Curr Qtr 7": 1.58, "Curr Qtr Curr": 1.65,
        "Next Qtr 90": 1.60, "Next Qtr 60": null, "Next Qtr 30": null, "Next Qtr 7": null, "Next Qtr Curr": 1.60,
        "Curr Yr 90": 6.40, "Curr Yr 60": 6.50, "Curr Yr 30": 6.55, "Curr Yr 7": 6.60, "Curr Yr Curr": 6.72,
        "Next Yr 90": 7.20, "Next Yr 60": 7.10, "Next Yr 30": 7.00, "Next Yr 7": 6.95, "Next Yr Curr": 6.84
    },
    {
        "Ticker": "INTC",
        "Curr Qtr 90": 0.40, "Curr Qtr 60": 0.30, "Curr Qtr 30": 0.25, "Curr Qtr 7": 0.22, "Curr Qtr Curr": 0.20,
        "Next Qtr 90": 0.0, "Next Qtr Curr": 0.10,
        "Curr Yr 90": null, "Curr Yr Curr": 1.00,
        "Next Yr 90": 2.00, "Next Yr 60": null, "Next Yr 30": 1.60, "Next Yr 7": null, "Next Yr Curr": 2.50
    },
    {
        "Ticker": ""
    }
]"#;

fn rows() -> Vec<EpsRow> {
    serde_json::from_str(ROWS).unwrap()
}

#[test]
fn test_slope_reference_values() {
    assert_eq!(compute_slope(&[]), None);
    assert_eq!(compute_slope(&[None]), None);
    assert_eq!(compute_slope(&[Some(5.0)]), None);
    assert_eq!(compute_slope(&[Some(0.0), Some(10.0)]), None);
    assert_relative_eq!(compute_slope(&[Some(10.0), Some(15.0)]).unwrap(), 50.0);
    assert_relative_eq!(
        compute_slope(&[Some(10.0), None, None, None, Some(20.0)]).unwrap(),
        100.0
    );
}

#[test]
fn test_neutral_bucket_ignores_scale() {
    for scale in [5.0, 50.0, 1e6] {
        assert_eq!(color_bucket(None, scale), ColorBucket::Neutral);
    }
}

#[test]
fn test_heatmap_from_backend_rows() {
    let rows = rows();
    let tickers = tickers(&rows);
    assert_eq!(tickers, ["AAPL", "INTC"]);

    let map = build_heatmap(&rows, &tickers, &EpsPeriod::ALL);

    // INTC Curr Qtr: 0.40 -> 0.20 is the largest move
    assert_relative_eq!(map.max_abs, 50.0, epsilon = 1e-9);

    let intc_cq = map.cell(EpsPeriod::CurrentQuarter, "INTC").unwrap();
    assert_eq!(intc_cq.color_bucket, ColorBucket::Loss(Intensity::Saturated));
    assert_eq!(intc_cq.arrow(), TrendArrow::Down);

    let aapl_nq = map.cell(EpsPeriod::NextQuarter, "AAPL").unwrap();
    assert_eq!(aapl_nq.slope_pct, Some(0.0));
    assert_eq!(aapl_nq.arrow(), TrendArrow::Flat);

    assert_eq!(map.cell(EpsPeriod::NextQuarter, "INTC").unwrap().slope_pct, None);
    assert_eq!(map.cell(EpsPeriod::CurrentYear, "INTC").unwrap().slope_pct, None);

    let intc_ny = map.cell(EpsPeriod::NextYear, "INTC").unwrap();
    assert_relative_eq!(intc_ny.slope_pct.unwrap(), 25.0, epsilon = 1e-9);
    assert_eq!(intc_ny.color_bucket, ColorBucket::Gain(Intensity::Moderate));
}

#[test]
fn test_every_cell_bucketed_against_grid_scale() {
    let rows = rows();
    let map = build_heatmap(&rows, &tickers(&rows), &EpsPeriod::ALL);
    for cell in map.iter() {
        assert_eq!(cell.color_bucket, color_bucket(cell.slope_pct, map.max_abs));
    }
}

#[test]
fn test_timelines_and_quick_watch() {
    let rows = rows();
    let timelines = build_timelines(&rows, DEFAULT_FLAT_THRESHOLD);
    assert_eq!(timelines.len(), 3);
    assert_eq!(timelines[0].entries[1].trend, TrendArrow::Flat);
    assert_eq!(timelines[1].entries[1].range_summary(), "Insufficient data");

    let watched = vec!["AAPL".to_string()];
    assert_eq!(
        unwatched_tickers(&tickers(&rows), &watched, DEFAULT_WATCH_LIMIT),
        ["INTC"]
    );
}
