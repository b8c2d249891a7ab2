//! Integration tests for the scenario table built from backend JSON.

use approx::assert_relative_eq;
use screener_core::export::write_scenarios_csv;
use screener_core::scenarios::{expected_entries, summarize, ScenarioLabel, ScenarioRow};

const BATCH: &str = r#"[
    {
        "Underlying Scenario % Change": "±20%",
        "Current Underlying": 100.0,
        "Current Premium": 1.0,
        "Simulated Underlying (+)": 120.0,
        "Simulated Underlying (-)": 80.0,
        "Simulated Premium (+)": 3.0,
        "Simulated Premium (-)": 0.05,
        "Simulated Premium (+) % Change": 200.0,
        "Simulated Premium (-) % Change": -95.0
    },
    {
        "Underlying Scenario % Change": "±5%",
        "Current Underlying": 100.0,
        "Current Premium": 1.0,
        "Simulated Underlying (+)": 105.0,
        "Simulated Underlying (-)": 95.0,
        "Simulated Premium (+)": 1.5,
        "Simulated Premium (-)": 0.3,
        "Simulated Premium (+) % Change": 50.0,
        "Simulated Premium (-) % Change": -70.0
    }
]"#;

fn batch() -> Vec<ScenarioRow> {
    serde_json::from_str(BATCH).unwrap()
}

#[test]
fn test_two_row_batch_order() {
    let table = summarize(&batch());
    let labels: Vec<String> = table.iter().map(|s| s.label.to_string()).collect();
    assert_eq!(labels, ["Current", "+5%", "+20%", "-5%", "-20%"]);
}

#[test]
fn test_two_row_batch_values() {
    let table = summarize(&batch());

    assert_relative_eq!(table[0].underlying.unwrap(), 100.0);
    assert_eq!(table[0].change_pct, None);

    let up20 = table.iter().find(|s| s.label == ScenarioLabel::Up(20)).unwrap();
    assert_relative_eq!(up20.underlying.unwrap(), 120.0);
    assert_relative_eq!(up20.premium.unwrap(), 3.0);
    assert_relative_eq!(up20.change_pct.unwrap(), 200.0);

    let down5 = table.iter().find(|s| s.label == ScenarioLabel::Down(5)).unwrap();
    assert_relative_eq!(down5.underlying.unwrap(), 95.0);
    assert_relative_eq!(down5.premium.unwrap(), 0.3);
    assert_relative_eq!(down5.change_pct.unwrap(), -70.0);
    assert_eq!(down5.color_class, "text-red-400");
}

#[test]
fn test_length_when_all_labels_parse() {
    let rows = batch();
    assert_eq!(summarize(&rows).len(), 1 + 2 * rows.len());
    assert_eq!(expected_entries(&rows), 5);
}

#[test]
fn test_input_is_not_mutated() {
    let rows = batch();
    let before = rows.clone();
    let _ = summarize(&rows);
    assert_eq!(rows, before);
}

#[test]
fn test_csv_export_of_batch() {
    let mut buf = Vec::new();
    write_scenarios_csv(&mut buf, &summarize(&batch())).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[2], "+5%,$105.00,$1.50,+50.0%");
    assert_eq!(lines[5], "-20%,$80.00,$0.05,-95.0%");
}

#[test]
fn test_error_batch_keeps_empty_current() {
    let rows: Vec<ScenarioRow> =
        serde_json::from_str(r#"[{"Error": "Pricing service unavailable"}]"#).unwrap();
    let table = summarize(&rows);

    assert_eq!(table.len(), 1);
    assert!(table[0].is_current());

    let mut buf = Vec::new();
    write_scenarios_csv(&mut buf, &table).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().nth(1), Some("Current,--,--,--"));
}

#[test]
fn test_null_premium_renders_as_missing() {
    let json = r#"[{
        "Underlying Scenario % Change": "±10%",
        "Current Underlying": 100.0,
        "Current Premium": 1.0,
        "Simulated Underlying (+)": 110.0,
        "Simulated Underlying (-)": 90.0,
        "Simulated Premium (+)": 2.0,
        "Simulated Premium (-)": null,
        "Simulated Premium (+) % Change": 100.0,
        "Simulated Premium (-) % Change": null
    }]"#;
    let rows: Vec<ScenarioRow> = serde_json::from_str(json).unwrap();
    let table = summarize(&rows);

    let down = table.iter().find(|s| s.label == ScenarioLabel::Down(10)).unwrap();
    assert_eq!(down.premium, None);
    assert_eq!(down.change_pct, None);

    let mut buf = Vec::new();
    write_scenarios_csv(&mut buf, &table).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().last(), Some("-10%,$90.00,--,--"));
}
