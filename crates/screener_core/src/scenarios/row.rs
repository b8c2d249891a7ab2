//! Simulation rows as delivered by the backend.

use serde::{Deserialize, Serialize};

/// One simulated underlying move.
///
/// Field names follow the backend's JSON keys. Every row of a batch carries
/// the same `current_underlying` and `current_premium`. Numeric fields the
/// backend left out or sent as `null` are `None`, so an error row such as
/// `{"Error": "..."}` still deserialises.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    /// Free-text move tag such as `"±5%"`.
    #[serde(rename = "Underlying Scenario % Change", default)]
    pub scenario_change_label: Option<String>,

    /// Underlying price today.
    #[serde(rename = "Current Underlying", default)]
    pub current_underlying: Option<f64>,

    /// Option premium today.
    #[serde(rename = "Current Premium", default)]
    pub current_premium: Option<f64>,

    /// Underlying after the positive move.
    #[serde(rename = "Simulated Underlying (+)", default)]
    pub simulated_underlying_up: Option<f64>,

    /// Underlying after the negative move.
    #[serde(rename = "Simulated Underlying (-)", default)]
    pub simulated_underlying_down: Option<f64>,

    /// Premium after the positive move.
    #[serde(rename = "Simulated Premium (+)", default)]
    pub simulated_premium_up: Option<f64>,

    /// Premium after the negative move.
    #[serde(rename = "Simulated Premium (-)", default)]
    pub simulated_premium_down: Option<f64>,

    /// Premium change under the positive move, in percent.
    #[serde(rename = "Simulated Premium (+) % Change", default)]
    pub simulated_premium_up_change_pct: Option<f64>,

    /// Premium change under the negative move, in percent.
    #[serde(rename = "Simulated Premium (-) % Change", default)]
    pub simulated_premium_down_change_pct: Option<f64>,
}

impl ScenarioRow {
    /// Magnitude of the move encoded in the label, if any.
    ///
    /// Takes the first run of decimal digits immediately followed by `%`.
    /// Returns `None` when no such run exists or it overflows `u32`.
    pub fn move_pct(&self) -> Option<u32> {
        self.scenario_change_label
            .as_deref()
            .and_then(parse_move_pct)
    }
}

/// Extract the percentage magnitude from a move tag.
///
/// # Examples
/// ```
/// use screener_core::scenarios::parse_move_pct;
///
/// assert_eq!(parse_move_pct("±5%"), Some(5));
/// assert_eq!(parse_move_pct("move 3 to 20%"), Some(20));
/// assert_eq!(parse_move_pct("flat"), None);
/// ```
pub fn parse_move_pct(label: &str) -> Option<u32> {
    let bytes = label.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if bytes.get(i) == Some(&b'%') {
            // Digits are ASCII, so the slice is on char boundaries.
            return label[start..i].parse().ok();
        }
    }
    None
}
