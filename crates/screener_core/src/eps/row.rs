//! Per-ticker EPS estimate rows.

use super::period::{EpsLag, EpsPeriod};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Five observations of one estimate, oldest first.
pub type Samples = [Option<f64>; 5];

/// One ticker's EPS estimates across all periods and lags.
///
/// Sample fields are keyed `"{period} {lag}"`. Any other backend fields are
/// kept but ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EpsRow {
    /// Ticker symbol.
    #[serde(rename = "Ticker", default)]
    pub ticker: Option<String>,

    /// All remaining fields.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl EpsRow {
    /// Create an empty row for `ticker`.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: Some(ticker.into()),
            fields: HashMap::new(),
        }
    }

    /// Set one sample.
    pub fn with_sample(mut self, period: EpsPeriod, lag: EpsLag, value: Option<f64>) -> Self {
        let json = value
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        self.fields.insert(period.field(lag), json);
        self
    }

    /// Set all five samples of a period, oldest first.
    pub fn with_samples(self, period: EpsPeriod, samples: Samples) -> Self {
        EpsLag::ALL
            .into_iter()
            .zip(samples)
            .fold(self, |row, (lag, value)| row.with_sample(period, lag, value))
    }

    /// One sample; non-numeric and non-finite values are absent.
    pub fn sample(&self, period: EpsPeriod, lag: EpsLag) -> Option<f64> {
        self.fields
            .get(&period.field(lag))
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
    }

    /// The five samples of `period`, oldest first.
    pub fn samples(&self, period: EpsPeriod) -> Samples {
        EpsLag::ALL.map(|lag| self.sample(period, lag))
    }

    /// Ticker if present and non-blank.
    pub fn ticker(&self) -> Option<&str> {
        self.ticker.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// Tickers in row order, skipping rows without one.
pub fn tickers(rows: &[EpsRow]) -> Vec<String> {
    rows.iter()
        .filter_map(|r| r.ticker().map(str::to_string))
        .collect()
}
