//! Estimate periods and lookback windows.

use crate::types::ScreenerError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Fiscal period an EPS estimate refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EpsPeriod {
    /// Current fiscal quarter.
    #[serde(rename = "Curr Qtr")]
    CurrentQuarter,
    /// Next fiscal quarter.
    #[serde(rename = "Next Qtr")]
    NextQuarter,
    /// Current fiscal year.
    #[serde(rename = "Curr Yr")]
    CurrentYear,
    /// Next fiscal year.
    #[serde(rename = "Next Yr")]
    NextYear,
}

impl EpsPeriod {
    /// All periods in display order.
    pub const ALL: [EpsPeriod; 4] = [
        EpsPeriod::CurrentQuarter,
        EpsPeriod::NextQuarter,
        EpsPeriod::CurrentYear,
        EpsPeriod::NextYear,
    ];

    /// Backend key prefix, e.g. `Curr Qtr`.
    pub fn key(&self) -> &'static str {
        match self {
            EpsPeriod::CurrentQuarter => "Curr Qtr",
            EpsPeriod::NextQuarter => "Next Qtr",
            EpsPeriod::CurrentYear => "Curr Yr",
            EpsPeriod::NextYear => "Next Yr",
        }
    }

    /// Long human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            EpsPeriod::CurrentQuarter => "Current Quarter",
            EpsPeriod::NextQuarter => "Next Quarter",
            EpsPeriod::CurrentYear => "Current Year",
            EpsPeriod::NextYear => "Next Year",
        }
    }

    /// Backend field name for this period at `lag`, e.g. `Curr Qtr 90`.
    pub fn field(&self, lag: EpsLag) -> String {
        format!("{} {}", self.key(), lag.key())
    }
}

impl fmt::Display for EpsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EpsPeriod {
    type Err = ScreenerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        EpsPeriod::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(trimmed) || p.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ScreenerError::UnknownPeriod(s.to_string()))
    }
}

/// How long ago an estimate was observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EpsLag {
    /// 90 days ago.
    Days90,
    /// 60 days ago.
    Days60,
    /// 30 days ago.
    Days30,
    /// 7 days ago.
    Days7,
    /// Latest estimate.
    Current,
}

impl EpsLag {
    /// All lags, oldest first.
    pub const ALL: [EpsLag; 5] = [
        EpsLag::Days90,
        EpsLag::Days60,
        EpsLag::Days30,
        EpsLag::Days7,
        EpsLag::Current,
    ];

    /// Backend key suffix.
    pub fn key(&self) -> &'static str {
        match self {
            EpsLag::Days90 => "90",
            EpsLag::Days60 => "60",
            EpsLag::Days30 => "30",
            EpsLag::Days7 => "7",
            EpsLag::Current => "Curr",
        }
    }

    /// Column header.
    pub fn header(&self) -> &'static str {
        match self {
            EpsLag::Days90 => "90d Ago",
            EpsLag::Days60 => "60d Ago",
            EpsLag::Days30 => "30d Ago",
            EpsLag::Days7 => "7d Ago",
            EpsLag::Current => "Current",
        }
    }
}

impl FromStr for EpsLag {
    type Err = ScreenerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        EpsLag::ALL
            .into_iter()
            .find(|l| l.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ScreenerError::UnknownLag(s.to_string()))
    }
}
