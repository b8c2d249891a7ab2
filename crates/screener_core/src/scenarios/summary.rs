//! Display-ready scenario entries.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Which move a summary describes.
///
/// Ordering is the display order: `Current`, then every `Up` by ascending
/// magnitude, then every `Down` by ascending magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScenarioLabel {
    /// Baseline with no simulated move.
    Current,
    /// Underlying up by the given percentage.
    Up(u32),
    /// Underlying down by the given percentage.
    Down(u32),
}

impl ScenarioLabel {
    /// Sort key: (group, magnitude).
    fn rank(&self) -> (u8, u32) {
        match self {
            ScenarioLabel::Current => (0, 0),
            ScenarioLabel::Up(pct) => (1, *pct),
            ScenarioLabel::Down(pct) => (2, *pct),
        }
    }

    /// Move magnitude in percent; zero for `Current`.
    pub fn magnitude(&self) -> u32 {
        self.rank().1
    }

    /// Presentation tone of this label.
    pub fn tone(&self) -> Tone {
        match self {
            ScenarioLabel::Current => Tone::Neutral,
            ScenarioLabel::Up(_) => Tone::Gain,
            ScenarioLabel::Down(_) => Tone::Loss,
        }
    }
}

impl Ord for ScenarioLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for ScenarioLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ScenarioLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioLabel::Current => write!(f, "Current"),
            ScenarioLabel::Up(pct) => write!(f, "+{}%", pct),
            ScenarioLabel::Down(pct) => write!(f, "-{}%", pct),
        }
    }
}

impl Serialize for ScenarioLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Colour family of a scenario entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Baseline entry.
    Neutral,
    /// Positive move.
    Gain,
    /// Negative move.
    Loss,
}

impl Tone {
    /// Icon tag.
    pub fn icon(&self) -> &'static str {
        match self {
            Tone::Neutral => "📊",
            Tone::Gain => "📈",
            Tone::Loss => "📉",
        }
    }

    /// Text colour class.
    pub fn color_class(&self) -> &'static str {
        match self {
            Tone::Neutral => "text-blue-400",
            Tone::Gain => "text-green-400",
            Tone::Loss => "text-red-400",
        }
    }
}

/// One line of the scenario table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioSummary {
    /// `Current`, `+N%` or `-N%`.
    pub label: ScenarioLabel,
    /// Icon tag derived from the label.
    pub icon: &'static str,
    /// Colour class derived from the label.
    pub color_class: &'static str,
    /// Underlying price shown for this entry, if the backend priced it.
    pub underlying: Option<f64>,
    /// Option premium shown for this entry, if the backend priced it.
    pub premium: Option<f64>,
    /// Premium change in percent; always `None` for `Current`.
    pub change_pct: Option<f64>,
}

impl ScenarioSummary {
    /// Create a summary; presentation tags follow from `label`.
    pub fn new(
        label: ScenarioLabel,
        underlying: Option<f64>,
        premium: Option<f64>,
        change_pct: Option<f64>,
    ) -> Self {
        let tone = label.tone();
        Self {
            label,
            icon: tone.icon(),
            color_class: tone.color_class(),
            underlying,
            premium,
            change_pct,
        }
    }

    /// Baseline entry.
    pub fn current(underlying: Option<f64>, premium: Option<f64>) -> Self {
        Self::new(ScenarioLabel::Current, underlying, premium, None)
    }

    /// Whether this is the baseline entry.
    pub fn is_current(&self) -> bool {
        self.label == ScenarioLabel::Current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        assert_eq!(ScenarioLabel::Current.to_string(), "Current");
        assert_eq!(ScenarioLabel::Up(5).to_string(), "+5%");
        assert_eq!(ScenarioLabel::Down(20).to_string(), "-20%");
    }

    #[test]
    fn test_label_ordering() {
        let mut labels = vec![
            ScenarioLabel::Down(20),
            ScenarioLabel::Up(10),
            ScenarioLabel::Down(5),
            ScenarioLabel::Current,
            ScenarioLabel::Up(5),
        ];
        labels.sort();
        assert_eq!(
            labels,
            vec![
                ScenarioLabel::Current,
                ScenarioLabel::Up(5),
                ScenarioLabel::Up(10),
                ScenarioLabel::Down(5),
                ScenarioLabel::Down(20),
            ]
        );
    }

    #[test]
    fn test_zero_move_sorts_as_positive() {
        assert!(ScenarioLabel::Up(0) < ScenarioLabel::Down(0));
        assert!(ScenarioLabel::Current < ScenarioLabel::Up(0));
    }

    #[test]
    fn test_summary_tags_follow_label() {
        let up = ScenarioSummary::new(ScenarioLabel::Up(5), Some(105.0), Some(1.5), Some(50.0));
        assert_eq!(up.icon, "📈");
        assert_eq!(up.color_class, "text-green-400");

        let current = ScenarioSummary::current(Some(100.0), Some(1.0));
        assert!(current.is_current());
        assert_eq!(current.icon, "📊");
        assert_eq!(current.change_pct, None);
    }

    #[test]
    fn test_summary_serialises_label_as_text() {
        let down = ScenarioSummary::new(ScenarioLabel::Down(5), Some(95.0), Some(0.3), Some(-70.0));
        let json = serde_json::to_value(&down).unwrap();
        assert_eq!(json["label"], "-5%");
        assert_eq!(json["color_class"], "text-red-400");
    }

    #[test]
    fn test_missing_values_serialise_as_null() {
        let up = ScenarioSummary::new(ScenarioLabel::Up(5), Some(105.0), None, None);
        let json = serde_json::to_value(&up).unwrap();
        assert!(json["premium"].is_null());
        assert_eq!(json["underlying"], 105.0);
    }
}
