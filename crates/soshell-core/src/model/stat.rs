//! Statistic-card data: a labeled metric with an optional trend.

use serde::{Deserialize, Serialize};

/// Direction of a metric's change since the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// One dashboard metric, as consumed by the stat-card widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    /// Descriptive label (rendered uppercase by the card).
    pub title: String,

    /// Main value, already formatted for display.
    pub value: String,

    /// Optional unit suffix (e.g. "%", "M").
    pub unit: Option<String>,

    /// Percentage change since the previous period. Positive is up,
    /// negative is down, `None` means no trend is shown.
    pub change: Option<f64>,

    /// Footer text.
    pub description: Option<String>,
}

impl Stat {
    /// Trend direction derived from the sign of `change`.
    pub fn trend(&self) -> Option<Trend> {
        let change = self.change?;
        Some(if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        })
    }

    /// Change magnitude as "N.N%" — absolute value, one decimal place.
    pub fn change_text(&self) -> Option<String> {
        self.change.map(|c| format!("{:.1}%", c.abs()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn stat(change: Option<f64>) -> Stat {
        Stat {
            title: "Followers".into(),
            value: "12.4".into(),
            unit: Some("K".into()),
            change,
            description: None,
        }
    }

    #[test]
    fn trend_follows_change_sign() {
        assert_eq!(stat(Some(5.2)).trend(), Some(Trend::Up));
        assert_eq!(stat(Some(-1.8)).trend(), Some(Trend::Down));
        assert_eq!(stat(Some(0.0)).trend(), Some(Trend::Flat));
        assert_eq!(stat(None).trend(), None);
    }

    #[test]
    fn change_text_is_absolute_with_one_decimal() {
        assert_eq!(stat(Some(5.2)).change_text().unwrap(), "5.2%");
        assert_eq!(stat(Some(-1.8)).change_text().unwrap(), "1.8%");
        assert_eq!(stat(Some(12.0)).change_text().unwrap(), "12.0%");
        assert_eq!(stat(None).change_text(), None);
    }
}
