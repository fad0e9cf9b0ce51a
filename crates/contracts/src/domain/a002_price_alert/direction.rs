use serde::{Deserialize, Serialize};

/// Which way a price moved between the last two scrapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertDirection {
    /// Price went up, shown as an alert
    Increase,
    /// Price went down or stayed flat, shown as favorable
    Decrease,
}

impl AlertDirection {
    /// Strictly positive change is an increase; zero, negative and NaN are not.
    pub fn from_change_percent(change_percent: f64) -> Self {
        if change_percent > 0.0 {
            Self::Increase
        } else {
            Self::Decrease
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }
}
