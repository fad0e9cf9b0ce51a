use super::direction::AlertDirection;
use serde::{Deserialize, Serialize};

/// Product whose last two scrapes differ by at least the requested threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    pub previous_price: f64,
    pub current_price: f64,
    /// Signed percentage, `(current - previous) / previous * 100`
    pub change_percent: f64,
    pub last_updated: String,
}

impl AlertDto {
    pub fn direction(&self) -> AlertDirection {
        AlertDirection::from_change_percent(self.change_percent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertListResponse {
    pub alerts: Vec<AlertDto>,
    /// Threshold echoed back by the server
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub count: Option<usize>,
}
