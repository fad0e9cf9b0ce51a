use crate::shared::number_format::{format_change_percent, format_price};
use contracts::domain::a002_price_alert::{AlertDirection, AlertDto, AlertThreshold};

/// Threshold to switch to after the user typed `input`.
///
/// `None` when the input is not a valid non-negative number or when it
/// equals the active threshold; in both cases nothing is re-fetched.
pub fn next_threshold(current: AlertThreshold, input: &str) -> Option<AlertThreshold> {
    match AlertThreshold::parse(input) {
        Ok(parsed) if parsed != current => Some(parsed),
        Ok(_) => None,
        Err(e) => {
            log::debug!("ignoring threshold input: {}", e);
            None
        }
    }
}

/// Text shown instead of the table when nothing crosses the threshold
pub fn empty_message(threshold: AlertThreshold) -> String {
    format!("No price changes exceed {}% threshold", threshold)
}

/// Display-ready alert table row
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRow {
    pub id: i64,
    pub title: String,
    pub url: Option<String>,
    pub previous_price: String,
    pub current_price: String,
    pub change_label: String,
    pub direction: AlertDirection,
    pub last_updated: String,
}

pub fn alert_rows(alerts: &[AlertDto], format_time: impl Fn(&str) -> String) -> Vec<AlertRow> {
    alerts
        .iter()
        .map(|a| AlertRow {
            id: a.id,
            title: a.title.clone(),
            url: a.url.clone().filter(|u| !u.trim().is_empty()),
            previous_price: format_price(a.previous_price),
            current_price: format_price(a.current_price),
            change_label: format_change_percent(a.change_percent),
            direction: a.direction(),
            last_updated: format_time(&a.last_updated),
        })
        .collect()
}
