use crate::shared::api_utils::ApiClient;
use crate::shared::http_client::ApiError;
use contracts::domain::a002_price_alert::{AlertDto, AlertListResponse, AlertThreshold};

/// Alerts together with the threshold they were requested for
#[derive(Debug, Clone, PartialEq)]
pub struct AlertSnapshot {
    pub threshold: AlertThreshold,
    pub alerts: Vec<AlertDto>,
}

/// Товары, цена которых изменилась не меньше чем на `threshold` процентов
pub async fn fetch_alerts(
    client: ApiClient,
    threshold: AlertThreshold,
) -> Result<AlertSnapshot, ApiError> {
    let response: AlertListResponse = client
        .get_json("/alerts", &[("threshold", threshold.as_query_value())])
        .await?;
    Ok(AlertSnapshot {
        threshold,
        alerts: response.alerts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::ApiConfig;
    use crate::shared::http_client::fake::FakeHttpClient;
    use futures::executor::block_on;
    use std::sync::Arc;

    const ALERTS: &str = r#"{"alerts": [
        {"id": 1, "title": "Kettle", "url": null, "previous_price": 20.0, "current_price": 21.0, "change_percent": 5.0, "last_updated": "2024-03-15 14:02:26"},
        {"id": 3, "title": "Blender", "url": null, "previous_price": 40.0, "current_price": 36.0, "change_percent": -10.0, "last_updated": "2024-03-15 14:07:12"}
    ], "threshold": 5.0, "count": 2}"#;

    fn client(http: Arc<FakeHttpClient>) -> ApiClient {
        ApiClient::new(ApiConfig::default(), http)
    }

    #[test]
    fn test_threshold_is_sent_as_query_parameter() {
        let http = Arc::new(FakeHttpClient::new().with_body("/alerts", ALERTS));

        let snapshot = block_on(fetch_alerts(client(http.clone()), AlertThreshold::default())).unwrap();

        assert_eq!(snapshot.alerts.len(), 2);
        assert_eq!(snapshot.threshold, AlertThreshold::default());
        let requests = http.requests();
        assert_eq!(requests[0].url, "http://localhost:8000/alerts");
        assert_eq!(requests[0].params, vec![("threshold", "5".to_string())]);
    }

    #[test]
    fn test_high_threshold_returns_empty_list() {
        let http = Arc::new(FakeHttpClient::new().with_body(
            "/alerts",
            r#"{"alerts": [], "threshold": 100.0, "count": 0}"#,
        ));
        let threshold = AlertThreshold::parse("100.0").unwrap();

        let snapshot = block_on(fetch_alerts(client(http.clone()), threshold)).unwrap();

        assert!(snapshot.alerts.is_empty());
        assert_eq!(http.requests()[0].params, vec![("threshold", "100".to_string())]);
    }

    #[test]
    fn test_same_threshold_twice_gives_same_rows() {
        let http = Arc::new(FakeHttpClient::new().with_body("/alerts", ALERTS));
        let threshold = AlertThreshold::parse("5").unwrap();

        let first = block_on(fetch_alerts(client(http.clone()), threshold)).unwrap();
        let second = block_on(fetch_alerts(client(http.clone()), threshold)).unwrap();

        assert_eq!(first, second);
        assert_eq!(http.requests().len(), 2);
    }

    #[test]
    fn test_server_error_is_reported() {
        let http = Arc::new(FakeHttpClient::new().with_error("/alerts", ApiError::Status(500)));

        let result = block_on(fetch_alerts(client(http), AlertThreshold::default()));

        assert_eq!(result, Err(ApiError::Status(500)));
    }
}
