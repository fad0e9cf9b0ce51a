use crate::shared::api_utils::ApiClient;
use crate::shared::http_client::ApiError;
use contracts::dashboards::d400_statistics::StatisticsResponse;

/// Получить сводные счётчики. Пустое тело (`null`) считается ошибкой,
/// а не пустой статистикой.
pub async fn get_statistics(client: ApiClient) -> Result<StatisticsResponse, ApiError> {
    let response: Option<StatisticsResponse> = client.get_json("/stats", &[]).await?;
    response.ok_or(ApiError::MissingData("statistics"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::ApiConfig;
    use crate::shared::http_client::fake::FakeHttpClient;
    use futures::executor::block_on;
    use std::sync::Arc;

    fn client(http: Arc<FakeHttpClient>) -> ApiClient {
        ApiClient::new(ApiConfig::default(), http)
    }

    #[test]
    fn test_statistics_snapshot() {
        let http = Arc::new(
            FakeHttpClient::new().with_body("/stats", r#"{"total_products": 12, "total_scans": 340}"#),
        );

        let stats = block_on(get_statistics(client(http.clone()))).unwrap();

        assert_eq!(
            stats,
            StatisticsResponse {
                total_products: 12,
                total_scans: 340
            }
        );
        assert_eq!(http.requests()[0].url, "http://localhost:8000/stats");
    }

    #[test]
    fn test_null_body_is_missing_data() {
        let http = Arc::new(FakeHttpClient::new().with_body("/stats", "null"));

        let result = block_on(get_statistics(client(http)));

        assert_eq!(result, Err(ApiError::MissingData("statistics")));
    }

    #[test]
    fn test_missing_field_is_decode_error() {
        let http = Arc::new(FakeHttpClient::new().with_body("/stats", r#"{"total_products": 12}"#));

        let result = block_on(get_statistics(client(http)));

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
