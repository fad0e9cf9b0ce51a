use crate::shared::api_utils::ApiClient;
use crate::shared::http_client::ApiError;
use contracts::domain::a001_product::{
    HistoryFilter, PricePointDto, ProductDto, ProductHistoryResponse, ProductListResponse,
};

/// Получить список отслеживаемых товаров с последней ценой
pub async fn fetch_products(client: ApiClient) -> Result<Vec<ProductDto>, ApiError> {
    let response: ProductListResponse = client.get_json("/products", &[]).await?;
    Ok(response.products)
}

/// История цен одного товара, от новых к старым
pub async fn fetch_history(
    client: ApiClient,
    product_id: i64,
    filter: HistoryFilter,
) -> Result<Vec<PricePointDto>, ApiError> {
    let path = format!("/products/{}/history", product_id);
    let response: ProductHistoryResponse = client.get_json(&path, &filter.query_pairs()).await?;
    Ok(response.history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::ApiConfig;
    use crate::shared::http_client::fake::FakeHttpClient;
    use futures::executor::block_on;
    use std::sync::Arc;

    const PRODUCTS: &str = r#"{"products": [
        {"id": 1, "title": "Kettle", "url": "https://shop/kettle", "current_price": 19.99, "last_updated": "2024-03-15 14:02:26"},
        {"id": 2, "title": "Toaster", "url": "https://shop/toaster", "current_price": 25.0, "last_updated": "2024-03-15 14:05:00"},
        {"id": 3, "title": "Blender", "url": "https://shop/blender", "current_price": 38.5, "last_updated": "2024-03-15 14:07:12"}
    ], "count": 3}"#;

    fn client(http: Arc<FakeHttpClient>) -> ApiClient {
        ApiClient::new(ApiConfig::default(), http)
    }

    #[test]
    fn test_fetch_products_returns_every_row() {
        let http = Arc::new(FakeHttpClient::new().with_body("/products", PRODUCTS));

        let products = block_on(fetch_products(client(http.clone()))).unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].title, "Kettle");
        let requests = http.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://localhost:8000/products");
        assert!(requests[0].params.is_empty());
    }

    #[test]
    fn test_fetch_products_connection_refused() {
        let http = Arc::new(FakeHttpClient::new());

        let result = block_on(fetch_products(client(http)));

        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[test]
    fn test_fetch_products_wrong_shape() {
        let http = Arc::new(FakeHttpClient::new().with_body("/products", r#"[]"#));

        let result = block_on(fetch_products(client(http)));

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_fetch_history_sends_date_bounds() {
        let http = Arc::new(FakeHttpClient::new().with_body(
            "/products/2/history",
            r#"{"product_id": 2, "history": [
                {"price": 25.0, "scraped_at": "2024-03-15 14:05:00"},
                {"price": 27.5, "scraped_at": "2024-03-14 14:05:00"}
            ], "count": 2}"#,
        ));
        let filter = HistoryFilter {
            start_date: Some("2024-03-01".to_string()),
            end_date: None,
        };

        let history = block_on(fetch_history(client(http.clone()), 2, filter)).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[1].price, 27.5);
        assert_eq!(
            http.requests()[0].params,
            vec![("start_date", "2024-03-01".to_string())]
        );
    }
}
