use serde::{Deserialize, Serialize};

/// Tracked product with its latest scraped price (`GET /products`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub title: String,
    /// Source page of the product, absent on older servers
    #[serde(default)]
    pub url: Option<String>,
    pub current_price: f64,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductDto>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// One scrape of a product price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePointDto {
    pub price: f64,
    pub scraped_at: String,
}

/// Price history of a single product (`GET /products/{id}/history`), newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductHistoryResponse {
    pub product_id: i64,
    pub history: Vec<PricePointDto>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Scrape times are stored as `YYYY-MM-DD HH:MM:SS` text and compared as
/// strings, so a bare end date has to be widened to the last second of the day.
const END_OF_DAY: &str = "23:59:59";

/// Optional date bounds for the history request, both in `YYYY-MM-DD`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl HistoryFilter {
    /// Query parameters for the non-empty bounds only. Both bounds are
    /// inclusive: the end date covers every scrape made on that day.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = non_empty(&self.start_date) {
            pairs.push(("start_date", start));
        }
        if let Some(end) = non_empty(&self.end_date) {
            pairs.push(("end_date", inclusive_end(end)));
        }
        pairs
    }
}

fn inclusive_end(end: String) -> String {
    if end.contains([' ', 'T']) {
        end
    } else {
        format!("{} {}", end, END_OF_DAY)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
