use crate::shared::number_format::format_price;
use contracts::domain::a001_product::ProductDto;

/// Display-ready product table row
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub url: Option<String>,
    pub current_price: String,
    pub last_updated: String,
}

/// One row per product, in server order
pub fn product_rows(products: &[ProductDto], format_time: impl Fn(&str) -> String) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            id: p.id,
            title: p.title.clone(),
            url: p.url.clone().filter(|u| !u.trim().is_empty()),
            current_price: format_price(p.current_price),
            last_updated: format_time(&p.last_updated),
        })
        .collect()
}
