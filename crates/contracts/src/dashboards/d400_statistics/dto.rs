use serde::{Deserialize, Serialize};

/// Aggregate counters snapshot (`GET /stats`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsResponse {
    pub total_products: u64,
    pub total_scans: u64,
}

/// One bar of the overview chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: u64,
}

impl StatisticsResponse {
    /// Categories of the overview chart, in display order
    pub fn chart_series(&self) -> [ChartPoint; 2] {
        [
            ChartPoint {
                label: "Products",
                value: self.total_products,
            },
            ChartPoint {
                label: "Total Scans",
                value: self.total_scans,
            },
        ]
    }
}
