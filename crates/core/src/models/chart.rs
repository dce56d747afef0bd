use serde::{Deserialize, Serialize};

/// Income vs. expense totals for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// ISO date (YYYY-MM-DD)
    pub name: String,
    pub income: f64,
    pub expense: f64,
}

/// Total spent in a single expense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDataPoint {
    pub name: String,
    pub value: f64,
}
