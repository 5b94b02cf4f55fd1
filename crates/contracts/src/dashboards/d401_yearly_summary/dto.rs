use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::enums::Category;

/// Request for the yearly summary dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlySummaryRequest {
    pub year: i32,
}

/// Annual overview of catalog growth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: i32,
    pub total_added: usize,
    /// Books added per month, January first (always 12 rows)
    pub monthly: Vec<MonthlyCount>,
    /// Average books per month, rounded to one decimal
    pub monthly_average: f64,
    /// Month with the most additions; earliest month wins ties
    pub most_active_month: Option<Month>,
    /// Growth of `total_added` vs previous year in percent
    pub growth_percent: Option<f64>,
    /// Categories ordered by additions, most active first
    pub categories: Vec<CategoryTrend>,
}

/// Books added in one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub month: Month,
    pub count: usize,
}

/// Additions of one category and the change vs previous year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryTrend {
    pub category: Category,
    pub added: usize,
    /// `None` when the previous year had no additions in the category
    pub trend_percent: Option<f64>,
}
