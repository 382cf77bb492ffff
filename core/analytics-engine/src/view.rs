//! FILENAME: core/analytics-engine/src/view.rs
//! Chart-ready output types - the shapes the dashboard widgets bind to.
//!
//! Field names here are a wire contract: widgets key off the serialized
//! names (`name`/`value` for categorical series, `label` plus named numeric
//! fields for time series), so the serde renames are part of the interface.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Headline figures for the KPI cards, recomputed on every filter change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_sales: f64,
    pub total_cost: f64,

    /// Blended ratio: total margin / total sales, 0 when there are no sales.
    pub avg_margin_percent: f64,

    /// "N/A" when the active subset is empty.
    pub top_location: String,
    pub top_product: String,
    pub top_customer: String,
}

/// One slice of a categorical series (pie and bar charts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameValue {
    pub name: String,
    pub value: f64,
}

/// One month bucket of the sales trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// "Mon YYYY", e.g. "Jan 2023".
    pub label: String,
    pub sales: f64,
}

/// One month bucket of the combined sales/profit trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesProfitPoint {
    pub label: String,
    pub sales: f64,
    pub profit: f64,
}

/// One month bucket of the margin-percent trend. Carries only the ratio,
/// not the raw sums it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginTrendPoint {
    pub label: String,
    pub margin_percent: f64,
}

/// One year of the financial rollup chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearFinancials {
    /// Four-digit year as text, the x-axis label.
    pub name: String,
    pub sales: f64,
    pub cost: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// One year row of the stacked profit-by-category chart. Categories with no
/// records that year are simply absent from the row (no zero-fill).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedYearRow {
    /// Four-digit year as text.
    pub name: String,

    /// One field per category observed that year, flattened into the row so
    /// the serialized shape is `{ "name": "2023", "Furniture": 120.0, ... }`.
    #[serde(flatten)]
    pub values: FxHashMap<String, f64>,
}

/// Payload of the stacked chart: the year rows plus the distinct ordered
/// category list the widget uses to construct its series and legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitByCategoryYear {
    pub data: Vec<StackedYearRow>,
    pub categories: Vec<String>,
}
