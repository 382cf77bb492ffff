//! FILENAME: core/analytics-engine/src/snapshot.rs
//! Dashboard snapshot - one filter pass feeding every widget payload.

use model::{FilterCriteria, Transaction};
use serde::{Deserialize, Serialize};

use crate::engine::{
    compute_kpis, financials_by_year, margin_trend, profit_by_category_year,
    profit_by_location, sales_by_category, sales_by_location,
    sales_profit_trend, sales_trend, top_customers,
};
use crate::filter::apply_filter;
use crate::view::{
    KpiSummary, MarginTrendPoint, NameValue, ProfitByCategoryYear,
    SalesProfitPoint, TrendPoint, YearFinancials,
};

/// Everything the dashboard renders for one filter state.
///
/// Recomputed wholesale on every filter change: the filter runs once, then
/// every aggregator runs over the active subset. There is no incremental
/// update path and no cache, which is fine at dashboard data volumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub kpis: KpiSummary,
    pub sales_trend: Vec<TrendPoint>,
    pub sales_by_location: Vec<NameValue>,
    pub sales_by_category: Vec<NameValue>,
    pub top_customers: Vec<NameValue>,
    pub financials_by_year: Vec<YearFinancials>,
    pub profit_by_category_year: ProfitByCategoryYear,
    pub profit_by_location: Vec<NameValue>,
    pub sales_profit_trend: Vec<SalesProfitPoint>,
    pub margin_trend: Vec<MarginTrendPoint>,
}

impl DashboardSnapshot {
    /// Filters the full dataset, then computes every view over the result.
    pub fn compute(records: &[Transaction], criteria: &FilterCriteria) -> Self {
        let subset = apply_filter(records, criteria);
        Self::from_subset(&subset)
    }

    /// Computes every view over an already-filtered subset.
    pub fn from_subset(subset: &[Transaction]) -> Self {
        DashboardSnapshot {
            kpis: compute_kpis(subset),
            sales_trend: sales_trend(subset),
            sales_by_location: sales_by_location(subset),
            sales_by_category: sales_by_category(subset),
            top_customers: top_customers(subset),
            financials_by_year: financials_by_year(subset),
            profit_by_category_year: profit_by_category_year(subset),
            profit_by_location: profit_by_location(subset),
            sales_profit_trend: sales_profit_trend(subset),
            margin_trend: margin_trend(subset),
        }
    }
}
