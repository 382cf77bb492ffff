//! FILENAME: core/analytics-engine/src/engine.rs
//! Aggregation Library - pure reducers from the active subset to chart data.
//!
//! Every function here is group-then-reduce over `groupby::group_by`: the
//! aggregator supplies only the key and the per-group reduction. All of
//! them take the active subset (post-filter), mutate nothing, and return a
//! well-formed empty result for empty input.
//!
//! Two rules hold throughout:
//! - "top" selections compare with strict `>`, so ties go to the group
//!   encountered first and output stays deterministic
//! - every ratio guards its zero-denominator case and yields 0.0 instead
//!   of NaN or infinity

use chrono::Datelike;
use model::Transaction;
use rustc_hash::FxHashMap;

use crate::dates::{month_abbrev, parse_transaction_date};
use crate::groupby::{group_by, sum_by, total};
use crate::view::{
    KpiSummary, MarginTrendPoint, NameValue, ProfitByCategoryYear,
    SalesProfitPoint, StackedYearRow, TrendPoint, YearFinancials,
};

/// Sentinel label for the top-KPIs over an empty subset.
pub const NO_DATA_LABEL: &str = "N/A";

/// How many entries the customer ranking keeps.
pub const TOP_CUSTOMER_LIMIT: usize = 10;

// ============================================================================
// KPI SUMMARY
// ============================================================================

/// Computes the headline KPI figures over the active subset.
pub fn compute_kpis(records: &[Transaction]) -> KpiSummary {
    let total_sales = total(records, |r| r.sales);
    let total_cost = total(records, |r| r.cost);
    let total_margin = total(records, |r| r.margin);

    let avg_margin_percent = if total_sales > 0.0 {
        total_margin / total_sales
    } else {
        0.0
    };

    KpiSummary {
        total_sales,
        total_cost,
        avg_margin_percent,
        top_location: top_by(records, |r| r.location.as_str()),
        top_product: top_by(records, |r| r.product.as_str()),
        top_customer: top_by(records, |r| r.entity_name.as_str()),
    }
}

/// Picks the group with the highest summed sales for one categorical field.
/// Strict `>` keeps the first-encountered group on ties.
fn top_by<'a, F>(records: &'a [Transaction], field: F) -> String
where
    F: Fn(&'a Transaction) -> &'a str,
{
    let mut best_label = NO_DATA_LABEL;
    let mut best_value = f64::NEG_INFINITY;

    for (name, bucket) in group_by(records, field) {
        let value = sum_by(&bucket, |r| r.sales);
        if value > best_value {
            best_value = value;
            best_label = name;
        }
    }

    best_label.to_string()
}

// ============================================================================
// MONTHLY TRENDS
// ============================================================================

/// Month bucket key: (year, 0-based month).
type MonthKey = (i32, u32);

fn month_key(record: &Transaction) -> MonthKey {
    let date = parse_transaction_date(&record.date);
    (date.year(), date.month0())
}

fn month_label(key: MonthKey) -> String {
    format!("{} {}", month_abbrev(key.1), key.0)
}

/// Groups the subset into month buckets sorted chronologically ascending.
///
/// Sorting happens on the (year, month) key, never on the label text:
/// lexical order would put "2023-10" before "2023-9".
fn month_buckets(records: &[Transaction]) -> Vec<(MonthKey, Vec<&Transaction>)> {
    let mut buckets = group_by(records, month_key);
    buckets.sort_by_key(|(key, _)| *key);
    buckets
}

/// Monthly sales totals.
pub fn sales_trend(records: &[Transaction]) -> Vec<TrendPoint> {
    month_buckets(records)
        .into_iter()
        .map(|(key, bucket)| TrendPoint {
            label: month_label(key),
            sales: sum_by(&bucket, |r| r.sales),
        })
        .collect()
}

/// Monthly sales and profit totals.
pub fn sales_profit_trend(records: &[Transaction]) -> Vec<SalesProfitPoint> {
    month_buckets(records)
        .into_iter()
        .map(|(key, bucket)| SalesProfitPoint {
            label: month_label(key),
            sales: sum_by(&bucket, |r| r.sales),
            profit: sum_by(&bucket, |r| r.profit),
        })
        .collect()
}

/// Monthly blended margin ratio: per-bucket margin / sales, 0 for buckets
/// with no sales. Only the label and the ratio are emitted.
pub fn margin_trend(records: &[Transaction]) -> Vec<MarginTrendPoint> {
    month_buckets(records)
        .into_iter()
        .map(|(key, bucket)| {
            let margin = sum_by(&bucket, |r| r.margin);
            let sales = sum_by(&bucket, |r| r.sales);
            MarginTrendPoint {
                label: month_label(key),
                margin_percent: if sales > 0.0 { margin / sales } else { 0.0 },
            }
        })
        .collect()
}

// ============================================================================
// CATEGORICAL TOTALS
// ============================================================================

/// Sums one numeric field per distinct value of one categorical field, in
/// first-seen order.
fn sum_by_field<'a, K, V>(records: &'a [Transaction], key: K, value: V) -> Vec<NameValue>
where
    K: Fn(&'a Transaction) -> &'a str,
    V: Fn(&Transaction) -> f64,
{
    group_by(records, key)
        .into_iter()
        .map(|(name, bucket)| NameValue {
            name: name.to_string(),
            value: sum_by(&bucket, &value),
        })
        .collect()
}

/// Sales per location.
pub fn sales_by_location(records: &[Transaction]) -> Vec<NameValue> {
    sum_by_field(records, |r| r.location.as_str(), |r| r.sales)
}

/// Sales per category.
pub fn sales_by_category(records: &[Transaction]) -> Vec<NameValue> {
    sum_by_field(records, |r| r.category.as_str(), |r| r.sales)
}

/// Profit per location.
pub fn profit_by_location(records: &[Transaction]) -> Vec<NameValue> {
    sum_by_field(records, |r| r.location.as_str(), |r| r.profit)
}

// ============================================================================
// RANKING
// ============================================================================

/// Top customers by summed sales, descending, truncated to
/// `TOP_CUSTOMER_LIMIT`. The sort is stable, so grouping insertion order
/// decides ties at the cutoff.
pub fn top_customers(records: &[Transaction]) -> Vec<NameValue> {
    let mut totals = sum_by_field(records, |r| r.entity_name.as_str(), |r| r.sales);
    totals.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    totals.truncate(TOP_CUSTOMER_LIMIT);
    totals
}

// ============================================================================
// YEARLY ROLLUPS
// ============================================================================

fn year_key(record: &Transaction) -> i32 {
    parse_transaction_date(&record.date).year()
}

/// Per-year sums of sales, cost, expenses, and profit, ascending by year.
pub fn financials_by_year(records: &[Transaction]) -> Vec<YearFinancials> {
    let mut buckets = group_by(records, year_key);
    buckets.sort_by_key(|(year, _)| *year);

    buckets
        .into_iter()
        .map(|(year, bucket)| YearFinancials {
            name: year.to_string(),
            sales: sum_by(&bucket, |r| r.sales),
            cost: sum_by(&bucket, |r| r.cost),
            expenses: sum_by(&bucket, |r| r.expenses),
            profit: sum_by(&bucket, |r| r.profit),
        })
        .collect()
}

/// Year x category profit matrix for the stacked chart.
///
/// One row per year (ascending numeric order) with one flattened field per
/// category seen that year, plus the distinct category list in first-seen
/// order across the whole subset for the widget's legend.
pub fn profit_by_category_year(records: &[Transaction]) -> ProfitByCategoryYear {
    let categories: Vec<String> = group_by(records, |r| r.category.as_str())
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect();

    let mut years = group_by(records, year_key);
    years.sort_by_key(|(year, _)| *year);

    let data = years
        .into_iter()
        .map(|(year, bucket)| {
            let mut values: FxHashMap<String, f64> = FxHashMap::default();
            for record in &bucket {
                *values.entry(record.category.clone()).or_insert(0.0) += record.profit;
            }
            StackedYearRow {
                name: year.to_string(),
                values,
            }
        })
        .collect();

    ProfitByCategoryYear { data, categories }
}
