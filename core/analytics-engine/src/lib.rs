//! FILENAME: core/analytics-engine/src/lib.rs
//! Sales analytics engine for the dashboard.
//!
//! This crate turns a flat list of transactions into the derived views the
//! dashboard widgets render. It depends on `model` only for the shared
//! record and filter types.
//!
//! Layers:
//! - `dates`: date normalization (WHAT a record's date means)
//! - `filter`: active-subset selection (WHICH records participate)
//! - `groupby`: the shared grouping primitive (HOW buckets form)
//! - `view`: chart-ready output shapes (WHAT we hand widgets)
//! - `engine`: the aggregation library (HOW views are computed)
//! - `snapshot`: whole-dashboard recomputation per filter change
//! - `assistant`: context payload for the external AI assistant

pub mod assistant;
pub mod dates;
pub mod engine;
pub mod filter;
pub mod groupby;
pub mod snapshot;
pub mod view;

pub use engine::{
    compute_kpis, financials_by_year, margin_trend, profit_by_category_year,
    profit_by_location, sales_by_category, sales_by_location,
    sales_profit_trend, sales_trend, top_customers, NO_DATA_LABEL,
    TOP_CUSTOMER_LIMIT,
};
pub use filter::{apply_filter, FilterOptions};
pub use snapshot::DashboardSnapshot;
pub use view::*;
