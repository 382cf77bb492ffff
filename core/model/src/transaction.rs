//! FILENAME: core/model/src/transaction.rs
//! The immutable sales transaction record every derived view is computed from.

use serde::{Deserialize, Serialize};

/// A single sales transaction as delivered by the data source.
///
/// Numeric fields are assumed finite. The two ratio fields arrive
/// precomputed and are never re-derived from sales/cost by the analytics
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Raw date text in `DD-Mon-YYYY` form (e.g. `01-Jan-2023`).
    /// Parsing is the analytics engine's job; malformed text is kept as-is.
    pub date: String,

    /// Customer name.
    pub entity_name: String,

    pub product: String,

    pub category: String,

    pub location: String,

    /// Currency amounts.
    pub sales: f64,
    pub cost: f64,
    pub margin: f64,
    pub expenses: f64,
    pub profit: f64,

    /// Precomputed margin / sales ratio (0.6 = 60%).
    pub margin_percent: f64,

    /// Precomputed profit / sales ratio.
    pub profit_percent: f64,
}
