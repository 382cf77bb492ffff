//! FILENAME: core/analytics-engine/src/filter.rs
//! Record Filter - the conjunctive predicate that selects the active
//! subset, plus the distinct-value index the filter dropdowns are
//! populated from.

use model::{FilterCriteria, Transaction};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::dates::parse_transaction_date;

/// Applies the filter, returning the active subset in original record
/// order.
///
/// A record passes iff every set criterion matches; an unset criterion
/// never excludes. The result is an owned copy either way, so the
/// no-criteria case is behaviorally identical to returning the input.
pub fn apply_filter(records: &[Transaction], criteria: &FilterCriteria) -> Vec<Transaction> {
    if criteria.is_unconstrained() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}

/// The conjunctive predicate for one record. Categorical criteria are
/// case-sensitive exact equality; the date range is inclusive on both ends
/// at calendar-day granularity.
fn matches(record: &Transaction, criteria: &FilterCriteria) -> bool {
    if let Some(location) = &criteria.location {
        if record.location != *location {
            return false;
        }
    }
    if let Some(category) = &criteria.category {
        if record.category != *category {
            return false;
        }
    }
    if let Some(product) = &criteria.product {
        if record.product != *product {
            return false;
        }
    }
    if let Some(entity_name) = &criteria.entity_name {
        if record.entity_name != *entity_name {
            return false;
        }
    }

    if criteria.start_date.is_some() || criteria.end_date.is_some() {
        let date = parse_transaction_date(&record.date);
        if let Some(start) = criteria.start_date {
            if date < start {
                return false;
            }
        }
        if let Some(end) = criteria.end_date {
            if date > end {
                return false;
            }
        }
    }

    true
}

// ============================================================================
// FILTER OPTIONS INDEX
// ============================================================================

/// Distinct values per categorical field, offered by the UI's filter
/// dropdowns. Computed once from the full unfiltered dataset and
/// independent of the current filter state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub categories: Vec<String>,
    pub products: Vec<String>,
    pub entity_names: Vec<String>,
}

impl FilterOptions {
    /// Scans the dataset once, keeping first-seen order per field.
    pub fn from_records(records: &[Transaction]) -> Self {
        let mut options = FilterOptions::default();
        let mut seen_locations: FxHashSet<&str> = FxHashSet::default();
        let mut seen_categories: FxHashSet<&str> = FxHashSet::default();
        let mut seen_products: FxHashSet<&str> = FxHashSet::default();
        let mut seen_entities: FxHashSet<&str> = FxHashSet::default();

        for record in records {
            if seen_locations.insert(&record.location) {
                options.locations.push(record.location.clone());
            }
            if seen_categories.insert(&record.category) {
                options.categories.push(record.category.clone());
            }
            if seen_products.insert(&record.product) {
                options.products.push(record.product.clone());
            }
            if seen_entities.insert(&record.entity_name) {
                options.entity_names.push(record.entity_name.clone());
            }
        }

        options
    }
}
