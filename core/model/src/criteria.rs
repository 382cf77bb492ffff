//! FILENAME: core/model/src/criteria.rs
//! Filter state - the six independently optional criteria the dashboard
//! applies to select the active record subset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The dashboard's current filter state.
///
/// Every field is independently optional and an unset field never excludes
/// a record, so `FilterCriteria::default()` is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Inclusive lower date bound, calendar-day granularity.
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper date bound.
    pub end_date: Option<NaiveDate>,

    /// Exact-match location filter (case-sensitive).
    pub location: Option<String>,

    /// Exact-match category filter.
    pub category: Option<String>,

    /// Exact-match product filter.
    pub product: Option<String>,

    /// Exact-match customer filter.
    pub entity_name: Option<String>,
}

impl FilterCriteria {
    /// True when no criterion is set, i.e. the filter passes everything.
    pub fn is_unconstrained(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.location.is_none()
            && self.category.is_none()
            && self.product.is_none()
            && self.entity_name.is_none()
    }
}
