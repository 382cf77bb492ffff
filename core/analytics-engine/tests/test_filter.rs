//! FILENAME: tests/test_filter.rs
//! Integration tests for the record filter and the filter-options index.

mod common;

use analytics_engine::{apply_filter, compute_kpis, FilterOptions};
use chrono::NaiveDate;
use common::{transaction, two_record_sample};
use model::FilterCriteria;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn unset_criteria_pass_everything() {
    let records = two_record_sample();
    let subset = apply_filter(&records, &FilterCriteria::default());
    assert_eq!(subset, records);
}

#[test]
fn filtering_is_idempotent() {
    let records = two_record_sample();
    let criteria = FilterCriteria {
        location: Some("NY".to_string()),
        ..Default::default()
    };

    let once = apply_filter(&records, &criteria);
    let twice = apply_filter(&once, &criteria);
    assert_eq!(once, twice);
}

#[test]
fn categorical_match_is_exact_and_case_sensitive() {
    let records = two_record_sample();

    let criteria = FilterCriteria {
        location: Some("NY".to_string()),
        ..Default::default()
    };
    let subset = apply_filter(&records, &criteria);
    assert_eq!(subset.len(), 1);
    assert_eq!(subset[0].entity_name, "A");

    let criteria = FilterCriteria {
        location: Some("ny".to_string()),
        ..Default::default()
    };
    assert!(apply_filter(&records, &criteria).is_empty());
}

#[test]
fn date_bounds_are_inclusive() {
    let records = two_record_sample();

    // Start bound exactly on record B's date keeps B.
    let criteria = FilterCriteria {
        start_date: Some(date(2023, 2, 1)),
        ..Default::default()
    };
    let subset = apply_filter(&records, &criteria);
    assert_eq!(subset.len(), 1);
    assert_eq!(subset[0].entity_name, "B");

    // End bound exactly on record A's date keeps A.
    let criteria = FilterCriteria {
        end_date: Some(date(2023, 1, 1)),
        ..Default::default()
    };
    let subset = apply_filter(&records, &criteria);
    assert_eq!(subset.len(), 1);
    assert_eq!(subset[0].entity_name, "A");
}

#[test]
fn start_date_filter_shifts_the_top_kpis() {
    let records = two_record_sample();
    let criteria = FilterCriteria {
        start_date: Some(date(2023, 2, 1)),
        ..Default::default()
    };

    let subset = apply_filter(&records, &criteria);
    assert_eq!(subset.len(), 1);

    let kpis = compute_kpis(&subset);
    assert_eq!(kpis.top_location, "LA");
    assert_eq!(kpis.top_customer, "B");
}

#[test]
fn all_criteria_combine_conjunctively() {
    let records = vec![
        transaction("01-Jan-2023", "A", "P1", "X", "NY", 100.0, 40.0, 10.0),
        transaction("05-Jan-2023", "A", "P1", "Y", "NY", 150.0, 60.0, 15.0),
        transaction("10-Jan-2023", "B", "P1", "X", "NY", 200.0, 80.0, 20.0),
    ];

    let criteria = FilterCriteria {
        start_date: Some(date(2023, 1, 1)),
        end_date: Some(date(2023, 1, 31)),
        location: Some("NY".to_string()),
        category: Some("X".to_string()),
        product: Some("P1".to_string()),
        entity_name: Some("A".to_string()),
    };

    let subset = apply_filter(&records, &criteria);
    assert_eq!(subset.len(), 1);
    assert_eq!(subset[0].sales, 100.0);
}

#[test]
fn filter_preserves_input_order() {
    let records = vec![
        transaction("01-Jan-2023", "C", "P1", "X", "NY", 1.0, 0.0, 0.0),
        transaction("01-Jan-2023", "A", "P1", "X", "LA", 2.0, 0.0, 0.0),
        transaction("01-Jan-2023", "B", "P1", "X", "NY", 3.0, 0.0, 0.0),
    ];

    let criteria = FilterCriteria {
        location: Some("NY".to_string()),
        ..Default::default()
    };
    let subset = apply_filter(&records, &criteria);
    let names: Vec<&str> = subset.iter().map(|r| r.entity_name.as_str()).collect();
    assert_eq!(names, vec!["C", "B"]);
}

#[test]
fn filter_options_keep_first_seen_order() {
    let records = vec![
        transaction("01-Jan-2023", "B", "P2", "Y", "LA", 1.0, 0.0, 0.0),
        transaction("01-Jan-2023", "A", "P1", "X", "NY", 1.0, 0.0, 0.0),
        transaction("01-Jan-2023", "B", "P2", "Y", "LA", 1.0, 0.0, 0.0),
        transaction("01-Jan-2023", "C", "P1", "X", "SF", 1.0, 0.0, 0.0),
    ];

    let options = FilterOptions::from_records(&records);
    assert_eq!(options.locations, vec!["LA", "NY", "SF"]);
    assert_eq!(options.categories, vec!["Y", "X"]);
    assert_eq!(options.products, vec!["P2", "P1"]);
    assert_eq!(options.entity_names, vec!["B", "A", "C"]);
}

#[test]
fn filter_options_of_empty_dataset_are_empty() {
    let options = FilterOptions::from_records(&[]);
    assert!(options.locations.is_empty());
    assert!(options.categories.is_empty());
    assert!(options.products.is_empty());
    assert!(options.entity_names.is_empty());
}
