//! FILENAME: tests/common/mod.rs
//! Shared sales fixtures for the analytics integration tests.

#![allow(dead_code)]

use model::Transaction;

/// Builds a transaction with the derived numeric fields filled in from
/// sales, cost, and expenses the way the source data ships them.
pub fn transaction(
    date: &str,
    entity_name: &str,
    product: &str,
    category: &str,
    location: &str,
    sales: f64,
    cost: f64,
    expenses: f64,
) -> Transaction {
    let margin = sales - cost;
    let profit = margin - expenses;
    Transaction {
        date: date.to_string(),
        entity_name: entity_name.to_string(),
        product: product.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        sales,
        cost,
        margin,
        expenses,
        profit,
        margin_percent: if sales > 0.0 { margin / sales } else { 0.0 },
        profit_percent: if sales > 0.0 { profit / sales } else { 0.0 },
    }
}

/// The two-record dataset the KPI contract is specified against:
/// A/NY/P1/X in January, B/LA/P2/Y in February, 100 vs 200 sales.
pub fn two_record_sample() -> Vec<Transaction> {
    vec![
        transaction("01-Jan-2023", "A", "P1", "X", "NY", 100.0, 40.0, 10.0),
        transaction("01-Feb-2023", "B", "P2", "Y", "LA", 200.0, 80.0, 20.0),
    ]
}

/// Records spanning a year boundary, deliberately out of input order.
pub fn year_boundary_sample() -> Vec<Transaction> {
    vec![
        transaction("05-Jan-2023", "A", "P1", "X", "NY", 300.0, 100.0, 20.0),
        transaction("15-Dec-2022", "B", "P2", "Y", "LA", 100.0, 50.0, 10.0),
        transaction("20-Jan-2023", "C", "P1", "X", "SF", 200.0, 80.0, 15.0),
        transaction("01-Mar-2022", "A", "P3", "Z", "NY", 400.0, 150.0, 30.0),
    ]
}

/// A larger mixed dataset: 12 customers so the top-10 cutoff is exercised,
/// two categories, three locations, two years.
pub fn ranking_sample() -> Vec<Transaction> {
    let mut records = Vec::new();
    for i in 0..12 {
        let sales = 100.0 * (i + 1) as f64;
        let date = if i % 2 == 0 { "10-Apr-2022" } else { "10-Apr-2023" };
        let category = if i % 2 == 0 { "X" } else { "Y" };
        let location = ["NY", "LA", "SF"][i % 3];
        records.push(transaction(
            date,
            &format!("Customer{:02}", i),
            "P1",
            category,
            location,
            sales,
            sales * 0.4,
            sales * 0.1,
        ));
    }
    records
}
