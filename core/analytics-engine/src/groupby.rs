//! FILENAME: core/analytics-engine/src/groupby.rs
//! The shared grouping primitive every aggregator is built on.
//!
//! Groups are insertion-ordered: the first record that introduces a key
//! creates its bucket, and buckets are emitted in creation order. Both the
//! first-seen output order of categorical series and the first-wins
//! tie-break of the top-KPI selections rely on this.

use std::hash::Hash;

use model::Transaction;
use rustc_hash::FxHashMap;

/// Groups records by a derived key, preserving first-seen key order.
///
/// A position map over an ordered bucket list keeps lookup O(1) while the
/// output order stays deterministic for a given input order.
pub fn group_by<'a, K, F>(
    records: &'a [Transaction],
    mut key_fn: F,
) -> Vec<(K, Vec<&'a Transaction>)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&'a Transaction) -> K,
{
    let mut positions: FxHashMap<K, usize> = FxHashMap::default();
    let mut buckets: Vec<(K, Vec<&'a Transaction>)> = Vec::new();

    for record in records {
        let key = key_fn(record);
        match positions.get(&key) {
            Some(&index) => buckets[index].1.push(record),
            None => {
                positions.insert(key.clone(), buckets.len());
                buckets.push((key, vec![record]));
            }
        }
    }

    buckets
}

/// Sums one numeric field across a bucket. The accumulator is seeded at
/// zero, so an empty bucket sums to 0.0.
pub fn sum_by<F>(records: &[&Transaction], field_fn: F) -> f64
where
    F: Fn(&Transaction) -> f64,
{
    records.iter().fold(0.0, |acc, record| acc + field_fn(record))
}

/// Sums one numeric field across the whole subset.
pub fn total<F>(records: &[Transaction], field_fn: F) -> f64
where
    F: Fn(&Transaction) -> f64,
{
    records.iter().fold(0.0, |acc, record| acc + field_fn(record))
}
