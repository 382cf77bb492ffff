//! FILENAME: core/model/src/lib.rs
//! Shared data model for the sales dashboard.
//!
//! This crate holds only the types exchanged between the data source, the
//! analytics engine, and the export formatter: the raw transaction record
//! and the dashboard's filter state. No computation lives here.

pub mod criteria;
pub mod transaction;

pub use criteria::FilterCriteria;
pub use transaction::Transaction;
