//! FILENAME: core/analytics-engine/src/assistant.rs
//! The analytics side of the AI-assistant boundary.
//!
//! The assistant itself is an external network service. This module only
//! prepares the context payload it receives with every question (the KPI
//! summary plus a bounded sample of the active subset) and defines how
//! that boundary's failures surface to the user. Nothing here performs
//! I/O, and no failure on the assistant side ever reaches the aggregation
//! pipeline.

use model::Transaction;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::KpiSummary;

/// How many rows of the active subset the assistant sees.
pub const SAMPLE_LIMIT: usize = 50;

/// One sample row, slimmed to the fields the assistant reasons about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRow {
    pub date: String,
    pub location: String,
    pub category: String,
    pub sales: f64,
    pub profit: f64,
}

/// The context payload handed to the assistant alongside a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantContext {
    pub kpis: KpiSummary,
    pub sample_transactions: Vec<SampleRow>,
}

impl AssistantContext {
    /// Builds the payload from the KPI summary and the active subset,
    /// keeping the first `SAMPLE_LIMIT` rows.
    pub fn new(kpis: KpiSummary, subset: &[Transaction]) -> Self {
        let sample_transactions = subset
            .iter()
            .take(SAMPLE_LIMIT)
            .map(|record| SampleRow {
                date: record.date.clone(),
                location: record.location.clone(),
                category: record.category.clone(),
                sales: record.sales,
                profit: record.profit,
            })
            .collect();

        AssistantContext {
            kpis,
            sample_transactions,
        }
    }

    /// Serializes the context for prompt embedding.
    pub fn context_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Failure modes of the external assistant service. These are absorbed at
/// the boundary and shown inline in the chat panel.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("assistant service unreachable: {0}")]
    Unreachable(String),

    #[error("assistant returned an unusable response: {0}")]
    InvalidResponse(String),

    #[error("assistant is not configured (missing API key)")]
    NotConfigured,
}

impl AssistantError {
    /// The advisory shown in place of an answer.
    pub fn advisory_message(&self) -> String {
        format!(
            "The assistant is unavailable right now ({}). Dashboard data is unaffected.",
            self
        )
    }
}
