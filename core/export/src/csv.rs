//! FILENAME: core/export/src/csv.rs
//! CSV Export Formatter - serializes the active subset for download.

use std::io::Write;

use chrono::NaiveDate;
use model::Transaction;

use crate::error::ExportError;

/// Column order is fixed; downstream consumers rely on it.
pub const CSV_HEADER: &str = "Date,Entity Name,Product,Category,Location,\
Sales,Cost,Margin,Expenses,Profit,Margin %,Profit %";

/// Renders the subset as a comma-delimited UTF-8 document: one header row,
/// then one newline-terminated row per record. String fields are quoted;
/// numeric fields, including the two ratios rendered as `xx.xx%`, are not.
pub fn to_csv(records: &[Transaction]) -> String {
    let mut out = String::with_capacity(64 * (records.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records {
        push_row(&mut out, record);
    }
    out
}

/// Streams the same document to a writer.
pub fn write_csv<W: Write>(writer: &mut W, records: &[Transaction]) -> Result<(), ExportError> {
    writer.write_all(to_csv(records).as_bytes())?;
    Ok(())
}

/// Download name for an export taken on the given date.
pub fn suggested_filename(date: NaiveDate) -> String {
    format!("sales_data_{}.csv", date.format("%Y-%m-%d"))
}

fn push_row(out: &mut String, record: &Transaction) {
    let row = [
        quoted(&record.date),
        quoted(&record.entity_name),
        quoted(&record.product),
        quoted(&record.category),
        quoted(&record.location),
        record.sales.to_string(),
        record.cost.to_string(),
        record.margin.to_string(),
        record.expenses.to_string(),
        record.profit.to_string(),
        percent_cell(record.margin_percent),
        percent_cell(record.profit_percent),
    ];
    out.push_str(&row.join(","));
    out.push('\n');
}

/// Quotes a string field, doubling any embedded quotes.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Ratio fields render as percentages with two decimals, e.g. `60.00%`.
fn percent_cell(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}
