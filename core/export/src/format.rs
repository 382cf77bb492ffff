//! FILENAME: core/export/src/format.rs
//! Display formatting for dashboard widgets - currency and percent labels.

/// Formats a currency amount the way the KPI cards show it: dollar sign,
/// thousands separators, no fraction digits. Negatives render as `-$1,234`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let separated = add_thousands_separator(&digits);
    if rounded < 0.0 {
        format!("-${}", separated)
    } else {
        format!("${}", separated)
    }
}

/// Formats a ratio as a percent label with one fraction digit
/// (0.6 becomes "60.0%").
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Inserts commas every three digits, counting from the right.
fn add_thousands_separator(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}
