//! Date helper functions

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Parse a date string using a date-fns-compatible format string
///
/// # Examples
/// ```ignore
/// parse_date("05-01-2024", "dd-MM-yyyy") // -> 2024-01-05
/// ```
pub fn parse_date(value: &str, format: &str) -> Result<NaiveDate> {
    let chrono_format = datefns_to_chrono_format(format);
    NaiveDate::parse_from_str(value.trim(), &chrono_format)
        .with_context(|| format!("invalid date {:?} for format {:?}", value, format))
}

/// Format a date using a date-fns-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMM dd yyyy") // -> "Jan 05 2024"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = datefns_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Convert date-fns format tokens to chrono format
fn datefns_to_chrono_format(format: &str) -> String {
    // Process from longest to shortest patterns within each category
    let replacements = [
        // Year
        ("yyyy", "%Y"),
        ("yy", "%y"),
        // Month
        ("MMMM", "%B"), // Full month name
        ("MMM", "%b"),  // Abbreviated month name
        ("MM", "%m"),   // Two-digit month
        // Front-matter in the wild spells the month token in lowercase too;
        // chrono has a single month specifier
        ("mm", "%m"),
        // Day of month
        ("dd", "%d"),
        // Day of week
        ("EEEE", "%A"),
        ("EEE", "%a"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}
