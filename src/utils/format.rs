use chrono::{DateTime, NaiveDate};

/// Display form of the order timestamp. The checkout flow stores an ISO
/// datetime string; anything unparseable renders as-is.
pub fn format_order_date(raw: &str) -> String {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.format("%m/%d/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%m/%d/%Y").to_string();
    }
    raw.to_string()
}
