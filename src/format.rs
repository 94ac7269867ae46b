//! Display Formatting
//!
//! Price and date rendering shared by the form, history and print views.

use chrono::{DateTime, NaiveDateTime};

/// Two decimals with thousands separators, e.g. `1,234.50`
pub fn format_price(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 rounds to 0.00 and prints unsigned
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Parse API timestamps. The backend sends ISO-8601, with or without offset.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// `May 3, 2024, 08:15 AM`; unparsable input is shown as-is
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// `5/3/2024`, used on the printed form
pub fn format_short_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Minimal escaping for text interpolated into generated HTML
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(10.0), "10.00");
        assert_eq!(format_price(4.256), "4.26");
        assert_eq!(format_price(1234.5), "1,234.50");
        assert_eq!(format_price(1234567.891), "1,234,567.89");
        assert_eq!(format_price(-2500.0), "-2,500.00");
        assert_eq!(format_price(f64::NAN), "0.00");
    }

    #[test]
    fn test_format_date_naive() {
        assert_eq!(format_date("2024-05-03T08:15:00"), "May 3, 2024, 08:15 AM");
        assert_eq!(format_date("2024-12-25T17:05:09.123000"), "Dec 25, 2024, 05:05 PM");
    }

    #[test]
    fn test_format_date_with_offset() {
        assert_eq!(format_date("2024-05-03T08:15:00+00:00"), "May 3, 2024, 08:15 AM");
        assert_eq!(format_date("2024-05-03T08:15:00Z"), "May 3, 2024, 08:15 AM");
    }

    #[test]
    fn test_format_date_passthrough() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2024-05-03T08:15:00"), "5/3/2024");
        assert_eq!(format_short_date("2024-11-20 10:00:00"), "11/20/2024");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }
}
