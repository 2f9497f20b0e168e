//! Display formatting shared by the HTML and terminal views.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};

use crate::constants::DEFAULT_DATE_FORMAT;
use crate::event::parse_event_date;

/// Shown for dates that can't be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format an event date string with a strftime `pattern`.
///
/// Produces e.g. "Thu, Jan 1, 2099" with the default pattern.
pub fn format_date(date: &str, pattern: &str) -> String {
    let Some(parsed) = parse_event_date(date) else {
        return INVALID_DATE.to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", parsed.format(pattern)).is_err() {
        return parsed.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}

/// Whether `pattern` is a usable strftime pattern.
pub fn is_valid_date_format(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

/// Format an amount as US dollars: "$1,234.50".
///
/// Non-finite amounts render as "$0.00".
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let magnitude = format!("{:.2}", amount.abs());
    let (dollars, cents) = magnitude.split_once('.').unwrap_or((magnitude.as_str(), "00"));
    let sign = if amount < 0.0 && magnitude != "0.00" { "-" } else { "" };

    format!("{}${}.{}", sign, group_thousands(dollars), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Escape text for literal display inside HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventForm;

    #[test]
    fn date_default_pattern() {
        assert_eq!(format_date("2099-01-01", DEFAULT_DATE_FORMAT), "Thu, Jan 1, 2099");
        assert_eq!(format_date("2026-10-16", DEFAULT_DATE_FORMAT), "Fri, Oct 16, 2026");
    }

    #[test]
    fn date_custom_pattern() {
        assert_eq!(format_date("2026-03-20", "%d/%m/%Y"), "20/03/2026");
    }

    #[test]
    fn date_unparsable() {
        assert_eq!(format_date("", DEFAULT_DATE_FORMAT), INVALID_DATE);
        assert_eq!(format_date("someday", DEFAULT_DATE_FORMAT), INVALID_DATE);
    }

    #[test]
    fn date_broken_pattern_falls_back_to_default() {
        assert!(!is_valid_date_format("%Y-%"));
        assert!(is_valid_date_format(DEFAULT_DATE_FORMAT));
        assert_eq!(format_date("2099-01-01", "%Y-%"), "Thu, Jan 1, 2099");
    }

    #[test]
    fn currency_basic() {
        assert_eq!(format_currency(500.0), "$500.00");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(19.999), "$20.00");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(999.0), "$999.00");
    }

    #[test]
    fn currency_large_amounts_keep_every_digit() {
        let budget = EventForm {
            budget: "1e20".to_string(),
            ..EventForm::default()
        }
        .budget();

        assert_eq!(format_currency(budget), "$100,000,000,000,000,000,000.00");
        assert_eq!(format_currency(2e17 + 0.5), "$200,000,000,000,000,000.00");
    }

    #[test]
    fn currency_zero_and_non_finite() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-0.0), "$0.00");
        assert_eq!(format_currency(f64::NAN), "$0.00");
        assert_eq!(format_currency(f64::INFINITY), "$0.00");
    }

    #[test]
    fn currency_negative() {
        assert_eq!(format_currency(-42.1), "-$42.10");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn escape_markup() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
        assert_eq!(escape_html(r#"Tom & "Jerry's""#), "Tom &amp; &quot;Jerry&#39;s&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
