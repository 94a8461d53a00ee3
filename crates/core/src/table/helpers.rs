//! Helper functions for table sorting: cell parsing and comparators

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;

use super::config::SorterConfig;
use super::error::TableError;
use super::types::DataType;

/// Parse the leading numeric prefix of a cell, like the page's `parseFloat`.
///
/// `"10"` → 10, `" 2.5 h"` → 2.5, `"-Infinity"` → -∞, `"abc"` and `""` → `None` (NaN).
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    // Case-sensitive, like parseFloat; "inf" and "infinity" stay NaN
    if s[end..].starts_with("Infinity") {
        return Some(if bytes.first() == Some(&b'-') { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when it has digits: "5e" reads as 5
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Parse a calendar date/time using the configured formats
pub fn parse_date(text: &str, config: &SorterConfig) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    for format in &config.datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Locale-aware string comparison for text columns
pub struct Collation {
    locale: String,
    collator: Collator,
}

impl Collation {
    pub fn new(locale: &str) -> Result<Self, TableError> {
        let parsed: Locale = locale.parse().map_err(|e: icu_locid::ParserError| TableError::Locale {
            locale: locale.to_string(),
            reason: e.to_string(),
        })?;
        let collator = Collator::try_new(&(&parsed).into(), CollatorOptions::new()).map_err(|e| {
            TableError::Locale {
                locale: locale.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            locale: locale.to_string(),
            collator,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

/// Pre-computed comparison key for one cell
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// `None` is NaN: above every number, equal to other NaNs
    Number(Option<f64>),
    /// `None` is an invalid date: below every valid date, equal to other invalid dates
    Date(Option<NaiveDateTime>),
    Text(String),
}

impl SortKey {
    /// Build the key for a cell's sort text under a declared column type
    pub fn for_cell(data_type: DataType, text: &str, config: &SorterConfig) -> Self {
        match data_type {
            DataType::Number => SortKey::Number(parse_number(text)),
            DataType::Date => SortKey::Date(parse_date(text, config)),
            DataType::Text => SortKey::Text(text.to_string()),
        }
    }

    /// Whether the cell failed to parse as its declared type
    pub fn is_unparsed(&self) -> bool {
        matches!(self, SortKey::Number(None) | SortKey::Date(None))
    }
}

/// Ascending comparison of two keys of the same column
pub fn compare_keys(a: &SortKey, b: &SortKey, collation: &Collation) -> Ordering {
    match (a, b) {
        (SortKey::Number(a), SortKey::Number(b)) => match (a, b) {
            (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        // Option's ordering already puts None first
        (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
        (SortKey::Text(a), SortKey::Text(b)) => collation.compare(a, b),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_parse_number_prefix() {
        assert_eq!(parse_number("10"), Some(10.0));
        assert_eq!(parse_number("  -2.5 points"), Some(-2.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e3x"), Some(1000.0));
        assert_eq!(parse_number("5e"), Some(5.0));
        assert_eq!(parse_number("45 мин"), Some(45.0));
    }

    #[test]
    fn test_parse_number_infinity() {
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number(" -Infinity points"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("+Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("infinity"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_number_rejects_non_numeric() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("nan"), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let config = SorterConfig::default();
        assert_eq!(parse_date("2024-03-05 14:30:00", &config), Some(ymd_hm(2024, 3, 5, 14, 30)));
        assert_eq!(parse_date("2024-03-05T14:30", &config), Some(ymd_hm(2024, 3, 5, 14, 30)));
        assert_eq!(parse_date("05.03.2024 14:30", &config), Some(ymd_hm(2024, 3, 5, 14, 30)));
        assert_eq!(parse_date("2024-03-05", &config), Some(ymd_hm(2024, 3, 5, 0, 0)));
        assert_eq!(parse_date("2024-03-05 14:30:00.250000", &config).map(|d| d.date()),
            NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn test_parse_date_invalid() {
        let config = SorterConfig::default();
        assert_eq!(parse_date("", &config), None);
        assert_eq!(parse_date("Без окончания", &config), None);
        assert_eq!(parse_date("2024-13-40", &config), None);
    }

    #[test]
    fn test_nan_sorts_above_numbers() {
        let collation = Collation::new("ru").unwrap();
        let nan = SortKey::Number(None);
        let ten = SortKey::Number(Some(10.0));
        assert_eq!(compare_keys(&nan, &ten, &collation), Ordering::Greater);
        assert_eq!(compare_keys(&ten, &nan, &collation), Ordering::Less);
        assert_eq!(compare_keys(&nan, &nan, &collation), Ordering::Equal);
    }

    #[test]
    fn test_invalid_date_sorts_below_dates() {
        let collation = Collation::new("ru").unwrap();
        let invalid = SortKey::Date(None);
        let valid = SortKey::Date(Some(ymd_hm(1970, 1, 1, 0, 0)));
        assert_eq!(compare_keys(&invalid, &valid, &collation), Ordering::Less);
        assert_eq!(compare_keys(&valid, &invalid, &collation), Ordering::Greater);
        assert_eq!(compare_keys(&invalid, &invalid, &collation), Ordering::Equal);
    }

    #[test]
    fn test_collation_orders_cyrillic() {
        let collation = Collation::new("ru").unwrap();
        assert_eq!(collation.compare("Абрамов", "Иванов"), Ordering::Less);
        assert_eq!(collation.compare("Яковлев", "Иванов"), Ordering::Greater);
        // Byte order would put every lowercase letter after every uppercase one
        assert_eq!(collation.compare("абрамов", "Иванов"), Ordering::Less);
    }

    #[test]
    fn test_collation_rejects_malformed_locale() {
        assert!(matches!(Collation::new("not a locale!"), Err(TableError::Locale { .. })));
    }
}
