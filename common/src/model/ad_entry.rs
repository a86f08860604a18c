//! A single row of campaign performance input.
//!
//! Fields are kept exactly as typed in the form. Numeric interpretation is
//! deferred to submission time through the `parsed_*` accessors, which never
//! fail: anything that does not start with a number reads as zero.

use serde::{Deserialize, Serialize};

/// One ad of the campaign being analyzed, as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdEntry {
    /// Stable key used by the view to keep rows keyed across removals.
    #[serde(skip)]
    pub key: u64,
    pub name: String,
    pub ad_title: String,
    pub clicks: String,
    pub impressions: String,
    pub current_budget: String,
}

/// The editable fields of an [`AdEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdField {
    Name,
    AdTitle,
    Clicks,
    Impressions,
    CurrentBudget,
}

impl AdEntry {
    pub fn blank(key: u64) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    pub fn field(&self, field: AdField) -> &str {
        match field {
            AdField::Name => &self.name,
            AdField::AdTitle => &self.ad_title,
            AdField::Clicks => &self.clicks,
            AdField::Impressions => &self.impressions,
            AdField::CurrentBudget => &self.current_budget,
        }
    }

    pub fn set_field(&mut self, field: AdField, value: String) {
        let slot = match field {
            AdField::Name => &mut self.name,
            AdField::AdTitle => &mut self.ad_title,
            AdField::Clicks => &mut self.clicks,
            AdField::Impressions => &mut self.impressions,
            AdField::CurrentBudget => &mut self.current_budget,
        };
        *slot = value;
    }

    pub fn parsed_clicks(&self) -> u64 {
        parse_count(&self.clicks)
    }

    pub fn parsed_impressions(&self) -> u64 {
        parse_count(&self.impressions)
    }

    pub fn parsed_budget(&self) -> f64 {
        parse_amount(&self.current_budget)
    }
}

/// Reads the leading integer of `input`.
///
/// Leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit. No digits, negative values and overflow all read as `0`.
pub fn parse_count(input: &str) -> u64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 || negative {
        return 0;
    }
    digits[..end].parse().unwrap_or(0)
}

/// Reads the leading decimal number of `input`.
///
/// Accepts an optional sign, digits with an optional fraction and an optional
/// exponent. Anything unparsable, negative or non-finite reads as `0.0`.
pub fn parse_amount(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }
    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
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

    match s[..end].parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_parse_leading_digits() {
        assert_eq!(parse_count("100"), 100);
        assert_eq!(parse_count("  42"), 42);
        assert_eq!(parse_count("+7"), 7);
        assert_eq!(parse_count("12abc"), 12);
        assert_eq!(parse_count("3.9"), 3);
    }

    #[test]
    fn non_numeric_counts_read_as_zero() {
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count("-"), 0);
        assert_eq!(parse_count("-15"), 0);
        assert_eq!(parse_count("99999999999999999999999"), 0);
    }

    #[test]
    fn amounts_parse_decimal_prefix() {
        assert!((parse_amount("50") - 50.0).abs() < f64::EPSILON);
        assert!((parse_amount("12.5") - 12.5).abs() < f64::EPSILON);
        assert!((parse_amount(".5") - 0.5).abs() < f64::EPSILON);
        assert!((parse_amount("3.") - 3.0).abs() < f64::EPSILON);
        assert!((parse_amount("1e3") - 1000.0).abs() < f64::EPSILON);
        assert!((parse_amount("2e") - 2.0).abs() < f64::EPSILON);
        assert!((parse_amount("19.99 USD") - 19.99).abs() < f64::EPSILON);
    }

    #[test]
    fn non_numeric_amounts_read_as_zero() {
        for input in ["", "abc", ".", "-", "e5", "-20", "1e400", "NaN"] {
            assert_eq!(parse_amount(input), 0.0, "input {input:?}");
        }
    }

    #[test]
    fn set_field_touches_only_that_field() {
        let mut entry = AdEntry::blank(1);
        entry.set_field(AdField::AdTitle, "Title".to_string());

        assert_eq!(entry.field(AdField::AdTitle), "Title");
        assert_eq!(entry.name, "");
        assert_eq!(entry.clicks, "");
        assert_eq!(entry.impressions, "");
        assert_eq!(entry.current_budget, "");
        assert_eq!(entry.key, 1);
    }
}
