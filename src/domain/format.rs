use std::str::FromStr;

use num_format::{Grouping, Locale, ToFormattedString};
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder shown for any value that is missing or not a number.
pub const MISSING: &str = "-";

/// Locale default maximum fraction digits for plain numbers.
pub const NUMBER_MAX_FRACTION_DIGITS: usize = 3;
pub const PRICE_MAX_FRACTION_DIGITS: usize = 2;

/// Locale-aware number rendering used by the stats panel and chart axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberFormat {
    locale: Locale,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(Locale::en)
    }
}

impl NumberFormat {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Unknown locale names fall back to `en`.
    pub fn from_locale_name(name: &str) -> Self {
        Locale::from_name(name)
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn number(&self, value: Option<f64>) -> String {
        self.decimal(value, NUMBER_MAX_FRACTION_DIGITS)
    }

    pub fn price(&self, value: Option<f64>) -> String {
        self.decimal(value, PRICE_MAX_FRACTION_DIGITS)
    }

    /// Groups the integer part per the locale and keeps at most
    /// `max_fraction_digits` fraction digits, trailing zeros dropped.
    /// Ties round away from zero.
    pub fn decimal(&self, value: Option<f64>, max_fraction_digits: usize) -> String {
        let Some(value) = value.filter(|v| !v.is_nan()) else {
            return MISSING.to_string();
        };
        if value.is_infinite() {
            let sign = if value < 0.0 { self.locale.minus_sign() } else { "" };
            return format!("{}∞", sign);
        }

        let (int_digits, fraction) = round_half_away_from_zero(value.abs(), max_fraction_digits);
        // -0.001 rounds to zero and is shown without a sign
        let negative = value < 0.0 && (int_digits.bytes().any(|b| b != b'0') || !fraction.is_empty());

        let mut out = String::with_capacity(int_digits.len() + fraction.len() + 8);
        if negative {
            out.push_str(self.locale.minus_sign());
        }
        out.push_str(&self.group(&int_digits));
        if !fraction.is_empty() {
            out.push_str(self.locale.decimal());
            out.push_str(&fraction);
        }
        out
    }

    fn group(&self, int_digits: &str) -> String {
        match int_digits.parse::<u128>() {
            Ok(n) => n.to_formatted_string(&self.locale),
            Err(_) => group_digits(int_digits, self.locale.separator(), self.locale.grouping()),
        }
    }
}

/// Integer digits and trimmed fraction digits of `abs`. Rounds the shortest
/// decimal that reads back as `abs`, so `1.005` becomes `1.01`.
fn round_half_away_from_zero(abs: f64, max_fraction_digits: usize) -> (String, String) {
    let text = match Decimal::from_str(&abs.to_string()) {
        Ok(shortest) => shortest
            .round_dp_with_strategy(max_fraction_digits as u32, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        // outside Decimal's range
        Err(_) => format!("{:.*}", max_fraction_digits, abs),
    };
    let (int_digits, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    (int_digits.to_string(), fraction.trim_end_matches('0').to_string())
}

/// Manual grouping for integer parts too long for `u128`.
fn group_digits(digits: &str, separator: &str, grouping: Grouping) -> String {
    let (first, rest) = match grouping {
        Grouping::Standard => (3, 3),
        Grouping::Indian => (3, 2),
        Grouping::Posix => return digits.to_string(),
    };

    let mut groups = Vec::new();
    let mut end = digits.len();
    let mut size = first;
    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
        size = rest;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    groups.join(separator)
}

pub fn fmt_number(value: Option<f64>) -> String {
    NumberFormat::default().number(value)
}

pub fn fmt_price(value: Option<f64>) -> String {
    NumberFormat::default().price(value)
}
