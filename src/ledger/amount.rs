use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimals shown for every currency and percentage output.
pub const DISPLAY_SCALE: u32 = 2;

/// User-entered numeric text paired with its leniently parsed value.
///
/// The raw text is kept verbatim so a value typed as `"250"` round-trips as
/// `"250"` rather than `"250.00"`; arithmetic always goes through `value`,
/// which is zero whenever the text has no numeric prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawText", into = "String")]
pub struct NumericField {
    raw: String,
    value: Decimal,
}

impl NumericField {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = parse_lenient(&raw).unwrap_or(Decimal::ZERO);
        Self { raw, value }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a computed field, formatted with two decimals.
    pub fn derived(value: Decimal) -> Self {
        Self {
            raw: format_fixed(value),
            value: round_to_cents(value),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for NumericField {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for NumericField {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<NumericField> for String {
    fn from(field: NumericField) -> Self {
        field.raw
    }
}

/// Accepted on-disk shapes for a numeric field: text, a bare JSON number, or null.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Number(serde_json::Number),
    Null,
}

impl From<RawText> for NumericField {
    fn from(raw: RawText) -> Self {
        match raw {
            RawText::Text(text) => Self::new(text),
            RawText::Number(number) => Self::new(number.to_string()),
            RawText::Null => Self::empty(),
        }
    }
}

/// Reads the longest numeric prefix of `text`, ignoring leading whitespace and
/// any trailing garbage. Returns `None` when no digits are found or the value
/// does not fit a `Decimal`.
pub fn parse_lenient(text: &str) -> Option<Decimal> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut idx = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            idx += 1;
            true
        }
        Some(b'+') => {
            idx += 1;
            false
        }
        _ => false,
    };

    let int_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let int_digits = &trimmed[int_start..idx];

    let mut frac_digits = "";
    if bytes.get(idx) == Some(&b'.') {
        let frac_start = idx + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &trimmed[frac_start..end];
        idx = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent: Option<i64> = None;
    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        let mut cursor = idx + 1;
        let exp_negative = match bytes.get(cursor) {
            Some(b'-') => {
                cursor += 1;
                true
            }
            Some(b'+') => {
                cursor += 1;
                false
            }
            _ => false,
        };
        let exp_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        // A dangling `e` is trailing garbage, not an exponent.
        if cursor > exp_start {
            let magnitude: i64 = trimmed[exp_start..cursor].parse().ok()?;
            exponent = Some(if exp_negative { -magnitude } else { magnitude });
        }
    }

    let mut mantissa = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        mantissa.push('-');
    }
    mantissa.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        mantissa.push('.');
        mantissa.push_str(frac_digits);
    }

    match exponent {
        Some(0) | None => mantissa.parse::<Decimal>().ok(),
        Some(exp) => Decimal::from_scientific(&format!("{mantissa}e{exp}")).ok(),
    }
}

/// Rounds to two decimals, midpoint away from zero, folding `-0` into `0`.
pub fn round_to_cents(value: Decimal) -> Decimal {
    let rounded =
        value.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Formats a value with exactly two decimals, e.g. `25` as `"25.00"`.
pub fn format_fixed(value: Decimal) -> String {
    let mut rounded = round_to_cents(value);
    rounded.rescale(DISPLAY_SCALE);
    rounded.to_string()
}
