//! Safe numeric coercion for raw shift fields.
//!
//! Submissions arrive with monetary values as JSON numbers or form
//! strings. These functions coerce them to exact numeric types and
//! degrade to zero on anything missing, empty, or unparseable. They
//! never fail: a malformed optional field must not reject a submission.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::models::RawField;

/// Coerces a raw field to a monetary amount.
///
/// Returns zero when the field is missing, blank, or not a valid
/// decimal number. Text is parsed as a whole: `"12abc"` is unparseable
/// and yields zero, not twelve.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_ledger::calculation::parse_amount;
/// use shift_ledger::models::RawField;
///
/// let text = RawField::Text("1000.50".to_string());
/// assert_eq!(parse_amount(Some(&text)), Decimal::new(100050, 2));
///
/// let junk = RawField::Text("abc".to_string());
/// assert_eq!(parse_amount(Some(&junk)), Decimal::ZERO);
///
/// assert_eq!(parse_amount(None), Decimal::ZERO);
/// ```
pub fn parse_amount(value: Option<&RawField>) -> Decimal {
    match value {
        None => Decimal::ZERO,
        Some(RawField::Number(n)) => Decimal::from_f64(*n).unwrap_or(Decimal::ZERO),
        Some(RawField::Text(s)) => s.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO),
    }
}

/// Coerces a raw field to an integral count.
///
/// Base-10 parsing with a zero fallback; numeric input truncates toward
/// zero, matching how form counts are read.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::parse_count;
/// use shift_ledger::models::RawField;
///
/// assert_eq!(parse_count(Some(&RawField::Text("40".to_string()))), 40);
/// assert_eq!(parse_count(Some(&RawField::Number(12.9))), 12);
/// assert_eq!(parse_count(Some(&RawField::Text("forty".to_string()))), 0);
/// assert_eq!(parse_count(None), 0);
/// ```
pub fn parse_count(value: Option<&RawField>) -> i64 {
    match value {
        None => 0,
        Some(RawField::Number(n)) if n.is_finite() => *n as i64,
        Some(RawField::Number(_)) => 0,
        Some(RawField::Text(s)) => s.trim().parse::<i64>().unwrap_or(0),
    }
}

/// Returns true when a required raw field should be treated as absent:
/// not supplied at all, or text holding only whitespace.
pub fn is_missing(value: Option<&RawField>) -> bool {
    match value {
        None => true,
        Some(field) => field.is_blank(),
    }
}
