//! Display formatting for derived shift fields.
//!
//! The presentation layer renders stored shifts from their serialized
//! field names. The classification table here is keyed by those names
//! and decides whether a value renders as currency or as a percentage;
//! it must stay in sync with [`crate::models::DerivedShift`], which the
//! tests enforce.

use rust_decimal::Decimal;

/// How a derived shift field should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Monetary amount, 2-decimal with a currency symbol.
    Currency,
    /// Percentage, 2-decimal with a `%` suffix.
    Percent,
    /// Whole-number count.
    Count,
    /// Calendar date.
    Date,
    /// Plain text.
    Text,
}

/// Classifies a serialized `DerivedShift` field name.
///
/// Returns `None` for names that are not part of the shift contract.
pub fn field_kind(field: &str) -> Option<FieldKind> {
    let kind = match field {
        "netRevenue" | "totalWithTax" | "averageCheckPerCover" | "wineSales" | "beerSales"
        | "liquorSales" | "foodSales" | "creditTips" | "cashTips" | "totalTips"
        | "creditTipsAfterTipout" => FieldKind::Currency,
        "winePercent" | "beerPercent" | "liquorPercent" | "foodPercent" | "averageTipPercent"
        | "tipoutPercent" => FieldKind::Percent,
        "checks" | "covers" => FieldKind::Count,
        "date" => FieldKind::Date,
        "dayOfWeek" => FieldKind::Text,
        _ => return None,
    };
    Some(kind)
}

/// Formats a monetary amount with two decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_ledger::format::format_currency;
///
/// assert_eq!(format_currency(Decimal::new(1080, 0)), "$1080.00");
/// assert_eq!(format_currency(Decimal::new(2550, 2)), "$25.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Formats a percentage with two decimal places and a `%` suffix.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_ledger::format::format_percent;
///
/// assert_eq!(format_percent(Decimal::new(125, 1)), "12.50%");
/// ```
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", value)
}
