//! Composite derivation of a full shift record.

use rust_decimal::Decimal;

use crate::models::{DerivedShift, RawShift};

use super::day_name::day_name;
use super::parse::{parse_amount, parse_count};
use super::sales_mix::{average_check_per_cover, category_percent};
use super::tips::{average_tip_percent, credit_tips_after_tipout, tipout_percent, total_tips};

/// Derives every computed field of a shift from its raw submission.
///
/// This is a pure, total function: it performs no I/O, reads no ambient
/// state, and returns a fully populated [`DerivedShift`] for any input,
/// including one with every numeric field missing. Malformed numeric
/// fields coerce to zero, and every division guards its denominator, so
/// no derived value is ever NaN or infinite.
///
/// The caller is responsible for rejecting submissions that lack a
/// date, restaurant reference, or net revenue before invoking this.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use shift_ledger::calculation::derive_totals;
/// use shift_ledger::models::{RawField, RawShift};
///
/// let raw: RawShift = serde_json::from_str(r#"{
///     "date": "2024-03-15",
///     "netRevenue": "1000",
///     "tax": "80",
///     "covers": "40",
///     "creditTips": "150",
///     "cashTips": "50",
///     "wineSales": "200"
/// }"#).unwrap();
///
/// let shift = derive_totals(&raw);
/// assert_eq!(shift.day_of_week, "Friday");
/// assert_eq!(shift.total_with_tax, Decimal::new(1080, 0));
/// assert_eq!(shift.average_check_per_cover, Decimal::new(25, 0));
/// assert_eq!(shift.wine_percent, Decimal::new(20, 0));
/// assert_eq!(shift.total_tips, Decimal::new(200, 0));
/// assert_eq!(shift.average_tip_percent, Decimal::new(20, 0));
/// ```
pub fn derive_totals(raw: &RawShift) -> DerivedShift {
    let checks = parse_count(raw.checks.as_ref());
    let covers = parse_count(raw.covers.as_ref());

    let net_revenue = parse_amount(raw.net_revenue.as_ref());
    let wine_sales = parse_amount(raw.wine_sales.as_ref());
    let beer_sales = parse_amount(raw.beer_sales.as_ref());
    let liquor_sales = parse_amount(raw.liquor_sales.as_ref());
    let food_sales = parse_amount(raw.food_sales.as_ref());
    let credit_tips = parse_amount(raw.credit_tips.as_ref());
    let cash_tips = parse_amount(raw.cash_tips.as_ref());
    let tipout_amount = parse_amount(raw.tipout_amount.as_ref());

    // The supplied total is only consulted when no tax was entered.
    let total_with_tax = match raw.tax.as_ref() {
        Some(tax) => net_revenue + parse_amount(Some(tax)),
        None => parse_amount(raw.total_with_tax.as_ref()),
    };

    let total_tips = total_tips(credit_tips, cash_tips);
    let credit_tips_after_tipout = credit_tips_after_tipout(credit_tips, tipout_amount);

    DerivedShift {
        date: raw.date,
        day_of_week: day_name(raw.date).to_string(),
        checks,
        covers,
        net_revenue,
        total_with_tax,
        average_check_per_cover: average_check_per_cover(net_revenue, covers),
        wine_sales,
        wine_percent: category_percent(wine_sales, net_revenue),
        beer_sales,
        beer_percent: category_percent(beer_sales, net_revenue),
        liquor_sales,
        liquor_percent: category_percent(liquor_sales, net_revenue),
        food_sales,
        food_percent: category_percent(food_sales, net_revenue),
        credit_tips,
        cash_tips,
        total_tips,
        average_tip_percent: average_tip_percent(total_tips, net_revenue),
        credit_tips_after_tipout,
        tipout_percent: tipout_percent(credit_tips, cash_tips, credit_tips_after_tipout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    use crate::models::RawField;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn raw_from_json(json: &str) -> RawShift {
        serde_json::from_str(json).unwrap()
    }

    /// DT-001: the reference busy-Friday scenario
    #[test]
    fn test_reference_shift() {
        let raw = raw_from_json(
            r#"{
                "date": "2024-03-15",
                "netRevenue": 1000,
                "tax": 80,
                "covers": 40,
                "creditTips": 150,
                "cashTips": 50,
                "wineSales": 200
            }"#,
        );

        let shift = derive_totals(&raw);

        assert_eq!(shift.total_with_tax, dec("1080"));
        assert_eq!(shift.average_check_per_cover, dec("25"));
        assert_eq!(shift.wine_percent, dec("20"));
        assert_eq!(shift.total_tips, dec("200"));
        assert_eq!(shift.average_tip_percent, dec("20"));
        assert_eq!(shift.day_of_week, "Friday");
    }

    /// DT-002: an all-zero shift derives to all zeros
    #[test]
    fn test_zero_shift() {
        let raw = raw_from_json(
            r#"{
                "date": "2024-03-15",
                "netRevenue": 0,
                "covers": 0,
                "creditTips": 0,
                "cashTips": 0
            }"#,
        );

        let shift = derive_totals(&raw);

        assert_eq!(shift.average_check_per_cover, Decimal::ZERO);
        assert_eq!(shift.wine_percent, Decimal::ZERO);
        assert_eq!(shift.beer_percent, Decimal::ZERO);
        assert_eq!(shift.liquor_percent, Decimal::ZERO);
        assert_eq!(shift.food_percent, Decimal::ZERO);
        assert_eq!(shift.average_tip_percent, Decimal::ZERO);
        assert_eq!(shift.total_tips, Decimal::ZERO);
    }

    /// DT-003: tipout of 15 against 120 combined tips
    #[test]
    fn test_tipout_shift() {
        let raw = raw_from_json(
            r#"{
                "date": "2024-03-15",
                "creditTips": 100,
                "cashTips": 20,
                "tipoutAmount": 15
            }"#,
        );

        let shift = derive_totals(&raw);

        assert_eq!(shift.credit_tips_after_tipout, dec("85"));
        assert_eq!(shift.total_tips, dec("120"));
        assert_eq!(shift.tipout_percent, dec("12.5"));
    }

    /// DT-004: day of week comes from the fixed calendar
    #[test]
    fn test_day_of_week_only() {
        let raw = raw_from_json(r#"{"date": "2024-03-15"}"#);
        let shift = derive_totals(&raw);
        assert_eq!(shift.day_of_week, "Friday");
    }

    /// DT-005: junk text in a sales field coerces to zero
    #[test]
    fn test_unparseable_wine_sales() {
        let raw = raw_from_json(
            r#"{
                "date": "2024-03-15",
                "netRevenue": 1000,
                "wineSales": "abc"
            }"#,
        );

        let shift = derive_totals(&raw);

        assert_eq!(shift.wine_sales, Decimal::ZERO);
        assert_eq!(shift.wine_percent, Decimal::ZERO);
    }

    /// DT-006: with no tax entered, the supplied total passes through
    #[test]
    fn test_total_with_tax_pass_through() {
        let raw = raw_from_json(
            r#"{
                "date": "2024-03-15",
                "netRevenue": 1000,
                "totalWithTax": "1075.50"
            }"#,
        );

        assert_eq!(derive_totals(&raw).total_with_tax, dec("1075.50"));
    }

    /// DT-007: entered tax overrides any supplied total
    #[test]
    fn test_tax_overrides_supplied_total() {
        let raw = raw_from_json(
            r#"{
                "date": "2024-03-15",
                "netRevenue": 1000,
                "tax": 80,
                "totalWithTax": "9999"
            }"#,
        );

        assert_eq!(derive_totals(&raw).total_with_tax, dec("1080"));
    }

    /// DT-008: every field is populated even from a bare date
    #[test]
    fn test_all_missing_is_fully_populated() {
        let raw = raw_from_json(r#"{"date": "2024-03-15"}"#);
        let shift = derive_totals(&raw);

        assert_eq!(shift.checks, 0);
        assert_eq!(shift.covers, 0);
        assert_eq!(shift.net_revenue, Decimal::ZERO);
        assert_eq!(shift.total_with_tax, Decimal::ZERO);
        assert_eq!(shift.credit_tips_after_tipout, Decimal::ZERO);
        assert_eq!(shift.tipout_percent, Decimal::ZERO);
    }

    // Strategies for arbitrary raw fields: numbers, decimal-ish text,
    // and junk text all appear in real submissions.
    fn raw_field() -> impl Strategy<Value = RawField> {
        prop_oneof![
            (-1.0e6..1.0e6f64).prop_map(RawField::Number),
            (0u32..100_000u32).prop_map(|cents| {
                RawField::Text(Decimal::new(cents as i64, 2).to_string())
            }),
            "[a-z ]{0,6}".prop_map(RawField::Text),
        ]
    }

    fn raw_shift() -> impl Strategy<Value = RawShift> {
        let field = proptest::option::of(raw_field());
        (
            (2000i32..2100, 1u32..=12, 1u32..=28),
            proptest::collection::vec(field, 12),
        )
            .prop_map(|((y, m, d), mut fields)| RawShift {
                date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                checks: fields.pop().unwrap(),
                covers: fields.pop().unwrap(),
                net_revenue: fields.pop().unwrap(),
                tax: fields.pop().unwrap(),
                total_with_tax: fields.pop().unwrap(),
                wine_sales: fields.pop().unwrap(),
                beer_sales: fields.pop().unwrap(),
                liquor_sales: fields.pop().unwrap(),
                food_sales: fields.pop().unwrap(),
                credit_tips: fields.pop().unwrap(),
                cash_tips: fields.pop().unwrap(),
                tipout_amount: fields.pop().unwrap(),
            })
    }

    proptest! {
        /// Deriving twice from the same input yields identical records.
        #[test]
        fn prop_derive_is_idempotent(raw in raw_shift()) {
            prop_assert_eq!(derive_totals(&raw), derive_totals(&raw));
        }

        /// Combined tips are always the exact sum of the parsed parts.
        #[test]
        fn prop_total_tips_is_additive(raw in raw_shift()) {
            let shift = derive_totals(&raw);
            prop_assert_eq!(shift.total_tips, shift.credit_tips + shift.cash_tips);
        }

        /// Zero net revenue forces every percentage to zero.
        #[test]
        fn prop_zero_revenue_zeroes_percents(raw in raw_shift()) {
            let mut raw = raw;
            raw.net_revenue = None;
            let shift = derive_totals(&raw);

            prop_assert_eq!(shift.wine_percent, Decimal::ZERO);
            prop_assert_eq!(shift.beer_percent, Decimal::ZERO);
            prop_assert_eq!(shift.liquor_percent, Decimal::ZERO);
            prop_assert_eq!(shift.food_percent, Decimal::ZERO);
            prop_assert_eq!(shift.average_tip_percent, Decimal::ZERO);
        }

        /// The average check matches the division whenever it is defined.
        #[test]
        fn prop_average_check_matches_division(
            revenue_cents in 1i64..10_000_000,
            covers in 1i64..2_000,
        ) {
            let raw = RawShift {
                date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                checks: None,
                covers: Some(RawField::Text(covers.to_string())),
                net_revenue: Some(RawField::Text(Decimal::new(revenue_cents, 2).to_string())),
                tax: None,
                total_with_tax: None,
                wine_sales: None,
                beer_sales: None,
                liquor_sales: None,
                food_sales: None,
                credit_tips: None,
                cash_tips: None,
                tipout_amount: None,
            };

            let shift = derive_totals(&raw);
            prop_assert_eq!(
                shift.average_check_per_cover,
                Decimal::new(revenue_cents, 2) / Decimal::from(covers)
            );
        }
    }
}
