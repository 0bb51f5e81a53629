//! Tip totals, tip percentages, and tipout arithmetic.

use rust_decimal::Decimal;

/// Calculates combined tips: credit plus cash.
pub fn total_tips(credit_tips: Decimal, cash_tips: Decimal) -> Decimal {
    credit_tips + cash_tips
}

/// Calculates the tip percentage relative to net revenue.
///
/// Returns zero when net revenue is zero or negative.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_ledger::calculation::average_tip_percent;
///
/// let percent = average_tip_percent(Decimal::new(200, 0), Decimal::new(1000, 0));
/// assert_eq!(percent, Decimal::new(20, 0));
/// ```
pub fn average_tip_percent(total_tips: Decimal, net_revenue: Decimal) -> Decimal {
    if net_revenue > Decimal::ZERO {
        total_tips / net_revenue * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Calculates the credit tips remaining after the tipout is surrendered.
///
/// A missing tipout is coerced to zero before this is called, so the
/// result is simply the difference.
pub fn credit_tips_after_tipout(credit_tips: Decimal, tipout_amount: Decimal) -> Decimal {
    credit_tips - tipout_amount
}

/// Calculates the percentage of combined tips surrendered via tipout.
///
/// The kept amount is the post-tipout credit tips plus all cash tips;
/// the surrendered fraction is measured against the combined total.
/// Returns zero when there were no tips at all.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_ledger::calculation::tipout_percent;
///
/// // 15 of 120 total tips surrendered -> 12.5%
/// let percent = tipout_percent(
///     Decimal::new(100, 0),
///     Decimal::new(20, 0),
///     Decimal::new(85, 0),
/// );
/// assert_eq!(percent, Decimal::new(125, 1));
/// ```
pub fn tipout_percent(
    credit_tips: Decimal,
    cash_tips: Decimal,
    credit_tips_after_tipout: Decimal,
) -> Decimal {
    let total = credit_tips + cash_tips;
    let kept = credit_tips_after_tipout + cash_tips;
    if total > Decimal::ZERO {
        (total - kept) / total * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}
