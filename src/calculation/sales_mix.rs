//! Sales-mix percentages and per-cover averages.

use rust_decimal::Decimal;

/// Calculates what percentage of net revenue a sales category represents.
///
/// Returns zero when net revenue is zero or negative; the derived fields
/// must stay finite for any input.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_ledger::calculation::category_percent;
///
/// let percent = category_percent(Decimal::new(200, 0), Decimal::new(1000, 0));
/// assert_eq!(percent, Decimal::new(20, 0));
///
/// assert_eq!(category_percent(Decimal::new(200, 0), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn category_percent(category_sales: Decimal, net_revenue: Decimal) -> Decimal {
    if net_revenue > Decimal::ZERO {
        category_sales / net_revenue * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Calculates the average check amount per cover.
///
/// Returns zero when no covers were recorded.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_ledger::calculation::average_check_per_cover;
///
/// let average = average_check_per_cover(Decimal::new(1000, 0), 40);
/// assert_eq!(average, Decimal::new(25, 0));
///
/// assert_eq!(average_check_per_cover(Decimal::new(1000, 0), 0), Decimal::ZERO);
/// ```
pub fn average_check_per_cover(net_revenue: Decimal, covers: i64) -> Decimal {
    if covers > 0 {
        net_revenue / Decimal::from(covers)
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// SM-001: wine at 20% of revenue
    #[test]
    fn test_category_percent_basic() {
        assert_eq!(category_percent(dec("200"), dec("1000")), dec("20"));
    }

    /// SM-002: zero revenue yields zero percent, not a division error
    #[test]
    fn test_category_percent_zero_revenue() {
        assert_eq!(category_percent(dec("200"), Decimal::ZERO), Decimal::ZERO);
    }

    /// SM-003: negative revenue is treated like zero
    #[test]
    fn test_category_percent_negative_revenue() {
        assert_eq!(category_percent(dec("200"), dec("-100")), Decimal::ZERO);
    }

    #[test]
    fn test_category_percent_fractional() {
        assert_eq!(category_percent(dec("333"), dec("1000")), dec("33.3"));
    }

    /// AC-001: 1000 over 40 covers is exactly 25
    #[test]
    fn test_average_check_basic() {
        assert_eq!(average_check_per_cover(dec("1000"), 40), dec("25"));
    }

    /// AC-002: zero covers yields zero
    #[test]
    fn test_average_check_zero_covers() {
        assert_eq!(average_check_per_cover(dec("1000"), 0), Decimal::ZERO);
    }

    #[test]
    fn test_average_check_negative_covers() {
        assert_eq!(average_check_per_cover(dec("1000"), -5), Decimal::ZERO);
    }
}
