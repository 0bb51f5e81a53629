//! Weekday naming for shift dates.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns the long-form English weekday name for a date.
///
/// The table is fixed: names never depend on the system locale or
/// timezone, so the same date always produces the same name on every
/// host.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use shift_ledger::calculation::day_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(day_name(date), "Friday");
/// ```
pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// DN-001: reference date from the fixed calendar
    #[test]
    fn test_reference_friday() {
        assert_eq!(day_name(make_date("2024-03-15")), "Friday");
    }

    #[test]
    fn test_full_week() {
        // 2024-03-11 is a Monday
        let expected = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        for (offset, name) in expected.iter().enumerate() {
            let date = make_date("2024-03-11")
                .checked_add_days(chrono::Days::new(offset as u64))
                .unwrap();
            assert_eq!(day_name(date), *name);
        }
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(day_name(make_date("2024-02-29")), "Thursday");
    }
}
