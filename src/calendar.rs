use chrono::{Datelike, Month, NaiveDate, Weekday};

/// Number of days in `month` of `year`, leap years included.
///
/// Computed as the distance to the first of the following month so the
/// proleptic-Gregorian rules all live in chrono.
pub fn days_of_month(month: &Month, year: i32) -> u32 {
    if month.number_from_month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.number_from_month() + 1, 1)
    }
    .unwrap()
    .signed_duration_since(NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).unwrap())
    .num_days() as u32
}

/// Weekday of the first day of `month` in `year`.
pub fn first_weekday_of_month(month: &Month, year: i32) -> Weekday {
    NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
        .unwrap()
        .weekday()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        assert_eq!(days_of_month(&Month::January, 2024), 31);
        assert_eq!(days_of_month(&Month::April, 2024), 30);
        assert_eq!(days_of_month(&Month::December, 2023), 31);
    }

    #[test]
    fn february_follows_leap_rules() {
        assert_eq!(days_of_month(&Month::February, 2024), 29);
        assert_eq!(days_of_month(&Month::February, 2023), 28);
        assert_eq!(days_of_month(&Month::February, 2000), 29);
        assert_eq!(days_of_month(&Month::February, 1900), 28);
    }

    #[test]
    fn first_weekday() {
        // 2024-01-01 was a Monday
        assert_eq!(first_weekday_of_month(&Month::January, 2024), Weekday::Mon);
        assert_eq!(
            first_weekday_of_month(&Month::January, 2024).num_days_from_sunday(),
            1
        );
        // 2023-10-01 was a Sunday
        assert_eq!(
            first_weekday_of_month(&Month::October, 2023).num_days_from_sunday(),
            0
        );
    }
}
