use chrono::{Datelike, Duration, Local, NaiveDate};

use super::WEEK_DAYS_SPAN;

/// Returns the selectable days: the ISO week containing `base` (Monday to
/// Sunday) followed by the next week, 14 dates in total.
pub fn get_week_days(base: NaiveDate) -> Vec<NaiveDate> {
    let days_from_monday = base.weekday().num_days_from_monday() as i64;
    let monday = base - Duration::days(days_from_monday);

    (0..WEEK_DAYS_SPAN as i64)
        .map(|offset| monday + Duration::days(offset))
        .collect()
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// English weekday name, e.g. "Monday".
pub fn day_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_get_week_days_from_wednesday() {
        let wednesday = make_date(2024, 1, 17);
        let days = get_week_days(wednesday);

        assert_eq!(days.len(), 14);
        assert_eq!(days[0], make_date(2024, 1, 15));
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[13], make_date(2024, 1, 28));
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_get_week_days_from_sunday() {
        let sunday = make_date(2024, 1, 21);
        let days = get_week_days(sunday);

        assert_eq!(days.len(), 14);
        assert_eq!(days[0], make_date(2024, 1, 15));
        assert_eq!(sunday - days[0], Duration::days(6));
    }

    #[test]
    fn test_get_week_days_from_monday() {
        let monday = make_date(2024, 1, 15);
        assert_eq!(get_week_days(monday)[0], monday);
    }

    #[test]
    fn test_get_week_days_across_year_boundary() {
        let days = get_week_days(make_date(2025, 1, 1)); // Wednesday
        assert_eq!(days[0], make_date(2024, 12, 30));
        assert_eq!(days[13], make_date(2025, 1, 12));
    }

    #[test]
    fn test_format_date_zero_pads() {
        assert_eq!(format_date(make_date(2024, 3, 5)), "2024-03-05");
        assert_eq!(format_date(make_date(2024, 12, 31)), "2024-12-31");
    }

    #[test]
    fn test_day_name() {
        assert_eq!(day_name(make_date(2024, 1, 15)), "Monday");
        assert_eq!(day_name(make_date(2024, 1, 21)), "Sunday");
    }
}
