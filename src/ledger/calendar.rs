use chrono::{Datelike, Duration, NaiveDate};

/// Number of days in each fixed-offset week of a month.
pub const DAYS_PER_WEEK: u32 = 7;

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Whether both dates fall in the same calendar month of the same year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Shifts `date` by a signed number of months, clamping the day to the target
/// month's length (Mar 31 minus one month is Feb 28/29).
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    checked_shift_month(date, months).unwrap_or(date)
}

fn checked_shift_month(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let index = (date.year() * 12 + date.month0() as i32).checked_add(months)?;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Start of the lookback range: `months` months before `today`, normalized to
/// the 1st so the oldest month is always counted whole. Lookbacks reaching
/// past the calendar's range include everything.
pub fn lookback_cutoff(today: NaiveDate, months: u32) -> NaiveDate {
    i32::try_from(months)
        .ok()
        .and_then(|months| checked_shift_month(today, -months))
        .map(month_start)
        .unwrap_or(NaiveDate::MIN)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first_next| (first_next - Duration::days(1)).day())
        .unwrap_or(28)
}

/// Fixed-offset week of the month: days 1-7 are week 1, 8-14 week 2, and so
/// on up to week 5. Independent of the weekday the month starts on.
pub fn week_of_month(date: NaiveDate) -> u32 {
    date.day().div_ceil(DAYS_PER_WEEK)
}

/// Daily chart label, e.g. `Jan 05`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

/// Monthly chart label, e.g. `Jan 2024`.
pub fn short_month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// History section label, e.g. `January 2024`.
pub fn long_month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn week_label(week: u32) -> String {
    format!("Week {week}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shift_month_clamps_day_to_target_month() {
        assert_eq!(shift_month(date(2024, 3, 31), -1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2023, 3, 31), -1), date(2023, 2, 28));
        assert_eq!(shift_month(date(2024, 1, 15), -6), date(2023, 7, 15));
        assert_eq!(shift_month(date(2024, 11, 30), 3), date(2025, 2, 28));
    }

    #[test]
    fn lookback_cutoff_normalizes_to_first_of_month() {
        assert_eq!(lookback_cutoff(date(2024, 2, 15), 6), date(2023, 8, 1));
        assert_eq!(lookback_cutoff(date(2024, 2, 15), 0), date(2024, 2, 1));
        assert_eq!(lookback_cutoff(date(2024, 2, 15), u32::MAX), NaiveDate::MIN);
    }

    #[test]
    fn week_of_month_uses_fixed_seven_day_offsets() {
        assert_eq!(week_of_month(date(2024, 5, 1)), 1);
        assert_eq!(week_of_month(date(2024, 5, 7)), 1);
        assert_eq!(week_of_month(date(2024, 5, 8)), 2);
        assert_eq!(week_of_month(date(2024, 5, 28)), 4);
        assert_eq!(week_of_month(date(2024, 5, 29)), 5);
        assert_eq!(week_of_month(date(2024, 5, 31)), 5);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 4), 30);
    }

    #[test]
    fn labels_use_month_names() {
        let day = date(2024, 1, 5);
        assert_eq!(day_label(day), "Jan 05");
        assert_eq!(short_month_label(day), "Jan 2024");
        assert_eq!(long_month_label(day), "January 2024");
        assert_eq!(week_label(3), "Week 3");
    }
}
