use chrono::{Datelike, Local, NaiveDate};

/// Current local date. Birthday math takes the day as a parameter so it
/// stays testable; callers pass this in.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Days until the next anniversary of a stored `YYYY-MM-DD` date of birth.
///
/// Returns `None` when the input is blank or does not parse as a calendar
/// date. Zero means the anniversary is today. A Feb 29 anniversary falls
/// back to Mar 1 on non-leap years.
pub fn days_until_birthday(raw: &str, today: NaiveDate) -> Option<i64> {
    if raw.is_empty() {
        return None;
    }
    let birth = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(days_until_anniversary(birth, today))
}

/// Same computation over an already-parsed date of birth.
pub fn days_until_anniversary(birth: NaiveDate, today: NaiveDate) -> i64 {
    let this_year = anniversary_in(today.year(), birth);
    let next = if this_year < today { anniversary_in(today.year() + 1, birth) } else { this_year };
    (next - today).num_days()
}

fn anniversary_in(year: i32, birth: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        // only reachable for Feb 29 in a non-leap year
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"))
}
