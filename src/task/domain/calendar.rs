//! Calendar date parsing and business-day arithmetic.
//!
//! Dates are calendar dates only; no time zone is involved. A business day
//! is Monday through Friday with no holiday calendar.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Number of business days in a full week.
const BUSINESS_DAYS_PER_WEEK: i64 = 5;
/// Length of a `YYYY-MM-DD` date.
const ISO_DATE_LEN: usize = 10;

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// Returns `None` for empty or malformed input and for dates that do not
/// exist in the calendar.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    if !has_iso_date_shape(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Checks for exactly `DDDD-DD-DD`; chrono alone accepts padding, signs and
/// single-digit fields.
fn has_iso_date_shape(raw: &str) -> bool {
    raw.len() == ISO_DATE_LEN
        && raw.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Counts business days between two dates.
///
/// When `begin <= end` this is the number of weekdays in `[begin, end)`.
/// Otherwise it is the negated number of weekdays in `[end, begin)`, so a
/// date in the past yields a negative distance.
#[must_use]
pub fn business_days_between(begin: NaiveDate, end: NaiveDate) -> i64 {
    if end < begin {
        return -count_forward(end, begin);
    }
    count_forward(begin, end)
}

/// Whole business weeks in a business-day count, rounded toward negative
/// infinity.
#[must_use]
pub const fn whole_business_weeks(business_days: i64) -> i64 {
    business_days.div_euclid(BUSINESS_DAYS_PER_WEEK)
}

fn count_forward(begin: NaiveDate, end: NaiveDate) -> i64 {
    let total_days = end.signed_duration_since(begin).num_days();
    let full_weeks = total_days.div_euclid(7);
    let remainder = total_days.rem_euclid(7);

    let tail_start = u64::try_from(full_weeks.saturating_mul(7))
        .ok()
        .and_then(|offset| begin.checked_add_days(Days::new(offset)))
        .unwrap_or(end);
    let tail = tail_start
        .iter_days()
        .take(usize::try_from(remainder).unwrap_or_default())
        .filter(|day| is_business_day(*day))
        .count();

    full_weeks
        .saturating_mul(BUSINESS_DAYS_PER_WEEK)
        .saturating_add(i64::try_from(tail).unwrap_or_default())
}

/// Returns whether the date falls on Monday through Friday.
#[must_use]
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
