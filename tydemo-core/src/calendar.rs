//! Calendar date helpers shared by the store, the preview generator and the routes.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{DemoError, DemoResult};

/// Parse a calendar date.
///
/// Accepts `YYYY-MM-DD` (month and day may omit the leading zero) and ISO
/// datetimes such as `2025-01-15T00:00:00.000Z`, of which only the date part
/// is used. A blank input is a validation error, anything else that does not
/// name a real day is a parse error.
pub fn parse_date(s: &str) -> DemoResult<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DemoError::Validation("Date is required".into()));
    }

    let date_part = s.split(['T', ' ']).next().unwrap_or(s);
    let mut parts = date_part.splitn(3, '-');

    let year = parts.next().and_then(|p| p.parse::<i32>().ok());
    let month = parts.next().and_then(|p| p.parse::<u32>().ok());
    let day = parts.next().and_then(|p| p.parse::<u32>().ok());

    match (year, month, day) {
        (Some(y), Some(m), Some(d)) => {
            NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| DemoError::Parse(s.to_string()))
        }
        _ => Err(DemoError::Parse(s.to_string())),
    }
}

/// The ISO key (`YYYY-MM-DD`) used for store buckets and JSON payloads.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Long display form, e.g. `Wednesday, January 15, 2025`.
pub fn format_long(date: NaiveDate) -> String {
    date.format("%A, %B %d, %Y").to_string()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Number of days in the given month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> DemoResult<u32> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| DemoError::Validation(format!("Year {year} is out of range")))?;

    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Every day of the month, in order.
pub fn month_days(year: i32, month: u32) -> DemoResult<Vec<NaiveDate>> {
    let first = first_of_month(year, month)?;
    let count = days_in_month(year, month)?;
    Ok(first.iter_days().take(count as usize).collect())
}

fn first_of_month(year: i32, month: u32) -> DemoResult<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(DemoError::Validation(format!(
            "Month must be between 1 and 12, got {month}"
        )));
    }
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DemoError::Validation(format!("Year {year} is out of range")))
}
