//! Calendar arithmetic for due dates.
//!
//! Installments fall due on the same day of the month as the first one. When
//! a month is too short for that day the date is clamped to the month's last
//! day; offsets are always counted from the original date, so a plan starting
//! on the 31st keeps returning to the 31st whenever the month allows it.

use chrono::{Datelike, NaiveDate};

use crate::errors::{CrediarioError, Result};

/// add calendar months, clamping to month end
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    let zero_based = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let year = i32::try_from(zero_based.div_euclid(12)).map_err(|_| out_of_range(date, months))?;
    let month = zero_based.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| out_of_range(date, months))
}

/// whole days from `from` to `to`, negative when `to` is earlier
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn out_of_range(date: NaiveDate, months: u32) -> CrediarioError {
    CrediarioError::InvalidDate {
        message: format!("{} plus {} months is out of range", date, months),
    }
}
