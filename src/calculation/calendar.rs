//! Calendar arithmetic for leave accounting.
//!
//! This module provides the working-day count and date-range overlap
//! primitives the ledger and conflict detector are built on. Working days
//! are Monday through Friday; public holidays are out of scope for the
//! accounting rules implemented here.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// Returns true if the given date is a working day (Monday to Friday).
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_working_day;
/// use chrono::NaiveDate;
///
/// // 2024-07-12 is a Friday, 2024-07-13 a Saturday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2024, 7, 12).unwrap()));
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2024, 7, 13).unwrap()));
/// ```
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the working days in the inclusive range `start..=end`.
///
/// Saturdays and Sundays are excluded from the count.
///
/// # Arguments
///
/// * `start` - First day of the range (inclusive)
/// * `end` - Last day of the range (inclusive)
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateRange`] when `start > end`. A stored
/// record with an inverted range indicates upstream data corruption and
/// is surfaced rather than silently measured.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::working_days_inclusive;
/// use chrono::NaiveDate;
///
/// // Mon 2024-07-08 through Fri 2024-07-12: a full working week
/// let start = NaiveDate::from_ymd_opt(2024, 7, 8).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 7, 12).unwrap();
/// assert_eq!(working_days_inclusive(start, end).unwrap(), 5);
///
/// // Spanning the weekend adds nothing
/// let end = NaiveDate::from_ymd_opt(2024, 7, 14).unwrap();
/// assert_eq!(working_days_inclusive(start, end).unwrap(), 5);
/// ```
pub fn working_days_inclusive(start: NaiveDate, end: NaiveDate) -> EngineResult<i64> {
    if start > end {
        return Err(EngineError::InvalidDateRange { start, end });
    }

    let count = start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| is_working_day(*day))
        .count();

    Ok(count as i64)
}

/// Returns true if the closed intervals `[start_a, end_a]` and
/// `[start_b, end_b]` intersect.
///
/// Total over all inputs as long as each pair is internally ordered;
/// no validation is performed here.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::ranges_overlap;
/// use chrono::NaiveDate;
///
/// let d = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
/// assert!(ranges_overlap(d(7, 10), d(7, 12), d(7, 12), d(7, 20)));
/// assert!(!ranges_overlap(d(7, 10), d(7, 12), d(7, 13), d(7, 20)));
/// ```
pub fn ranges_overlap(
    start_a: NaiveDate,
    end_a: NaiveDate,
    start_b: NaiveDate,
    end_b: NaiveDate,
) -> bool {
    start_a <= end_b && start_b <= end_a
}
