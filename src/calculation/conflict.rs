//! Scheduling-conflict detection for candidate time-off requests.
//!
//! The detector is a pure predicate: it reports whether a candidate date
//! range collides with any live request in the list it is given. The
//! decision to refuse creation belongs to the request-creation flow, not
//! to this module.

use chrono::NaiveDate;

use crate::models::TimeOffRequest;

use super::calendar::ranges_overlap;

/// Returns true if the candidate range overlaps any live existing request.
///
/// Rejected and cancelled requests no longer occupy their dates and are
/// ignored. The caller is responsible for passing only one employee's
/// requests; the predicate itself is employee-agnostic.
///
/// # Arguments
///
/// * `candidate_start` - First day of the candidate request (inclusive)
/// * `candidate_end` - Last day of the candidate request (inclusive)
/// * `existing` - The employee's existing requests
///
/// # Example
///
/// ```
/// use leave_engine::calculation::has_conflict;
/// use leave_engine::models::{LeaveCategory, TimeOffRequest};
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
/// let existing = vec![TimeOffRequest::new(1, 100, LeaveCategory::Vacation, d(7, 5), d(7, 11))];
///
/// assert!(has_conflict(d(7, 10), d(7, 12), &existing));
/// assert!(!has_conflict(d(7, 12), d(7, 15), &existing));
/// ```
pub fn has_conflict(
    candidate_start: NaiveDate,
    candidate_end: NaiveDate,
    existing: &[TimeOffRequest],
) -> bool {
    existing
        .iter()
        .filter(|request| request.status.is_live())
        .any(|request| {
            ranges_overlap(
                candidate_start,
                candidate_end,
                request.start_date,
                request.end_date,
            )
        })
}
