//! Leave ledger: per-year balance computation.
//!
//! Given an employee's allotment and their time-off records, computes the
//! used, pending, and remaining balances per leave category for one
//! accounting year.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Employee, LeaveBalance, RequestStatus, TimeOffRequest};

use super::calendar::working_days_inclusive;

/// Computes the leave balance for one employee and one accounting year.
///
/// Only requests lying entirely within the year are counted: a request
/// spanning a year boundary contributes to neither year's totals. This
/// mirrors the accounting rule as deployed; pro-rating cross-year
/// requests is a product decision that has not been taken.
///
/// Accumulation rules:
/// - approved vacation and day-off requests debit `used_vacation_days`
/// - pending vacation and day-off requests accrue `pending_vacation_days`
/// - approved sick-leave requests debit `used_sick_leave_days`
/// - remote requests and rejected/cancelled requests contribute nothing
///
/// Remaining balances are entitlement minus used days and are not clamped
/// at zero; a negative remainder is the over-allocation signal.
///
/// # Arguments
///
/// * `employee` - The employee whose allotment applies
/// * `requests` - The employee's time-off requests (any years, any statuses)
/// * `as_of_year` - The accounting year to compute
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidDateRange`] if a counted
/// request has its start after its end, which indicates corrupted stored
/// data.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::calculate_balance;
/// use leave_engine::models::{Employee, EmployeeStatus, LeaveAllotment};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 1,
///     first_name: "Dana".to_string(),
///     last_name: "Petrov".to_string(),
///     position: "Software Engineer".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
///     status: EmployeeStatus::Active,
///     allotment: LeaveAllotment {
///         annual_vacation_days: Decimal::from(20),
///         bonus_vacation_days: Decimal::ZERO,
///         annual_sick_leave_days: Decimal::from(10),
///     },
///     manager_id: None,
///     team_id: None,
/// };
///
/// let balance = calculate_balance(&employee, &[], 2024).unwrap();
/// assert_eq!(balance.remaining_vacation_days, Decimal::from(20));
/// ```
pub fn calculate_balance(
    employee: &Employee,
    requests: &[TimeOffRequest],
    as_of_year: i32,
) -> EngineResult<LeaveBalance> {
    let mut used_vacation = Decimal::ZERO;
    let mut pending_vacation = Decimal::ZERO;
    let mut used_sick = Decimal::ZERO;

    for request in requests {
        // Both ends must fall within the accounting year; requests
        // spanning the boundary are excluded entirely.
        if request.start_date.year() != as_of_year || request.end_date.year() != as_of_year {
            continue;
        }

        if request.status.is_terminal() {
            continue;
        }

        if !request.category.counts_as_vacation() && !request.category.counts_as_sick_leave() {
            continue;
        }

        let length = Decimal::from(working_days_inclusive(
            request.start_date,
            request.end_date,
        )?);

        match (request.category.counts_as_vacation(), request.status) {
            (true, RequestStatus::Approved) => used_vacation += length,
            (true, RequestStatus::Pending) => pending_vacation += length,
            (false, RequestStatus::Approved) => used_sick += length,
            // Pending sick leave is not tracked as a pending balance.
            _ => {}
        }
    }

    let total_vacation = employee.allotment.total_vacation_days();
    let total_sick = employee.allotment.annual_sick_leave_days;

    Ok(LeaveBalance {
        year: as_of_year,
        total_vacation_days: total_vacation,
        used_vacation_days: used_vacation,
        pending_vacation_days: pending_vacation,
        remaining_vacation_days: total_vacation - used_vacation,
        total_sick_leave_days: total_sick,
        used_sick_leave_days: used_sick,
        remaining_sick_leave_days: total_sick - used_sick,
    })
}
