//! Employee model and related types.
//!
//! This module defines the Employee struct, its lifecycle status, and the
//! per-employee leave allotment configuration.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the lifecycle status of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and working.
    Active,
    /// Currently employed but on extended leave.
    OnLeave,
    /// No longer employed.
    Inactive,
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeStatus::Active => write!(f, "active"),
            EmployeeStatus::OnLeave => write!(f, "on_leave"),
            EmployeeStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// Per-employee leave allotment configuration.
///
/// All values are non-negative day counts; fractional days are allowed
/// (for example a 2.5 day carried-over bonus).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveAllotment {
    /// Vacation days granted for the year.
    pub annual_vacation_days: Decimal,
    /// Additional vacation days granted on top of the annual allotment.
    pub bonus_vacation_days: Decimal,
    /// Sick leave days granted for the year.
    pub annual_sick_leave_days: Decimal,
}

impl LeaveAllotment {
    /// Returns the combined vacation entitlement (annual plus bonus).
    pub fn total_vacation_days(&self) -> Decimal {
        self.annual_vacation_days + self.bonus_vacation_days
    }
}

/// Represents an employee in the directory.
///
/// Employee records are created and updated by external HR flows and are
/// read-only to this engine. The optional `manager_id` is self-referential
/// and forms a directed forest when the stored data is well-formed; the
/// lineage resolver guards against cycles rather than assuming them away.
///
/// # Example
///
/// ```
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
///     manager_id: Some(2),
///     team_id: Some(5),
/// };
/// assert_eq!(employee.full_name(), "Dana Petrov");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: u64,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's job title (free text, as stored by HR).
    pub position: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The lifecycle status of this record.
    pub status: EmployeeStatus,
    /// The employee's leave allotment for the current year.
    pub allotment: LeaveAllotment,
    /// The id of the employee's direct manager, if any.
    pub manager_id: Option<u64>,
    /// The id of the team the employee belongs to, if any.
    pub team_id: Option<u64>,
}

impl Employee {
    /// Returns the employee's display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the employee is currently active.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
