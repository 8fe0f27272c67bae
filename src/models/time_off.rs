//! Time-off request model and its status state machine.
//!
//! A [`TimeOffRequest`] is created by an employee-initiated flow and then
//! moves through the approval state machine via [`TimeOffRequest::approve`],
//! [`TimeOffRequest::reject`], and [`TimeOffRequest::cancel`]. The
//! accounting engine reads requests but never transitions them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The category of a time-off request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    /// Planned vacation; debits the vacation balance.
    Vacation,
    /// Sick leave; debits the sick-leave balance.
    SickLeave,
    /// A single discretionary day off; debits the vacation balance.
    DayOff,
    /// Remote-work notice; tracked for scheduling but debits no balance.
    Remote,
}

impl LeaveCategory {
    /// Returns true if days in this category debit the vacation balance.
    pub fn counts_as_vacation(&self) -> bool {
        matches!(self, LeaveCategory::Vacation | LeaveCategory::DayOff)
    }

    /// Returns true if days in this category debit the sick-leave balance.
    pub fn counts_as_sick_leave(&self) -> bool {
        matches!(self, LeaveCategory::SickLeave)
    }
}

impl std::fmt::Display for LeaveCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveCategory::Vacation => write!(f, "vacation"),
            LeaveCategory::SickLeave => write!(f, "sick_leave"),
            LeaveCategory::DayOff => write!(f, "day_off"),
            LeaveCategory::Remote => write!(f, "remote"),
        }
    }
}

/// The approval status of a time-off request.
///
/// Allowed transitions are `pending -> approved`, `pending -> rejected`,
/// and `pending/approved -> cancelled`. `rejected` and `cancelled` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; the only status that debits a balance.
    Approved,
    /// Declined by an approver. Terminal.
    Rejected,
    /// Withdrawn by the employee. Terminal.
    Cancelled,
}

impl RequestStatus {
    /// Returns true if no further transition is allowed from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Rejected | RequestStatus::Cancelled)
    }

    /// Returns true if the request still occupies its dates on the
    /// calendar (pending or approved).
    pub fn is_live(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::Approved)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
            RequestStatus::Rejected => write!(f, "rejected"),
            RequestStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Represents one time-off request.
///
/// `start_date` and `end_date` are inclusive and expected to satisfy
/// `start_date <= end_date`; the engine surfaces stored violations as
/// [`EngineError::InvalidDateRange`] when it has to measure the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    /// Unique identifier for the request.
    pub id: u64,
    /// The employee the request belongs to.
    pub employee_id: u64,
    /// The leave category requested.
    pub category: LeaveCategory,
    /// First day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave (inclusive).
    pub end_date: NaiveDate,
    /// Current approval status.
    pub status: RequestStatus,
    /// Reason supplied when the request was rejected.
    #[serde(default)]
    pub rejection_note: Option<String>,
    /// The id of the employee who decided the request.
    #[serde(default)]
    pub approver_id: Option<u64>,
    /// When the request was decided.
    #[serde(default)]
    pub decided_at: Option<DateTime<Utc>>,
}

impl TimeOffRequest {
    /// Creates a new pending request.
    pub fn new(
        id: u64,
        employee_id: u64,
        category: LeaveCategory,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            employee_id,
            category,
            start_date,
            end_date,
            status: RequestStatus::Pending,
            rejection_note: None,
            approver_id: None,
            decided_at: None,
        }
    }

    /// Approves a pending request, recording the approver and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTransition`] if the request is not
    /// pending; the record is left untouched.
    pub fn approve(&mut self, approver_id: u64, decided_at: DateTime<Utc>) -> EngineResult<()> {
        self.transition_to(RequestStatus::Approved)?;
        self.approver_id = Some(approver_id);
        self.decided_at = Some(decided_at);
        Ok(())
    }

    /// Rejects a pending request, recording the approver, timestamp, and
    /// an optional note.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTransition`] if the request is not
    /// pending; the record is left untouched.
    pub fn reject(
        &mut self,
        approver_id: u64,
        note: Option<String>,
        decided_at: DateTime<Utc>,
    ) -> EngineResult<()> {
        self.transition_to(RequestStatus::Rejected)?;
        self.approver_id = Some(approver_id);
        self.rejection_note = note;
        self.decided_at = Some(decided_at);
        Ok(())
    }

    /// Cancels a pending or approved request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTransition`] if the request is
    /// already rejected or cancelled.
    pub fn cancel(&mut self) -> EngineResult<()> {
        self.transition_to(RequestStatus::Cancelled)
    }

    fn transition_to(&mut self, to: RequestStatus) -> EngineResult<()> {
        let allowed = match (self.status, to) {
            (RequestStatus::Pending, RequestStatus::Approved) => true,
            (RequestStatus::Pending, RequestStatus::Rejected) => true,
            (RequestStatus::Pending, RequestStatus::Cancelled) => true,
            (RequestStatus::Approved, RequestStatus::Cancelled) => true,
            _ => false,
        };

        if !allowed {
            return Err(EngineError::InvalidTransition {
                from: self.status,
                to,
            });
        }

        self.status = to;
        Ok(())
    }
}
