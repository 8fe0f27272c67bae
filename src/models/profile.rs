//! Engine-produced read models.
//!
//! Everything in this module is computed fresh on each query and never
//! persisted: lineage nodes, leave balances, and the composite employee
//! profile, plus the opaque skill and project shapes passed through from
//! the directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Employee;

/// The relationship a lineage node has to the subject employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipRole {
    /// The subject employee themself; always the first node.
    #[serde(rename = "self")]
    Subject,
    /// The lead of the subject's team.
    TeamLead,
    /// A manager in the subject's reporting chain.
    Manager,
    /// The head of the subject's department.
    DepartmentHead,
}

impl std::fmt::Display for RelationshipRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationshipRole::Subject => write!(f, "self"),
            RelationshipRole::TeamLead => write!(f, "team_lead"),
            RelationshipRole::Manager => write!(f, "manager"),
            RelationshipRole::DepartmentHead => write!(f, "department_head"),
        }
    }
}

/// One entry in an employee's organizational lineage.
///
/// Produced by lineage resolution in order: self first, most-immediate
/// manager next, least-immediate last, with team lead and department head
/// appended when not already present in the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageNode {
    /// The id of the employee this node refers to.
    pub employee_id: u64,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's job title.
    pub position: String,
    /// The relationship of this node to the subject.
    pub role: RelationshipRole,
}

impl LineageNode {
    /// Builds a node from an employee record and a relationship role.
    pub fn from_employee(employee: &Employee, role: RelationshipRole) -> Self {
        Self {
            employee_id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            position: employee.position.clone(),
            role,
        }
    }
}

/// A leave balance for one employee and one accounting year.
///
/// Recomputed from the current set of time-off requests on every query,
/// so it is always consistent with the latest approval state. Remaining
/// balances are deliberately not clamped at zero; a negative remainder
/// signals over-allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The accounting year the balance covers.
    pub year: i32,
    /// Total vacation entitlement (annual plus bonus).
    pub total_vacation_days: Decimal,
    /// Approved vacation and day-off working days already taken.
    pub used_vacation_days: Decimal,
    /// Vacation and day-off working days awaiting a decision.
    pub pending_vacation_days: Decimal,
    /// Vacation entitlement minus used days. May be negative.
    pub remaining_vacation_days: Decimal,
    /// Total sick-leave entitlement for the year.
    pub total_sick_leave_days: Decimal,
    /// Approved sick-leave working days already taken.
    pub used_sick_leave_days: Decimal,
    /// Sick-leave entitlement minus used days. May be negative.
    pub remaining_sick_leave_days: Decimal,
}

/// A skill attributed to an employee.
///
/// Opaque to the engine; fetched from the directory and passed through
/// into the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique identifier for the skill.
    pub id: u64,
    /// The skill's display name.
    pub name: String,
}

/// An active project assignment for an employee.
///
/// Opaque to the engine; fetched from the directory and passed through
/// into the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAssignment {
    /// The id of the project.
    pub project_id: u64,
    /// The project's display name.
    pub project_name: String,
    /// The employee's role on the project, when recorded.
    #[serde(default)]
    pub role: Option<String>,
}

/// The composite "everything about employee X" read model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// The subject employee record.
    pub employee: Employee,
    /// The subject's skills; empty when the skills lookup degraded.
    pub skills: Vec<Skill>,
    /// The subject's active project assignments; empty when the lookup
    /// degraded.
    pub current_projects: Vec<ProjectAssignment>,
    /// The subject's organizational lineage, self first.
    pub lineage: Vec<LineageNode>,
    /// The subject's leave balance for the accounting year.
    pub leave_balance: LeaveBalance,
}
