//! The directory lookup capability consumed by the engine.
//!
//! All I/O lives behind [`DirectoryLookup`]; the engine's computations
//! are pure functions over what these methods return. Absence (a
//! dangling or unknown id) is reported as `Ok(None)` or an empty list so
//! the engine can skip it silently, while `Err` is reserved for genuine
//! store failures.
//!
//! [`InMemoryDirectory`] is the reference implementation, used by the
//! test suites and benchmarks and suitable as a fixture for hosts.

use std::collections::HashMap;

use chrono::Datelike;

use crate::error::EngineResult;
use crate::models::{
    Department, Employee, ProjectAssignment, Skill, Team, TeamOverview, TimeOffRequest,
};

/// Read-only lookup capability over the employee/team/department graph.
///
/// Implementations are expected to be cheap to call repeatedly; the
/// lineage resolver issues one `employee` call per chain link.
#[allow(async_fn_in_trait)]
pub trait DirectoryLookup {
    /// Fetches an employee by id; `Ok(None)` when the id is unknown.
    async fn employee(&self, id: u64) -> EngineResult<Option<Employee>>;

    /// Fetches a team with its lead and department resolved; `Ok(None)`
    /// when the team id is unknown.
    async fn team_overview(&self, team_id: u64) -> EngineResult<Option<TeamOverview>>;

    /// Fetches the skills recorded for an employee.
    async fn skills(&self, employee_id: u64) -> EngineResult<Vec<Skill>>;

    /// Fetches the employee's active project assignments.
    async fn active_assignments(&self, employee_id: u64) -> EngineResult<Vec<ProjectAssignment>>;

    /// Fetches the employee's time-off requests touching the given year.
    ///
    /// The window is deliberately loose: any request whose start or end
    /// falls in the year qualifies. The leave ledger applies the strict
    /// both-ends-within-year accounting filter itself.
    async fn time_off_requests(
        &self,
        employee_id: u64,
        year: i32,
    ) -> EngineResult<Vec<TimeOffRequest>>;
}

/// A map-backed directory for tests, benchmarks, and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    employees: HashMap<u64, Employee>,
    teams: HashMap<u64, Team>,
    departments: HashMap<u64, Department>,
    skills: HashMap<u64, Vec<Skill>>,
    assignments: HashMap<u64, Vec<ProjectAssignment>>,
    requests: HashMap<u64, Vec<TimeOffRequest>>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an employee record.
    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.id, employee);
    }

    /// Inserts or replaces a team record.
    pub fn insert_team(&mut self, team: Team) {
        self.teams.insert(team.id, team);
    }

    /// Inserts or replaces a department record.
    pub fn insert_department(&mut self, department: Department) {
        self.departments.insert(department.id, department);
    }

    /// Sets the skills recorded for an employee.
    pub fn insert_skills(&mut self, employee_id: u64, skills: Vec<Skill>) {
        self.skills.insert(employee_id, skills);
    }

    /// Sets the active project assignments for an employee.
    pub fn insert_assignments(&mut self, employee_id: u64, assignments: Vec<ProjectAssignment>) {
        self.assignments.insert(employee_id, assignments);
    }

    /// Adds a time-off request under its employee.
    pub fn insert_request(&mut self, request: TimeOffRequest) {
        self.requests
            .entry(request.employee_id)
            .or_default()
            .push(request);
    }
}

impl DirectoryLookup for InMemoryDirectory {
    async fn employee(&self, id: u64) -> EngineResult<Option<Employee>> {
        Ok(self.employees.get(&id).cloned())
    }

    async fn team_overview(&self, team_id: u64) -> EngineResult<Option<TeamOverview>> {
        let Some(team) = self.teams.get(&team_id) else {
            return Ok(None);
        };

        let lead = team
            .lead_id
            .and_then(|id| self.employees.get(&id))
            .cloned();
        let department = self.departments.get(&team.department_id).cloned();
        let department_head = department
            .as_ref()
            .and_then(|d| d.head_id)
            .and_then(|id| self.employees.get(&id))
            .cloned();

        Ok(Some(TeamOverview {
            team: team.clone(),
            lead,
            department,
            department_head,
        }))
    }

    async fn skills(&self, employee_id: u64) -> EngineResult<Vec<Skill>> {
        Ok(self.skills.get(&employee_id).cloned().unwrap_or_default())
    }

    async fn active_assignments(&self, employee_id: u64) -> EngineResult<Vec<ProjectAssignment>> {
        Ok(self
            .assignments
            .get(&employee_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn time_off_requests(
        &self,
        employee_id: u64,
        year: i32,
    ) -> EngineResult<Vec<TimeOffRequest>> {
        Ok(self
            .requests
            .get(&employee_id)
            .map(|requests| {
                requests
                    .iter()
                    .filter(|r| r.start_date.year() == year || r.end_date.year() == year)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
