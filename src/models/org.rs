//! Team and department models.
//!
//! Teams and departments are maintained by external HR flows and are
//! read-only to this engine; they matter here only as sources of the
//! team-lead and department-head links in lineage resolution.

use serde::{Deserialize, Serialize};

use super::Employee;

/// Represents a team in the organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier for the team.
    pub id: u64,
    /// The team's display name.
    pub name: String,
    /// The id of the employee leading the team, if one is assigned.
    pub lead_id: Option<u64>,
    /// The id of the department the team belongs to.
    pub department_id: u64,
}

/// Represents a department in the organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: u64,
    /// The department's display name.
    pub name: String,
    /// The id of the employee heading the department, if one is assigned.
    pub head_id: Option<u64>,
}

/// A team together with its resolved lead and department records.
///
/// This is the denormalized shape the directory lookup returns for
/// lineage resolution. Dangling references resolve to `None` rather than
/// failing the lookup: a team whose lead record was deleted still has a
/// usable overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamOverview {
    /// The team record itself.
    pub team: Team,
    /// The team lead's employee record, when `lead_id` resolves.
    pub lead: Option<Employee>,
    /// The department record, when `department_id` resolves.
    pub department: Option<Department>,
    /// The department head's employee record, when it resolves.
    pub department_head: Option<Employee>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_team() {
        let json = r#"{
            "id": 5,
            "name": "Platform",
            "lead_id": 3,
            "department_id": 2
        }"#;

        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.id, 5);
        assert_eq!(team.name, "Platform");
        assert_eq!(team.lead_id, Some(3));
        assert_eq!(team.department_id, 2);
    }

    #[test]
    fn test_deserialize_team_without_lead() {
        let json = r#"{
            "id": 6,
            "name": "Incubation",
            "lead_id": null,
            "department_id": 2
        }"#;

        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.lead_id, None);
    }

    #[test]
    fn test_deserialize_department() {
        let json = r#"{
            "id": 2,
            "name": "Engineering",
            "head_id": 7
        }"#;

        let department: Department = serde_json::from_str(json).unwrap();
        assert_eq!(department.id, 2);
        assert_eq!(department.head_id, Some(7));
    }

    #[test]
    fn test_team_overview_round_trip_with_dangling_refs() {
        let overview = TeamOverview {
            team: Team {
                id: 5,
                name: "Platform".to_string(),
                lead_id: Some(99),
                department_id: 2,
            },
            lead: None,
            department: Some(Department {
                id: 2,
                name: "Engineering".to_string(),
                head_id: None,
            }),
            department_head: None,
        };

        let json = serde_json::to_string(&overview).unwrap();
        let deserialized: TeamOverview = serde_json::from_str(&json).unwrap();
        assert_eq!(overview, deserialized);
    }
}
