//! Cycle-safe organizational lineage resolution.
//!
//! Walks an employee's manager chain and combines it with team and
//! department structure into one ordered sequence of lineage nodes. The
//! walk is guarded by an explicit visited set, so malformed cyclic
//! manager data in the store degrades to a truncated chain instead of an
//! infinite loop.

use std::collections::HashSet;

use tracing::warn;

use crate::config::TitleRules;
use crate::error::{EngineError, EngineResult};
use crate::lookup::DirectoryLookup;
use crate::models::{LineageNode, RelationshipRole};

/// Classifies a manager's relationship role from their job title.
///
/// This is a compatibility shim over the free-text titles the directory
/// stores: matching is case-insensitive substring search against the
/// keyword lists in [`TitleRules`], department-head keywords first. A
/// store that grows an explicit role field should replace this function
/// outright.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::classify_role;
/// use leave_engine::config::TitleRules;
/// use leave_engine::models::RelationshipRole;
///
/// let rules = TitleRules::default();
/// assert_eq!(
///     classify_role("Engineering Director", &rules),
///     RelationshipRole::DepartmentHead
/// );
/// assert_eq!(
///     classify_role("Tech Lead", &rules),
///     RelationshipRole::TeamLead
/// );
/// assert_eq!(
///     classify_role("Product Manager", &rules),
///     RelationshipRole::Manager
/// );
/// ```
pub fn classify_role(position: &str, rules: &TitleRules) -> RelationshipRole {
    let title = position.to_lowercase();

    if rules
        .department_head
        .iter()
        .any(|keyword| title.contains(keyword.as_str()))
    {
        RelationshipRole::DepartmentHead
    } else if rules
        .team_lead
        .iter()
        .any(|keyword| title.contains(keyword.as_str()))
    {
        RelationshipRole::TeamLead
    } else {
        RelationshipRole::Manager
    }
}

/// Resolves the ordered lineage chain for one employee.
///
/// The result starts with a `self` node for the subject, followed by the
/// manager chain from most to least immediate, followed by the subject's
/// team lead and department head when those exist and have not already
/// appeared in the chain. Each employee id appears at most once.
///
/// The manager walk stops silently when a pointer is null, dangles, or
/// refers back to an already-visited employee. A revisit means the store
/// holds a manager cycle; it is logged and truncated rather than treated
/// as a caller error, so the traversal completes in at most one lookup
/// per distinct employee.
///
/// # Arguments
///
/// * `employee_id` - The subject employee
/// * `lookup` - The directory lookup capability
/// * `rules` - Title keyword rules for manager role classification
///
/// # Errors
///
/// Returns [`EngineError::EmployeeNotFound`] when the subject employee
/// does not exist, and propagates lookup failures from the underlying
/// store.
pub async fn resolve_lineage<L: DirectoryLookup>(
    employee_id: u64,
    lookup: &L,
    rules: &TitleRules,
) -> EngineResult<Vec<LineageNode>> {
    let subject = lookup
        .employee(employee_id)
        .await?
        .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;

    let mut visited = HashSet::new();
    visited.insert(subject.id);

    let mut chain = vec![LineageNode::from_employee(
        &subject,
        RelationshipRole::Subject,
    )];

    // Manager chain, most immediate first.
    let mut next_manager = subject.manager_id;
    while let Some(manager_id) = next_manager {
        if visited.contains(&manager_id) {
            warn!(
                employee_id,
                manager_id, "manager chain revisits an employee, truncating lineage"
            );
            break;
        }

        let Some(manager) = lookup.employee(manager_id).await? else {
            // Dangling manager pointer; lineage stays usable without it.
            break;
        };

        visited.insert(manager.id);
        let role = classify_role(&manager.position, rules);
        chain.push(LineageNode::from_employee(&manager, role));
        next_manager = manager.manager_id;
    }

    // Team lead and department head, when present and not already seen.
    if let Some(team_id) = subject.team_id {
        if let Some(overview) = lookup.team_overview(team_id).await? {
            if let Some(lead) = overview.lead {
                if visited.insert(lead.id) {
                    chain.push(LineageNode::from_employee(&lead, RelationshipRole::TeamLead));
                }
            }

            if let Some(head) = overview.department_head {
                if visited.insert(head.id) {
                    chain.push(LineageNode::from_employee(
                        &head,
                        RelationshipRole::DepartmentHead,
                    ));
                }
            }
        }
    }

    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::InMemoryDirectory;
    use crate::models::{Department, Employee, EmployeeStatus, LeaveAllotment, Team};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn create_employee(id: u64, position: &str, manager_id: Option<u64>) -> Employee {
        Employee {
            id,
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            position: position.to_string(),
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            status: EmployeeStatus::Active,
            allotment: LeaveAllotment {
                annual_vacation_days: Decimal::from(20),
                bonus_vacation_days: Decimal::ZERO,
                annual_sick_leave_days: Decimal::from(10),
            },
            manager_id,
            team_id: None,
        }
    }

    fn roles(chain: &[LineageNode]) -> Vec<RelationshipRole> {
        chain.iter().map(|node| node.role).collect()
    }

    fn ids(chain: &[LineageNode]) -> Vec<u64> {
        chain.iter().map(|node| node.employee_id).collect()
    }

    #[tokio::test]
    async fn test_employee_without_relations_yields_self_only() {
        let mut directory = InMemoryDirectory::new();
        directory.insert_employee(create_employee(1, "Software Engineer", None));

        let chain = resolve_lineage(1, &directory, &TitleRules::default())
            .await
            .unwrap();

        assert_eq!(ids(&chain), vec![1]);
        assert_eq!(roles(&chain), vec![RelationshipRole::Subject]);
    }

    #[tokio::test]
    async fn test_unknown_employee_is_not_found() {
        let directory = InMemoryDirectory::new();

        let result = resolve_lineage(42, &directory, &TitleRules::default()).await;
        match result {
            Err(EngineError::EmployeeNotFound { id }) => assert_eq!(id, 42),
            _ => panic!("Expected EmployeeNotFound error"),
        }
    }

    #[tokio::test]
    async fn test_manager_chain_ordered_most_immediate_first() {
        let mut directory = InMemoryDirectory::new();
        directory.insert_employee(create_employee(1, "Software Engineer", Some(2)));
        directory.insert_employee(create_employee(2, "Tech Lead", Some(3)));
        directory.insert_employee(create_employee(3, "Engineering Director", None));

        let chain = resolve_lineage(1, &directory, &TitleRules::default())
            .await
            .unwrap();

        assert_eq!(ids(&chain), vec![1, 2, 3]);
        assert_eq!(
            roles(&chain),
            vec![
                RelationshipRole::Subject,
                RelationshipRole::TeamLead,
                RelationshipRole::DepartmentHead,
            ]
        );
    }

    #[tokio::test]
    async fn test_untitled_manager_defaults_to_manager_role() {
        let mut directory = InMemoryDirectory::new();
        directory.insert_employee(create_employee(1, "Software Engineer", Some(2)));
        directory.insert_employee(create_employee(2, "Delivery Manager", None));

        let chain = resolve_lineage(1, &directory, &TitleRules::default())
            .await
            .unwrap();

        assert_eq!(chain[1].role, RelationshipRole::Manager);
    }

    #[tokio::test]
    async fn test_two_node_manager_cycle_terminates() {
        let mut directory = InMemoryDirectory::new();
        directory.insert_employee(create_employee(1, "Engineer", Some(2)));
        directory.insert_employee(create_employee(2, "Manager", Some(1)));

        let chain = resolve_lineage(1, &directory, &TitleRules::default())
            .await
            .unwrap();

        // The walk stops when it would revisit employee 1.
        assert_eq!(ids(&chain), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_self_managing_employee_terminates() {
        let mut directory = InMemoryDirectory::new();
        directory.insert_employee(create_employee(1, "Founder", Some(1)));

        let chain = resolve_lineage(1, &directory, &TitleRules::default())
            .await
            .unwrap();

        assert_eq!(ids(&chain), vec![1]);
    }

    #[tokio::test]
    async fn test_dangling_manager_pointer_stops_silently() {
        let mut directory = InMemoryDirectory::new();
        directory.insert_employee(create_employee(1, "Engineer", Some(2)));
        directory.insert_employee(create_employee(2, "Manager", Some(99)));

        let chain = resolve_lineage(1, &directory, &TitleRules::default())
            .await
            .unwrap();

        assert_eq!(ids(&chain), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_team_lead_and_department_head_are_appended() {
        let mut directory = InMemoryDirectory::new();
        let mut subject = create_employee(1, "Engineer", Some(2));
        subject.team_id = Some(5);
        directory.insert_employee(subject);
        directory.insert_employee(create_employee(2, "Delivery Manager", None));
        directory.insert_employee(create_employee(3, "Tech Lead", None));
        directory.insert_employee(create_employee(4, "Head of Engineering", None));
        directory.insert_team(Team {
            id: 5,
            name: "Platform".to_string(),
            lead_id: Some(3),
            department_id: 6,
        });
        directory.insert_department(Department {
            id: 6,
            name: "Engineering".to_string(),
            head_id: Some(4),
        });

        let chain = resolve_lineage(1, &directory, &TitleRules::default())
            .await
            .unwrap();

        assert_eq!(ids(&chain), vec![1, 2, 3, 4]);
        assert_eq!(chain[2].role, RelationshipRole::TeamLead);
        assert_eq!(chain[3].role, RelationshipRole::DepartmentHead);
    }

    #[tokio::test]
    async fn test_team_lead_already_in_chain_is_not_duplicated() {
        let mut directory = InMemoryDirectory::new();
        let mut subject = create_employee(1, "Engineer", Some(2));
        subject.team_id = Some(5);
        directory.insert_employee(subject);
        // The direct manager is also the team lead.
        directory.insert_employee(create_employee(2, "Tech Lead", None));
        directory.insert_team(Team {
            id: 5,
            name: "Platform".to_string(),
            lead_id: Some(2),
            department_id: 6,
        });

        let chain = resolve_lineage(1, &directory, &TitleRules::default())
            .await
            .unwrap();

        assert_eq!(ids(&chain), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_dangling_team_reference_is_skipped() {
        let mut directory = InMemoryDirectory::new();
        let mut subject = create_employee(1, "Engineer", None);
        subject.team_id = Some(99);
        directory.insert_employee(subject);

        let chain = resolve_lineage(1, &directory, &TitleRules::default())
            .await
            .unwrap();

        assert_eq!(ids(&chain), vec![1]);
    }

    #[tokio::test]
    async fn test_no_duplicate_ids_in_deep_chain() {
        let mut directory = InMemoryDirectory::new();
        // 0 -> 1 -> ... -> 9 -> 0 (cycle back to the subject)
        for id in 0..10u64 {
            directory.insert_employee(create_employee(id, "Manager", Some((id + 1) % 10)));
        }

        let chain = resolve_lineage(0, &directory, &TitleRules::default())
            .await
            .unwrap();

        let mut seen = std::collections::HashSet::new();
        for node in &chain {
            assert!(seen.insert(node.employee_id), "duplicate id in lineage");
        }
        assert_eq!(chain.len(), 10);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        let rules = TitleRules::default();
        assert_eq!(
            classify_role("DEPARTMENT HEAD of operations", &rules),
            RelationshipRole::DepartmentHead
        );
        assert_eq!(classify_role("TEAM LEAD", &rules), RelationshipRole::TeamLead);
    }

    #[test]
    fn test_department_head_keywords_win_over_lead() {
        // "Lead Director" matches both lists; department head is checked first.
        let rules = TitleRules::default();
        assert_eq!(
            classify_role("Lead Director", &rules),
            RelationshipRole::DepartmentHead
        );
    }
}
