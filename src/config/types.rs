//! Strongly-typed leave policy structures.
//!
//! These are deserialized from the policy YAML file. Every section has a
//! built-in default so the engine also runs without any file at all.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::LeaveAllotment;

/// Allotment granted to an employee whose record carries no explicit
/// per-employee configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AllotmentDefaults {
    /// Default vacation days per year.
    pub annual_vacation_days: Decimal,
    /// Default bonus vacation days per year.
    pub bonus_vacation_days: Decimal,
    /// Default sick leave days per year.
    pub annual_sick_leave_days: Decimal,
}

impl Default for AllotmentDefaults {
    fn default() -> Self {
        Self {
            annual_vacation_days: Decimal::from(20),
            bonus_vacation_days: Decimal::ZERO,
            annual_sick_leave_days: Decimal::from(10),
        }
    }
}

/// Keyword lists for classifying a manager's role from their job title.
///
/// Matching is case-insensitive substring search; keywords must be stored
/// lowercase. The department-head list is consulted before the team-lead
/// list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TitleRules {
    /// Keywords marking a title as a department head.
    pub department_head: Vec<String>,
    /// Keywords marking a title as a team lead.
    pub team_lead: Vec<String>,
}

impl Default for TitleRules {
    fn default() -> Self {
        Self {
            department_head: vec!["department head".to_string(), "director".to_string()],
            team_lead: vec!["lead".to_string()],
        }
    }
}

/// The organization's leave policy.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LeavePolicy {
    /// Allotment defaults for new hires.
    pub defaults: AllotmentDefaults,
    /// Job-title classification rules.
    pub title_rules: TitleRules,
}

impl LeavePolicy {
    /// Returns the allotment a new hire receives under this policy.
    pub fn allotment_for_new_hire(&self) -> LeaveAllotment {
        LeaveAllotment {
            annual_vacation_days: self.defaults.annual_vacation_days,
            bonus_vacation_days: self.defaults.bonus_vacation_days,
            annual_sick_leave_days: self.defaults.annual_sick_leave_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_built_in_rules() {
        let policy = LeavePolicy::default();
        assert_eq!(policy.defaults.annual_vacation_days, Decimal::from(20));
        assert_eq!(
            policy.title_rules.department_head,
            vec!["department head", "director"]
        );
        assert_eq!(policy.title_rules.team_lead, vec!["lead"]);
    }

    #[test]
    fn test_allotment_for_new_hire_copies_defaults() {
        let policy = LeavePolicy::default();
        let allotment = policy.allotment_for_new_hire();
        assert_eq!(allotment.annual_vacation_days, Decimal::from(20));
        assert_eq!(allotment.bonus_vacation_days, Decimal::ZERO);
        assert_eq!(allotment.annual_sick_leave_days, Decimal::from(10));
    }

    #[test]
    fn test_partial_yaml_fills_missing_sections_with_defaults() {
        let yaml = r#"
defaults:
  annual_vacation_days: 25
  bonus_vacation_days: 5
  annual_sick_leave_days: 12
"#;
        let policy: LeavePolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.defaults.annual_vacation_days, Decimal::from(25));
        // title_rules falls back to the built-in keywords.
        assert_eq!(policy.title_rules.team_lead, vec!["lead"]);
    }

    #[test]
    fn test_full_yaml_overrides_everything() {
        let yaml = r#"
defaults:
  annual_vacation_days: 30
  bonus_vacation_days: 0
  annual_sick_leave_days: 15
title_rules:
  department_head: ["vp", "head of"]
  team_lead: ["squad lead"]
"#;
        let policy: LeavePolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.defaults.annual_vacation_days, Decimal::from(30));
        assert_eq!(policy.title_rules.department_head, vec!["vp", "head of"]);
        assert_eq!(policy.title_rules.team_lead, vec!["squad lead"]);
    }
}
