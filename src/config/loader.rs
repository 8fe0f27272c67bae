//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the leave
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AllotmentDefaults, LeavePolicy, TitleRules};

/// Loads and provides access to the leave policy.
///
/// The policy file is a single YAML document; see `config/policy.yaml`
/// in the repository for the reference shape. Sections omitted from the
/// file fall back to the built-in defaults, and a host that has no file
/// at all can use [`LeavePolicy::default`] directly.
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml")?;
/// let rules = loader.title_rules();
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: LeavePolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/policy.yaml")
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be
    /// read and [`EngineError::ConfigParseError`] when it is not valid
    /// YAML for the policy shape.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { policy })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Returns the new-hire allotment defaults.
    pub fn defaults(&self) -> &AllotmentDefaults {
        &self.policy.defaults
    }

    /// Returns the job-title classification rules.
    pub fn title_rules(&self) -> &TitleRules {
        &self.policy.title_rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn policy_path() -> &'static str {
        "./config/policy.yaml"
    }

    #[test]
    fn test_load_shipped_policy() {
        let result = PolicyLoader::load(policy_path());
        assert!(result.is_ok(), "Failed to load policy: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(
            loader.defaults().annual_vacation_days,
            Decimal::from(20)
        );
        assert_eq!(loader.defaults().annual_sick_leave_days, Decimal::from(10));
    }

    #[test]
    fn test_shipped_policy_title_rules() {
        let loader = PolicyLoader::load(policy_path()).unwrap();

        assert!(loader
            .title_rules()
            .department_head
            .contains(&"director".to_string()));
        assert!(loader.title_rules().team_lead.contains(&"lead".to_string()));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = PolicyLoader::load("/nonexistent/policy.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_shipped_policy_matches_built_in_defaults() {
        // The reference file and LeavePolicy::default() must agree, so a
        // host running without a file gets the same behavior.
        let loader = PolicyLoader::load(policy_path()).unwrap();
        assert_eq!(*loader.policy(), LeavePolicy::default());
    }
}
