//! Leave policy configuration.
//!
//! This module loads the organization's leave policy from a YAML file:
//! the allotment defaults applied to new hires and the job-title keyword
//! rules driving lineage role classification.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
//! println!("New hires get {} vacation days", loader.defaults().annual_vacation_days);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{AllotmentDefaults, LeavePolicy, TitleRules};
