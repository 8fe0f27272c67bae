//! Profile aggregation: the composite "everything about employee X" read.
//!
//! Joins the leave ledger, lineage resolver, and the skills and project
//! lookups into one [`EmployeeProfile`]. The four reads are independent
//! and issued concurrently; non-critical lookups degrade to empty lists
//! instead of failing the whole profile.

use chrono::{Datelike, Utc};
use tracing::{debug, warn};

use crate::config::LeavePolicy;
use crate::error::{EngineError, EngineResult};
use crate::lookup::DirectoryLookup;
use crate::models::EmployeeProfile;

use super::balance::calculate_balance;
use super::lineage::resolve_lineage;

/// Builds the detailed profile for one employee for the current year.
///
/// Convenience wrapper around [`get_detailed_profile_for_year`] using the
/// calendar year containing now as the accounting year.
///
/// # Errors
///
/// See [`get_detailed_profile_for_year`].
pub async fn get_detailed_profile<L: DirectoryLookup>(
    employee_id: u64,
    lookup: &L,
    policy: &LeavePolicy,
) -> EngineResult<EmployeeProfile> {
    get_detailed_profile_for_year(employee_id, Utc::now().year(), lookup, policy).await
}

/// Builds the detailed profile for one employee and one accounting year.
///
/// The subject employee is fetched first and a missing subject fails fast
/// before any secondary lookup is issued. The four remaining reads
/// (lineage, time-off requests, skills, project assignments) are
/// independent and are joined concurrently.
///
/// Failure policy: lineage and time-off failures fail the profile; a
/// failed skills or project-assignment lookup degrades to an empty list
/// with a warning, so one broken secondary store cannot take down the
/// whole read.
///
/// # Errors
///
/// Returns [`EngineError::EmployeeNotFound`] when the subject does not
/// exist, and propagates lineage, time-off lookup, and ledger errors.
pub async fn get_detailed_profile_for_year<L: DirectoryLookup>(
    employee_id: u64,
    as_of_year: i32,
    lookup: &L,
    policy: &LeavePolicy,
) -> EngineResult<EmployeeProfile> {
    let employee = lookup
        .employee(employee_id)
        .await?
        .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;

    let (lineage, requests, skills, assignments) = tokio::join!(
        resolve_lineage(employee_id, lookup, &policy.title_rules),
        lookup.time_off_requests(employee_id, as_of_year),
        lookup.skills(employee_id),
        lookup.active_assignments(employee_id),
    );

    let lineage = lineage?;
    let leave_balance = calculate_balance(&employee, &requests?, as_of_year)?;

    let skills = skills.unwrap_or_else(|error| {
        warn!(employee_id, %error, "skills lookup failed, degrading to empty list");
        Vec::new()
    });
    let current_projects = assignments.unwrap_or_else(|error| {
        warn!(employee_id, %error, "project lookup failed, degrading to empty list");
        Vec::new()
    });

    debug!(
        employee_id,
        as_of_year,
        lineage_len = lineage.len(),
        skills = skills.len(),
        projects = current_projects.len(),
        "assembled employee profile"
    );

    Ok(EmployeeProfile {
        employee,
        skills,
        current_projects,
        lineage,
        leave_balance,
    })
}
