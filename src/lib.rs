//! Employee Relationship & Leave Accounting Engine
//!
//! This crate provides the computational core of a personnel directory:
//! resolving an employee's organizational lineage (manager chain, team
//! lead, department head) without looping on malformed data, and
//! computing vacation/sick-leave balances and scheduling conflicts from
//! approval-state-carrying time-off records.
//!
//! The engine performs no I/O of its own; callers supply records through
//! the [`lookup::DirectoryLookup`] capability and receive plain data
//! structures back.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
