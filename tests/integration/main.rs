//! Workspace-level integration tests: the capability engine and the
//! structural protocol working together, plus property tests for the
//! protocol's algebraic laws.

#[path = "../common/types.rs"]
mod types;

mod properties;
