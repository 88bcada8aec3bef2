//! Shared type definitions for the Tenure housing-market simulation.
//!
//! Every crate in the workspace speaks in these types: the stock and agent
//! crates mutate houses and households identified by them, the core crate
//! emits snapshots and step summaries built from them, and the report crate
//! aggregates and exports them.
//!
//! # Modules
//!
//! - [`ids`] -- Integer identifier newtypes and the process-wide house id sequence
//! - [`enums`] -- House status, household classification, ethnicity
//! - [`structs`] -- Snapshots, house records, and per-step tallies

pub mod enums;
pub mod ids;
pub mod structs;

pub use enums::{AgentType, Ethnicity, HouseStatus};
pub use ids::{HouseId, HouseIdSequence, HouseholdId};
pub use structs::{AgentSnapshot, AgentTypeCounts, HouseRecord, StatusCounts, StepSummary};
