//! Household state and decision policy for the Tenure simulation.
//!
//! This crate contains the agent half of the model: the [`Household`]
//! record, the ordered per-step decision policy that buys, lists, leases
//! and collects rent against a shared [`HouseStock`], and population
//! sampling.
//!
//! # Modules
//!
//! - [`household`] -- Household state and the per-step policy ([`Household::step`])
//! - [`population`] -- Population parameters and sampling ([`generate_population`])
//! - [`error`] -- Error types ([`AgentError`])
//!
//! [`HouseStock`]: tenure_stock::HouseStock

pub mod error;
pub mod household;
pub mod population;

pub use error::AgentError;
pub use household::{
    BLACK_PURCHASE_FACTOR, Household, HouseholdActivity, INCOME_FLOOR_FRACTION, INCOME_GROWTH,
    RENT_TO_INCOME_CAP,
};
pub use population::{PopulationParams, generate_population};
