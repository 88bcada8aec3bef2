//! Houses and the shared housing stock for the Tenure simulation.
//!
//! This crate owns the house-side half of the model: the [`House`] record
//! with its forward-only status state machine, and the [`HouseStock`] that
//! every household scans in creation order.
//!
//! # Modules
//!
//! - [`house`] -- A single housing unit and its status transitions
//! - [`stock`] -- The ordered pool of houses and its generation parameters
//! - [`sampling`] -- Normal and uniform draws shared with the agent crate
//! - [`error`] -- Error types ([`StockError`])

pub mod error;
pub mod house;
pub mod sampling;
pub mod stock;

pub use error::StockError;
pub use house::House;
pub use stock::{HouseStock, HousingParams};
