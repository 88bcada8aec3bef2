//! Market step loop, data collection, and experiment orchestration for the
//! Tenure housing simulation.
//!
//! # Modules
//!
//! - [`market`] -- [`HousingMarket`], the population plus shared stock and
//!   its ordered step.
//! - [`recorder`] -- [`SnapshotSink`] and the in-memory [`DataCollector`].
//! - [`audit`] -- Ownership and classification consistency checks.
//! - [`config`] -- Configuration loading from `tenure-config.yaml` into
//!   strongly-typed structs.
//! - [`runner`] -- Bounded step loop with per-step logging and auditing.
//! - [`experiment`] -- Regime planning and the seeded multi-regime run.
//!
//! [`HousingMarket`]: market::HousingMarket
//! [`SnapshotSink`]: recorder::SnapshotSink
//! [`DataCollector`]: recorder::DataCollector

pub mod audit;
pub mod config;
pub mod experiment;
pub mod market;
pub mod recorder;
pub mod runner;
