//! Bounded step loop for one market.
//!
//! [`run_steps`] drives a [`HousingMarket`] for a fixed number of steps,
//! feeding snapshots to the caller's sink, logging a summary per step, and
//! auditing ownership after each one. It stops early if the market has no
//! households, since stepping such a market changes nothing.

use tenure_types::StepSummary;
use tracing::{info, warn};

use crate::audit::{AuditViolation, audit_ownership};
use crate::market::HousingMarket;
use crate::recorder::SnapshotSink;

/// Errors that can occur during a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The ownership audit found an inconsistency and strict auditing was on.
    #[error("ownership audit failed at step {step}: {violation}")]
    AuditFailed {
        /// The step after which the audit ran.
        step: u64,
        /// The first violation reported.
        violation: AuditViolation,
    },
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEndReason {
    /// The requested number of steps completed.
    StepLimitReached,
    /// The market has no households, so no step could run.
    EmptyPopulation,
}

/// Bounds and checks for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Number of steps to run.
    pub steps: u64,
    /// Fail with [`RunnerError::AuditFailed`] on the first audit violation
    /// instead of logging it.
    pub strict_audit: bool,
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// The reason the run ended.
    pub end_reason: SimulationEndReason,
    /// The last step summary, if any step completed.
    pub final_summary: Option<StepSummary>,
    /// Total number of steps executed.
    pub total_steps: u64,
    /// Audit violations logged over the whole run.
    pub audit_violations: u64,
}

/// Run `market` for `options.steps` steps.
///
/// # Errors
///
/// Returns [`RunnerError::AuditFailed`] if `options.strict_audit` is set and
/// the audit reports a violation after any step.
pub fn run_steps(
    market: &mut HousingMarket,
    options: RunOptions,
    sink: &mut dyn SnapshotSink,
) -> Result<SimulationResult, RunnerError> {
    let mut final_summary: Option<StepSummary> = None;
    let mut total_steps: u64 = 0;
    let mut audit_violations: u64 = 0;

    info!(
        steps = options.steps,
        households = market.households().len(),
        houses = market.stock().len(),
        strict_audit = options.strict_audit,
        "Run starting"
    );

    if market.households().is_empty() {
        warn!("Market has no households -- nothing to run");
        return Ok(SimulationResult {
            end_reason: SimulationEndReason::EmptyPopulation,
            final_summary,
            total_steps,
            audit_violations,
        });
    }

    for _ in 0..options.steps {
        let summary = market.step(sink);
        total_steps = total_steps.saturating_add(1);

        info!(
            step = summary.step,
            displaced = summary.agent_types.displaced,
            owners = summary.agent_types.owner,
            investors = summary.agent_types.investor,
            renters = summary.agent_types.renter,
            vacant = summary.statuses.vacant,
            for_rent = summary.statuses.for_rent,
            rented = summary.statuses.rented,
            purchases = summary.purchases,
            leases = summary.leases,
            mean_wealth = summary.mean_wealth,
            "Step complete"
        );

        let violations = audit_ownership(market.stock(), market.households());
        for violation in &violations {
            warn!(step = summary.step, %violation, "Ownership audit violation");
        }
        audit_violations =
            audit_violations.saturating_add(u64::try_from(violations.len()).unwrap_or(u64::MAX));
        if let (true, Some(violation)) = (options.strict_audit, violations.into_iter().next()) {
            return Err(RunnerError::AuditFailed {
                step: summary.step,
                violation,
            });
        }

        final_summary = Some(summary);
    }

    Ok(SimulationResult {
        end_reason: SimulationEndReason::StepLimitReached,
        final_summary,
        total_steps,
        audit_violations,
    })
}

/// Log the end of a run.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = ?result.end_reason,
        total_steps = result.total_steps,
        audit_violations = result.audit_violations,
        "Run ended"
    );

    if let Some(ref summary) = result.final_summary {
        info!(
            step = summary.step,
            displaced = summary.agent_types.displaced,
            owners = summary.agent_types.owner,
            investors = summary.agent_types.investor,
            renters = summary.agent_types.renter,
            mean_wealth = summary.mean_wealth,
            "Final step summary"
        );
    } else {
        warn!("Run ended with no steps executed");
    }
}
