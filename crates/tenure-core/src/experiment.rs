//! Experiment planning and execution across price regimes.
//!
//! An [`ExperimentPlan`] expands a [`TenureConfig`] into an ordered list of
//! [`RegimeSpec`]s, one per price multiplier. [`run_plan`] then runs them in
//! order from a single seeded RNG stream and a single house id sequence, so
//! house ids keep counting up across regimes and the whole experiment is
//! reproducible from the seed.
//!
//! Within a regime the houses are sampled before the households.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tenure_agents::PopulationParams;
use tenure_stock::{HouseStock, HousingParams, StockError};
use tenure_types::{AgentSnapshot, HouseIdSequence, HouseRecord};
use tracing::info;

use crate::config::TenureConfig;
use crate::market::{HousingMarket, MarketError};
use crate::recorder::DataCollector;
use crate::runner::{RunOptions, RunnerError, SimulationResult, log_simulation_end, run_steps};

/// Error type for experiment operations.
#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    /// The configuration lists no regimes.
    #[error("experiment has no regimes")]
    NoRegimes,

    /// A regime's housing stock could not be generated.
    #[error("regime {regime}: {source}")]
    Stock {
        /// 1-based regime index.
        regime: u32,
        /// The underlying stock error.
        source: StockError,
    },

    /// A regime's market could not be built.
    #[error("regime {regime}: {source}")]
    Market {
        /// 1-based regime index.
        regime: u32,
        /// The underlying market error.
        source: MarketError,
    },

    /// A regime's run was aborted.
    #[error("regime {regime}: {source}")]
    Runner {
        /// 1-based regime index.
        regime: u32,
        /// The underlying runner error.
        source: RunnerError,
    },
}

/// Fully resolved parameters for one regime.
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeSpec {
    /// 1-based position in the plan. Used to name the regime's artifacts.
    pub index: u32,
    /// Factor applied to the base mean house price.
    pub price_multiplier: f64,
    /// Household sampling parameters.
    pub population: PopulationParams,
    /// House sampling parameters, price already scaled.
    pub housing: HousingParams,
    /// Steps to run.
    pub steps: u64,
}

/// An ordered set of regimes sharing one seed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentPlan {
    /// Experiment name.
    pub name: String,
    /// Seed for the shared RNG stream.
    pub seed: u64,
    /// Abort on the first ownership audit violation.
    pub strict_audit: bool,
    /// Regimes in run order.
    pub regimes: Vec<RegimeSpec>,
}

impl ExperimentPlan {
    /// Expand `config` into one [`RegimeSpec`] per price multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentError::NoRegimes`] if no price multipliers are
    /// configured.
    pub fn from_config(config: &TenureConfig) -> Result<Self, ExperimentError> {
        if config.regimes.price_multipliers.is_empty() {
            return Err(ExperimentError::NoRegimes);
        }

        let regimes = (1_u32..)
            .zip(&config.regimes.price_multipliers)
            .map(|(index, &price_multiplier)| RegimeSpec {
                index,
                price_multiplier,
                population: config.population.params(),
                housing: config.housing.params(price_multiplier),
                steps: config.experiment.steps,
            })
            .collect();

        Ok(Self {
            name: config.experiment.name.clone(),
            seed: config.experiment.seed,
            strict_audit: config.experiment.strict_audit,
            regimes,
        })
    }
}

/// Everything one regime produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeOutcome {
    /// 1-based regime index.
    pub index: u32,
    /// The regime's price multiplier.
    pub price_multiplier: f64,
    /// Final state of the regime's market.
    pub market: HousingMarket,
    /// Snapshot history in recording order.
    pub snapshots: Vec<AgentSnapshot>,
    /// How the run ended.
    pub result: SimulationResult,
}

impl RegimeOutcome {
    /// Id, price and rent of every house in the regime, in creation order.
    pub fn houses(&self) -> Vec<HouseRecord> {
        self.market.stock().records()
    }
}

/// Build and run a single regime.
///
/// Houses take their ids from `ids`, so callers running several regimes
/// should pass the same sequence to each.
///
/// # Errors
///
/// Returns [`ExperimentError`] if the stock or population is empty, or if
/// a strict audit fails.
pub fn run_regime<R: Rng>(
    spec: &RegimeSpec,
    strict_audit: bool,
    ids: &mut HouseIdSequence,
    rng: &mut R,
) -> Result<RegimeOutcome, ExperimentError> {
    let regime = spec.index;
    info!(
        regime,
        price_multiplier = spec.price_multiplier,
        price_mean = spec.housing.price_mean,
        households = spec.population.agent_count,
        houses = spec.housing.house_count,
        "Regime starting"
    );

    let stock = HouseStock::generate(&spec.housing, ids, rng)
        .map_err(|source| ExperimentError::Stock { regime, source })?;
    let mut market = HousingMarket::new(&spec.population, stock, rng)
        .map_err(|source| ExperimentError::Market { regime, source })?;

    let mut collector = DataCollector::new();
    let options = RunOptions {
        steps: spec.steps,
        strict_audit,
    };
    let result = run_steps(&mut market, options, &mut collector)
        .map_err(|source| ExperimentError::Runner { regime, source })?;
    log_simulation_end(&result);

    Ok(RegimeOutcome {
        index: regime,
        price_multiplier: spec.price_multiplier,
        market,
        snapshots: collector.into_snapshots(),
        result,
    })
}

/// Run every regime of `plan` in order.
///
/// # Errors
///
/// Returns the first regime's [`ExperimentError`]; later regimes are not
/// run.
pub fn run_plan(plan: &ExperimentPlan) -> Result<Vec<RegimeOutcome>, ExperimentError> {
    let mut rng = ChaCha8Rng::seed_from_u64(plan.seed);
    let mut ids = HouseIdSequence::new();

    info!(
        experiment = %plan.name,
        seed = plan.seed,
        regimes = plan.regimes.len(),
        "Experiment starting"
    );

    plan.regimes
        .iter()
        .map(|spec| run_regime(spec, plan.strict_audit, &mut ids, &mut rng))
        .collect()
}
