//! The housing market model: population, shared stock, and the step loop.
//!
//! [`HousingMarket::step`] runs every household's decision policy exactly
//! once, in population order, against the one [`HouseStock`] the market
//! owns. Because the stock is passed by `&mut` to each household in turn,
//! a house bought or leased by household `i` is already gone when household
//! `i + 1` scans. After the whole population has acted, one snapshot per
//! household is handed to the [`SnapshotSink`].
//!
//! There is no market-level logic beyond that: no clearing, no price
//! adjustment, no shuffling of the activation order.

use rand::Rng;
use tenure_agents::{AgentError, Household, PopulationParams, generate_population};
use tenure_stock::{HouseStock, StockError};
use tenure_types::StepSummary;
use tracing::debug;

use crate::recorder::SnapshotSink;

/// Errors that can occur when constructing a market.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    /// The population could not be built.
    #[error("population error: {source}")]
    Population {
        /// The underlying agent error.
        #[from]
        source: AgentError,
    },

    /// The housing stock was unusable.
    #[error("housing stock error: {source}")]
    Stock {
        /// The underlying stock error.
        #[from]
        source: StockError,
    },
}

/// A population of households sharing one housing stock.
#[derive(Debug, Clone, PartialEq)]
pub struct HousingMarket {
    households: Vec<Household>,
    stock: HouseStock,
    steps: u64,
}

impl HousingMarket {
    /// Sample a population and attach it to `stock`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Stock`] if `stock` is empty, or
    /// [`MarketError::Population`] if `params.agent_count` is zero.
    pub fn new<R: Rng>(
        params: &PopulationParams,
        stock: HouseStock,
        rng: &mut R,
    ) -> Result<Self, MarketError> {
        if stock.is_empty() {
            return Err(StockError::EmptyStock.into());
        }
        let households = generate_population(params, rng)?;
        Ok(Self::from_parts(households, stock))
    }

    /// Assemble a market from an explicit population and stock.
    ///
    /// No validation is applied; an empty population is allowed and makes
    /// [`step`](Self::step) a no-op.
    pub const fn from_parts(households: Vec<Household>, stock: HouseStock) -> Self {
        Self {
            households,
            stock,
            steps: 0,
        }
    }

    /// Households in activation order.
    pub fn households(&self) -> &[Household] {
        &self.households
    }

    /// The shared housing stock.
    pub const fn stock(&self) -> &HouseStock {
        &self.stock
    }

    /// Number of steps completed so far.
    pub const fn steps_completed(&self) -> u64 {
        self.steps
    }

    /// Advance the market by one step and record a snapshot per household.
    ///
    /// Snapshots are tagged with the index of the step just completed, so
    /// the first call records step 1. With no households nothing happens
    /// and the step counter does not move.
    pub fn step(&mut self, sink: &mut dyn SnapshotSink) -> StepSummary {
        if self.households.is_empty() {
            debug!(step = self.steps, "Market has no households, step skipped");
            return StepSummary {
                step: self.steps,
                statuses: self.stock.status_counts(),
                ..StepSummary::default()
            };
        }

        let step = self.steps.saturating_add(1);
        let mut summary = StepSummary {
            step,
            ..StepSummary::default()
        };

        for household in &mut self.households {
            let activity = household.step(&mut self.stock);
            if activity.purchased.is_some() {
                summary.purchases = summary.purchases.saturating_add(1);
            }
            if activity.listed.is_some() {
                summary.listings = summary.listings.saturating_add(1);
            }
            if activity.leased.is_some() {
                summary.leases = summary.leases.saturating_add(1);
            }
            summary.rent_collected += activity.rent_collected;
        }
        self.steps = step;

        let mut wealth_total = 0.0;
        let mut population = 0.0;
        for household in &self.households {
            sink.record(household.snapshot(step));
            summary.agent_types.record(household.agent_type);
            wealth_total += household.wealth;
            population += 1.0;
        }
        summary.mean_wealth = wealth_total / population;
        summary.statuses = self.stock.status_counts();

        summary
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tenure_stock::House;
    use tenure_types::{AgentType, Ethnicity, HouseId, HouseStatus, HouseholdId};

    use super::*;
    use crate::recorder::{DataCollector, NullSink};

    fn params(agent_count: u32) -> PopulationParams {
        PopulationParams {
            agent_count,
            income_mean: 20_000.0,
            income_std: 2_050.0,
            wealth_mean: 1_000_000.0,
            wealth_std: 500_000.0,
        }
    }

    #[test]
    fn new_rejects_empty_stock() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let result = HousingMarket::new(&params(5), HouseStock::default(), &mut rng);
        assert!(matches!(result, Err(MarketError::Stock { .. })));
    }

    #[test]
    fn new_rejects_empty_population() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let stock = HouseStock::new(vec![House::new(HouseId(1), 1.0, 1.0)]);
        let result = HousingMarket::new(&params(0), stock, &mut rng);
        assert!(matches!(result, Err(MarketError::Population { .. })));
    }

    #[test]
    fn step_records_one_snapshot_per_household() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let stock = HouseStock::new(vec![House::new(HouseId(1), 1.0, 1.0)]);
        let mut market = HousingMarket::new(&params(4), stock, &mut rng).unwrap();
        let mut collector = DataCollector::new();

        let first = market.step(&mut collector);
        let second = market.step(&mut collector);

        assert_eq!(first.step, 1);
        assert_eq!(second.step, 2);
        assert_eq!(market.steps_completed(), 2);
        assert_eq!(collector.at_step(1).count(), 4);
        assert_eq!(collector.at_step(2).count(), 4);
        let order: Vec<u64> = collector
            .at_step(1)
            .map(|s| s.agent_id.into_inner())
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn earlier_household_wins_contested_house() {
        let stock = HouseStock::new(vec![House::new(HouseId(1), 50.0, 10.0)]);
        let households = vec![
            Household::new(HouseholdId(0), 100.0, 0.0, Ethnicity::White),
            Household::new(HouseholdId(1), 1_000.0, 0.0, Ethnicity::White),
        ];
        let mut market = HousingMarket::from_parts(households, stock);

        let summary = market.step(&mut NullSink);

        assert_eq!(summary.purchases, 1);
        assert_eq!(market.stock().get(HouseId(1)).and_then(House::owner), Some(HouseholdId(0)));
        let types: Vec<AgentType> = market.households().iter().map(|h| h.agent_type).collect();
        assert_eq!(types, vec![AgentType::Owner, AgentType::Displaced]);
    }

    #[test]
    fn listing_is_visible_to_later_household_in_same_step() {
        // Household 0 already owns house 1 and buys house 2 this step, which
        // lists house 2. Household 1 is processed next and leases it.
        let mut first_house = House::new(HouseId(1), 10.0, 10.0);
        first_house.sell_to(HouseholdId(0));
        let stock = HouseStock::new(vec![first_house, House::new(HouseId(2), 10.0, 100.0)]);

        let mut investor = Household::new(HouseholdId(0), 1_000.0, 0.0, Ethnicity::White);
        investor.houses = vec![HouseId(1)];
        investor.agent_type = AgentType::Owner;
        let tenant = Household::new(HouseholdId(1), 0.0, 1_000.0, Ethnicity::Black);

        let mut market = HousingMarket::from_parts(vec![investor, tenant], stock);
        let summary = market.step(&mut NullSink);

        assert_eq!(summary.purchases, 1);
        assert_eq!(summary.listings, 1);
        assert_eq!(summary.leases, 1);
        assert_eq!(market.stock().get(HouseId(2)).map(House::status), Some(HouseStatus::Rented));
        assert_eq!(market.households().get(1).map(|h| h.agent_type), Some(AgentType::Renter));
        assert_eq!(summary.agent_types.investor, 1);
        assert_eq!(summary.agent_types.renter, 1);
        assert_eq!(summary.statuses.rented, 1);
        assert_eq!(summary.statuses.owned, 1);
    }

    #[test]
    fn empty_population_step_is_noop() {
        let stock = HouseStock::new(vec![House::new(HouseId(1), 1.0, 1.0)]);
        let mut market = HousingMarket::from_parts(Vec::new(), stock);
        let mut collector = DataCollector::new();

        let summary = market.step(&mut collector);

        assert_eq!(summary.step, 0);
        assert_eq!(market.steps_completed(), 0);
        assert!(collector.is_empty());
        assert_eq!(summary.statuses.vacant, 1);
    }

    #[test]
    fn summary_mean_wealth_matches_snapshots() {
        let households = vec![
            Household::new(HouseholdId(0), 100.0, 10.0, Ethnicity::White),
            Household::new(HouseholdId(1), 300.0, 30.0, Ethnicity::Black),
        ];
        let stock = HouseStock::new(vec![House::new(HouseId(1), 1e9, 1e9)]);
        let mut market = HousingMarket::from_parts(households, stock);
        let summary = market.step(&mut NullSink);
        // (110 + 330) / 2
        assert!((summary.mean_wealth - 220.0).abs() < 1e-9);
        assert_eq!(summary.agent_types.displaced, 2);
    }
}
