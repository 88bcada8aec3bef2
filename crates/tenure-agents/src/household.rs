//! Household state and the per-step decision policy.
//!
//! A [`Household`] is one agent of the model. Each step it runs the same
//! fixed sequence against the shared [`HouseStock`]:
//!
//! 1. Income accrual: `wealth += income`, then `income *= 1.05`.
//! 2. [`buy_house`]: first vacant house priced under the purchase threshold.
//! 3. Reclassification by house count. More than one house makes the
//!    household an investor and lists its newest house for rent; exactly
//!    one makes it an owner.
//! 4. Renters pay their rent.
//! 5. [`rent_house`]: displaced households lease the first listed house
//!    whose rent is under 30% of income.
//! 6. [`collect_rent`]: investors collect rent on their leased houses.
//!
//! Classification happens only at step 3, so changes made later in the
//! same step are not reflected until the next step. Unmet conditions are
//! silent no-ops.
//!
//! [`buy_house`]: Household::buy_house
//! [`rent_house`]: Household::rent_house
//! [`collect_rent`]: Household::collect_rent

use rand::Rng;
use tenure_stock::{HouseStock, sampling};
use tenure_types::{AgentSnapshot, AgentType, Ethnicity, HouseId, HouseStatus, HouseholdId};
use tracing::debug;

use crate::population::PopulationParams;

/// Multiplier applied to income after it is credited each step.
pub const INCOME_GROWTH: f64 = 1.05;

/// Share of wealth a black household may spend on a house.
pub const BLACK_PURCHASE_FACTOR: f64 = 0.75;

/// Maximum rent as a share of income.
pub const RENT_TO_INCOME_CAP: f64 = 0.3;

/// Income floor as a share of the population mean income.
pub const INCOME_FLOOR_FRACTION: f64 = 0.1;

/// A household agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Household {
    /// Index of the household in the population.
    pub id: HouseholdId,
    /// Accumulated wealth. Can go negative through rent payments.
    pub wealth: f64,
    /// Per-step income, credited before it grows.
    pub income: f64,
    /// Fixed at construction.
    pub ethnicity: Ethnicity,
    /// Classification as of the last checkpoint.
    pub agent_type: AgentType,
    /// Owned houses in purchase order.
    pub houses: Vec<HouseId>,
    /// Rent owed each step once a lease is signed.
    pub rent_payment: Option<f64>,
    /// The house this household leases.
    pub leased_house: Option<HouseId>,
}

/// What a household did during one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HouseholdActivity {
    /// House bought this step.
    pub purchased: Option<HouseId>,
    /// House newly listed for rent this step.
    pub listed: Option<HouseId>,
    /// House leased this step.
    pub leased: Option<HouseId>,
    /// Rent credited this step.
    pub rent_collected: f64,
}

impl Household {
    /// Create a displaced household with no houses and no lease.
    pub const fn new(id: HouseholdId, wealth: f64, income: f64, ethnicity: Ethnicity) -> Self {
        Self {
            id,
            wealth,
            income,
            ethnicity,
            agent_type: AgentType::Displaced,
            houses: Vec::new(),
            rent_payment: None,
            leased_house: None,
        }
    }

    /// Sample a household from the population distributions.
    ///
    /// Draw order is wealth, income, then the ethnicity coin flip. Wealth
    /// is floored at zero and income at 10% of the mean income.
    pub fn generate<R: Rng>(id: HouseholdId, params: &PopulationParams, rng: &mut R) -> Self {
        let wealth = sampling::normal(rng, params.wealth_mean, params.wealth_std).max(0.0);
        let income_floor = INCOME_FLOOR_FRACTION * params.income_mean;
        let income = sampling::normal(rng, params.income_mean, params.income_std).max(income_floor);
        let ethnicity = if sampling::unit_uniform(rng) > 0.5 {
            Ethnicity::White
        } else {
            Ethnicity::Black
        };
        Self::new(id, wealth, income, ethnicity)
    }

    /// Highest price this household will pay for a house right now.
    pub const fn purchase_threshold(&self) -> f64 {
        match self.ethnicity {
            Ethnicity::White => self.wealth,
            Ethnicity::Black => BLACK_PURCHASE_FACTOR * self.wealth,
        }
    }

    /// Rent must be strictly below this for the household to lease.
    pub const fn rent_ceiling(&self) -> f64 {
        RENT_TO_INCOME_CAP * self.income
    }

    /// Number of owned houses.
    pub fn num_houses(&self) -> u32 {
        u32::try_from(self.houses.len()).unwrap_or(u32::MAX)
    }

    /// Observable state of the household tagged with `step`.
    pub fn snapshot(&self, step: u64) -> AgentSnapshot {
        AgentSnapshot {
            step,
            agent_id: self.id,
            wealth: self.wealth,
            agent_type: self.agent_type,
            ethnicity: self.ethnicity,
            num_houses: self.num_houses(),
        }
    }

    /// Run the full decision policy once against the shared stock.
    pub fn step(&mut self, stock: &mut HouseStock) -> HouseholdActivity {
        let mut activity = HouseholdActivity::default();

        self.accrue_income();

        activity.purchased = self.buy_house(stock);

        if self.houses.len() > 1 {
            self.agent_type = AgentType::Investor;
            activity.listed = self.rent_out_house(stock);
        } else if self.houses.len() == 1 {
            self.agent_type = AgentType::Owner;
        }

        if let (AgentType::Renter, Some(rent)) = (self.agent_type, self.rent_payment) {
            self.wealth -= rent;
        }

        if self.agent_type == AgentType::Displaced {
            activity.leased = self.rent_house(stock);
        }

        activity.rent_collected = self.collect_rent(stock);

        activity
    }

    /// Credit income to wealth, then grow income for the next step.
    pub const fn accrue_income(&mut self) {
        self.wealth += self.income;
        self.income *= INCOME_GROWTH;
    }

    /// Buy the first vacant house priced below the purchase threshold.
    ///
    /// At most one house is bought per call. Returns the house bought.
    pub fn buy_house(&mut self, stock: &mut HouseStock) -> Option<HouseId> {
        let threshold = self.purchase_threshold();
        let house = stock
            .iter_mut()
            .find(|h| h.status() == HouseStatus::Vacant && h.price() < threshold)?;

        if !house.sell_to(self.id) {
            return None;
        }
        self.wealth -= house.price();
        self.houses.push(house.id());

        debug!(
            household = %self.id,
            house = %house.id(),
            price = house.price(),
            wealth = self.wealth,
            "Household bought house"
        );
        Some(house.id())
    }

    /// List the most recently bought house for rent.
    ///
    /// Only an `Owned` house is listed; one already listed or leased is
    /// left as it is. Returns the house listed.
    pub fn rent_out_house(&self, stock: &mut HouseStock) -> Option<HouseId> {
        let latest = *self.houses.last()?;
        let house = stock.get_mut(latest)?;
        if !house.list_for_rent() {
            return None;
        }

        debug!(household = %self.id, house = %latest, "Household listed house for rent");
        Some(latest)
    }

    /// Lease the first listed house whose rent is below the rent ceiling.
    ///
    /// On success the household becomes a renter. Returns the house leased.
    pub fn rent_house(&mut self, stock: &mut HouseStock) -> Option<HouseId> {
        let ceiling = self.rent_ceiling();
        let house = stock
            .iter_mut()
            .find(|h| h.status() == HouseStatus::ForRent && h.rent() < ceiling)?;

        if !house.lease() {
            return None;
        }
        self.agent_type = AgentType::Renter;
        self.rent_payment = Some(house.rent());
        self.leased_house = Some(house.id());

        debug!(
            household = %self.id,
            house = %house.id(),
            rent = house.rent(),
            "Household leased house"
        );
        Some(house.id())
    }

    /// Credit rent from every leased house this investor owns.
    ///
    /// Does nothing unless the household is currently an investor. Returns
    /// the total credited.
    pub fn collect_rent(&mut self, stock: &HouseStock) -> f64 {
        if self.agent_type != AgentType::Investor {
            return 0.0;
        }

        let mut collected = 0.0;
        for house in stock
            .iter()
            .filter(|h| h.status() == HouseStatus::Rented && self.houses.contains(&h.id()))
        {
            self.wealth += house.rent();
            collected += house.rent();
        }

        if collected > 0.0 {
            debug!(household = %self.id, collected, "Investor collected rent");
        }
        collected
    }
}
