//! A single housing unit and its status state machine.
//!
//! Price and rent are drawn once at creation and never change. Status
//! changes only through [`House::sell_to`], [`House::list_for_rent`] and
//! [`House::lease`], each of which applies exactly one forward transition
//! and reports whether it did. Every status a house has held is kept in
//! [`House::status_history`].

use rand::Rng;
use tenure_types::{HouseId, HouseRecord, HouseStatus, HouseholdId};

use crate::sampling;

/// A housing unit in the shared stock.
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    id: HouseId,
    price: f64,
    rent: f64,
    owner: Option<HouseholdId>,
    status: HouseStatus,
    history: Vec<HouseStatus>,
}

impl House {
    /// Create a vacant, unowned house with a fixed price and rent.
    pub fn new(id: HouseId, price: f64, rent: f64) -> Self {
        Self {
            id,
            price,
            rent,
            owner: None,
            status: HouseStatus::Vacant,
            history: vec![HouseStatus::Vacant],
        }
    }

    /// Create a house with price and rent drawn from normal distributions.
    ///
    /// Price is drawn before rent. Neither is floored, so a house can come
    /// out with a non-positive price or rent.
    pub fn generate<R: Rng>(
        id: HouseId,
        price_mean: f64,
        price_std: f64,
        rent_mean: f64,
        rent_std: f64,
        rng: &mut R,
    ) -> Self {
        let price = sampling::normal(rng, price_mean, price_std);
        let rent = sampling::normal(rng, rent_mean, rent_std);
        Self::new(id, price, rent)
    }

    /// House identifier.
    pub const fn id(&self) -> HouseId {
        self.id
    }

    /// Purchase price.
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Rent charged to a tenant.
    pub const fn rent(&self) -> f64 {
        self.rent
    }

    /// Owning household, if any.
    pub const fn owner(&self) -> Option<HouseholdId> {
        self.owner
    }

    /// Current status.
    pub const fn status(&self) -> HouseStatus {
        self.status
    }

    /// Every status this house has held, oldest first. Starts with `Vacant`.
    pub fn status_history(&self) -> &[HouseStatus] {
        &self.history
    }

    /// Price and rent as an export record.
    pub const fn record(&self) -> HouseRecord {
        HouseRecord {
            id: self.id,
            price: self.price,
            rent: self.rent,
        }
    }

    /// Transfer a vacant house to `buyer`. Returns `false` if not vacant.
    pub fn sell_to(&mut self, buyer: HouseholdId) -> bool {
        if !self.advance(HouseStatus::Owned) {
            return false;
        }
        self.owner = Some(buyer);
        true
    }

    /// List an owned house for rent. Returns `false` unless it was `Owned`.
    pub fn list_for_rent(&mut self) -> bool {
        self.advance(HouseStatus::ForRent)
    }

    /// Lease a listed house to a tenant. Returns `false` unless it was `ForRent`.
    pub fn lease(&mut self) -> bool {
        self.advance(HouseStatus::Rented)
    }

    fn advance(&mut self, next: HouseStatus) -> bool {
        if !self.status.can_advance_to(next) {
            return false;
        }
        self.status = next;
        self.history.push(next);
        true
    }
}
