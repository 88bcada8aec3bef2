//! The shared housing stock every household scans.
//!
//! [`HouseStock`] is a flat, ordered collection of [`House`]s. Households
//! receive it by `&mut` during their step, so a purchase, listing or lease
//! made by one household is visible to every household evaluated after it.
//! Scan order is creation order and never changes.

use rand::Rng;
use tenure_types::{HouseId, HouseIdSequence, HouseRecord, StatusCounts};
use tracing::debug;

use crate::error::StockError;
use crate::house::House;

/// Distribution parameters for one regime's housing stock.
#[derive(Debug, Clone, PartialEq)]
pub struct HousingParams {
    /// Number of houses to create.
    pub house_count: u32,
    /// Mean of the price distribution.
    pub price_mean: f64,
    /// Standard deviation of the price distribution.
    pub price_std: f64,
    /// Mean of the rent distribution.
    pub rent_mean: f64,
    /// Standard deviation of the rent distribution.
    pub rent_std: f64,
}

/// Ordered pool of houses shared by the whole population.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HouseStock {
    houses: Vec<House>,
}

impl HouseStock {
    /// Wrap an already-built list of houses, keeping its order.
    pub const fn new(houses: Vec<House>) -> Self {
        Self { houses }
    }

    /// Create `params.house_count` houses, taking ids from `ids`.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::EmptyStock`] if `house_count` is zero.
    pub fn generate<R: Rng>(
        params: &HousingParams,
        ids: &mut HouseIdSequence,
        rng: &mut R,
    ) -> Result<Self, StockError> {
        if params.house_count == 0 {
            return Err(StockError::EmptyStock);
        }

        let houses: Vec<House> = (0..params.house_count)
            .map(|_| {
                House::generate(
                    ids.next_id(),
                    params.price_mean,
                    params.price_std,
                    params.rent_mean,
                    params.rent_std,
                    rng,
                )
            })
            .collect();

        debug!(
            house_count = houses.len(),
            first_id = ?houses.first().map(House::id),
            last_id = ?houses.last().map(House::id),
            "Housing stock generated"
        );

        Ok(Self { houses })
    }

    /// Number of houses in the stock.
    pub fn len(&self) -> usize {
        self.houses.len()
    }

    /// Whether the stock holds no houses.
    pub fn is_empty(&self) -> bool {
        self.houses.is_empty()
    }

    /// Iterate houses in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, House> {
        self.houses.iter()
    }

    /// Iterate houses mutably in scan order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, House> {
        self.houses.iter_mut()
    }

    /// Look up a house by id.
    pub fn get(&self, id: HouseId) -> Option<&House> {
        self.houses.iter().find(|h| h.id() == id)
    }

    /// Look up a house by id for mutation.
    pub fn get_mut(&mut self, id: HouseId) -> Option<&mut House> {
        self.houses.iter_mut().find(|h| h.id() == id)
    }

    /// Price and rent of every house, in scan order.
    pub fn records(&self) -> Vec<HouseRecord> {
        self.houses.iter().map(House::record).collect()
    }

    /// Tally of houses per status.
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for house in &self.houses {
            counts.record(house.status());
        }
        counts
    }
}

impl<'a> IntoIterator for &'a HouseStock {
    type Item = &'a House;
    type IntoIter = std::slice::Iter<'a, House>;

    fn into_iter(self) -> Self::IntoIter {
        self.houses.iter()
    }
}

impl<'a> IntoIterator for &'a mut HouseStock {
    type Item = &'a mut House;
    type IntoIter = std::slice::IterMut<'a, House>;

    fn into_iter(self) -> Self::IntoIter {
        self.houses.iter_mut()
    }
}
