//! Record structs shared between the simulation core and the report layer.

use serde::{Deserialize, Serialize};

use crate::enums::{AgentType, Ethnicity, HouseStatus};
use crate::ids::{HouseId, HouseholdId};

/// One recorded row of a household's observable state at a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    /// Step index the snapshot belongs to (first step is 1).
    pub step: u64,
    /// The household the snapshot describes.
    pub agent_id: HouseholdId,
    /// Wealth after the household's decision policy ran.
    pub wealth: f64,
    /// Classification after the step.
    pub agent_type: AgentType,
    /// Fixed ethnicity of the household.
    pub ethnicity: Ethnicity,
    /// Number of houses the household owns.
    pub num_houses: u32,
}

/// Initial price and rent of a house, exported once per regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRecord {
    /// House identifier.
    pub id: HouseId,
    /// Sampled purchase price.
    pub price: f64,
    /// Sampled rent.
    pub rent: f64,
}

/// Number of houses in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Houses nobody owns.
    pub vacant: u32,
    /// Houses owned and not listed.
    pub owned: u32,
    /// Houses listed for rent.
    pub for_rent: u32,
    /// Houses leased to a tenant.
    pub rented: u32,
}

impl StatusCounts {
    /// Count one more house in `status`.
    pub const fn record(&mut self, status: HouseStatus) {
        let slot = match status {
            HouseStatus::Vacant => &mut self.vacant,
            HouseStatus::Owned => &mut self.owned,
            HouseStatus::ForRent => &mut self.for_rent,
            HouseStatus::Rented => &mut self.rented,
        };
        *slot = slot.saturating_add(1);
    }

    /// Number of houses in `status`.
    pub const fn get(&self, status: HouseStatus) -> u32 {
        match status {
            HouseStatus::Vacant => self.vacant,
            HouseStatus::Owned => self.owned,
            HouseStatus::ForRent => self.for_rent,
            HouseStatus::Rented => self.rented,
        }
    }
}

/// Number of households in each classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentTypeCounts {
    /// Households neither owning nor renting.
    pub displaced: u32,
    /// Households owning more than one house.
    pub investor: u32,
    /// Households owning exactly one house.
    pub owner: u32,
    /// Households leasing a house.
    pub renter: u32,
}

impl AgentTypeCounts {
    /// Count one more household of `agent_type`.
    pub const fn record(&mut self, agent_type: AgentType) {
        let slot = match agent_type {
            AgentType::Displaced => &mut self.displaced,
            AgentType::Investor => &mut self.investor,
            AgentType::Owner => &mut self.owner,
            AgentType::Renter => &mut self.renter,
        };
        *slot = slot.saturating_add(1);
    }

    /// Number of households of `agent_type`.
    pub const fn get(&self, agent_type: AgentType) -> u32 {
        match agent_type {
            AgentType::Displaced => self.displaced,
            AgentType::Investor => self.investor,
            AgentType::Owner => self.owner,
            AgentType::Renter => self.renter,
        }
    }
}

/// Aggregate outcome of one market step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepSummary {
    /// The step that just completed.
    pub step: u64,
    /// Households per classification after the step.
    pub agent_types: AgentTypeCounts,
    /// Houses per status after the step.
    pub statuses: StatusCounts,
    /// Mean household wealth after the step (0 for an empty population).
    pub mean_wealth: f64,
    /// Houses bought during the step.
    pub purchases: u32,
    /// Houses newly listed for rent during the step.
    pub listings: u32,
    /// Leases signed during the step.
    pub leases: u32,
    /// Total rent credited to investors during the step.
    pub rent_collected: f64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_counts_tally_each_status() {
        let mut counts = StatusCounts::default();
        counts.record(HouseStatus::Vacant);
        counts.record(HouseStatus::Vacant);
        counts.record(HouseStatus::Rented);
        assert_eq!(counts.get(HouseStatus::Vacant), 2);
        assert_eq!(counts.get(HouseStatus::Rented), 1);
        assert_eq!(counts.get(HouseStatus::Owned), 0);
    }

    #[test]
    fn agent_type_counts_tally_each_type() {
        let mut counts = AgentTypeCounts::default();
        counts.record(AgentType::Investor);
        counts.record(AgentType::Owner);
        counts.record(AgentType::Owner);
        assert_eq!(counts.get(AgentType::Investor), 1);
        assert_eq!(counts.get(AgentType::Owner), 2);
        assert_eq!(counts.get(AgentType::Displaced), 0);
    }

    #[test]
    fn snapshot_serializes_labels() {
        let snapshot = AgentSnapshot {
            step: 3,
            agent_id: HouseholdId(7),
            wealth: 12.5,
            agent_type: AgentType::Renter,
            ethnicity: Ethnicity::Black,
            num_houses: 0,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["agent_type"], "renter");
        assert_eq!(json["ethnicity"], "black");
        assert_eq!(json["agent_id"], 7);
    }
}
