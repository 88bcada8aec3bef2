//! Enumeration types for the Tenure simulation.
//!
//! Variant order is alphabetical by label so that derived `Ord` matches the
//! sort order of the exported report tables.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// House status
// ---------------------------------------------------------------------------

/// Occupancy status of a house.
///
/// Status only moves forward: `Vacant -> Owned -> ForRent -> Rented`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseStatus {
    /// Nobody owns the house.
    Vacant,
    /// Bought by a household and not listed.
    Owned,
    /// Listed by an investor, waiting for a tenant.
    ForRent,
    /// Leased to a tenant household.
    Rented,
}

impl HouseStatus {
    /// All statuses in state-machine order.
    pub const ALL: [Self; 4] = [Self::Vacant, Self::Owned, Self::ForRent, Self::Rented];

    /// The label used in logs and exported tables.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vacant => "vacant",
            Self::Owned => "owned",
            Self::ForRent => "for_rent",
            Self::Rented => "rented",
        }
    }

    /// Whether `next` is the single legal successor of this status.
    pub const fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Vacant, Self::Owned) | (Self::Owned, Self::ForRent) | (Self::ForRent, Self::Rented)
        )
    }

    /// Whether the status implies the house has an owner.
    pub const fn is_held(self) -> bool {
        !matches!(self, Self::Vacant)
    }
}

impl core::fmt::Display for HouseStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Household classification
// ---------------------------------------------------------------------------

/// Housing classification of a household, re-evaluated every step.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    /// Neither owns nor rents. Every household starts here.
    #[default]
    Displaced,
    /// Owns more than one house.
    Investor,
    /// Owns exactly one house.
    Owner,
    /// Leases a house from an investor.
    Renter,
}

impl AgentType {
    /// All agent types in report order.
    pub const ALL: [Self; 4] = [Self::Displaced, Self::Investor, Self::Owner, Self::Renter];

    /// The label used in logs and exported tables.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Displaced => "displaced",
            Self::Investor => "investor",
            Self::Owner => "owner",
            Self::Renter => "renter",
        }
    }
}

impl core::fmt::Display for AgentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Ethnicity
// ---------------------------------------------------------------------------

/// Ethnicity of a household, fixed at construction.
///
/// Drives the differential affordability threshold in the purchase rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ethnicity {
    /// Purchase threshold is 75% of wealth.
    Black,
    /// Purchase threshold is the full wealth.
    White,
}

impl Ethnicity {
    /// The label used in logs and exported tables.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl core::fmt::Display for Ethnicity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_advances_one_step_at_a_time() {
        assert!(HouseStatus::Vacant.can_advance_to(HouseStatus::Owned));
        assert!(HouseStatus::Owned.can_advance_to(HouseStatus::ForRent));
        assert!(HouseStatus::ForRent.can_advance_to(HouseStatus::Rented));

        assert!(!HouseStatus::Vacant.can_advance_to(HouseStatus::ForRent));
        assert!(!HouseStatus::Rented.can_advance_to(HouseStatus::ForRent));
        assert!(!HouseStatus::ForRent.can_advance_to(HouseStatus::ForRent));
        assert!(!HouseStatus::Owned.can_advance_to(HouseStatus::Vacant));
    }

    #[test]
    fn only_vacant_houses_are_unheld() {
        assert!(!HouseStatus::Vacant.is_held());
        assert!(HouseStatus::Owned.is_held());
        assert!(HouseStatus::ForRent.is_held());
        assert!(HouseStatus::Rented.is_held());
    }

    #[test]
    fn agent_type_order_is_alphabetical() {
        let mut sorted = AgentType::ALL;
        sorted.sort_by_key(|t| t.label());
        assert_eq!(sorted, AgentType::ALL);
        assert!(Ethnicity::Black < Ethnicity::White);
    }

    #[test]
    fn labels_match_serde_names() {
        for status in HouseStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
        for agent_type in AgentType::ALL {
            let json = serde_json::to_string(&agent_type).unwrap();
            assert_eq!(json, format!("\"{}\"", agent_type.label()));
        }
    }

    #[test]
    fn households_start_displaced() {
        assert_eq!(AgentType::default(), AgentType::Displaced);
    }
}
