//! Cross-checks between household state and the housing stock.
//!
//! The market never lets ownership drift on its own, but the audit makes
//! that observable after each step. Checks performed:
//!
//! - every held house has an owner, and every vacant house has none
//! - each house's owner lists it among its houses
//! - each household's houses exist and are owned by that household
//! - each household's classification agrees with its house count
//!   (investor above one, owner at exactly one, neither at zero)
//! - a household's leased house is in the `Rented` state

use std::fmt;

use tenure_agents::Household;
use tenure_stock::HouseStock;
use tenure_types::{AgentType, HouseId, HouseStatus, HouseholdId};

/// One inconsistency found by [`audit_ownership`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditViolation {
    /// A house past `Vacant` has no owner.
    OwnerMissing {
        /// The house.
        house: HouseId,
        /// Its status.
        status: HouseStatus,
    },
    /// A vacant house has an owner recorded.
    VacantWithOwner {
        /// The house.
        house: HouseId,
        /// The recorded owner.
        owner: HouseholdId,
    },
    /// A house names an owner that does not list it.
    OwnerDoesNotHold {
        /// The house.
        house: HouseId,
        /// The recorded owner.
        owner: HouseholdId,
    },
    /// A household lists a house that is not in the stock.
    UnknownHouse {
        /// The household.
        household: HouseholdId,
        /// The missing house.
        house: HouseId,
    },
    /// A household lists a house owned by someone else, or by nobody.
    HeldByOther {
        /// The household.
        household: HouseholdId,
        /// The house.
        house: HouseId,
        /// The owner recorded on the house.
        owner: Option<HouseholdId>,
    },
    /// Classification does not match the number of houses held.
    Misclassified {
        /// The household.
        household: HouseholdId,
        /// Its current classification.
        agent_type: AgentType,
        /// Houses held.
        num_houses: u32,
    },
    /// A household's leased house is not in the `Rented` state.
    LeaseNotRented {
        /// The household.
        household: HouseholdId,
        /// The leased house.
        house: HouseId,
        /// The house's actual status, if it exists.
        status: Option<HouseStatus>,
    },
}

impl fmt::Display for AuditViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OwnerMissing { house, status } => {
                write!(f, "house {house} is {status} but has no owner")
            }
            Self::VacantWithOwner { house, owner } => {
                write!(f, "house {house} is vacant but owned by household {owner}")
            }
            Self::OwnerDoesNotHold { house, owner } => {
                write!(f, "house {house} names household {owner}, which does not hold it")
            }
            Self::UnknownHouse { household, house } => {
                write!(f, "household {household} holds unknown house {house}")
            }
            Self::HeldByOther {
                household,
                house,
                owner,
            } => match owner {
                Some(owner) => write!(
                    f,
                    "household {household} holds house {house}, which is owned by {owner}"
                ),
                None => write!(
                    f,
                    "household {household} holds house {house}, which has no owner"
                ),
            },
            Self::Misclassified {
                household,
                agent_type,
                num_houses,
            } => write!(
                f,
                "household {household} is {agent_type} while holding {num_houses} houses"
            ),
            Self::LeaseNotRented {
                household,
                house,
                status,
            } => match status {
                Some(status) => write!(
                    f,
                    "household {household} leases house {house}, which is {status}"
                ),
                None => write!(
                    f,
                    "household {household} leases house {house}, which does not exist"
                ),
            },
        }
    }
}

/// Check every house and household for consistency.
///
/// Returns all violations found, houses first in scan order, then
/// households in population order. An empty result means the state is
/// consistent.
pub fn audit_ownership(stock: &HouseStock, households: &[Household]) -> Vec<AuditViolation> {
    let mut violations = Vec::new();

    for house in stock {
        match (house.status().is_held(), house.owner()) {
            (false, Some(owner)) => {
                violations.push(AuditViolation::VacantWithOwner {
                    house: house.id(),
                    owner,
                });
            }
            (false, None) => {}
            (true, None) => violations.push(AuditViolation::OwnerMissing {
                house: house.id(),
                status: house.status(),
            }),
            (true, Some(owner)) => {
                let holds = households
                    .iter()
                    .find(|h| h.id == owner)
                    .is_some_and(|h| h.houses.contains(&house.id()));
                if !holds {
                    violations.push(AuditViolation::OwnerDoesNotHold {
                        house: house.id(),
                        owner,
                    });
                }
            }
        }
    }

    for household in households {
        for &house_id in &household.houses {
            match stock.get(house_id) {
                None => violations.push(AuditViolation::UnknownHouse {
                    household: household.id,
                    house: house_id,
                }),
                Some(house) if house.owner() != Some(household.id) => {
                    violations.push(AuditViolation::HeldByOther {
                        household: household.id,
                        house: house_id,
                        owner: house.owner(),
                    });
                }
                Some(_) => {}
            }
        }

        let num_houses = household.num_houses();
        let classified = match num_houses {
            0 => matches!(
                household.agent_type,
                AgentType::Displaced | AgentType::Renter
            ),
            1 => household.agent_type == AgentType::Owner,
            _ => household.agent_type == AgentType::Investor,
        };
        if !classified {
            violations.push(AuditViolation::Misclassified {
                household: household.id,
                agent_type: household.agent_type,
                num_houses,
            });
        }

        if let Some(leased) = household.leased_house {
            let status = stock.get(leased).map(tenure_stock::House::status);
            if status != Some(HouseStatus::Rented) {
                violations.push(AuditViolation::LeaseNotRented {
                    household: household.id,
                    house: leased,
                    status,
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use tenure_stock::House;
    use tenure_types::Ethnicity;

    use super::*;

    fn owner_of(id: u64, houses: &[u64], agent_type: AgentType) -> Household {
        let mut h = Household::new(HouseholdId(id), 0.0, 0.0, Ethnicity::White);
        h.houses = houses.iter().copied().map(HouseId).collect();
        h.agent_type = agent_type;
        h
    }

    #[test]
    fn consistent_state_has_no_violations() {
        let mut sold = House::new(HouseId(1), 10.0, 1.0);
        sold.sell_to(HouseholdId(0));
        let stock = HouseStock::new(vec![sold, House::new(HouseId(2), 10.0, 1.0)]);
        let households = vec![
            owner_of(0, &[1], AgentType::Owner),
            owner_of(1, &[], AgentType::Displaced),
        ];
        assert!(audit_ownership(&stock, &households).is_empty());
    }

    #[test]
    fn owner_not_holding_house_is_reported() {
        let mut sold = House::new(HouseId(1), 10.0, 1.0);
        sold.sell_to(HouseholdId(0));
        let stock = HouseStock::new(vec![sold]);
        let households = vec![owner_of(0, &[], AgentType::Displaced)];
        let violations = audit_ownership(&stock, &households);
        assert_eq!(
            violations,
            vec![AuditViolation::OwnerDoesNotHold {
                house: HouseId(1),
                owner: HouseholdId(0),
            }]
        );
    }

    #[test]
    fn holding_unsold_house_is_reported() {
        let stock = HouseStock::new(vec![House::new(HouseId(1), 10.0, 1.0)]);
        let households = vec![owner_of(0, &[1, 7], AgentType::Investor)];
        let violations = audit_ownership(&stock, &households);
        assert!(violations.contains(&AuditViolation::HeldByOther {
            household: HouseholdId(0),
            house: HouseId(1),
            owner: None,
        }));
        assert!(violations.contains(&AuditViolation::UnknownHouse {
            household: HouseholdId(0),
            house: HouseId(7),
        }));
    }

    #[test]
    fn misclassification_is_reported() {
        let mut a = House::new(HouseId(1), 10.0, 1.0);
        a.sell_to(HouseholdId(0));
        let mut b = House::new(HouseId(2), 10.0, 1.0);
        b.sell_to(HouseholdId(0));
        let stock = HouseStock::new(vec![a, b]);
        let households = vec![owner_of(0, &[1, 2], AgentType::Owner)];
        let violations = audit_ownership(&stock, &households);
        assert_eq!(
            violations,
            vec![AuditViolation::Misclassified {
                household: HouseholdId(0),
                agent_type: AgentType::Owner,
                num_houses: 2,
            }]
        );
    }

    #[test]
    fn houseless_owner_or_investor_is_reported() {
        let stock = HouseStock::new(vec![House::new(HouseId(1), 10.0, 1.0)]);
        let households = vec![
            owner_of(0, &[], AgentType::Investor),
            owner_of(1, &[], AgentType::Owner),
            owner_of(2, &[], AgentType::Renter),
            owner_of(3, &[], AgentType::Displaced),
        ];
        let violations = audit_ownership(&stock, &households);
        assert_eq!(
            violations,
            vec![
                AuditViolation::Misclassified {
                    household: HouseholdId(0),
                    agent_type: AgentType::Investor,
                    num_houses: 0,
                },
                AuditViolation::Misclassified {
                    household: HouseholdId(1),
                    agent_type: AgentType::Owner,
                    num_houses: 0,
                },
            ]
        );
    }

    #[test]
    fn house_owned_by_unknown_household_is_reported() {
        let mut house = House::new(HouseId(1), 10.0, 1.0);
        house.sell_to(HouseholdId(0));
        let stock = HouseStock::new(vec![house]);
        let violations = audit_ownership(&stock, &[]);
        assert_eq!(
            violations,
            vec![AuditViolation::OwnerDoesNotHold {
                house: HouseId(1),
                owner: HouseholdId(0),
            }]
        );
    }

    #[test]
    fn lease_on_listed_house_is_reported() {
        let mut house = House::new(HouseId(1), 10.0, 1.0);
        house.sell_to(HouseholdId(0));
        house.list_for_rent();
        let stock = HouseStock::new(vec![house]);
        let mut tenant = owner_of(1, &[], AgentType::Renter);
        tenant.leased_house = Some(HouseId(1));
        let households = vec![owner_of(0, &[1], AgentType::Owner), tenant];
        let violations = audit_ownership(&stock, &households);
        assert_eq!(
            violations,
            vec![AuditViolation::LeaseNotRented {
                household: HouseholdId(1),
                house: HouseId(1),
                status: Some(HouseStatus::ForRent),
            }]
        );
    }

    #[test]
    fn violation_messages_name_the_parties() {
        let v = AuditViolation::VacantWithOwner {
            house: HouseId(3),
            owner: HouseholdId(4),
        };
        let text = v.to_string();
        assert!(text.contains('3'));
        assert!(text.contains('4'));
    }
}
