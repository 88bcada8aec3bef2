//! Population sampling.
//!
//! Households are numbered `0..agent_count` in the order they are drawn,
//! and that order is the enumeration order the market steps them in.

use rand::Rng;
use tenure_types::HouseholdId;
use tracing::debug;

use crate::error::AgentError;
use crate::household::Household;

/// Distribution parameters for a population of households.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationParams {
    /// Number of households to create.
    pub agent_count: u32,
    /// Mean of the income distribution.
    pub income_mean: f64,
    /// Standard deviation of the income distribution.
    pub income_std: f64,
    /// Mean of the initial wealth distribution.
    pub wealth_mean: f64,
    /// Standard deviation of the initial wealth distribution.
    pub wealth_std: f64,
}

/// Sample `params.agent_count` households with ids `0..agent_count`.
///
/// # Errors
///
/// Returns [`AgentError::EmptyPopulation`] if `agent_count` is zero.
pub fn generate_population<R: Rng>(
    params: &PopulationParams,
    rng: &mut R,
) -> Result<Vec<Household>, AgentError> {
    if params.agent_count == 0 {
        return Err(AgentError::EmptyPopulation);
    }

    let households: Vec<Household> = (0..params.agent_count)
        .map(|index| Household::generate(HouseholdId::new(u64::from(index)), params, rng))
        .collect();

    debug!(agent_count = households.len(), "Population generated");
    Ok(households)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tenure_types::{AgentType, Ethnicity};

    use super::*;

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
    fn ids_follow_enumeration_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let population = generate_population(&params(4), &mut rng).unwrap();
        let ids: Vec<u64> = population.iter().map(|h| h.id.into_inner()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_population_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let result = generate_population(&params(0), &mut rng);
        assert!(matches!(result, Err(AgentError::EmptyPopulation)));
    }

    #[test]
    fn floors_are_applied() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        // A huge spread forces many draws below the floors.
        let wide = PopulationParams {
            agent_count: 500,
            income_mean: 20_000.0,
            income_std: 100_000.0,
            wealth_mean: 0.0,
            wealth_std: 1_000_000.0,
        };
        let population = generate_population(&wide, &mut rng).unwrap();
        assert_eq!(population.len(), 500);
        for h in &population {
            assert!(h.wealth >= 0.0);
            assert!(h.income >= 2_000.0);
        }
        assert!(population.iter().any(|h| h.wealth.abs() < f64::EPSILON));
    }

    #[test]
    fn new_households_are_displaced_with_no_houses() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let population = generate_population(&params(50), &mut rng).unwrap();
        assert!(population.iter().all(|h| h.agent_type == AgentType::Displaced));
        assert!(population.iter().all(|h| h.houses.is_empty()));
        assert!(population.iter().all(|h| h.rent_payment.is_none()));
    }

    #[test]
    fn both_ethnicities_appear() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let population = generate_population(&params(200), &mut rng).unwrap();
        let white = population
            .iter()
            .filter(|h| h.ethnicity == Ethnicity::White)
            .count();
        assert!(white > 50 && white < 150, "white count {white}");
    }

    #[test]
    fn same_seed_same_population() {
        let mut a = ChaCha8Rng::seed_from_u64(8);
        let mut b = ChaCha8Rng::seed_from_u64(8);
        let first = generate_population(&params(20), &mut a).unwrap();
        let second = generate_population(&params(20), &mut b).unwrap();
        assert_eq!(first, second);
    }
}
