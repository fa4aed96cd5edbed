//! Proportional stake allocation.
//!
//! Staking `B × p[i] / total` on outcome `i` makes `stake[i] × odds[i]`
//! equal to `B / total` for every `i`, so the payout does not depend on
//! which outcome wins.

use crate::core::domain::{Probability, Stake, StakeAllocation};

/// Split `budget` across outcomes in proportion to their implied probability.
///
/// `total` must be the sum of `probabilities` and positive. The allocation is
/// computed whether or not the budget reaches `minimum_required_stake`; a
/// shortfall only sets the advisory flag.
#[must_use]
pub fn allocate_stakes(
    budget: Stake,
    probabilities: &[Probability],
    total: Probability,
    minimum_required_stake: Option<Stake>,
) -> StakeAllocation {
    let stakes = probabilities.iter().map(|p| budget * p / total).collect();
    let payout = budget / total;

    StakeAllocation {
        stakes,
        payout,
        expected_profit: payout - budget,
        below_minimum_stake: minimum_required_stake.is_some_and(|minimum| budget < minimum),
    }
}
