//! Built-in fitting methods (soft constraints).
//!
//! - **Best fit** packs: prefer the agent left with the fewest empty slots.
//! - **Worst fit** spreads: prefer the agent with the largest empty share.

use slotgrid_core::{AgentSnapshot, FittingPolicy, PlacementRequest};

use crate::constraint::SoftConstraint;

/// Resolve a configured policy to its scoring function.
pub fn fitting_method(policy: FittingPolicy) -> SoftConstraint {
    match policy {
        FittingPolicy::Best => best_fit,
        FittingPolicy::Worst => worst_fit,
    }
}

/// Score in `(0, 1]`, highest for the agent with the fewest slots left over.
///
/// Zero-slot requests are scored by how many zero-slot containers the agent
/// already runs, so they pack by container count instead of by slots.
pub fn best_fit(req: &PlacementRequest, agent: &AgentSnapshot) -> f64 {
    if req.slots_needed == 0 {
        return 1.0 / (1.0 + f64::from(agent.zero_slot_containers));
    }
    let leftover = agent.num_empty_slots().saturating_sub(req.slots_needed);
    1.0 / (1.0 + f64::from(leftover))
}

/// Score in `[0, 1]`: the agent's fraction of empty slots.
pub fn worst_fit(_req: &PlacementRequest, agent: &AgentSnapshot) -> f64 {
    if agent.slots == 0 {
        return 0.0;
    }
    f64::from(agent.num_empty_slots()) / f64::from(agent.slots)
}
