//! Constraint model for placement decisions.
//!
//! - **Hard constraints** filter agents: an agent is viable only if every
//!   constraint supplied for a strategy returns `true`.
//! - **Soft constraints** score viable agents in `[0, 1]`, higher is better.
//!
//! Both are plain function values. They must be deterministic and free of
//! side effects, since they run once per agent per decision.

use slotgrid_core::{AgentSnapshot, PlacementRequest};

/// Returns true if the request can be assigned to the agent.
pub type HardConstraint = fn(&PlacementRequest, &AgentSnapshot) -> bool;

/// Scores how good the cluster state would be if the request landed on the
/// agent, from 0 (worst) to 1 (best).
pub type SoftConstraint = fn(&PlacementRequest, &AgentSnapshot) -> f64;

/// An agent is viable when it passes every constraint.
pub fn is_viable(
    req: &PlacementRequest,
    agent: &AgentSnapshot,
    constraints: &[HardConstraint],
) -> bool {
    constraints.iter().all(|constraint| constraint(req, agent))
}

/// Request and agent belong to the same resource pool.
pub fn label_satisfied(req: &PlacementRequest, agent: &AgentSnapshot) -> bool {
    req.label == agent.label
}

/// Agent has enough empty slots for the whole request.
pub fn slots_satisfied(req: &PlacementRequest, agent: &AgentSnapshot) -> bool {
    req.slots_needed <= agent.num_empty_slots()
}

/// Zero-slot requests only go to agents below their zero-slot container cap.
pub fn max_zero_slot_containers_satisfied(req: &PlacementRequest, agent: &AgentSnapshot) -> bool {
    if req.slots_needed == 0 {
        return agent.zero_slot_containers < agent.max_zero_slot_containers;
    }
    true
}

/// None of the agent's slots are in use. Distributed tasks take whole agents.
pub fn agent_slots_unused_satisfied(_req: &PlacementRequest, agent: &AgentSnapshot) -> bool {
    agent.is_idle()
}
