//! Placement engine: decides which agents receive a request.
//!
//! Placement is attempted in two stages:
//! 1. **Shared**: the whole request on one agent, alongside other workloads.
//! 2. **Dedicated**: a multi-slot request split evenly over idle agents,
//!    each reserved entirely for it.
//!
//! An empty result means "not schedulable right now". The caller retries
//! later with a fresh snapshot.

use std::collections::BTreeMap;

use tracing::debug;

use slotgrid_core::{AgentId, AgentSnapshot, ClusterSnapshot, FittingPolicy, PlacementConfig, PlacementRequest};

use crate::constraint::{
    HardConstraint, SoftConstraint, agent_slots_unused_satisfied, is_viable, label_satisfied,
    max_zero_slot_containers_satisfied, slots_satisfied,
};
use crate::fitting::fitting_method;
use crate::ranking::{FitCandidate, rank};

const SHARED_CONSTRAINTS: &[HardConstraint] = &[
    slots_satisfied,
    max_zero_slot_containers_satisfied,
    label_satisfied,
];

const DEDICATED_CONSTRAINTS: &[HardConstraint] = &[label_satisfied, agent_slots_unused_satisfied];

/// Find the agent(s) that should run `req`.
///
/// Shared placement always wins when it succeeds. Dedicated placement is
/// only tried for multi-slot requests that may span agents.
pub fn find_fits<'a>(
    req: &PlacementRequest,
    agents: &'a ClusterSnapshot,
    fitting_method: SoftConstraint,
) -> Vec<FitCandidate<'a>> {
    if let Some(fit) = find_shared_agent_fit(req, agents, fitting_method) {
        return vec![fit];
    }
    if req.single_agent || req.slots_needed <= 1 {
        return Vec::new();
    }
    find_dedicated_agent_fits(req, agents, fitting_method)
}

/// Best single agent that can host the entire request.
pub fn find_shared_agent_fit<'a>(
    req: &PlacementRequest,
    agents: &'a ClusterSnapshot,
    fitting_method: SoftConstraint,
) -> Option<FitCandidate<'a>> {
    let mut candidates: Vec<FitCandidate<'a>> = agents
        .iter()
        .filter(|(_, agent)| is_viable(req, agent, SHARED_CONSTRAINTS))
        .map(|(id, agent)| FitCandidate::new(req, id, agent, fitting_method))
        .collect();

    rank(&mut candidates);

    let mut best = candidates.into_iter().next()?;
    best.slots = req.slots_needed;
    debug!(
        allocation_id = %req.allocation_id,
        agent = %best.agent_id,
        slots = best.slots,
        score = best.score,
        "shared agent fit"
    );
    Some(best)
}

/// Spread a multi-slot request evenly across idle agents.
///
/// Every chosen agent contributes all of its slots, and all chosen agents
/// have the same slot count. Larger agents are preferred so the request
/// touches as few agents as possible.
pub fn find_dedicated_agent_fits<'a>(
    req: &PlacementRequest,
    agents: &'a ClusterSnapshot,
    fitting_method: SoftConstraint,
) -> Vec<FitCandidate<'a>> {
    if agents.is_empty() || req.slots_needed == 0 {
        return Vec::new();
    }

    // Ordered map so the largest group can be read off the back.
    let mut agents_by_num_slots: BTreeMap<u32, Vec<(&'a AgentId, &'a AgentSnapshot)>> = BTreeMap::new();
    for (id, agent) in agents {
        if is_viable(req, agent, DEDICATED_CONSTRAINTS) {
            agents_by_num_slots
                .entry(agent.num_empty_slots())
                .or_default()
                .push((id, agent));
        }
    }

    let slots_needed = req.slots_needed;
    let chosen = agents_by_num_slots.iter().rev().find(|(n, members)| {
        let n = u64::from(**n);
        n != 0
            && u64::from(slots_needed) % n == 0
            && members.len() as u64 * n >= u64::from(slots_needed)
    });

    let Some((&num_slots, members)) = chosen else {
        debug!(
            allocation_id = %req.allocation_id,
            slots_needed,
            "request can not be scheduled onto multiple agents in the current cluster; \
             slots per task must be 1 or a multiple of the empty slots per agent"
        );
        return Vec::new();
    };

    let mut candidates: Vec<FitCandidate<'a>> = members
        .iter()
        .map(|&(id, agent)| FitCandidate::new(req, id, agent, fitting_method))
        .collect();
    rank(&mut candidates);

    let num_containers = (slots_needed / num_slots) as usize;
    let slots_per_container = slots_needed / num_containers as u32;
    candidates.truncate(num_containers);
    for candidate in &mut candidates {
        candidate.slots = slots_per_container;
    }

    debug!(
        allocation_id = %req.allocation_id,
        agents = num_containers,
        slots_per_agent = slots_per_container,
        "dedicated agent fit"
    );
    candidates
}

/// Placement bound to a configured fitting method.
#[derive(Debug, Clone, Copy)]
pub struct Placer {
    fitting_method: SoftConstraint,
}

impl Placer {
    pub fn new(policy: FittingPolicy) -> Self {
        Self::with_fitting_method(fitting_method(policy))
    }

    /// Use a caller-supplied scoring function instead of a built-in policy.
    pub fn with_fitting_method(fitting_method: SoftConstraint) -> Self {
        Self { fitting_method }
    }

    pub fn from_config(config: &PlacementConfig) -> Self {
        Self::new(config.fitting_policy())
    }

    /// See [`find_fits`].
    pub fn place<'a>(&self, req: &PlacementRequest, agents: &'a ClusterSnapshot) -> Vec<FitCandidate<'a>> {
        find_fits(req, agents, self.fitting_method)
    }
}

impl Default for Placer {
    fn default() -> Self {
        Self::new(FittingPolicy::default())
    }
}
