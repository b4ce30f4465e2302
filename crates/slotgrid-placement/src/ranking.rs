//! Candidate ranking.
//!
//! Candidates are ordered most-preferred first by:
//! 1. higher score,
//! 2. lower hash distance,
//! 3. lower agent id (string order).
//!
//! Agent ids are unique within a snapshot, so the order is total.

use std::cmp::Ordering;

use slotgrid_core::{AgentId, AgentSnapshot, PlacementRequest};

use crate::constraint::SoftConstraint;
use crate::distance::hash_distance;

/// A viable agent considered for a single placement decision.
///
/// Borrows from the caller's snapshot and lives only for one decision.
#[derive(Debug, Clone, PartialEq)]
pub struct FitCandidate<'a> {
    pub agent_id: &'a AgentId,
    pub agent: &'a AgentSnapshot,
    /// Soft-constraint score.
    pub score: f64,
    /// Tie-break distance between the request and the agent.
    pub hash_distance: u64,
    /// Slots assigned on this agent. Zero until the candidate wins.
    pub slots: u32,
}

impl<'a> FitCandidate<'a> {
    /// Score the agent for `req` and compute its tie-break distance.
    pub fn new(
        req: &PlacementRequest,
        agent_id: &'a AgentId,
        agent: &'a AgentSnapshot,
        fitting_method: SoftConstraint,
    ) -> Self {
        Self {
            agent_id,
            agent,
            score: fitting_method(req, agent),
            hash_distance: hash_distance(req, agent_id),
            slots: 0,
        }
    }

    /// Preference order: `Less` means `self` is the better placement.
    pub fn preference(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.hash_distance.cmp(&other.hash_distance))
            .then_with(|| self.agent_id.cmp(other.agent_id))
    }
}

/// Sort candidates best first.
pub fn rank(candidates: &mut [FitCandidate<'_>]) {
    candidates.sort_unstable_by(FitCandidate::preference);
}
