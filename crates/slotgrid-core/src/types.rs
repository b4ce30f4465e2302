//! Domain types exchanged between the cluster-state tracker and the
//! placement engine.
//!
//! An [`AgentSnapshot`] is a read-only view of one worker machine at the
//! moment a placement decision is made. The tracker owns and mutates the
//! live agent state; the engine only ever borrows a [`ClusterSnapshot`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a workload allocation.
pub type AllocationId = String;

/// Unique, stable identifier for an agent in the cluster.
pub type AgentId = String;

/// Agent identity → agent state at decision time.
pub type ClusterSnapshot = HashMap<AgentId, AgentSnapshot>;

/// Zero-slot containers an agent hosts before refusing more, when the
/// snapshot does not say otherwise.
pub const DEFAULT_MAX_ZERO_SLOT_CONTAINERS: u32 = 100;

// ── Request ───────────────────────────────────────────────────────

/// A workload asking for compute slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacementRequest {
    pub allocation_id: AllocationId,
    /// Slots needed in total across all agents. Zero means a CPU-only task.
    pub slots_needed: u32,
    /// Whether the whole request must land on a single agent.
    #[serde(default)]
    pub single_agent: bool,
    /// Resource pool label; must equal the agent's label.
    #[serde(default)]
    pub label: String,
}

impl PlacementRequest {
    pub fn new(allocation_id: impl Into<AllocationId>, slots_needed: u32) -> Self {
        Self {
            allocation_id: allocation_id.into(),
            slots_needed,
            single_agent: false,
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn single_agent(mut self) -> Self {
        self.single_agent = true;
        self
    }
}

// ── Agent ─────────────────────────────────────────────────────────

/// State of one agent at snapshot time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentSnapshot {
    /// Total slot capacity.
    pub slots: u32,
    /// Slots currently allocated to running containers.
    #[serde(default)]
    pub used_slots: u32,
    /// Resource pool label.
    #[serde(default)]
    pub label: String,
    /// Running containers that hold no slots.
    #[serde(default)]
    pub zero_slot_containers: u32,
    /// Cap on concurrently running zero-slot containers.
    #[serde(default = "default_max_zero_slot_containers")]
    pub max_zero_slot_containers: u32,
}

fn default_max_zero_slot_containers() -> u32 {
    DEFAULT_MAX_ZERO_SLOT_CONTAINERS
}

impl AgentSnapshot {
    /// An idle agent with `slots` capacity in the default pool.
    pub fn new(slots: u32) -> Self {
        Self {
            slots,
            used_slots: 0,
            label: String::new(),
            zero_slot_containers: 0,
            max_zero_slot_containers: DEFAULT_MAX_ZERO_SLOT_CONTAINERS,
        }
    }

    pub fn with_used_slots(mut self, used_slots: u32) -> Self {
        self.used_slots = used_slots;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_zero_slot_containers(mut self, running: u32, max: u32) -> Self {
        self.zero_slot_containers = running;
        self.max_zero_slot_containers = max;
        self
    }

    /// Slots not allocated to any container.
    pub fn num_empty_slots(&self) -> u32 {
        self.slots.saturating_sub(self.used_slots)
    }

    /// True when no slot on this agent is in use.
    pub fn is_idle(&self) -> bool {
        self.used_slots == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slots_saturate() {
        let agent = AgentSnapshot::new(4).with_used_slots(6);
        assert_eq!(agent.num_empty_slots(), 0);
        assert!(!agent.is_idle());
    }

    #[test]
    fn builder_sets_request_fields() {
        let req = PlacementRequest::new("alloc-1", 8).with_label("gpu").single_agent();

        assert_eq!(req.allocation_id, "alloc-1");
        assert_eq!(req.slots_needed, 8);
        assert_eq!(req.label, "gpu");
        assert!(req.single_agent);
    }

    #[test]
    fn snapshot_deserializes_with_defaults() {
        let json = r#"{
            "agent-a": { "slots": 8, "used_slots": 2, "label": "gpu" },
            "agent-b": { "slots": 4 }
        }"#;
        let snapshot: ClusterSnapshot = serde_json::from_str(json).unwrap();

        let a = &snapshot["agent-a"];
        assert_eq!(a.num_empty_slots(), 6);
        assert_eq!(a.label, "gpu");
        assert_eq!(a.max_zero_slot_containers, DEFAULT_MAX_ZERO_SLOT_CONTAINERS);

        let b = &snapshot["agent-b"];
        assert!(b.is_idle());
        assert_eq!(b.label, "");
        assert_eq!(b.zero_slot_containers, 0);
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let req: PlacementRequest =
            serde_json::from_str(r#"{ "allocation_id": "exp-3.trial-7", "slots_needed": 2 }"#)
                .unwrap();

        assert_eq!(req, PlacementRequest::new("exp-3.trial-7", 2));
    }
}
