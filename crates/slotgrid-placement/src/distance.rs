//! Hash distance between a request and an agent.
//!
//! Multiple zero-slot tasks (or any tasks that score the same everywhere)
//! would all land on the same agent if ties were broken by agent id alone.
//! Instead, ties prefer the agent whose hashed id is "closest" to the hashed
//! allocation id, which spreads tied tasks deterministically.
//!
//! The distance is `hash(allocation) - hash(agent)` with wrapping `u64`
//! subtraction, not an absolute difference. It is asymmetric on purpose:
//! only the spread matters, not a geometric notion of closeness.

use sha2::{Digest, Sha256};

use slotgrid_core::{AgentId, PlacementRequest};

/// First 8 bytes of the digest, little-endian.
fn string_hash_number(s: &str) -> u64 {
    let digest = Sha256::digest(s.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Tie-break distance from `req` to the agent identified by `agent_id`.
pub fn hash_distance(req: &PlacementRequest, agent_id: &AgentId) -> u64 {
    string_hash_number(&req.allocation_id).wrapping_sub(string_hash_number(agent_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_deterministic() {
        let req = PlacementRequest::new("exp-1.trial-1", 0);
        let agent = "agent-1".to_string();

        assert_eq!(hash_distance(&req, &agent), hash_distance(&req, &agent));
    }

    #[test]
    fn distance_is_wrapping_difference() {
        let req = PlacementRequest::new("exp-1.trial-1", 0);
        let agent = "agent-1".to_string();

        let expected = string_hash_number("exp-1.trial-1").wrapping_sub(string_hash_number("agent-1"));
        assert_eq!(hash_distance(&req, &agent), expected);
    }

    #[test]
    fn distance_to_same_identity_is_zero() {
        let req = PlacementRequest::new("shared-name", 0);
        assert_eq!(hash_distance(&req, &"shared-name".to_string()), 0);
    }

    #[test]
    fn distance_is_not_symmetric() {
        // Swapping the operands yields the two's complement, not the same value.
        let forward = hash_distance(&PlacementRequest::new("a", 0), &"b".to_string());
        let backward = hash_distance(&PlacementRequest::new("b", 0), &"a".to_string());

        assert_ne!(forward, backward);
        assert_eq!(forward.wrapping_add(backward), 0);
    }

    #[test]
    fn distances_vary_across_agents() {
        let req = PlacementRequest::new("exp-9.trial-4", 0);
        let distances: std::collections::HashSet<u64> = (0..32)
            .map(|i| hash_distance(&req, &format!("agent-{i}")))
            .collect();

        assert_eq!(distances.len(), 32);
    }
}
