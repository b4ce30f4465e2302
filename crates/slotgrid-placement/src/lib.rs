//! SlotGrid placement engine: shared and dedicated slot fitting.
//!
//! Given a [`PlacementRequest`](slotgrid_core::PlacementRequest) and an
//! immutable [`ClusterSnapshot`](slotgrid_core::ClusterSnapshot), decides
//! which agent(s) receive the request and how many slots each contributes.
//! The engine is a pure, synchronous function of its inputs: it never
//! mutates agent state and keeps no state between calls.
//!
//! # Components
//!
//! - **`constraint`**: Hard (filter) and soft (scoring) constraint types
//! - **`fitting`**: Built-in scoring functions (best-fit, worst-fit)
//! - **`distance`**: Hash distance used to break score ties
//! - **`ranking`**: Total order over fit candidates
//! - **`placer`**: Shared and dedicated strategies, orchestration
//!
//! # Placement Algorithm
//!
//! ```text
//! shared    = best viable agent with enough empty slots
//! if shared:                                  return [shared]
//! if single_agent or slots_needed <= 1:       return []
//! dedicated = idle agents grouped by empty slots,
//!             largest group size n with slots_needed % n == 0
//!             and members * n >= slots_needed,
//!             top slots_needed / n ranked members
//! return dedicated
//! ```

pub mod constraint;
pub mod distance;
pub mod fitting;
pub mod placer;
pub mod ranking;

pub use constraint::{HardConstraint, SoftConstraint, is_viable};
pub use distance::hash_distance;
pub use fitting::{best_fit, fitting_method, worst_fit};
pub use placer::{Placer, find_dedicated_agent_fits, find_fits, find_shared_agent_fit};
pub use ranking::FitCandidate;
