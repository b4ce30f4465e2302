//! slotgrid-core: shared types for the SlotGrid placement engine.
//!
//! The cluster-state tracker owns agent state and hands the placement
//! engine an immutable [`ClusterSnapshot`] per decision. This crate holds
//! those snapshot types, the request type, and the `slotgrid.toml`
//! placement configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::{FittingPolicy, PlacementConfig};
pub use error::{ConfigError, ConfigResult};
pub use types::*;
