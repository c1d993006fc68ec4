//! Shared data types for the dominion simulation.
//!
//! This crate holds the plain, serde-derived records the engine operates on.
//! All behavior lives in `dominion_core`, which attaches logic traits to
//! these types.

pub mod data;

pub use data::agent::{Agent, AgentId, FactionId, Role, MEMORY_SLOTS};
pub use data::building::{Building, BuildingId, BuildingKind};
pub use data::faction::Faction;
pub use data::genome::{PolicyLayer, PolicyNetwork};
pub use data::math::Vec3;
pub use data::resources::{ResourceType, CARRY_CAP, RESOURCE_KINDS};
