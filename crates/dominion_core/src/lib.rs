//! # Dominion Core
//!
//! The simulation engine for dominion - a neuro-evolutionary faction
//! simulation.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Feedforward policy networks (agent and government brains)
//! - Agent lifecycle, perception, combat, and resource behavior
//! - Faction aggregates with a macro-economic government policy
//! - A genetic-algorithm evolution loop over a shared gene pool
//! - Spatial indexing and metrics collection
//!
//! ## Architecture
//!
//! Data types live in `dominion_data`; this crate attaches behavior to them
//! through logic traits (`PolicyLogic`, `AgentLogic`, `FactionLogic`) and
//! owns the orchestrating `SimulationWorld`. One logical thread drives the
//! whole tick; randomness flows from a single seeded RNG owned by the world.
//!
//! ## Example
//!
//! ```
//! use dominion_core::config::AppConfig;
//! use dominion_core::world::SimulationWorld;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(42);
//!
//! let mut world = SimulationWorld::new(config).unwrap();
//! world.initialize().unwrap();
//! world.update(0.1).unwrap();
//! assert_eq!(world.tick, 1);
//! ```

/// Per-agent behavior: decisions, movement, combat, resources
pub mod agent;
/// Generational slot arena for agent storage
pub mod arena;
/// Configuration management for simulation parameters
pub mod config;
/// Typed precondition errors
pub mod error;
/// Tick-stamped simulation events
pub mod events;
/// Faction-level policy: government brain, roles, taxes
pub mod faction;
/// Metrics collection and logging
pub mod metrics;
/// Brain input vectors for agents and governments
pub mod perception;
/// Policy network logic: init, forward, mutation, crossover
pub mod policy;
/// Uniform grid for proximity queries
pub mod spatial;
/// World orchestration: tick loop, evolution, commands, views
pub mod world;

pub use agent::{AgentAction, AgentLogic};
pub use arena::AgentArena;
pub use error::CoreError;
pub use events::SimEvent;
pub use faction::FactionLogic;
pub use metrics::{init_logging, Metrics};
pub use policy::PolicyLogic;
pub use world::SimulationWorld;
