//! Events surfaced from each world tick, tick-stamped for replay overlays
//! and external loggers.

use dominion_data::BuildingKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SimEvent {
    AgentSpawned {
        id: Uuid,
        faction: u8,
        tick: u64,
    },
    AgentDied {
        id: Uuid,
        faction: u8,
        cause: String,
        age: u64,
        kills: u32,
        tick: u64,
    },
    GenerationEvolved {
        generation: u64,
        scored: usize,
        best_fitness: f32,
        tick: u64,
    },
    BuildingConstructed {
        kind: BuildingKind,
        faction: u8,
        tick: u64,
    },
}
