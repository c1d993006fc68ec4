//! Facade over the dominion workspace crates: re-exports the engine and
//! data types under one roof for the binary and the integration tests.

pub use dominion_core::{AgentLogic, FactionLogic, PolicyLogic};

pub mod config {
    pub use dominion_core::config::*;
}
pub mod world {
    pub use dominion_core::world::*;
}
pub mod policy {
    pub use dominion_core::policy::*;
}
pub mod perception {
    pub use dominion_core::perception::*;
}
pub mod events {
    pub use dominion_core::events::*;
}
pub mod metrics {
    pub use dominion_core::metrics::*;
}
pub mod data {
    pub use dominion_data::*;
}
