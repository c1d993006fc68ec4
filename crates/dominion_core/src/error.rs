use thiserror::Error;

/// Typed precondition failures at the engine's API boundary.
///
/// The engine never reads out of bounds on bad input; each of these replaces
/// what would otherwise be undefined behavior with a fail-fast error.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("input vector has length {got}, network expects {expected}")]
    InputLength { expected: usize, got: usize },

    #[error("crossover requires identical topologies, got {left:?} vs {right:?}")]
    TopologyMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("invalid topology {0:?}: need at least two layer sizes, all non-zero")]
    InvalidTopology(Vec<usize>),

    #[error("negative query radius {0}")]
    NegativeRadius(f32),

    #[error("unknown faction {0}")]
    UnknownFaction(u8),

    #[error("faction {faction} cannot afford a {building}: needs {missing} more {resource}")]
    InsufficientResources {
        faction: u8,
        building: &'static str,
        resource: &'static str,
        missing: u32,
    },
}
