use serde::{Deserialize, Serialize};

/// Number of distinct resource kinds; carried stocks and faction ledgers are
/// `[u32; RESOURCE_KINDS]` arrays indexed by `ResourceType::index`.
pub const RESOURCE_KINDS: usize = 5;

/// Per-kind cap on what a single agent can carry.
pub const CARRY_CAP: u32 = 10;

/// Closed set of tradeable resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Food,
    Wood,
    Stone,
    Gold,
    Weapons,
}

impl ResourceType {
    pub const ALL: [ResourceType; RESOURCE_KINDS] = [
        ResourceType::Food,
        ResourceType::Wood,
        ResourceType::Stone,
        ResourceType::Gold,
        ResourceType::Weapons,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ResourceType::Food => 0,
            ResourceType::Wood => 1,
            ResourceType::Stone => 2,
            ResourceType::Gold => 3,
            ResourceType::Weapons => 4,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ResourceType::Food => "food",
            ResourceType::Wood => "wood",
            ResourceType::Stone => "stone",
            ResourceType::Gold => "gold",
            ResourceType::Weapons => "weapons",
        }
    }
}
