use super::agent::FactionId;
use super::math::Vec3;
use super::resources::RESOURCE_KINDS;
use serde::{Deserialize, Serialize};

/// Stable building handle. Buildings are never removed from world storage,
/// so a plain index suffices (destroyed buildings stay at health 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildingId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    House,
    Farm,
    Mine,
    Barracks,
    GovernmentCenter,
    Storage,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 6] = [
        BuildingKind::House,
        BuildingKind::Farm,
        BuildingKind::Mine,
        BuildingKind::Barracks,
        BuildingKind::GovernmentCenter,
        BuildingKind::Storage,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            BuildingKind::House => 0,
            BuildingKind::Farm => 1,
            BuildingKind::Mine => 2,
            BuildingKind::Barracks => 3,
            BuildingKind::GovernmentCenter => 4,
            BuildingKind::Storage => 5,
        }
    }

    /// Occupant capacity, fixed at construction.
    #[must_use]
    pub const fn capacity(self) -> u32 {
        match self {
            BuildingKind::House => 4,
            BuildingKind::Farm => 6,
            BuildingKind::Mine => 6,
            BuildingKind::Barracks => 10,
            BuildingKind::GovernmentCenter => 8,
            BuildingKind::Storage => 2,
        }
    }

    /// Construction cost, indexed by `ResourceType::index`
    /// (food, wood, stone, gold, weapons).
    #[must_use]
    pub const fn cost(self) -> [u32; RESOURCE_KINDS] {
        match self {
            BuildingKind::House => [0, 20, 10, 0, 0],
            BuildingKind::Farm => [0, 15, 0, 0, 0],
            BuildingKind::Mine => [0, 10, 20, 0, 0],
            BuildingKind::Barracks => [0, 25, 25, 10, 0],
            BuildingKind::GovernmentCenter => [0, 40, 40, 20, 0],
            BuildingKind::Storage => [0, 30, 0, 0, 0],
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            BuildingKind::House => "house",
            BuildingKind::Farm => "farm",
            BuildingKind::Mine => "mine",
            BuildingKind::Barracks => "barracks",
            BuildingKind::GovernmentCenter => "government center",
            BuildingKind::Storage => "storage",
        }
    }
}

/// Passive structure owned by a faction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub kind: BuildingKind,
    pub position: Vec3,
    pub faction: FactionId,
    pub capacity: u32,
    pub occupants: u32,
    /// Health in [0, 100]. Regenerates slowly while alive; a building at 0
    /// is destroyed but stays in storage.
    pub health: f32,
}

impl Building {
    #[must_use]
    pub fn new(kind: BuildingKind, position: Vec3, faction: FactionId) -> Self {
        Self {
            kind,
            position,
            faction,
            capacity: kind.capacity(),
            occupants: 0,
            health: 100.0,
        }
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }

    #[must_use]
    pub fn has_capacity(&self) -> bool {
        self.occupants < self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_building_uses_kind_capacity() {
        for kind in BuildingKind::ALL {
            let b = Building::new(kind, Vec3::ZERO, FactionId(0));
            assert_eq!(b.capacity, kind.capacity());
            assert_eq!(b.occupants, 0);
            assert_eq!(b.health, 100.0);
        }
    }

    #[test]
    fn test_destroyed_at_zero_health() {
        let mut b = Building::new(BuildingKind::House, Vec3::ZERO, FactionId(0));
        assert!(!b.is_destroyed());
        b.health = 0.0;
        assert!(b.is_destroyed());
    }
}
