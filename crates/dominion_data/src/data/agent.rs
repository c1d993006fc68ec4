use super::building::BuildingId;
use super::genome::PolicyNetwork;
use super::math::Vec3;
use super::resources::RESOURCE_KINDS;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the rolling memory buffer fed back into the brain.
pub const MEMORY_SLOTS: usize = 10;

/// Faction index; the world owns at most 256 factions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactionId(pub u8);

/// Generational agent handle.
///
/// The arena bumps a slot's generation when its agent is removed, so a
/// handle held across a death-compaction pass resolves to `None` instead of
/// aliasing whatever reuses the slot. Handles must not be treated as stable
/// across ticks for any other purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId {
    pub index: u32,
    pub generation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Citizen,
    Worker,
    Soldier,
    Government,
}

impl Role {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Role::Citizen => 0,
            Role::Worker => 1,
            Role::Soldier => 2,
            Role::Government => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Worker => "worker",
            Role::Soldier => "soldier",
            Role::Government => "government",
        }
    }
}

/// One simulated inhabitant. The world exclusively owns agent storage;
/// factions and other agents refer to it through `AgentId` handles only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub faction: FactionId,
    pub role: Role,
    pub position: Vec3,
    pub velocity: Vec3,
    pub health: f32,
    pub energy: f32,
    /// Tick counter since spawn.
    pub age: u64,
    /// Carried stock per resource kind, capped at `CARRY_CAP` each.
    pub carried: [u32; RESOURCE_KINDS],
    /// FIFO memory; slot 0 is the oldest sample, the last slot the newest.
    pub memory: [f32; MEMORY_SLOTS],
    pub brain: PolicyNetwork,
    /// Current enemy, if any. Cleared when the enemy dies or its slot is
    /// compacted away.
    pub target: Option<AgentId>,
    /// Seconds until the next attack is allowed.
    pub attack_cooldown: f32,
    pub kills: u32,
    /// House this agent occupies, set at spawn.
    pub home: Option<BuildingId>,
    /// Workplace for Worker/Government duty; reassigned on role change.
    pub workplace: Option<BuildingId>,
}

impl Agent {
    #[must_use]
    pub fn new(id: Uuid, faction: FactionId, position: Vec3, brain: PolicyNetwork) -> Self {
        Self {
            id,
            faction,
            role: Role::Citizen,
            position,
            velocity: Vec3::ZERO,
            health: 100.0,
            energy: 100.0,
            age: 0,
            carried: [0; RESOURCE_KINDS],
            memory: [0.0; MEMORY_SLOTS],
            brain,
            target: None,
            attack_cooldown: 0.0,
            kills: 0,
            home: None,
            workplace: None,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Short carried-stock readout for overlays, e.g. `F:3 W:0 S:2 G:0 A:1`.
    #[must_use]
    pub fn carried_text(&self) -> String {
        format!(
            "F:{} W:{} S:{} G:{} A:{}",
            self.carried[0], self.carried[1], self.carried[2], self.carried[3], self.carried[4]
        )
    }

    /// Whether the agent traded blows recently; memory slot 0 carries the
    /// combat flag until the FIFO shifts it out.
    #[must_use]
    pub fn in_combat(&self) -> bool {
        self.memory[0] > 0.5
    }
}
