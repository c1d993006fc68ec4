//! Builds the fixed input vectors fed into agent and government brains.
//!
//! The slot order and normalization divisors here are the networks' input
//! contract: changing either invalidates every evolved genome in a pool.

use dominion_data::{
    Agent, AgentId, Building, BuildingId, BuildingKind, FactionId, Role, Vec3, CARRY_CAP,
    RESOURCE_KINDS,
};

const STATE_LABELS: [&str; 48] = [
    "PosX", "PosY", "PosZ", "Health", "Energy", "Role", "CarryFood", "CarryWood", "CarryStone",
    "CarryGold", "CarryWeapons", "Allies", "Enemies", "AllyDist", "EnemyDist", "AllyCX", "AllyCY",
    "AllyCZ", "EnemyCX", "EnemyCY", "EnemyCZ", "FriendBldgs", "EnemyBldgs", "BldgDist", "BldgKind",
    "BldgX", "BldgY", "BldgZ", "BldgHealth", "BldgOwned", "Rsv0", "Rsv1", "Rsv2", "Rsv3", "Rsv4",
    "Rsv5", "Rsv6", "Rsv7", "Mem0", "Mem1", "Mem2", "Mem3", "Mem4", "Mem5", "Mem6", "Mem7", "Mem8",
    "Mem9",
];

const OUTPUT_LABELS: [&str; 9] = [
    "MoveX", "MoveY", "MoveZ", "RoleShift", "Engage", "MemWrite", "Aux0", "Aux1", "Aux2",
];

const GOVERNMENT_LABELS: [&str; 20] = [
    "Population",
    "Soldiers",
    "Workers",
    "AvgHealth",
    "LedgerFood",
    "LedgerWood",
    "LedgerStone",
    "LedgerGold",
    "LedgerWeapons",
    "Buildings",
    "Threat",
    "Pad0",
    "Pad1",
    "Pad2",
    "Pad3",
    "Pad4",
    "Pad5",
    "Pad6",
    "Pad7",
    "Pad8",
];

pub const STATE_INPUTS: usize = STATE_LABELS.len();
pub const AGENT_OUTPUTS: usize = OUTPUT_LABELS.len();
pub const GOVERNMENT_INPUTS: usize = GOVERNMENT_LABELS.len();

/// Position divisors; fixed regardless of the configured world size.
const POS_NORM: Vec3 = Vec3::new(100.0, 100.0, 20.0);
const HEALTH_NORM: f32 = 100.0;
const ENERGY_NORM: f32 = 100.0;
const ROLE_NORM: f32 = 3.0;
const COUNT_NORM: f32 = 10.0;
const DIST_NORM: f32 = 50.0;
const KIND_NORM: f32 = 5.0;
const LEDGER_NORM: f32 = 1000.0;
const BUILDING_COUNT_NORM: f32 = 20.0;

/// Per-tick snapshot of one nearby agent, taken before any agent mutates.
#[derive(Debug, Clone, Copy)]
pub struct NeighborAgent {
    pub id: AgentId,
    pub position: Vec3,
    pub faction: FactionId,
    pub role: Role,
    pub health: f32,
}

/// Per-tick snapshot of one nearby building.
#[derive(Debug, Clone, Copy)]
pub struct NearbyBuilding {
    pub id: BuildingId,
    pub kind: BuildingKind,
    pub position: Vec3,
    pub faction: FactionId,
    pub health: f32,
}

impl NearbyBuilding {
    #[must_use]
    pub fn snapshot(id: BuildingId, building: &Building) -> Self {
        Self {
            id,
            kind: building.kind,
            position: building.position,
            faction: building.faction,
            health: building.health,
        }
    }
}

fn normalized_pos(p: Vec3) -> [f32; 3] {
    [p.x / POS_NORM.x, p.y / POS_NORM.y, p.z / POS_NORM.z]
}

/// Assembles the 48-slot agent state vector. See STATE_LABELS for the
/// layout; slots 30..37 are reserved and stay zero.
#[must_use]
pub fn agent_state_vector(
    agent: &Agent,
    neighbors: &[NeighborAgent],
    buildings: &[NearbyBuilding],
) -> [f32; STATE_INPUTS] {
    let mut state = [0.0_f32; STATE_INPUTS];

    let [px, py, pz] = normalized_pos(agent.position);
    state[0] = px;
    state[1] = py;
    state[2] = pz;
    state[3] = agent.health / HEALTH_NORM;
    state[4] = agent.energy / ENERGY_NORM;
    state[5] = agent.role.index() as f32 / ROLE_NORM;

    for kind in 0..RESOURCE_KINDS {
        state[6 + kind] = agent.carried[kind] as f32 / CARRY_CAP as f32;
    }

    let mut allies = 0u32;
    let mut enemies = 0u32;
    let mut ally_dist_sq = f32::MAX;
    let mut enemy_dist_sq = f32::MAX;
    let mut ally_centroid = Vec3::ZERO;
    let mut enemy_centroid = Vec3::ZERO;
    for n in neighbors {
        let dist_sq = n.position.distance_squared(&agent.position);
        if n.faction == agent.faction {
            allies += 1;
            ally_centroid += n.position;
            ally_dist_sq = ally_dist_sq.min(dist_sq);
        } else {
            enemies += 1;
            enemy_centroid += n.position;
            enemy_dist_sq = enemy_dist_sq.min(dist_sq);
        }
    }

    state[11] = allies as f32 / COUNT_NORM;
    state[12] = enemies as f32 / COUNT_NORM;
    state[13] = if allies > 0 {
        ally_dist_sq.sqrt() / DIST_NORM
    } else {
        0.0
    };
    state[14] = if enemies > 0 {
        enemy_dist_sq.sqrt() / DIST_NORM
    } else {
        0.0
    };

    if allies > 0 {
        let [cx, cy, cz] = normalized_pos(ally_centroid * (1.0 / allies as f32));
        state[15] = cx;
        state[16] = cy;
        state[17] = cz;
    }
    if enemies > 0 {
        let [cx, cy, cz] = normalized_pos(enemy_centroid * (1.0 / enemies as f32));
        state[18] = cx;
        state[19] = cy;
        state[20] = cz;
    }

    let mut friendly = 0u32;
    let mut hostile = 0u32;
    let mut nearest: Option<(&NearbyBuilding, f32)> = None;
    for b in buildings {
        if b.faction == agent.faction {
            friendly += 1;
        } else {
            hostile += 1;
        }
        let dist_sq = b.position.distance_squared(&agent.position);
        if nearest.map_or(true, |(_, best)| dist_sq < best) {
            nearest = Some((b, dist_sq));
        }
    }

    state[21] = friendly as f32 / COUNT_NORM;
    state[22] = hostile as f32 / COUNT_NORM;
    if let Some((b, dist_sq)) = nearest {
        state[23] = dist_sq.sqrt() / DIST_NORM;
        state[24] = b.kind.index() as f32 / KIND_NORM;
        let [bx, by, bz] = normalized_pos(b.position);
        state[25] = bx;
        state[26] = by;
        state[27] = bz;
        state[28] = b.health / HEALTH_NORM;
        state[29] = if b.faction == agent.faction { 1.0 } else { 0.0 };
    }

    state[STATE_INPUTS - agent.memory.len()..].copy_from_slice(&agent.memory);
    state
}

/// Assembles the 20-slot government state vector: population and role
/// counts against the faction cap, average member health, the ledger, the
/// building count, a threat placeholder, then zero padding.
#[must_use]
pub fn government_state_vector(
    population: usize,
    soldiers: usize,
    workers: usize,
    average_health: f32,
    ledger: &[u32; RESOURCE_KINDS],
    building_count: usize,
    cap: usize,
) -> [f32; GOVERNMENT_INPUTS] {
    let cap = cap.max(1) as f32;
    let mut state = [0.0_f32; GOVERNMENT_INPUTS];
    state[0] = population as f32 / cap;
    state[1] = soldiers as f32 / cap;
    state[2] = workers as f32 / cap;
    state[3] = average_health / HEALTH_NORM;
    for kind in 0..RESOURCE_KINDS {
        state[4 + kind] = ledger[kind] as f32 / LEDGER_NORM;
    }
    state[9] = building_count as f32 / BUILDING_COUNT_NORM;
    // state[10] is the threat scalar; no threat model feeds it yet.
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use dominion_data::PolicyNetwork;
    use uuid::Uuid;

    fn agent_at(pos: Vec3, faction: u8) -> Agent {
        Agent::new(
            Uuid::nil(),
            FactionId(faction),
            pos,
            PolicyNetwork {
                layers: Vec::new(),
                fitness: 0.0,
            },
        )
    }

    #[test]
    fn test_self_block_normalization() {
        let mut agent = agent_at(Vec3::new(50.0, 25.0, 10.0), 0);
        agent.health = 75.0;
        agent.energy = 50.0;
        agent.role = Role::Soldier;
        agent.carried = [10, 5, 0, 0, 0];

        let state = agent_state_vector(&agent, &[], &[]);
        assert_eq!(state[0], 0.5);
        assert_eq!(state[1], 0.25);
        assert_eq!(state[2], 0.5);
        assert_eq!(state[3], 0.75);
        assert_eq!(state[4], 0.5);
        assert_eq!(state[5], 2.0 / 3.0);
        assert_eq!(state[6], 1.0);
        assert_eq!(state[7], 0.5);
    }

    #[test]
    fn test_empty_neighborhood_leaves_zeros() {
        let agent = agent_at(Vec3::ZERO, 0);
        let state = agent_state_vector(&agent, &[], &[]);
        for slot in 11..=29 {
            assert_eq!(state[slot], 0.0, "slot {slot} should be zero");
        }
    }

    #[test]
    fn test_ally_enemy_split() {
        let agent = agent_at(Vec3::ZERO, 0);
        let neighbors = [
            NeighborAgent {
                id: AgentId {
                    index: 1,
                    generation: 0,
                },
                position: Vec3::new(10.0, 0.0, 0.0),
                faction: FactionId(0),
                role: Role::Citizen,
                health: 100.0,
            },
            NeighborAgent {
                id: AgentId {
                    index: 2,
                    generation: 0,
                },
                position: Vec3::new(0.0, 25.0, 0.0),
                faction: FactionId(1),
                role: Role::Soldier,
                health: 100.0,
            },
        ];
        let state = agent_state_vector(&agent, &neighbors, &[]);
        assert_eq!(state[11], 0.1); // one ally
        assert_eq!(state[12], 0.1); // one enemy
        assert_eq!(state[13], 10.0 / 50.0);
        assert_eq!(state[14], 25.0 / 50.0);
        assert_eq!(state[15], 0.1); // ally centroid x / 100
        assert_eq!(state[19], 0.25); // enemy centroid y / 100
    }

    #[test]
    fn test_memory_occupies_tail() {
        let mut agent = agent_at(Vec3::ZERO, 0);
        for (i, slot) in agent.memory.iter_mut().enumerate() {
            *slot = i as f32;
        }
        let state = agent_state_vector(&agent, &[], &[]);
        assert_eq!(&state[38..48], &agent.memory);
        // Reserved band stays untouched.
        for slot in 30..38 {
            assert_eq!(state[slot], 0.0);
        }
    }

    #[test]
    fn test_government_vector_layout() {
        let ledger = [100, 0, 250, 0, 0];
        let state = government_state_vector(20, 5, 8, 80.0, &ledger, 6, 40);
        assert_eq!(state[0], 0.5);
        assert_eq!(state[1], 0.125);
        assert_eq!(state[2], 0.2);
        assert_eq!(state[3], 0.8);
        assert_eq!(state[4], 0.1);
        assert_eq!(state[6], 0.25);
        assert_eq!(state[9], 0.3);
        for slot in 10..GOVERNMENT_INPUTS {
            assert_eq!(state[slot], 0.0);
        }
    }
}
