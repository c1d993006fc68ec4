//! Per-agent behavior: metabolism, brain-driven decisions, movement,
//! combat, and resource handling.

use crate::config::{AgentConfig, AppConfig, CombatConfig, EconomyConfig};
use crate::perception::{agent_state_vector, NearbyBuilding, NeighborAgent, AGENT_OUTPUTS};
use crate::policy::PolicyLogic;
use dominion_data::{
    Agent, AgentId, Building, BuildingKind, ResourceType, Role, Vec3, CARRY_CAP, MEMORY_SLOTS,
    RESOURCE_KINDS,
};
use rand::Rng;

/// Health ceiling applied when an agent takes the Soldier role.
pub const SOLDIER_HEALTH_CAP: f32 = 150.0;
/// Energy ceiling applied when an agent takes the Worker role.
pub const WORKER_ENERGY_CAP: f32 = 120.0;
/// Energy level Government duty regenerates toward.
const GOVERNMENT_ENERGY_CAP: f32 = 100.0;

/// The decision vector's vertical component is down-weighted before
/// normalization.
const VERTICAL_WEIGHT: f32 = 0.3;
const ROLE_SHIFT_THRESHOLD: f32 = 0.5;
const ENGAGE_THRESHOLD: f32 = 0.3;
const WORKER_CHANCE: f32 = 0.3;
const SOLDIER_CHANCE: f32 = 0.2;

/// Side effect an agent requests from the world because it touches another
/// agent's state; everything else applies in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentAction {
    Attack { target: AgentId },
}

pub trait AgentLogic {
    /// One tick of life: metabolism, decision, movement, then the
    /// role-specific duty. Returns the action the world must apply.
    fn update<R: Rng>(
        &mut self,
        dt: f32,
        neighbors: &[NeighborAgent],
        nearby_buildings: &[NearbyBuilding],
        cfg: &AppConfig,
        rng: &mut R,
    ) -> Option<AgentAction>;

    /// Runs the brain over the current neighborhood and interprets its nine
    /// outputs into velocity, role shifts, targeting, and memory.
    fn decide<R: Rng>(
        &mut self,
        neighbors: &[NeighborAgent],
        nearby_buildings: &[NearbyBuilding],
        cfg: &AppConfig,
        rng: &mut R,
    );

    /// Integrates velocity, clamps into world bounds, applies friction, and
    /// pins the agent to the ground plane.
    fn integrate(&mut self, dt: f32, cfg: &AgentConfig, world_size: f32, ceiling: f32);

    /// Strikes an enemy. No-op while on cooldown or against the dead.
    /// Returns true when the blow kills.
    fn attack(&mut self, enemy: &mut Agent, cfg: &CombatConfig) -> bool;

    /// Picks up one unit, bounded by the per-kind carry cap.
    fn collect_resource(&mut self, kind: ResourceType, cfg: &EconomyConfig) -> bool;

    /// Empties the whole carried array into the faction ledger. Only
    /// Storage buildings accept deposits; every kind is cleared, not just
    /// the ones the storage was built for.
    fn deposit_resources(
        &mut self,
        building: &Building,
        ledger: &mut [u32; RESOURCE_KINDS],
        cfg: &EconomyConfig,
    ) -> bool;

    /// Switches role, applying the one-time stat effect.
    fn change_role(&mut self, role: Role);

    /// Evolution score; only meaningful at generation boundaries.
    fn fitness(&self) -> f32;
}

/// What a workplace of the given kind yields, if anything.
fn yield_of(kind: BuildingKind) -> Option<ResourceType> {
    match kind {
        BuildingKind::Farm => Some(ResourceType::Food),
        BuildingKind::Mine => Some(ResourceType::Stone),
        _ => None,
    }
}

fn nearest_workplace(
    agent: &Agent,
    nearby_buildings: &[NearbyBuilding],
    accept: impl Fn(BuildingKind) -> bool,
) -> Option<NearbyBuilding> {
    nearby_buildings
        .iter()
        .filter(|b| b.faction == agent.faction && b.health > 0.0 && accept(b.kind))
        .min_by(|a, b| {
            let da = a.position.distance_squared(&agent.position);
            let db = b.position.distance_squared(&agent.position);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .copied()
}

impl AgentLogic for Agent {
    fn update<R: Rng>(
        &mut self,
        dt: f32,
        neighbors: &[NeighborAgent],
        nearby_buildings: &[NearbyBuilding],
        cfg: &AppConfig,
        rng: &mut R,
    ) -> Option<AgentAction> {
        self.age += 1;

        self.energy -= cfg.agent.energy_drain * dt;
        if self.energy <= 0.0 {
            self.energy = 0.0;
            self.health -= cfg.agent.starvation_rate * dt;
        }

        if self.attack_cooldown > 0.0 {
            self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);
        }

        self.decide(neighbors, nearby_buildings, cfg, rng);
        self.integrate(dt, &cfg.agent, cfg.world.size, cfg.world.ceiling);

        match self.role {
            Role::Worker => {
                self.work_shift(nearby_buildings, cfg);
                None
            }
            Role::Soldier => self.engage_target(neighbors, cfg),
            Role::Government => {
                self.government_shift(nearby_buildings, cfg, dt);
                None
            }
            Role::Citizen => None,
        }
    }

    fn decide<R: Rng>(
        &mut self,
        neighbors: &[NeighborAgent],
        nearby_buildings: &[NearbyBuilding],
        cfg: &AppConfig,
        rng: &mut R,
    ) {
        let state = agent_state_vector(self, neighbors, nearby_buildings);
        let outputs = match self.brain.forward(&state) {
            Ok(outputs) => outputs,
            Err(err) => {
                tracing::warn!(agent = %self.id, %err, "brain rejected the state vector");
                return;
            }
        };
        if outputs.len() < AGENT_OUTPUTS {
            tracing::warn!(agent = %self.id, got = outputs.len(), "brain output too short");
            return;
        }

        let direction =
            Vec3::new(outputs[0], outputs[1], outputs[2] * VERTICAL_WEIGHT).normalized();
        self.velocity = direction * cfg.agent.move_speed;

        if outputs[3] > ROLE_SHIFT_THRESHOLD && self.role == Role::Citizen {
            let roll: f32 = rng.gen();
            if roll < WORKER_CHANCE {
                self.change_role(Role::Worker);
            } else if roll < WORKER_CHANCE + SOLDIER_CHANCE {
                self.change_role(Role::Soldier);
            }
        }

        if self.role == Role::Soldier && outputs[4] > ENGAGE_THRESHOLD {
            let range_sq = cfg.combat.target_range * cfg.combat.target_range;
            let mut best: Option<(AgentId, f32)> = None;
            for n in neighbors {
                if n.faction == self.faction || n.health <= 0.0 {
                    continue;
                }
                let dist_sq = n.position.distance_squared(&self.position);
                if dist_sq <= range_sq && best.map_or(true, |(_, b)| dist_sq < b) {
                    best = Some((n.id, dist_sq));
                }
            }
            if let Some((id, _)) = best {
                self.target = Some(id);
            }
        }

        // Oldest sample falls out, the brain's memory-write lands at the end.
        self.memory.rotate_left(1);
        self.memory[MEMORY_SLOTS - 1] = outputs[5];
        // outputs[6..9] are reserved for target-selection weighting.
    }

    fn integrate(&mut self, dt: f32, cfg: &AgentConfig, world_size: f32, ceiling: f32) {
        self.position += self.velocity * dt;

        if self.position.z > 0.0 {
            self.velocity.z -= cfg.gravity * dt;
        }

        self.position.x = self.position.x.clamp(0.0, world_size);
        self.position.y = self.position.y.clamp(0.0, world_size);
        self.position.z = self.position.z.clamp(0.0, ceiling);

        self.velocity *= cfg.friction;

        // Flat-ground world: every step ends on the plane, so the gravity
        // branch above never carries into the next tick.
        self.position.z = 0.0;
    }

    fn attack(&mut self, enemy: &mut Agent, cfg: &CombatConfig) -> bool {
        if !enemy.is_alive() || self.attack_cooldown > 0.0 {
            return false;
        }

        let mut damage = cfg.base_damage;
        if self.role == Role::Soldier {
            damage *= cfg.soldier_multiplier;
        }
        enemy.health -= damage;

        self.energy = (self.energy - cfg.attack_energy_cost).max(0.0);
        self.attack_cooldown = cfg.cooldown;
        self.memory[0] = 1.0;

        if !enemy.is_alive() {
            self.kills += 1;
            self.energy += cfg.kill_energy_refund;
            true
        } else {
            false
        }
    }

    fn collect_resource(&mut self, kind: ResourceType, cfg: &EconomyConfig) -> bool {
        let slot = &mut self.carried[kind.index()];
        if *slot >= CARRY_CAP {
            return false;
        }
        *slot += 1;
        self.energy = (self.energy - cfg.gather_energy_cost).max(0.0);
        true
    }

    fn deposit_resources(
        &mut self,
        building: &Building,
        ledger: &mut [u32; RESOURCE_KINDS],
        cfg: &EconomyConfig,
    ) -> bool {
        if building.kind != BuildingKind::Storage {
            return false;
        }
        for kind in 0..RESOURCE_KINDS {
            ledger[kind] = ledger[kind].saturating_add(self.carried[kind]);
        }
        self.carried = [0; RESOURCE_KINDS];
        self.energy += cfg.deposit_energy_reward;
        true
    }

    fn change_role(&mut self, role: Role) {
        match role {
            Role::Soldier => self.health = (self.health * 1.2).min(SOLDIER_HEALTH_CAP),
            Role::Worker => self.energy = (self.energy * 1.1).min(WORKER_ENERGY_CAP),
            Role::Citizen | Role::Government => {}
        }
        self.role = role;
        self.workplace = None;
    }

    fn fitness(&self) -> f32 {
        let mut score = self.health + self.energy + self.age as f32 * 0.01;
        score *= match self.role {
            Role::Soldier => 1.2,
            Role::Government => 1.5,
            Role::Citizen | Role::Worker => 1.0,
        };
        score + 10.0 * self.carried.iter().sum::<u32>() as f32
    }
}

/// Role-duty helpers kept off the trait; they are implementation detail of
/// `update`.
trait AgentDuties {
    fn work_shift(&mut self, nearby_buildings: &[NearbyBuilding], cfg: &AppConfig);
    fn engage_target(
        &mut self,
        neighbors: &[NeighborAgent],
        cfg: &AppConfig,
    ) -> Option<AgentAction>;
    fn government_shift(&mut self, nearby_buildings: &[NearbyBuilding], cfg: &AppConfig, dt: f32);
}

impl AgentDuties for Agent {
    fn work_shift(&mut self, nearby_buildings: &[NearbyBuilding], cfg: &AppConfig) {
        if self.workplace.is_none() {
            self.workplace =
                nearest_workplace(self, nearby_buildings, |k| yield_of(k).is_some()).map(|b| b.id);
        }
        let Some(workplace) = self.workplace else {
            return;
        };
        let Some(site) = nearby_buildings.iter().find(|b| b.id == workplace) else {
            return;
        };

        let range_sq = cfg.economy.gather_range * cfg.economy.gather_range;
        if site.position.distance_squared(&self.position) <= range_sq {
            if let Some(kind) = yield_of(site.kind) {
                self.collect_resource(kind, &cfg.economy);
            }
        }
    }

    fn engage_target(
        &mut self,
        neighbors: &[NeighborAgent],
        cfg: &AppConfig,
    ) -> Option<AgentAction> {
        let target = self.target?;
        let enemy = neighbors.iter().find(|n| n.id == target)?;
        let range_sq = cfg.combat.attack_range * cfg.combat.attack_range;
        if enemy.position.distance_squared(&self.position) <= range_sq {
            Some(AgentAction::Attack { target })
        } else {
            None
        }
    }

    fn government_shift(&mut self, nearby_buildings: &[NearbyBuilding], cfg: &AppConfig, dt: f32) {
        if self.workplace.is_none() {
            self.workplace = nearest_workplace(self, nearby_buildings, |k| {
                k == BuildingKind::GovernmentCenter
            })
            .map(|b| b.id);
        }
        let Some(workplace) = self.workplace else {
            return;
        };
        let Some(site) = nearby_buildings.iter().find(|b| b.id == workplace) else {
            return;
        };

        let range_sq = cfg.economy.gather_range * cfg.economy.gather_range;
        if site.position.distance_squared(&self.position) <= range_sq {
            self.energy =
                (self.energy + cfg.agent.government_recovery * dt).min(GOVERNMENT_ENERGY_CAP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dominion_data::{BuildingId, FactionId, PolicyLayer, PolicyNetwork};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use uuid::Uuid;

    fn test_cfg() -> AppConfig {
        AppConfig::default()
    }

    /// Single-layer brain with zero weights; outputs are tanh(bias), which
    /// makes decisions fully scripted.
    fn scripted_brain(raw_outputs: [f32; AGENT_OUTPUTS]) -> PolicyNetwork {
        PolicyNetwork {
            layers: vec![PolicyLayer {
                inputs: crate::perception::STATE_INPUTS,
                outputs: AGENT_OUTPUTS,
                weights: vec![0.0; crate::perception::STATE_INPUTS * AGENT_OUTPUTS],
                biases: raw_outputs.to_vec(),
            }],
            fitness: 0.0,
        }
    }

    fn agent_with(brain: PolicyNetwork, faction: u8, pos: Vec3) -> Agent {
        Agent::new(Uuid::nil(), FactionId(faction), pos, brain)
    }

    fn idle_agent(faction: u8, pos: Vec3) -> Agent {
        agent_with(scripted_brain([0.0; AGENT_OUTPUTS]), faction, pos)
    }

    #[test]
    fn test_soldier_attack_deals_doubled_base_damage() {
        let cfg = test_cfg();
        let mut attacker = idle_agent(0, Vec3::ZERO);
        attacker.change_role(Role::Soldier);
        let mut victim = idle_agent(1, Vec3::new(1.0, 0.0, 0.0));

        let before = victim.health;
        let killed = attacker.attack(&mut victim, &cfg.combat);
        assert!(!killed);
        assert_eq!(before - victim.health, 20.0);
        assert_eq!(attacker.attack_cooldown, cfg.combat.cooldown);
        assert_eq!(attacker.memory[0], 1.0);
    }

    #[test]
    fn test_attack_on_cooldown_is_a_noop() {
        let cfg = test_cfg();
        let mut attacker = idle_agent(0, Vec3::ZERO);
        attacker.attack_cooldown = 0.5;
        let mut victim = idle_agent(1, Vec3::ZERO);
        let before = victim.health;
        assert!(!attacker.attack(&mut victim, &cfg.combat));
        assert_eq!(victim.health, before);
    }

    #[test]
    fn test_kill_increments_counter_and_refunds_energy() {
        let cfg = test_cfg();
        let mut attacker = idle_agent(0, Vec3::ZERO);
        let mut victim = idle_agent(1, Vec3::ZERO);
        victim.health = 5.0;

        let energy_before = attacker.energy;
        assert!(attacker.attack(&mut victim, &cfg.combat));
        assert!(!victim.is_alive());
        assert_eq!(attacker.kills, 1);
        assert_eq!(
            attacker.energy,
            energy_before - cfg.combat.attack_energy_cost + cfg.combat.kill_energy_refund
        );

        // A corpse takes no further hits and yields no further kills.
        attacker.attack_cooldown = 0.0;
        assert!(!attacker.attack(&mut victim, &cfg.combat));
        assert_eq!(attacker.kills, 1);
    }

    #[test]
    fn test_collect_resource_honors_carry_cap() {
        let cfg = test_cfg();
        let mut agent = idle_agent(0, Vec3::ZERO);
        for _ in 0..25 {
            agent.collect_resource(ResourceType::Food, &cfg.economy);
        }
        assert_eq!(agent.carried[ResourceType::Food.index()], CARRY_CAP);
    }

    #[test]
    fn test_deposit_clears_every_kind_into_the_ledger() {
        let cfg = test_cfg();
        let mut agent = idle_agent(0, Vec3::ZERO);
        agent.carried = [3, 1, 4, 1, 5];
        let storage = Building::new(BuildingKind::Storage, Vec3::ZERO, FactionId(0));
        let mut ledger = [10, 0, 0, 0, 0];

        assert!(agent.deposit_resources(&storage, &mut ledger, &cfg.economy));
        assert_eq!(ledger, [13, 1, 4, 1, 5]);
        assert_eq!(agent.carried, [0; RESOURCE_KINDS]);
    }

    #[test]
    fn test_deposit_rejects_non_storage() {
        let cfg = test_cfg();
        let mut agent = idle_agent(0, Vec3::ZERO);
        agent.carried = [3, 0, 0, 0, 0];
        let farm = Building::new(BuildingKind::Farm, Vec3::ZERO, FactionId(0));
        let mut ledger = [0; RESOURCE_KINDS];

        assert!(!agent.deposit_resources(&farm, &mut ledger, &cfg.economy));
        assert_eq!(agent.carried, [3, 0, 0, 0, 0]);
        assert_eq!(ledger, [0; RESOURCE_KINDS]);
    }

    #[test]
    fn test_change_role_applies_one_time_effects() {
        let mut agent = idle_agent(0, Vec3::ZERO);
        agent.health = 140.0;
        agent.change_role(Role::Soldier);
        assert_eq!(agent.health, SOLDIER_HEALTH_CAP);

        let mut agent = idle_agent(0, Vec3::ZERO);
        agent.energy = 100.0;
        agent.change_role(Role::Worker);
        assert!((agent.energy - 110.0).abs() < 1e-3);
        agent.change_role(Role::Worker);
        assert_eq!(agent.energy, WORKER_ENERGY_CAP);
    }

    #[test]
    fn test_integrate_pins_to_ground_and_bounds() {
        let cfg = test_cfg();
        let mut agent = idle_agent(0, Vec3::new(499.0, 0.5, 0.0));
        agent.velocity = Vec3::new(100.0, -100.0, 50.0);
        agent.integrate(1.0, &cfg.agent, cfg.world.size, cfg.world.ceiling);

        assert_eq!(agent.position.x, 500.0);
        assert_eq!(agent.position.y, 0.0);
        assert_eq!(agent.position.z, 0.0);
        // Flat friction, applied once per step.
        assert_eq!(agent.velocity.x, 100.0 * cfg.agent.friction);
    }

    #[test]
    fn test_decide_sets_speed_and_memory() {
        let cfg = test_cfg();
        let raw = [2.0, 0.0, 0.0, 0.0, 0.0, 0.8, 0.0, 0.0, 0.0];
        let mut agent = agent_with(scripted_brain(raw), 0, Vec3::new(50.0, 50.0, 0.0));
        agent.memory = [0.9; MEMORY_SLOTS];
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        agent.decide(&[], &[], &cfg, &mut rng);

        // Direction is normalized then scaled to the fixed speed.
        assert!((agent.velocity.length() - cfg.agent.move_speed).abs() < 1e-3);
        assert!(agent.velocity.x > 0.0);
        // Memory shifted left; the write lands in the last slot.
        assert_eq!(agent.memory[MEMORY_SLOTS - 1], 0.8_f32.tanh());
        assert_eq!(agent.memory[0], 0.9);
    }

    #[test]
    fn test_decide_role_shift_only_from_citizen() {
        let cfg = test_cfg();
        // RoleShift output saturated high.
        let raw = [0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let mut flips = 0;
        for _ in 0..200 {
            let mut agent = agent_with(scripted_brain(raw), 0, Vec3::ZERO);
            agent.decide(&[], &[], &cfg, &mut rng);
            if agent.role != Role::Citizen {
                flips += 1;
                assert!(matches!(agent.role, Role::Worker | Role::Soldier));
            }
        }
        // 50% combined chance; 200 draws make zero flips astronomically
        // unlikely, and all flips landing is just as unlikely.
        assert!(flips > 50 && flips < 150, "flips = {flips}");

        let mut soldier = agent_with(scripted_brain(raw), 0, Vec3::ZERO);
        soldier.change_role(Role::Soldier);
        soldier.decide(&[], &[], &cfg, &mut rng);
        assert_eq!(soldier.role, Role::Soldier);
    }

    #[test]
    fn test_decide_retargets_nearest_living_enemy() {
        let cfg = test_cfg();
        let raw = [0.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 0.0];
        let mut agent = agent_with(scripted_brain(raw), 0, Vec3::ZERO);
        agent.change_role(Role::Soldier);
        let old_target = AgentId {
            index: 99,
            generation: 0,
        };
        agent.target = Some(old_target);

        let neighbors = [
            NeighborAgent {
                id: AgentId {
                    index: 1,
                    generation: 0,
                },
                position: Vec3::new(30.0, 0.0, 0.0),
                faction: FactionId(1),
                role: Role::Citizen,
                health: 50.0,
            },
            NeighborAgent {
                id: AgentId {
                    index: 2,
                    generation: 0,
                },
                position: Vec3::new(10.0, 0.0, 0.0),
                faction: FactionId(0), // ally, skipped
                role: Role::Citizen,
                health: 50.0,
            },
            NeighborAgent {
                id: AgentId {
                    index: 3,
                    generation: 0,
                },
                position: Vec3::new(20.0, 0.0, 0.0),
                faction: FactionId(2),
                role: Role::Citizen,
                health: 50.0,
            },
        ];

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        agent.decide(&neighbors, &[], &cfg, &mut rng);
        assert_eq!(
            agent.target,
            Some(AgentId {
                index: 3,
                generation: 0
            })
        );
    }

    #[test]
    fn test_update_drains_energy_and_ages() {
        let cfg = test_cfg();
        let mut agent = idle_agent(0, Vec3::new(50.0, 50.0, 0.0));
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        agent.update(0.1, &[], &[], &cfg, &mut rng);
        assert_eq!(agent.age, 1);
        assert!(agent.energy < 100.0);
        assert_eq!(agent.health, 100.0);
    }

    #[test]
    fn test_update_starvation_bleeds_health() {
        let cfg = test_cfg();
        let mut agent = idle_agent(0, Vec3::new(50.0, 50.0, 0.0));
        agent.energy = 0.0;
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        agent.update(1.0, &[], &[], &cfg, &mut rng);
        assert_eq!(agent.energy, 0.0);
        assert!(agent.health < 100.0);
    }

    #[test]
    fn test_worker_gathers_at_its_farm() {
        let cfg = test_cfg();
        let mut agent = idle_agent(0, Vec3::new(10.0, 10.0, 0.0));
        agent.change_role(Role::Worker);
        let farm = NearbyBuilding {
            id: BuildingId(4),
            kind: BuildingKind::Farm,
            position: Vec3::new(11.0, 10.0, 0.0),
            faction: FactionId(0),
            health: 100.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        agent.update(0.1, &[], &[farm], &cfg, &mut rng);
        assert_eq!(agent.workplace, Some(BuildingId(4)));
        assert_eq!(agent.carried[ResourceType::Food.index()], 1);
    }

    #[test]
    fn test_soldier_requests_attack_in_range() {
        let cfg = test_cfg();
        let raw = [0.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 0.0];
        let mut agent = agent_with(scripted_brain(raw), 0, Vec3::ZERO);
        agent.change_role(Role::Soldier);
        let enemy_id = AgentId {
            index: 7,
            generation: 0,
        };
        let neighbors = [NeighborAgent {
            id: enemy_id,
            position: Vec3::new(1.0, 0.0, 0.0),
            faction: FactionId(1),
            role: Role::Citizen,
            health: 50.0,
        }];
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let action = agent.update(0.1, &neighbors, &[], &cfg, &mut rng);
        assert_eq!(action, Some(AgentAction::Attack { target: enemy_id }));
    }

    #[test]
    fn test_fitness_combines_role_and_cargo() {
        let mut agent = idle_agent(0, Vec3::ZERO);
        agent.health = 100.0;
        agent.energy = 50.0;
        agent.age = 100;
        agent.carried = [2, 0, 0, 0, 0];
        assert_eq!(agent.fitness(), 151.0 + 20.0);

        agent.role = Role::Soldier;
        assert_eq!(agent.fitness(), 151.0 * 1.2 + 20.0);

        agent.role = Role::Government;
        assert_eq!(agent.fitness(), 151.0 * 1.5 + 20.0);
    }
}
