//! World orchestration: the per-tick loop, spatial queries, the genetic
//! evolution step, spawning, and the external command/view surface.

use crate::agent::{AgentAction, AgentLogic};
use crate::arena::AgentArena;
use crate::config::AppConfig;
use crate::error::CoreError;
use crate::events::SimEvent;
use crate::faction::FactionLogic;
use crate::metrics::Metrics;
use crate::perception::{NearbyBuilding, NeighborAgent};
use crate::policy::PolicyLogic;
use crate::spatial::SpatialGrid;
use dominion_data::{
    Agent, AgentId, Building, BuildingId, BuildingKind, Faction, FactionId, PolicyNetwork,
    ResourceType, Role, Vec3,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

const FACTION_NAMES: [&str; 6] = ["Aurelia", "Boreas", "Cinder", "Drakmar", "Eventide", "Ferrum"];

/// Fixed settlement footprint around each faction's founding site; the
/// government center comes first so it anchors respawning.
const SETTLEMENT_LAYOUT: [(BuildingKind, f32, f32); 6] = [
    (BuildingKind::GovernmentCenter, 0.0, 0.0),
    (BuildingKind::House, 12.0, 0.0),
    (BuildingKind::Farm, -12.0, 0.0),
    (BuildingKind::Mine, 0.0, 12.0),
    (BuildingKind::Storage, 0.0, -12.0),
    (BuildingKind::Barracks, 12.0, 12.0),
];

/// Read-only agent projection for renderers and overlays.
#[derive(Debug, Clone)]
pub struct AgentView {
    pub id: Uuid,
    pub handle: AgentId,
    pub position: Vec3,
    pub faction: FactionId,
    pub role: Role,
    pub health: f32,
    pub energy: f32,
    pub carried_text: String,
    pub in_combat: bool,
}

/// Read-only building projection.
#[derive(Debug, Clone)]
pub struct BuildingView {
    pub id: BuildingId,
    pub kind: BuildingKind,
    pub position: Vec3,
    pub faction: FactionId,
    pub health: f32,
    pub occupants: u32,
    pub capacity: u32,
}

/// Aggregate numbers per faction for scoreboards.
#[derive(Debug, Clone)]
pub struct FactionStats {
    pub id: FactionId,
    pub name: String,
    pub population: usize,
    pub average_fitness: f32,
}

/// The simulation: exclusive owner of all factions, agents, buildings, and
/// the shared gene pool. Drive it with `initialize` once, then `update`
/// every frame.
pub struct SimulationWorld {
    pub config: AppConfig,
    pub factions: Vec<Faction>,
    pub agents: AgentArena,
    pub buildings: Vec<Building>,
    pub gene_pool: Vec<PolicyNetwork>,
    pub generation: u64,
    pub generation_timer: f32,
    /// Fraction of the current day in [0, 1).
    pub time_of_day: f32,
    pub tick: u64,
    pub metrics: Metrics,
    rng: ChaCha8Rng,
    grid: SpatialGrid,
    pending_events: Vec<SimEvent>,
    /// Agents killed in combat since the last compaction, for death-cause
    /// bookkeeping.
    combat_kills: Vec<AgentId>,
}

impl SimulationWorld {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let rng = match (config.world.seed, config.world.deterministic) {
            (Some(seed), _) => ChaCha8Rng::seed_from_u64(seed),
            // Deterministic mode without an explicit seed still has to be
            // reproducible run-to-run.
            (None, true) => ChaCha8Rng::seed_from_u64(0),
            (None, false) => ChaCha8Rng::from_entropy(),
        };
        let grid = SpatialGrid::new(config.agent.perception_radius / 2.0, config.world.size);

        Ok(Self {
            config,
            factions: Vec::new(),
            agents: AgentArena::new(),
            buildings: Vec::new(),
            gene_pool: Vec::new(),
            generation: 0,
            generation_timer: 0.0,
            time_of_day: 0.0,
            tick: 0,
            metrics: Metrics::new(),
            rng,
            grid,
            pending_events: Vec::new(),
            combat_kills: Vec::new(),
        })
    }

    /// Seeds the gene pool and founds every faction with its settlement and
    /// starting population.
    pub fn initialize(&mut self) -> anyhow::Result<()> {
        let evolution = self.config.evolution.clone();

        self.gene_pool.clear();
        for _ in 0..evolution.pool_size {
            self.gene_pool.push(PolicyNetwork::new_random_with_rng(
                &evolution.agent_topology,
                &mut self.rng,
            )?);
        }

        let world = self.config.world.clone();
        // Founding sites sit on a ring around the world's middle, evenly
        // spaced so no two settlements overlap.
        let middle = world.size * 0.5;
        let ring = world.size * 0.3;
        for index in 0..world.factions {
            let id = FactionId(index as u8);
            let name = FACTION_NAMES
                .get(index)
                .map_or_else(|| format!("faction-{index}"), |&n| n.to_string());
            let government =
                PolicyNetwork::new_random_with_rng(&evolution.government_topology, &mut self.rng)?;
            let mut faction = Faction::new(id, name, government);

            let angle = index as f32 / world.factions as f32 * std::f32::consts::TAU;
            let center = Vec3::new(
                middle + ring * angle.cos(),
                middle + ring * angle.sin(),
                0.0,
            );
            for (kind, dx, dy) in SETTLEMENT_LAYOUT {
                let building_id = BuildingId(self.buildings.len() as u32);
                self.buildings
                    .push(Building::new(kind, center + Vec3::new(dx, dy, 0.0), id));
                faction.buildings.push(building_id);
            }
            self.factions.push(faction);

            for _ in 0..world.initial_agents_per_faction {
                let jitter = Vec3::new(
                    self.rng.gen_range(-5.0..5.0),
                    self.rng.gen_range(-5.0..5.0),
                    0.0,
                );
                self.spawn_agent(id, center + jitter)?;
            }
        }

        self.rebuild_grid();
        tracing::info!(
            factions = self.factions.len(),
            agents = self.agents.len(),
            pool = self.gene_pool.len(),
            "world initialized"
        );
        Ok(())
    }

    /// Advances the simulation one tick. Substep order is fixed: time,
    /// generation clock, agents, buildings, factions, target cleanup,
    /// compaction.
    pub fn update(&mut self, dt: f32) -> anyhow::Result<Vec<SimEvent>> {
        self.tick += 1;

        // 1. Day/night clock.
        self.time_of_day = (self.time_of_day + dt / self.config.world.day_length).fract();

        // 2. Generation clock.
        self.generation_timer += dt;
        if self.generation_timer >= self.config.evolution.generation_length {
            self.evolve()?;
            self.generation_timer = 0.0;
        }

        // 3. Perception and decisions, one agent at a time.
        self.rebuild_grid();
        let radius = self.config.agent.perception_radius;
        for id in self.agents.ids() {
            let Some(agent) = self.agents.get(id) else {
                continue;
            };
            if !agent.is_alive() {
                continue;
            }
            let position = agent.position;
            let neighbors = self.collect_neighbors(position, radius, Some(id));
            let nearby = self.collect_buildings(position, radius);

            let action = match self.agents.get_mut(id) {
                Some(agent) => agent.update(dt, &neighbors, &nearby, &self.config, &mut self.rng),
                None => None,
            };

            if let Some(AgentAction::Attack { target }) = action {
                if let Some((attacker, enemy)) = self.agents.get_pair_mut(id, target) {
                    if attacker.attack(enemy, &self.config.combat) {
                        self.combat_kills.push(target);
                    }
                }
            }
        }

        // 4. Buildings regenerate while standing.
        let regen = self.config.economy.building_regen_rate * dt;
        for building in &mut self.buildings {
            if building.health > 0.0 && building.health < 100.0 {
                building.health = (building.health + regen).min(100.0);
            }
        }

        // 5. Faction governments, role balancing, taxes.
        let cap = self.config.world.faction_cap;
        for faction in &mut self.factions {
            faction.update(&mut self.agents, &self.buildings, cap);
        }

        // 6. Drop targets pointing at the dead.
        let mut stale = Vec::new();
        for (id, agent) in self.agents.iter() {
            if let Some(target) = agent.target {
                let valid = self.agents.get(target).is_some_and(|t| t.is_alive());
                if !valid {
                    stale.push(id);
                }
            }
        }
        for id in stale {
            if let Some(agent) = self.agents.get_mut(id) {
                agent.target = None;
            }
        }

        // 7. Compact the dead out of the arena.
        let dead: Vec<AgentId> = self
            .agents
            .iter()
            .filter(|(_, a)| !a.is_alive())
            .map(|(id, _)| id)
            .collect();
        for id in dead {
            let Some(agent) = self.agents.remove(id) else {
                continue;
            };
            if let Some(home) = agent.home {
                if let Some(building) = self.buildings.get_mut(home.0 as usize) {
                    building.occupants = building.occupants.saturating_sub(1);
                }
            }
            let cause = if self.combat_kills.contains(&id) {
                "combat"
            } else {
                "starvation"
            };
            self.metrics.increment("deaths");
            self.pending_events.push(SimEvent::AgentDied {
                id: agent.id,
                faction: agent.faction.0,
                cause: cause.to_string(),
                age: agent.age,
                kills: agent.kills,
                tick: self.tick,
            });
        }
        self.combat_kills.clear();

        // 8. Member handles follow the compaction.
        for faction in &mut self.factions {
            faction.members.retain(|&id| self.agents.contains(id));
        }

        self.rebuild_grid();
        self.metrics.record_tick(self.agents.len(), self.generation);
        Ok(std::mem::take(&mut self.pending_events))
    }

    /// All living agents within `radius` of `position`. Identical to a
    /// brute-force scan: the grid only prunes candidates, the exact
    /// squared-distance test decides membership.
    pub fn agents_near(
        &self,
        position: Vec3,
        radius: f32,
    ) -> Result<Vec<NeighborAgent>, CoreError> {
        if radius < 0.0 {
            return Err(CoreError::NegativeRadius(radius));
        }
        Ok(self.collect_neighbors(position, radius, None))
    }

    /// All buildings within `radius` of `position` (linear scan; the
    /// building count stays small).
    pub fn buildings_near(
        &self,
        position: Vec3,
        radius: f32,
    ) -> Result<Vec<NearbyBuilding>, CoreError> {
        if radius < 0.0 {
            return Err(CoreError::NegativeRadius(radius));
        }
        Ok(self.collect_buildings(position, radius))
    }

    fn collect_neighbors(
        &self,
        position: Vec3,
        radius: f32,
        exclude: Option<AgentId>,
    ) -> Vec<NeighborAgent> {
        let mut candidates = Vec::new();
        self.grid
            .query_into(position.x, position.y, radius, &mut candidates);
        let radius_sq = radius * radius;

        let mut out = Vec::new();
        for slot in candidates {
            let Some((id, agent)) = self.agents.get_by_slot(slot) else {
                continue;
            };
            if Some(id) == exclude || !agent.is_alive() {
                continue;
            }
            if agent.position.distance_squared(&position) <= radius_sq {
                out.push(NeighborAgent {
                    id,
                    position: agent.position,
                    faction: agent.faction,
                    role: agent.role,
                    health: agent.health,
                });
            }
        }
        out
    }

    fn collect_buildings(&self, position: Vec3, radius: f32) -> Vec<NearbyBuilding> {
        let radius_sq = radius * radius;
        self.buildings
            .iter()
            .enumerate()
            .filter(|(_, b)| b.position.distance_squared(&position) <= radius_sq)
            .map(|(i, b)| NearbyBuilding::snapshot(BuildingId(i as u32), b))
            .collect()
    }

    fn rebuild_grid(&mut self) {
        let items: Vec<(u32, Vec3)> = self
            .agents
            .iter()
            .map(|(id, agent)| (id.index, agent.position))
            .collect();
        self.grid.rebuild(&items);
    }

    /// Generation boundary: score, sort, breed a fresh pool, then refill
    /// thinned factions from it.
    fn evolve(&mut self) -> anyhow::Result<()> {
        let evolution = self.config.evolution.clone();

        let mut scored: Vec<PolicyNetwork> = Vec::new();
        for (_, agent) in self.agents.iter_mut() {
            if !agent.is_alive() {
                continue;
            }
            agent.brain.fitness = agent.fitness();
            scored.push(agent.brain.clone());
        }
        scored.sort_unstable_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let elite = scored.len() * evolution.elite_percent / 100;
        let mut pool: Vec<PolicyNetwork> = scored.iter().take(elite).cloned().collect();
        pool.truncate(evolution.pool_size);

        let k = evolution.tournament_k.min(scored.len());
        while pool.len() < evolution.pool_size {
            if scored.len() < 2 {
                pool.push(PolicyNetwork::new_random_with_rng(
                    &evolution.agent_topology,
                    &mut self.rng,
                )?);
                continue;
            }
            let pa = self.rng.gen_range(0..k);
            let pb = self.rng.gen_range(0..k);
            let mut child = scored[pa].crossover_with_rng(&scored[pb], &mut self.rng)?;
            child.mutate_with_rng(
                evolution.mutation_rate,
                evolution.mutation_strength,
                &mut self.rng,
            );
            pool.push(child);
        }
        self.gene_pool = pool;
        self.generation += 1;
        self.metrics.increment("generations");

        let best_fitness = scored.first().map_or(0.0, |n| n.fitness);
        tracing::info!(
            generation = self.generation,
            scored = scored.len(),
            best_fitness,
            "generation evolved"
        );
        self.pending_events.push(SimEvent::GenerationEvolved {
            generation: self.generation,
            scored: scored.len(),
            best_fitness,
            tick: self.tick,
        });

        // Refill each faction from the pool, half its deficit at a time.
        for index in 0..self.factions.len() {
            let faction_id = self.factions[index].id;
            let alive = self.factions[index]
                .members
                .iter()
                .filter(|&&m| self.agents.get(m).is_some_and(Agent::is_alive))
                .count();
            let deficit = self.config.world.faction_cap.saturating_sub(alive);
            let anchor = self.factions[index]
                .buildings
                .first()
                .and_then(|&bid| self.buildings.get(bid.0 as usize))
                .map(|b| b.position);
            let Some(anchor) = anchor else {
                continue;
            };
            for _ in 0..deficit / 2 {
                let jitter = Vec3::new(
                    self.rng.gen_range(-5.0..5.0),
                    self.rng.gen_range(-5.0..5.0),
                    0.0,
                );
                self.spawn_agent(faction_id, anchor + jitter)?;
            }
        }
        Ok(())
    }

    /// Creates an agent with a brain cloned from a random pool entry,
    /// registers it with its faction, and houses it in the first House with
    /// spare capacity. An empty pool recovers by synthesizing one fresh
    /// network first.
    pub fn spawn_agent(
        &mut self,
        faction: FactionId,
        position: Vec3,
    ) -> Result<AgentId, CoreError> {
        let faction_index = faction.0 as usize;
        if faction_index >= self.factions.len() {
            return Err(CoreError::UnknownFaction(faction.0));
        }

        if self.gene_pool.is_empty() {
            let net = PolicyNetwork::new_random_with_rng(
                &self.config.evolution.agent_topology,
                &mut self.rng,
            )?;
            self.gene_pool.push(net);
        }
        let choice = self.rng.gen_range(0..self.gene_pool.len());
        let brain = self.gene_pool[choice].clone();

        let mut agent = Agent::new(Uuid::from_u128(self.rng.gen()), faction, position, brain);
        let faction_ref = &mut self.factions[faction_index];
        for &bid in &faction_ref.buildings {
            if let Some(building) = self.buildings.get_mut(bid.0 as usize) {
                if building.kind == BuildingKind::House
                    && building.has_capacity()
                    && !building.is_destroyed()
                {
                    building.occupants += 1;
                    agent.home = Some(bid);
                    break;
                }
            }
        }

        let uuid = agent.id;
        let id = self.agents.insert(agent);
        faction_ref.members.push(id);
        self.metrics.increment("spawns");
        self.pending_events.push(SimEvent::AgentSpawned {
            id: uuid,
            faction: faction.0,
            tick: self.tick,
        });
        Ok(id)
    }

    // ------------------------------------------------------------------
    // External command surface.
    // ------------------------------------------------------------------

    /// Role change on behalf of the command layer.
    pub fn command_change_role(&mut self, id: AgentId, role: Role) -> bool {
        match self.agents.get_mut(id) {
            Some(agent) if agent.is_alive() => {
                agent.change_role(role);
                true
            }
            _ => false,
        }
    }

    /// Erects a building for a faction, paying its resource cost from the
    /// ledger.
    pub fn construct_building(
        &mut self,
        faction: FactionId,
        kind: BuildingKind,
        position: Vec3,
    ) -> Result<BuildingId, CoreError> {
        let Some(faction_ref) = self.factions.get_mut(faction.0 as usize) else {
            return Err(CoreError::UnknownFaction(faction.0));
        };

        let cost = kind.cost();
        for (index, &price) in cost.iter().enumerate() {
            if faction_ref.ledger[index] < price {
                return Err(CoreError::InsufficientResources {
                    faction: faction.0,
                    building: kind.label(),
                    resource: ResourceType::ALL[index].label(),
                    missing: price - faction_ref.ledger[index],
                });
            }
        }
        for (index, &price) in cost.iter().enumerate() {
            faction_ref.ledger[index] -= price;
        }

        let size = self.config.world.size;
        let site = Vec3::new(position.x.clamp(0.0, size), position.y.clamp(0.0, size), 0.0);
        let id = BuildingId(self.buildings.len() as u32);
        self.buildings.push(Building::new(kind, site, faction));
        faction_ref.buildings.push(id);

        self.pending_events.push(SimEvent::BuildingConstructed {
            kind,
            faction: faction.0,
            tick: self.tick,
        });
        tracing::info!(faction = faction.0, kind = kind.label(), "building constructed");
        Ok(id)
    }

    /// Immediate attack on behalf of the command layer; cooldown and
    /// liveness rules still apply.
    pub fn command_attack(&mut self, attacker: AgentId, target: AgentId) -> bool {
        let Some((a, t)) = self.agents.get_pair_mut(attacker, target) else {
            return false;
        };
        if !a.is_alive() {
            return false;
        }
        let had_effect = t.is_alive() && a.attack_cooldown <= 0.0;
        if a.attack(t, &self.config.combat) {
            self.combat_kills.push(target);
        }
        had_effect
    }

    /// Deposits an agent's whole carried stock into a faction storehouse.
    pub fn command_deposit(&mut self, agent: AgentId, building: BuildingId) -> bool {
        let Some(a) = self.agents.get(agent) else {
            return false;
        };
        let faction_index = a.faction.0 as usize;
        let Some(b) = self.buildings.get(building.0 as usize) else {
            return false;
        };
        if b.faction != a.faction {
            return false;
        }

        let building_ref = &self.buildings[building.0 as usize];
        let Some(faction_ref) = self.factions.get_mut(faction_index) else {
            return false;
        };
        match self.agents.get_mut(agent) {
            Some(a) if a.is_alive() => a.deposit_resources(
                building_ref,
                &mut faction_ref.ledger,
                &self.config.economy,
            ),
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Read-only views for renderers and stats overlays.
    // ------------------------------------------------------------------

    #[must_use]
    pub fn agent_views(&self) -> Vec<AgentView> {
        self.agents
            .iter()
            .filter(|(_, a)| a.is_alive())
            .map(|(handle, a)| AgentView {
                id: a.id,
                handle,
                position: a.position,
                faction: a.faction,
                role: a.role,
                health: a.health,
                energy: a.energy,
                carried_text: a.carried_text(),
                in_combat: a.in_combat(),
            })
            .collect()
    }

    #[must_use]
    pub fn building_views(&self) -> Vec<BuildingView> {
        self.buildings
            .iter()
            .enumerate()
            .map(|(i, b)| BuildingView {
                id: BuildingId(i as u32),
                kind: b.kind,
                position: b.position,
                faction: b.faction,
                health: b.health,
                occupants: b.occupants,
                capacity: b.capacity,
            })
            .collect()
    }

    #[must_use]
    pub fn faction_stats(&self) -> Vec<FactionStats> {
        self.factions
            .iter()
            .map(|f| {
                let mut population = 0usize;
                let mut fitness_sum = 0.0f32;
                for &id in &f.members {
                    if let Some(agent) = self.agents.get(id) {
                        if agent.is_alive() {
                            population += 1;
                            fitness_sum += agent.fitness();
                        }
                    }
                }
                FactionStats {
                    id: f.id,
                    name: f.name.clone(),
                    population,
                    average_fitness: if population > 0 {
                        fitness_sum / population as f32
                    } else {
                        0.0
                    },
                }
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Gene-pool persistence surface.
    // ------------------------------------------------------------------

    #[must_use]
    pub fn gene_pool(&self) -> &[PolicyNetwork] {
        &self.gene_pool
    }

    /// Hex DNA strings, one per pool entry.
    #[must_use]
    pub fn export_gene_pool_hex(&self) -> Vec<String> {
        self.gene_pool.iter().map(PolicyNetwork::to_hex).collect()
    }

    /// Replaces the pool with externally loaded networks; every entry must
    /// carry the configured agent topology.
    pub fn import_gene_pool(&mut self, networks: Vec<PolicyNetwork>) -> anyhow::Result<()> {
        anyhow::ensure!(!networks.is_empty(), "imported gene pool is empty");
        for net in &networks {
            anyhow::ensure!(
                net.topology() == self.config.evolution.agent_topology,
                "imported network topology {:?} does not match configured {:?}",
                net.topology(),
                self.config.evolution.agent_topology
            );
        }
        self.gene_pool = networks;
        Ok(())
    }
}
