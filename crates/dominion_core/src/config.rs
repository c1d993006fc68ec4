//! Configuration management for simulation parameters.
//!
//! Strongly-typed sections mapping to a `config.toml` file; defaults are
//! hardcoded in the `Default` impls and a file, when present, overrides
//! them. `validate` runs after every load.

use crate::perception::{AGENT_OUTPUTS, GOVERNMENT_INPUTS, STATE_INPUTS};
use serde::{Deserialize, Serialize};

/// World-level parameters: bounds, faction roster, determinism.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of the square ground plane; x and y live in [0, size].
    pub size: f32,
    /// Agents may climb to z in [0, ceiling] (currently pinned to ground).
    pub ceiling: f32,
    pub factions: usize,
    /// Per-faction population cap used by evolution respawning.
    pub faction_cap: usize,
    pub initial_agents_per_faction: usize,
    /// Sim-seconds per day; time-of-day wraps in [0, 1).
    pub day_length: f32,
    pub seed: Option<u64>,
    pub deterministic: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 500.0,
            ceiling: 20.0,
            factions: 3,
            faction_cap: 40,
            initial_agents_per_faction: 15,
            day_length: 240.0,
            seed: None,
            deterministic: false,
        }
    }
}

/// Per-agent physiology and perception.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AgentConfig {
    pub perception_radius: f32,
    /// Fixed movement speed the decision vector is scaled to, units/sec.
    pub move_speed: f32,
    pub energy_drain: f32,
    /// Health lost per second while energy is exhausted.
    pub starvation_rate: f32,
    /// Extra energy per second for Government members at their workplace.
    pub government_recovery: f32,
    pub gravity: f32,
    /// Flat per-tick velocity damping factor.
    pub friction: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            perception_radius: 50.0,
            move_speed: 10.0,
            energy_drain: 2.0,
            starvation_rate: 5.0,
            government_recovery: 4.0,
            gravity: 9.8,
            friction: 0.95,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CombatConfig {
    pub base_damage: f32,
    /// Damage multiplier for attackers with the Soldier role.
    pub soldier_multiplier: f32,
    pub attack_range: f32,
    /// Radius a soldier scans when the brain requests a new target.
    pub target_range: f32,
    pub cooldown: f32,
    pub attack_energy_cost: f32,
    pub kill_energy_refund: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            base_damage: 10.0,
            soldier_multiplier: 2.0,
            attack_range: 1.5,
            target_range: 50.0,
            cooldown: 1.0,
            attack_energy_cost: 5.0,
            kill_energy_refund: 10.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EconomyConfig {
    /// Distance within which a worker gathers at its workplace.
    pub gather_range: f32,
    pub gather_energy_cost: f32,
    pub deposit_energy_reward: f32,
    /// Building health regained per second while damaged but standing.
    pub building_regen_rate: f32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            gather_range: 2.0,
            gather_energy_cost: 0.5,
            deposit_energy_reward: 2.0,
            building_regen_rate: 0.5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Sim-seconds between generation boundaries.
    pub generation_length: f32,
    pub pool_size: usize,
    /// Share of scored networks copied verbatim, in percent.
    pub elite_percent: usize,
    /// Parents are drawn from the top min(tournament_k, scored) networks.
    pub tournament_k: usize,
    pub mutation_rate: f32,
    pub mutation_strength: f32,
    pub agent_topology: Vec<usize>,
    pub government_topology: Vec<usize>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            generation_length: 60.0,
            pool_size: 100,
            elite_percent: 20,
            tournament_k: 10,
            mutation_rate: 0.1,
            mutation_strength: 0.2,
            agent_topology: vec![STATE_INPUTS, 32, 16, AGENT_OUTPUTS],
            government_topology: vec![GOVERNMENT_INPUTS, 12, 3],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub agent: AgentConfig,
    pub combat: CombatConfig,
    pub economy: EconomyConfig,
    pub evolution: EvolutionConfig,
}

impl AppConfig {
    /// Parses and validates a `config.toml` document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.size > 0.0, "World size must be positive");
        anyhow::ensure!(self.world.ceiling > 0.0, "World ceiling must be positive");
        anyhow::ensure!(self.world.factions >= 1, "Need at least one faction");
        anyhow::ensure!(
            self.world.factions <= u8::MAX as usize,
            "Faction ids are 8-bit"
        );
        anyhow::ensure!(self.world.faction_cap >= 1, "Faction cap must be positive");
        anyhow::ensure!(self.world.day_length > 0.0, "Day length must be positive");

        anyhow::ensure!(
            self.agent.perception_radius > 0.0,
            "Perception radius must be positive"
        );
        anyhow::ensure!(self.agent.move_speed > 0.0, "Move speed must be positive");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.agent.friction),
            "Friction must lie in [0, 1]"
        );

        anyhow::ensure!(self.combat.attack_range > 0.0, "Attack range must be positive");
        anyhow::ensure!(self.combat.cooldown >= 0.0, "Cooldown cannot be negative");

        anyhow::ensure!(
            self.evolution.generation_length > 0.0,
            "Generation length must be positive"
        );
        anyhow::ensure!(self.evolution.pool_size >= 1, "Gene pool cannot be empty");
        anyhow::ensure!(
            self.evolution.elite_percent <= 100,
            "Elite share is a percentage"
        );
        anyhow::ensure!(
            self.evolution.tournament_k >= 2,
            "Tournament needs at least two candidates"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.evolution.mutation_rate),
            "Mutation rate must lie in [0, 1]"
        );
        anyhow::ensure!(
            self.evolution.agent_topology.first() == Some(&STATE_INPUTS),
            "Agent topology must start at the state vector size"
        );
        anyhow::ensure!(
            self.evolution.agent_topology.last() == Some(&AGENT_OUTPUTS),
            "Agent topology must end at the output count"
        );
        anyhow::ensure!(
            self.evolution.government_topology.first() == Some(&GOVERNMENT_INPUTS),
            "Government topology must start at the government vector size"
        );
        anyhow::ensure!(
            self.evolution.government_topology.last().is_some_and(|&o| o >= 3),
            "Government topology needs at least three outputs"
        );

        Ok(())
    }
}
