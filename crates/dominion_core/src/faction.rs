//! Faction-level policy: the government brain, role rebalancing, and tax
//! collection over member agents.

use crate::agent::AgentLogic;
use crate::arena::AgentArena;
use crate::perception::government_state_vector;
use crate::policy::PolicyLogic;
use dominion_data::{Building, BuildingKind, Faction, Role, RESOURCE_KINDS};

const MAX_TAX_RATE: f32 = 0.5;

pub trait FactionLogic {
    /// One faction tick: government policy, then role rebalancing, then
    /// taxes.
    fn update(&mut self, agents: &mut AgentArena, buildings: &[Building], cap: usize);

    /// Runs the government brain over the faction aggregate and applies its
    /// first three outputs to the policy knobs by clamped assignment.
    fn govern(&mut self, agents: &AgentArena, cap: usize);

    /// Moves the soldier headcount toward `population × military_funding`,
    /// promoting Citizens or demoting Soldiers in member-list order.
    fn assign_roles(&mut self, agents: &mut AgentArena, buildings: &[Building]);

    /// Takes `floor(carried × tax_rate)` of every resource kind from every
    /// living Worker member into the ledger.
    fn collect_taxes(&mut self, agents: &mut AgentArena);
}

impl FactionLogic for Faction {
    fn update(&mut self, agents: &mut AgentArena, buildings: &[Building], cap: usize) {
        self.govern(agents, cap);
        self.assign_roles(agents, buildings);
        self.collect_taxes(agents);
    }

    fn govern(&mut self, agents: &AgentArena, cap: usize) {
        let mut population = 0usize;
        let mut soldiers = 0usize;
        let mut workers = 0usize;
        let mut health_sum = 0.0f32;
        for &id in &self.members {
            let Some(agent) = agents.get(id) else {
                continue;
            };
            if !agent.is_alive() {
                continue;
            }
            population += 1;
            health_sum += agent.health;
            match agent.role {
                Role::Soldier => soldiers += 1,
                Role::Worker => workers += 1,
                Role::Citizen | Role::Government => {}
            }
        }
        let average_health = if population > 0 {
            health_sum / population as f32
        } else {
            0.0
        };

        let state = government_state_vector(
            population,
            soldiers,
            workers,
            average_health,
            &self.ledger,
            self.buildings.len(),
            cap,
        );
        let outputs = match self.government.forward(&state) {
            Ok(outputs) => outputs,
            Err(err) => {
                tracing::warn!(faction = self.id.0, %err, "government brain rejected its state");
                return;
            }
        };
        if outputs.len() >= 3 {
            self.tax_rate = outputs[0].clamp(0.0, MAX_TAX_RATE);
            self.military_funding = outputs[1].clamp(0.0, 1.0);
            self.construction_priority = outputs[2].clamp(0.0, 1.0);
        }
    }

    fn assign_roles(&mut self, agents: &mut AgentArena, buildings: &[Building]) {
        let mut population = 0usize;
        let mut soldiers = 0usize;
        let mut has_government = false;
        for &id in &self.members {
            if let Some(agent) = agents.get(id) {
                if agent.is_alive() {
                    population += 1;
                    match agent.role {
                        Role::Soldier => soldiers += 1,
                        Role::Government => has_government = true,
                        Role::Citizen | Role::Worker => {}
                    }
                }
            }
        }

        let target = (population as f32 * self.military_funding) as usize;

        if soldiers < target {
            for &id in &self.members {
                if soldiers >= target {
                    break;
                }
                if let Some(agent) = agents.get_mut(id) {
                    if agent.is_alive() && agent.role == Role::Citizen {
                        agent.change_role(Role::Soldier);
                        soldiers += 1;
                    }
                }
            }
        } else if soldiers > target {
            for &id in &self.members {
                if soldiers <= target {
                    break;
                }
                if let Some(agent) = agents.get_mut(id) {
                    if agent.is_alive() && agent.role == Role::Soldier {
                        agent.change_role(Role::Worker);
                        soldiers -= 1;
                    }
                }
            }
        }

        // A standing government center keeps exactly one seat filled.
        let has_center = self.buildings.iter().any(|bid| {
            buildings
                .get(bid.0 as usize)
                .is_some_and(|b| b.kind == BuildingKind::GovernmentCenter && !b.is_destroyed())
        });
        if has_center && !has_government {
            for &id in &self.members {
                if let Some(agent) = agents.get_mut(id) {
                    if agent.is_alive() && agent.role == Role::Citizen {
                        agent.change_role(Role::Government);
                        break;
                    }
                }
            }
        }
    }

    fn collect_taxes(&mut self, agents: &mut AgentArena) {
        for &id in &self.members {
            let Some(agent) = agents.get_mut(id) else {
                continue;
            };
            if !agent.is_alive() || agent.role != Role::Worker {
                continue;
            }
            for kind in 0..RESOURCE_KINDS {
                let cut = (agent.carried[kind] as f32 * self.tax_rate).floor() as u32;
                let cut = cut.min(agent.carried[kind]);
                agent.carried[kind] -= cut;
                self.ledger[kind] = self.ledger[kind].saturating_add(cut);
            }
        }
    }
}
