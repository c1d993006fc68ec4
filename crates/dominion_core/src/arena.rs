use dominion_data::{Agent, AgentId};

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    agent: Option<Agent>,
}

/// Generational slot arena; the world's exclusive agent storage.
///
/// Removal bumps the slot generation, so handles taken before a
/// death-compaction pass resolve to `None` afterwards instead of aliasing a
/// respawned agent in the reused slot.
#[derive(Debug, Default)]
pub struct AgentArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl AgentArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, agent: Agent) -> AgentId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.agent = Some(agent);
            AgentId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                agent: Some(agent),
            });
            AgentId {
                index,
                generation: 0,
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.agent.as_ref()
    }

    #[must_use]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.agent.as_mut()
    }

    /// Split mutable borrow of two distinct live agents, for combat where
    /// both attacker and victim change in the same call.
    #[must_use]
    pub fn get_pair_mut(&mut self, a: AgentId, b: AgentId) -> Option<(&mut Agent, &mut Agent)> {
        if a.index == b.index {
            return None;
        }
        let (ai, bi) = (a.index as usize, b.index as usize);
        if ai >= self.slots.len() || bi >= self.slots.len() {
            return None;
        }

        let (first, second) = if ai < bi {
            let (left, right) = self.slots.split_at_mut(bi);
            (&mut left[ai], &mut right[0])
        } else {
            let (left, right) = self.slots.split_at_mut(ai);
            let second = &mut right[0];
            (second, &mut left[bi])
        };

        if first.generation != a.generation || second.generation != b.generation {
            return None;
        }
        match (first.agent.as_mut(), second.agent.as_mut()) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }

    /// Resolves a raw slot index (as stored in the spatial grid) back into
    /// a current handle and agent. Freed slots resolve to `None`.
    #[must_use]
    pub fn get_by_slot(&self, index: u32) -> Option<(AgentId, &Agent)> {
        let slot = self.slots.get(index as usize)?;
        let agent = slot.agent.as_ref()?;
        Some((
            AgentId {
                index,
                generation: slot.generation,
            },
            agent,
        ))
    }

    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let agent = slot.agent.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(agent)
    }

    #[must_use]
    pub fn contains(&self, id: AgentId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Agent)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.agent.as_ref().map(|agent| {
                (
                    AgentId {
                        index: i as u32,
                        generation: slot.generation,
                    },
                    agent,
                )
            })
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AgentId, &mut Agent)> {
        self.slots.iter_mut().enumerate().filter_map(|(i, slot)| {
            let generation = slot.generation;
            slot.agent.as_mut().map(move |agent| {
                (
                    AgentId {
                        index: i as u32,
                        generation,
                    },
                    agent,
                )
            })
        })
    }

    /// Snapshot of all current handles, for iteration that mutates storage.
    #[must_use]
    pub fn ids(&self) -> Vec<AgentId> {
        self.iter().map(|(id, _)| id).collect()
    }
}
