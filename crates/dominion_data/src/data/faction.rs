use super::agent::{AgentId, FactionId};
use super::building::BuildingId;
use super::genome::PolicyNetwork;
use super::resources::RESOURCE_KINDS;
use serde::{Deserialize, Serialize};

/// Faction-level aggregate: member and building handles (non-owning views
/// into world storage), the resource ledger, the macro-economic knobs the
/// government brain steers, and that brain itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faction {
    pub id: FactionId,
    pub name: String,
    pub members: Vec<AgentId>,
    pub buildings: Vec<BuildingId>,
    pub ledger: [u32; RESOURCE_KINDS],
    /// Tax cut taken from worker stock, in [0, 0.5].
    pub tax_rate: f32,
    /// Share of the population kept under arms, in [0, 1].
    pub military_funding: f32,
    /// Construction bias for the external build layer, in [0, 1].
    pub construction_priority: f32,
    pub government: PolicyNetwork,
}

impl Faction {
    #[must_use]
    pub fn new(id: FactionId, name: impl Into<String>, government: PolicyNetwork) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
            buildings: Vec::new(),
            ledger: [0; RESOURCE_KINDS],
            tax_rate: 0.1,
            military_funding: 0.2,
            construction_priority: 0.5,
            government,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_faction_starts_empty() {
        let f = Faction::new(
            FactionId(2),
            "crimson",
            PolicyNetwork {
                layers: Vec::new(),
                fitness: 0.0,
            },
        );
        assert_eq!(f.id, FactionId(2));
        assert!(f.members.is_empty());
        assert!(f.buildings.is_empty());
        assert_eq!(f.ledger, [0; RESOURCE_KINDS]);
        assert!(f.tax_rate >= 0.0 && f.tax_rate <= 0.5);
    }
}
