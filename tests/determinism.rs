use dominion_lib::config::AppConfig;
use dominion_lib::world::SimulationWorld;

#[test]
fn test_same_seed_same_history() {
    let mut config = AppConfig::default();
    config.world.seed = Some(12345);
    config.world.deterministic = true;

    let mut world1 = SimulationWorld::new(config.clone()).unwrap();
    world1.initialize().unwrap();
    let mut world2 = SimulationWorld::new(config).unwrap();
    world2.initialize().unwrap();

    for _ in 0..100 {
        world1.update(0.1).unwrap();
        world2.update(0.1).unwrap();
    }

    assert_eq!(world1.tick, world2.tick);
    assert_eq!(world1.agents.len(), world2.agents.len());

    let a1: Vec<_> = world1.agents.iter().collect();
    let a2: Vec<_> = world2.agents.iter().collect();
    for ((id1, e1), (id2, e2)) in a1.iter().zip(a2.iter()) {
        assert_eq!(id1, id2, "slot layout should match");
        assert_eq!(e1.id, e2.id, "agent identity should match");
        assert_eq!(e1.position, e2.position);
        assert_eq!(e1.energy, e2.energy);
        assert_eq!(e1.health, e2.health);
        assert_eq!(e1.role, e2.role);
    }

    for (f1, f2) in world1.factions.iter().zip(world2.factions.iter()) {
        assert_eq!(f1.ledger, f2.ledger);
        assert_eq!(f1.tax_rate, f2.tax_rate);
        assert_eq!(f1.military_funding, f2.military_funding);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut config1 = AppConfig::default();
    config1.world.seed = Some(1);
    let mut config2 = AppConfig::default();
    config2.world.seed = Some(2);

    let mut world1 = SimulationWorld::new(config1).unwrap();
    world1.initialize().unwrap();
    let mut world2 = SimulationWorld::new(config2).unwrap();
    world2.initialize().unwrap();

    let p1: Vec<_> = world1.agents.iter().map(|(_, a)| a.position).collect();
    let p2: Vec<_> = world2.agents.iter().map(|(_, a)| a.position).collect();
    assert_ne!(p1, p2, "different seeds should place agents differently");
}
