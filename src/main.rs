use anyhow::Result;
use clap::Parser;
use dominion_core::config::AppConfig;
use dominion_core::world::SimulationWorld;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,

    /// Seconds of simulation time per tick
    #[arg(long, default_value_t = 0.1)]
    dt: f32,

    /// Override the world seed (implies deterministic mode)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    dominion_core::init_logging();
    let args = Args::parse();

    let mut config = match std::fs::read_to_string(&args.config) {
        Ok(content) => AppConfig::from_toml(&content)?,
        Err(_) => AppConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
        config.world.deterministic = true;
    }

    let mut world = SimulationWorld::new(config)?;
    world.initialize()?;

    for _ in 0..args.ticks {
        world.update(args.dt)?;
        if world.agents.is_empty() {
            tracing::warn!(tick = world.tick, "all agents dead, stopping early");
            break;
        }
    }

    println!(
        "Finished at tick {} (generation {}, time of day {:.2})",
        world.tick, world.generation, world.time_of_day
    );
    for stats in world.faction_stats() {
        println!(
            "  {:<10} population {:>3}  avg fitness {:>8.1}",
            stats.name, stats.population, stats.average_fitness
        );
    }

    Ok(())
}
