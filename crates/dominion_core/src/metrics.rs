//! Simulation metrics and structured logging.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Counters for monitoring a running world; cheap enough to update every
/// tick.
#[derive(Debug, Default)]
pub struct Metrics {
    tick_count: AtomicU64,
    agent_count: AtomicU64,
    generation: AtomicU64,
    counters: Mutex<HashMap<&'static str, u64>>,
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed tick; logs a structured summary every 1000 ticks.
    pub fn record_tick(&self, agents: usize, generation: u64) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.agent_count.store(agents as u64, Ordering::Relaxed);
        self.generation.store(generation, Ordering::Relaxed);

        if tick % 1000 == 0 {
            tracing::info!(tick, agents, generation, "simulation tick");
        }
    }

    pub fn increment(&self, name: &'static str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        *counters.entry(name).or_insert(0) += 1;
    }

    #[must_use]
    pub fn counter(&self, name: &'static str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn agent_count(&self) -> u64 {
        self.agent_count.load(Ordering::Relaxed)
    }
}

/// Initialize the tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tick_advances_counters() {
        let metrics = Metrics::new();
        metrics.record_tick(45, 0);
        metrics.record_tick(44, 1);
        assert_eq!(metrics.tick_count(), 2);
        assert_eq!(metrics.agent_count(), 44);
    }

    #[test]
    fn test_named_counters() {
        let metrics = Metrics::new();
        metrics.increment("deaths");
        metrics.increment("deaths");
        assert_eq!(metrics.counter("deaths"), 2);
        assert_eq!(metrics.counter("spawns"), 0);
    }
}
