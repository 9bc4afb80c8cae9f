//! Test helpers for the behavioral scenarios.
//!
//! Provides a small DSL for building colonies and recording what agents
//! do tick by tick.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use colony_core::test_support::{fast_config, pt};
pub use colony_core::{AgentId, Blueprint, ItemId, ItemKind, Point, SenderId, SimConfig};
pub use colony_engine::bus::Category;
pub use colony_engine::sender::{DigSite, HaulRequest, Quarry, QuarrySlot};
pub use colony_engine::world::{GridMap, Stockpiles};
pub use colony_engine::{Simulation, World};

/// Builder for a simulation over an ASCII map.
pub struct Colony {
    rows: Vec<String>,
    config: SimConfig,
    storage: Stockpiles,
}

pub fn colony(rows: &[&str]) -> Colony {
    Colony {
        rows: rows.iter().map(|r| r.to_string()).collect(),
        config: fast_config(),
        storage: Stockpiles::new(),
    }
}

impl Colony {
    pub fn config(mut self, edit: impl FnOnce(&mut SimConfig)) -> Self {
        edit(&mut self.config);
        self
    }

    /// Add a stockpile tile holding up to `capacity` items of any kind.
    pub fn stockpile(mut self, at: Point, capacity: u32) -> Self {
        self.storage.add(at, capacity);
        self
    }

    pub fn build(self) -> Simulation {
        let rows: Vec<&str> = self.rows.iter().map(String::as_str).collect();
        let world = World::new(GridMap::from_rows(&rows), self.config).with_storage(self.storage);
        Simulation::new(world)
    }
}

/// Spawn a walker and subscribe it to `categories`.
pub fn worker(sim: &mut Simulation, name: &str, at: Point, categories: &[Category]) -> AgentId {
    let id = sim.spawn_agent(name, at);
    for category in categories {
        sim.subscribe(id, *category).unwrap();
    }
    id
}

pub fn dig_site(sim: &mut Simulation, target: Point) -> SenderId {
    let reoffers = sim.world().config.max_reoffers;
    sim.add_sender(|id| DigSite::new(id, target, reoffers))
}

/// Drop a loose item on the map and ask for it to be hauled.
pub fn haul_request(sim: &mut Simulation, kind: &str, at: Point) -> (ItemId, SenderId) {
    let item = sim.world_mut().items.create(&Blueprint::new(kind), at);
    let reoffers = sim.world().config.max_reoffers;
    let sender = sim.add_sender(|id| HaulRequest::new(id, item, at, reoffers));
    (item, sender)
}

/// One line per tick: position, then `job/subtask` or `idle`.
pub fn trace(sim: &mut Simulation, agent: AgentId, ticks: u64) -> Vec<String> {
    let mut lines = Vec::new();
    for _ in 0..ticks {
        sim.tick().unwrap();
        let dwarf = sim.agent(agent).unwrap();
        let doing = match dwarf.scheduler.current() {
            Some(job) => format!("{}/{}", job.name(), job.current_subtask().unwrap_or("-")),
            None => "idle".to_string(),
        };
        lines.push(format!("{}: {} {}", sim.current_tick(), dwarf.body.position, doing));
    }
    lines
}

/// Tick until `done` holds, failing after `limit` ticks.
pub fn run_until(sim: &mut Simulation, limit: u64, mut done: impl FnMut(&Simulation) -> bool) -> u64 {
    for _ in 0..limit {
        if done(sim) {
            return sim.current_tick();
        }
        sim.tick().unwrap();
    }
    assert!(done(sim), "condition not met after {limit} ticks");
    sim.current_tick()
}
