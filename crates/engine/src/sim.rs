// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The tick loop.
//!
//! Each tick runs in a fixed order:
//!
//! 1. path searches queued last tick are delivered to their listeners;
//! 2. every channel is flushed, in [`Category::ALL`] order;
//! 3. every agent's scheduler runs once, in ascending id order.
//!
//! Flushing before the agents means an advertisement enqueued on tick N
//! is in the mailboxes when agents run on tick N+1.

use crate::agent::{Agent, Body, Movement};
use crate::bus::{Category, ChannelRegistry, Directory, Message, Subscriber};
use crate::error::SimError;
use crate::job::{Job, JobPlan};
use crate::sender::{Sender, Senders};
use crate::world::{TileMap, World};
use colony_core::{AgentId, ContractViolation, IdGen, JobId, Point, SenderId, SimConfig};
use std::collections::BTreeMap;
use std::path::Path;

/// What an agent's scheduler may touch while it runs.
pub struct TickContext<'a> {
    pub world: &'a mut World,
    pub senders: &'a mut Senders,
    pub bus: &'a mut ChannelRegistry,
    pub ids: &'a mut IdGen,
}

/// Resolves bus ids during a flush.
struct Endpoints<'a> {
    agents: &'a mut BTreeMap<AgentId, Agent>,
    senders: &'a mut Senders,
}

impl Directory for Endpoints<'_> {
    fn announce(&mut self, sender: SenderId, subscriber: AgentId) -> Option<Message> {
        self.senders.get_mut(sender)?.new_subscriber(subscriber)
    }

    fn deliver(&mut self, subscriber: AgentId, message: &Message) {
        if let Some(agent) = self.agents.get_mut(&subscriber) {
            Subscriber::update(agent, message);
        }
    }
}

#[derive(Debug)]
pub struct Simulation {
    world: World,
    bus: ChannelRegistry,
    senders: Senders,
    agents: BTreeMap<AgentId, Agent>,
    ids: IdGen,
    tick: u64,
}

impl Simulation {
    pub fn new(world: World) -> Self {
        Self {
            world,
            bus: ChannelRegistry::new(),
            senders: Senders::new(),
            agents: BTreeMap::new(),
            ids: IdGen::new(),
            tick: 0,
        }
    }

    /// A simulation over `map` with settings read from a TOML file.
    pub fn from_config_file(map: impl TileMap + 'static, path: &Path) -> Result<Self, SimError> {
        let config = SimConfig::load(path)?;
        Ok(Self::new(World::new(map, config)))
    }

    /// Advance one tick. Stops at the first contract violation.
    pub fn tick(&mut self) -> Result<(), ContractViolation> {
        self.tick += 1;
        let paths = self.world.deliver_paths();
        let messages = self.bus.flush_all(&mut Endpoints {
            agents: &mut self.agents,
            senders: &mut self.senders,
        });

        let mut ctx = TickContext {
            world: &mut self.world,
            senders: &mut self.senders,
            bus: &mut self.bus,
            ids: &mut self.ids,
        };
        for agent in self.agents.values_mut() {
            agent.tick(&mut ctx)?;
        }

        tracing::trace!(tick = self.tick, paths, messages, "tick");
        Ok(())
    }

    pub fn run(&mut self, ticks: u64) -> Result<(), ContractViolation> {
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(())
    }

    /// Add a walking agent with the configured default speed.
    pub fn spawn_agent(&mut self, name: &str, position: Point) -> AgentId {
        let movement = Movement::Walks {
            ticks_per_tile: self.world.config.move_ticks_per_tile,
        };
        self.spawn_with(|id| Body::new(id, name, position, movement))
    }

    pub fn spawn_with(&mut self, build: impl FnOnce(AgentId) -> Body) -> AgentId {
        let id = self.ids.next();
        let body = build(id);
        tracing::info!(agent = %id, name = %body.name, position = %body.position, "agent spawned");
        self.agents.insert(id, Agent::new(body));
        id
    }

    /// Remove an agent. Jobs it owned are paused and handed back to their
    /// senders; anything it carried is put down where it stood.
    pub fn remove_agent(&mut self, id: AgentId) -> Result<Agent, ContractViolation> {
        let mut agent = self
            .agents
            .remove(&id)
            .ok_or(ContractViolation::UnknownAgent(id))?;
        self.bus.unsubscribe_everywhere(id);

        let returned = agent.scheduler.release(&mut self.world)?;
        for job in returned {
            self.senders.job_returned(job, &mut self.bus);
        }
        if let Some(item) = agent.body.hands.release() {
            self.world.items.put(item, agent.body.position);
        }
        tracing::info!(agent = %id, position = %agent.body.position, "agent removed");
        Ok(agent)
    }

    pub fn subscribe(&mut self, agent: AgentId, category: Category) -> Result<bool, ContractViolation> {
        if !self.agents.contains_key(&agent) {
            return Err(ContractViolation::UnknownAgent(agent));
        }
        Ok(self.bus.channel_mut(category).subscribe(agent))
    }

    pub fn unsubscribe(&mut self, agent: AgentId, category: Category) -> bool {
        self.bus.channel_mut(category).unsubscribe(agent)
    }

    /// Register a sender built around a freshly allocated id. It is
    /// subscribed to its channel and, if it has work, advertises it on the
    /// next flush.
    pub fn add_sender<S: Sender + 'static>(&mut self, build: impl FnOnce(SenderId) -> S) -> SenderId {
        let id = self.ids.next();
        let sender = build(id);
        let category = sender.category();
        let channel = self.bus.channel_mut(category);
        channel.subscribe_sender(id);
        if sender.is_job_available() {
            channel.enqueue_message(Message::new(id));
        }
        tracing::info!(sender = %id, name = sender.name(), %category, "sender added");
        self.senders.insert(Box::new(sender));
        id
    }

    /// Remove a sender and any advertisements of it still on the bus.
    pub fn remove_sender(&mut self, id: SenderId) -> Result<Box<dyn Sender>, ContractViolation> {
        let sender = self
            .senders
            .remove(id)
            .ok_or(ContractViolation::UnknownSender(id))?;
        self.bus.unsubscribe_sender_everywhere(id);
        tracing::info!(sender = %id, "sender removed");
        Ok(sender)
    }

    /// Give `agent` a fixed-owner job built from `plan`.
    pub fn assign(&mut self, agent: AgentId, plan: impl JobPlan + 'static) -> Result<JobId, ContractViolation> {
        let id = self.ids.next();
        let scheduler = &mut self
            .agents
            .get_mut(&agent)
            .ok_or(ContractViolation::UnknownAgent(agent))?
            .scheduler;
        scheduler.add(Job::fixed(id, agent, plan))?;
        Ok(id)
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn bus(&self) -> &ChannelRegistry {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut ChannelRegistry {
        &mut self.bus
    }

    pub fn senders(&self) -> &Senders {
        &self.senders
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }

    pub fn agents(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values()
    }
}

#[cfg(test)]
#[path = "sim_tests.rs"]
mod tests;
