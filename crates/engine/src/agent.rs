// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agents: a body with capabilities, plus the scheduler that drives it.
//!
//! Capabilities are closed enums rather than pluggable strategies. Each has
//! a null variant ([`Movement::Immobile`], [`Hands::Handless`]) that makes
//! the matching subtasks cancel instead of act.

use crate::bus::{Message, Subscriber};
use crate::scheduler::JobScheduler;
use crate::TickContext;
use colony_core::{AgentId, Capability, ContractViolation, Item, Point};

/// How an agent moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Walks { ticks_per_tile: u32 },
    Flies { ticks_per_tile: u32 },
    Immobile,
}

impl Movement {
    pub fn capability(self) -> Option<Capability> {
        match self {
            Movement::Walks { .. } => Some(Capability::Walk),
            Movement::Flies { .. } => Some(Capability::Fly),
            Movement::Immobile => None,
        }
    }

    /// Ticks to cross one tile. Never zero.
    pub fn ticks_per_tile(self) -> Option<u32> {
        match self {
            Movement::Walks { ticks_per_tile } | Movement::Flies { ticks_per_tile } => {
                Some(ticks_per_tile.max(1))
            }
            Movement::Immobile => None,
        }
    }
}

/// What an agent is carrying.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Hands {
    #[default]
    Empty,
    Holding(Item),
    Handless,
}

impl Hands {
    pub fn holding(&self) -> Option<&Item> {
        match self {
            Hands::Holding(item) => Some(item),
            Hands::Empty | Hands::Handless => None,
        }
    }

    /// Give up the held item, leaving the hands empty.
    pub fn release(&mut self) -> Option<Item> {
        match std::mem::take(self) {
            Hands::Holding(item) => Some(item),
            Hands::Handless => {
                *self = Hands::Handless;
                None
            }
            Hands::Empty => None,
        }
    }
}

/// The physical part of an agent that subtasks act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub id: AgentId,
    pub name: String,
    pub position: Point,
    pub movement: Movement,
    pub hands: Hands,
    /// Width of the square the agent occupies, in tiles.
    pub clearance: u8,
}

impl Body {
    pub fn new(id: AgentId, name: impl Into<String>, position: Point, movement: Movement) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            movement,
            hands: Hands::Empty,
            clearance: 1,
        }
    }

    pub fn with_hands(mut self, hands: Hands) -> Self {
        self.hands = hands;
        self
    }

    pub fn with_clearance(mut self, clearance: u8) -> Self {
        self.clearance = clearance;
        self
    }
}

/// An agent in the simulation.
#[derive(Debug)]
pub struct Agent {
    pub body: Body,
    pub scheduler: JobScheduler,
}

impl Agent {
    pub fn new(body: Body) -> Self {
        let scheduler = JobScheduler::new(body.id);
        Self { body, scheduler }
    }

    pub fn id(&self) -> AgentId {
        self.body.id
    }

    /// Run this agent's scheduler for one tick.
    pub fn tick(&mut self, ctx: &mut TickContext<'_>) -> Result<(), ContractViolation> {
        self.scheduler.update(&mut self.body, ctx)
    }
}

impl Subscriber for Agent {
    fn update(&mut self, message: &Message) {
        self.scheduler.add_message(*message);
    }
}
