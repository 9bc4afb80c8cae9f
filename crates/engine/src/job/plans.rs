// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in job plans.

use super::JobPlan;
use crate::agent::Body;
use crate::subtask::{Dig, Drop, GoTo, Locate, Mine, PickUp, SeekStorage, Subtask, Wait};
use crate::world::World;
use colony_core::{AgentId, Blueprint, CancelReason, ContractViolation, ItemId, Point, Priority, SlotId};

/// Walk next to a solid tile and dig it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigPlan {
    pub target: Point,
}

impl JobPlan for DigPlan {
    fn name(&self) -> &'static str {
        "dig"
    }

    fn init_job(&mut self, _owner: AgentId) -> Vec<Box<dyn Subtask>> {
        vec![
            Box::new(Locate::adjacent_to(self.target)),
            Box::new(Dig::new(self.target)),
        ]
    }
}

/// Stand in a quarry slot and mine one load of ore from the face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinePlan {
    pub slot: SlotId,
    pub stand: Point,
    pub face: Point,
    pub ore: Blueprint,
}

impl MinePlan {
    fn release(&self, owner: AgentId, world: &mut World) -> Result<(), ContractViolation> {
        if world.slots.release_if_held(self.slot, owner)? {
            tracing::debug!(slot = %self.slot, agent = %owner, "released quarry slot");
        }
        Ok(())
    }
}

impl JobPlan for MinePlan {
    fn name(&self) -> &'static str {
        "mine"
    }

    fn init_job(&mut self, _owner: AgentId) -> Vec<Box<dyn Subtask>> {
        vec![
            Box::new(GoTo::point(self.stand)),
            Box::new(Mine::new(self.face, self.slot, self.ore.clone())),
        ]
    }

    fn pause_job(&mut self, owner: AgentId, world: &mut World) -> Result<(), ContractViolation> {
        self.release(owner, world)
    }

    fn cancel_job(
        &mut self,
        body: &mut Body,
        _reason: &CancelReason,
        world: &mut World,
    ) -> Result<(), ContractViolation> {
        self.release(body.id, world)
    }
}

/// Carry a loose item to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaulPlan {
    pub item: ItemId,
}

impl JobPlan for HaulPlan {
    fn name(&self) -> &'static str {
        "haul"
    }

    fn priority(&self) -> Priority {
        Priority::Lower
    }

    fn init_job(&mut self, _owner: AgentId) -> Vec<Box<dyn Subtask>> {
        vec![
            Box::new(GoTo::item(self.item)),
            Box::new(PickUp::new(self.item)),
            Box::new(SeekStorage::new()),
            Box::new(Drop::new()),
        ]
    }

    /// Whatever went wrong, do not leave the agent carrying the item.
    fn cancel_job(
        &mut self,
        body: &mut Body,
        _reason: &CancelReason,
        world: &mut World,
    ) -> Result<(), ContractViolation> {
        if body.hands.holding().is_some_and(|held| held.id == self.item) {
            if let Some(item) = body.hands.release() {
                world.items.put(item, body.position);
            }
        }
        Ok(())
    }
}

/// Stand still for a while. Used as a fixed-owner job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestPlan {
    pub ticks: u32,
}

impl JobPlan for RestPlan {
    fn name(&self) -> &'static str {
        "rest"
    }

    fn priority(&self) -> Priority {
        Priority::Higher
    }

    fn init_job(&mut self, _owner: AgentId) -> Vec<Box<dyn Subtask>> {
        vec![Box::new(Wait::new(self.ticks))]
    }
}
