// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Countdown, Step, Subtask};
use crate::agent::Body;
use crate::world::World;
use colony_core::{Blueprint, CancelReason, ContractViolation, Point, SlotId};

/// Work an ore face from a job slot.
///
/// The slot is occupied on the first working tick and freed when the ore
/// drops. If the job stops early its plan releases the slot.
#[derive(Debug)]
pub struct Mine {
    face: Point,
    slot: SlotId,
    ore: Blueprint,
    countdown: Countdown,
    occupied: bool,
}

impl Mine {
    pub fn new(face: Point, slot: SlotId, ore: Blueprint) -> Self {
        Self {
            face,
            slot,
            ore,
            countdown: Countdown::default(),
            occupied: false,
        }
    }
}

impl Subtask for Mine {
    fn name(&self) -> &'static str {
        "mine"
    }

    fn update(&mut self, body: &mut Body, world: &mut World) -> Result<Step, ContractViolation> {
        if world.map.is_dug_out(self.face) {
            return Ok(Step::Cancelled(CancelReason::NotMineable(self.face)));
        }
        if !body.position.is_adjacent(self.face) {
            return Ok(Step::Cancelled(CancelReason::NotAdjacent(self.face)));
        }
        if !self.occupied {
            world.slots.occupy(self.slot, body.id)?;
            self.occupied = true;
        }
        if !self.countdown.tick(world.config.mine_ticks) {
            return Ok(Step::Running);
        }

        let item = world.items.create(&self.ore, body.position);
        world.slots.free(self.slot, body.id)?;
        self.occupied = false;
        tracing::debug!(agent = %body.id, face = %self.face, %item, "mined ore");
        Ok(Step::Done)
    }
}
