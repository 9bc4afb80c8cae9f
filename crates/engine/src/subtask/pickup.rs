// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Countdown, Step, Subtask};
use crate::agent::{Body, Hands};
use crate::world::World;
use colony_core::{CancelReason, ContractViolation, ItemId};

/// Pick up a loose item lying on or next to the agent's tile.
#[derive(Debug)]
pub struct PickUp {
    item: ItemId,
    countdown: Countdown,
}

impl PickUp {
    pub fn new(item: ItemId) -> Self {
        Self {
            item,
            countdown: Countdown::default(),
        }
    }
}

impl Subtask for PickUp {
    fn name(&self) -> &'static str {
        "pickup"
    }

    fn update(&mut self, body: &mut Body, world: &mut World) -> Result<Step, ContractViolation> {
        match body.hands {
            Hands::Handless => return Ok(Step::Cancelled(CancelReason::CannotCarry)),
            Hands::Holding(_) => return Ok(Step::Cancelled(CancelReason::HandsFull)),
            Hands::Empty => {}
        }
        let Some(at) = world.items.location(self.item) else {
            return Ok(Step::Cancelled(CancelReason::ItemMissing));
        };
        if at != body.position && !body.position.is_adjacent(at) {
            return Ok(Step::Cancelled(CancelReason::NotAdjacent(at)));
        }
        if !self.countdown.tick(world.config.pickup_ticks) {
            return Ok(Step::Running);
        }
        let Some(item) = world.items.take(self.item) else {
            return Ok(Step::Cancelled(CancelReason::ItemMissing));
        };
        tracing::debug!(agent = %body.id, item = %item.id, kind = %item.kind, "picked up");
        body.hands = Hands::Holding(item);
        Ok(Step::Done)
    }
}
