// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Countdown, Step, Subtask};
use crate::agent::Body;
use crate::world::World;
use colony_core::{CancelReason, ContractViolation};

/// Store the held item on the storage tile the agent stands on.
///
/// If the tile filled up in the meantime the item is left on the floor
/// and the subtask cancels with [`CancelReason::NoStorage`].
#[derive(Debug, Default)]
pub struct Drop {
    countdown: Countdown,
}

impl Drop {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Subtask for Drop {
    fn name(&self) -> &'static str {
        "drop"
    }

    fn update(&mut self, body: &mut Body, world: &mut World) -> Result<Step, ContractViolation> {
        if body.hands.holding().is_none() {
            return Ok(Step::Cancelled(CancelReason::NothingHeld));
        }
        if !self.countdown.tick(world.config.drop_ticks) {
            return Ok(Step::Running);
        }
        let Some(item) = body.hands.release() else {
            return Ok(Step::Cancelled(CancelReason::NothingHeld));
        };
        if !world.storage.deposit(body.position, &item.kind) {
            world.items.put(item, body.position);
            return Ok(Step::Cancelled(CancelReason::NoStorage));
        }
        tracing::debug!(agent = %body.id, item = %item.id, at = %body.position, "stored");
        Ok(Step::Done)
    }
}
