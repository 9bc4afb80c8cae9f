// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Countdown, Step, Subtask};
use crate::agent::Body;
use crate::world::World;
use colony_core::{CancelReason, ContractViolation, Point};

/// Dig out one solid tile from an adjacent position.
#[derive(Debug)]
pub struct Dig {
    target: Point,
    countdown: Countdown,
}

impl Dig {
    pub fn new(target: Point) -> Self {
        Self {
            target,
            countdown: Countdown::default(),
        }
    }

    pub fn target(&self) -> Point {
        self.target
    }
}

impl Subtask for Dig {
    fn name(&self) -> &'static str {
        "dig"
    }

    fn update(&mut self, body: &mut Body, world: &mut World) -> Result<Step, ContractViolation> {
        if world.map.is_dug_out(self.target) {
            return Ok(Step::Cancelled(CancelReason::AlreadyDug(self.target)));
        }
        if !body.position.is_adjacent(self.target) {
            return Ok(Step::Cancelled(CancelReason::NotAdjacent(self.target)));
        }
        if !self.countdown.tick(world.config.dig_ticks) {
            return Ok(Step::Running);
        }
        world.map.dig_out(self.target);
        tracing::debug!(agent = %body.id, tile = %self.target, "dug out");
        Ok(Step::Done)
    }
}
