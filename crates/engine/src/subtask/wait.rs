// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Countdown, Step, Subtask};
use crate::agent::Body;
use crate::world::World;
use colony_core::ContractViolation;

/// Idle in place for a fixed number of ticks.
#[derive(Debug)]
pub struct Wait {
    ticks: u32,
    countdown: Countdown,
}

impl Wait {
    pub fn new(ticks: u32) -> Self {
        Self {
            ticks,
            countdown: Countdown::default(),
        }
    }
}

impl Subtask for Wait {
    fn name(&self) -> &'static str {
        "wait"
    }

    fn update(&mut self, _body: &mut Body, _world: &mut World) -> Result<Step, ContractViolation> {
        if self.countdown.tick(self.ticks) {
            Ok(Step::Done)
        } else {
            Ok(Step::Running)
        }
    }
}
