// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subtasks: the smallest executable steps of a job.
//!
//! A subtask is driven once per tick by its job and answers with a
//! [`Step`]. Expected failures come back as [`Step::Cancelled`] and stop at
//! the owning job. Only broken invariants use the `Err` side.

mod dig;
mod drop;
mod goto;
mod locate;
mod mine;
mod pickup;
mod travel;
mod wait;

pub use dig::Dig;
pub use drop::Drop;
pub use goto::{Goal, GoTo};
pub use locate::{Locate, SeekStorage};
pub use mine::Mine;
pub use pickup::PickUp;
pub use wait::Wait;

use crate::agent::Body;
use crate::world::World;
use colony_core::{CancelReason, ContractViolation};
use std::fmt;

/// Outcome of driving a subtask for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Not finished; call again next tick.
    Running,
    /// Finished; the job moves on to its next subtask.
    Done,
    /// Gave up. The job cancels.
    Cancelled(CancelReason),
}

pub trait Subtask: fmt::Debug {
    fn name(&self) -> &'static str;

    fn update(&mut self, body: &mut Body, world: &mut World) -> Result<Step, ContractViolation>;
}

/// Counts down a tick budget that is only known once the subtask first runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Countdown {
    remaining: Option<u32>,
}

impl Countdown {
    /// Spend one tick of a `total`-tick action. True once the last tick has
    /// been spent. A zero-tick action finishes on its first tick.
    pub(crate) fn tick(&mut self, total: u32) -> bool {
        let remaining = self.remaining.get_or_insert(total.max(1));
        *remaining = remaining.saturating_sub(1);
        *remaining == 0
    }
}

#[cfg(test)]
#[path = "subtask_tests.rs"]
mod tests;
