// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subtasks that pick a destination among several and walk there.

use super::travel::Travel;
use super::{Step, Subtask};
use crate::agent::Body;
use crate::world::World;
use colony_core::{CancelReason, ContractViolation, Point};

/// Walk to the cheapest-to-reach of several candidate goals.
///
/// One path search is issued per candidate; the walk starts only after
/// every search has answered.
#[derive(Debug)]
pub struct Locate {
    candidates: Vec<Point>,
    travel: Travel,
}

impl Locate {
    pub fn nearest(candidates: Vec<Point>) -> Self {
        Self {
            candidates,
            travel: Travel::default(),
        }
    }

    /// Any of the four tiles orthogonally adjacent to `target`.
    pub fn adjacent_to(target: Point) -> Self {
        Self::nearest(target.neighbours().to_vec())
    }

    pub fn candidates(&self) -> &[Point] {
        &self.candidates
    }
}

impl Subtask for Locate {
    fn name(&self) -> &'static str {
        "locate"
    }

    fn update(&mut self, body: &mut Body, world: &mut World) -> Result<Step, ContractViolation> {
        if self.travel.is_started() {
            return Ok(self.travel.advance(body, world));
        }
        if self.candidates.contains(&body.position) {
            return Ok(Step::Done);
        }
        match self.travel.start(body, &self.candidates, world) {
            Some(reason) => Ok(Step::Cancelled(reason)),
            None => Ok(Step::Running),
        }
    }
}

/// Find storage for the held item and walk to it.
///
/// With no storage anywhere the item is put down where the agent stands
/// and the subtask cancels with [`CancelReason::NoStorage`].
#[derive(Debug, Default)]
pub struct SeekStorage {
    travel: Travel,
}

impl SeekStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Subtask for SeekStorage {
    fn name(&self) -> &'static str {
        "seek-storage"
    }

    fn update(&mut self, body: &mut Body, world: &mut World) -> Result<Step, ContractViolation> {
        if self.travel.is_started() {
            return Ok(self.travel.advance(body, world));
        }
        let Some(item) = body.hands.holding() else {
            return Ok(Step::Cancelled(CancelReason::NothingHeld));
        };
        let Some(storage) = world.storage.find_storage(&item.kind, body.position) else {
            if let Some(item) = body.hands.release() {
                world.items.put(item, body.position);
            }
            return Ok(Step::Cancelled(CancelReason::NoStorage));
        };
        if storage == body.position {
            return Ok(Step::Done);
        }
        match self.travel.start(body, &[storage], world) {
            Some(reason) => Ok(Step::Cancelled(reason)),
            None => Ok(Step::Running),
        }
    }
}
