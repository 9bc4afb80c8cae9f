// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::travel::Travel;
use super::{Step, Subtask};
use crate::agent::Body;
use crate::world::World;
use colony_core::{CancelReason, ContractViolation, ItemId, Point};

/// Where a [`GoTo`] is headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Point(Point),
    /// Wherever the item is lying when the walk starts. The walk cancels
    /// if the item is picked up or moved on the way.
    Item(ItemId),
}

/// Walk to a single goal.
#[derive(Debug)]
pub struct GoTo {
    goal: Goal,
    target: Option<Point>,
    travel: Travel,
}

impl GoTo {
    pub fn point(at: Point) -> Self {
        Self::new(Goal::Point(at))
    }

    pub fn item(item: ItemId) -> Self {
        Self::new(Goal::Item(item))
    }

    pub fn new(goal: Goal) -> Self {
        Self {
            goal,
            target: None,
            travel: Travel::default(),
        }
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    fn resolve(&self, world: &World) -> Option<Point> {
        match self.goal {
            Goal::Point(at) => Some(at),
            Goal::Item(item) => world.items.location(item),
        }
    }
}

impl Subtask for GoTo {
    fn name(&self) -> &'static str {
        "goto"
    }

    fn update(&mut self, body: &mut Body, world: &mut World) -> Result<Step, ContractViolation> {
        let Some(current) = self.resolve(world) else {
            return Ok(Step::Cancelled(CancelReason::ItemMissing));
        };

        let Some(target) = self.target else {
            if body.position == current {
                return Ok(Step::Done);
            }
            if let Some(reason) = self.travel.start(body, &[current], world) {
                return Ok(Step::Cancelled(reason));
            }
            self.target = Some(current);
            return Ok(Step::Running);
        };

        if target != current {
            return Ok(Step::Cancelled(CancelReason::ItemMissing));
        }
        Ok(self.travel.advance(body, world))
    }
}
