// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared movement engine for subtasks that walk somewhere.
//!
//! Issues one path search per candidate goal, waits until every callback is
//! in, keeps the cheapest path (first received wins a tie) and then walks
//! it one tile per `ticks_per_tile` ticks.

use super::Step;
use crate::agent::Body;
use crate::pathfinding::{PathInbox, PathRequest};
use crate::world::World;
use colony_core::{CancelReason, Path, Point};
use std::sync::Arc;

#[derive(Debug)]
struct Route {
    path: Path,
    next: usize,
    progress: u32,
}

#[derive(Debug)]
pub(crate) struct Travel {
    inbox: Arc<PathInbox>,
    issued: usize,
    received: usize,
    best: Option<Path>,
    route: Option<Route>,
}

impl Default for Travel {
    fn default() -> Self {
        Self {
            inbox: PathInbox::new(),
            issued: 0,
            received: 0,
            best: None,
            route: None,
        }
    }
}

impl Travel {
    pub(crate) fn is_started(&self) -> bool {
        self.issued > 0
    }

    /// Issue one search per goal. Callbacks may arrive in any order.
    pub(crate) fn start(&mut self, body: &Body, goals: &[Point], world: &mut World) -> Option<CancelReason> {
        let Some(capability) = body.movement.capability() else {
            return Some(CancelReason::CannotMove);
        };
        if goals.is_empty() {
            return Some(CancelReason::NoPath);
        }
        for goal in goals {
            world.paths.enqueue_path_search(
                PathRequest {
                    start: body.position,
                    goal: *goal,
                    clearance: body.clearance,
                    capability,
                },
                self.inbox.clone(),
            );
            self.issued += 1;
        }
        None
    }

    /// Collect search results, then walk. `Done` once the agent stands on
    /// the chosen goal.
    pub(crate) fn advance(&mut self, body: &mut Body, world: &World) -> Step {
        if self.route.is_none() {
            for result in self.inbox.drain() {
                self.received += 1;
                if let Some(path) = result {
                    if self.best.as_ref().map_or(true, |best| path.cost() < best.cost()) {
                        self.best = Some(path);
                    }
                }
            }
            if self.received < self.issued {
                return Step::Running;
            }
            match self.best.take() {
                Some(path) => {
                    self.route = Some(Route {
                        path,
                        next: 1,
                        progress: 0,
                    })
                }
                None => return Step::Cancelled(CancelReason::NoPath),
            }
        }

        let (Some(capability), Some(ticks_per_tile)) =
            (body.movement.capability(), body.movement.ticks_per_tile())
        else {
            return Step::Cancelled(CancelReason::CannotMove);
        };
        let Some(route) = self.route.as_mut() else {
            return Step::Running;
        };
        let Some(next) = route.path.points().get(route.next).copied() else {
            return Step::Done;
        };

        route.progress += 1;
        if route.progress < ticks_per_tile {
            return Step::Running;
        }
        route.progress = 0;
        if !world.map.is_walkable(next, capability, body.clearance) {
            return Step::Cancelled(CancelReason::NoPath);
        }
        body.position = next;
        route.next += 1;

        if route.next >= route.path.points().len() {
            Step::Done
        } else {
            Step::Running
        }
    }
}
