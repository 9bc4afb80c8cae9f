// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Budgeted request queue in front of a path finder.

use super::{PathFinder, PathListener, PathRequest, PathSearch};
use crate::world::TileMap;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Queues path requests and resolves at most `per_tick` of them per
/// delivery, oldest first. Requests beyond the budget wait for a later tick,
/// so a subtask with many searches in flight may hear back over several
/// ticks.
pub struct PathSearchGateway<F> {
    finder: F,
    queue: VecDeque<(PathRequest, Arc<dyn PathListener>)>,
    per_tick: usize,
}

impl<F: PathFinder> PathSearchGateway<F> {
    /// `per_tick == 0` resolves everything queued on each delivery.
    pub fn new(finder: F, per_tick: usize) -> Self {
        Self {
            finder,
            queue: VecDeque::new(),
            per_tick,
        }
    }
}

impl<F: PathFinder> PathSearch for PathSearchGateway<F> {
    fn enqueue_path_search(&mut self, request: PathRequest, listener: Arc<dyn PathListener>) {
        self.queue.push_back((request, listener));
    }

    fn deliver(&mut self, map: &dyn TileMap) -> usize {
        let budget = match self.per_tick {
            0 => self.queue.len(),
            n => n.min(self.queue.len()),
        };
        for _ in 0..budget {
            let Some((request, listener)) = self.queue.pop_front() else {
                break;
            };
            let path = self.finder.find_path(map, &request);
            tracing::debug!(
                start = %request.start,
                goal = %request.goal,
                found = path.is_some(),
                "path search finished"
            );
            listener.path_search_finished(path);
        }
        budget
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl<F> fmt::Debug for PathSearchGateway<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathSearchGateway")
            .field("pending", &self.queue.len())
            .field("per_tick", &self.per_tick)
            .finish()
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
