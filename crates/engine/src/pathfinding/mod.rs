// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Asynchronous path search.
//!
//! Subtasks never search synchronously. They enqueue a [`PathRequest`] with
//! a [`PathListener`] and keep reporting "running" until the listener has
//! heard back. Every request produces exactly one callback: a path, or
//! `None` when the goal is unreachable. Callbacks happen inside
//! [`PathSearch::deliver`], which the simulation calls on the tick boundary,
//! never while a subtask is running.

mod astar;
mod gateway;

pub use astar::GridPathFinder;
pub use gateway::PathSearchGateway;

use crate::world::TileMap;
use colony_core::{Capability, Path, Point};
use parking_lot::Mutex;
use std::sync::Arc;

/// A single start/goal query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRequest {
    pub start: Point,
    pub goal: Point,
    pub clearance: u8,
    pub capability: Capability,
}

/// Receives the result of one path search.
pub trait PathListener: Send + Sync {
    fn path_search_finished(&self, path: Option<Path>);
}

/// The gateway contract subtasks talk to.
pub trait PathSearch {
    fn enqueue_path_search(&mut self, request: PathRequest, listener: Arc<dyn PathListener>);

    /// Resolve queued requests and notify their listeners. Returns how many
    /// callbacks were made.
    fn deliver(&mut self, map: &dyn TileMap) -> usize;

    /// Requests still waiting for a callback.
    fn pending(&self) -> usize;
}

/// The search algorithm behind a gateway.
pub trait PathFinder {
    fn find_path(&self, map: &dyn TileMap, request: &PathRequest) -> Option<Path>;
}

/// Collects callbacks for a subtask that may have several searches in
/// flight. Results are kept in arrival order.
#[derive(Debug, Default)]
pub struct PathInbox {
    results: Mutex<Vec<Option<Path>>>,
}

impl PathInbox {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Take every result received so far.
    pub fn drain(&self) -> Vec<Option<Path>> {
        std::mem::take(&mut *self.results.lock())
    }
}

impl PathListener for PathInbox {
    fn path_search_finished(&self, path: Option<Path>) {
        self.results.lock().push(path);
    }
}
