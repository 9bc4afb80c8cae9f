// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborators the scheduling core consumes but does not own.
//!
//! Map storage, item bookkeeping, storage lookup and path search sit behind
//! traits. The in-memory implementations in this module back the tests and
//! small simulations.

mod grid;
mod items;
mod stockpile;

pub use grid::{GridMap, Tile};
pub use items::ItemRegistry;
pub use stockpile::Stockpiles;

use crate::pathfinding::{GridPathFinder, PathSearch, PathSearchGateway};
use colony_core::{Blueprint, Capability, Item, ItemId, ItemKind, Point, SimConfig, SlotTable};

/// Tile provider.
pub trait TileMap {
    /// Can an agent with `capability`, occupying a `clearance`-wide square
    /// anchored at `at`, stand there?
    fn is_walkable(&self, at: Point, capability: Capability, clearance: u8) -> bool;

    /// Has the tile been dug out (or was never solid)?
    fn is_dug_out(&self, at: Point) -> bool;

    /// Turn a solid tile into open floor.
    fn dig_out(&mut self, at: Point);
}

/// Where items are lying in the world.
pub trait ItemStore {
    /// Location of a loose item, `None` if it is held or gone.
    fn location(&self, item: ItemId) -> Option<Point>;

    /// Remove a loose item from the world.
    fn take(&mut self, item: ItemId) -> Option<Item>;

    /// Put an item down.
    fn put(&mut self, item: Item, at: Point);
}

/// Creates concrete items from blueprints.
pub trait ObjectFactory {
    /// Instantiate `blueprint` as a loose item lying at `at`.
    fn create(&mut self, blueprint: &Blueprint, at: Point) -> ItemId;
}

/// Item bookkeeping plus the factory that feeds it.
pub trait Items: ItemStore + ObjectFactory {}

impl<T: ItemStore + ObjectFactory> Items for T {}

/// Storage locator.
pub trait StorageLocator {
    /// Nearest storage tile with room for `kind`. `None` means no space,
    /// which is a normal outcome.
    fn find_storage(&self, kind: &ItemKind, near: Point) -> Option<Point>;

    /// Record an item of `kind` stored at `at`. Returns false if the tile
    /// has no room (it filled up since it was found).
    fn deposit(&mut self, at: Point, kind: &ItemKind) -> bool;
}

/// Everything a subtask may read or mutate while it runs.
pub struct World {
    pub map: Box<dyn TileMap>,
    pub items: Box<dyn Items>,
    pub storage: Box<dyn StorageLocator>,
    pub paths: Box<dyn PathSearch>,
    pub slots: SlotTable,
    pub config: SimConfig,
}

impl World {
    /// A world over `map` with in-memory items, no stockpiles and the grid
    /// A* path finder behind a gateway budgeted by `config`.
    pub fn new(map: impl TileMap + 'static, config: SimConfig) -> Self {
        let paths = PathSearchGateway::new(GridPathFinder, config.path_searches_per_tick);
        Self {
            map: Box::new(map),
            items: Box::new(ItemRegistry::new()),
            storage: Box::new(Stockpiles::new()),
            paths: Box::new(paths),
            slots: SlotTable::new(),
            config,
        }
    }

    pub fn with_items(mut self, items: impl Items + 'static) -> Self {
        self.items = Box::new(items);
        self
    }

    pub fn with_storage(mut self, storage: impl StorageLocator + 'static) -> Self {
        self.storage = Box::new(storage);
        self
    }

    pub fn with_paths(mut self, paths: impl PathSearch + 'static) -> Self {
        self.paths = Box::new(paths);
        self
    }

    /// Hand finished path searches to their listeners.
    ///
    /// Called once per tick, before any agent runs.
    pub fn deliver_paths(&mut self) -> usize {
        self.paths.deliver(self.map.as_ref())
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("slots", &self.slots)
            .field("pending_paths", &self.paths.pending())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
