// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stockpile tiles: the in-memory storage locator.

use super::StorageLocator;
use colony_core::{ItemKind, Point};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct Pile {
    capacity: u32,
    accepts: Option<ItemKind>,
    stored: u32,
}

impl Pile {
    fn has_room_for(&self, kind: &ItemKind) -> bool {
        self.stored < self.capacity && self.accepts.as_ref().map_or(true, |k| k == kind)
    }
}

/// Storage tiles, each with a capacity and an optional kind filter.
#[derive(Debug, Clone, Default)]
pub struct Stockpiles {
    piles: BTreeMap<Point, Pile>,
}

impl Stockpiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile accepting any kind.
    pub fn add(&mut self, at: Point, capacity: u32) {
        self.piles.insert(
            at,
            Pile {
                capacity,
                accepts: None,
                stored: 0,
            },
        );
    }

    /// Add a tile accepting only `kind`.
    pub fn add_for(&mut self, at: Point, capacity: u32, kind: ItemKind) {
        self.piles.insert(
            at,
            Pile {
                capacity,
                accepts: Some(kind),
                stored: 0,
            },
        );
    }

    pub fn stored_at(&self, at: Point) -> u32 {
        self.piles.get(&at).map_or(0, |p| p.stored)
    }
}

impl StorageLocator for Stockpiles {
    fn find_storage(&self, kind: &ItemKind, near: Point) -> Option<Point> {
        self.piles
            .iter()
            .filter(|(_, pile)| pile.has_room_for(kind))
            .min_by_key(|(at, _)| (at.distance(near), **at))
            .map(|(at, _)| *at)
    }

    fn deposit(&mut self, at: Point, kind: &ItemKind) -> bool {
        match self.piles.get_mut(&at) {
            Some(pile) if pile.has_room_for(kind) => {
                pile.stored += 1;
                true
            }
            _ => false,
        }
    }
}
