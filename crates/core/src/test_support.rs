// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Blueprint, Item, ItemId, ItemKind, Point, SimConfig};

pub fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Config where every action takes a single tick and nothing is budgeted.
pub fn fast_config() -> SimConfig {
    SimConfig {
        dig_ticks: 1,
        mine_ticks: 1,
        pickup_ticks: 1,
        drop_ticks: 1,
        move_ticks_per_tile: 1,
        path_searches_per_tick: 0,
        max_reoffers: 3,
    }
}

pub fn ore() -> Blueprint {
    Blueprint::new("iron ore")
}

pub fn stone(id: u64) -> Item {
    Item::new(ItemId::new(id), ItemKind::new("stone"))
}
