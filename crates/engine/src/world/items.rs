// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory item store and object factory.

use super::{ItemStore, ObjectFactory};
use colony_core::{Blueprint, IdGen, Item, ItemId, Point};
use std::collections::BTreeMap;

/// Loose items and where they lie. Held items are not tracked here; an
/// item leaves the registry when picked up and re-enters when put down.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    loose: BTreeMap<ItemId, (Item, Point)>,
    ids: IdGen,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items lying on `at`, in id order.
    pub fn items_at(&self, at: Point) -> Vec<&Item> {
        self.loose
            .values()
            .filter(|(_, p)| *p == at)
            .map(|(item, _)| item)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.loose.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loose.is_empty()
    }
}

impl ItemStore for ItemRegistry {
    fn location(&self, item: ItemId) -> Option<Point> {
        self.loose.get(&item).map(|(_, at)| *at)
    }

    fn take(&mut self, item: ItemId) -> Option<Item> {
        self.loose.remove(&item).map(|(item, _)| item)
    }

    fn put(&mut self, item: Item, at: Point) {
        self.loose.insert(item.id, (item, at));
    }
}

impl ObjectFactory for ItemRegistry {
    fn create(&mut self, blueprint: &Blueprint, at: Point) -> ItemId {
        let id = self.ids.next();
        self.loose
            .insert(id, (Item::new(id, blueprint.kind.clone()), at));
        id
    }
}
