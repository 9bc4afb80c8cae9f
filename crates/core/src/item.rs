// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Items and the blueprints they are made from.

use crate::id::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of item, e.g. `"iron ore"`. Storage is matched by kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemKind(pub String);

impl ItemKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemKind {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemKind {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Template the object factory instantiates items from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub kind: ItemKind,
}

impl Blueprint {
    pub fn new(kind: impl Into<ItemKind>) -> Self {
        Self { kind: kind.into() }
    }
}

/// A concrete item instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: ItemId, kind: impl Into<ItemKind>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}
