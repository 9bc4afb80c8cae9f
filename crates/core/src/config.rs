// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation tuning loaded from TOML.
//!
//! Every field has a default, so an empty file is a valid config:
//!
//! ```toml
//! dig_ticks = 6
//! path_searches_per_tick = 8
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tick counts and budgets that shape how work advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Ticks an agent spends digging out one tile.
    pub dig_ticks: u32,
    /// Ticks an agent spends mining one unit of ore.
    pub mine_ticks: u32,
    /// Ticks to pick an item up.
    pub pickup_ticks: u32,
    /// Ticks to put an item down.
    pub drop_ticks: u32,
    /// Walking speed for agents spawned without an explicit one.
    pub move_ticks_per_tile: u32,
    /// Path searches the gateway resolves per tick. 0 means no limit.
    pub path_searches_per_tick: usize,
    /// How many times a work emitter re-advertises after a cancelled attempt.
    pub max_reoffers: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dig_ticks: 10,
            mine_ticks: 20,
            pickup_ticks: 2,
            drop_ticks: 2,
            move_ticks_per_tile: 3,
            path_searches_per_tick: 16,
            max_reoffers: 3,
        }
    }
}

impl SimConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
