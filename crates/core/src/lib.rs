// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! colony-core: plain data shared by the colony task-scheduling engine

pub mod config;
pub mod error;
pub mod geom;
pub mod id;
pub mod item;
pub mod priority;
pub mod slot;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::SimConfig;
pub use error::{CancelReason, ConfigError, ContractViolation};
pub use geom::{Capability, Path, Point};
pub use id::{AgentId, IdGen, ItemId, JobId, SenderId, SlotId};
pub use item::{Blueprint, Item, ItemKind};
pub use priority::Priority;
pub use slot::{JobSlot, SlotTable};
