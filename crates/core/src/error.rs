// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types.
//!
//! Two classes, never mixed:
//!
//! - [`ContractViolation`]: a caller broke an invariant. Propagated with `?`
//!   all the way out of the tick loop and never retried.
//! - [`CancelReason`]: an expected runtime failure of a subtask. Caught by
//!   the owning job, which runs its cancel hook and reports itself done.

use crate::geom::Point;
use crate::id::{AgentId, JobId, SenderId, SlotId};
use std::path::PathBuf;
use thiserror::Error;

/// Programming errors. Unrecoverable by design of the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("{job} updated without an owner")]
    UnownedUpdate { job: JobId },
    #[error("{job} used after it finished")]
    JobFinished { job: JobId },
    #[error("{job} has a fixed owner and cannot be reassigned")]
    FixedOwner { job: JobId },
    #[error("{job} is not a fixed-owner job")]
    NotFixed { job: JobId },
    #[error("{job} queued on the scheduler of {agent} but owned by {owner:?}")]
    ForeignJob {
        job: JobId,
        agent: AgentId,
        owner: Option<AgentId>,
    },
    #[error("slot at {location} is occupied by {occupant}; {contender} cannot occupy it")]
    SlotOccupied {
        location: Point,
        occupant: AgentId,
        contender: AgentId,
    },
    #[error("slot at {location} is not held by {caller} (occupant: {occupant:?})")]
    SlotNotHeld {
        location: Point,
        caller: AgentId,
        occupant: Option<AgentId>,
    },
    #[error("unknown slot {0}")]
    UnknownSlot(SlotId),
    #[error("unknown agent {0}")]
    UnknownAgent(AgentId),
    #[error("unknown sender {0}")]
    UnknownSender(SenderId),
    #[error("channel name must not be empty")]
    EmptyChannelName,
}

/// Why a subtask gave up. Expected during normal play; logged, not raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CancelReason {
    #[error("no path to target")]
    NoPath,
    #[error("item is no longer where it was expected")]
    ItemMissing,
    #[error("no storage space available")]
    NoStorage,
    #[error("tile {0} is already dug out")]
    AlreadyDug(Point),
    #[error("tile {0} cannot be mined")]
    NotMineable(Point),
    #[error("not adjacent to {0}")]
    NotAdjacent(Point),
    #[error("agent cannot move")]
    CannotMove,
    #[error("agent cannot carry items")]
    CannotCarry,
    #[error("hands are already full")]
    HandsFull,
    #[error("nothing held")]
    NothingHeld,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
