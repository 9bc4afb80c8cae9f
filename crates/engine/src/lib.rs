// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Colony job-scheduling engine
//!
//! Agents pick work off a per-category message bus or their own priority
//! queues, and drive one job per tick through its subtasks.

pub mod agent;
pub mod bus;
mod error;
pub mod job;
pub mod pathfinding;
mod scheduler;
pub mod sender;
mod sim;
pub mod subtask;
pub mod world;


pub use agent::{Agent, Body, Hands, Movement};
pub use bus::{Category, Channel, ChannelRegistry, Message};
pub use error::SimError;
pub use job::{Job, JobOutcome, JobPlan, JobState, JobStatus};
pub use scheduler::JobScheduler;
pub use sender::{Sender, Senders};
pub use sim::{Simulation, TickContext};
pub use subtask::{Step, Subtask};
pub use world::World;
