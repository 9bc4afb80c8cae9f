// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Publish/subscribe bus for job advertisements.
//!
//! One [`Channel`] per work [`Category`]. Delivery is always deferred: work
//! emitters enqueue advertisements and the simulation flushes every channel
//! once per tick. Channels hold ids only; [`Directory`] resolves them to the
//! live senders and subscribers at flush time.

mod channel;
mod registry;

pub use channel::Channel;
pub use registry::ChannelRegistry;

use colony_core::{AgentId, SenderId};
use std::fmt;

/// Work categories. Each has exactly one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Digging,
    Mining,
    Hauling,
}

impl Category {
    pub const COUNT: usize = 3;

    /// Every category, in flush order.
    pub const ALL: [Category; Category::COUNT] =
        [Category::Digging, Category::Mining, Category::Hauling];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Digging => "Digging",
            Category::Mining => "Mining",
            Category::Hauling => "Hauling",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Digging => 0,
            Category::Mining => 1,
            Category::Hauling => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An advertisement: "this sender may have work". Carries nothing else;
/// recipients ask the sender for live state when they act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Message {
    sender: SenderId,
}

impl Message {
    pub fn new(sender: SenderId) -> Self {
        Self { sender }
    }

    pub fn sender(&self) -> SenderId {
        self.sender
    }
}

/// Something that wants to hear about advertisements.
///
/// `update` must only record the message; evaluation happens later, off the
/// flush path.
pub trait Subscriber {
    fn update(&mut self, message: &Message);
}

/// Resolves channel ids to live endpoints during a flush.
pub trait Directory {
    /// Tell `sender` that `subscriber` joined. Returns the fresh
    /// advertisement the sender wants enqueued, if it still has work.
    fn announce(&mut self, sender: SenderId, subscriber: AgentId) -> Option<Message>;

    /// Hand `message` to `subscriber`. Unknown subscribers are ignored.
    fn deliver(&mut self, subscriber: AgentId, message: &Message);
}
