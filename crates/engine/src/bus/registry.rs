// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One channel per category, owned by the simulation.

use super::{Category, Channel, Directory, Message};
use colony_core::{AgentId, SenderId};

/// The bus: a channel for every [`Category`], flushed in a fixed order.
#[derive(Debug, Clone)]
pub struct ChannelRegistry {
    channels: [Channel; Category::COUNT],
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self {
            channels: Category::ALL.map(Channel::for_category),
        }
    }

    pub fn channel(&self, category: Category) -> &Channel {
        &self.channels[category.index()]
    }

    pub fn channel_mut(&mut self, category: Category) -> &mut Channel {
        &mut self.channels[category.index()]
    }

    pub fn enqueue(&mut self, category: Category, message: Message) {
        self.channel_mut(category).enqueue_message(message);
    }

    /// Drop `subscriber` from every channel.
    pub fn unsubscribe_everywhere(&mut self, subscriber: AgentId) {
        for channel in &mut self.channels {
            channel.unsubscribe(subscriber);
        }
    }

    /// Drop `sender` (and its pending messages) from every channel.
    pub fn unsubscribe_sender_everywhere(&mut self, sender: SenderId) {
        for channel in &mut self.channels {
            channel.unsubscribe_sender(sender);
        }
    }

    /// Flush every channel in [`Category::ALL`] order.
    pub fn flush_all(&mut self, directory: &mut impl Directory) -> usize {
        let mut flushed = 0;
        for channel in &mut self.channels {
            flushed += channel.flush(&mut *directory);
        }
        flushed
    }
}
