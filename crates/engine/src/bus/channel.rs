// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single named broadcast channel.

use super::{Category, Directory, Message};
use colony_core::{AgentId, ContractViolation, SenderId};
use indexmap::IndexSet;
use std::collections::VecDeque;

/// Broadcast channel with batched, deferred delivery.
///
/// Subscribers and senders are kept in insertion order and appear at most
/// once. Nothing is delivered until [`Channel::flush`].
#[derive(Debug, Clone)]
pub struct Channel {
    name: String,
    subscribers: IndexSet<AgentId>,
    senders: IndexSet<SenderId>,
    messages: VecDeque<Message>,
    new_subscribers: VecDeque<AgentId>,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Result<Self, ContractViolation> {
        let name = name.into();
        if name.is_empty() {
            return Err(ContractViolation::EmptyChannelName);
        }
        Ok(Self::named(name))
    }

    pub(crate) fn for_category(category: Category) -> Self {
        Self::named(category.as_str().to_string())
    }

    fn named(name: String) -> Self {
        Self {
            name,
            subscribers: IndexSet::new(),
            senders: IndexSet::new(),
            messages: VecDeque::new(),
            new_subscribers: VecDeque::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register for future deliveries. Senders hear about the newcomer on
    /// the next flush. Returns false if already subscribed.
    pub fn subscribe(&mut self, subscriber: AgentId) -> bool {
        if !self.subscribers.insert(subscriber) {
            return false;
        }
        self.new_subscribers.push_back(subscriber);
        true
    }

    /// Stop deliveries. A subscriber that leaves before the next flush is
    /// never announced to senders.
    pub fn unsubscribe(&mut self, subscriber: AgentId) -> bool {
        self.new_subscribers.retain(|s| *s != subscriber);
        self.subscribers.shift_remove(&subscriber)
    }

    /// Register a sender so it hears about new subscribers. Senders may
    /// enqueue without registering.
    pub fn subscribe_sender(&mut self, sender: SenderId) -> bool {
        self.senders.insert(sender)
    }

    /// Deregister a sender and drop any of its messages still pending.
    pub fn unsubscribe_sender(&mut self, sender: SenderId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.sender() != sender);
        let purged = before - self.messages.len();
        if purged > 0 {
            tracing::debug!(channel = %self.name, %sender, purged, "purged pending messages");
        }
        self.senders.shift_remove(&sender)
    }

    /// Queue a message for the next flush.
    pub fn enqueue_message(&mut self, message: Message) {
        self.messages.push_back(message);
    }

    /// Deliver everything batched since the last flush.
    ///
    /// First every registered sender is told about every new subscriber
    /// (senders with work answer with a fresh advertisement, which joins the
    /// pending queue). Then every pending message goes to every subscriber,
    /// in enqueue order. Both queues end empty. Returns the number of
    /// messages broadcast.
    pub fn flush(&mut self, directory: &mut impl Directory) -> usize {
        let newcomers = std::mem::take(&mut self.new_subscribers);
        for subscriber in newcomers {
            for sender in &self.senders {
                if let Some(advert) = directory.announce(*sender, subscriber) {
                    self.messages.push_back(advert);
                }
            }
        }

        let messages = std::mem::take(&mut self.messages);
        for message in &messages {
            for subscriber in &self.subscribers {
                directory.deliver(*subscriber, message);
            }
        }

        if !messages.is_empty() {
            tracing::debug!(
                channel = %self.name,
                messages = messages.len(),
                subscribers = self.subscribers.len(),
                "flushed"
            );
        }
        messages.len()
    }

    pub fn subscribers(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.subscribers.iter().copied()
    }

    pub fn senders(&self) -> impl Iterator<Item = SenderId> + '_ {
        self.senders.iter().copied()
    }

    pub fn is_subscribed(&self, subscriber: AgentId) -> bool {
        self.subscribers.contains(&subscriber)
    }

    pub fn pending_messages(&self) -> usize {
        self.messages.len()
    }

    pub fn pending_subscribers(&self) -> usize {
        self.new_subscribers.len()
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
