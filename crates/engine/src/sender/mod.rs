// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work emitters.
//!
//! A sender advertises on the channel of its [`Category`] and hands out an
//! unowned [`Job`] to whichever agent asks first. Agents only ever hold a
//! sender's id; the [`Senders`] arena resolves it.

mod dig_site;
mod haul;
mod offer;
mod quarry;

pub use dig_site::DigSite;
pub use haul::HaulRequest;
pub use offer::OfferState;
pub use quarry::{Quarry, QuarrySlot};

use crate::bus::{Category, ChannelRegistry, Message};
use crate::job::{Job, JobOutcome};
use colony_core::{AgentId, IdGen, Point, SenderId};
use std::collections::BTreeMap;
use std::fmt;

pub trait Sender: fmt::Debug {
    fn id(&self) -> SenderId;

    fn name(&self) -> &str;

    fn category(&self) -> Category;

    fn location(&self) -> Point;

    fn is_job_available(&self) -> bool;

    /// Hand out a job. Returns `None` when no work is available; a returned
    /// job is unowned and marks the work as taken.
    fn get_job(&mut self, ids: &mut IdGen) -> Option<Job>;

    /// A new subscriber joined the channel. Answer with an advertisement if
    /// there is still work to be had.
    fn new_subscriber(&mut self, _subscriber: AgentId) -> Option<Message> {
        self.is_job_available().then(|| Message::new(self.id()))
    }

    /// A job this sender handed out finished. Returns an advertisement to
    /// enqueue if the work should be offered again.
    fn job_done(&mut self, job: &Job, outcome: &JobOutcome) -> Option<Message>;

    /// A job came back unfinished because its owner went away.
    fn job_returned(&mut self, job: Job) -> Option<Message>;
}

/// Arena of live senders, keyed by id.
#[derive(Debug, Default)]
pub struct Senders {
    senders: BTreeMap<SenderId, Box<dyn Sender>>,
}

impl Senders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sender: Box<dyn Sender>) {
        self.senders.insert(sender.id(), sender);
    }

    pub fn remove(&mut self, id: SenderId) -> Option<Box<dyn Sender>> {
        self.senders.remove(&id)
    }

    pub fn contains(&self, id: SenderId) -> bool {
        self.senders.contains_key(&id)
    }

    pub fn get(&self, id: SenderId) -> Option<&dyn Sender> {
        self.senders.get(&id).map(|s| s.as_ref())
    }

    pub fn get_mut(&mut self, id: SenderId) -> Option<&mut Box<dyn Sender>> {
        self.senders.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = SenderId> + '_ {
        self.senders.keys().copied()
    }

    /// Tell the job's sender it finished and enqueue any re-advertisement.
    pub fn job_done(&mut self, job: &Job, outcome: &JobOutcome, bus: &mut ChannelRegistry) {
        let Some(id) = job.sender() else {
            return;
        };
        let Some(sender) = self.senders.get_mut(&id) else {
            tracing::debug!(job = %job.id(), sender = %id, "sender gone, completion dropped");
            return;
        };
        if let Some(advert) = sender.job_done(job, outcome) {
            bus.enqueue(sender.category(), advert);
        }
    }

    /// Give an unfinished job back to its sender.
    pub fn job_returned(&mut self, job: Job, bus: &mut ChannelRegistry) {
        let Some(id) = job.sender() else {
            return;
        };
        let Some(sender) = self.senders.get_mut(&id) else {
            tracing::debug!(job = %job.id(), sender = %id, "sender gone, returned job dropped");
            return;
        };
        tracing::info!(job = %job.id(), sender = %id, "job returned");
        if let Some(advert) = sender.job_returned(job) {
            bus.enqueue(sender.category(), advert);
        }
    }
}

#[cfg(test)]
#[path = "sender_tests.rs"]
mod tests;
