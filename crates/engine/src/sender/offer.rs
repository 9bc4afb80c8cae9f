// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bookkeeping for senders that offer a single piece of work.

use crate::bus::Message;
use crate::job::{Job, JobOutcome};
use colony_core::{JobId, SenderId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferState {
    Open,
    Claimed(JobId),
    Finished,
}

/// One job, offered until it completes or runs out of retries.
///
/// A job returned unfinished is parked and handed out again as-is, so
/// the next owner goes through the plan's init hook on the same job.
#[derive(Debug)]
pub(crate) struct Offer {
    state: OfferState,
    reoffers_left: u32,
    parked: Option<Job>,
}

impl Offer {
    pub(crate) fn new(max_reoffers: u32) -> Self {
        Self {
            state: OfferState::Open,
            reoffers_left: max_reoffers,
            parked: None,
        }
    }

    pub(crate) fn state(&self) -> OfferState {
        self.state
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state == OfferState::Open
    }

    pub(crate) fn close(&mut self) {
        self.state = OfferState::Finished;
        self.parked = None;
    }

    pub(crate) fn take(&mut self, make: impl FnOnce() -> Job) -> Option<Job> {
        if !self.is_open() {
            return None;
        }
        let job = self.parked.take().unwrap_or_else(make);
        self.state = OfferState::Claimed(job.id());
        Some(job)
    }

    /// Settle a finished job. A cancelled attempt is re-offered while
    /// retries remain and `retry` allows it.
    pub(crate) fn done(
        &mut self,
        sender: SenderId,
        job: &Job,
        outcome: &JobOutcome,
        retry: bool,
    ) -> Option<Message> {
        if self.state != OfferState::Claimed(job.id()) {
            return None;
        }
        match outcome {
            JobOutcome::Cancelled(reason) if retry && self.reoffers_left > 0 => {
                self.reoffers_left -= 1;
                self.state = OfferState::Open;
                tracing::info!(%sender, job = %job.id(), %reason, left = self.reoffers_left, "re-offering work");
                Some(Message::new(sender))
            }
            JobOutcome::Cancelled(reason) => {
                tracing::info!(%sender, job = %job.id(), %reason, "giving up on work");
                self.close();
                None
            }
            JobOutcome::Completed => {
                self.close();
                None
            }
        }
    }

    pub(crate) fn returned(&mut self, sender: SenderId, job: Job) -> Option<Message> {
        if self.state != OfferState::Claimed(job.id()) {
            return None;
        }
        self.state = OfferState::Open;
        self.parked = Some(job);
        Some(Message::new(sender))
    }
}
