// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::offer::{Offer, OfferState};
use super::Sender;
use crate::bus::{Category, Message};
use crate::job::{DigPlan, Job, JobOutcome};
use colony_core::{CancelReason, IdGen, Point, SenderId};

/// A tile designated for digging.
#[derive(Debug)]
pub struct DigSite {
    id: SenderId,
    name: String,
    target: Point,
    offer: Offer,
}

impl DigSite {
    pub fn new(id: SenderId, target: Point, max_reoffers: u32) -> Self {
        Self {
            id,
            name: format!("dig {target}"),
            target,
            offer: Offer::new(max_reoffers),
        }
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn state(&self) -> OfferState {
        self.offer.state()
    }
}

impl Sender for DigSite {
    fn id(&self) -> SenderId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Digging
    }

    fn location(&self) -> Point {
        self.target
    }

    fn is_job_available(&self) -> bool {
        self.offer.is_open()
    }

    fn get_job(&mut self, ids: &mut IdGen) -> Option<Job> {
        let (id, target) = (self.id, self.target);
        self.offer
            .take(|| Job::assignable(ids.next(), id, DigPlan { target }))
    }

    fn job_done(&mut self, job: &Job, outcome: &JobOutcome) -> Option<Message> {
        // Someone else dug it; nothing left to offer.
        let retry = !matches!(outcome, JobOutcome::Cancelled(CancelReason::AlreadyDug(_)));
        self.offer.done(self.id, job, outcome, retry)
    }

    fn job_returned(&mut self, job: Job) -> Option<Message> {
        self.offer.returned(self.id, job)
    }
}
