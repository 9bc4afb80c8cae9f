// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::offer::{Offer, OfferState};
use super::Sender;
use crate::bus::{Category, Message};
use crate::job::{HaulPlan, Job, JobOutcome};
use colony_core::{CancelReason, IdGen, ItemId, Point, SenderId};

/// A loose item that wants to be carried to storage.
#[derive(Debug)]
pub struct HaulRequest {
    id: SenderId,
    name: String,
    item: ItemId,
    location: Point,
    offer: Offer,
}

impl HaulRequest {
    /// `location` is where the item was lying when the request was made.
    pub fn new(id: SenderId, item: ItemId, location: Point, max_reoffers: u32) -> Self {
        Self {
            id,
            name: format!("haul {item}"),
            item,
            location,
            offer: Offer::new(max_reoffers),
        }
    }

    pub fn item(&self) -> ItemId {
        self.item
    }

    pub fn state(&self) -> OfferState {
        self.offer.state()
    }
}

impl Sender for HaulRequest {
    fn id(&self) -> SenderId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Hauling
    }

    fn location(&self) -> Point {
        self.location
    }

    fn is_job_available(&self) -> bool {
        self.offer.is_open()
    }

    fn get_job(&mut self, ids: &mut IdGen) -> Option<Job> {
        let (id, item) = (self.id, self.item);
        self.offer.take(|| Job::assignable(ids.next(), id, HaulPlan { item }))
    }

    fn job_done(&mut self, job: &Job, outcome: &JobOutcome) -> Option<Message> {
        let retry = !matches!(outcome, JobOutcome::Cancelled(CancelReason::ItemMissing));
        self.offer.done(self.id, job, outcome, retry)
    }

    fn job_returned(&mut self, job: Job) -> Option<Message> {
        self.offer.returned(self.id, job)
    }
}
