// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::Sender;
use crate::bus::{Category, Message};
use crate::job::{Job, JobOutcome, MinePlan};
use colony_core::{Blueprint, IdGen, JobId, Point, SenderId, SlotId};
use std::collections::{BTreeMap, VecDeque};

/// One working position in a quarry: where to stand and which face to
/// mine from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarrySlot {
    pub slot: SlotId,
    pub stand: Point,
    pub face: Point,
}

/// A room over an ore seam. Offers one mining job per unclaimed slot until
/// the seam's yield is used up.
///
/// Cancelled attempts do not use up yield, but after more than
/// `max_reoffers` cancellations in a row the quarry closes.
#[derive(Debug)]
pub struct Quarry {
    id: SenderId,
    name: String,
    location: Point,
    ore: Blueprint,
    slots: Vec<QuarrySlot>,
    claimed: BTreeMap<JobId, SlotId>,
    returned: VecDeque<Job>,
    remaining: u32,
    failures: u32,
    max_reoffers: u32,
}

impl Quarry {
    pub fn new(
        id: SenderId,
        location: Point,
        ore: Blueprint,
        slots: Vec<QuarrySlot>,
        yield_loads: u32,
        max_reoffers: u32,
    ) -> Self {
        Self {
            id,
            name: format!("quarry {location}"),
            location,
            ore,
            slots,
            claimed: BTreeMap::new(),
            returned: VecDeque::new(),
            remaining: yield_loads,
            failures: 0,
            max_reoffers,
        }
    }

    /// Loads of ore still to be mined, counting those in progress.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn claimed(&self) -> usize {
        self.claimed.len()
    }

    fn free_slot(&self) -> Option<QuarrySlot> {
        self.slots
            .iter()
            .find(|s| !self.claimed.values().any(|claimed| *claimed == s.slot))
            .copied()
    }

    fn in_flight(&self) -> u32 {
        u32::try_from(self.claimed.len()).unwrap_or(u32::MAX)
    }

    fn advert(&self) -> Option<Message> {
        self.is_job_available().then(|| Message::new(self.id))
    }
}

impl Sender for Quarry {
    fn id(&self) -> SenderId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Mining
    }

    fn location(&self) -> Point {
        self.location
    }

    fn is_job_available(&self) -> bool {
        if !self.returned.is_empty() {
            return true;
        }
        self.remaining > self.in_flight() && self.free_slot().is_some()
    }

    fn get_job(&mut self, ids: &mut IdGen) -> Option<Job> {
        if let Some(job) = self.returned.pop_front() {
            return Some(job);
        }
        if !self.is_job_available() {
            return None;
        }
        let slot = self.free_slot()?;
        let job = Job::assignable(
            ids.next(),
            self.id,
            MinePlan {
                slot: slot.slot,
                stand: slot.stand,
                face: slot.face,
                ore: self.ore.clone(),
            },
        );
        self.claimed.insert(job.id(), slot.slot);
        Some(job)
    }

    fn job_done(&mut self, job: &Job, outcome: &JobOutcome) -> Option<Message> {
        self.claimed.remove(&job.id())?;
        match outcome {
            JobOutcome::Completed => {
                self.failures = 0;
                self.remaining = self.remaining.saturating_sub(1);
            }
            JobOutcome::Cancelled(reason) => {
                self.failures += 1;
                if self.failures > self.max_reoffers {
                    tracing::info!(sender = %self.id, %reason, "quarry closed after repeated failures");
                    self.remaining = 0;
                    self.returned.clear();
                }
            }
        }
        self.advert()
    }

    fn job_returned(&mut self, job: Job) -> Option<Message> {
        if !self.claimed.contains_key(&job.id()) {
            return None;
        }
        self.returned.push_back(job);
        self.advert()
    }
}
