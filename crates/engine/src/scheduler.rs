// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-agent job selection and driving

use crate::agent::Body;
use crate::bus::Message;
use crate::job::Job;
use crate::world::World;
use crate::TickContext;
use colony_core::{AgentId, ContractViolation, Priority};
use std::collections::VecDeque;

/// Picks and drives at most one job per tick for a single agent.
#[derive(Debug)]
pub struct JobScheduler {
    agent: AgentId,
    queues: [VecDeque<Job>; Priority::COUNT],
    mailbox: VecDeque<Message>,
    current: Option<Job>,
}

impl JobScheduler {
    pub fn new(agent: AgentId) -> Self {
        Self {
            agent,
            queues: Default::default(),
            mailbox: VecDeque::new(),
            current: None,
        }
    }

    pub fn agent(&self) -> AgentId {
        self.agent
    }

    /// Queue a job this agent already owns under its priority class.
    pub fn add(&mut self, job: Job) -> Result<(), ContractViolation> {
        if job.owner() != Some(self.agent) {
            return Err(ContractViolation::ForeignJob {
                job: job.id(),
                agent: self.agent,
                owner: job.owner(),
            });
        }
        if job.state().is_terminal() {
            return Err(ContractViolation::JobFinished { job: job.id() });
        }
        self.queues[job.priority().index()].push_back(job);
        Ok(())
    }

    /// Record an advertisement for later evaluation.
    pub fn add_message(&mut self, message: Message) {
        self.mailbox.push_back(message);
    }

    pub fn mailbox_len(&self) -> usize {
        self.mailbox.len()
    }

    pub fn current(&self) -> Option<&Job> {
        self.current.as_ref()
    }

    /// Number of jobs waiting in `priority`'s queue.
    pub fn queued(&self, priority: Priority) -> usize {
        self.queues[priority.index()].len()
    }

    /// No current job, nothing queued and no unread advertisements.
    pub fn is_idle(&self) -> bool {
        self.current.is_none() && self.mailbox.is_empty() && self.queues.iter().all(VecDeque::is_empty)
    }

    /// One tick: pick a job if there is none, then drive the current job
    /// once. A job that finishes leaves the slot empty until next tick.
    pub fn update(&mut self, body: &mut Body, ctx: &mut TickContext<'_>) -> Result<(), ContractViolation> {
        if self.current.is_none() {
            self.current = self.next_job(ctx)?;
        }
        let Some(job) = self.current.as_mut() else {
            return Ok(());
        };
        if job.update(body, ctx)?.is_done() {
            self.current = None;
        }
        Ok(())
    }

    /// Scan classes from highest to lowest. Advertised work is tried just
    /// before the lowest class's queue.
    fn next_job(&mut self, ctx: &mut TickContext<'_>) -> Result<Option<Job>, ContractViolation> {
        for priority in Priority::ALL {
            if priority == Priority::LOWEST {
                if let Some(job) = self.claim_advertised(ctx)? {
                    return Ok(Some(job));
                }
            }
            if let Some(job) = self.queues[priority.index()].pop_front() {
                return Ok(Some(job));
            }
        }
        Ok(None)
    }

    /// Walk the mailbox in receipt order and take the first job still on
    /// offer. Stale advertisements are dropped.
    fn claim_advertised(&mut self, ctx: &mut TickContext<'_>) -> Result<Option<Job>, ContractViolation> {
        while let Some(message) = self.mailbox.pop_front() {
            let Some(sender) = ctx.senders.get_mut(message.sender()) else {
                tracing::warn!(agent = %self.agent, sender = %message.sender(), "advertisement from vanished sender");
                continue;
            };
            if !sender.is_job_available() {
                continue;
            }
            let Some(mut job) = sender.get_job(ctx.ids) else {
                continue;
            };
            job.set_owner(Some(self.agent), ctx.world)?;
            return Ok(Some(job));
        }
        Ok(None)
    }

    /// Give up every job: pause them all and return the assignable ones so
    /// their senders can offer them again. Fixed-owner jobs are dropped.
    pub fn release(&mut self, world: &mut World) -> Result<Vec<Job>, ContractViolation> {
        self.mailbox.clear();
        let mut jobs: Vec<Job> = self.current.take().into_iter().collect();
        for queue in &mut self.queues {
            jobs.extend(queue.drain(..));
        }

        let mut returned = Vec::new();
        for mut job in jobs {
            if job.is_fixed() {
                job.pause(world)?;
            } else {
                job.set_owner(None, world)?;
                returned.push(job);
            }
        }
        Ok(returned)
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
