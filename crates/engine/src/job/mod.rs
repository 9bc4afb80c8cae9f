// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jobs: ownable, resumable work made of a FIFO queue of subtasks.
//!
//! What a job actually does lives in its [`JobPlan`]. The [`Job`] wrapper
//! owns the lifecycle: ownership hooks, driving the front subtask, and
//! telling the originating sender when it is finished.

mod plans;

pub use plans::{DigPlan, HaulPlan, MinePlan, RestPlan};

use crate::agent::Body;
use crate::subtask::{Step, Subtask};
use crate::world::World;
use crate::TickContext;
use colony_core::{AgentId, CancelReason, ContractViolation, JobId, Priority, SenderId};
use std::collections::VecDeque;
use std::fmt;

/// The work-specific half of a job.
pub trait JobPlan: fmt::Debug {
    fn name(&self) -> &'static str;

    fn priority(&self) -> Priority {
        Priority::Normal
    }

    /// Called on every transition to a new owner. Returns the subtasks to
    /// run, front first.
    fn init_job(&mut self, owner: AgentId) -> Vec<Box<dyn Subtask>>;

    /// Called when `owner` loses the job before it finished.
    fn pause_job(&mut self, _owner: AgentId, _world: &mut World) -> Result<(), ContractViolation> {
        Ok(())
    }

    /// Called once when a subtask cancels. The job is terminal afterwards.
    fn cancel_job(
        &mut self,
        _body: &mut Body,
        _reason: &CancelReason,
        _world: &mut World,
    ) -> Result<(), ContractViolation> {
        Ok(())
    }
}

/// Lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    /// Assignable job that never had an owner.
    Unowned,
    /// Fixed-owner job not yet started.
    Ready,
    Active,
    /// Lost its owner (assignable) or was paused (fixed).
    Paused,
    Done,
    Cancelled,
}

impl JobState {
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Done | JobState::Cancelled)
    }
}

/// How a finished job ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Completed,
    Cancelled(CancelReason),
}

/// Result of driving a job for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Running,
    Done(JobOutcome),
}

impl JobStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, JobStatus::Done(_))
    }
}

/// Where a job came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Handed out by a sender; may change owners and reports back when done.
    Sender(SenderId),
    /// Created for one agent; its owner never changes.
    Fixed,
}

pub struct Job {
    id: JobId,
    plan: Box<dyn JobPlan>,
    owner: Option<AgentId>,
    origin: Origin,
    subtasks: VecDeque<Box<dyn Subtask>>,
    state: JobState,
}

impl Job {
    /// An assignable job handed out by `sender`. Starts unowned.
    pub fn assignable(id: JobId, sender: SenderId, plan: impl JobPlan + 'static) -> Self {
        Self {
            id,
            plan: Box::new(plan),
            owner: None,
            origin: Origin::Sender(sender),
            subtasks: VecDeque::new(),
            state: JobState::Unowned,
        }
    }

    /// A job bound to `owner` for its whole life.
    pub fn fixed(id: JobId, owner: AgentId, plan: impl JobPlan + 'static) -> Self {
        Self {
            id,
            plan: Box::new(plan),
            owner: Some(owner),
            origin: Origin::Fixed,
            subtasks: VecDeque::new(),
            state: JobState::Ready,
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.plan.name()
    }

    pub fn owner(&self) -> Option<AgentId> {
        self.owner
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn sender(&self) -> Option<SenderId> {
        match self.origin {
            Origin::Sender(sender) => Some(sender),
            Origin::Fixed => None,
        }
    }

    pub fn priority(&self) -> Priority {
        self.plan.priority()
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    pub fn is_fixed(&self) -> bool {
        self.origin == Origin::Fixed
    }

    /// True iff the job has an owner and subtasks left to run.
    pub fn is_active(&self) -> bool {
        self.owner.is_some() && !self.subtasks.is_empty()
    }

    pub fn remaining_subtasks(&self) -> usize {
        self.subtasks.len()
    }

    /// Name of the subtask that runs next.
    pub fn current_subtask(&self) -> Option<&'static str> {
        self.subtasks.front().map(|s| s.name())
    }

    /// Move an assignable job to a new owner, or to none.
    ///
    /// Gaining an owner runs `init_job`. Losing one runs `pause_job`.
    /// Switching owners runs both, pause first. Setting the current owner
    /// again does nothing.
    pub fn set_owner(&mut self, owner: Option<AgentId>, world: &mut World) -> Result<(), ContractViolation> {
        if self.is_fixed() {
            return Err(ContractViolation::FixedOwner { job: self.id });
        }
        self.ensure_live()?;
        if self.owner == owner {
            return Ok(());
        }

        if let Some(previous) = self.owner.take() {
            self.plan.pause_job(previous, world)?;
            self.subtasks.clear();
            self.state = JobState::Paused;
            tracing::info!(job = %self.id, name = self.name(), agent = %previous, "job paused");
        }
        if let Some(next) = owner {
            self.owner = Some(next);
            self.subtasks = self.plan.init_job(next).into();
            self.state = JobState::Active;
            tracing::info!(job = %self.id, name = self.name(), agent = %next, "job assigned");
        }
        Ok(())
    }

    /// Start (or resume) a fixed-owner job.
    pub fn start(&mut self) -> Result<(), ContractViolation> {
        let owner = self.fixed_owner()?;
        self.ensure_live()?;
        if self.state == JobState::Active {
            return Ok(());
        }
        self.subtasks = self.plan.init_job(owner).into();
        self.state = JobState::Active;
        tracing::info!(job = %self.id, name = self.name(), agent = %owner, "job started");
        Ok(())
    }

    /// Pause a fixed-owner job. Its subtasks are rebuilt on the next start.
    pub fn pause(&mut self, world: &mut World) -> Result<(), ContractViolation> {
        let owner = self.fixed_owner()?;
        self.ensure_live()?;
        if self.state != JobState::Active {
            return Ok(());
        }
        self.plan.pause_job(owner, world)?;
        self.subtasks.clear();
        self.state = JobState::Paused;
        tracing::info!(job = %self.id, name = self.name(), agent = %owner, "job paused");
        Ok(())
    }

    /// Drive the front subtask once.
    ///
    /// Updating a job without an owner, or one that already finished, is a
    /// contract violation. A cancelling subtask ends the job on the same
    /// call: `cancel_job` runs, the sender hears about it, and the result
    /// is [`JobStatus::Done`].
    pub fn update(&mut self, body: &mut Body, ctx: &mut TickContext<'_>) -> Result<JobStatus, ContractViolation> {
        self.ensure_live()?;
        let Some(owner) = self.owner else {
            return Err(ContractViolation::UnownedUpdate { job: self.id });
        };
        if owner != body.id {
            return Err(ContractViolation::ForeignJob {
                job: self.id,
                agent: body.id,
                owner: Some(owner),
            });
        }
        if self.is_fixed() && self.state != JobState::Active {
            self.start()?;
        }

        let step = match self.subtasks.front_mut() {
            Some(subtask) => subtask.update(body, ctx.world)?,
            None => return Ok(self.finish(JobOutcome::Completed, ctx)),
        };

        match step {
            Step::Running => Ok(JobStatus::Running),
            Step::Done => {
                self.subtasks.pop_front();
                if self.subtasks.is_empty() {
                    Ok(self.finish(JobOutcome::Completed, ctx))
                } else {
                    Ok(JobStatus::Running)
                }
            }
            Step::Cancelled(reason) => {
                tracing::info!(
                    job = %self.id,
                    name = self.name(),
                    agent = %body.id,
                    position = %body.position,
                    subtask = self.current_subtask().unwrap_or("none"),
                    %reason,
                    "job cancelled"
                );
                self.plan.cancel_job(body, &reason, ctx.world)?;
                self.subtasks.clear();
                Ok(self.finish(JobOutcome::Cancelled(reason), ctx))
            }
        }
    }

    fn finish(&mut self, outcome: JobOutcome, ctx: &mut TickContext<'_>) -> JobStatus {
        self.state = match outcome {
            JobOutcome::Completed => JobState::Done,
            JobOutcome::Cancelled(_) => JobState::Cancelled,
        };
        if outcome == JobOutcome::Completed {
            tracing::info!(job = %self.id, name = self.name(), "job done");
        }
        if self.sender().is_some() {
            ctx.senders.job_done(self, &outcome, ctx.bus);
        }
        JobStatus::Done(outcome)
    }

    fn ensure_live(&self) -> Result<(), ContractViolation> {
        if self.state.is_terminal() {
            return Err(ContractViolation::JobFinished { job: self.id });
        }
        Ok(())
    }

    fn fixed_owner(&self) -> Result<AgentId, ContractViolation> {
        match (self.origin, self.owner) {
            (Origin::Fixed, Some(owner)) => Ok(owner),
            _ => Err(ContractViolation::NotFixed { job: self.id }),
        }
    }
}

impl fmt::Debug for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Job")
            .field("id", &self.id)
            .field("plan", &self.plan)
            .field("owner", &self.owner)
            .field("origin", &self.origin)
            .field("subtasks", &self.subtasks.len())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
