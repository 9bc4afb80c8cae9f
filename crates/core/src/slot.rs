// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job slots: single-occupant locations used by room-based work.
//!
//! A slot is mutated only by the agent standing in it, through
//! [`JobSlot::occupy`] and [`JobSlot::free`]. Both are guarded; breaking the
//! guard is a [`ContractViolation`], not a silent no-op.

use crate::error::ContractViolation;
use crate::geom::Point;
use crate::id::{AgentId, IdGen, SlotId};
use std::collections::BTreeMap;

/// A location that at most one agent may work from at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSlot {
    location: Point,
    occupant: Option<AgentId>,
}

impl JobSlot {
    pub fn new(location: Point) -> Self {
        Self {
            location,
            occupant: None,
        }
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn occupant(&self) -> Option<AgentId> {
        self.occupant
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// Claim the slot for `agent`. Fails if anyone already occupies it,
    /// including `agent` itself.
    pub fn occupy(&mut self, agent: AgentId) -> Result<(), ContractViolation> {
        if let Some(occupant) = self.occupant {
            return Err(ContractViolation::SlotOccupied {
                location: self.location,
                occupant,
                contender: agent,
            });
        }
        self.occupant = Some(agent);
        Ok(())
    }

    /// Vacate the slot. Only the current occupant may do this.
    pub fn free(&mut self, agent: AgentId) -> Result<(), ContractViolation> {
        if self.occupant != Some(agent) {
            return Err(ContractViolation::SlotNotHeld {
                location: self.location,
                caller: agent,
                occupant: self.occupant,
            });
        }
        self.occupant = None;
        Ok(())
    }
}

/// Arena of every job slot in the world.
#[derive(Debug, Default)]
pub struct SlotTable {
    slots: BTreeMap<SlotId, JobSlot>,
    ids: IdGen,
}

impl SlotTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new, free slot at `location`.
    pub fn insert(&mut self, location: Point) -> SlotId {
        let id = self.ids.next();
        self.slots.insert(id, JobSlot::new(location));
        id
    }

    pub fn get(&self, id: SlotId) -> Option<&JobSlot> {
        self.slots.get(&id)
    }

    pub fn occupy(&mut self, id: SlotId, agent: AgentId) -> Result<(), ContractViolation> {
        self.slot_mut(id)?.occupy(agent)
    }

    pub fn free(&mut self, id: SlotId, agent: AgentId) -> Result<(), ContractViolation> {
        self.slot_mut(id)?.free(agent)
    }

    /// Free the slot only if `agent` holds it. Used by cleanup hooks that
    /// cannot know how far the work got before it stopped.
    pub fn release_if_held(&mut self, id: SlotId, agent: AgentId) -> Result<bool, ContractViolation> {
        let slot = self.slot_mut(id)?;
        if slot.occupant() == Some(agent) {
            slot.free(agent)?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot_mut(&mut self, id: SlotId) -> Result<&mut JobSlot, ContractViolation> {
        self.slots
            .get_mut(&id)
            .ok_or(ContractViolation::UnknownSlot(id))
    }
}

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;
