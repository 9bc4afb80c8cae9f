// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier types and sequential id allocation.
//!
//! Every entity in the simulation (agents, work emitters, jobs, items, job
//! slots) is addressed by a small `Copy` id. Back-references between
//! entities are always ids, never owning pointers, so arenas stay the single
//! owner of each entity.

/// Define a numeric newtype id.
///
/// Generates `new()`, `get()`, `Display` (rendered as `prefix-n`) and
/// `From<u64>` implementations.
///
/// ```ignore
/// define_id! {
///     /// Doc comment for the ID type.
///     pub struct MyId("my");
/// }
/// ```
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($prefix:literal);
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub u64);

        impl $name {
            pub const fn new(n: u64) -> Self {
                Self(n)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n)
            }
        }
    };
}

define_id! {
    /// Identifies an agent (a creature that owns a job scheduler).
    pub struct AgentId("agent");
}

define_id! {
    /// Identifies a work emitter registered on a channel.
    pub struct SenderId("sender");
}

define_id! {
    /// Identifies a job. Used for logging and for emitters that track
    /// which of their jobs are out in the world.
    pub struct JobId("job");
}

define_id! {
    /// Identifies a concrete item instance.
    pub struct ItemId("item");
}

define_id! {
    /// Identifies a job slot.
    pub struct SlotId("slot");
}

/// Sequential id generator.
///
/// Ids start at 1 and never repeat within one generator. The simulation is
/// deterministic, so ids are too.
#[derive(Debug, Clone, Default)]
pub struct IdGen {
    last: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id, typed as whatever the caller needs.
    pub fn next<I: From<u64>>(&mut self) -> I {
        self.last += 1;
        I::from(self.last)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
