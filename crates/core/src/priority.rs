// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job priority classes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority class of a job, highest first.
///
/// Schedulers keep one FIFO queue per class and scan them in
/// [`Priority::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Higher,
    Normal,
    Lower,
}

impl Priority {
    pub const COUNT: usize = 3;

    /// Every class, in scan order.
    pub const ALL: [Priority; Priority::COUNT] =
        [Priority::Higher, Priority::Normal, Priority::Lower];

    /// The class checked last. Advertised work is tried just before it.
    pub const LOWEST: Priority = Priority::Lower;

    /// Position in [`Priority::ALL`].
    pub fn index(self) -> usize {
        match self {
            Priority::Higher => 0,
            Priority::Normal => 1,
            Priority::Lower => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Higher => write!(f, "higher"),
            Priority::Normal => write!(f, "normal"),
            Priority::Lower => write!(f, "lower"),
        }
    }
}
