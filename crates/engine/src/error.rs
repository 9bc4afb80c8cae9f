// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the simulation API

use colony_core::{ConfigError, ContractViolation};
use thiserror::Error;

/// Errors surfaced by [`crate::Simulation`] setup and driving.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("contract violation: {0}")]
    Contract(#[from] ContractViolation),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
