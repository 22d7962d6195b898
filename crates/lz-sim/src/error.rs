//! Error types for simulation operations.

use lz_core::Point;
use thiserror::Error;

/// Errors encountered while stepping a trajectory.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Step `step` produced a NaN or infinite component.
    #[error("Trajectory diverged at step {step}: ({}, {}, {})", .state.x, .state.y, .state.z)]
    Diverged { step: u64, state: Point },
}

pub type SimResult<T> = Result<T, SimError>;
