//! A single Lorenz trajectory stepped in place.

use lz_core::Point;
use tracing::warn;

use crate::error::{SimError, SimResult};
use crate::integrator::step;
use crate::model::LorenzState;
use crate::params::LorenzParams;

/// Owned state plus the parameters it was created with.
///
/// Two curves never share data, so curves started from nearby points
/// integrate fully independently.
#[derive(Clone, Debug)]
pub struct LorenzCurve {
    state: LorenzState,
    params: LorenzParams,
    step_index: u64,
}

impl LorenzCurve {
    pub fn new(initial: Point, params: LorenzParams) -> Self {
        Self {
            state: initial,
            params,
            step_index: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> LorenzState {
        self.state
    }

    pub fn params(&self) -> &LorenzParams {
        &self.params
    }

    /// Number of successful steps taken so far; also the step index of
    /// the current state.
    pub fn step_index(&self) -> u64 {
        self.step_index
    }

    /// Advance by one forward Euler step.
    ///
    /// A non-finite result is not committed: the curve keeps its last
    /// finite state and `SimError::Diverged` is returned.
    pub fn advance(&mut self) -> SimResult<LorenzState> {
        let next = step(&self.state, &self.params);
        if let Err(e) = next.ensure_finite() {
            let step = self.step_index + 1;
            warn!(step, error = %e, "trajectory diverged");
            return Err(SimError::Diverged { step, state: next });
        }
        self.state = next;
        self.step_index += 1;
        Ok(next)
    }

    /// Advance `n` steps, stopping at the first divergence.
    pub fn advance_by(&mut self, n: u64) -> SimResult<LorenzState> {
        for _ in 0..n {
            self.advance()?;
        }
        Ok(self.state)
    }
}
