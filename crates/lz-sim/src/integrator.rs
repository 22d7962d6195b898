//! Fixed-step time integrators.

use crate::model::{DynamicalModel, LorenzState, LorenzSystem};
use crate::params::LorenzParams;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step using the model.
    fn step<M: DynamicalModel>(&self, model: &M, x: &M::State, dt: f64) -> M::State;
}

/// Forward Euler (explicit, 1st order).
///
/// The derivative is evaluated once, at the pre-step state, for every
/// component: x_new = x + dt * rhs(x).
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: DynamicalModel>(&self, model: &M, x: &M::State, dt: f64) -> M::State {
        let xdot = model.rhs(x);
        model.add(x, &model.scale(&xdot, dt))
    }
}

/// One forward Euler step of the Lorenz system with step size `params.h`.
///
/// Never fails; a non-finite result is the caller's signal to stop.
pub fn step(state: &LorenzState, params: &LorenzParams) -> LorenzState {
    ForwardEuler.step(&LorenzSystem::new(*params), state, params.h)
}
