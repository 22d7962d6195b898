//! DynamicalModel trait and the Lorenz equations.

use lz_core::Point;

use crate::params::LorenzParams;

/// Phase-space state of a Lorenz curve.
pub type LorenzState = Point;

/// Trait for autonomous dynamical systems.
///
/// A DynamicalModel must implement:
/// - State type (Clone, for snapshots)
/// - RHS (right-hand side) computation: x_dot = f(x)
/// - Vector arithmetic for integration: add states, scale by scalar
pub trait DynamicalModel {
    /// State type (must be Clone).
    type State: Clone;

    /// Compute state derivative dxdt = f(x). Pure.
    fn rhs(&self, x: &Self::State) -> Self::State;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;
}

/// The Lorenz equations:
///
/// dx/dt = σ(y − x)
/// dy/dt = x(ρ − z) − y
/// dz/dt = xy − βz
pub fn derivative(state: &LorenzState, params: &LorenzParams) -> LorenzState {
    let Point { x, y, z } = *state;
    Point {
        x: params.sigma * (y - x),
        y: x * (params.rho - z) - y,
        z: x * y - params.beta * z,
    }
}

/// Lorenz system with fixed parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct LorenzSystem {
    pub params: LorenzParams,
}

impl LorenzSystem {
    pub fn new(params: LorenzParams) -> Self {
        Self { params }
    }
}

impl DynamicalModel for LorenzSystem {
    type State = LorenzState;

    fn rhs(&self, x: &LorenzState) -> LorenzState {
        derivative(x, &self.params)
    }

    fn add(&self, a: &LorenzState, b: &LorenzState) -> LorenzState {
        Point::new(a.x + b.x, a.y + b.y, a.z + b.z)
    }

    fn scale(&self, a: &LorenzState, scale: f64) -> LorenzState {
        Point::new(scale * a.x, scale * a.y, scale * a.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_a_fixed_point() {
        let params = LorenzParams::new(3.0, -7.5, 0.25, 0.5);
        assert_eq!(derivative(&Point::ORIGIN, &params), Point::ORIGIN);
    }

    #[test]
    fn derivative_matches_equations() {
        let params = LorenzParams::default();
        let d = derivative(&Point::new(0.0, 20.0, 12.0), &params);
        assert_eq!(d.x, 200.0);
        assert_eq!(d.y, -20.0);
        assert_eq!(d.z, -(8.0 / 3.0) * 12.0);
    }

    #[test]
    fn nontrivial_fixed_points_are_stationary() {
        // C± = (±sqrt(β(ρ−1)), ±sqrt(β(ρ−1)), ρ−1)
        let params = LorenzParams::default();
        let c = (params.beta * (params.rho - 1.0)).sqrt();
        for sign in [1.0, -1.0] {
            let d = derivative(&Point::new(sign * c, sign * c, params.rho - 1.0), &params);
            assert!(d.x.abs() < 1e-12);
            assert!(d.y.abs() < 1e-12);
            assert!(d.z.abs() < 1e-12);
        }
    }
}
