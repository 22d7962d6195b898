//! Physical parameters and step size.

use lz_core::Real;

/// Fixed parameters of one run. Immutable once a curve is created.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LorenzParams {
    /// Prandtl number.
    pub sigma: Real,
    /// Rayleigh number.
    pub rho: Real,
    /// Geometric factor.
    pub beta: Real,
    /// Fixed Euler step size.
    pub h: Real,
}

impl LorenzParams {
    pub const CLASSICAL_SIGMA: Real = 10.0;
    pub const CLASSICAL_RHO: Real = 28.0;
    pub const CLASSICAL_BETA: Real = 8.0 / 3.0;
    pub const DEFAULT_STEP: Real = 0.001;

    pub fn new(sigma: Real, rho: Real, beta: Real, h: Real) -> Self {
        Self {
            sigma,
            rho,
            beta,
            h,
        }
    }

    pub fn with_step(self, h: Real) -> Self {
        Self { h, ..self }
    }
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            sigma: Self::CLASSICAL_SIGMA,
            rho: Self::CLASSICAL_RHO,
            beta: Self::CLASSICAL_BETA,
            h: Self::DEFAULT_STEP,
        }
    }
}
