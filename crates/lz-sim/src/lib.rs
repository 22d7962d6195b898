//! Lorenz system integration for lorenzflow.
//!
//! Provides:
//! - Physical parameters (sigma, rho, beta) and fixed step size
//! - The Lorenz derivative function behind a pluggable model trait
//! - Fixed-step forward Euler integrator
//! - `LorenzCurve`: a single owned trajectory stepped in place

pub mod curve;
pub mod error;
pub mod integrator;
pub mod model;
pub mod params;

// Re-exports for public API
pub use curve::LorenzCurve;
pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator, step};
pub use model::{DynamicalModel, LorenzState, LorenzSystem, derivative};
pub use params::LorenzParams;
