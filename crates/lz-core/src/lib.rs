//! lz-core: stable foundation for lorenzflow.
//!
//! Contains:
//! - numeric (Real + finiteness check)
//! - point (immutable 3-vector produced by the integrator)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod point;

// Re-exports: nice ergonomics for downstream crates
pub use error::{LzError, LzResult};
pub use numeric::{Real, ensure_finite};
pub use point::Point;
