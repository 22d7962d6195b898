//! Shared application service layer for lorenzflow.
//!
//! This crate drives the integrator, color sequencer and trajectory store
//! for the CLI: run configuration, the renderer boundary, and the live,
//! replay and two-curve runners.

pub mod config;
pub mod error;
pub mod progress;
pub mod render;
pub mod run_service;

// Re-export key types for convenience
pub use config::{CurveSpec, PairConfig, RunConfig, load_config, save_config};
pub use error::{AppError, AppResult};
pub use progress::{RunProgressEvent, RunStage};
pub use render::{AsciiCanvas, AxisRanges, CanvasSetup, RecordingRenderer, RenderOp, Renderer};
pub use run_service::{
    PairSummary, ReplaySummary, RunOptions, RunSummary, run_live, run_live_with_progress,
    run_pair, run_replay,
};
