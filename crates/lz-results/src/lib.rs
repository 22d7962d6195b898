//! lz-results: trajectory persistence.
//!
//! A trajectory file is a compact JSON object mapping the decimal step
//! index to `[x, y, z]`. The store picks a non-clobbering file name once
//! per run and rewrites the whole trajectory on every save.

pub mod naming;
pub mod store;
pub mod types;

pub use naming::{DEFAULT_BASE_NAME, EXTENSION, candidate_name, resolve_unique_path};
pub use store::{TrajectoryStore, load_trajectory};
pub use types::Trajectory;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Refusing to record non-finite point at step {step}")]
    NonFinite { step: u64 },

    #[error("Nothing to save: trajectory is empty")]
    Empty,

    #[error("No unused file name left for base '{base}'")]
    NameSpaceExhausted { base: String },
}
