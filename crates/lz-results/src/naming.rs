//! File name resolution for trajectory files.

use std::path::{Path, PathBuf};

use lz_core::Point;
use tracing::debug;

use crate::{ResultsError, ResultsResult};

pub const DEFAULT_BASE_NAME: &str = "lorenz-coordinates";
pub const EXTENSION: &str = "json";

/// `base-{x}-{y}-{z}-{counter}.json`, coordinates with six decimals.
pub fn candidate_name(base: &str, point: &Point, counter: u64) -> String {
    format!(
        "{base}-{:.6}-{:.6}-{:.6}-{counter}.{EXTENSION}",
        point.x, point.y, point.z
    )
}

/// Pick the first path under `dir` that `exists` reports as free.
///
/// Tries `base.json` first, then [`candidate_name`] with counters
/// `0, 1, 2, ...` built from `point`.
pub fn resolve_unique_path(
    dir: &Path,
    base: &str,
    point: &Point,
    exists: impl FnMut(&Path) -> bool,
) -> ResultsResult<PathBuf> {
    resolve_within(dir, base, point, u64::MAX, exists)
}

pub(crate) fn resolve_within(
    dir: &Path,
    base: &str,
    point: &Point,
    max_counter: u64,
    mut exists: impl FnMut(&Path) -> bool,
) -> ResultsResult<PathBuf> {
    let default = dir.join(format!("{base}.{EXTENSION}"));
    if !exists(&default) {
        return Ok(default);
    }

    for counter in 0..max_counter {
        let candidate = dir.join(candidate_name(base, point, counter));
        if !exists(&candidate) {
            debug!(path = %candidate.display(), counter, "default trajectory file taken");
            return Ok(candidate);
        }
    }

    Err(ResultsError::NameSpaceExhausted {
        base: base.to_string(),
    })
}
