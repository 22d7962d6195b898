//! Trajectory storage API.

use std::fs;
use std::path::{Path, PathBuf};

use lz_core::Point;
use tracing::{debug, info, warn};

use crate::naming::{DEFAULT_BASE_NAME, resolve_unique_path};
use crate::types::Trajectory;
use crate::{ResultsError, ResultsResult};

/// Writes one run's trajectory to a single file.
///
/// The file name is resolved on the first save and then kept for the
/// rest of the run, even if another file with that name shows up later.
#[derive(Debug, Clone)]
pub struct TrajectoryStore {
    dir: PathBuf,
    base_name: String,
    resolved: Option<PathBuf>,
    failed_saves: u64,
}

impl TrajectoryStore {
    pub fn new(dir: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_name: base_name.into(),
            resolved: None,
            failed_saves: 0,
        }
    }

    /// Store using the default base name in `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, DEFAULT_BASE_NAME)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// The path bound by the first save, if any.
    pub fn resolved_path(&self) -> Option<&Path> {
        self.resolved.as_deref()
    }

    /// Saves that failed and were swallowed by [`Self::persist`].
    pub fn failed_saves(&self) -> u64 {
        self.failed_saves
    }

    /// Bind the output path if not bound yet, naming collisions after
    /// `start`. Later calls return the bound path unchanged.
    pub fn resolve(&mut self, start: &Point) -> ResultsResult<&Path> {
        let path = match &self.resolved {
            Some(path) => path.clone(),
            None => {
                let path =
                    resolve_unique_path(&self.dir, &self.base_name, start, |p| p.exists())?;
                info!(path = %path.display(), "trajectory file resolved");
                path
            }
        };
        Ok(self.resolved.insert(path).as_path())
    }

    /// Write the whole trajectory, replacing the previous file contents.
    ///
    /// A collision name is built from the trajectory's first point, so it
    /// does not depend on how many steps were taken before the first save.
    pub fn save(&mut self, trajectory: &Trajectory) -> ResultsResult<PathBuf> {
        let (_, start) = trajectory.first().ok_or(ResultsError::Empty)?;
        let path = self.resolve(&start)?.to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, trajectory.to_json()?)?;
        debug!(path = %path.display(), points = trajectory.len(), "trajectory saved");
        Ok(path)
    }

    /// Like [`Self::save`], but a failed write is logged and counted
    /// instead of returned, so the caller can keep stepping.
    ///
    /// Returns `Ok(true)` when written and `Ok(false)` when the write was
    /// dropped. Running out of file names is still an error.
    pub fn persist(&mut self, trajectory: &Trajectory) -> ResultsResult<bool> {
        match self.save(trajectory) {
            Ok(_) => Ok(true),
            Err(e @ (ResultsError::NameSpaceExhausted { .. } | ResultsError::Empty)) => Err(e),
            Err(e) => {
                self.failed_saves += 1;
                warn!(
                    error = %e,
                    step = ?trajectory.last().map(|(s, _)| s),
                    failed_saves = self.failed_saves,
                    "could not save trajectory; continuing"
                );
                Ok(false)
            }
        }
    }
}

/// Read a trajectory file. Any malformed entry fails the whole load.
pub fn load_trajectory(path: &Path) -> ResultsResult<Trajectory> {
    let content = fs::read_to_string(path)?;
    let trajectory = Trajectory::from_json(&content)?;
    if !trajectory.is_contiguous() {
        warn!(path = %path.display(), "trajectory has gaps in its step indices");
    }
    info!(path = %path.display(), points = trajectory.len(), "trajectory loaded");
    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_without_points_is_rejected() {
        let mut store = TrajectoryStore::in_dir(std::env::temp_dir());
        assert!(matches!(
            store.save(&Trajectory::new()),
            Err(ResultsError::Empty)
        ));
        assert!(store.resolved_path().is_none());
    }

    #[test]
    fn defaults() {
        let store = TrajectoryStore::in_dir("runs");
        assert_eq!(store.base_name(), "lorenz-coordinates");
        assert_eq!(store.dir(), Path::new("runs"));
        assert_eq!(store.failed_saves(), 0);
    }
}
