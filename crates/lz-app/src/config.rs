//! Run configuration and its YAML/JSON files.

use std::path::{Path, PathBuf};

use lz_color::Rgb;
use lz_core::Point;
use lz_sim::LorenzParams;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::render::{AxisRanges, CanvasSetup};

/// Reference iteration count of a live run.
pub const DEFAULT_ITERATIONS: u64 = 1_000_001;

/// Everything a live run or a replay needs, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub initial_point: Point,
    pub base_color: Rgb,
    /// Write the trajectory after every step.
    pub persist: bool,
    /// Hue-rotate the base color (ignored for pure green).
    pub rainbow: bool,
    pub params: LorenzParams,
    pub iterations: u64,
    pub output_dir: PathBuf,
    pub base_name: String,
    pub canvas: CanvasSetup,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            initial_point: Point::new(0.0, 20.0, 12.0),
            base_color: Rgb::RED,
            persist: false,
            rainbow: true,
            params: LorenzParams::default(),
            iterations: DEFAULT_ITERATIONS,
            output_dir: PathBuf::from("."),
            base_name: lz_results::DEFAULT_BASE_NAME.to_string(),
            canvas: CanvasSetup::default(),
        }
    }
}

/// One of the two curves of the divergence demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub initial_point: Point,
    pub color: Rgb,
    #[serde(default)]
    pub rainbow: bool,
}

/// Two curves from nearly identical starts, stepped side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairConfig {
    pub curves: [CurveSpec; 2],
    pub params: LorenzParams,
    pub steps: u64,
    pub canvas: CanvasSetup,
}

impl Default for PairConfig {
    fn default() -> Self {
        Self {
            curves: [
                CurveSpec {
                    initial_point: Point::new(0.0, 20.00, 25.0),
                    color: Rgb::BLUE,
                    rainbow: false,
                },
                CurveSpec {
                    initial_point: Point::new(0.0, 20.01, 25.0),
                    color: Rgb::MAGENTA,
                    rainbow: false,
                },
            ],
            params: LorenzParams::default(),
            steps: 50_000,
            canvas: CanvasSetup {
                width: 512,
                height: 512,
                axes: AxisRanges::new(-25.0, 25.0, 0.0, 50.0),
                background: Rgb::LIGHT_GRAY,
                buffered: true,
            },
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a config from YAML, or JSON when the extension is `.json`.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if is_json(path) {
        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config JSON: {}", e)))
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))
    }
}

/// Save a config as YAML, or JSON when the extension is `.json`.
pub fn save_config<T: Serialize>(path: &Path, config: &T) -> AppResult<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?
    } else {
        serde_yaml::to_string(config)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?
    };

    std::fs::write(path, content).map_err(|e| AppError::ConfigFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
