use std::path::PathBuf;

use lz_app::{PairConfig, RunConfig, load_config, save_config};
use lz_color::Rgb;

fn configs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../configs")
}

#[test]
fn reference_config_is_the_default_run() {
    let cfg: RunConfig = load_config(&configs_dir().join("reference.yaml")).unwrap();
    assert_eq!(cfg, RunConfig::default());
}

#[test]
fn green_config_persists() {
    let cfg: RunConfig = load_config(&configs_dir().join("green_saved.yaml")).unwrap();
    assert_eq!(cfg.base_color, Rgb::GREEN);
    assert!(cfg.persist);
    assert_eq!(cfg.output_dir, PathBuf::from("runs"));
    assert_eq!(cfg.iterations, 20_000);
}

#[test]
fn pair_config_is_the_default_pair() {
    let cfg: PairConfig = load_config(&configs_dir().join("pair.yaml")).unwrap();
    assert_eq!(cfg, PairConfig::default());
}

#[test]
fn json_config_roundtrip() {
    let path = std::env::temp_dir().join(format!("lz_app_config_{}.json", std::process::id()));
    let cfg = RunConfig {
        base_color: Rgb::new(1, 2, 3),
        iterations: 42,
        ..RunConfig::default()
    };
    save_config(&path, &cfg).unwrap();
    let loaded: RunConfig = load_config(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_config_reports_path() {
    let err = load_config::<RunConfig>(&configs_dir().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("nope.yaml"));
}
