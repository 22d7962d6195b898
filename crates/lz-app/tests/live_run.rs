use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use lz_app::{
    RecordingRenderer, RenderOp, RunConfig, RunOptions, RunStage, run_live,
    run_live_with_progress,
};
use lz_color::{ColorPolicy, Rgb};
use lz_core::Point;
use lz_results::load_trajectory;
use lz_sim::{LorenzParams, step};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}_{}", prefix, std::process::id(), nanos));
    dir
}

fn config(iterations: u64) -> RunConfig {
    RunConfig {
        iterations,
        ..RunConfig::default()
    }
}

#[test]
fn first_points_follow_euler() {
    let mut renderer = RecordingRenderer::new();
    let summary = run_live(&config(3), &RunOptions::default(), &mut renderer).unwrap();

    assert_eq!(summary.points_rendered, 3);
    assert_eq!(summary.diverged_at, None);
    assert!(summary.trajectory_path.is_none());

    let plotted = renderer.plotted();
    assert_eq!(plotted.len(), 3);
    // Projection is (x, z).
    assert_eq!((plotted[0].1, plotted[0].2), (0.0, 12.0));
    assert!((plotted[1].1 - 0.2).abs() < 1e-12);
    assert!((plotted[1].2 - 11.968).abs() < 1e-12);
    assert_eq!(renderer.presents(), 3);

    // Canvas is prepared before anything is drawn.
    assert!(matches!(
        renderer.ops[0],
        RenderOp::ConfigureCanvas {
            width: 600,
            height: 600
        }
    ));
    assert_eq!(renderer.ops[2], RenderOp::Clear(Rgb::BLACK));
}

#[test]
fn colors_follow_selected_policy() {
    let mut renderer = RecordingRenderer::new();
    let cfg = RunConfig {
        base_color: Rgb::GREEN,
        ..config(20)
    };
    run_live(&cfg, &RunOptions::default(), &mut renderer).unwrap();
    for (step, (color, _, _)) in renderer.plotted().into_iter().enumerate() {
        assert_eq!(
            color,
            ColorPolicy::GreenOscillation.color_for(Rgb::GREEN, step as u64)
        );
    }

    let mut renderer = RecordingRenderer::new();
    let cfg = RunConfig {
        base_color: Rgb::ORANGE,
        rainbow: false,
        ..config(5)
    };
    run_live(&cfg, &RunOptions::default(), &mut renderer).unwrap();
    assert!(renderer.plotted().iter().all(|(c, _, _)| *c == Rgb::ORANGE));
}

#[test]
fn persisted_file_is_the_integrated_trajectory() {
    let dir = unique_temp_dir("lz_app_persist");
    let cfg = RunConfig {
        persist: true,
        output_dir: dir.clone(),
        ..config(50)
    };
    let mut renderer = RecordingRenderer::new();
    let summary = run_live(&cfg, &RunOptions::default(), &mut renderer).unwrap();

    assert_eq!(summary.saves, 50);
    assert_eq!(summary.failed_saves, 0);
    let path = summary.trajectory_path.expect("no trajectory path");
    assert_eq!(path, dir.join("lorenz-coordinates.json"));

    let loaded = load_trajectory(&path).unwrap();
    assert_eq!(loaded.len(), 50);
    assert!(loaded.is_contiguous());

    let params = LorenzParams::default();
    let mut expected = Point::new(0.0, 20.0, 12.0);
    for (k, point) in loaded.iter() {
        assert_eq!(point, expected, "step {k}");
        expected = step(&expected, &params);
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn batched_saves_produce_identical_file() {
    let every = unique_temp_dir("lz_app_every");
    let batched = unique_temp_dir("lz_app_batched");

    for (dir, save_every) in [(&every, 1), (&batched, 7)] {
        let cfg = RunConfig {
            persist: true,
            output_dir: dir.clone(),
            ..config(40)
        };
        let options = RunOptions {
            save_every,
            ..RunOptions::default()
        };
        run_live(&cfg, &options, &mut RecordingRenderer::new()).unwrap();
    }

    let a = fs::read(every.join("lorenz-coordinates.json")).unwrap();
    let b = fs::read(batched.join("lorenz-coordinates.json")).unwrap();
    assert_eq!(a, b);

    let _ = fs::remove_dir_all(&every);
    let _ = fs::remove_dir_all(&batched);
}

#[test]
fn second_run_in_same_dir_gets_its_own_file() {
    let dir = unique_temp_dir("lz_app_second");
    let cfg = RunConfig {
        persist: true,
        output_dir: dir.clone(),
        ..config(5)
    };
    let first = run_live(&cfg, &RunOptions::default(), &mut RecordingRenderer::new()).unwrap();
    let second = run_live(&cfg, &RunOptions::default(), &mut RecordingRenderer::new()).unwrap();

    assert_eq!(
        first.trajectory_path.unwrap(),
        dir.join("lorenz-coordinates.json")
    );
    assert_eq!(
        second.trajectory_path.unwrap(),
        dir.join("lorenz-coordinates-0.000000-20.000000-12.000000-0.json")
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn collision_name_comes_from_initial_point_whatever_the_save_interval() {
    let every = unique_temp_dir("lz_app_name_every");
    let batched = unique_temp_dir("lz_app_name_batched");
    let expected = "lorenz-coordinates-0.000000-20.000000-12.000000-0.json";

    for (dir, save_every) in [(&every, 1), (&batched, 7)] {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("lorenz-coordinates.json"), "{}").unwrap();

        let cfg = RunConfig {
            persist: true,
            output_dir: dir.clone(),
            ..config(40)
        };
        let options = RunOptions {
            save_every,
            ..RunOptions::default()
        };
        let summary = run_live(&cfg, &options, &mut RecordingRenderer::new()).unwrap();
        assert_eq!(
            summary.trajectory_path.unwrap(),
            dir.join(expected),
            "save_every = {save_every}"
        );
    }

    let _ = fs::remove_dir_all(&every);
    let _ = fs::remove_dir_all(&batched);
}

#[test]
fn save_failures_do_not_stop_the_run() {
    let dir = unique_temp_dir("lz_app_blocked");
    fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("plain-file");
    fs::write(&blocker, "").unwrap();

    let cfg = RunConfig {
        persist: true,
        output_dir: blocker.join("out"),
        ..config(20)
    };
    let mut renderer = RecordingRenderer::new();
    let summary = run_live(&cfg, &RunOptions::default(), &mut renderer).unwrap();

    assert_eq!(summary.points_rendered, 20);
    assert_eq!(renderer.plotted().len(), 20);
    assert_eq!(summary.saves, 0);
    assert_eq!(summary.failed_saves, 20);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn divergence_ends_run_without_drawing_or_saving_garbage() {
    let dir = unique_temp_dir("lz_app_diverge");
    let cfg = RunConfig {
        initial_point: Point::new(1.0, 1.0, 1.0),
        params: LorenzParams::default().with_step(1.0e3),
        persist: true,
        output_dir: dir.clone(),
        ..config(500)
    };
    let mut renderer = RecordingRenderer::new();
    let summary = run_live(&cfg, &RunOptions::default(), &mut renderer).unwrap();

    let diverged = summary.diverged_at.expect("expected divergence");
    assert_eq!(summary.points_rendered, diverged);
    assert!(renderer
        .plotted()
        .iter()
        .all(|(_, a, b)| a.is_finite() && b.is_finite()));

    let loaded = load_trajectory(&summary.trajectory_path.unwrap()).unwrap();
    assert_eq!(loaded.len() as u64, summary.points_rendered);
    assert!(loaded.iter().all(|(_, p)| p.is_finite()));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn progress_brackets_the_run() {
    let mut stages = Vec::new();
    let options = RunOptions {
        progress_every: 10,
        ..RunOptions::default()
    };
    run_live_with_progress(
        &config(25),
        &options,
        &mut RecordingRenderer::new(),
        Some(&mut |event| stages.push((event.stage, event.step))),
    )
    .unwrap();

    assert_eq!(stages.first(), Some(&(RunStage::SettingUpCanvas, 0)));
    assert_eq!(stages.last(), Some(&(RunStage::Completed, 25)));
    let integrating: Vec<u64> = stages
        .iter()
        .filter(|(s, _)| *s == RunStage::Integrating)
        .map(|(_, step)| *step)
        .collect();
    assert_eq!(integrating, vec![0, 10, 20]);
}

#[test]
fn zero_save_interval_is_rejected() {
    let options = RunOptions {
        save_every: 0,
        ..RunOptions::default()
    };
    assert!(run_live(&config(1), &options, &mut RecordingRenderer::new()).is_err());
}
