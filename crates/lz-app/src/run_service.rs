//! Live, replay and two-curve runners.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use lz_color::ColorSequencer;
use lz_core::Point;
use lz_results::{Trajectory, TrajectoryStore, load_trajectory};
use lz_sim::{LorenzCurve, SimError};
use tracing::{info, warn};

use crate::config::{PairConfig, RunConfig};
use crate::error::{AppError, AppResult};
use crate::progress::{RunProgressEvent, RunStage};
use crate::render::Renderer;

/// Runtime knobs that are not part of the run's identity.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Sleep after each presented frame.
    pub frame_delay: Option<Duration>,
    /// Emit a progress event every N steps.
    pub progress_every: u64,
    /// Write the trajectory every N steps instead of every step. The last
    /// step is always written, so the final file is the same either way.
    pub save_every: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            frame_delay: None,
            progress_every: 10_000,
            save_every: 1,
        }
    }
}

/// Outcome of a live run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Points drawn, one per iteration up to divergence.
    pub points_rendered: u64,
    /// Last drawn (and, when persisting, last recorded) state.
    pub final_state: Point,
    /// Step whose state came out non-finite, if any.
    pub diverged_at: Option<u64>,
    pub trajectory_path: Option<PathBuf>,
    pub saves: u64,
    pub failed_saves: u64,
    pub elapsed_wall_s: f64,
}

/// Outcome of a replay.
#[derive(Debug, Clone)]
pub struct ReplaySummary {
    pub points_rendered: u64,
    pub first: Option<(u64, Point)>,
    pub last: Option<(u64, Point)>,
    pub contiguous: bool,
}

/// Outcome of the two-curve run.
#[derive(Debug, Clone)]
pub struct PairSummary {
    pub steps: u64,
    pub final_states: [Point; 2],
    pub diverged_at: [Option<u64>; 2],
    pub separation: f64,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    stage: RunStage,
    step: u64,
    total_steps: u64,
    started: Instant,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(RunProgressEvent {
            stage,
            step,
            total_steps,
            elapsed_wall_s: started.elapsed().as_secs_f64(),
        });
    }
}

fn pace(options: &RunOptions) {
    if let Some(delay) = options.frame_delay {
        std::thread::sleep(delay);
    }
}

/// Integrate, draw and optionally persist a single curve.
pub fn run_live(
    config: &RunConfig,
    options: &RunOptions,
    renderer: &mut dyn Renderer,
) -> AppResult<RunSummary> {
    run_live_with_progress(config, options, renderer, None)
}

/// [`run_live`] with streamed progress events.
///
/// Iteration `i` draws the state after `i` steps (step 0 is the initial
/// point), records it as step `i` when persisting, then integrates once.
/// A non-finite state ends the run before it is drawn or recorded.
pub fn run_live_with_progress(
    config: &RunConfig,
    options: &RunOptions,
    renderer: &mut dyn Renderer,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunSummary> {
    if options.save_every == 0 {
        return Err(AppError::InvalidInput(
            "save_every must be positive".to_string(),
        ));
    }

    let started = Instant::now();
    let total = config.iterations;

    emit_progress(&mut progress_cb, RunStage::SettingUpCanvas, 0, total, started);
    config.canvas.apply(renderer);

    let sequencer = ColorSequencer::new(config.base_color, config.rainbow);
    let mut curve = LorenzCurve::new(config.initial_point, config.params);
    let mut store = config
        .persist
        .then(|| TrajectoryStore::new(&config.output_dir, config.base_name.as_str()));
    let mut trajectory = Trajectory::new();
    let mut saved_len = 0usize;
    let mut saves = 0u64;
    let mut diverged_at = None;
    let mut points_rendered = 0u64;

    info!(
        start = ?config.initial_point,
        policy = ?sequencer.policy(),
        persist = config.persist,
        iterations = total,
        "live run started"
    );

    if !config.initial_point.is_finite() {
        warn!(start = ?config.initial_point, "initial point is not finite");
        diverged_at = Some(0);
    }

    let mut step = 0;
    while diverged_at.is_none() && step < total {
        let point = curve.state();
        renderer.set_color(sequencer.color_for(step));
        renderer.plot_point(point.x, point.z);
        points_rendered += 1;

        if let Some(store) = store.as_mut() {
            trajectory.push(point)?;
            if (step + 1) % options.save_every == 0 {
                if store.persist(&trajectory)? {
                    saves += 1;
                }
                saved_len = trajectory.len();
            }
        }

        renderer.present();
        pace(options);

        if options.progress_every > 0 && step % options.progress_every == 0 {
            emit_progress(&mut progress_cb, RunStage::Integrating, step, total, started);
        }

        step += 1;
        if step < total
            && let Err(SimError::Diverged { step, .. }) = curve.advance()
        {
            diverged_at = Some(step);
        }
    }

    if let Some(store) = store.as_mut()
        && trajectory.len() > saved_len
        && store.persist(&trajectory)?
    {
        saves += 1;
    }

    let summary = RunSummary {
        points_rendered,
        final_state: curve.state(),
        diverged_at,
        trajectory_path: store
            .as_ref()
            .and_then(|s| s.resolved_path().map(Path::to_path_buf)),
        saves,
        failed_saves: store.as_ref().map_or(0, |s| s.failed_saves()),
        elapsed_wall_s: started.elapsed().as_secs_f64(),
    };

    emit_progress(
        &mut progress_cb,
        RunStage::Completed,
        points_rendered,
        total,
        started,
    );
    match summary.diverged_at {
        Some(step) => info!(step, points = points_rendered, "live run stopped on divergence"),
        None => info!(points = points_rendered, saves, "live run finished"),
    }

    Ok(summary)
}

/// Draw a stored trajectory in step order. Nothing is integrated or
/// written; colors come from `config`.
pub fn run_replay(
    path: &Path,
    config: &RunConfig,
    options: &RunOptions,
    renderer: &mut dyn Renderer,
) -> AppResult<ReplaySummary> {
    let trajectory = load_trajectory(path)?;
    let total = trajectory.len() as u64;

    config.canvas.apply(renderer);
    let sequencer = ColorSequencer::new(config.base_color, config.rainbow);

    let mut points_rendered = 0;
    for (step, point) in trajectory.iter() {
        renderer.set_color(sequencer.color_for(step));
        renderer.plot_point(point.x, point.z);
        renderer.present();
        pace(options);
        points_rendered += 1;
    }

    info!(path = %path.display(), points = total, "replay finished");

    Ok(ReplaySummary {
        points_rendered,
        first: trajectory.first(),
        last: trajectory.last(),
        contiguous: trajectory.is_contiguous(),
    })
}

/// Step two independent curves side by side and draw both each step.
/// A curve that diverges stops; the other keeps going.
pub fn run_pair(
    config: &PairConfig,
    options: &RunOptions,
    renderer: &mut dyn Renderer,
) -> AppResult<PairSummary> {
    config.canvas.apply(renderer);

    let mut curves = config
        .curves
        .each_ref()
        .map(|spec| LorenzCurve::new(spec.initial_point, config.params));
    let sequencers = config
        .curves
        .each_ref()
        .map(|spec| ColorSequencer::new(spec.color, spec.rainbow));
    let mut diverged_at = [None, None];

    for step in 0..config.steps {
        for (i, curve) in curves.iter_mut().enumerate() {
            if diverged_at[i].is_some() {
                continue;
            }
            match curve.advance() {
                Ok(p) => {
                    renderer.set_color(sequencers[i].color_for(step));
                    renderer.plot_point(p.x, p.z);
                }
                Err(SimError::Diverged { step, .. }) => diverged_at[i] = Some(step),
            }
        }
        renderer.present();
        pace(options);

        if diverged_at.iter().all(Option::is_some) {
            break;
        }
    }

    let final_states = [curves[0].state(), curves[1].state()];
    let separation = final_states[0].distance(&final_states[1]);
    info!(steps = config.steps, separation, "pair run finished");

    Ok(PairSummary {
        steps: curves[0].step_index().max(curves[1].step_index()),
        final_states,
        diverged_at,
        separation,
    })
}
