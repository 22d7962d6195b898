use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use lz_app::{
    AppResult, AsciiCanvas, PairConfig, RunConfig, RunOptions, RunProgressEvent, RunStage,
    load_config, run_live_with_progress, run_pair, run_replay,
};
use lz_color::Rgb;
use lz_core::Point;

#[derive(Parser)]
#[command(name = "lz-cli")]
#[command(about = "LorenzFlow CLI - Lorenz attractor integration and replay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Integrate a curve, draw it and optionally save its trajectory
    Run {
        /// YAML or JSON run config; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,
        /// Initial x coordinate
        #[arg(long, allow_hyphen_values = true)]
        x: Option<f64>,
        /// Initial y coordinate
        #[arg(long, allow_hyphen_values = true)]
        y: Option<f64>,
        /// Initial z coordinate
        #[arg(long, allow_hyphen_values = true)]
        z: Option<f64>,
        /// Base color: name, #rrggbb or r,g,b
        #[arg(long)]
        color: Option<Rgb>,
        /// Save the trajectory as the run goes
        #[arg(long)]
        persist: bool,
        /// Keep the base color instead of rotating its hue
        #[arg(long)]
        no_rainbow: bool,
        /// Number of points to draw
        #[arg(long)]
        iterations: Option<u64>,
        /// Directory for the trajectory file
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Write the trajectory every N steps instead of every step
        #[arg(long)]
        save_every: Option<u64>,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Draw a saved trajectory without integrating
    Replay {
        /// Path to the trajectory JSON file
        path: PathBuf,
        /// YAML or JSON run config for colors and canvas
        #[arg(long)]
        config: Option<PathBuf>,
        /// Base color: name, #rrggbb or r,g,b
        #[arg(long)]
        color: Option<Rgb>,
        /// Keep the base color instead of rotating its hue
        #[arg(long)]
        no_rainbow: bool,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Step two curves from nearly equal starts and report how far apart they end
    Diverge {
        /// YAML or JSON pair config
        #[arg(long)]
        config: Option<PathBuf>,
        /// Number of steps
        #[arg(long)]
        steps: Option<u64>,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Summarize a saved trajectory
    Show {
        /// Path to the trajectory JSON file
        path: PathBuf,
    },
}

#[derive(Args, Clone)]
struct ViewArgs {
    /// Canvas width in characters
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(1..))]
    cols: u16,
    /// Canvas height in characters
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u16).range(1..))]
    rows: u16,
    /// Print the canvas with 24-bit colors
    #[arg(long)]
    ansi: bool,
    /// Do not print the canvas
    #[arg(long)]
    no_canvas: bool,
    /// Pause after each frame, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

impl ViewArgs {
    fn options(&self) -> RunOptions {
        RunOptions {
            frame_delay: self.delay_ms.map(Duration::from_millis),
            ..RunOptions::default()
        }
    }

    fn canvas(&self) -> AsciiCanvas {
        AsciiCanvas::new(usize::from(self.cols), usize::from(self.rows))
    }

    fn print(&self, canvas: &AsciiCanvas) {
        if self.no_canvas {
            return;
        }
        if self.ansi {
            print!("{}", canvas.render_ansi());
        } else {
            print!("{}", canvas.render_text());
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            x,
            y,
            z,
            color,
            persist,
            no_rainbow,
            iterations,
            out_dir,
            save_every,
            view,
        } => {
            let mut cfg = base_run_config(config.as_deref())?;
            let p = cfg.initial_point;
            cfg.initial_point = Point::new(x.unwrap_or(p.x), y.unwrap_or(p.y), z.unwrap_or(p.z));
            if let Some(color) = color {
                cfg.base_color = color;
            }
            cfg.persist |= persist;
            if no_rainbow {
                cfg.rainbow = false;
            }
            if let Some(n) = iterations {
                cfg.iterations = n;
            }
            if let Some(dir) = out_dir {
                cfg.output_dir = dir;
            }
            let mut options = view.options();
            if let Some(n) = save_every {
                options.save_every = n;
            }
            tracing::debug!(?cfg, "run config resolved");
            cmd_run(&cfg, &options, &view)
        }
        Commands::Replay {
            path,
            config,
            color,
            no_rainbow,
            view,
        } => {
            let mut cfg = base_run_config(config.as_deref())?;
            if let Some(color) = color {
                cfg.base_color = color;
            }
            if no_rainbow {
                cfg.rainbow = false;
            }
            cmd_replay(&path, &cfg, &view)
        }
        Commands::Diverge {
            config,
            steps,
            view,
        } => {
            let mut cfg: PairConfig = match config {
                Some(path) => load_config(&path)?,
                None => PairConfig::default(),
            };
            if let Some(n) = steps {
                cfg.steps = n;
            }
            cmd_diverge(&cfg, &view)
        }
        Commands::Show { path } => cmd_show(&path),
    }
}

fn base_run_config(path: Option<&Path>) -> AppResult<RunConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(RunConfig::default()),
    }
}

fn cmd_run(cfg: &RunConfig, options: &RunOptions, view: &ViewArgs) -> AppResult<()> {
    let p = cfg.initial_point;
    println!("Integrating from ({}, {}, {})", p.x, p.y, p.z);
    println!(
        "  h = {}, iterations = {}, persist = {}",
        cfg.params.h, cfg.iterations, cfg.persist
    );

    let mut canvas = view.canvas();
    let mut last_emit = Instant::now();
    let summary = run_live_with_progress(
        cfg,
        options,
        &mut canvas,
        Some(&mut |event| {
            if last_emit.elapsed().as_millis() >= 100 || event.stage == RunStage::Completed {
                render_cli_progress(&event);
                last_emit = Instant::now();
            }
        }),
    )?;
    clear_progress_line();

    view.print(&canvas);

    match summary.diverged_at {
        Some(step) => println!("✗ Trajectory diverged at step {}", step),
        None => println!("✓ Drew {} points", summary.points_rendered),
    }
    let s = summary.final_state;
    println!("  Final state: ({:.6}, {:.6}, {:.6})", s.x, s.y, s.z);
    if let Some(path) = &summary.trajectory_path {
        println!("  Trajectory: {}", path.display());
        println!(
            "  Saves: {} ok, {} failed",
            summary.saves, summary.failed_saves
        );
    }
    println!("  Elapsed: {:.3}s", summary.elapsed_wall_s);
    Ok(())
}

fn cmd_replay(path: &Path, cfg: &RunConfig, view: &ViewArgs) -> AppResult<()> {
    println!("Replaying: {}", path.display());
    let mut canvas = view.canvas();
    let summary = run_replay(path, cfg, &view.options(), &mut canvas)?;

    view.print(&canvas);
    println!("✓ Drew {} points", summary.points_rendered);
    if !summary.contiguous {
        println!("  Note: step indices have gaps");
    }
    Ok(())
}

fn cmd_diverge(cfg: &PairConfig, view: &ViewArgs) -> AppResult<()> {
    for curve in &cfg.curves {
        let p = curve.initial_point;
        println!("Curve from ({}, {}, {}) in {}", p.x, p.y, p.z, curve.color);
    }
    let mut canvas = view.canvas();
    let summary = run_pair(cfg, &view.options(), &mut canvas)?;

    view.print(&canvas);
    println!("✓ Stepped {} times", summary.steps);
    println!("  Final separation: {:.6}", summary.separation);
    for (i, diverged) in summary.diverged_at.iter().enumerate() {
        if let Some(step) = diverged {
            println!("  Curve {} diverged at step {}", i + 1, step);
        }
    }
    Ok(())
}

fn cmd_show(path: &Path) -> AppResult<()> {
    let trajectory = lz_results::load_trajectory(path)?;

    println!("Trajectory: {}", path.display());
    println!("  Points: {}", trajectory.len());
    if let Some((step, p)) = trajectory.first() {
        println!("  First: step {} ({}, {}, {})", step, p.x, p.y, p.z);
    }
    if let Some((step, p)) = trajectory.last() {
        println!("  Last:  step {} ({}, {}, {})", step, p.x, p.y, p.z);
    }
    if !trajectory.is_contiguous() {
        println!("  Note: step indices have gaps");
    }
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(100));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    let width = 28usize;
    let fraction = event.fraction_complete().clamp(0.0, 1.0);
    let filled = ((fraction * width as f64).round() as usize).min(width);
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    );
    print!(
        "\r[{}] {:>6.2}%  phase={}  step={}/{}  elapsed={:.1}s",
        bar,
        fraction * 100.0,
        event.stage.label(),
        event.step,
        event.total_steps,
        event.elapsed_wall_s
    );
    let _ = io::stdout().flush();
}
