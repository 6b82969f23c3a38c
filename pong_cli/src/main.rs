//! Headless harness for the Pong simulation.
//!
//! Subcommands:
//! - `run`: play a match with autopilot paddles, optionally recording frames
//! - `replay <file>`: summarize a recorded frame log

mod adapter;
mod assets;
mod autopilot;
mod clock;
mod error;

use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use adapter::{snapshot, TraceRenderer};
use assets::{FileAssets, NullAssets};
use autopilot::Autopilot;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clock::TimeSource;
use error::CliError;
use game_core::{
    Camera, Config, EndRule, KeyState, MatchState, Params, ReflectionRule, Side, Simulation,
    Sprites,
};
use proto::{decode_log, encode_log, RunState};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pong", about = "Headless Pong simulation harness")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a match until the ball leaves the playfield or the frame cap is hit.
    Run(RunArgs),
    /// Print a summary of a recorded frame log.
    Replay {
        /// Frame log written by `run --record`.
        file: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Seed for the ball's launch direction.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Maximum number of frames to simulate.
    #[arg(short, long, default_value_t = 3600)]
    frames: u64,

    /// Simulated seconds per frame.
    #[arg(long, default_value_t = 1.0 / 60.0, value_parser = parse_dt)]
    dt: f32,

    /// Use the wall clock instead of fixed frame times.
    #[arg(long)]
    realtime: bool,

    /// Left paddle player.
    #[arg(long, value_enum, default_value_t = Autopilot::Track)]
    left: Autopilot,

    /// Right paddle player.
    #[arg(long, value_enum, default_value_t = Autopilot::Track)]
    right: Autopilot,

    /// When the ball's velocity is flipped inside a collision margin.
    #[arg(long, value_enum, default_value_t = Reflection::EveryFrame)]
    reflection: Reflection,

    /// Play scored rounds up to this many points instead of ending on the
    /// first exit. Bare `--rounds` plays to the default win score.
    #[arg(long)]
    rounds: Option<Option<u8>>,

    /// Cap each frame's delta time, in seconds.
    #[arg(long)]
    max_dt: Option<f32>,

    /// Directory holding textures/paddle.png and textures/ball.png.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Write every frame to this file.
    #[arg(long)]
    record: Option<PathBuf>,
}

fn parse_dt(s: &str) -> Result<f32, String> {
    let dt: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if dt.is_finite() && dt >= 0.0 {
        Ok(dt)
    } else {
        Err(format!("{dt} is not a finite, non-negative number of seconds"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Reflection {
    EveryFrame,
    Approaching,
}

impl RunArgs {
    fn config(&self) -> Config {
        Config {
            reflection: match self.reflection {
                Reflection::EveryFrame => ReflectionRule::EveryFrame,
                Reflection::Approaching => ReflectionRule::Approaching,
            },
            end_rule: match self.rounds {
                Some(win_score) => EndRule::ScoredRounds {
                    win_score: win_score.unwrap_or(Params::WIN_SCORE),
                },
                None => EndRule::EndRun,
            },
            max_dt: self.max_dt,
            ..Config::default()
        }
    }
}

/// How a run went
#[derive(Debug)]
struct RunSummary {
    frames: u64,
    seconds: f32,
    state: MatchState,
    /// Side the ball left through on the frame that ended the run
    exited: Option<Side>,
    score: (u8, u8),
}

fn run_match(args: &RunArgs) -> Result<RunSummary, CliError> {
    let mut sim = Simulation::new(args.config(), args.seed)?;

    let sprites = match &args.assets {
        Some(dir) => Sprites::load(&mut FileAssets::new(dir))?,
        None => Sprites::load(&mut NullAssets::default())?,
    };
    let mut renderer = TraceRenderer::new(Camera::default());
    let mut source = if args.realtime {
        TimeSource::realtime()
    } else {
        TimeSource::fixed(args.dt)
    };

    let mut recorded = Vec::new();
    let mut frames = 0;
    let mut exited = None;

    while !sim.is_terminated() && frames < args.frames {
        let keys = KeyState {
            left: args.left.keys(Side::Left, &sim),
            right: args.right.keys(Side::Right, &sim),
        };

        let now = source.now();
        let events = sim.frame(now, &keys);
        if events.terminated {
            exited = events.ball_exited;
        }
        sim.render(&sprites, &mut renderer);
        frames += 1;

        if args.record.is_some() {
            recorded.push(snapshot(&sim));
        }
        if source.is_realtime() {
            if let Ok(pause) = Duration::try_from_secs_f32(args.dt) {
                std::thread::sleep(pause);
            }
        }
    }
    debug!(draws = renderer.draws(), "render adapter calls");

    if let Some(path) = &args.record {
        let bytes = encode_log(&recorded)?;
        std::fs::write(path, bytes).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), frames = recorded.len(), "frame log written");
    }

    Ok(RunSummary {
        frames,
        seconds: sim.time().now,
        state: sim.state(),
        exited,
        score: (sim.score().get(Side::Left), sim.score().get(Side::Right)),
    })
}

fn replay(file: &Path) -> Result<(), CliError> {
    let bytes = std::fs::read(file).map_err(|source| CliError::Io {
        path: file.to_path_buf(),
        source,
    })?;
    let frames = decode_log(&bytes)?;

    println!("frames: {}", frames.len());
    if let Some(last) = frames.last() {
        println!("time:   {:.3}s", last.now);
        println!("ball:   ({:.3}, {:.3})", last.ball_x, last.ball_y);
        println!("score:  {} - {}", last.score_left, last.score_right);
        println!(
            "state:  {}",
            match last.state {
                RunState::Running => "running",
                RunState::Terminated => "terminated",
            }
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Run(args) => {
            let summary = run_match(&args)?;
            info!(
                frames = summary.frames,
                seconds = summary.seconds,
                state = ?summary.state,
                "run finished"
            );
            println!("frames: {}", summary.frames);
            println!("time:   {:.3}s", summary.seconds);
            println!("score:  {} - {}", summary.score.0, summary.score.1);
            match summary.exited {
                Some(side) => println!("ball exited on the {side:?} side"),
                None => println!("frame cap reached"),
            }
        }
        Command::Replay { file } => replay(&file)?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> RunArgs {
        let argv = ["pong", "run"].into_iter().chain(extra.iter().copied());
        match Cli::parse_from(argv).command {
            Command::Run(args) => args,
            Command::Replay { .. } => unreachable!(),
        }
    }

    #[test]
    fn defaults_match_faithful_rules() {
        let config = args(&[]).config();
        assert_eq!(config.reflection, ReflectionRule::EveryFrame);
        assert_eq!(config.end_rule, EndRule::EndRun);
        assert_eq!(config.max_dt, None);
    }

    #[test]
    fn flags_select_rules() {
        let config = args(&["--reflection", "approaching", "--rounds", "3", "--max-dt", "0.1"])
            .config();
        assert_eq!(config.reflection, ReflectionRule::Approaching);
        assert_eq!(config.end_rule, EndRule::ScoredRounds { win_score: 3 });
        assert_eq!(config.max_dt, Some(0.1));
    }

    #[test]
    fn run_stops_at_frame_cap() {
        let summary = run_match(&args(&["--frames", "5", "--left", "idle", "--right", "idle"]))
            .unwrap();
        assert_eq!(summary.frames, 5);
        assert_eq!(summary.state, MatchState::Running);
        assert!((summary.seconds - 5.0 / 60.0).abs() < 1e-5);
    }

    #[test]
    fn run_ends_when_ball_leaves() {
        // Paddles run off the playfield, so any launch with a horizontal
        // component reaches an edge well before the cap
        let summary = (0..32)
            .map(|seed| {
                let seed = seed.to_string();
                run_match(&args(&[
                    "--seed", &seed, "--dt", "0.5", "--frames", "200", "--left", "up", "--right",
                    "down",
                ]))
                .unwrap()
            })
            .find(|s| s.state == MatchState::Terminated)
            .expect("some seed sends the ball out");
        assert!(summary.exited.is_some());
    }

    #[test]
    fn bare_rounds_plays_to_default_win_score() {
        let config = args(&["--rounds"]).config();
        assert_eq!(
            config.end_rule,
            EndRule::ScoredRounds {
                win_score: Params::WIN_SCORE
            }
        );
    }

    #[test]
    fn non_finite_or_negative_dt_is_rejected() {
        for dt in ["inf", "NaN", "-0.5", "soon"] {
            let parsed = Cli::try_parse_from(["pong", "run", "--realtime", "--dt", dt]);
            assert!(parsed.is_err(), "--dt {dt} should be rejected");
        }
    }

    #[test]
    fn frame_cap_after_a_point_reports_no_exit() {
        // Far more points to win than fit in the cap, so the run stops on the
        // cap after at least one respawn
        let summary = (0..32)
            .map(|seed| {
                let seed = seed.to_string();
                run_match(&args(&[
                    "--seed", &seed, "--dt", "0.5", "--frames", "200", "--rounds", "100",
                    "--left", "up", "--right", "down",
                ]))
                .unwrap()
            })
            .find(|s| s.score.0 + s.score.1 > 0)
            .expect("some seed scores a point");
        assert_eq!(summary.state, MatchState::Running);
        assert_eq!(summary.frames, 200);
        assert_eq!(summary.exited, None);
    }

    #[test]
    fn zero_rounds_is_a_config_error() {
        let err = run_match(&args(&["--rounds", "0"])).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn missing_assets_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path().to_string_lossy().into_owned();
        let err = run_match(&args(&["--assets", &dir])).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn recorded_run_can_be_replayed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let path_arg = path.to_string_lossy().into_owned();

        let summary = run_match(&args(&["--frames", "30", "--record", &path_arg])).unwrap();

        let frames = decode_log(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(frames.len() as u64, summary.frames);
        assert_eq!(frames[0].frame, 1);
        assert!(replay(&path).is_ok());
    }
}
