// ABOUTME: Terminal front end that runs a simulated live workout session
// ABOUTME: Reads one-letter commands from stdin and prints snapshots and the final summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Live workout simulator.
//!
//! Usage:
//! ```bash
//! # Default five-exercise workout, real-time timers
//! cargo run --bin formcoach
//!
//! # Custom plan, reproducible form feedback, ten times faster, hands-free
//! cargo run --bin formcoach -- --plan plan.json --seed 42 --speed 10 --auto
//!
//! # Walk through the denied-camera flow, JSON output
//! cargo run --bin formcoach -- --deny-camera --json
//! ```
//!
//! Commands (type a letter and press enter): `p` pause/resume, `n` next,
//! `s` skip, `m` mute, `q` end workout, `o` open camera settings,
//! `r` request camera access, `x` exit setup.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use formcoach::config::{environment::load_plan_file, SessionConfig, TimingConfig};
use formcoach::logging;
use formcoach::models::{PermissionState, SessionSummary};
use formcoach::session::{
    SessionCommand, SessionEvent, SessionOutcome, SessionRunner, SessionSnapshot,
    SimulatedCamera, WorkoutSession,
};

const COMMAND_BUFFER: usize = 32;

#[derive(Parser)]
#[command(
    name = "formcoach",
    about = "Formcoach Live Workout Simulator",
    long_about = "Run a simulated live workout: camera permission, rep counting, form feedback, and tempo guidance"
)]
struct Args {
    /// JSON plan file (array of {name, target_reps, tempo})
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Seed for reproducible form feedback
    #[arg(long)]
    seed: Option<u64>,

    /// Simulate a camera that denies access until settings are opened
    #[arg(long)]
    deny_camera: bool,

    /// Move to the next exercise automatically once its target is reached
    #[arg(long)]
    auto: bool,

    /// Print snapshots, events, and the summary as JSON lines
    #[arg(long)]
    json: bool,

    /// Run every timer this many times faster
    #[arg(long)]
    speed: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let mut config = SessionConfig::from_env()?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(factor) = args.speed {
        config.timing = TimingConfig::accelerated(factor);
    }
    config.validate()?;
    debug!("{}", config.summary());

    let plan = match &args.plan {
        Some(path) => load_plan_file(path)?,
        None => config.load_plan()?,
    };

    let mut builder = WorkoutSession::builder(plan).timing(config.timing);
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }
    if args.deny_camera {
        builder = builder.camera(SimulatedCamera::denying());
    }
    let session = builder.build();

    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    tx.send(SessionCommand::RequestPermission)
        .await
        .context("Failed to queue camera permission request")?;
    spawn_stdin_reader(tx.clone());

    if !args.json {
        println!("Commands: p pause | n next | s skip | m mute | q end | o settings | x exit");
    }

    let auto_tx = args.auto.then(|| tx.clone());
    drop(tx);
    let mut auto_advanced: Option<usize> = None;
    let json_output = args.json;

    let outcome = SessionRunner::new(session)
        .run(rx, |snapshot, events| {
            render(snapshot, events, json_output);
            if let Some(auto_tx) = &auto_tx {
                auto_advance(auto_tx, snapshot, &mut auto_advanced);
            }
        })
        .await;

    match outcome {
        SessionOutcome::Finished(summary) => print_summary(&summary, json_output)?,
        SessionOutcome::Exited => {
            if json_output {
                println!("{}", json!({ "outcome": "exited" }));
            } else {
                println!("Workout exited before it started.");
            }
        }
    }
    Ok(())
}

/// Forward stdin lines as session commands until EOF
fn spawn_stdin_reader(tx: mpsc::Sender<SessionCommand>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let Some(command) = SessionCommand::from_input(&line) else {
                        if !line.trim().is_empty() {
                            warn!(input = %line.trim(), "Unknown command");
                        }
                        continue;
                    };
                    if tx.send(command).await.is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    debug!("stdin closed");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
    });
}

/// Queue one `Advance` per exercise once its target is reached
fn auto_advance(
    tx: &mpsc::Sender<SessionCommand>,
    snapshot: &SessionSnapshot,
    auto_advanced: &mut Option<usize>,
) {
    let ready = !snapshot.ended
        && !snapshot.paused
        && snapshot.permission == PermissionState::Granted
        && snapshot.reps >= snapshot.target_reps
        && *auto_advanced != Some(snapshot.exercise_number);
    if ready {
        *auto_advanced = Some(snapshot.exercise_number);
        if let Err(e) = tx.try_send(SessionCommand::Advance) {
            warn!(error = %e, "Failed to queue automatic advance");
        }
    }
}

fn render(snapshot: &SessionSnapshot, events: &[SessionEvent], json_output: bool) {
    if json_output {
        println!("{}", json!({ "snapshot": snapshot, "events": events }));
        return;
    }
    if snapshot.ended {
        return;
    }
    // Clock ticks alone redraw every second; only print when something else changed
    let interesting = events.is_empty()
        || events
            .iter()
            .any(|event| !matches!(event, SessionEvent::ClockTicked { .. }));
    if interesting {
        println!("{snapshot}");
    }
}

fn print_summary(summary: &SessionSummary, json_output: bool) -> Result<()> {
    if json_output {
        let summary =
            serde_json::to_value(summary).context("Failed to serialize workout summary")?;
        println!("{}", json!({ "outcome": "finished", "summary": summary }));
        return Ok(());
    }

    info!(session.id = %summary.session_id, "Printing workout summary");
    println!();
    println!(
        "Workout {}",
        if summary.completed {
            "complete"
        } else {
            "ended early"
        }
    );
    println!(
        "Duration {} | Form score {} | Calories {} | Reps {}",
        summary.duration, summary.form_score, summary.calories, summary.total_reps
    );
    println!("{}", summary.headline);
    for exercise in &summary.exercise_breakdown {
        println!(
            "  {:<12} {:>3}/{:<3} form {:>3}",
            exercise.name, exercise.reps, exercise.target_reps, exercise.form_score
        );
    }
    for note in &summary.improvements {
        println!("  + {note}");
    }
    for note in &summary.corrections {
        println!("  - {note}");
    }
    Ok(())
}
