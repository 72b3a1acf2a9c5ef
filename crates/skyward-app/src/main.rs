//! SKYWARD battle runner.
//!
//! Resolves one battle headless (as fast as possible) or in real time on the
//! tick driver thread, then prints the results as text or JSON.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use skyward_app::config::SessionConfig;
use skyward_app::demo::demo_setup;
use skyward_app::game_loop;
use skyward_app::state::DriverState;
use skyward_app::AppError;
use skyward_core::commands::BattleCommand;
use skyward_core::config::BattleMode;
use skyward_core::enums::{BattleStatus, Tactic};
use skyward_core::events::Notice;
use skyward_core::state::{BattleResults, BattleState};
use skyward_outcome::SeededCalculator;
use skyward_sim::BattleEngine;

/// Autonomous aerial battle simulation
#[derive(Parser, Debug)]
#[command(name = "skyward")]
#[command(about = "Resolve a SKYWARD air battle and report the outcome")]
struct Args {
    /// Session config (TOML). Flags below override it.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Random seed for the simulation
    #[arg(long)]
    seed: Option<u64>,

    /// Random seed for the outcome dice (defaults to the simulation seed)
    #[arg(long)]
    outcome_seed: Option<u64>,

    /// Demo squadron size (ignored when the config supplies a setup)
    #[arg(long, default_value_t = 4)]
    allied: usize,

    /// Demo enemy count (ignored when the config supplies a setup)
    #[arg(long, default_value_t = 4)]
    enemies: usize,

    /// Squadron tactic for the demo roster
    #[arg(long, value_enum, default_value = "aggressive")]
    tactic: TacticArg,

    /// Battle length in milliseconds
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Never end on time; wreckage respawns until force-ended
    #[arg(long)]
    unbounded: bool,

    /// Force-end an unbounded battle after this many ticks
    #[arg(long, default_value_t = 3_750)]
    max_ticks: u64,

    /// Pace ticks in real time on the driver thread
    #[arg(long)]
    realtime: bool,

    /// Real-time pacing factor (0.1..=4.0)
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// Print combat notices as they happen
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TacticArg {
    Aggressive,
    Defensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON output structure
#[derive(Serialize)]
struct Report {
    status: BattleStatus,
    elapsed_ms: u64,
    ticks: u64,
    executed_events: usize,
    scheduled_events: usize,
    results: Option<BattleResults>,
}

impl From<TacticArg> for Tactic {
    fn from(value: TacticArg) -> Self {
        match value {
            TacticArg::Aggressive => Tactic::Aggressive,
            TacticArg::Defensive => Tactic::Defensive,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    match run(&args) {
        Ok(report) => {
            print_report(&report, args.format);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("skyward: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Report, AppError> {
    let mut session = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    apply_overrides(&mut session, args);
    session.battle.validate()?;

    let setup = session
        .setup
        .clone()
        .unwrap_or_else(|| demo_setup(args.allied, args.enemies, args.tactic.into()));
    let calculator =
        SeededCalculator::new(session.outcome_seed()).with_duration(session.schedule_duration_ms());

    let mut engine = BattleEngine::new(session.battle.clone(), &setup, &calculator)?;
    let force_end_after = session
        .battle
        .mode
        .recycles_wreckage()
        .then_some(args.max_ticks);

    let (last, results) = if args.realtime {
        run_realtime(engine, args, force_end_after)?
    } else {
        let verbose = args.verbose;
        let last = game_loop::run_headless(&mut engine, force_end_after, |snapshot| {
            if verbose {
                log_notices(snapshot);
            }
        });
        (last, engine.take_results())
    };

    Ok(Report {
        status: last.status,
        elapsed_ms: last.time.elapsed_ms,
        ticks: last.time.tick,
        executed_events: last.executed_events.len(),
        scheduled_events: last.scheduled_events.len(),
        results,
    })
}

fn apply_overrides(session: &mut SessionConfig, args: &Args) {
    if let Some(seed) = args.seed {
        session.battle.seed = seed;
    }
    if args.outcome_seed.is_some() {
        session.outcome_seed = args.outcome_seed;
    }
    if args.unbounded {
        session.battle.mode = BattleMode::Unbounded;
    } else if let Some(duration_ms) = args.duration_ms {
        session.battle.mode = BattleMode::FixedDuration { duration_ms };
    }
}

/// Drive the battle on the tick driver thread, polling the shared snapshot.
fn run_realtime(
    engine: BattleEngine,
    args: &Args,
    force_end_after: Option<u64>,
) -> Result<(BattleState, Option<BattleResults>), AppError> {
    let driver = DriverState::new();
    let handle = driver.start(engine)?;
    driver.send(BattleCommand::SetTimeScale {
        scale: args.time_scale,
    })?;
    driver.send(BattleCommand::Start)?;

    let mut seen_tick = 0;
    let mut force_sent = false;
    while !handle.is_finished() {
        std::thread::sleep(Duration::from_millis(50));
        let Some(snapshot) = driver.snapshot()? else {
            continue;
        };
        if snapshot.time.tick == seen_tick {
            continue;
        }
        seen_tick = snapshot.time.tick;
        tracing::debug!(
            elapsed_ms = snapshot.time.elapsed_ms,
            allied = snapshot.active_count(skyward_core::enums::Team::Allied),
            enemy = snapshot.active_count(skyward_core::enums::Team::Enemy),
            "tick"
        );

        if !force_sent && force_end_after.is_some_and(|limit| seen_tick >= limit) {
            driver.send(BattleCommand::ForceEnd)?;
            force_sent = true;
        }
    }

    let results = handle.join().map_err(|_| AppError::DriverPanicked)?;
    let last = driver.snapshot()?.ok_or(AppError::DriverStopped)?;
    Ok((last, results))
}

fn log_notices(snapshot: &BattleState) {
    for notice in &snapshot.notices {
        let at = snapshot.time.elapsed_ms;
        match notice {
            Notice::EventExecuted { event } => {
                tracing::info!(at, "{:?}: {} -> {}", event.kind, event.attacker, event.target)
            }
            Notice::CombatantDestroyed { id, by, .. } => {
                tracing::info!(at, "{id} destroyed by {by}")
            }
            Notice::CombatantRespawned { id, .. } => tracing::info!(at, "{id} rejoined the fight"),
            Notice::BattleConcluded { status, forced } => {
                tracing::info!(at, forced, "battle over: {status:?}")
            }
        }
    }
}

fn print_report(report: &Report, format: OutputFormat) {
    if format == OutputFormat::Json {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("skyward: failed to encode report: {e}"),
        }
        return;
    }

    println!("Status:   {:?}", report.status);
    println!(
        "Duration: {:.1}s ({} ticks)",
        report.elapsed_ms as f64 / 1000.0,
        report.ticks
    );
    println!(
        "Events:   {}/{} executed",
        report.executed_events, report.scheduled_events
    );

    let Some(results) = &report.results else {
        return;
    };
    println!(
        "Allied:   {} surviving, {} lost",
        results.surviving_allied, results.destroyed_allied
    );
    println!(
        "Enemy:    {} surviving, {} destroyed, {} escaped",
        results.surviving_enemy, results.destroyed_enemy, results.enemies_escaped
    );
    println!(
        "Rewards:  {} credits, {} research, {} bonus",
        results.rewards.credits, results.rewards.research_points, results.rewards.high_score_bonus
    );
    for pilot in &results.pilot_stats {
        println!(
            "  {:<10} kills {:>2}  damage {:>6.1}  {}",
            pilot.pilot_id,
            pilot.kills,
            pilot.damage,
            if pilot.survived { "returned" } else { "shot down" }
        );
    }
}
