//! Tick driver: runs a battle engine at a fixed real-time cadence.
//!
//! The engine is moved into a dedicated thread. Commands arrive via an `mpsc`
//! channel and are applied at the next tick boundary. Every snapshot is stored
//! in shared state for polling; the last one stays there after the battle ends.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skyward_core::commands::BattleCommand;
use skyward_core::state::{BattleResults, BattleState};
use skyward_sim::BattleEngine;

use crate::error::AppError;
use crate::state::DriverCommand;

/// Spawns the tick driver in a new thread.
///
/// Returns the command sender and a handle yielding the battle results once
/// the battle concludes, or `None` if the driver was stopped first.
pub fn spawn_tick_driver(
    engine: BattleEngine,
    latest_snapshot: Arc<Mutex<Option<BattleState>>>,
) -> Result<(mpsc::Sender<DriverCommand>, JoinHandle<Option<BattleResults>>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<DriverCommand>();

    let handle = std::thread::Builder::new()
        .name("skyward-tick-driver".into())
        .spawn(move || run_tick_driver(engine, cmd_rx, &latest_snapshot))
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// The driver loop. Runs until the battle concludes, a Shutdown command
/// arrives, or the channel disconnects.
fn run_tick_driver(
    mut engine: BattleEngine,
    cmd_rx: mpsc::Receiver<DriverCommand>,
    latest_snapshot: &Mutex<Option<BattleState>>,
) -> Option<BattleResults> {
    let tick_duration = Duration::from_millis(engine.config().tick_ms);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(DriverCommand::Command(cmd)) => engine.queue_command(cmd),
                Ok(DriverCommand::Shutdown) => {
                    tracing::debug!("tick driver shut down");
                    return None;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return None,
            }
        }

        // 2. Advance one tick (the engine handles pause semantics internally)
        let snapshot = engine.tick();
        let concluded = snapshot.status.is_terminal();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if concluded {
            return engine.take_results();
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let effective_tick_duration = scaled_tick(tick_duration, engine.time_scale());
        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind: reset rather than spiral
            next_tick_time = now;
        }
    }
}

/// Real-time length of one tick at the given pacing. The engine floors the
/// scale at `MIN_TIME_SCALE`; a non-positive scale falls back to nominal.
pub fn scaled_tick(tick: Duration, time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        tick.div_f64(time_scale)
    } else {
        tick
    }
}

/// Run a battle to completion as fast as possible, with no pacing.
///
/// `force_end_after_ticks` bounds battles that would never end on their
/// own. `on_tick` sees every snapshot, including the final one.
pub fn run_headless(
    engine: &mut BattleEngine,
    force_end_after_ticks: Option<u64>,
    mut on_tick: impl FnMut(&BattleState),
) -> BattleState {
    engine.queue_command(BattleCommand::Start);
    let mut ticks = 0u64;

    loop {
        if force_end_after_ticks.is_some_and(|limit| ticks >= limit) {
            engine.queue_command(BattleCommand::ForceEnd);
        }

        let snapshot = engine.tick();
        ticks += 1;
        on_tick(&snapshot);

        if snapshot.status.is_terminal() {
            return snapshot;
        }
    }
}
