//! State shared between a battle's owner and its tick driver thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use skyward_core::commands::BattleCommand;
use skyward_core::state::{BattleResults, BattleState};
use skyward_sim::BattleEngine;

use crate::error::AppError;
use crate::game_loop;

/// Messages sent to the tick driver thread.
#[derive(Debug)]
pub enum DriverCommand {
    /// A battle command to forward to the engine.
    Command(BattleCommand),
    /// Stop the driver at the next tick boundary.
    Shutdown,
}

/// Handle side of a running driver.
///
/// - `command_tx` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `latest_snapshot` is written by the driver after every tick
pub struct DriverState {
    /// `None` before the driver is spawned or after it has been stopped.
    pub command_tx: Mutex<Option<mpsc::Sender<DriverCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<BattleState>>>,
}

impl Default for DriverState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl DriverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `engine` onto a new driver thread. Fails if one is already attached.
    pub fn start(&self, engine: BattleEngine) -> Result<JoinHandle<Option<BattleResults>>, AppError> {
        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        if tx_lock.is_some() {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) = game_loop::spawn_tick_driver(engine, self.latest_snapshot.clone())?;
        *tx_lock = Some(cmd_tx);
        Ok(handle)
    }

    /// Forward a battle command to the driver.
    pub fn send(&self, command: BattleCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(DriverCommand::Command(command))
                .map_err(|_| AppError::DriverStopped),
            None => Err(AppError::DriverStopped),
        }
    }

    /// Ask the driver to stop. Dropping the sender also stops it.
    pub fn shutdown(&self) -> Result<(), AppError> {
        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        if let Some(tx) = tx_lock.take() {
            // A driver that already exited has dropped its receiver.
            let _ = tx.send(DriverCommand::Shutdown);
        }
        Ok(())
    }

    /// Latest published snapshot, if any tick has run.
    pub fn snapshot(&self) -> Result<Option<BattleState>, AppError> {
        let lock = self.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
        Ok(lock.clone())
    }
}
