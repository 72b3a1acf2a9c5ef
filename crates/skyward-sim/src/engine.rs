//! Battle engine: the core of the simulation.
//!
//! `BattleEngine` owns the hecs ECS world, processes battle commands,
//! replays the pre-computed schedule, runs all systems, and produces
//! `BattleState` snapshots. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyward_core::commands::BattleCommand;
use skyward_core::config::BattleConfig;
use skyward_core::constants::{MAX_TIME_SCALE, MIN_TIME_SCALE};
use skyward_core::enums::{BattleStatus, Tactic};
use skyward_core::error::{Result, SetupError};
use skyward_core::events::{CombatEvent, Notice};
use skyward_core::roster::BattleSetup;
use skyward_core::state::{BattleResults, BattleState};
use skyward_core::types::SimTime;
use skyward_outcome::{Outcome, OutcomeCalculator};

use crate::systems;
use crate::world_setup::{self, RosterIndex};

/// The battle engine. Owns the ECS world and all battle state.
pub struct BattleEngine {
    world: World,
    config: BattleConfig,
    time: SimTime,
    status: BattleStatus,
    paused: bool,
    time_scale: f64,
    tactic: Tactic,
    rng: ChaCha8Rng,
    roster: RosterIndex,
    command_queue: VecDeque<BattleCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    next_projectile_id: u64,
    notices: Vec<Notice>,

    scheduled_events: Vec<CombatEvent>,
    executed_events: Vec<CombatEvent>,
    results: BattleResults,
    unclaimed_results: Option<BattleResults>,
    end_time_ms: Option<u64>,
}

impl BattleEngine {
    /// Validate the setup, run the outcome calculator once and populate the
    /// world. The battle starts in `Preparing`; queue `Start` to begin.
    pub fn new(
        config: BattleConfig,
        setup: &BattleSetup,
        calculator: &dyn OutcomeCalculator,
    ) -> Result<Self> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, setup, calculator, rng)
    }

    /// Same as [`BattleEngine::new`] with an explicitly supplied random source.
    pub fn with_rng(
        config: BattleConfig,
        setup: &BattleSetup,
        calculator: &dyn OutcomeCalculator,
        rng: ChaCha8Rng,
    ) -> Result<Self> {
        config.validate()?;
        let mission = setup.validate()?;
        let outcome = calculator.compute(&setup.squadron, &setup.pilots, mission, setup.tactic);
        Self::from_outcome(config, setup, outcome, rng)
    }

    /// Build an engine around an outcome that was computed elsewhere.
    pub fn from_outcome(
        config: BattleConfig,
        setup: &BattleSetup,
        outcome: Outcome,
        mut rng: ChaCha8Rng,
    ) -> Result<Self> {
        config.validate()?;
        let mission = setup.validate()?;
        check_schedule(&outcome.events)?;

        let mut world = World::new();
        let roster = world_setup::setup_battle(
            &mut world,
            &mut rng,
            &setup.squadron,
            &setup.pilots,
            mission,
            config.cruise_speed,
        );

        tracing::info!(
            mission = %mission.id,
            allied = setup.squadron.len(),
            enemy = mission.enemy_count,
            events = outcome.events.len(),
            "battle prepared"
        );

        Ok(Self {
            world,
            config,
            time: SimTime::default(),
            status: BattleStatus::Preparing,
            paused: false,
            time_scale: 1.0,
            tactic: setup.tactic,
            rng,
            roster,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            next_projectile_id: 0,
            notices: Vec::new(),
            scheduled_events: outcome.events,
            executed_events: Vec::new(),
            results: outcome.results,
            unclaimed_results: None,
            end_time_ms: None,
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: BattleCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = BattleCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the battle by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> BattleState {
        self.process_commands();

        if self.status == BattleStatus::Active && !self.paused {
            self.time.advance(self.config.tick_ms);
            self.run_systems();
            // Termination last: the closing tick still applies its due events.
            if self.config.mode.time_expired(self.time.elapsed_ms) {
                self.conclude(false);
            }
        }

        self.snapshot()
    }

    /// Get the current battle status.
    pub fn status(&self) -> BattleStatus {
        self.status
    }

    /// Get the current battle clock.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Whether the clock is frozen.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get the current real-time pacing factor.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Hand over the final results. `Some` exactly once, after the battle ends.
    pub fn take_results(&mut self) -> Option<BattleResults> {
        self.unclaimed_results.take()
    }

    /// Mutable world access for tests that need to stage positions.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: BattleCommand) {
        match command {
            BattleCommand::Start => {
                if self.status == BattleStatus::Preparing {
                    self.status = BattleStatus::Active;
                    self.time = SimTime::default();
                    tracing::info!(mode = ?self.config.mode, "battle started");
                }
            }
            BattleCommand::Pause => {
                if self.status == BattleStatus::Active {
                    self.paused = true;
                }
            }
            BattleCommand::Resume => {
                if self.status == BattleStatus::Active {
                    self.paused = false;
                }
            }
            BattleCommand::ForceEnd => {
                if self.status == BattleStatus::Active {
                    self.conclude(true);
                }
            }
            BattleCommand::SetTimeScale { scale } => {
                self.time_scale = if scale.is_finite() {
                    scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE)
                } else {
                    1.0
                };
            }
        }
    }

    /// Terminal transition. Status follows the pre-computed victory flag.
    fn conclude(&mut self, forced: bool) {
        self.status = BattleStatus::concluded(self.results.victory);
        self.paused = false;
        self.end_time_ms = Some(self.time.elapsed_ms);
        self.unclaimed_results = Some(self.results.clone());
        self.notices.push(Notice::BattleConcluded {
            status: self.status,
            forced,
        });
        tracing::info!(
            status = ?self.status,
            forced,
            elapsed_ms = self.time.elapsed_ms,
            executed = self.executed_events.len(),
            "battle concluded"
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_ms;
        let dt = self.config.dt();

        // 1. Scheduled events (destruction, projectiles)
        systems::event_executor::run(
            &mut self.world,
            &self.roster,
            &self.scheduled_events,
            &mut self.executed_events,
            now,
            &mut self.rng,
            &mut self.next_projectile_id,
            &mut self.notices,
        );
        // 2. Target acquisition
        systems::targeting::run(&mut self.world, &mut self.rng);
        // 3. Steering and flocking
        let aims = systems::steering::run(&mut self.world, &self.config);
        // 4. Flight integration
        systems::movement::run(&mut self.world, &aims, &self.config);
        // 5. Guns and flares
        systems::weapons::run(
            &mut self.world,
            self.config.tick_ms,
            now,
            &mut self.rng,
            &mut self.next_projectile_id,
        );
        // 6. Wreckage physics
        systems::wreckage::run(&mut self.world, &self.config);
        // 7. Respawn
        if self.config.mode.recycles_wreckage() {
            systems::respawn::run(
                &mut self.world,
                &mut self.rng,
                now,
                self.config.respawn_delay_ms,
                &mut self.notices,
            );
        }
        // 8. Transient objects
        systems::projectiles::run(&mut self.world, dt, self.config.gravity);
        // 9. Cleanup (expired projectiles)
        systems::cleanup::run(&mut self.world, now, &mut self.despawn_buffer);
    }

    fn snapshot(&mut self) -> BattleState {
        let (allied, enemy) = systems::snapshot::build_rosters(&self.world);
        BattleState {
            status: self.status,
            time: self.time,
            end_time_ms: self.end_time_ms,
            paused: self.paused,
            tactic: self.tactic,
            allied,
            enemy,
            scheduled_events: self.scheduled_events.clone(),
            executed_events: self.executed_events.clone(),
            projectiles: systems::snapshot::build_projectiles(&self.world, self.time.elapsed_ms),
            results: self
                .status
                .is_terminal()
                .then(|| self.results.clone()),
            notices: std::mem::take(&mut self.notices),
        }
    }
}

fn check_schedule(events: &[CombatEvent]) -> Result<()> {
    match events
        .windows(2)
        .position(|w| w[1].timestamp_ms < w[0].timestamp_ms)
    {
        Some(i) => Err(SetupError::UnsortedSchedule {
            index: i + 1,
            timestamp_ms: events[i + 1].timestamp_ms,
        }),
        None => Ok(()),
    }
}
