//! Outcome calculation for SKYWARD battles.
//!
//! Decides, before a battle starts, every hit, miss, kill and escape along
//! with the final results. The simulation only replays what this produces.
//! No ECS dependency; operates on roster data alone.

pub mod calculator;
pub mod scripted;
pub mod tactics;

pub use calculator::{Outcome, OutcomeCalculator, SeededCalculator};
pub use scripted::ScriptedOutcome;
pub use skyward_core as core;

#[cfg(test)]
mod tests;
