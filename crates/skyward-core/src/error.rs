//! Errors raised while setting up a battle.
//!
//! Nothing inside the tick loop returns an error; everything there degrades
//! to a no-op. These cover the preconditions checked before a battle exists.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetupError {
    #[error("no mission supplied")]
    MissingMission,

    #[error("squadron roster is empty")]
    EmptyRoster,

    #[error("mission {0:?} has no enemies")]
    NoEnemies(String),

    #[error("{owner}: {stat} must be a finite, non-negative number (got {value})")]
    InvalidStat {
        owner: String,
        stat: &'static str,
        value: f64,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("scheduled event {index} at {timestamp_ms}ms is earlier than its predecessor")]
    UnsortedSchedule { index: usize, timestamp_ms: u64 },
}

pub type Result<T> = std::result::Result<T, SetupError>;
