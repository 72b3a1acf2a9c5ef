//! SKYWARD application layer.
//!
//! Wires the outcome calculator and the battle engine together, drives a
//! battle on its own thread at a fixed cadence, and loads session config.

pub mod config;
pub mod demo;
pub mod error;
pub mod game_loop;
pub mod state;

pub use error::{AppError, ConfigError};
pub use skyward_core as core;
