//! Battle simulation for SKYWARD.
//!
//! Owns the hecs ECS world, replays a pre-computed combat schedule at a
//! fixed tick rate, and produces `BattleState` snapshots for renderers.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::BattleEngine;
pub use skyward_core as core;
