//! ECS systems that operate on the battle world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod cleanup;
pub mod event_executor;
pub mod movement;
pub mod projectiles;
pub mod respawn;
pub mod sample;
pub mod snapshot;
pub mod steering;
pub mod targeting;
pub mod weapons;
pub mod wreckage;
