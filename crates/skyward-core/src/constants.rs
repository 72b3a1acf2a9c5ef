//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind `BattleConfig`; systems read the config,
//! never these values directly, unless noted otherwise.

/// Duration of one simulation tick (ms). ~60 Hz.
pub const TICK_MS: u64 = 16;

/// Default battle length for the fixed-duration mode (ms).
pub const BATTLE_DURATION_MS: u64 = 30_000;

// --- Arena ---

/// Radius of the arena sphere. Anything farther out wraps through the origin.
pub const WORLD_RADIUS: f64 = 120.0;

/// Spawn ring radius for the allied squadron.
pub const ALLIED_STANDOFF_RADIUS: f64 = 40.0;

/// Spawn ring radius for the enemy formation.
pub const ENEMY_STANDOFF_RADIUS: f64 = 60.0;

/// Vertical jitter applied to respawn positions on the standoff ring.
pub const RESPAWN_ALTITUDE_JITTER: f64 = 10.0;

// --- Flight ---

/// Cruise speed (units per second).
pub const CRUISE_SPEED: f64 = 30.0;

/// Maximum turn rate (radians per second).
pub const TURN_RATE: f64 = 2.0;

/// Velocity blend rate toward the desired velocity (per second).
pub const VELOCITY_BLEND_RATE: f64 = 3.0;

/// Look-ahead distance used when a combatant has no target and flies straight.
pub const STRAIGHT_FLIGHT_LOOKAHEAD: f64 = 50.0;

// --- Flocking (allied only) ---

/// Distance from the squadron centroid before cohesion engages.
pub const COHESION_RADIUS: f64 = 35.0;

/// Cohesion pull per cohesion-radius of excess distance.
pub const COHESION_STRENGTH: f64 = 0.5;

/// Cap on the fraction of the way the aim point moves toward the centroid.
pub const MAX_COHESION_PULL: f64 = 0.4;

/// Wingmen closer than this push each other's aim points apart.
pub const AVOIDANCE_RADIUS: f64 = 12.0;

/// Scale of the quadratic avoidance falloff.
pub const AVOIDANCE_STRENGTH: f64 = 0.6;

/// Cap on the avoidance push, as a fraction of the aim distance.
pub const MAX_AVOIDANCE_PUSH: f64 = 0.5;

// --- Wreckage & respawn ---

/// Linear drag on falling wreckage (per second).
pub const WRECK_DRAG: f64 = 0.4;

/// Gravity applied to wreckage and flares (units per second squared).
pub const GRAVITY: f64 = 9.8;

/// Maximum spin rate of wreckage about each axis (radians per second).
pub const WRECK_MAX_SPIN: f64 = 4.0;

/// Delay between destruction and respawn (ms).
pub const RESPAWN_DELAY_MS: u64 = 3_000;

/// Health every combatant starts and respawns with.
pub const MAX_HEALTH: f64 = 100.0;

// --- Transient objects ---

/// Colour tag for event-driven projectiles.
pub const PROJECTILE_COLOR: u32 = 0x00B4D8;

/// Lifespan of event-driven projectiles (ms).
pub const PROJECTILE_LIFESPAN_MS: u64 = 2_000;

/// Full width of the random velocity spread for event-driven projectiles.
pub const PROJECTILE_SPREAD: f64 = 5.0;

/// Colour tag for tracers.
pub const TRACER_COLOR: u32 = 0xFFD166;

/// Lifespan of tracer rounds (ms).
pub const TRACER_LIFESPAN_MS: u64 = 600;

/// Tracer muzzle speed (units per second, added to the shooter's velocity).
pub const TRACER_SPEED: f64 = 90.0;

/// Maximum gun range.
pub const GUN_RANGE: f64 = 45.0;

/// Cosine of the gun cone half-angle (~18 degrees).
pub const GUN_CONE_COS: f64 = 0.95;

/// Gun cooldown range (ms), re-rolled after every burst.
pub const GUN_COOLDOWN_MIN_MS: u64 = 400;
pub const GUN_COOLDOWN_MAX_MS: u64 = 900;

/// Colour tag for flares.
pub const FLARE_COLOR: u32 = 0xFF7F11;

/// Lifespan of flares (ms).
pub const FLARE_LIFESPAN_MS: u64 = 1_500;

/// A pursuer within this distance makes a combatant drop flares.
pub const FLARE_THREAT_RANGE: f64 = 35.0;

/// Flare cooldown range (ms).
pub const FLARE_COOLDOWN_MIN_MS: u64 = 2_500;
pub const FLARE_COOLDOWN_MAX_MS: u64 = 5_000;

// --- Pacing ---

/// Real-time pacing bounds for `SetTimeScale`. The floor keeps a running
/// clock from stalling; use `Pause` to stop it.
pub const MIN_TIME_SCALE: f64 = 0.1;
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Roster defaults ---

/// Intelligence/endurance used when an allied jet has no assigned pilot on file.
pub const DEFAULT_PILOT_ATTRIBUTE: f64 = 50.0;
