//! Fundamental geometric and simulation types.

use std::fmt;

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::Team;

/// 3D position in arena space. `y` is up; the arena is centred on the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// 3D velocity in arena units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// Orientation as a unit quaternion. The identity faces `+Z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation(pub DQuat);

/// Stable identifier of a combatant, e.g. `allied-0` or `enemy-3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombatantId(pub String);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each active tick).
    pub tick: u64,
    /// Elapsed simulated time since battle start, in milliseconds.
    pub elapsed_ms: u64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }

    /// Distance from the arena origin.
    pub fn radius(&self) -> f64 {
        self.0.length()
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        self.0.length()
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self(DQuat::IDENTITY)
    }
}

impl Orientation {
    /// Unit vector the airframe's nose points along.
    pub fn forward(&self) -> DVec3 {
        self.0 * DVec3::Z
    }

    /// Euler angles (XYZ order, radians) for renderers that want them.
    pub fn euler(&self) -> [f64; 3] {
        let (x, y, z) = self.0.to_euler(glam::EulerRot::XYZ);
        [x, y, z]
    }
}

impl CombatantId {
    pub fn new(team: Team, roster_index: usize) -> Self {
        let prefix = match team {
            Team::Allied => "allied",
            Team::Enemy => "enemy",
        };
        Self(format!("{prefix}-{roster_index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CombatantId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl SimTime {
    /// Advance by one tick of `tick_ms` milliseconds.
    pub fn advance(&mut self, tick_ms: u64) {
        self.tick += 1;
        self.elapsed_ms += tick_ms;
    }
}
