//! The read-only world snapshot handed to done conditions.

use glam::Vec3;
use indexmap::IndexMap;

use crate::id::{AgentId, Team};

/// Per-agent termination verdicts, one entry per requested agent.
///
/// Entries follow the order of the `agents` slice passed to
/// [`DoneCondition::is_done`](crate::DoneCondition::is_done).
pub type DoneMap = IndexMap<AgentId, bool>;

/// Euler orientation of a rigid body, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    /// Nose up/down.
    pub pitch: f32,
    /// Heading around the vertical axis.
    pub yaw: f32,
    /// Side up/down.
    pub roll: f32,
}

impl Rotation {
    /// Construct from `(pitch, yaw, roll)`.
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }
}

/// Kinematic state of one rigid body (the ball or a car).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhysicsObject {
    /// World position in unreal units.
    pub position: Vec3,
    /// Orientation.
    pub rotation: Rotation,
    /// Linear velocity in uu/s.
    pub linear_velocity: Vec3,
    /// Angular velocity in rad/s.
    pub angular_velocity: Vec3,
}

/// A car as seen by conditions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Car {
    /// Team the car plays for.
    pub team: Team,
    /// Kinematic state.
    pub physics: PhysicsObject,
}

/// Immutable view of the simulated world at a single step.
///
/// Produced fresh by the harness every step. Conditions only read it.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Physics ticks elapsed since the game process started.
    pub tick_count: u64,
    /// Whether a goal was scored on this step.
    pub goal_scored: bool,
    /// The ball.
    pub ball: PhysicsObject,
    /// Every car, keyed by the agent controlling it.
    pub cars: IndexMap<AgentId, Car>,
}

impl GameState {
    /// An empty field at tick zero.
    pub fn new() -> Self {
        Self {
            tick_count: 0,
            goal_scored: false,
            ball: PhysicsObject::default(),
            cars: IndexMap::new(),
        }
    }

    /// IDs of all agents present in the snapshot, in insertion order.
    pub fn agent_ids(&self) -> Vec<AgentId> {
        self.cars.keys().copied().collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
