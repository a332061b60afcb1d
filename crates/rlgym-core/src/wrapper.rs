//! The concrete state initialization handle and partial-axis updates.
//!
//! [`StateWrapper`] is what a harness hands to a
//! [`StateSetter`](crate::StateSetter) at episode start. Setters write
//! through [`PartialVec3`] / [`PartialRotation`] so that a later step of the
//! same reset can touch one axis without disturbing the others.

use glam::Vec3;

use crate::id::{AgentId, Team};
use crate::state::{Car, GameState, PhysicsObject, Rotation};
use crate::traits::{BodyInit, StateInitHandle};

// ── Partial updates ────────────────────────────────────────────────

/// A 3-vector update where each axis is optional.
///
/// `None` leaves the corresponding axis of the target unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialVec3 {
    /// X component.
    pub x: Option<f32>,
    /// Y component.
    pub y: Option<f32>,
    /// Z component.
    pub z: Option<f32>,
}

impl PartialVec3 {
    /// Set every axis.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Also set the X axis.
    pub const fn with_x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }

    /// Also set the Y axis.
    pub const fn with_y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    /// Also set the Z axis.
    pub const fn with_z(mut self, z: f32) -> Self {
        self.z = Some(z);
        self
    }

    /// Write the present axes into `target`.
    pub fn apply(&self, target: &mut Vec3) {
        if let Some(x) = self.x {
            target.x = x;
        }
        if let Some(y) = self.y {
            target.y = y;
        }
        if let Some(z) = self.z {
            target.z = z;
        }
    }
}

impl From<Vec3> for PartialVec3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// An Euler rotation update where each angle is optional.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialRotation {
    /// Pitch in radians.
    pub pitch: Option<f32>,
    /// Yaw in radians.
    pub yaw: Option<f32>,
    /// Roll in radians.
    pub roll: Option<f32>,
}

impl PartialRotation {
    /// Set every angle.
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self {
            pitch: Some(pitch),
            yaw: Some(yaw),
            roll: Some(roll),
        }
    }

    /// Also set pitch.
    pub const fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Also set yaw.
    pub const fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = Some(yaw);
        self
    }

    /// Also set roll.
    pub const fn with_roll(mut self, roll: f32) -> Self {
        self.roll = Some(roll);
        self
    }

    /// Write the present angles into `target`.
    pub fn apply(&self, target: &mut Rotation) {
        if let Some(pitch) = self.pitch {
            target.pitch = pitch;
        }
        if let Some(yaw) = self.yaw {
            target.yaw = yaw;
        }
        if let Some(roll) = self.roll {
            target.roll = roll;
        }
    }
}

impl From<Rotation> for PartialRotation {
    fn from(r: Rotation) -> Self {
        Self::new(r.pitch, r.yaw, r.roll)
    }
}

// ── Body and state wrappers ────────────────────────────────────────

/// A writable rigid body inside a [`StateWrapper`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyWrapper {
    /// The body's current kinematic state.
    pub physics: PhysicsObject,
}

impl BodyInit for BodyWrapper {
    fn set_position(&mut self, position: PartialVec3) {
        position.apply(&mut self.physics.position);
    }

    fn set_rotation(&mut self, rotation: PartialRotation) {
        rotation.apply(&mut self.physics.rotation);
    }

    fn set_linear_velocity(&mut self, velocity: PartialVec3) {
        velocity.apply(&mut self.physics.linear_velocity);
    }

    fn set_angular_velocity(&mut self, velocity: PartialVec3) {
        velocity.apply(&mut self.physics.angular_velocity);
    }
}

/// A car slot inside a [`StateWrapper`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarWrapper {
    /// The agent controlling this car.
    pub id: AgentId,
    /// Team assignment.
    pub team: Team,
    /// Writable body.
    pub body: BodyWrapper,
}

/// Mutable initial state of an episode: the ball plus one slot per car.
///
/// Every body starts at rest at the origin; a state setter then writes
/// through [`StateInitHandle`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateWrapper {
    /// The ball.
    pub ball: BodyWrapper,
    /// Car slots, blue team first.
    pub cars: Vec<CarWrapper>,
}

impl StateWrapper {
    /// Build a wrapper with `blue_count` blue and `orange_count` orange cars.
    ///
    /// Agent IDs are assigned sequentially from zero, blue team first. Team
    /// sizes are `u16`, so every ID fits in an [`AgentId`].
    pub fn new(blue_count: u16, orange_count: u16) -> Self {
        let teams = std::iter::repeat(Team::Blue)
            .take(usize::from(blue_count))
            .chain(std::iter::repeat(Team::Orange).take(usize::from(orange_count)));
        let cars = (0u32..)
            .zip(teams)
            .map(|(id, team)| CarWrapper {
                id: AgentId(id),
                team,
                body: BodyWrapper::default(),
            })
            .collect();
        Self {
            ball: BodyWrapper::default(),
            cars,
        }
    }

    /// Capture the bodies of an existing snapshot.
    pub fn from_game_state(state: &GameState) -> Self {
        let cars = state
            .cars
            .iter()
            .map(|(&id, car)| CarWrapper {
                id,
                team: car.team,
                body: BodyWrapper {
                    physics: car.physics,
                },
            })
            .collect();
        Self {
            ball: BodyWrapper {
                physics: state.ball,
            },
            cars,
        }
    }

    /// Materialize the initial snapshot of the episode at `tick_count`.
    pub fn into_game_state(self, tick_count: u64) -> GameState {
        let cars = self
            .cars
            .into_iter()
            .map(|slot| {
                (
                    slot.id,
                    Car {
                        team: slot.team,
                        physics: slot.body.physics,
                    },
                )
            })
            .collect();
        GameState {
            tick_count,
            goal_scored: false,
            ball: self.ball.physics,
            cars,
        }
    }
}

impl StateInitHandle for StateWrapper {
    fn ball_mut(&mut self) -> &mut dyn BodyInit {
        &mut self.ball
    }

    fn car_count(&self) -> usize {
        self.cars.len()
    }

    fn car_mut(&mut self, index: usize) -> Option<&mut dyn BodyInit> {
        self.cars
            .get_mut(index)
            .map(|slot| &mut slot.body as &mut dyn BodyInit)
    }

    fn car_ids(&self) -> Vec<AgentId> {
        self.cars.iter().map(|slot| slot.id).collect()
    }
}
