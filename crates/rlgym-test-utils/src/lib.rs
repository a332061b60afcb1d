//! Test utilities and mock types for rlgym-rs development.
//!
//! Provides a [`GameStateBuilder`] for snapshots, a [`RecordingStateHandle`]
//! that counts setter invocations per body, and the mock done conditions in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    CallLog, ConditionCall, ConstCondition, FixedCondition, RecordingCondition, RESET_COUNTER_KEY,
};

use rlgym_core::{
    AgentId, BodyInit, BodyWrapper, Car, GameState, PartialRotation, PartialVec3, PhysicsObject,
    StateInitHandle, StateWrapper, Team,
};

/// Builder for [`GameState`] snapshots.
pub struct GameStateBuilder {
    state: GameState,
}

impl GameStateBuilder {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    pub fn tick(mut self, tick_count: u64) -> Self {
        self.state.tick_count = tick_count;
        self
    }

    pub fn goal_scored(mut self, goal_scored: bool) -> Self {
        self.state.goal_scored = goal_scored;
        self
    }

    /// Add a resting car for `id` at the origin.
    pub fn car(mut self, id: u32, team: Team) -> Self {
        self.state.cars.insert(
            AgentId(id),
            Car {
                team,
                physics: PhysicsObject::default(),
            },
        );
        self
    }

    /// Add `count` blue cars with IDs `0..count`.
    pub fn cars(mut self, count: u32) -> Self {
        for id in 0..count {
            self = self.car(id, Team::Blue);
        }
        self
    }

    pub fn build(self) -> GameState {
        self.state
    }
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for `[AgentId(0), .., AgentId(n - 1)]`.
pub fn agents(n: u32) -> Vec<AgentId> {
    (0..n).map(AgentId).collect()
}

/// Number of times each setter of a body was invoked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BodyCalls {
    pub position: usize,
    pub rotation: usize,
    pub linear_velocity: usize,
    pub angular_velocity: usize,
}

/// A [`BodyWrapper`] that counts setter calls before forwarding them.
#[derive(Clone, Debug, Default)]
pub struct RecordingBody {
    pub body: BodyWrapper,
    pub calls: BodyCalls,
}

impl BodyInit for RecordingBody {
    fn set_position(&mut self, position: PartialVec3) {
        self.calls.position += 1;
        self.body.set_position(position);
    }

    fn set_rotation(&mut self, rotation: PartialRotation) {
        self.calls.rotation += 1;
        self.body.set_rotation(rotation);
    }

    fn set_linear_velocity(&mut self, velocity: PartialVec3) {
        self.calls.linear_velocity += 1;
        self.body.set_linear_velocity(velocity);
    }

    fn set_angular_velocity(&mut self, velocity: PartialVec3) {
        self.calls.angular_velocity += 1;
        self.body.set_angular_velocity(velocity);
    }
}

/// Mock [`StateInitHandle`] recording every setter call per body.
///
/// Wraps a [`StateWrapper`] layout; inspect results with
/// [`ball`](RecordingStateHandle::ball) and [`car`](RecordingStateHandle::car).
pub struct RecordingStateHandle {
    ids: Vec<AgentId>,
    ball: RecordingBody,
    cars: Vec<RecordingBody>,
}

impl RecordingStateHandle {
    /// A handle over `car_count` cars with IDs `0..car_count`.
    pub fn new(car_count: u16) -> Self {
        Self::from_wrapper(&StateWrapper::new(car_count, 0))
    }

    /// Start from the bodies of an existing wrapper.
    pub fn from_wrapper(wrapper: &StateWrapper) -> Self {
        Self {
            ids: wrapper.car_ids(),
            ball: RecordingBody {
                body: wrapper.ball,
                calls: BodyCalls::default(),
            },
            cars: wrapper
                .cars
                .iter()
                .map(|slot| RecordingBody {
                    body: slot.body,
                    calls: BodyCalls::default(),
                })
                .collect(),
        }
    }

    pub fn ball(&self) -> &RecordingBody {
        &self.ball
    }

    pub fn car(&self, index: usize) -> &RecordingBody {
        &self.cars[index]
    }

    pub fn cars(&self) -> &[RecordingBody] {
        &self.cars
    }

    /// Zero every call counter, keeping body values.
    pub fn clear_calls(&mut self) {
        self.ball.calls = BodyCalls::default();
        for car in &mut self.cars {
            car.calls = BodyCalls::default();
        }
    }
}

impl StateInitHandle for RecordingStateHandle {
    fn ball_mut(&mut self) -> &mut dyn BodyInit {
        &mut self.ball
    }

    fn car_count(&self) -> usize {
        self.cars.len()
    }

    fn car_mut(&mut self, index: usize) -> Option<&mut dyn BodyInit> {
        self.cars
            .get_mut(index)
            .map(|car| car as &mut dyn BodyInit)
    }

    fn car_ids(&self) -> Vec<AgentId> {
        self.ids.clone()
    }
}
