//! Randomized initial-state setter.
//!
//! Per reset, for the ball and then each car in index order:
//!
//! 1. Position: `x`, `y` uniform within the field bounds, `z` triangular
//!    peaking at the lowest allowed height.
//! 2. Cars only: pitch, yaw, and roll uniform within the rotation bounds.
//! 3. With the body's random-speed probability: linear and angular
//!    velocity with uniformly random directions and triangular magnitudes
//!    peaking at zero.
//! 4. Cars only, with `agent_on_ground_probability`: snap to resting on the
//!    ground (`z`, vertical velocity, pitch, roll, and x/y angular velocity
//!    overwritten; everything else kept).
//!
//! Each body makes its own independent draws from the instance's generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rlgym_core::{
    BodyInit, ConfigError, PartialRotation, PartialVec3, StateInitHandle, StateSetter,
};
use serde::{Deserialize, Serialize};

use crate::bounds::FieldBounds;
use crate::sampling::{chance, random_velocity, triangular, uniform};

// ── RandomStateConfig ──────────────────────────────────────────────

/// Configuration for [`RandomState`].
///
/// Plain data so a harness can load it from a file. Missing entries take
/// their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomStateConfig {
    /// Chance the ball gets a random linear and angular velocity. Default: 0.
    pub ball_random_speed_probability: f64,
    /// Chance each car gets a random linear and angular velocity. Default: 0.
    pub agent_random_speed_probability: f64,
    /// Chance each car is snapped onto the ground. Default: 1.
    pub agent_on_ground_probability: f64,
    /// Spawn limits. Default: [`FieldBounds::standard`].
    pub bounds: FieldBounds,
}

impl Default for RandomStateConfig {
    fn default() -> Self {
        Self {
            ball_random_speed_probability: 0.0,
            agent_random_speed_probability: 0.0,
            agent_on_ground_probability: 1.0,
            bounds: FieldBounds::standard(),
        }
    }
}

impl RandomStateConfig {
    /// Validate probabilities and bounds.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidProbability`] for a NaN or out-of-range
    /// probability; [`ConfigError::InvalidBounds`] from
    /// [`FieldBounds::validate`]. Values are never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let probabilities = [
            (
                "ball_random_speed_probability",
                self.ball_random_speed_probability,
            ),
            (
                "agent_random_speed_probability",
                self.agent_random_speed_probability,
            ),
            ("agent_on_ground_probability", self.agent_on_ground_probability),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        self.bounds.validate()
    }
}

// ── RandomState ────────────────────────────────────────────────────

/// A [`StateSetter`] producing a random, bounds-valid kickoff-free state.
///
/// Owns its generator; two instances never share random state. Use
/// [`RandomState::builder`] for the common seeded case or
/// [`RandomState::with_rng`] to inject any [`Rng`].
///
/// # Examples
///
/// ```
/// use rlgym_core::{StateSetter, StateWrapper};
/// use rlgym_state::RandomState;
///
/// let mut setter = RandomState::builder()
///     .ball_random_speed_probability(0.5)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut wrapper = StateWrapper::new(1, 1);
/// setter.reset(&mut wrapper);
/// let state = wrapper.into_game_state(0);
/// assert!(state.ball.position.z >= 92.75);
/// ```
#[derive(Debug)]
pub struct RandomState<R = ChaCha8Rng> {
    config: RandomStateConfig,
    rng: R,
}

impl RandomState {
    /// Create a new builder with default probabilities and an entropy seed.
    pub fn builder() -> RandomStateBuilder {
        RandomStateBuilder {
            config: RandomStateConfig::default(),
            seed: None,
        }
    }

    /// Build from `config` with a ChaCha8 generator seeded from `seed`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `config` fails [`RandomStateConfig::validate`].
    pub fn new(config: RandomStateConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomState<R> {
    /// Build from `config` drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `config` fails [`RandomStateConfig::validate`].
    pub fn with_rng(config: RandomStateConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "RandomState: ball_speed_p={} agent_speed_p={} on_ground_p={}",
            config.ball_random_speed_probability,
            config.agent_random_speed_probability,
            config.agent_on_ground_probability,
        );
        Ok(Self { config, rng })
    }

    /// The validated configuration.
    pub fn config(&self) -> &RandomStateConfig {
        &self.config
    }

    fn reset_ball_random(&mut self, ball: &mut dyn BodyInit) {
        let b = self.config.bounds;
        let rng = &mut self.rng;

        let x = uniform(rng, -b.x_max, b.x_max);
        let y = uniform(rng, -b.y_max, b.y_max);
        let z = triangular(rng, b.ball_z_min, b.ball_z_min, b.ball_z_max);
        ball.set_position(PartialVec3::new(x, y, z));
        log::trace!("ball placed at ({x:.1}, {y:.1}, {z:.1})");

        if chance(rng, self.config.ball_random_speed_probability) {
            let linear = random_velocity(rng, b.ball_max_speed);
            let angular = random_velocity(rng, b.ball_max_ang_vel);
            ball.set_linear_velocity(linear.into());
            ball.set_angular_velocity(angular.into());
        }
    }

    fn reset_car_random(&mut self, car: &mut dyn BodyInit) {
        let b = self.config.bounds;
        let rng = &mut self.rng;

        let x = uniform(rng, -b.x_max, b.x_max);
        let y = uniform(rng, -b.y_max, b.y_max);
        let z = triangular(rng, b.car_z_min, b.car_z_min, b.car_z_max);
        car.set_position(PartialVec3::new(x, y, z));

        // Yaw's upper bound is roll_max, matching the established range.
        let pitch = uniform(rng, -b.pitch_max, b.pitch_max);
        let yaw = uniform(rng, -b.yaw_max, b.roll_max);
        let roll = uniform(rng, -b.roll_max, b.roll_max);
        car.set_rotation(PartialRotation::new(pitch, yaw, roll));
        log::trace!("car placed at ({x:.1}, {y:.1}, {z:.1}) yaw {yaw:.2}");

        if chance(rng, self.config.agent_random_speed_probability) {
            let linear = random_velocity(rng, b.car_max_speed);
            let angular = random_velocity(rng, b.car_max_ang_vel);
            car.set_linear_velocity(linear.into());
            car.set_angular_velocity(angular.into());
        }

        if chance(rng, self.config.agent_on_ground_probability) {
            car.set_position(PartialVec3::default().with_z(b.car_ground_z));
            car.set_linear_velocity(PartialVec3::default().with_z(0.0));
            car.set_rotation(PartialRotation::default().with_pitch(0.0).with_roll(0.0));
            car.set_angular_velocity(PartialVec3::default().with_x(0.0).with_y(0.0));
        }
    }
}

impl<R: Rng + Send + 'static> StateSetter for RandomState<R> {
    fn reset(&mut self, state: &mut dyn StateInitHandle) {
        self.reset_ball_random(state.ball_mut());
        for index in 0..state.car_count() {
            if let Some(car) = state.car_mut(index) {
                self.reset_car_random(car);
            }
        }
    }
}

// ── RandomStateBuilder ─────────────────────────────────────────────

/// Builder for [`RandomState`].
///
/// Every entry is optional; see [`RandomStateConfig`] for defaults.
pub struct RandomStateBuilder {
    config: RandomStateConfig,
    seed: Option<u64>,
}

impl RandomStateBuilder {
    /// Chance the ball gets a random velocity (default: 0). Must be in `[0, 1]`.
    pub fn ball_random_speed_probability(mut self, p: f64) -> Self {
        self.config.ball_random_speed_probability = p;
        self
    }

    /// Chance each car gets a random velocity (default: 0). Must be in `[0, 1]`.
    pub fn agent_random_speed_probability(mut self, p: f64) -> Self {
        self.config.agent_random_speed_probability = p;
        self
    }

    /// Chance each car is snapped onto the ground (default: 1). Must be in `[0, 1]`.
    pub fn agent_on_ground_probability(mut self, p: f64) -> Self {
        self.config.agent_on_ground_probability = p;
        self
    }

    /// Override the spawn bounds (default: [`FieldBounds::standard`]).
    pub fn bounds(mut self, bounds: FieldBounds) -> Self {
        self.config.bounds = bounds;
        self
    }

    /// Seed the generator for reproducible states (default: OS entropy).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the setter, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any probability is outside `[0, 1]` or NaN, or if
    /// the bounds are invalid.
    pub fn build(self) -> Result<RandomState, ConfigError> {
        let rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        RandomState::with_rng(self.config, rng)
    }
}
