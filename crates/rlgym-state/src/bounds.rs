//! Spawn bounds derived from the field geometry.

use rlgym_core::common_values::{
    BALL_MAX_ANG_VEL, BALL_MAX_SPEED, BALL_RADIUS, CAR_GROUND_Z, CAR_MARGIN, CAR_MAX_ANG_VEL,
    CAR_MAX_SPEED, PITCH_MAX, ROLL_MAX, X_MAX, YAW_MAX, Y_MAX, Z_MAX_BALL, Z_MAX_CAR,
};
use rlgym_core::ConfigError;
use serde::{Deserialize, Serialize};

/// Limits every sampled position, speed, and angle must respect.
///
/// [`FieldBounds::standard`] matches the standard arena. Custom bounds are
/// checked by [`validate`](FieldBounds::validate) before any sampling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldBounds {
    /// Largest `|x|` of any spawned body.
    pub x_max: f32,
    /// Largest `|y|` of any spawned body.
    pub y_max: f32,
    /// Lowest ball height (resting on the floor).
    pub ball_z_min: f32,
    /// Highest ball height.
    pub ball_z_max: f32,
    /// Lowest airborne car height.
    pub car_z_min: f32,
    /// Highest car height.
    pub car_z_max: f32,
    /// Height of a car resting on its wheels.
    pub car_ground_z: f32,
    /// Ball speed cap.
    pub ball_max_speed: f32,
    /// Ball angular speed cap.
    pub ball_max_ang_vel: f32,
    /// Car speed cap.
    pub car_max_speed: f32,
    /// Car angular speed cap.
    pub car_max_ang_vel: f32,
    /// Largest pitch magnitude.
    pub pitch_max: f32,
    /// Lower yaw magnitude; yaw is sampled from `[-yaw_max, roll_max]`.
    pub yaw_max: f32,
    /// Largest roll magnitude; also the upper yaw bound.
    pub roll_max: f32,
}

impl FieldBounds {
    /// Bounds of the standard soccar arena.
    pub const fn standard() -> Self {
        Self {
            x_max: X_MAX,
            y_max: Y_MAX,
            ball_z_min: BALL_RADIUS,
            ball_z_max: Z_MAX_BALL,
            car_z_min: CAR_MARGIN,
            car_z_max: Z_MAX_CAR,
            car_ground_z: CAR_GROUND_Z,
            ball_max_speed: BALL_MAX_SPEED,
            ball_max_ang_vel: BALL_MAX_ANG_VEL,
            car_max_speed: CAR_MAX_SPEED,
            car_max_ang_vel: CAR_MAX_ANG_VEL,
            pitch_max: PITCH_MAX,
            yaw_max: YAW_MAX,
            roll_max: ROLL_MAX,
        }
    }

    /// Check that every bound is finite, non-negative, ordered, and small
    /// enough that no sampled range overflows.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidBounds`] naming the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("x_max", self.x_max),
            ("y_max", self.y_max),
            ("ball_z_min", self.ball_z_min),
            ("ball_z_max", self.ball_z_max),
            ("car_z_min", self.car_z_min),
            ("car_z_max", self.car_z_max),
            ("car_ground_z", self.car_ground_z),
            ("ball_max_speed", self.ball_max_speed),
            ("ball_max_ang_vel", self.ball_max_ang_vel),
            ("car_max_speed", self.car_max_speed),
            ("car_max_ang_vel", self.car_max_ang_vel),
            ("pitch_max", self.pitch_max),
            ("yaw_max", self.yaw_max),
            ("roll_max", self.roll_max),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidBounds {
                    reason: format!("{name} must be finite and >= 0, got {value}"),
                });
            }
        }
        if self.x_max == 0.0 || self.y_max == 0.0 {
            return Err(ConfigError::InvalidBounds {
                reason: format!(
                    "field extents must be positive, got x_max={} y_max={}",
                    self.x_max, self.y_max
                ),
            });
        }
        if self.ball_z_min > self.ball_z_max {
            return Err(ConfigError::InvalidBounds {
                reason: format!(
                    "ball_z_min {} exceeds ball_z_max {}",
                    self.ball_z_min, self.ball_z_max
                ),
            });
        }
        if self.car_z_min > self.car_z_max {
            return Err(ConfigError::InvalidBounds {
                reason: format!(
                    "car_z_min {} exceeds car_z_max {}",
                    self.car_z_min, self.car_z_max
                ),
            });
        }
        self.validate_spans()
    }

    /// Reject bounds whose sampled ranges overflow `f32`.
    ///
    /// Uniform draws need the full range width to be finite; triangular
    /// draws need the squared width; velocity lengths need twice the cap,
    /// squared.
    fn validate_spans(&self) -> Result<(), ConfigError> {
        let ball_z = self.ball_z_max - self.ball_z_min;
        let car_z = self.car_z_max - self.car_z_min;
        let spans = [
            ("x_max", 2.0 * self.x_max),
            ("y_max", 2.0 * self.y_max),
            ("ball_z_max - ball_z_min", ball_z * ball_z),
            ("car_z_max - car_z_min", car_z * car_z),
            ("pitch_max", 2.0 * self.pitch_max),
            ("yaw_max + roll_max", self.yaw_max + self.roll_max),
            ("roll_max", 2.0 * self.roll_max),
            ("ball_max_speed", (2.0 * self.ball_max_speed).powi(2)),
            ("ball_max_ang_vel", (2.0 * self.ball_max_ang_vel).powi(2)),
            ("car_max_speed", (2.0 * self.car_max_speed).powi(2)),
            ("car_max_ang_vel", (2.0 * self.car_max_ang_vel).powi(2)),
        ];
        for (name, span) in spans {
            if !span.is_finite() {
                return Err(ConfigError::InvalidBounds {
                    reason: format!("{name} is too large to sample in f32"),
                });
            }
        }
        Ok(())
    }
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self::standard()
    }
}
