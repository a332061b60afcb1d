//! Field geometry and entity speed limits, in unreal units (uu) and radians.
//!
//! The standard soccar arena is centered on the origin: side walls at
//! `±SIDE_WALL_X`, back walls at `±BACK_WALL_Y`, floor at `z = 0`.

use std::f32::consts::{FRAC_PI_2, PI};

/// Physics tick rate of the game, in Hz.
pub const TICK_RATE: u32 = 120;

// Arena
/// X of the side walls.
pub const SIDE_WALL_X: f32 = 4096.0;
/// Y of the back walls.
pub const BACK_WALL_Y: f32 = 5120.0;
/// Height of the ceiling.
pub const CEILING_Z: f32 = 2044.0;
/// Length of the legs of the 45° corner cutoffs.
pub const CORNER_CATHETUS_LENGTH: f32 = 1152.0;

// Ball
/// Ball radius; also the ball's resting height.
pub const BALL_RADIUS: f32 = 92.75;
/// Ball speed cap, uu/s.
pub const BALL_MAX_SPEED: f32 = 6000.0;
/// Ball angular speed cap, rad/s.
pub const BALL_MAX_ANG_VEL: f32 = 6.0;

// Car
/// Car speed cap, uu/s.
pub const CAR_MAX_SPEED: f32 = 2300.0;
/// Car angular speed cap, rad/s.
pub const CAR_MAX_ANG_VEL: f32 = 5.5;
/// Clearance from the walls so a car fits at any rotation.
pub const CAR_MARGIN: f32 = 100.0;
/// Height of a car's center when resting on its wheels.
pub const CAR_GROUND_Z: f32 = 17.0;

// Orientation limits
/// Largest sampled pitch magnitude.
pub const PITCH_MAX: f32 = FRAC_PI_2;
/// Largest sampled yaw magnitude.
pub const YAW_MAX: f32 = PI;
/// Largest sampled roll magnitude.
pub const ROLL_MAX: f32 = PI;

// Derived spawn extents
/// Largest spawn `|x|`, clear of the corner cutoffs.
pub const X_MAX: f32 = SIDE_WALL_X - CORNER_CATHETUS_LENGTH / 2.0 - CAR_MARGIN;
/// Largest spawn `|y|`, clear of the corner cutoffs.
pub const Y_MAX: f32 = BACK_WALL_Y - CORNER_CATHETUS_LENGTH / 2.0 - CAR_MARGIN;
/// Highest spawn height of the ball's center.
pub const Z_MAX_BALL: f32 = CEILING_Z - BALL_RADIUS;
/// Highest spawn height of a car's center.
pub const Z_MAX_CAR: f32 = CEILING_Z - CAR_MARGIN;
