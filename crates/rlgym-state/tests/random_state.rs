//! Statistical and property tests for `RandomState` over many resets.

use proptest::prelude::*;
use rlgym_core::common_values::{
    BALL_MAX_ANG_VEL, BALL_MAX_SPEED, BALL_RADIUS, CAR_GROUND_Z, CAR_MARGIN, CAR_MAX_ANG_VEL,
    CAR_MAX_SPEED, PITCH_MAX, ROLL_MAX, X_MAX, YAW_MAX, Y_MAX, Z_MAX_BALL, Z_MAX_CAR,
};
use rlgym_core::{StateSetter, StateWrapper};
use rlgym_state::RandomState;
use rlgym_test_utils::{BodyCalls, RecordingStateHandle};

const RESETS: usize = 1_000;

fn setter(ball_speed: f64, agent_speed: f64, on_ground: f64, seed: u64) -> RandomState {
    RandomState::builder()
        .ball_random_speed_probability(ball_speed)
        .agent_random_speed_probability(agent_speed)
        .agent_on_ground_probability(on_ground)
        .seed(seed)
        .build()
        .unwrap()
}

fn fresh(cars: u16) -> StateWrapper {
    StateWrapper::new(cars.div_ceil(2), cars / 2)
}

// ---------------------------------------------------------------
// Placement bounds
// ---------------------------------------------------------------

#[test]
fn positions_stay_inside_field() {
    let mut s = setter(0.5, 0.5, 0.0, 2024);
    for _ in 0..RESETS {
        let mut w = fresh(6);
        s.reset(&mut w);

        let ball = w.ball.physics.position;
        assert!(ball.x.abs() <= X_MAX, "ball x {}", ball.x);
        assert!(ball.y.abs() <= Y_MAX, "ball y {}", ball.y);
        assert!((BALL_RADIUS..=Z_MAX_BALL).contains(&ball.z), "ball z {}", ball.z);

        for car in &w.cars {
            let p = car.body.physics.position;
            assert!(p.x.abs() <= X_MAX, "car x {}", p.x);
            assert!(p.y.abs() <= Y_MAX, "car y {}", p.y);
            assert!((CAR_MARGIN..=Z_MAX_CAR).contains(&p.z), "car z {}", p.z);
        }
    }
}

#[test]
fn car_rotations_stay_in_range() {
    let mut s = setter(0.0, 0.0, 0.0, 5);
    for _ in 0..RESETS {
        let mut w = fresh(4);
        s.reset(&mut w);
        for car in &w.cars {
            let r = car.body.physics.rotation;
            assert!(r.pitch.abs() <= PITCH_MAX);
            assert!((-YAW_MAX..=ROLL_MAX).contains(&r.yaw));
            assert!(r.roll.abs() <= ROLL_MAX);
        }
    }
}

#[test]
fn ball_height_favours_the_floor() {
    let mut s = setter(0.0, 0.0, 1.0, 77);
    let midpoint = (BALL_RADIUS + Z_MAX_BALL) / 2.0;
    let low = (0..RESETS)
        .filter(|_| {
            let mut w = fresh(0);
            s.reset(&mut w);
            w.ball.physics.position.z < midpoint
        })
        .count();
    // Triangular with the mode at the floor puts 3/4 of the mass below the midpoint.
    let ratio = low as f64 / RESETS as f64;
    assert!(ratio > 0.68 && ratio < 0.82, "ratio {ratio}");
}

// ---------------------------------------------------------------
// Velocities
// ---------------------------------------------------------------

#[test]
fn speeds_respect_caps() {
    let mut s = setter(1.0, 1.0, 0.0, 9);
    for _ in 0..RESETS {
        let mut w = fresh(4);
        s.reset(&mut w);

        let ball = w.ball.physics;
        assert!(ball.linear_velocity.length() <= BALL_MAX_SPEED);
        assert!(ball.angular_velocity.length() <= BALL_MAX_ANG_VEL);

        for car in &w.cars {
            let p = car.body.physics;
            assert!(p.linear_velocity.length() <= CAR_MAX_SPEED);
            assert!(p.angular_velocity.length() <= CAR_MAX_ANG_VEL);
        }
    }
}

#[test]
fn zero_probability_never_sets_velocity() {
    let mut s = setter(0.0, 0.0, 0.0, 31);
    let mut handle = RecordingStateHandle::new(3);
    for _ in 0..200 {
        s.reset(&mut handle);
    }
    let placed_only = BodyCalls {
        position: 200,
        rotation: 0,
        linear_velocity: 0,
        angular_velocity: 0,
    };
    assert_eq!(handle.ball().calls, placed_only);
    for car in handle.cars() {
        assert_eq!(car.calls.rotation, 200);
        assert_eq!(car.calls.linear_velocity, 0);
        assert_eq!(car.calls.angular_velocity, 0);
    }
}

#[test]
fn certain_speed_sets_velocity_every_reset() {
    let mut s = setter(1.0, 1.0, 0.0, 32);
    let mut handle = RecordingStateHandle::new(2);
    for _ in 0..50 {
        s.reset(&mut handle);
    }
    assert_eq!(handle.ball().calls.linear_velocity, 50);
    assert_eq!(handle.ball().calls.angular_velocity, 50);
    for car in handle.cars() {
        assert_eq!(car.calls.linear_velocity, 50);
        assert_eq!(car.calls.angular_velocity, 50);
    }
}

// ---------------------------------------------------------------
// Ground clamp
// ---------------------------------------------------------------

#[test]
fn grounded_cars_rest_on_wheels() {
    let mut s = setter(0.0, 1.0, 1.0, 4);
    for _ in 0..RESETS {
        let mut w = fresh(4);
        s.reset(&mut w);
        for car in &w.cars {
            let p = car.body.physics;
            assert_eq!(p.position.z, CAR_GROUND_Z);
            assert_eq!(p.linear_velocity.z, 0.0);
            assert_eq!(p.rotation.pitch, 0.0);
            assert_eq!(p.rotation.roll, 0.0);
            assert_eq!(p.angular_velocity.x, 0.0);
            assert_eq!(p.angular_velocity.y, 0.0);
        }
    }
}

#[test]
fn ground_clamp_writes_each_setter_once_more() {
    let mut s = setter(0.0, 1.0, 1.0, 12);
    let mut handle = RecordingStateHandle::new(1);
    s.reset(&mut handle);
    assert_eq!(
        handle.car(0).calls,
        BodyCalls {
            position: 2,
            rotation: 2,
            linear_velocity: 2,
            angular_velocity: 2,
        }
    );
}

#[test]
fn on_ground_probability_splits_cars() {
    let mut s = setter(0.0, 0.0, 0.5, 55);
    let mut grounded = 0usize;
    let mut total = 0usize;
    for _ in 0..RESETS {
        let mut w = fresh(2);
        s.reset(&mut w);
        for car in &w.cars {
            total += 1;
            // Airborne cars sit at or above CAR_MARGIN, well above ground height.
            if car.body.physics.position.z == CAR_GROUND_Z {
                grounded += 1;
            }
        }
    }
    let ratio = grounded as f64 / total as f64;
    assert!((ratio - 0.5).abs() < 0.05, "ratio {ratio}");
}

// ---------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------

#[test]
fn recording_handle_sees_same_values_as_wrapper() {
    let mut a = setter(0.3, 0.6, 0.4, 100);
    let mut b = setter(0.3, 0.6, 0.4, 100);
    for _ in 0..20 {
        let mut w = fresh(3);
        let mut handle = RecordingStateHandle::new(3);
        a.reset(&mut w);
        b.reset(&mut handle);
        assert_eq!(handle.ball().body, w.ball);
        for (rec, slot) in handle.cars().iter().zip(&w.cars) {
            assert_eq!(rec.body, slot.body);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_valid_probabilities_keep_bounds(
        ball_speed in 0f64..=1.0,
        agent_speed in 0f64..=1.0,
        on_ground in 0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut s = setter(ball_speed, agent_speed, on_ground, seed);
        for _ in 0..10 {
            let mut w = fresh(4);
            s.reset(&mut w);
            let ball = w.ball.physics;
            prop_assert!(ball.position.x.abs() <= X_MAX);
            prop_assert!(ball.position.y.abs() <= Y_MAX);
            prop_assert!(ball.position.z >= BALL_RADIUS && ball.position.z <= Z_MAX_BALL);
            for car in &w.cars {
                let p = car.body.physics;
                prop_assert!(p.position.x.abs() <= X_MAX);
                prop_assert!(p.position.y.abs() <= Y_MAX);
                prop_assert!(p.position.z == CAR_GROUND_Z
                    || (p.position.z >= CAR_MARGIN && p.position.z <= Z_MAX_CAR));
                prop_assert!(p.linear_velocity.length() <= CAR_MAX_SPEED);
            }
        }
    }

    #[test]
    fn same_seed_same_states(seed in any::<u64>()) {
        let mut a = setter(0.5, 0.5, 0.5, seed);
        let mut b = setter(0.5, 0.5, 0.5, seed);
        for _ in 0..5 {
            let (mut wa, mut wb) = (fresh(4), fresh(4));
            a.reset(&mut wa);
            b.reset(&mut wb);
            prop_assert_eq!(wa, wb);
        }
    }
}
