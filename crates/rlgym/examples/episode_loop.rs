//! Runs a few episodes against a toy ball-only physics step.
//!
//! Each episode starts from a `RandomState` placement and ends when the ball
//! crosses a back wall or after five seconds of play.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p rlgym --example episode_loop
//! ```

use rlgym::prelude::*;
use rlgym::types::common_values::{BACK_WALL_Y, TICK_RATE};

const EPISODES: usize = 5;

/// Advance the ball in a straight line by one tick.
fn step(state: &mut GameState) {
    let dt = 1.0 / TICK_RATE as f32;
    state.ball.position += state.ball.linear_velocity * dt;
    state.tick_count += 1;
    state.goal_scored = state.ball.position.y.abs() > BACK_WALL_Y;
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut setter = RandomState::builder()
        .ball_random_speed_probability(1.0)
        .agent_random_speed_probability(0.5)
        .agent_on_ground_probability(0.8)
        .seed(2024)
        .build()?;
    let mut done = AnyCondition::new(vec![
        Box::new(GoalScoredCondition) as Box<dyn DoneCondition>,
        Box::new(TimeoutCondition::from_seconds(5.0)?),
    ])?;
    let mut info = SharedInfo::new();

    for episode in 0..EPISODES {
        let mut wrapper = StateWrapper::new(2, 2);
        setter.reset(&mut wrapper);
        let mut state = wrapper.into_game_state(0);
        let agents = state.agent_ids();

        info.clear();
        done.reset(&state, &mut info);
        log::info!(
            "episode {episode}: ball at {:?} moving {:?}",
            state.ball.position,
            state.ball.linear_velocity
        );

        loop {
            step(&mut state);
            let dones = done.is_done(&agents, &state, &mut info)?;
            if dones.values().any(|&d| d) {
                let reason = if state.goal_scored { "goal" } else { "timeout" };
                println!(
                    "episode {episode} ended by {reason} at tick {}",
                    state.tick_count
                );
                break;
            }
        }
    }
    Ok(())
}
