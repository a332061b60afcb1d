//! Fixed-length episode termination.

use rlgym_core::common_values::TICK_RATE;
use rlgym_core::{AgentId, ConfigError, DoneCondition, DoneError, DoneMap, GameState, SharedInfo};

/// Every agent is done once `timeout_ticks` physics ticks have elapsed
/// since the last [`reset`](DoneCondition::reset).
///
/// Elapsed time is measured from the `tick_count` of the initial state, so
/// the condition works regardless of where the game clock starts.
#[derive(Clone, Debug)]
pub struct TimeoutCondition {
    timeout_ticks: u64,
    initial_tick: u64,
}

impl TimeoutCondition {
    /// Time out after `timeout_ticks` ticks.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidTimeout`] if `timeout_ticks` is zero.
    pub fn new(timeout_ticks: u64) -> Result<Self, ConfigError> {
        if timeout_ticks == 0 {
            return Err(ConfigError::InvalidTimeout {
                reason: "timeout must be at least one tick".to_string(),
            });
        }
        Ok(Self {
            timeout_ticks,
            initial_tick: 0,
        })
    }

    /// Time out after `seconds` of game time, rounded to the nearest tick.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidTimeout`] if `seconds` is not finite or rounds
    /// to zero ticks.
    pub fn from_seconds(seconds: f64) -> Result<Self, ConfigError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ConfigError::InvalidTimeout {
                reason: format!("seconds must be finite and >= 0, got {seconds}"),
            });
        }
        let ticks = (seconds * f64::from(TICK_RATE)).round() as u64;
        Self::new(ticks)
    }

    /// The configured duration in ticks.
    pub fn timeout_ticks(&self) -> u64 {
        self.timeout_ticks
    }
}

impl DoneCondition for TimeoutCondition {
    fn name(&self) -> &str {
        "TimeoutCondition"
    }

    fn reset(&mut self, initial_state: &GameState, _shared_info: &mut SharedInfo) {
        self.initial_tick = initial_state.tick_count;
    }

    fn is_done(
        &self,
        agents: &[AgentId],
        state: &GameState,
        _shared_info: &mut SharedInfo,
    ) -> Result<DoneMap, DoneError> {
        let elapsed = state.tick_count.saturating_sub(self.initial_tick);
        let done = elapsed >= self.timeout_ticks;
        Ok(agents.iter().map(|&agent| (agent, done)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlgym_test_utils::{agents, GameStateBuilder};

    fn done_at(cond: &TimeoutCondition, tick: u64) -> bool {
        let state = GameStateBuilder::new().tick(tick).build();
        cond.is_done(&agents(1), &state, &mut SharedInfo::new()).unwrap()[&AgentId(0)]
    }

    #[test]
    fn flips_exactly_at_timeout() {
        let mut cond = TimeoutCondition::new(10).unwrap();
        let start = GameStateBuilder::new().tick(1000).build();
        cond.reset(&start, &mut SharedInfo::new());
        assert!(!done_at(&cond, 1000));
        assert!(!done_at(&cond, 1009));
        assert!(done_at(&cond, 1010));
        assert!(done_at(&cond, 5000));
    }

    #[test]
    fn reset_rearms_from_new_initial_tick() {
        let mut cond = TimeoutCondition::new(5).unwrap();
        cond.reset(&GameStateBuilder::new().tick(0).build(), &mut SharedInfo::new());
        assert!(done_at(&cond, 6));
        cond.reset(&GameStateBuilder::new().tick(6).build(), &mut SharedInfo::new());
        assert!(!done_at(&cond, 6));
        assert!(done_at(&cond, 11));
    }

    #[test]
    fn clock_before_initial_tick_is_not_done() {
        let mut cond = TimeoutCondition::new(5).unwrap();
        cond.reset(&GameStateBuilder::new().tick(100).build(), &mut SharedInfo::new());
        assert!(!done_at(&cond, 3));
    }

    #[test]
    fn seconds_convert_at_tick_rate() {
        assert_eq!(TimeoutCondition::from_seconds(10.0).unwrap().timeout_ticks(), 1200);
        assert_eq!(TimeoutCondition::from_seconds(0.5).unwrap().timeout_ticks(), 60);
    }

    #[test]
    fn rejects_zero_and_non_finite() {
        assert!(TimeoutCondition::new(0).is_err());
        assert!(TimeoutCondition::from_seconds(0.001).is_err());
        assert!(TimeoutCondition::from_seconds(f64::NAN).is_err());
        assert!(TimeoutCondition::from_seconds(-1.0).is_err());
    }
}
