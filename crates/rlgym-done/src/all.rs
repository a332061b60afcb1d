//! Per-agent conjunction of child conditions.

use rlgym_core::{AgentId, ConfigError, DoneCondition, DoneError, DoneMap, GameState, SharedInfo};

use crate::combine::Children;

/// Done for an agent only when every child reports done for that agent.
///
/// Children are reset in construction order. Their order has no effect on
/// the verdicts.
///
/// # Examples
///
/// ```
/// use rlgym_core::{AgentId, DoneCondition, GameState, SharedInfo};
/// use rlgym_done::{AllCondition, GoalScoredCondition, TimeoutCondition};
///
/// let mut cond = AllCondition::new(vec![
///     Box::new(GoalScoredCondition) as Box<dyn DoneCondition>,
///     Box::new(TimeoutCondition::new(10).unwrap()),
/// ])
/// .unwrap();
///
/// let mut info = SharedInfo::new();
/// cond.reset(&GameState::new(), &mut info);
///
/// let state = GameState { goal_scored: true, ..GameState::new() };
/// let dones = cond.is_done(&[AgentId(0)], &state, &mut info).unwrap();
/// assert!(!dones[&AgentId(0)], "timeout has not elapsed yet");
/// ```
pub struct AllCondition {
    children: Children,
}

impl AllCondition {
    /// Combine `conditions`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyCombinator`] if `conditions` is empty: a
    /// conjunction over nothing would end every episode on its first step.
    pub fn new(conditions: Vec<Box<dyn DoneCondition>>) -> Result<Self, ConfigError> {
        Ok(Self {
            children: Children::new("AllCondition", conditions)?,
        })
    }
}

impl DoneCondition for AllCondition {
    fn name(&self) -> &str {
        "AllCondition"
    }

    fn reset(&mut self, initial_state: &GameState, shared_info: &mut SharedInfo) {
        log::debug!("resetting AllCondition ({} children)", self.children.len());
        self.children.reset(initial_state, shared_info);
    }

    fn is_done(
        &self,
        agents: &[AgentId],
        state: &GameState,
        shared_info: &mut SharedInfo,
    ) -> Result<DoneMap, DoneError> {
        self.children
            .fold(agents, state, shared_info, true, |acc, done| acc && done)
    }
}
