//! Per-agent disjunction of child conditions.

use rlgym_core::{AgentId, ConfigError, DoneCondition, DoneError, DoneMap, GameState, SharedInfo};

use crate::combine::Children;

/// Done for an agent as soon as any child reports done for that agent.
///
/// Every child is still evaluated each call, so malformed output from a
/// later child is caught even when an earlier one already said done.
pub struct AnyCondition {
    children: Children,
}

impl AnyCondition {
    /// Combine `conditions`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyCombinator`] if `conditions` is empty.
    pub fn new(conditions: Vec<Box<dyn DoneCondition>>) -> Result<Self, ConfigError> {
        Ok(Self {
            children: Children::new("AnyCondition", conditions)?,
        })
    }
}

impl DoneCondition for AnyCondition {
    fn name(&self) -> &str {
        "AnyCondition"
    }

    fn reset(&mut self, initial_state: &GameState, shared_info: &mut SharedInfo) {
        log::debug!("resetting AnyCondition ({} children)", self.children.len());
        self.children.reset(initial_state, shared_info);
    }

    fn is_done(
        &self,
        agents: &[AgentId],
        state: &GameState,
        shared_info: &mut SharedInfo,
    ) -> Result<DoneMap, DoneError> {
        self.children
            .fold(agents, state, shared_info, false, |acc, done| acc || done)
    }
}
