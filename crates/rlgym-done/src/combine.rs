//! Shared child bookkeeping for the boolean combinators.

use rlgym_core::{AgentId, ConfigError, DoneCondition, DoneError, DoneMap, GameState, SharedInfo};

use crate::verdicts::check_verdicts;

/// Ordered, non-empty list of child conditions.
pub(crate) struct Children {
    conditions: Vec<Box<dyn DoneCondition>>,
}

impl Children {
    /// Wrap `conditions`, rejecting an empty list on behalf of `combinator`.
    pub(crate) fn new(
        combinator: &'static str,
        conditions: Vec<Box<dyn DoneCondition>>,
    ) -> Result<Self, ConfigError> {
        if conditions.is_empty() {
            return Err(ConfigError::EmptyCombinator { combinator });
        }
        Ok(Self { conditions })
    }

    pub(crate) fn len(&self) -> usize {
        self.conditions.len()
    }

    pub(crate) fn reset(&mut self, initial_state: &GameState, shared_info: &mut SharedInfo) {
        for condition in &mut self.conditions {
            condition.reset(initial_state, shared_info);
        }
    }

    /// Fold every child's verdicts per agent, starting each agent at `seed`.
    ///
    /// Children are evaluated in order; each map is validated before it is
    /// folded in.
    pub(crate) fn fold(
        &self,
        agents: &[AgentId],
        state: &GameState,
        shared_info: &mut SharedInfo,
        seed: bool,
        op: fn(bool, bool) -> bool,
    ) -> Result<DoneMap, DoneError> {
        let mut combined: DoneMap = agents.iter().map(|&agent| (agent, seed)).collect();
        for condition in &self.conditions {
            let dones = condition
                .is_done(agents, state, shared_info)
                .map_err(|reason| DoneError::ConditionFailed {
                    condition: condition.name().to_string(),
                    reason: Box::new(reason),
                })?;
            check_verdicts(condition.name(), agents, &dones)?;
            for (agent, verdict) in combined.iter_mut() {
                *verdict = op(*verdict, dones[agent]);
            }
        }
        Ok(combined)
    }
}
