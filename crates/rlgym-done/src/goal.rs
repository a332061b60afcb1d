//! Goal-scored termination.

use rlgym_core::{AgentId, DoneCondition, DoneError, DoneMap, GameState, SharedInfo};

/// Every agent is done on the step a goal is scored.
///
/// The verdict is agent-independent: all requested agents share the
/// snapshot's `goal_scored` flag. Stateless, so `reset` does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct GoalScoredCondition;

impl DoneCondition for GoalScoredCondition {
    fn name(&self) -> &str {
        "GoalScoredCondition"
    }

    fn reset(&mut self, _initial_state: &GameState, _shared_info: &mut SharedInfo) {}

    fn is_done(
        &self,
        agents: &[AgentId],
        state: &GameState,
        _shared_info: &mut SharedInfo,
    ) -> Result<DoneMap, DoneError> {
        Ok(agents
            .iter()
            .map(|&agent| (agent, state.goal_scored))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rlgym_test_utils::GameStateBuilder;

    #[test]
    fn no_goal_means_not_done() {
        let state = GameStateBuilder::new().cars(2).goal_scored(false).build();
        let dones = GoalScoredCondition
            .is_done(&state.agent_ids(), &state, &mut SharedInfo::new())
            .unwrap();
        assert_eq!(dones.len(), 2);
        assert!(dones.values().all(|&d| !d));
    }

    #[test]
    fn reset_leaves_shared_info_untouched() {
        let mut info = SharedInfo::new();
        GoalScoredCondition.reset(&GameState::new(), &mut info);
        assert!(info.is_empty());
    }

    proptest! {
        #[test]
        fn verdict_matches_flag_for_every_agent(
            ids in prop::collection::vec(0u32..64, 0..16),
            goal in any::<bool>(),
        ) {
            let agents: Vec<AgentId> = ids.into_iter().map(AgentId).collect();
            let state = GameStateBuilder::new().goal_scored(goal).build();
            let dones = GoalScoredCondition
                .is_done(&agents, &state, &mut SharedInfo::new())
                .unwrap();
            for agent in &agents {
                prop_assert_eq!(dones[agent], goal);
            }
            prop_assert!(dones.keys().all(|k| agents.contains(k)));
        }
    }
}
