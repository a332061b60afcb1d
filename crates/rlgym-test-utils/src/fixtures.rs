//! Reusable done-condition test fixtures.
//!
//! - [`ConstCondition`]: same verdict for every requested agent.
//! - [`FixedCondition`]: returns a preset map verbatim, whatever is asked.
//!   Useful for feeding malformed output to combinators.
//! - [`RecordingCondition`]: logs every call into a shared [`CallLog`].

use std::sync::{Arc, Mutex};

use rlgym_core::{AgentId, DoneCondition, DoneError, DoneMap, GameState, SharedInfo};

/// Returns `done` for every requested agent.
pub struct ConstCondition {
    pub name: String,
    pub done: bool,
}

impl ConstCondition {
    pub fn new(name: impl Into<String>, done: bool) -> Self {
        Self {
            name: name.into(),
            done,
        }
    }
}

impl DoneCondition for ConstCondition {
    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self, _initial_state: &GameState, _shared_info: &mut SharedInfo) {}

    fn is_done(
        &self,
        agents: &[AgentId],
        _state: &GameState,
        _shared_info: &mut SharedInfo,
    ) -> Result<DoneMap, DoneError> {
        Ok(agents.iter().map(|&agent| (agent, self.done)).collect())
    }
}

/// Returns a clone of `verdicts` regardless of the requested agents.
pub struct FixedCondition {
    pub name: String,
    pub verdicts: DoneMap,
}

impl FixedCondition {
    pub fn new(name: impl Into<String>, verdicts: impl IntoIterator<Item = (u32, bool)>) -> Self {
        Self {
            name: name.into(),
            verdicts: verdicts
                .into_iter()
                .map(|(id, done)| (AgentId(id), done))
                .collect(),
        }
    }
}

impl DoneCondition for FixedCondition {
    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self, _initial_state: &GameState, _shared_info: &mut SharedInfo) {}

    fn is_done(
        &self,
        _agents: &[AgentId],
        _state: &GameState,
        _shared_info: &mut SharedInfo,
    ) -> Result<DoneMap, DoneError> {
        Ok(self.verdicts.clone())
    }
}

/// One call observed by a [`RecordingCondition`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConditionCall {
    /// `reset` with copies of its arguments as received.
    Reset {
        condition: String,
        initial_state: GameState,
        shared_info: SharedInfo,
    },
    /// `is_done` with the requested agents.
    IsDone {
        condition: String,
        agents: Vec<AgentId>,
    },
}

/// Shared, ordered log of calls across several recording conditions.
pub type CallLog = Arc<Mutex<Vec<ConditionCall>>>;

/// Key under which every [`RecordingCondition::reset`] bumps a counter in
/// the shared info it receives.
pub const RESET_COUNTER_KEY: &str = "recording_resets";

/// Records each call into `log`, then answers `done` for every agent.
///
/// `reset` also increments [`RESET_COUNTER_KEY`] in the received
/// `SharedInfo`, so sibling conditions can observe that they were handed
/// the same context object.
pub struct RecordingCondition {
    pub name: String,
    pub done: bool,
    log: CallLog,
}

impl RecordingCondition {
    pub fn new(name: impl Into<String>, done: bool, log: CallLog) -> Self {
        Self {
            name: name.into(),
            done,
            log,
        }
    }

    /// A fresh, empty call log.
    pub fn new_log() -> CallLog {
        Arc::new(Mutex::new(Vec::new()))
    }
}

impl DoneCondition for RecordingCondition {
    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self, initial_state: &GameState, shared_info: &mut SharedInfo) {
        self.log.lock().unwrap().push(ConditionCall::Reset {
            condition: self.name.clone(),
            initial_state: initial_state.clone(),
            shared_info: shared_info.clone(),
        });
        shared_info.increment(RESET_COUNTER_KEY, 1);
    }

    fn is_done(
        &self,
        agents: &[AgentId],
        _state: &GameState,
        _shared_info: &mut SharedInfo,
    ) -> Result<DoneMap, DoneError> {
        self.log.lock().unwrap().push(ConditionCall::IsDone {
            condition: self.name.clone(),
            agents: agents.to_vec(),
        });
        Ok(agents.iter().map(|&agent| (agent, self.done)).collect())
    }
}
