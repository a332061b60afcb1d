//! Shape validation for [`DoneMap`]s.

use std::collections::HashSet;

use rlgym_core::{AgentId, DoneError, DoneMap};

/// Check that `dones` holds exactly one verdict per entry of `agents`.
///
/// `condition` names the producer for the error message.
///
/// # Errors
///
/// - [`DoneError::MissingAgent`] for the first requested agent without a
///   verdict.
/// - [`DoneError::UnexpectedAgent`] for the first verdict whose agent was
///   not requested.
pub fn check_verdicts(condition: &str, agents: &[AgentId], dones: &DoneMap) -> Result<(), DoneError> {
    if let Some(&agent) = agents.iter().find(|agent| !dones.contains_key(*agent)) {
        return Err(DoneError::MissingAgent {
            condition: condition.to_string(),
            agent,
        });
    }
    // Every requested agent is present, so extras exist only if the map is
    // larger than the distinct request.
    let requested: HashSet<AgentId> = agents.iter().copied().collect();
    if dones.len() == requested.len() {
        return Ok(());
    }
    match dones.keys().find(|agent| !requested.contains(*agent)) {
        Some(&agent) => Err(DoneError::UnexpectedAgent {
            condition: condition.to_string(),
            agent,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(u32, bool)]) -> DoneMap {
        entries.iter().map(|&(id, done)| (AgentId(id), done)).collect()
    }

    #[test]
    fn exact_match_passes() {
        let agents = [AgentId(0), AgentId(1)];
        assert!(check_verdicts("c", &agents, &map(&[(1, true), (0, false)])).is_ok());
    }

    #[test]
    fn missing_agent_is_reported() {
        let agents = [AgentId(0), AgentId(1)];
        let err = check_verdicts("c", &agents, &map(&[(0, true)])).unwrap_err();
        assert_eq!(
            err,
            DoneError::MissingAgent {
                condition: "c".into(),
                agent: AgentId(1),
            }
        );
    }

    #[test]
    fn extra_agent_is_reported() {
        let agents = [AgentId(0)];
        let err = check_verdicts("c", &agents, &map(&[(0, true), (9, true)])).unwrap_err();
        assert_eq!(
            err,
            DoneError::UnexpectedAgent {
                condition: "c".into(),
                agent: AgentId(9),
            }
        );
    }

    #[test]
    fn duplicate_requests_need_one_verdict() {
        let agents = [AgentId(0), AgentId(0), AgentId(1)];
        assert!(check_verdicts("c", &agents, &map(&[(0, true), (1, false)])).is_ok());
        let err = check_verdicts("c", &agents, &map(&[(0, true), (1, false), (2, true)]))
            .unwrap_err();
        assert!(matches!(
            err,
            DoneError::UnexpectedAgent {
                agent: AgentId(2),
                ..
            }
        ));
    }

    #[test]
    fn large_exact_match_passes() {
        let agents: Vec<AgentId> = (0..10_000).map(AgentId).collect();
        let dones: DoneMap = agents.iter().rev().map(|&a| (a, a.0 % 2 == 0)).collect();
        assert!(check_verdicts("c", &agents, &dones).is_ok());

        let mut extra = dones.clone();
        extra.insert(AgentId(10_000), true);
        let err = check_verdicts("c", &agents, &extra).unwrap_err();
        assert_eq!(
            err,
            DoneError::UnexpectedAgent {
                condition: "c".into(),
                agent: AgentId(10_000),
            }
        );
    }

    #[test]
    fn empty_request_accepts_empty_map() {
        assert!(check_verdicts("c", &[], &DoneMap::new()).is_ok());
    }
}
