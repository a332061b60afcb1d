//! Strongly-typed agent identifiers and team assignment.

use std::fmt;

/// Identifies one controllable agent (one car) within an episode.
///
/// IDs are assigned by the harness and stay stable for the lifetime of
/// an episode. `AgentId(n)` carries no ordering semantics beyond being
/// a hashable, comparable key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// The side a car plays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Team {
    /// Blue team, defending the negative-Y goal.
    Blue,
    /// Orange team, defending the positive-Y goal.
    Orange,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blue => write!(f, "blue"),
            Self::Orange => write!(f, "orange"),
        }
    }
}
