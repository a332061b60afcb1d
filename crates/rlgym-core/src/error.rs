//! Error types for rlgym-rs.
//!
//! Two classes exist: [`ConfigError`] for invalid construction-time
//! configuration, and [`DoneError`] for contract violations detected while
//! evaluating done conditions. Neither is recoverable; both are surfaced to
//! the caller immediately.

use std::error::Error;
use std::fmt;

use crate::id::AgentId;

/// Errors detected while constructing a condition or state setter.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A combinator was constructed with no child conditions.
    EmptyCombinator {
        /// Name of the combinator type.
        combinator: &'static str,
    },
    /// A probability is NaN or outside `[0, 1]`.
    InvalidProbability {
        /// Name of the offending configuration entry.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A field bound is non-finite, negative, or inverted.
    InvalidBounds {
        /// Description of which invariant was violated.
        reason: String,
    },
    /// A timeout duration is zero or not finite.
    InvalidTimeout {
        /// Description of the rejected duration.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCombinator { combinator } => {
                write!(f, "{combinator} requires at least one child condition")
            }
            Self::InvalidProbability { name, value } => {
                write!(f, "{name} must be a probability in [0, 1], got {value}")
            }
            Self::InvalidBounds { reason } => write!(f, "invalid field bounds: {reason}"),
            Self::InvalidTimeout { reason } => write!(f, "invalid timeout: {reason}"),
        }
    }
}

impl Error for ConfigError {}

/// Errors from evaluating a done condition.
///
/// Returned by [`DoneCondition::is_done`](crate::DoneCondition::is_done).
/// A combinator wraps a child's failure in [`DoneError::ConditionFailed`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DoneError {
    /// A condition's verdict map lacks an agent that was requested.
    MissingAgent {
        /// Name of the condition that produced the map.
        condition: String,
        /// The agent with no verdict.
        agent: AgentId,
    },
    /// A condition's verdict map contains an agent that was not requested.
    UnexpectedAgent {
        /// Name of the condition that produced the map.
        condition: String,
        /// The agent that should not be present.
        agent: AgentId,
    },
    /// A child condition of a combinator failed.
    ConditionFailed {
        /// Name of the failing child.
        condition: String,
        /// The underlying error.
        reason: Box<DoneError>,
    },
}

impl fmt::Display for DoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAgent { condition, agent } => {
                write!(f, "condition '{condition}' returned no verdict for agent {agent}")
            }
            Self::UnexpectedAgent { condition, agent } => {
                write!(f, "condition '{condition}' returned a verdict for unrequested agent {agent}")
            }
            Self::ConditionFailed { condition, reason } => {
                write!(f, "condition '{condition}' failed: {reason}")
            }
        }
    }
}

impl Error for DoneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ConditionFailed { reason, .. } => Some(reason.as_ref()),
            _ => None,
        }
    }
}
