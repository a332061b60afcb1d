//! Episode termination conditions for rlgym-rs.
//!
//! Leaf conditions decide per-agent verdicts from a [`GameState`] snapshot;
//! combinators fold the verdicts of their children:
//!
//! - [`GoalScoredCondition`]: every agent is done once a goal is scored.
//! - [`TimeoutCondition`]: every agent is done a fixed number of ticks
//!   after reset.
//! - [`AllCondition`]: per-agent AND over children.
//! - [`AnyCondition`]: per-agent OR over children.
//!
//! Combinators validate each child's output with [`check_verdicts`] and
//! fail fast on a malformed map.
//!
//! [`GameState`]: rlgym_core::GameState

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod all;
pub mod any;
mod combine;
pub mod goal;
pub mod timeout;
pub mod verdicts;

pub use all::AllCondition;
pub use any::AnyCondition;
pub use goal::GoalScoredCondition;
pub use timeout::TimeoutCondition;
pub use verdicts::check_verdicts;
