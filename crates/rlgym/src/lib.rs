//! rlgym-rs: episode plumbing for Rocket League reinforcement-learning
//! environments.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all rlgym-rs sub-crates. For most users, adding `rlgym` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rlgym::prelude::*;
//!
//! // Random kickoff-free placement, reproducible from the seed.
//! let mut setter = RandomState::builder()
//!     .agent_random_speed_probability(0.2)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! let mut wrapper = StateWrapper::new(1, 1);
//! setter.reset(&mut wrapper);
//! let initial = wrapper.into_game_state(0);
//!
//! // End the episode on a goal or after 10 seconds of play.
//! let mut done = AnyCondition::new(vec![
//!     Box::new(GoalScoredCondition) as Box<dyn DoneCondition>,
//!     Box::new(TimeoutCondition::from_seconds(10.0).unwrap()),
//! ])
//! .unwrap();
//! let mut info = SharedInfo::new();
//! done.reset(&initial, &mut info);
//!
//! let agents = initial.agent_ids();
//! let dones = done.is_done(&agents, &initial, &mut info).unwrap();
//! assert!(dones.values().all(|&d| !d));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rlgym-core` | IDs, snapshots, state handle, errors, traits, constants |
//! | [`done`] | `rlgym-done` | Done conditions and combinators |
//! | [`state`] | `rlgym-state` | Field bounds, sampling, `RandomState` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`rlgym-core`).
///
/// Contains the [`types::GameState`] snapshot, [`types::SharedInfo`],
/// the [`types::StateWrapper`] handle, and the field geometry in
/// [`types::common_values`].
pub use rlgym_core as types;

/// Episode termination conditions (`rlgym-done`).
///
/// Leaf conditions [`done::GoalScoredCondition`] and
/// [`done::TimeoutCondition`], combined with [`done::AllCondition`] or
/// [`done::AnyCondition`].
pub use rlgym_done as done;

/// Initial-state setters (`rlgym-state`).
///
/// [`state::RandomState`] with its [`state::RandomStateConfig`] and
/// [`state::FieldBounds`].
pub use rlgym_state as state;

/// Common imports for typical rlgym-rs usage.
///
/// ```rust
/// use rlgym::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use rlgym_core::{
        AgentId, DoneCondition, DoneMap, GameState, PhysicsObject, SharedInfo, SharedValue,
        StateInitHandle, StateSetter, StateWrapper, Team,
    };

    // Errors
    pub use rlgym_core::{ConfigError, DoneError};

    // Conditions
    pub use rlgym_done::{AllCondition, AnyCondition, GoalScoredCondition, TimeoutCondition};

    // State setters
    pub use rlgym_state::{FieldBounds, RandomState, RandomStateConfig};
}
