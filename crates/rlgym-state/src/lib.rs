//! Randomized initial-state setters for rlgym-rs episodes.
//!
//! [`RandomState`] places the ball and every car at a random, bounds-valid
//! position and orientation, optionally gives them random velocities, and
//! optionally snaps cars onto the ground. All randomness flows from a
//! per-instance seeded ChaCha8 generator, so identical seeds produce
//! identical states.
//!
//! Constructed via [`RandomState::builder`] or from a [`RandomStateConfig`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bounds;
pub mod random_state;
pub mod sampling;

pub use bounds::FieldBounds;
pub use random_state::{RandomState, RandomStateBuilder, RandomStateConfig};
