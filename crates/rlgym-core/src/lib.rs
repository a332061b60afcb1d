//! Core types and traits for rlgym-rs environments.
//!
//! This is the leaf crate of the workspace. It defines the abstractions
//! shared by done conditions and state setters: agent IDs, the read-only
//! [`GameState`] snapshot, the per-episode [`SharedInfo`] context, the
//! [`StateWrapper`] initialization handle, error types, and the field
//! geometry constants in [`common_values`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod common_values;
pub mod error;
pub mod id;
pub mod shared_info;
pub mod state;
pub mod traits;
pub mod wrapper;

pub use error::{ConfigError, DoneError};
pub use id::{AgentId, Team};
pub use shared_info::{SharedInfo, SharedValue};
pub use state::{Car, DoneMap, GameState, PhysicsObject, Rotation};
pub use traits::{BodyInit, DoneCondition, StateInitHandle, StateSetter};
pub use wrapper::{BodyWrapper, CarWrapper, PartialRotation, PartialVec3, StateWrapper};
