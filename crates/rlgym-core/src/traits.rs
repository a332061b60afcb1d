//! Extension traits: done conditions, state setters, and the state
//! initialization handle they write through.

use crate::error::DoneError;
use crate::id::AgentId;
use crate::shared_info::SharedInfo;
use crate::state::{DoneMap, GameState};
use crate::wrapper::{PartialRotation, PartialVec3};

/// A per-agent episode termination predicate.
///
/// # Contract
///
/// - `is_done()` returns exactly one verdict per entry of `agents`, and
///   nothing else. Combinators treat any other shape as a fatal error.
/// - `reset()` is called once per episode with the freshly initialized
///   state, before the first `is_done()` of that episode.
/// - Per-episode bookkeeping lives in `self` (cleared by `reset`) or in
///   `shared_info`. Nothing may be retained across calls by reference.
///
/// # Object safety
///
/// This trait is object-safe; combinators store children as
/// `Vec<Box<dyn DoneCondition>>`.
///
/// # Examples
///
/// A condition that ends the episode once the ball leaves the ground:
///
/// ```
/// use rlgym_core::{AgentId, DoneCondition, DoneError, DoneMap, GameState, SharedInfo};
///
/// struct BallAirborne {
///     height: f32,
/// }
///
/// impl DoneCondition for BallAirborne {
///     fn name(&self) -> &str { "ball_airborne" }
///
///     fn reset(&mut self, _initial_state: &GameState, _shared_info: &mut SharedInfo) {}
///
///     fn is_done(
///         &self,
///         agents: &[AgentId],
///         state: &GameState,
///         _shared_info: &mut SharedInfo,
///     ) -> Result<DoneMap, DoneError> {
///         let done = state.ball.position.z > self.height;
///         Ok(agents.iter().map(|&agent| (agent, done)).collect())
///     }
/// }
///
/// let cond = BallAirborne { height: 300.0 };
/// let dones = cond
///     .is_done(&[AgentId(0)], &GameState::new(), &mut SharedInfo::new())
///     .unwrap();
/// assert_eq!(dones[&AgentId(0)], false);
/// ```
pub trait DoneCondition: Send + 'static {
    /// Human-readable name for error reporting and logging.
    fn name(&self) -> &str;

    /// Arm per-episode bookkeeping from the initial state.
    fn reset(&mut self, initial_state: &GameState, shared_info: &mut SharedInfo);

    /// Evaluate the verdict for every agent in `agents`.
    fn is_done(
        &self,
        agents: &[AgentId],
        state: &GameState,
        shared_info: &mut SharedInfo,
    ) -> Result<DoneMap, DoneError>;
}

/// Write-only access to one rigid body of the about-to-begin state.
///
/// Every setter takes a partial value; axes left as `None` keep whatever
/// the body already holds.
pub trait BodyInit {
    /// Overwrite the named position axes.
    fn set_position(&mut self, position: PartialVec3);

    /// Overwrite the named rotation angles.
    fn set_rotation(&mut self, rotation: PartialRotation);

    /// Overwrite the named linear velocity axes.
    fn set_linear_velocity(&mut self, velocity: PartialVec3);

    /// Overwrite the named angular velocity axes.
    fn set_angular_velocity(&mut self, velocity: PartialVec3);
}

/// Mutable projection of the about-to-begin world state.
///
/// Implemented by [`StateWrapper`](crate::StateWrapper); tests substitute
/// recording implementations.
pub trait StateInitHandle {
    /// The ball.
    fn ball_mut(&mut self) -> &mut dyn BodyInit;

    /// Number of cars.
    fn car_count(&self) -> usize;

    /// The car at `index`, or `None` past the end.
    fn car_mut(&mut self, index: usize) -> Option<&mut dyn BodyInit>;

    /// Agent IDs of every car, in index order.
    fn car_ids(&self) -> Vec<AgentId>;
}

/// Produces the initial world state of an episode.
pub trait StateSetter: Send + 'static {
    /// Write the initial configuration of every body through `state`.
    fn reset(&mut self, state: &mut dyn StateInitHandle);
}
