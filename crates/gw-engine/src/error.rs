//! Error types for the engine crate.

use thiserror::Error;

use gw_core::{ObjectId, RoomId};

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised when a session is assembled from a scenario.
///
/// Player input never produces an `Err`: bad input is answered with fixed
/// in-fiction text on the turn report. These errors mean the scenario names
/// an identity its own world does not contain.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A scenario references a room the world does not contain.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A scenario references an object the world does not contain.
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),
}
