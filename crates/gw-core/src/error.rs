//! Error types used throughout the crate.

use crate::direction::Direction;
use crate::room::RoomId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Content validation errors raised when a world is constructed.
///
/// These surface content-authoring mistakes. After a world passes
/// construction the identity space is closed and fixed, so identity lookups
/// panic on out-of-range ids instead of returning errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A room's exit slot points past the end of the room table.
    #[error("room {room} exit {direction} leads to a room that does not exist: {target}")]
    ExitOutOfRange {
        /// The room with the bad exit.
        room: RoomId,
        /// The exit slot holding the bad target.
        direction: Direction,
        /// The out-of-range target.
        target: RoomId,
    },

    /// An object is placed in a room that does not exist.
    #[error("object \"{name}\" is placed in a room that does not exist: {room}")]
    LocationOutOfRange {
        /// The misplaced object's name.
        name: String,
        /// The out-of-range room.
        room: RoomId,
    },

    /// An object's status does not index into its status messages.
    #[error("object \"{name}\" status {status} is outside its {len} status messages")]
    StatusOutOfRange {
        /// The object's name.
        name: String,
        /// The out-of-range status value.
        status: usize,
        /// How many status messages the object has.
        len: usize,
    },

    /// A token appears more than once among an object's name and aliases.
    #[error("object \"{name}\" lists \"{alias}\" more than once among its names")]
    DuplicateAlias {
        /// The object's name.
        name: String,
        /// The repeated token.
        alias: String,
    },
}
