//! Core types for Gatewalker: rooms, objects, and the world model.
//!
//! This crate defines the data the engine plays against. Rooms and objects
//! live in two positional tables owned by a [`World`]; identities are indices
//! into those tables and stay stable for the life of a session. You can
//! construct a [`World`] programmatically from any content set. The tables
//! are validated once at construction and mutated only through the world's
//! narrow mutator surface afterwards.

/// The four cardinal directions and the canonical exit-slot order.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Interactable objects and their identifiers.
pub mod object;
/// Rooms, their identifiers, and the four-slot exit array.
pub mod room;
/// The central world model that owns the room and object tables.
pub mod world;

/// Re-export direction types.
pub use direction::Direction;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export object types.
pub use object::{GameObject, ObjectId};
/// Re-export room types.
pub use room::{Room, RoomId};
/// Re-export the world model.
pub use world::World;
