//! Rooms and their exit arrays.

use std::fmt;

use crate::direction::Direction;

/// Identifies a room by its position in the world's room table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the room graph: a description and exactly four exit slots,
/// one per [`Direction`]. An empty slot means no passage that way.
#[derive(Debug, Clone)]
pub struct Room {
    /// Text printed when the player looks around this room.
    pub description: String,
    exits: [Option<RoomId>; 4],
}

impl Room {
    /// Create a room with no exits.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            exits: [None; 4],
        }
    }

    /// Set an exit slot at construction time.
    pub fn with_exit(mut self, direction: Direction, room: RoomId) -> Self {
        self.exits[direction.index()] = Some(room);
        self
    }

    /// The room this direction leads to, if a passage exists.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits[direction.index()]
    }

    /// Rewrite one exit slot. Runtime exit mutation goes through
    /// [`World::set_room_exit`](crate::World::set_room_exit).
    pub(crate) fn set_exit(&mut self, direction: Direction, room: Option<RoomId>) {
        self.exits[direction.index()] = room;
    }
}
