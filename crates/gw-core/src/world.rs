//! The central world model that owns the room and object tables.

use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};
use crate::object::{GameObject, ObjectId};
use crate::room::{Room, RoomId};

/// Owns the room and object tables and the only mutation surface over them.
///
/// Identities are positions in the tables, fixed for the life of the world.
/// The accessors and mutators check nothing beyond identity-in-range;
/// semantic checks (takability, reachability) belong to callers. An
/// out-of-range id is a programming error and panics; with the tables
/// validated at construction, no validated content can reach one.
#[derive(Debug, Clone)]
pub struct World {
    rooms: Vec<Room>,
    objects: Vec<GameObject>,
}

impl World {
    /// Build a world from its content tables, validating every exit target,
    /// object placement, status index, and alias list.
    pub fn new(rooms: Vec<Room>, objects: Vec<GameObject>) -> CoreResult<Self> {
        for (index, room) in rooms.iter().enumerate() {
            for direction in Direction::ALL {
                if let Some(target) = room.exit(direction)
                    && target.0 >= rooms.len()
                {
                    return Err(CoreError::ExitOutOfRange {
                        room: RoomId(index),
                        direction,
                        target,
                    });
                }
            }
        }

        for object in &objects {
            if let Some(room) = object.location
                && room.0 >= rooms.len()
            {
                return Err(CoreError::LocationOutOfRange {
                    name: object.name.clone(),
                    room,
                });
            }
            if let Some(status) = object.status
                && status >= object.status_messages.len()
            {
                return Err(CoreError::StatusOutOfRange {
                    name: object.name.clone(),
                    status,
                    len: object.status_messages.len(),
                });
            }

            let mut seen: Vec<&str> = Vec::with_capacity(object.aliases.len() + 1);
            for token in std::iter::once(object.name.as_str())
                .chain(object.aliases.iter().map(String::as_str))
            {
                if seen.contains(&token) {
                    return Err(CoreError::DuplicateAlias {
                        name: object.name.clone(),
                        alias: token.to_string(),
                    });
                }
                seen.push(token);
            }
        }

        Ok(Self { rooms, objects })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The room with the given id. Panics if the id is out of range.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// The object with the given id. Panics if the id is out of range.
    pub fn object(&self, id: ObjectId) -> &GameObject {
        &self.objects[id.0]
    }

    /// Iterate over all rooms in table order with their positional ids.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, room)| (RoomId(index), room))
    }

    /// Iterate over all objects in table order with their positional ids.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &GameObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (ObjectId(index), object))
    }

    /// How many rooms the world holds.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// How many objects the world holds.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Whether the id names a room in the table.
    pub fn contains_room(&self, id: RoomId) -> bool {
        id.0 < self.rooms.len()
    }

    /// Whether the id names an object in the table.
    pub fn contains_object(&self, id: ObjectId) -> bool {
        id.0 < self.objects.len()
    }

    // -----------------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------------

    /// Move an object to a room, or out of the world with `None`.
    /// Panics if the object id is out of range.
    pub fn set_object_location(&mut self, id: ObjectId, location: Option<RoomId>) {
        self.objects[id.0].location = location;
    }

    /// Rewrite an object's status. Panics if the object id is out of range.
    pub fn set_object_status(&mut self, id: ObjectId, status: Option<usize>) {
        self.objects[id.0].status = status;
    }

    /// Rewrite one of a room's exit slots. Panics if the room id is out of
    /// range.
    pub fn set_room_exit(&mut self, id: RoomId, direction: Direction, target: Option<RoomId>) {
        self.rooms[id.0].set_exit(direction, target);
    }
}
