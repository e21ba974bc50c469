//! Player state: current room and inventory.

use gw_core::{ObjectId, RoomId};

/// The player's position and holdings.
///
/// Inventory order is take order. An object can only be in one place, so
/// `add_item` refuses duplicates rather than trusting callers to check.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// The room the player currently occupies.
    pub current_room: RoomId,
    /// Held objects, in the order they were taken.
    pub inventory: Vec<ObjectId>,
}

impl PlayerState {
    /// Create a player at the given room with an empty inventory.
    pub fn new(start: RoomId) -> Self {
        Self {
            current_room: start,
            inventory: Vec::new(),
        }
    }

    /// Check if the player holds an object.
    pub fn has_item(&self, id: ObjectId) -> bool {
        self.inventory.contains(&id)
    }

    /// Add an object to the inventory unless already held.
    pub fn add_item(&mut self, id: ObjectId) {
        if !self.inventory.contains(&id) {
            self.inventory.push(id);
        }
    }

    /// Remove an object from the inventory. Returns whether it was held.
    pub fn remove_item(&mut self, id: ObjectId) -> bool {
        if let Some(position) = self.inventory.iter().position(|&held| held == id) {
            self.inventory.remove(position);
            true
        } else {
            false
        }
    }
}
