//! The pursuing adversary: hostility escalation and movement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gw_core::{Direction, ObjectId, RoomId, World};

use crate::turn::TurnState;

/// Behavior states of the adversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hostility {
    /// Wandering at random, harmless.
    Dormant,
    /// Pursuing the player.
    Hostile,
}

/// The creature that hunts the player on a timer.
///
/// Hostility is derived from the adversary object's status in the world, so
/// the same status value selects its room message: a dormant adversary
/// reads as status 0, a hostile one as status 1. The transition is one-way.
pub struct Adversary {
    object: ObjectId,
    rng: StdRng,
}

impl std::fmt::Debug for Adversary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adversary")
            .field("object", &self.object)
            .finish()
    }
}

impl Adversary {
    /// Create an adversary driving the given object, with a seeded RNG for
    /// its fallback movement.
    pub fn new(object: ObjectId, seed: u64) -> Self {
        Self {
            object,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The object this adversary drives.
    pub fn object(&self) -> ObjectId {
        self.object
    }

    /// The adversary's current behavior state, read from its status.
    pub fn hostility(&self, world: &World) -> Hostility {
        match world.object(self.object).status {
            Some(status) if status > 0 => Hostility::Hostile,
            _ => Hostility::Dormant,
        }
    }

    /// Mark the adversary hostile. Idempotent; there is no way back.
    pub fn escalate(&self, world: &mut World) {
        world.set_object_status(self.object, Some(1));
    }

    /// Evaluate one movement step.
    ///
    /// Does nothing once the adversary has been removed from the world.
    /// A hostile adversary sharing the player's room stays put and raises
    /// the encounter flag; a hostile one a single passage away steps toward
    /// the player and clears it. In every other case the destination is a
    /// uniform draw over the current room and each of its exits.
    pub fn advance(&mut self, world: &mut World, player_room: RoomId, turns: &mut TurnState) {
        let Some(location) = world.object(self.object).location else {
            return;
        };

        let mut destination = None;
        if self.hostility(world) == Hostility::Hostile {
            if location == player_room {
                turns.set_encounter(true);
                destination = Some(location);
            } else {
                turns.set_encounter(false);
                destination = Direction::ALL
                    .iter()
                    .find_map(|&direction| {
                        world
                            .room(location)
                            .exit(direction)
                            .filter(|&exit| exit == player_room)
                    });
            }
        }

        let destination = destination.unwrap_or_else(|| {
            let mut choices = vec![location];
            for direction in Direction::ALL {
                if let Some(exit) = world.room(location).exit(direction) {
                    choices.push(exit);
                }
            }
            choices[self.rng.random_range(0..choices.len())]
        });
        world.set_object_location(self.object, Some(destination));
    }
}
