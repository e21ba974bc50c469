//! The scenario content contract a session is built from.

use gw_core::{Direction, ObjectId, RoomId, World};

/// A scripted interaction fired when the player uses a specific object.
///
/// Puzzle behavior is a closed table on the scenario, keyed by the used
/// object's identity: content authors a small, fixed set of interactions,
/// and everything that can gate progress is listed in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleRule {
    /// Give the used object to the adversary. Works only when the adversary
    /// shares the player's room: the used object is consumed, the adversary
    /// leaves the world, and the reward lands in the player's inventory.
    Feed {
        /// The adversary object that must be present.
        adversary: ObjectId,
        /// The object granted on success.
        reward: ObjectId,
    },
    /// Open a barrier with the used object. Works only when the barrier
    /// shares the player's room: the used object is consumed, the barrier's
    /// status flips to 1, and the room's exit in the given direction is
    /// rewritten to the destination.
    Unlock {
        /// The barrier object that must be present.
        barrier: ObjectId,
        /// The exit slot rewritten on success.
        direction: Direction,
        /// Where the rewritten exit leads.
        destination: RoomId,
    },
}

/// Everything a session needs to run one game: the world, where the player
/// starts, where they must reach, who hunts them, the framing narration,
/// and the puzzle rule table.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// The validated world the game plays in.
    pub world: World,
    /// The room the player starts in.
    pub start: RoomId,
    /// Reaching this room wins the game.
    pub goal: RoomId,
    /// The object the adversary controller drives.
    pub adversary: ObjectId,
    /// Narration printed once before the first prompt.
    pub opening: String,
    /// Narration printed on victory.
    pub victory: String,
    /// Narration printed on defeat.
    pub defeat: String,
    /// Scripted interactions keyed by used-object identity.
    pub rules: Vec<(ObjectId, PuzzleRule)>,
}

impl Scenario {
    /// Create a scenario with no rules and empty narration.
    pub fn new(world: World, start: RoomId, goal: RoomId, adversary: ObjectId) -> Self {
        Self {
            world,
            start,
            goal,
            adversary,
            opening: String::new(),
            victory: String::new(),
            defeat: String::new(),
            rules: Vec::new(),
        }
    }

    /// Add a puzzle rule for an object.
    pub fn with_rule(mut self, object: ObjectId, rule: PuzzleRule) -> Self {
        self.rules.push((object, rule));
        self
    }

    /// Set the opening narration.
    pub fn with_opening(mut self, text: impl Into<String>) -> Self {
        self.opening = text.into();
        self
    }

    /// Set the victory narration.
    pub fn with_victory(mut self, text: impl Into<String>) -> Self {
        self.victory = text.into();
        self
    }

    /// Set the defeat narration.
    pub fn with_defeat(mut self, text: impl Into<String>) -> Self {
        self.defeat = text.into();
        self
    }
}
