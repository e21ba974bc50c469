//! Command parsing for player input.

use gw_core::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the list of commands.
    Help,
    /// Reprint the current room.
    Look,
    /// Examine an object.
    Examine {
        /// The object token, if one followed the verb.
        target: Option<String>,
    },
    /// Take an object.
    Take {
        /// The object token, if one followed the verb.
        target: Option<String>,
    },
    /// Use an object.
    Use {
        /// The object token, if one followed the verb.
        target: Option<String>,
    },
    /// List the player's inventory.
    Inventory,
    /// Move in a cardinal direction.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// Leave the game.
    Quit,
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Accepted spellings per verb. Matching is exact-case, so the recognized
/// vocabulary is exactly these literals: no folding, no prefixes.
const HELP_VERBS: &[&str] = &["Help", "HELP", "help", "H", "h", "?"];
const LOOK_VERBS: &[&str] = &["Look", "LOOK", "look", "L", "l"];
const EXAMINE_VERBS: &[&str] = &["Examine", "EXAMINE", "examine", "Ex", "EX", "ex", "X", "x"];
const TAKE_VERBS: &[&str] = &["Take", "TAKE", "take", "T", "t"];
const USE_VERBS: &[&str] = &["Use", "USE", "use", "U", "u"];
const INVENTORY_VERBS: &[&str] = &[
    "Inventory",
    "INVENTORY",
    "inventory",
    "Inv",
    "INV",
    "inv",
    "I",
    "i",
];
const NORTH_VERBS: &[&str] = &["North", "NORTH", "north", "N", "n"];
const EAST_VERBS: &[&str] = &["East", "EAST", "east", "E", "e"];
const SOUTH_VERBS: &[&str] = &["South", "SOUTH", "south", "S", "s"];
const WEST_VERBS: &[&str] = &["West", "WEST", "west", "W", "w"];
const QUIT_VERBS: &[&str] = &["Exit", "EXIT", "exit"];

/// Parse a player input line into a command.
///
/// The line splits on the first space only: the verb is everything before
/// it, the target everything after it, verbatim. A line with no space has
/// no target.
pub fn parse_command(input: &str) -> Command {
    let (verb, target) = match input.split_once(' ') {
        Some((verb, rest)) => (verb, Some(rest.to_string())),
        None => (input, None),
    };

    if HELP_VERBS.contains(&verb) {
        return Command::Help;
    }
    if LOOK_VERBS.contains(&verb) {
        return Command::Look;
    }
    if EXAMINE_VERBS.contains(&verb) {
        return Command::Examine { target };
    }
    if TAKE_VERBS.contains(&verb) {
        return Command::Take { target };
    }
    if USE_VERBS.contains(&verb) {
        return Command::Use { target };
    }
    if INVENTORY_VERBS.contains(&verb) {
        return Command::Inventory;
    }
    if NORTH_VERBS.contains(&verb) {
        return Command::Move {
            direction: Direction::North,
        };
    }
    if EAST_VERBS.contains(&verb) {
        return Command::Move {
            direction: Direction::East,
        };
    }
    if SOUTH_VERBS.contains(&verb) {
        return Command::Move {
            direction: Direction::South,
        };
    }
    if WEST_VERBS.contains(&verb) {
        return Command::Move {
            direction: Direction::West,
        };
    }
    if QUIT_VERBS.contains(&verb) {
        return Command::Quit;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}
