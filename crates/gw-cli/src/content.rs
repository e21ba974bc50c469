//! The shipped campaign: a walled valley, a hungry creature, and a locked
//! gate.

use gw_core::{CoreResult, Direction, GameObject, ObjectId, Room, RoomId, World};
use gw_engine::{PuzzleRule, Scenario};

const FIRST_CELL: RoomId = RoomId(0);
const CLEARING: RoomId = RoomId(1);
const GARDEN_PLOT: RoomId = RoomId(2);
const SECOND_CELL: RoomId = RoomId(3);
const FORK: RoomId = RoomId(4);
const ARCHWAY: RoomId = RoomId(5);
const LAKESIDE: RoomId = RoomId(6);
const BEYOND_THE_GATE: RoomId = RoomId(7);

const GATE: ObjectId = ObjectId(1);
const ONION: ObjectId = ObjectId(3);
const KEY: ObjectId = ObjectId(4);
const CREATURE: ObjectId = ObjectId(6);

/// Build the shipped campaign scenario.
///
/// Identities are positional, so the rule table and placements below must
/// track the construction order of the two tables.
pub fn valley_of_the_gate() -> CoreResult<Scenario> {
    let rooms = vec![
        Room::new(
            "You are in a small stone room with no furnishings.  Near the doorway is a tablet \
             with writing on it.",
        )
        .with_exit(Direction::East, CLEARING),
        Room::new(
            "You are in a small clearing at the bottom of a steep valley.  There appear to be a \
             few small stone houses in the area, and a path leading off to the east.",
        )
        .with_exit(Direction::North, GARDEN_PLOT)
        .with_exit(Direction::East, FORK)
        .with_exit(Direction::South, SECOND_CELL)
        .with_exit(Direction::West, FIRST_CELL),
        Room::new(
            "You are in what appears to have been a small herb garden in front of a crumbling \
             structure.  A few plants are still growing, but much of the area has been overgrown \
             with weeds.",
        )
        .with_exit(Direction::South, CLEARING),
        Room::new("You are in a small stone room with no furnishings.")
            .with_exit(Direction::North, CLEARING),
        Room::new("You are on a path through some dense woods.  There is a fork in the path here.")
            .with_exit(Direction::East, ARCHWAY)
            .with_exit(Direction::South, LAKESIDE)
            .with_exit(Direction::West, CLEARING),
        Room::new("You are standing before a large stone archway with a gate set in it.")
            .with_exit(Direction::West, FORK),
        Room::new(
            "You are at the edge of a small lake in the valley.  The water appears to be clear \
             and calm.",
        )
        .with_exit(Direction::North, FORK),
        // Beyond the gate. Reaching it ends the game, so it needs no text.
        Room::new(""),
    ];

    let objects = vec![
        GameObject::new(
            "Tablet",
            "As each eon comes to a close an individual is chosen to open the gate to prosperity \
             for posterity.  As you now read this, know that you have been selected for this \
             task.  Seek ye the gate and the key and pass through, that those who come after may \
             follow.",
        )
        .with_aliases(["TABLET", "tablet", "Tab", "TAB", "tab"])
        .at(FIRST_CELL),
        GameObject::new(
            "Gate",
            "The gate is formed of some gleaming metal and appears to be polished to a high \
             luster.",
        )
        .with_aliases(["GATE", "gate"])
        .at(ARCHWAY)
        .with_status(0, ["The gate is locked.", "The gate is unlocked."]),
        GameObject::new(
            "Garden",
            "The garden is almost completely overgrown with weeds.  There appear to still be \
             some onions growing off to one side.",
        )
        .with_aliases([
            "GARDEN", "garden", "Plant", "PLANT", "plant", "Plants", "PLANTS", "plants", "Herb",
            "HERB", "herb", "Herbs", "HERBS", "herbs", "Weeds", "WEEDS", "weeds",
        ])
        .at(GARDEN_PLOT),
        GameObject::new("Onion", "It's a fresh onion.")
            .with_aliases(["ONION", "onion", "Onions", "ONIONS", "onions"])
            .at(GARDEN_PLOT)
            .usable()
            .takable()
            .with_use_message(
                "You offer the onion to the creature, which accepts it with a broad smile.  The \
                 creature removes the shiny object hanging from its neck and hands it to you \
                 before wandering off to eat.",
            )
            .with_take_message("You dig up a fresh onion and take it with you."),
        GameObject::new("Key", "It looks like a gleaming brass key.")
            .with_aliases(["KEY", "key"])
            .usable()
            .with_use_message("You unlock the gate with the key.")
            .with_take_message("You have received a key."),
        GameObject::new("Water", "The water appears to be calm and clear.")
            .with_aliases(["WATER", "water", "Lake", "LAKE", "lake"])
            .at(LAKESIDE),
        GameObject::new(
            "Creature",
            "The creature walks in a constant slouch and still stands nearly twice your height.  \
             There is a shiny object hanging by a thong from its neck. It seems hungry.",
        )
        .with_aliases(["CREATURE", "creature"])
        .at(LAKESIDE)
        .with_status(
            0,
            [
                "There is a large bipedal creature here.  You hear it mumble about needing \
                 something to eat.",
                "There is a large bipedal creature here.  It has a hungry look in its eyes when \
                 it sees you.",
            ],
        ),
    ];

    let world = World::new(rooms, objects)?;

    Ok(Scenario::new(world, FIRST_CELL, BEYOND_THE_GATE, CREATURE)
        .with_rule(
            ONION,
            PuzzleRule::Feed {
                adversary: CREATURE,
                reward: KEY,
            },
        )
        .with_rule(
            KEY,
            PuzzleRule::Unlock {
                barrier: GATE,
                direction: Direction::East,
                destination: BEYOND_THE_GATE,
            },
        )
        .with_opening("You wake up on a dirt floor with no recollection of how you came to be here.")
        .with_victory(
            "Congratulations!  You have successfully opened the gate and stepped out into the \
             world once more!",
        )
        .with_defeat(
            "The creature attacked you in the throes of its hunger.  Defenseless, you stood no \
             chance.  You have died and failed.",
        ))
}
