//! Session management and the per-verb action handlers.

use gw_core::{Direction, ObjectId, RoomId, World};

use crate::adversary::Adversary;
use crate::error::{EngineError, EngineResult};
use crate::parser::{Command, parse_command, resolve_object};
use crate::player::PlayerState;
use crate::scenario::{PuzzleRule, Scenario};
use crate::turn::TurnState;

/// Thresholds and seed for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for the adversary's fallback movement.
    pub seed: u64,
    /// The adversary starts moving once the turn count exceeds this.
    pub roam_after: u32,
    /// The adversary turns hostile once the turn count exceeds this.
    pub hostile_after: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            roam_after: 9,
            hostile_after: 24,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed for the adversary's fallback movement.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the turn count the adversary starts moving after.
    pub fn with_roam_after(mut self, turns: u32) -> Self {
        self.roam_after = turns;
        self
    }

    /// Set the turn count the adversary turns hostile after.
    pub fn with_hostile_after(mut self, turns: u32) -> Self {
        self.hostile_after = turns;
        self
    }
}

/// A terminal evaluation outcome. A player-requested exit is a flag on the
/// [`TurnReport`], not an ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player reached the goal room.
    Victory,
    /// The hostile adversary caught the player.
    Defeat,
}

/// What one processed input line produced.
#[derive(Debug, Clone, Default)]
pub struct TurnReport {
    /// Text to show the player. Empty when the command said nothing.
    pub text: String,
    /// Whether the room should be reprinted before the next prompt.
    pub reprint_room: bool,
    /// Whether the player asked to leave the game.
    pub quit: bool,
}

const MSG_UNKNOWN: &str =
    "I don't understand that command.  Please ask for HELP to see what commands are available.";
const MSG_NOT_SEEN: &str = "You do not see anything that is called that.";
const MSG_CANNOT_TAKE: &str = "You cannot take that.";
const MSG_DO_NOT_HAVE: &str = "You do not have that.";
const MSG_NOT_USABLE: &str = "You can't use that.  This situation shouldn't happen.";
const MSG_NO_RULE: &str =
    "You don't know how to use that.  You should speak with the developer about this.";
const MSG_NOT_HERE: &str = "You can't use that here.";
const MSG_NO_WAY: &str = "You see no way to go that direction.";
const MSG_EXAMINE_NOTHING: &str = "You carefully examine nothing.  There was nothing worth noting.";
const MSG_TAKE_NOTHING: &str = "You grasp at air, but fail to hold on to anything.";
const MSG_USE_NOTHING: &str = "You successfully use nothing.  There was no effect.";

const HELP_TEXT: &str = "Commands:
  Help
  Inventory
  Look
  Examine <Object>
  Take <Object>
  Use <Object>
  N or North
  E or East
  S or South
  W or West
  Exit";

/// One running game: the world plus the player, turn, and adversary state,
/// advanced one input line at a time.
///
/// The driving loop owns the session and calls, per iteration,
/// [`turn_start`](Self::turn_start) (win check, hostility escalation, loss
/// check, in that order, before any prompt), then
/// [`process`](Self::process) with the raw input line, then
/// [`turn_end`](Self::turn_end) (adversary movement) unless the report
/// asked to quit.
#[derive(Debug)]
pub struct Session {
    world: World,
    player: PlayerState,
    turns: TurnState,
    adversary: Adversary,
    goal: RoomId,
    rules: Vec<(ObjectId, PuzzleRule)>,
    opening: String,
    victory: String,
    defeat: String,
    config: SessionConfig,
}

impl Session {
    /// Build a session from a scenario, checking every identity the
    /// scenario names against its world.
    pub fn new(scenario: Scenario, config: SessionConfig) -> EngineResult<Self> {
        let Scenario {
            world,
            start,
            goal,
            adversary,
            opening,
            victory,
            defeat,
            rules,
        } = scenario;

        if !world.contains_room(start) {
            return Err(EngineError::RoomNotFound(start));
        }
        if !world.contains_room(goal) {
            return Err(EngineError::RoomNotFound(goal));
        }
        if !world.contains_object(adversary) {
            return Err(EngineError::ObjectNotFound(adversary));
        }
        for (object, rule) in &rules {
            if !world.contains_object(*object) {
                return Err(EngineError::ObjectNotFound(*object));
            }
            match *rule {
                PuzzleRule::Feed { adversary, reward } => {
                    if !world.contains_object(adversary) {
                        return Err(EngineError::ObjectNotFound(adversary));
                    }
                    if !world.contains_object(reward) {
                        return Err(EngineError::ObjectNotFound(reward));
                    }
                }
                PuzzleRule::Unlock {
                    barrier,
                    destination,
                    ..
                } => {
                    if !world.contains_object(barrier) {
                        return Err(EngineError::ObjectNotFound(barrier));
                    }
                    if !world.contains_room(destination) {
                        return Err(EngineError::RoomNotFound(destination));
                    }
                }
            }
        }

        Ok(Self {
            player: PlayerState::new(start),
            turns: TurnState::new(),
            adversary: Adversary::new(adversary, config.seed),
            world,
            goal,
            rules,
            opening,
            victory,
            defeat,
            config,
        })
    }

    /// The world as the game currently stands.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player's position and inventory.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The turn counter and encounter flag.
    pub fn turns(&self) -> &TurnState {
        &self.turns
    }

    /// Narration to print once before the first prompt.
    pub fn opening(&self) -> &str {
        &self.opening
    }

    /// Narration for a terminal outcome.
    pub fn ending_text(&self, ending: Ending) -> &str {
        match ending {
            Ending::Victory => &self.victory,
            Ending::Defeat => &self.defeat,
        }
    }

    /// Evaluate the top-of-loop checks: the win condition, hostility
    /// escalation, and the loss condition, in that order.
    ///
    /// Runs on every loop iteration, including those whose command consumed
    /// no turn, so escalation and death are never deferred by free actions.
    pub fn turn_start(&mut self) -> Option<Ending> {
        if self.player.current_room == self.goal {
            return Some(Ending::Victory);
        }

        if self.turns.count() > self.config.hostile_after {
            self.adversary.escalate(&mut self.world);
        }

        if self.turns.encounter()
            && self.world.object(self.adversary.object()).location
                == Some(self.player.current_room)
        {
            return Some(Ending::Defeat);
        }

        None
    }

    /// Interpret one raw input line and apply its command.
    ///
    /// Help, Inventory, and unrecognized verbs consume no turn. Every other
    /// recognized command consumes exactly one, including failed moves and
    /// Examine/Take/Use with no target.
    pub fn process(&mut self, input: &str) -> TurnReport {
        let mut report = TurnReport::default();
        match parse_command(input) {
            Command::Help => report.text = HELP_TEXT.to_string(),
            Command::Inventory => report.text = self.do_inventory(),
            Command::Unknown { .. } => report.text = MSG_UNKNOWN.to_string(),
            Command::Look => {
                self.turns.advance();
                report.reprint_room = true;
            }
            Command::Examine { target } => {
                self.turns.advance();
                report.text = match target {
                    Some(token) => self.do_examine(&token),
                    None => MSG_EXAMINE_NOTHING.to_string(),
                };
            }
            Command::Take { target } => {
                self.turns.advance();
                report.text = match target {
                    Some(token) => self.do_take(&token),
                    None => MSG_TAKE_NOTHING.to_string(),
                };
            }
            Command::Use { target } => {
                self.turns.advance();
                report.text = match target {
                    Some(token) => self.do_use(&token),
                    None => MSG_USE_NOTHING.to_string(),
                };
            }
            Command::Move { direction } => {
                self.turns.advance();
                self.do_move(direction, &mut report);
            }
            Command::Quit => report.quit = true,
        }
        report
    }

    /// Move the adversary once the roam threshold has passed. Runs after
    /// every processed line, whether or not the command consumed a turn.
    pub fn turn_end(&mut self) {
        if self.turns.count() > self.config.roam_after {
            self.adversary
                .advance(&mut self.world, self.player.current_room, &mut self.turns);
        }
    }

    /// Render the player's current room: its description, the status
    /// message of every object present, and the exit line.
    pub fn look(&self) -> String {
        let room = self.world.room(self.player.current_room);
        let mut out = room.description.clone();

        for (_, object) in self.world.objects() {
            if object.location == Some(self.player.current_room)
                && let Some(message) = object.status_message()
                && !message.is_empty()
            {
                out.push('\n');
                out.push_str(message);
            }
        }

        let mut exit_line = String::from("Exits are:  ");
        for direction in Direction::ALL {
            if room.exit(direction).is_some() {
                exit_line.push_str(direction.name());
                exit_line.push_str("  ");
            }
        }
        if exit_line.len() > "Exits are:  ".len() {
            out.push('\n');
            out.push_str(&exit_line);
        }

        out
    }

    fn do_examine(&self, token: &str) -> String {
        // The same text answers an unknown name and an out-of-reach object,
        // so the player cannot fish for hidden item names.
        let Some(id) = resolve_object(&self.world, token) else {
            return MSG_NOT_SEEN.to_string();
        };
        let object = self.world.object(id);
        if !self.player.has_item(id) && object.location != Some(self.player.current_room) {
            return MSG_NOT_SEEN.to_string();
        }

        let mut out = String::new();
        if let Some(message) = object.status_message()
            && !message.is_empty()
        {
            out.push_str(message);
        }
        if !object.description.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&object.description);
        }
        out
    }

    fn do_take(&mut self, token: &str) -> String {
        let Some(id) = resolve_object(&self.world, token) else {
            return MSG_CANNOT_TAKE.to_string();
        };
        let object = self.world.object(id);
        if object.location != Some(self.player.current_room) || !object.takable {
            return MSG_CANNOT_TAKE.to_string();
        }

        self.world.set_object_location(id, None);
        self.player.add_item(id);
        self.world.object(id).take_message.clone()
    }

    fn do_use(&mut self, token: &str) -> String {
        let Some(id) = resolve_object(&self.world, token) else {
            return MSG_DO_NOT_HAVE.to_string();
        };
        if !self.player.has_item(id) {
            return MSG_DO_NOT_HAVE.to_string();
        }
        if !self.world.object(id).usable {
            // Held objects are only usable if content flagged them so; an
            // unusable object in the inventory is a content bug.
            return MSG_NOT_USABLE.to_string();
        }

        let rule = self
            .rules
            .iter()
            .find(|(object, _)| *object == id)
            .map(|&(_, rule)| rule);
        match rule {
            Some(PuzzleRule::Feed { adversary, reward }) => {
                if self.world.object(adversary).location != Some(self.player.current_room) {
                    return MSG_NOT_HERE.to_string();
                }
                self.player.remove_item(id);
                let mut out = self.world.object(id).use_message.clone();
                self.world.set_object_location(adversary, None);
                self.player.add_item(reward);
                let take_message = &self.world.object(reward).take_message;
                if !take_message.is_empty() {
                    out.push('\n');
                    out.push_str(take_message);
                }
                out
            }
            Some(PuzzleRule::Unlock {
                barrier,
                direction,
                destination,
            }) => {
                if self.world.object(barrier).location != Some(self.player.current_room) {
                    return MSG_NOT_HERE.to_string();
                }
                self.player.remove_item(id);
                self.world.set_object_status(barrier, Some(1));
                self.world
                    .set_room_exit(self.player.current_room, direction, Some(destination));
                self.world.object(id).use_message.clone()
            }
            // Usable, held, and no rule: a content/engine mismatch, answered
            // in fiction rather than by crashing the game.
            None => MSG_NO_RULE.to_string(),
        }
    }

    fn do_inventory(&self) -> String {
        let mut out = String::from("You are carrying:");
        if self.player.inventory.is_empty() {
            out.push_str("\n  Nothing");
        } else {
            for &id in &self.player.inventory {
                out.push('\n');
                out.push_str(&self.world.object(id).name);
            }
        }
        out
    }

    fn do_move(&mut self, direction: Direction, report: &mut TurnReport) {
        match self.world.room(self.player.current_room).exit(direction) {
            Some(destination) => {
                self.player.current_room = destination;
                report.reprint_room = true;
            }
            None => report.text = MSG_NO_WAY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_core::{GameObject, Room};

    const CELL: RoomId = RoomId(0);
    const HALL: RoomId = RoomId(1);
    const DEN: RoomId = RoomId(2);
    const BEYOND: RoomId = RoomId(3);

    const ARCH: ObjectId = ObjectId(0);
    const RATION: ObjectId = ObjectId(1);
    const SIGIL: ObjectId = ObjectId(2);
    const BEAST: ObjectId = ObjectId(3);
    const WHISTLE: ObjectId = ObjectId(5);
    const PEBBLE: ObjectId = ObjectId(6);

    fn test_scenario() -> Scenario {
        let rooms = vec![
            Room::new("A bare cell.").with_exit(Direction::East, HALL),
            Room::new("A pillared hall with a sealed arch to the east.")
                .with_exit(Direction::North, DEN)
                .with_exit(Direction::West, CELL),
            Room::new("A musty den.").with_exit(Direction::South, HALL),
            Room::new(""),
        ];
        let objects = vec![
            GameObject::new("Arch", "Rings of script spiral across the stone.")
                .with_aliases(["ARCH", "arch"])
                .at(HALL)
                .with_status(0, ["The arch is sealed.", "The arch stands open."]),
            GameObject::new("Ration", "A wax-wrapped ration.")
                .with_aliases(["RATION", "ration"])
                .at(CELL)
                .usable()
                .takable()
                .with_use_message("You toss the ration to the beast, which lopes away with it.")
                .with_take_message("You pocket the ration."),
            GameObject::new("Sigil", "A cold iron sigil.")
                .usable()
                .with_use_message("The sigil flares and the arch grinds open.")
                .with_take_message("You catch the sigil."),
            GameObject::new("Beast", "A hulking beast. It seems hungry.")
                .at(DEN)
                .with_status(
                    0,
                    ["A beast snuffles around here.", "A beast eyes you hungrily."],
                ),
            GameObject::new("Mural", "A faded mural of a procession.").at(CELL),
            GameObject::new("Whistle", "A bone whistle.").at(CELL).usable().takable(),
            GameObject::new("Pebble", "A smooth pebble.").at(CELL).takable(),
        ];
        let world = World::new(rooms, objects).unwrap();
        Scenario::new(world, CELL, BEYOND, BEAST)
            .with_rule(
                RATION,
                PuzzleRule::Feed {
                    adversary: BEAST,
                    reward: SIGIL,
                },
            )
            .with_rule(
                SIGIL,
                PuzzleRule::Unlock {
                    barrier: ARCH,
                    direction: Direction::East,
                    destination: BEYOND,
                },
            )
            .with_opening("You come to on cold stone.")
            .with_victory("You step through the arch.")
            .with_defeat("The beast runs you down.")
    }

    fn test_session() -> Session {
        Session::new(test_scenario(), SessionConfig::default()).unwrap()
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn config_defaults_and_builders() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.roam_after, 9);
        assert_eq!(config.hostile_after, 24);

        let config = SessionConfig::default()
            .with_seed(7)
            .with_roam_after(0)
            .with_hostile_after(1);
        assert_eq!(config.seed, 7);
        assert_eq!(config.roam_after, 0);
        assert_eq!(config.hostile_after, 1);
    }

    #[test]
    fn rejects_goal_outside_world() {
        let mut scenario = test_scenario();
        scenario.goal = RoomId(99);
        let err = Session::new(scenario, SessionConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::RoomNotFound(RoomId(99))));
    }

    #[test]
    fn rejects_rule_naming_unknown_object() {
        let scenario = test_scenario().with_rule(
            WHISTLE,
            PuzzleRule::Feed {
                adversary: ObjectId(42),
                reward: SIGIL,
            },
        );
        let err = Session::new(scenario, SessionConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::ObjectNotFound(ObjectId(42))));
    }

    // -----------------------------------------------------------------------
    // Turn accounting
    // -----------------------------------------------------------------------

    #[test]
    fn free_commands_cost_no_turn() {
        let mut session = test_session();
        session.process("Help");
        session.process("Inventory");
        session.process("xyzzy");
        assert_eq!(session.turns().count(), 0);
    }

    #[test]
    fn every_other_command_costs_one_turn() {
        let mut session = test_session();
        session.process("Look");
        assert_eq!(session.turns().count(), 1);
        session.process("Examine");
        assert_eq!(session.turns().count(), 2);
        session.process("Take");
        assert_eq!(session.turns().count(), 3);
        session.process("Use");
        assert_eq!(session.turns().count(), 4);
        session.process("N");
        assert_eq!(session.turns().count(), 5);
        session.process("Take Phantom");
        assert_eq!(session.turns().count(), 6);
    }

    #[test]
    fn quit_sets_flag_without_consuming_a_turn() {
        let mut session = test_session();
        let report = session.process("Exit");
        assert!(report.quit);
        assert!(report.text.is_empty());
        assert_eq!(session.turns().count(), 0);
    }

    #[test]
    fn missing_targets_print_flavor_text() {
        let mut session = test_session();
        assert_eq!(session.process("Examine").text, MSG_EXAMINE_NOTHING);
        assert_eq!(session.process("Take").text, MSG_TAKE_NOTHING);
        assert_eq!(session.process("Use").text, MSG_USE_NOTHING);
        assert_eq!(session.process("gibberish words").text, MSG_UNKNOWN);
    }

    // -----------------------------------------------------------------------
    // Look
    // -----------------------------------------------------------------------

    #[test]
    fn look_reports_room_statuses_and_exits() {
        let mut session = test_session();
        let report = session.process("Look");
        assert!(report.reprint_room);
        assert!(report.text.is_empty());

        let text = session.look();
        assert!(text.contains("A bare cell."));
        assert!(text.contains("Exits are:  East"));
        assert!(!text.contains("North"));
        // The mural has no status, so Look stays quiet about it.
        assert!(!text.contains("Mural"));

        session.process("E");
        session.process("N");
        let text = session.look();
        assert!(text.contains("A musty den."));
        assert!(text.contains("A beast snuffles around here."));
    }

    #[test]
    fn look_omits_exit_line_in_sealed_room() {
        let rooms = vec![Room::new("A dead end."), Room::new("")];
        let objects = vec![
            GameObject::new("Beast", "A hulking beast.")
                .at(CELL)
                .with_status(0, ["A beast snuffles around here."]),
        ];
        let world = World::new(rooms, objects).unwrap();
        let scenario = Scenario::new(world, CELL, HALL, ObjectId(0));
        let session = Session::new(scenario, SessionConfig::default()).unwrap();
        assert!(!session.look().contains("Exits are:"));
    }

    // -----------------------------------------------------------------------
    // Examine
    // -----------------------------------------------------------------------

    #[test]
    fn examine_reads_objects_in_the_room() {
        let mut session = test_session();
        assert_eq!(
            session.process("Examine Mural").text,
            "A faded mural of a procession."
        );
    }

    #[test]
    fn examine_prints_status_before_description() {
        let mut session = test_session();
        session.process("E");
        assert_eq!(
            session.process("x Arch").text,
            "The arch is sealed.\nRings of script spiral across the stone."
        );
    }

    #[test]
    fn examine_reads_held_objects_anywhere() {
        let mut session = test_session();
        session.process("Take Ration");
        session.process("E");
        assert_eq!(session.process("Examine Ration").text, "A wax-wrapped ration.");
    }

    #[test]
    fn examine_failures_share_one_message() {
        let mut session = test_session();
        // A name that exists nowhere, an object elsewhere, and one removed
        // from the world all read the same.
        assert_eq!(session.process("Examine Phantom").text, MSG_NOT_SEEN);
        assert_eq!(session.process("Examine Beast").text, MSG_NOT_SEEN);
        assert_eq!(session.process("Examine Sigil").text, MSG_NOT_SEEN);
    }

    // -----------------------------------------------------------------------
    // Take
    // -----------------------------------------------------------------------

    #[test]
    fn take_moves_object_into_inventory() {
        let mut session = test_session();
        let report = session.process("Take Ration");
        assert_eq!(report.text, "You pocket the ration.");
        assert_eq!(session.world().object(RATION).location, None);
        assert!(session.player().has_item(RATION));
        assert!(session.process("Inventory").text.contains("Ration"));
    }

    #[test]
    fn take_is_not_repeatable() {
        let mut session = test_session();
        session.process("Take Ration");
        assert_eq!(session.process("Take Ration").text, MSG_CANNOT_TAKE);
        assert_eq!(session.player().inventory.len(), 1);
    }

    #[test]
    fn take_failures_share_one_message() {
        let mut session = test_session();
        assert_eq!(session.process("Take Phantom").text, MSG_CANNOT_TAKE);
        assert_eq!(session.process("Take Mural").text, MSG_CANNOT_TAKE);
        assert_eq!(session.process("Take Beast").text, MSG_CANNOT_TAKE);
    }

    #[test]
    fn take_without_message_stays_quiet() {
        let mut session = test_session();
        let report = session.process("Take Pebble");
        assert!(report.text.is_empty());
        assert!(session.player().has_item(PEBBLE));
    }

    // -----------------------------------------------------------------------
    // Use
    // -----------------------------------------------------------------------

    #[test]
    fn use_requires_holding_the_object() {
        let mut session = test_session();
        assert_eq!(session.process("Use Phantom").text, MSG_DO_NOT_HAVE);
        // Resolvable but still on the ground reads the same.
        assert_eq!(session.process("Use Ration").text, MSG_DO_NOT_HAVE);
    }

    #[test]
    fn use_on_unusable_held_object_is_diagnostic() {
        let mut session = test_session();
        session.process("Take Pebble");
        assert_eq!(session.process("Use Pebble").text, MSG_NOT_USABLE);
    }

    #[test]
    fn use_on_ruleless_usable_object_is_diagnostic() {
        let mut session = test_session();
        session.process("Take Whistle");
        assert_eq!(session.process("Use Whistle").text, MSG_NO_RULE);
    }

    #[test]
    fn feed_rule_requires_the_adversary_present() {
        let mut session = test_session();
        session.process("Take Ration");
        assert_eq!(session.process("Use Ration").text, MSG_NOT_HERE);
        assert!(session.player().has_item(RATION));
    }

    #[test]
    fn unlock_rule_requires_the_barrier_present() {
        let mut session = test_session();
        session.process("Take Ration");
        session.process("E");
        session.process("N");
        session.process("Use Ration");
        // The sigil is in hand but the arch is back in the hall.
        assert_eq!(session.process("Use Sigil").text, MSG_NOT_HERE);
        assert!(session.player().has_item(SIGIL));
    }

    #[test]
    fn puzzle_chain_reaches_victory() {
        let mut session = test_session();
        assert_eq!(session.turn_start(), None);

        session.process("Take Ration");
        session.process("E");
        session.process("N");

        let report = session.process("Use Ration");
        assert!(report.text.contains("You toss the ration to the beast"));
        assert!(report.text.contains("You catch the sigil."));
        assert_eq!(session.world().object(BEAST).location, None);
        assert!(!session.player().has_item(RATION));
        assert!(session.player().has_item(SIGIL));

        session.process("S");
        let report = session.process("Use Sigil");
        assert_eq!(report.text, "The sigil flares and the arch grinds open.");
        assert_eq!(session.world().object(ARCH).status, Some(1));
        assert_eq!(
            session.world().room(HALL).exit(Direction::East),
            Some(BEYOND)
        );
        assert!(!session.player().has_item(SIGIL));

        session.process("E");
        assert_eq!(session.player().current_room, BEYOND);
        assert_eq!(session.turn_start(), Some(Ending::Victory));
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    #[test]
    fn blocked_direction_keeps_the_player_put() {
        let mut session = test_session();
        let report = session.process("N");
        assert_eq!(report.text, MSG_NO_WAY);
        assert!(!report.reprint_room);
        assert_eq!(session.player().current_room, CELL);
        assert_eq!(session.turns().count(), 1);
    }

    #[test]
    fn movement_requests_room_reprint() {
        let mut session = test_session();
        let report = session.process("E");
        assert!(report.text.is_empty());
        assert!(report.reprint_room);
        assert_eq!(session.player().current_room, HALL);
    }

    // -----------------------------------------------------------------------
    // Adversary
    // -----------------------------------------------------------------------

    #[test]
    fn escalation_happens_strictly_after_the_threshold() {
        let mut session = test_session();
        for _ in 0..24 {
            assert_eq!(session.turn_start(), None);
            session.process("Look");
            session.turn_end();
        }
        assert_eq!(session.turns().count(), 24);
        assert_eq!(session.turn_start(), None);
        assert_eq!(session.world().object(BEAST).status, Some(0));

        session.process("Look");
        session.turn_end();
        assert_eq!(session.turn_start(), None);
        assert_eq!(session.world().object(BEAST).status, Some(1));
    }

    #[test]
    fn hostile_adversary_corners_the_player() {
        // Escalate before roaming starts so every movement step is the
        // deterministic pursuit branch, then walk into its reach.
        let config = SessionConfig::default()
            .with_hostile_after(0)
            .with_roam_after(2);
        let mut session = Session::new(test_scenario(), config).unwrap();

        assert_eq!(session.turn_start(), None);
        session.process("E");
        session.turn_end();

        assert_eq!(session.turn_start(), None); // escalates at count 1
        session.process("Look");
        session.turn_end();

        assert_eq!(session.turn_start(), None);
        session.process("Look");
        session.turn_end(); // count 3: beast steps from the den into the hall
        assert_eq!(session.world().object(BEAST).location, Some(HALL));
        assert!(!session.turns().encounter());

        assert_eq!(session.turn_start(), None);
        session.process("Look");
        session.turn_end(); // co-located now: encounter raised
        assert!(session.turns().encounter());

        assert_eq!(session.turn_start(), Some(Ending::Defeat));
    }

    #[test]
    fn flight_keeps_the_encounter_flag_down() {
        let config = SessionConfig::default()
            .with_hostile_after(0)
            .with_roam_after(2);
        let mut session = Session::new(test_scenario(), config).unwrap();

        session.turn_start();
        session.process("E");
        session.turn_end();
        for _ in 0..2 {
            session.turn_start();
            session.process("Look");
            session.turn_end();
        }
        // The beast has just stepped into the hall beside the player.
        assert_eq!(session.world().object(BEAST).location, Some(HALL));
        assert!(!session.turns().encounter());

        // Keep moving: pursuit follows a step behind, the encounter flag
        // stays down, and the death check never fires.
        assert_eq!(session.turn_start(), None);
        session.process("W");
        session.turn_end();
        assert_eq!(session.world().object(BEAST).location, Some(CELL));
        assert!(!session.turns().encounter());
        assert_eq!(session.turn_start(), None);
    }
}
