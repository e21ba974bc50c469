//! Turn-based interactive fiction engine for Gatewalker.
//!
//! A [`Session`] owns a [`gw_core::World`] together with the player, turn,
//! and adversary state, and advances all of them one input line at a time.
//! The driving loop calls [`Session::turn_start`] to evaluate endings,
//! [`Session::process`] with the raw input line, and [`Session::turn_end`]
//! to move the adversary; there is no other mutation path into a running
//! game. Scripted puzzle interactions are data on the [`Scenario`] rather
//! than behavior on objects, keeping the closed set of special cases
//! auditable in one table.

/// The adversary's hostility states and movement policy.
pub mod adversary;
/// Error types for the engine crate.
pub mod error;
/// Command parsing and object resolution.
pub mod parser;
/// Player state: current room and inventory.
pub mod player;
/// Scenario content contract: world, goal, narration, and puzzle rules.
pub mod scenario;
/// Session management and the per-verb action handlers.
pub mod session;
/// Turn counting and the encounter flag.
pub mod turn;

pub use adversary::{Adversary, Hostility};
pub use error::{EngineError, EngineResult};
pub use parser::{Command, parse_command, resolve_object};
pub use player::PlayerState;
pub use scenario::{PuzzleRule, Scenario};
pub use session::{Ending, Session, SessionConfig, TurnReport};
pub use turn::TurnState;
