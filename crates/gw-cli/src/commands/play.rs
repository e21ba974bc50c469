//! The blocking game loop behind `gw play`.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use gw_engine::{Ending, Session, SessionConfig};

use crate::content;

const PROMPT: &str = "[\"?\" for Help]  Action>  ";

/// Run the shipped campaign against stdin/stdout until an ending, a
/// player-requested exit, or end of input.
pub fn run(seed: Option<u64>) -> Result<(), String> {
    let scenario = content::valley_of_the_gate().map_err(|e| format!("invalid campaign: {e}"))?;
    let config = SessionConfig::default().with_seed(seed.unwrap_or_else(rand::random));
    let mut session = Session::new(scenario, config).map_err(|e| format!("invalid scenario: {e}"))?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}\n", session.opening());
    let mut reprint_room = true;

    loop {
        if let Some(ending) = session.turn_start() {
            let text = session.ending_text(ending);
            match ending {
                Ending::Victory => println!("\n{}", text.green().bold()),
                Ending::Defeat => println!("\n{}", text.red().bold()),
            }
            break;
        }

        if reprint_room {
            println!("{}", session.look());
        }

        print!("\n{}", PROMPT.dimmed());
        io::stdout()
            .flush()
            .map_err(|e| format!("cannot write to stdout: {e}"))?;

        // End of input counts as a request to leave.
        let Some(line) = lines.next() else {
            println!("Exiting game...");
            break;
        };
        let line = line.map_err(|e| format!("cannot read from stdin: {e}"))?;

        let report = session.process(&line);
        if !report.text.is_empty() {
            println!("{}", report.text);
        }
        if report.quit {
            println!("Exiting game...");
            break;
        }

        session.turn_end();
        reprint_room = report.reprint_room;
    }

    Ok(())
}
