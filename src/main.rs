use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use letter_drop::{Arena, GameConfig, PressOutcome, TileId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A line typed at the console
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Drop the next letter into a column
    Drop(usize),
    /// Press the tile at (column, index)
    Press(TileId),
    /// Remove the last tile of the word
    Undo,
    /// Accept the current word
    Confirm,
    /// Print the field as JSON
    Show,
    Help,
    Quit,
}

const HELP: &str = "commands: drop <col> | press <col> <idx> | undo | confirm | show | help | quit";

fn parse_command(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let Some(name) = parts.next() else {
        bail!("empty command");
    };

    let mut number = |what: &str| -> Result<usize> {
        parts
            .next()
            .with_context(|| format!("missing {}", what))?
            .parse()
            .with_context(|| format!("{} must be a number", what))
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "drop" | "d" => Command::Drop(number("column")?),
        "press" | "p" => {
            let column = number("column")?;
            let index = number("index")?;
            Command::Press(TileId::new(column, index))
        }
        "undo" | "u" => Command::Undo,
        "confirm" | "c" => Command::Confirm,
        "show" | "s" => Command::Show,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => bail!("unknown command '{}'", other),
    };

    Ok(command)
}

/// Run one command against the session, returning the text to print
fn execute(arena: &mut Arena, command: Command) -> Result<String> {
    let output = match command {
        Command::Drop(column) => {
            let tile = arena.drop_next(column)?;
            format!("dropped into column {} at {}", tile.column, tile.index)
        }
        Command::Press(tile) => match arena.press(tile)? {
            PressOutcome::Dropped { tile, letter } => {
                format!("dropped '{}' at ({}, {})", letter, tile.column, tile.index)
            }
            PressOutcome::Selected | PressOutcome::Deselected { .. } => {
                format!("word: {}", arena.submission().word())
            }
            PressOutcome::Rejected => "tile cannot extend the word".to_string(),
            PressOutcome::Ignored => "tile is disabled".to_string(),
        },
        Command::Undo => {
            arena.undo()?;
            format!("word: {}", arena.submission().word())
        }
        Command::Confirm => format!("confirmed {}", arena.confirm()?),
        Command::Show => serde_json::to_string_pretty(&arena.snapshot())?,
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    };
    Ok(output)
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "letter_drop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = GameConfig::from_env()?;
    tracing::info!("Configuration loaded");

    let mut arena = Arena::new(config).context("failed to start game")?;
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("Rejected command '{}': {:#}", line.trim(), e);
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        match execute(&mut arena, command) {
            Ok(output) => writeln!(stdout, "{}", output)?,
            Err(e) => tracing::warn!("{:#}", e),
        }
    }

    tracing::info!("Game over with {} letters left", arena.bag().remaining());
    Ok(())
}
