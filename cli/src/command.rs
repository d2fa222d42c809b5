use sapper_core::RawCoord2;
use thiserror::Error;

/// A single line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(RawCoord2),
    Flag(RawCoord2),
    Chord(RawCoord2),
    NewGame,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command, enter h for help")]
    Empty,
    #[error("Unknown command {0:?}, enter h for help")]
    Unknown(String),
    #[error("Expected a row and a column, e.g. `{0} 1 1`")]
    MissingCoords(String),
    #[error("Not a number: {0:?}")]
    BadNumber(String),
}

pub const HELP: &str = "\
Commands (rows and columns start at 1):
  r ROW COL   reveal a cell
  f ROW COL   flag or unflag a cell
  c ROW COL   reveal the neighbours of a satisfied number
  n           new game
  h           this help
  q           quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };
        let rest: Vec<&str> = words.collect();

        let at = || -> Result<RawCoord2, CommandError> {
            match rest.as_slice() {
                [row, col] => Ok((one_based(row)?, one_based(col)?)),
                _ => Err(CommandError::MissingCoords(verb.to_string())),
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => at().map(Self::Reveal),
            "f" | "flag" => at().map(Self::Flag),
            "c" | "chord" => at().map(Self::Chord),
            "n" | "new" => Ok(Self::NewGame),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

/// Player coordinates start at 1, out of range values are left for the board to report.
fn one_based(word: &str) -> Result<i32, CommandError> {
    let value: i32 = word
        .parse()
        .map_err(|_| CommandError::BadNumber(word.to_string()))?;
    Ok(value.saturating_sub(1))
}
