use std::io::{BufRead, Write};

use anyhow::Result;
use sapper_core::{Board, FlagResult, RevealResult};
use web_time::Instant;

use crate::command::{Command, HELP};
use crate::render::render;

/// One player at the console, possibly across several games.
pub struct Session {
    board: Board,
    fixed_seed: bool,
    started_at: Instant,
}

impl Session {
    /// With `fixed_seed` a new game replays the same seed instead of drawing a fresh one.
    pub fn new(board: Board, fixed_seed: bool) -> Self {
        Self {
            board,
            fixed_seed,
            started_at: Instant::now(),
        }
    }

    pub fn play(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        writeln!(out, "{HELP}")?;
        let mut lines = input.lines();

        loop {
            let finished = self.board.state().is_finished();
            write!(out, "\n{}", render(&self.board, finished))?;
            if finished {
                write!(out, "Enter n for a new game or q to quit: ")?;
            } else {
                write!(out, "Enter command (e.g. r 1 1): ")?;
            }
            out.flush()?;

            let Some(line) = lines.next().transpose()? else {
                writeln!(out)?;
                break;
            };

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            };
            log::debug!("command: {:?}", command);

            match command {
                Command::Quit => break,
                Command::Help => writeln!(out, "{HELP}")?,
                Command::NewGame => self.new_game(),
                Command::Reveal((row, col)) => {
                    let outcome = self.board.reveal(row, col);
                    self.report_reveal(outcome, &mut out)?;
                }
                Command::Chord((row, col)) => {
                    let outcome = self.board.chord_reveal(row, col);
                    self.report_reveal(outcome, &mut out)?;
                }
                Command::Flag((row, col)) => {
                    if self.board.toggle_flag(row, col) == FlagResult::Rejected {
                        writeln!(out, "Cannot flag that cell!")?;
                    }
                }
            }
        }
        Ok(())
    }

    fn new_game(&mut self) {
        if self.fixed_seed {
            self.board.reset();
        } else {
            self.board.reseed(rand::random());
        }
        self.started_at = Instant::now();
        log::debug!("new game with seed {}", self.board.seed());
    }

    fn report_reveal(&self, outcome: RevealResult, out: &mut impl Write) -> Result<()> {
        match outcome {
            RevealResult::OutOfBounds => writeln!(out, "Invalid coordinates!")?,
            RevealResult::AlreadyActed => writeln!(out, "That cell is already revealed or flagged.")?,
            RevealResult::Finished => writeln!(out, "The game is over.")?,
            RevealResult::HitMine => {
                writeln!(out, "You hit a mine! Game over.")?;
                self.report_time(out)?;
            }
            RevealResult::Continue if self.board.has_won() => {
                writeln!(out, "Congratulations! You've cleared the minefield!")?;
                self.report_time(out)?;
            }
            RevealResult::Continue => {}
        }
        Ok(())
    }

    fn report_time(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Time taken: {} seconds", self.started_at.elapsed().as_secs())?;
        Ok(())
    }
}
