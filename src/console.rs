#![cfg(feature = "std")]

//! Interactive text session driving a [`GameBoard`].
//!
//! Input and output are generic so scripted sessions can run against
//! in-memory buffers.

use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail};

use crate::board::GameBoard;
use crate::config::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::instance;
use crate::notify::NotificationSink;
use crate::placement::PlacementPolicy;

pub const WELCOME_BANNER: &str = "\
==============================
      B R O A D S I D E
==============================
Sink the hidden fleet by calling out coordinates.
Columns are letters, rows are numbers (e.g. A1).";
pub const PROMPT: &str = "Enter coordinates (e.g., A1): ";
pub const CONTINUE_PROMPT: &str = "Press Enter to continue...";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// What a single turn amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Hit,
    Miss,
    Invalid,
}

impl TurnOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            TurnOutcome::Hit => "Hit!",
            TurnOutcome::Miss => "Miss!",
            TurnOutcome::Invalid => "Invalid input!",
        }
    }
}

/// Holds board notices until the console prints them with the turn result.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    pending: Mutex<Vec<String>>,
}

impl ConsoleSink {
    fn take(&self) -> Vec<String> {
        let mut guard = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *guard)
    }
}

impl NotificationSink for ConsoleSink {
    fn notify(&self, message: &str) {
        let mut guard = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(message.to_string());
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    notices: Arc<ConsoleSink>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            notices: Arc::new(ConsoleSink::default()),
        }
    }

    /// Sink whose messages show up in this console's output.
    pub fn sink(&self) -> Arc<ConsoleSink> {
        self.notices.clone()
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Show the banner and wait for the player to continue.
    pub fn welcome(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", WELCOME_BANNER)?;
        self.wait_for_key()
    }

    pub fn wait_for_key(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", CONTINUE_PROMPT)?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    pub fn clear(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", CLEAR_SCREEN)?;
        Ok(())
    }

    /// Render, prompt, read one coordinate and resolve it.
    pub fn play_turn(&mut self, board: &mut GameBoard) -> anyhow::Result<TurnOutcome> {
        self.clear()?;
        write!(self.output, "{}", board.render())?;
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let line = self.read_line()?.trim().to_ascii_uppercase();
        let outcome = if !board.validate_input(&line) {
            TurnOutcome::Invalid
        } else if board.attack_input(&line)?.is_hit() {
            TurnOutcome::Hit
        } else {
            TurnOutcome::Miss
        };
        for notice in self.notices.take() {
            writeln!(self.output, "{}", notice)?;
        }
        writeln!(self.output, "{}", outcome.message())?;
        Ok(outcome)
    }

    /// Prepare a fresh game: new grid, this console's sink, fleet placed.
    pub fn start(&mut self, board: &mut GameBoard) -> anyhow::Result<()> {
        board.initialize();
        board.register(self.sink());
        board.place_ships()?;
        Ok(())
    }

    /// Play turns until every ship is sunk, then show the final board.
    pub fn run(&mut self, board: &mut GameBoard) -> anyhow::Result<()> {
        while !board.is_game_over() {
            self.play_turn(board)?;
            self.wait_for_key()?;
        }
        self.clear()?;
        write!(self.output, "{}", board.render())?;
        writeln!(self.output, "Game Over!")?;
        self.output.flush()?;
        log::info!("game over after {} attacks", board.attack_count());
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before the game ended");
        }
        Ok(line)
    }
}

/// Full interactive game on the shared default-sized board.
pub fn launch<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    policy: Box<dyn PlacementPolicy>,
) -> anyhow::Result<()> {
    console.welcome()?;
    let shared = instance::obtain(DEFAULT_ROWS, DEFAULT_COLUMNS, policy)?;
    let mut board = shared
        .lock()
        .map_err(|_| anyhow!("game board lock poisoned"))?;
    console.start(&mut board)?;
    console.run(&mut board)
}
