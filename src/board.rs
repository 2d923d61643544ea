//! Game board: grid, fleet, attack resolution and sink notifications.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::{String, ToString}, sync::Arc, vec, vec::Vec};
#[cfg(feature = "std")]
use std::sync::Arc;

use core::fmt;

use crate::common::{AttackResult, BoardError};
use crate::config::{FLEET, MAX_COLUMNS};
use crate::coord::{column_label, parse_coord, Coord};
use crate::grid::{Cell, CellState, Grid};
use crate::notify::{sunk_message, NotificationSink};
use crate::placement::PlacementPolicy;
use crate::ship::{Ship, ShipType};

pub const UNKNOWN_MARKER: char = '-';
pub const MISS_MARKER: char = 'O';
pub const HIT_MARKER: char = 'X';

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Ships are not on the grid yet.
    Setup,
    InProgress,
    /// Every ship is sunk.
    Over,
}

/// Board state for one game: the grid, the fleet and the registered sinks.
///
/// Cells refer to ships by their index in the fleet, so the fleet is the only
/// owner of ship state. `ships_sunk` is kept up to date by [`attack`] rather
/// than recounted.
///
/// [`attack`]: GameBoard::attack
pub struct GameBoard {
    rows: usize,
    columns: usize,
    grid: Option<Grid>,
    fleet: Vec<Ship>,
    ships_sunk: usize,
    placed: bool,
    attacks: usize,
    policy: Box<dyn PlacementPolicy>,
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl GameBoard {
    /// Board of the given size carrying the standard fleet.
    ///
    /// Columns are named by single letters, so at most `MAX_COLUMNS` are
    /// allowed.
    pub fn new(
        rows: usize,
        columns: usize,
        policy: Box<dyn PlacementPolicy>,
    ) -> Result<Self, BoardError> {
        check_dimensions(rows, columns)?;
        Ok(Self::build(rows, columns, policy))
    }

    pub(crate) fn build(rows: usize, columns: usize, policy: Box<dyn PlacementPolicy>) -> Self {
        GameBoard {
            rows,
            columns,
            grid: None,
            fleet: FLEET.iter().map(|def| Ship::new(*def)).collect(),
            ships_sunk: 0,
            placed: false,
            attacks: 0,
            policy,
            sinks: Vec::new(),
        }
    }

    /// Board carrying a custom fleet. Every ship must be at least one cell long.
    pub fn with_fleet(
        rows: usize,
        columns: usize,
        fleet: &[ShipType],
        policy: Box<dyn PlacementPolicy>,
    ) -> Result<Self, BoardError> {
        if let Some(def) = fleet.iter().find(|def| def.length() == 0) {
            return Err(BoardError::InvalidShipLength(def.name()));
        }
        let mut board = Self::new(rows, columns, policy)?;
        board.fleet = fleet.iter().map(|def| Ship::new(*def)).collect();
        Ok(board)
    }

    /// Allocate a fresh grid of unhit, unoccupied cells.
    ///
    /// Calling this again replaces the grid but keeps the fleet, so ships
    /// damaged or sunk earlier stay that way.
    pub fn initialize(&mut self) {
        self.grid = Some(Grid::new(self.rows, self.columns));
        self.placed = false;
        log::debug!("grid initialized ({}x{})", self.rows, self.columns);
    }

    /// Add a sink to the notification list. Sinks are notified in the order
    /// they were registered; the same sink may be registered twice.
    pub fn register(&mut self, sink: Arc<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Lay the fleet out on the grid using the configured policy.
    pub fn place_ships(&mut self) -> Result<(), BoardError> {
        if self.placed {
            return Err(BoardError::ShipsAlreadyPlaced);
        }
        let grid = self.grid.as_mut().ok_or(BoardError::NotInitialized)?;
        let placed = self
            .policy
            .place(grid, &self.fleet)
            .and_then(|()| check_layout(grid, &self.fleet));
        if let Err(e) = placed {
            // Leave no half-placed fleet behind.
            *grid = Grid::new(self.rows, self.columns);
            return Err(e);
        }
        self.placed = true;
        log::debug!("{} ships placed", self.fleet.len());
        Ok(())
    }

    /// `true` when `input` names a cell on this board (e.g. `A1`).
    pub fn validate_input(&self, input: &str) -> bool {
        self.parse_input(input).is_some()
    }

    /// Decode `input` into a zero-based coordinate on this board.
    pub fn parse_input(&self, input: &str) -> Option<Coord> {
        parse_coord(input, self.rows, self.columns)
    }

    /// Parse `input` and attack the named cell.
    pub fn attack_input(&mut self, input: &str) -> Result<AttackResult, BoardError> {
        let at = self.parse_input(input).ok_or(BoardError::InvalidCoordinate)?;
        self.attack(at)
    }

    /// Fire at `at`.
    ///
    /// Only allowed once the fleet is placed. A cell can only be struck
    /// once; later attacks on it return [`AttackResult::Repeat`] and change
    /// nothing. Sinking a ship notifies every registered sink before this
    /// returns.
    pub fn attack(&mut self, at: Coord) -> Result<AttackResult, BoardError> {
        let grid = self.grid.as_mut().ok_or(BoardError::NotInitialized)?;
        if !self.placed {
            return Err(BoardError::ShipsNotPlaced);
        }
        let cell = grid.cell_mut(at).ok_or(BoardError::InvalidCoordinate)?;
        if !cell.strike() {
            log::debug!("attack at {} repeats an earlier one", at);
            return Ok(AttackResult::Repeat);
        }
        self.attacks += 1;
        let Some(id) = cell.occupant() else {
            log::debug!("attack at {}: miss", at);
            return Ok(AttackResult::Miss);
        };
        let ship = self
            .fleet
            .get_mut(id.0)
            .ok_or(BoardError::UnknownShip(id.0))?;
        if !ship.register_hit() {
            log::debug!("attack at {}: hit {}", at, ship.name());
            return Ok(AttackResult::Hit);
        }

        let name = ship.name();
        self.ships_sunk += 1;
        log::info!("{} sunk ({}/{})", name, self.ships_sunk, self.fleet.len());
        let message = sunk_message(name);
        for sink in &self.sinks {
            sink.notify(&message);
        }
        Ok(AttackResult::Sink(name))
    }

    /// `true` once every ship in the fleet is sunk.
    pub fn is_game_over(&self) -> bool {
        self.ships_sunk == self.fleet.len()
    }

    pub fn status(&self) -> GameStatus {
        if !self.placed {
            GameStatus::Setup
        } else if self.is_game_over() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    /// Text view of the board as the player sees it.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn cell(&self, at: Coord) -> Option<&Cell> {
        self.grid.as_ref()?.cell(at)
    }

    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships_sunk
    }

    /// Ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.fleet.len() - self.ships_sunk
    }

    /// Attacks that struck a fresh cell.
    pub fn attack_count(&self) -> usize {
        self.attacks
    }

    /// Number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

/// Reject grids wider than the column letters can name.
pub(crate) fn check_dimensions(rows: usize, columns: usize) -> Result<(), BoardError> {
    if columns > MAX_COLUMNS {
        return Err(BoardError::TooManyColumns { rows, columns });
    }
    Ok(())
}

/// Every occupant must be a fleet index and every ship must cover exactly
/// its length in cells.
fn check_layout(grid: &Grid, fleet: &[Ship]) -> Result<(), BoardError> {
    let mut covered = vec![0usize; fleet.len()];
    for (_, cell) in grid.iter() {
        if let Some(id) = cell.occupant() {
            let count = covered.get_mut(id.0).ok_or(BoardError::UnknownShip(id.0))?;
            *count += 1;
        }
    }
    for (ship, count) in fleet.iter().zip(covered) {
        if count != ship.length() {
            return Err(BoardError::IncompletePlacement(ship.name()));
        }
    }
    Ok(())
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.columns {
            write!(f, " {}", column_label(c))?;
        }
        writeln!(f)?;
        for r in 0..self.rows {
            write!(f, "{:2} ", r + 1)?;
            for c in 0..self.columns {
                let marker = match self.cell(Coord::new(r, c)).map(Cell::state) {
                    Some(CellState::HitOccupied) => HIT_MARKER,
                    Some(CellState::HitEmpty) => MISS_MARKER,
                    Some(CellState::Unknown) | None => UNKNOWN_MARKER,
                };
                write!(f, " {}", marker)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameBoard")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("fleet", &self.fleet)
            .field("ships_sunk", &self.ships_sunk)
            .field("placed", &self.placed)
            .field("attacks", &self.attacks)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
