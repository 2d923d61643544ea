//! Cell storage for the board and the placement checks built on it.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::common::BoardError;
use crate::coord::Coord;
use crate::ship::{Orientation, ShipId};

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unknown,
    HitEmpty,
    HitOccupied,
}

/// One grid unit: hit flag plus the ship occupying it, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    hit: bool,
    occupant: Option<ShipId>,
}

impl Cell {
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn occupant(&self) -> Option<ShipId> {
        self.occupant
    }

    pub fn state(&self) -> CellState {
        match (self.hit, self.occupant) {
            (false, _) => CellState::Unknown,
            (true, None) => CellState::HitEmpty,
            (true, Some(_)) => CellState::HitOccupied,
        }
    }

    /// Mark the cell hit. Returns `false` if it was already hit.
    pub(crate) fn strike(&mut self) -> bool {
        !core::mem::replace(&mut self.hit, true)
    }
}

/// Origin and orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub origin: Coord,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Placement {
            origin: Coord::new(row, col),
            orientation,
        }
    }

    /// Cells covered by a ship of `length` at this placement.
    pub fn cells(&self, length: usize) -> impl Iterator<Item = Coord> + '_ {
        (0..length).map(move |i| match self.orientation {
            Orientation::Horizontal => Coord::new(self.origin.row, self.origin.col.saturating_add(i)),
            Orientation::Vertical => Coord::new(self.origin.row.saturating_add(i), self.origin.col),
        })
    }
}

/// Row-major `rows × columns` collection of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Fresh grid of unhit, unoccupied cells.
    pub fn new(rows: usize, columns: usize) -> Self {
        Grid {
            rows,
            columns,
            cells: (0..rows * columns).map(|_| Cell::default()).collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.columns
    }

    pub fn cell(&self, at: Coord) -> Option<&Cell> {
        if self.contains(at) {
            self.cells.get(at.row * self.columns + at.col)
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, at: Coord) -> Option<&mut Cell> {
        if self.contains(at) {
            self.cells.get_mut(at.row * self.columns + at.col)
        } else {
            None
        }
    }

    /// Iterate over every cell in row-major order with its coordinate.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i / columns, i % columns), cell))
    }

    /// Check that a ship of `length` fits at `placement` without running off
    /// the grid or overlapping another ship.
    pub fn check_placement(&self, length: usize, placement: Placement) -> Result<(), BoardError> {
        for at in placement.cells(length) {
            match self.cell(at) {
                None => {
                    return Err(BoardError::OutOfBounds {
                        row: placement.origin.row,
                        col: placement.origin.col,
                    })
                }
                Some(cell) if cell.occupant.is_some() => {
                    return Err(BoardError::ShipOverlaps {
                        row: at.row,
                        col: at.col,
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// `true` when [`check_placement`](Self::check_placement) would succeed.
    pub fn can_place(&self, length: usize, placement: Placement) -> bool {
        self.check_placement(length, placement).is_ok()
    }

    /// Record `ship` as the occupant of every cell it covers.
    pub fn place(&mut self, ship: ShipId, length: usize, placement: Placement) -> Result<(), BoardError> {
        self.check_placement(length, placement)?;
        for at in placement.cells(length) {
            if let Some(cell) = self.cell_mut(at) {
                cell.occupant = Some(ship);
            }
        }
        log::debug!(
            "ship {} placed at {} ({:?}, length {})",
            ship.0,
            placement.origin,
            placement.orientation,
            length
        );
        Ok(())
    }
}
