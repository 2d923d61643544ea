//! Common types for the game engine: board errors and attack results.

/// Result of an attack against a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackResult {
    /// Attack struck a ship that is still afloat.
    Hit,
    /// Attack struck the last intact segment of a ship, carrying its name.
    Sink(&'static str),
    /// Attack landed in open water.
    Miss,
    /// Cell had already been attacked; nothing changed.
    Repeat,
}

impl AttackResult {
    /// `true` when the attack struck a ship.
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackResult::Hit | AttackResult::Sink(_))
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate text is malformed or outside the grid.
    InvalidCoordinate,
    /// A ship placement runs past the edge of the grid.
    OutOfBounds { row: usize, col: usize },
    /// A ship placement overlaps another ship.
    ShipOverlaps { row: usize, col: usize },
    /// Fleet definitions must have a length of at least one cell.
    InvalidShipLength(&'static str),
    /// Fixed placement list has no entry for this ship.
    MissingPlacement(&'static str),
    /// A placement policy left this ship without its full run of cells.
    IncompletePlacement(&'static str),
    /// A cell refers to a ship index outside the fleet.
    UnknownShip(usize),
    /// `initialize` has not been called yet.
    NotInitialized,
    /// Ships were already placed on the current grid.
    ShipsAlreadyPlaced,
    /// Attacks wait until the fleet is on the grid.
    ShipsNotPlaced,
    /// Columns are lettered `A`..`Z`, so wider grids cannot be addressed.
    TooManyColumns { rows: usize, columns: usize },
    /// The shared board already exists with other dimensions.
    AlreadyConfigured { rows: usize, columns: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidCoordinate => write!(f, "Invalid coordinate"),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Ship placement at ({}, {}) is out of bounds", row, col)
            }
            BoardError::ShipOverlaps { row, col } => {
                write!(f, "Ship placement overlaps another ship at ({}, {})", row, col)
            }
            BoardError::InvalidShipLength(name) => {
                write!(f, "Ship {} must be at least one cell long", name)
            }
            BoardError::MissingPlacement(name) => write!(f, "No placement given for {}", name),
            BoardError::IncompletePlacement(name) => write!(f, "Ship {} was not fully placed", name),
            BoardError::UnknownShip(id) => write!(f, "Cell refers to unknown ship {}", id),
            BoardError::NotInitialized => write!(f, "Board has not been initialized"),
            BoardError::ShipsAlreadyPlaced => write!(f, "Ships are already placed on the board"),
            BoardError::ShipsNotPlaced => write!(f, "Ships have not been placed yet"),
            BoardError::TooManyColumns { rows, columns } => {
                write!(f, "Board size {}x{} has more columns than letters A-Z", rows, columns)
            }
            BoardError::AlreadyConfigured { rows, columns } => {
                write!(f, "Board already exists with size {}x{}", rows, columns)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
