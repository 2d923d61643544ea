//! Ship definitions and per-game ship state.

use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Index of a ship within the board's fleet.
///
/// Cells hold this instead of the ship itself; the fleet owns every `Ship`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShipId(pub usize);

/// A ship in play, tracking how many of its segments are still intact.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    remaining: usize,
}

impl Ship {
    /// Fresh, undamaged ship of the given type.
    pub fn new(ship_type: ShipType) -> Self {
        Ship {
            ship_type,
            remaining: ship_type.length(),
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Full length of the ship.
    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Segments not yet hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Check if the ship is sunk (no intact segments left).
    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    /// Record a hit on one segment. Returns `true` if this hit sank the ship.
    pub fn register_hit(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, remaining: {} }}",
            self.ship_type.name(),
            self.ship_type.length(),
            self.remaining,
        )
    }
}
