//! Placement policies that lay a fleet out on the grid.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::BoardError;
use crate::grid::{Grid, Placement};
use crate::ship::{Orientation, Ship, ShipId};

/// Strategy that assigns every ship of a fleet to cells on a grid.
pub trait PlacementPolicy: Send {
    /// Place all ships onto the provided grid, in fleet order.
    fn place(&mut self, grid: &mut Grid, fleet: &[Ship]) -> Result<(), BoardError>;
}

/// Uniform random placement by rejection sampling.
///
/// Each ship draws an origin row, origin column and orientation until the
/// result fits, then commits. There is no attempt limit: a fleet that cannot
/// fit on the grid keeps sampling forever.
pub struct RandomPlacement<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RandomPlacement<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Random (origin, orientation) that fits a ship of `length` on `grid`.
    pub fn sample(&mut self, grid: &Grid, length: usize) -> Placement {
        let mut attempts: u64 = 0;
        loop {
            attempts += 1;
            let orientation = if self.rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = self.rng.random_range(0..grid.rows());
            let col = self.rng.random_range(0..grid.columns());
            let placement = Placement::new(row, col, orientation);
            if grid.can_place(length, placement) {
                log::trace!("placement found after {} attempts", attempts);
                return placement;
            }
        }
    }
}

impl RandomPlacement<SmallRng> {
    /// Reproducible placement from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Placement seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng + Send> PlacementPolicy for RandomPlacement<R> {
    fn place(&mut self, grid: &mut Grid, fleet: &[Ship]) -> Result<(), BoardError> {
        // An empty grid has nothing to sample from.
        if !fleet.is_empty() && (grid.rows() == 0 || grid.columns() == 0) {
            return Err(BoardError::OutOfBounds { row: 0, col: 0 });
        }
        for (i, ship) in fleet.iter().enumerate() {
            let placement = self.sample(grid, ship.length());
            grid.place(ShipId(i), ship.length(), placement)?;
        }
        Ok(())
    }
}

/// Places ship `i` of the fleet at the `i`-th supplied placement.
#[derive(Debug, Clone, Default)]
pub struct FixedPlacement {
    placements: Vec<Placement>,
}

impl FixedPlacement {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }
}

impl PlacementPolicy for FixedPlacement {
    fn place(&mut self, grid: &mut Grid, fleet: &[Ship]) -> Result<(), BoardError> {
        for (i, ship) in fleet.iter().enumerate() {
            let placement = *self
                .placements
                .get(i)
                .ok_or(BoardError::MissingPlacement(ship.name()))?;
            grid.place(ShipId(i), ship.length(), placement)?;
        }
        Ok(())
    }
}
