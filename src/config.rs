use crate::ship::ShipType;

pub const DEFAULT_ROWS: usize = 7;
pub const DEFAULT_COLUMNS: usize = 7;
/// One letter per column, `A` to `Z`.
pub const MAX_COLUMNS: usize = 26;
pub const NUM_SHIPS: usize = 6;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
    ShipType::new("Patrol Boat", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2 + 2;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BROADSIDE_LOG";
