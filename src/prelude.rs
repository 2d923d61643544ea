//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackResult, BoardError, Coord, GameBoard, GameStatus, NotificationSink, Orientation,
    Placement, PlacementPolicy, RandomPlacement,
};

#[cfg(feature = "std")]
pub use crate::{console::Console, console::ConsoleSink, MessageLog};
