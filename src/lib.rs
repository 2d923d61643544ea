#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod coord;
mod grid;
mod notify;
mod placement;
mod ship;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
pub mod instance;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use grid::*;
pub use notify::*;
pub use placement::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
