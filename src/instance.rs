#![cfg(feature = "std")]

//! Process-wide shared board.
//!
//! Binaries that want a single board for the whole run obtain it here;
//! library callers can construct a [`GameBoard`] directly instead.

use std::sync::{Mutex, OnceLock};

use crate::board::{check_dimensions, GameBoard};
use crate::common::BoardError;
use crate::placement::PlacementPolicy;

struct Instance {
    rows: usize,
    columns: usize,
    board: Mutex<GameBoard>,
}

static INSTANCE: OnceLock<Instance> = OnceLock::new();

/// Shared board, created on the first call from the given parameters.
///
/// Later calls with the same dimensions return the same board. Their policy
/// is not used: the board keeps placing ships with the policy it was created
/// with. Asking for different dimensions is an error.
pub fn obtain(
    rows: usize,
    columns: usize,
    policy: Box<dyn PlacementPolicy>,
) -> Result<&'static Mutex<GameBoard>, BoardError> {
    check_dimensions(rows, columns)?;
    let mut created = false;
    let instance = INSTANCE.get_or_init(|| {
        created = true;
        log::debug!("creating shared {}x{} board", rows, columns);
        Instance {
            rows,
            columns,
            board: Mutex::new(GameBoard::build(rows, columns, policy)),
        }
    });
    if !created {
        log::debug!("shared board already exists; supplied placement policy ignored");
    }
    if (instance.rows, instance.columns) != (rows, columns) {
        return Err(BoardError::AlreadyConfigured {
            rows: instance.rows,
            columns: instance.columns,
        });
    }
    Ok(&instance.board)
}
