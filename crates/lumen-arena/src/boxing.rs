//! The boxing entry point.

use lumen_core::Value;

use crate::arena::Arena;
use crate::error::ArenaError;
use crate::preload::PreloadTable;

/// Turn `n` into a [`Value`].
///
/// Small integers (`0..256` and `-128..=-1`) come back as the shared
/// canonical value from the [`PreloadTable`]; that path never touches
/// `arena`. Every other number, including fractions, `-0.0`, NaN and the
/// infinities, gets a fresh slot from [`Arena::allocate`].
pub fn box_number(arena: &mut Arena, n: f64) -> Result<Value, ArenaError> {
    if let Some(v) = PreloadTable::global().lookup(n) {
        return Ok(v);
    }
    arena.allocate(n)
}
