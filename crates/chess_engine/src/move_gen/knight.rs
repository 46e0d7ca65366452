//! Knight move shapes
//!
//! Knights jump: (±1, ±2) or (±2, ±1), ignoring anything in between.

use crate::types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let d_row = (to.row as i8 - from.row as i8).abs();
    let d_col = (to.col as i8 - from.col as i8).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}

pub fn knight_targets(from: Square, out: &mut Vec<Square>) {
    out.extend(
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc)),
    );
}
