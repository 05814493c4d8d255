/// Offsets of the eight cells surrounding a cell, excluding the cell itself
pub(super) const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The B3/S23 ruleset
///
/// Returns whether a cell is alive in the next generation given its current
/// state and the number of alive cells among its eight neighbors.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}
