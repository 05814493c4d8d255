use crate::pos::{Dims, GridPos};
use std::fmt;

/// A row-major view over every cell of a grid
///
/// The view is `Copy`; calling [`Cells::iter`] again restarts the traversal from the
/// top-left cell.
#[derive(Debug, Clone, Copy)]
pub struct Cells<'a> {
    dims: Dims,
    cells: &'a [bool],
}
impl<'a> Cells<'a> {
    pub(super) fn new(dims: Dims, cells: &'a [bool]) -> Self {
        debug_assert_eq!(dims.len(), cells.len());
        Self { dims, cells }
    }

    #[inline]
    pub fn iter(self) -> impl Iterator<Item = (GridPos, bool)> + 'a {
        let dims = self.dims;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &alive)| (dims.pos(i), alive))
    }

    #[inline]
    pub fn alive(self) -> impl Iterator<Item = GridPos> + 'a {
        self.iter().filter_map(|(pos, alive)| alive.then_some(pos))
    }
}

impl fmt::Display for Cells<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dims.cols()) {
            for &alive in row {
                f.write_str(if alive { "█" } else { "·" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
