use std::cmp::Ordering;

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}
impl GridPos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
impl PartialOrd for GridPos {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for GridPos {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major, same as the traversal order of the grid
        Ord::cmp(&self.row, &other.row).then(Ord::cmp(&self.col, &other.col))
    }
}

/// Dimensions of a toroidal grid, never zero on either axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    rows: usize,
    cols: usize,
}
impl Dims {
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid must be at least 1x1");
        assert!(rows.checked_mul(cols).is_some(), "{rows}x{cols} grid overflows");
        Self { rows, cols }
    }

    /// Like [`Dims::new`], but `None` for an empty axis or a cell count that
    /// does not fit in `usize`
    pub fn checked(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        rows.checked_mul(cols)?;
        Some(Self { rows, cols })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major offset of `pos` into a backing array
    #[inline]
    pub fn index(&self, pos: GridPos) -> usize {
        debug_assert!(self.contains(pos), "{pos:?} outside {self:?}");
        pos.row * self.cols + pos.col
    }

    /// Inverse of [`Dims::index`]
    #[inline]
    pub fn pos(&self, index: usize) -> GridPos {
        GridPos {
            row: index / self.cols,
            col: index % self.cols,
        }
    }

    /// The cell at a signed offset from `pos`, wrapping around every edge
    #[inline]
    pub fn wrap(&self, pos: GridPos, d_row: isize, d_col: isize) -> GridPos {
        GridPos {
            row: wrap_axis(pos.row, d_row, self.rows),
            col: wrap_axis(pos.col, d_col, self.cols),
        }
    }
}

fn wrap_axis(value: usize, delta: isize, len: usize) -> usize {
    // rem_euclid keeps negative offsets on the torus
    (value as isize + delta).rem_euclid(len as isize) as usize
}
