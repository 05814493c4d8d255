//! Mapping between grid cells and the host's character-cell surface.

use crate::pos::{Dims, GridPos};

/// The on-screen size of one grid cell, in terminal columns and rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    pub width: u16,
    pub height: u16,
}
impl CellGeometry {
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "cell size must be non-zero");
        Self { width, height }
    }

    /// Largest grid that fits in a viewport, never smaller than 1x1
    pub fn grid_dims(&self, viewport_width: u16, viewport_height: u16) -> Dims {
        let rows = (viewport_height / self.height).max(1);
        let cols = (viewport_width / self.width).max(1);
        Dims::new(rows as usize, cols as usize)
    }

    /// The grid cell under a surface coordinate, clamped to the grid bounds
    pub fn cell_at(&self, x: u16, y: u16, dims: Dims) -> GridPos {
        let row = (y / self.height) as usize;
        let col = (x / self.width) as usize;
        GridPos {
            row: row.min(dims.rows() - 1),
            col: col.min(dims.cols() - 1),
        }
    }

    /// The surface rectangle covered by a grid cell
    pub fn cell_rect(&self, pos: GridPos) -> CellRect {
        CellRect {
            x: pos.col * self.width as usize,
            y: pos.row * self.height as usize,
            width: self.width,
            height: self.height,
        }
    }
}
impl Default for CellGeometry {
    #[inline]
    fn default() -> Self {
        // two columns per row keeps cells roughly square in most fonts
        Self {
            width: 2,
            height: 1,
        }
    }
}

/// A rectangle on the host surface, with its origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: usize,
    pub y: usize,
    pub width: u16,
    pub height: u16,
}
