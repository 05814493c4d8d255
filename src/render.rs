use crate::{engine::GridAutomaton, layout::CellGeometry, layout::CellRect};

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub alive: Rgb,
    pub dead: Rgb,
    /// color of the grid lines drawn over every cell
    pub border: Rgb,
}
impl Palette {
    #[inline]
    pub fn fill(&self, alive: bool) -> Rgb {
        if alive { self.alive } else { self.dead }
    }
}
impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Rgb::new(0, 255, 0),
            dead: Rgb::new(0, 0, 0),
            border: Rgb::new(50, 50, 50),
        }
    }
}

/// A surface that cells get drawn on
pub trait Canvas {
    type Error;

    /// Fills `rect` with the alive or dead color and draws its border
    fn fill_cell(&mut self, rect: CellRect, alive: bool) -> Result<(), Self::Error>;
}

/// Draws every cell of the grid, row by row
///
/// Cells after the first failed draw are skipped and that error is returned.
pub fn draw_grid<C: Canvas>(
    grid: &GridAutomaton,
    geometry: &CellGeometry,
    canvas: &mut C,
) -> Result<(), C::Error> {
    let mut result = Ok(());
    grid.for_each_cell(|pos, alive| {
        if result.is_ok() {
            result = canvas.fill_cell(geometry.cell_rect(pos), alive);
        }
    });
    result
}
