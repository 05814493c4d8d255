mod cells;
mod rule;

pub use self::cells::Cells;
pub use self::rule::next_state;
use self::rule::NEIGHBOR_OFFSETS;
use crate::pos::{Dims, GridPos};

/// A toroidal Game of Life grid plus the flag deciding whether ticks advance it
#[derive(Debug, Clone)]
pub struct GridAutomaton {
    dims: Dims,
    cells: Vec<bool>,
    // scratch buffer for the next generation, swapped with `cells` on every step
    next: Vec<bool>,
    simulating: bool,
    generation: u64,
}

impl GridAutomaton {
    /// Creates an all-dead grid with simulation mode off
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![false; dims.len()],
            next: vec![false; dims.len()],
            simulating: false,
            generation: 0,
        }
    }

    /// Creates a grid where only the given positions are alive
    pub fn from_alive<I: IntoIterator<Item = GridPos>>(dims: Dims, alive: I) -> Self {
        let mut grid = Self::new(dims);
        for pos in alive {
            assert!(dims.contains(pos), "{pos:?} outside {dims:?}");
            let idx = dims.index(pos);
            grid.cells[idx] = true;
        }
        grid
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn get(&self, pos: GridPos) -> bool {
        assert!(self.dims.contains(pos), "{pos:?} outside {:?}", self.dims);
        self.cells[self.dims.index(pos)]
    }

    /// Flips the state of exactly one cell
    ///
    /// # Panics
    /// If `pos` is outside the grid. Hosts clamp input positions before
    /// calling, so this only fires on a host bug.
    pub fn toggle_cell(&mut self, pos: GridPos) {
        assert!(self.dims.contains(pos), "{pos:?} outside {:?}", self.dims);
        let idx = self.dims.index(pos);
        self.cells[idx] = !self.cells[idx];
    }

    /// Number of alive cells among the eight toroidal neighbors of `pos`
    pub fn neighbors(&self, pos: GridPos) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(d_row, d_col)| {
                let neighbor = self.dims.wrap(pos, d_row, d_col);
                self.cells[self.dims.index(neighbor)]
            })
            .count() as u8
    }

    /// Advances the grid by one generation
    ///
    /// Every cell is computed from the previous generation only; the result
    /// lands in the scratch buffer and replaces the grid in one swap.
    pub fn step(&mut self) {
        for idx in 0..self.cells.len() {
            let pos = self.dims.pos(idx);
            self.next[idx] = next_state(self.cells[idx], self.neighbors(pos));
        }
        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
    }

    #[inline]
    pub fn set_simulation_mode(&mut self, enabled: bool) {
        self.simulating = enabled;
    }

    #[inline]
    pub fn simulation_mode(&self) -> bool {
        self.simulating
    }

    /// Handles one periodic tick, stepping once if simulation mode is on
    ///
    /// Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if self.simulating {
            self.step();
        }
        self.simulating
    }

    /// A restartable row-major traversal of the current grid
    #[inline]
    pub fn cells(&self) -> Cells<'_> {
        Cells::new(self.dims, &self.cells)
    }

    /// Calls `visitor` with every cell in row-major order
    pub fn for_each_cell<F: FnMut(GridPos, bool)>(&self, mut visitor: F) {
        for (pos, alive) in self.cells().iter() {
            visitor(pos, alive);
        }
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Number of steps taken since construction
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> GridPos {
        GridPos::new(row, col)
    }

    /// Builds a grid from rows of `#` (alive) and `.` (dead)
    fn grid(rows: &[&str]) -> GridAutomaton {
        let dims = Dims::new(rows.len(), rows[0].len());
        let alive = rows.iter().enumerate().flat_map(|(row, line)| {
            line.char_indices()
                .filter(|&(_, c)| c == '#')
                .map(move |(col, _)| pos(row, col))
        });
        GridAutomaton::from_alive(dims, alive)
    }

    fn alive(grid: &GridAutomaton) -> Vec<GridPos> {
        grid.cells().alive().collect()
    }

    #[test]
    fn new_grid_is_dead_and_paused() {
        let grid = GridAutomaton::new(Dims::new(4, 6));

        assert_eq!(grid.alive_count(), 0);
        assert!(!grid.simulation_mode());
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn dead_grid_stays_dead() {
        let mut grid = GridAutomaton::new(Dims::new(8, 8));
        grid.step();

        assert_eq!(grid.alive_count(), 0);
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn isolated_cell_dies() {
        let mut grid = grid(&[".....", ".....", "..#..", ".....", "....."]);
        grid.step();

        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn block_is_stable() {
        let mut grid = grid(&["......", ".##...", ".##...", "......", "......"]);
        let before = alive(&grid);
        grid.step();

        assert_eq!(alive(&grid), before);
    }

    #[test]
    fn block_across_the_corner_is_stable() {
        let mut grid = grid(&["#...#", ".....", ".....", "#...#"]);
        let before = alive(&grid);
        grid.step();

        assert_eq!(alive(&grid), before);
    }

    #[test]
    fn corner_neighbors_wrap() {
        let grid = grid(&["#....", ".....", ".....", "....#"]);

        assert_eq!(grid.neighbors(pos(0, 0)), 1);
        assert_eq!(grid.neighbors(pos(3, 4)), 1);
        assert_eq!(grid.neighbors(pos(1, 1)), 1);
        assert_eq!(grid.neighbors(pos(2, 2)), 0);
    }

    #[test]
    fn toggle_flips_exactly_one_cell() {
        let mut grid = GridAutomaton::new(Dims::new(3, 3));
        grid.toggle_cell(pos(1, 2));

        assert_eq!(alive(&grid), vec![pos(1, 2)]);

        grid.toggle_cell(pos(1, 2));
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    #[should_panic]
    fn toggle_outside_grid_panics() {
        let mut grid = GridAutomaton::new(Dims::new(3, 3));
        grid.toggle_cell(pos(3, 0));
    }

    #[test]
    fn blinker_oscillates() {
        let mut grid = grid(&[".....", ".....", ".###.", ".....", "....."]);

        grid.step();
        assert_eq!(alive(&grid), vec![pos(1, 2), pos(2, 2), pos(3, 2)]);
        assert!(!grid.get(pos(2, 1)));
        assert!(!grid.get(pos(2, 3)));

        grid.step();
        assert_eq!(alive(&grid), vec![pos(2, 1), pos(2, 2), pos(2, 3)]);
    }

    #[test]
    fn blinker_wraps_around_the_edge() {
        // the horizontal blinker straddles the left/right edge
        let mut grid = grid(&[".....", ".....", "##..#", ".....", "....."]);
        grid.step();

        assert_eq!(alive(&grid), vec![pos(1, 0), pos(2, 0), pos(3, 0)]);
    }

    #[test]
    fn glider_returns_after_full_lap() {
        let mut grid = grid(&[".#....", "..#...", "###...", "......", "......", "......"]);
        let before = alive(&grid);
        // a glider moves one cell diagonally every 4 generations
        for _ in 0..4 * 6 {
            grid.step();
        }

        assert_eq!(alive(&grid), before);
    }

    #[test]
    fn paused_ticks_leave_grid_unchanged() {
        let mut grid = grid(&[".....", ".....", ".###.", ".....", "....."]);
        let before = alive(&grid);
        grid.set_simulation_mode(false);
        for _ in 0..5 {
            assert!(!grid.tick());
        }

        assert_eq!(alive(&grid), before);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn running_tick_steps_once() {
        let mut grid = grid(&[".....", ".....", ".###.", ".....", "....."]);
        grid.set_simulation_mode(true);

        assert!(grid.tick());
        assert_eq!(grid.generation(), 1);
        assert_eq!(alive(&grid), vec![pos(1, 2), pos(2, 2), pos(3, 2)]);
    }

    #[test]
    fn simulation_mode_does_not_touch_cells() {
        let mut grid = grid(&["#.", ".#"]);
        grid.set_simulation_mode(true);
        grid.set_simulation_mode(false);

        assert_eq!(alive(&grid), vec![pos(0, 0), pos(1, 1)]);
    }

    #[test]
    fn for_each_cell_is_row_major_and_restartable() {
        let grid = grid(&["#..", ".#."]);
        let mut visited = Vec::new();
        grid.for_each_cell(|pos, alive| visited.push((pos, alive)));

        assert_eq!(visited.len(), 6);
        assert_eq!(visited[0], (pos(0, 0), true));
        assert_eq!(visited[3], (pos(1, 0), false));
        assert_eq!(visited[4], (pos(1, 1), true));
        assert!(visited.windows(2).all(|w| w[0].0 < w[1].0));

        let cells = grid.cells();
        assert_eq!(cells.iter().collect::<Vec<_>>(), visited);
        assert_eq!(cells.iter().collect::<Vec<_>>(), visited);
    }

    #[test]
    fn cells_display_as_text() {
        let grid = grid(&["#..", ".#."]);

        assert_eq!(grid.cells().to_string(), "█··\n·█·\n");
    }
}
