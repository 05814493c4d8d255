use std::{path::PathBuf, str::FromStr, time::Duration};

use torus_life::{CellGeometry, Dims, GridPos};

const USAGE: &str = "usage: torus-life [options]";

/// Upper bound on `rows * cols`; the engine keeps two buffers of this many cells
const MAX_CELLS: usize = 1 << 24;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optopt("r", "rate", "simulation ticks per second", "TICKS");
        opts.optopt("", "cell-width", "terminal columns per cell", "COLS");
        opts.optopt("", "cell-height", "terminal rows per cell", "ROWS");
        opts.optopt("w", "width", "set grid width in cells", "WIDTH");
        opts.optopt("h", "height", "set grid height in cells", "HEIGHT");
        opts.optopt(
            "f",
            "fill",
            "initial cells: empty, random, alternating or all",
            "TYPE",
        );
        opts.optopt("", "log", "write logs to file", "FILE");
        opts
    }

    /// Parses `args` (without the program name)
    ///
    /// Returns `Ok(None)` when only help was requested.
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, String> {
        let opts = Self::options();
        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .map_err(|e| e.to_string())?;
        if matches.opt_present("help") {
            println!("{}", opts.usage(USAGE));
            return Ok(None);
        }

        let args = Self { matches };
        args.validate()?;
        Ok(Some(args))
    }
    pub fn from_env() -> Result<Option<Self>, String> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn validate(&self) -> Result<(), String> {
        self.rate()?;
        self.cell_geometry()?;
        self.grid_override()?;
        self.fill_mode()?;
        Ok(())
    }

    /// Reads a numeric option that must be greater than zero
    fn positive<N>(&self, name: &str) -> Result<Option<N>, String>
    where
        N: FromStr + PartialOrd + Default + Copy,
    {
        let value = self
            .matches
            .opt_get::<N>(name)
            .map_err(|_| format!("--{name} expects a number"))?;
        match value {
            Some(n) if n <= N::default() => Err(format!("--{name} must be greater than 0")),
            value => Ok(value),
        }
    }

    fn rate(&self) -> Result<u32, String> {
        Ok(self.positive("rate")?.unwrap_or(10))
    }
    pub fn tick_interval(&self) -> Duration {
        let rate = self.rate().unwrap_or(10);
        Duration::from_secs(1) / rate
    }

    pub fn cell_geometry(&self) -> Result<CellGeometry, String> {
        let default = CellGeometry::default();
        Ok(CellGeometry::new(
            self.positive("cell-width")?.unwrap_or(default.width),
            self.positive("cell-height")?.unwrap_or(default.height),
        ))
    }

    /// Explicit grid size as (cols, rows); either axis may be unset
    fn grid_override(&self) -> Result<(Option<usize>, Option<usize>), String> {
        let cols = self.positive("width")?;
        let rows = self.positive("height")?;
        // an unset axis counts as 1 here, the viewport is checked in `grid_dims`
        checked_grid(rows.unwrap_or(1), cols.unwrap_or(1))?;
        Ok((cols, rows))
    }

    /// The grid size, each axis falling back to `viewport` when unset
    pub fn grid_dims(&self, viewport: Dims) -> Result<Dims, String> {
        let (cols, rows) = self.grid_override()?;
        checked_grid(
            rows.unwrap_or(viewport.rows()),
            cols.unwrap_or(viewport.cols()),
        )
    }

    pub fn fill_mode(&self) -> Result<FillMode, String> {
        let mode_str = self.matches.opt_str("fill");
        let mode_str = mode_str.as_deref().unwrap_or("empty");
        FillMode::new(mode_str).ok_or_else(|| format!("unknown fill mode {mode_str:?}"))
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.matches.opt_str("log").map(PathBuf::from)
    }
}

fn checked_grid(rows: usize, cols: usize) -> Result<Dims, String> {
    Dims::checked(rows, cols)
        .filter(|dims| dims.len() <= MAX_CELLS)
        .ok_or_else(|| format!("{cols}x{rows} grid exceeds {MAX_CELLS} cells"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Empty,
    Random,
    Alternating,
    All,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "empty" => Some(Self::Empty),
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    fn fill_cell<R: rand::Rng>(&self, cell: GridPos, rng: &mut R) -> bool {
        match self {
            Self::Empty => false,
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.row + cell.col).is_multiple_of(2),
            Self::All => true,
        }
    }

    /// The cells that start out alive, in row-major order
    pub fn create_alive(self, dims: Dims) -> Vec<GridPos> {
        if self == Self::Empty {
            return Vec::new();
        }

        let mut rng = rand::rng();
        (0..dims.len())
            .map(|i| dims.pos(i))
            .filter(|&cell| self.fill_cell(cell, &mut rng))
            .collect()
    }
}
