use std::{fs::File, io, path::Path, sync::Mutex, thread, time::Instant};

use torus_life::{Flow, GridAutomaton, HostEvent, Palette, Session};
use tracing_subscriber::EnvFilter;

mod console;
mod options;
mod stats;

/// Sends logs to `path`; stdout belongs to the grid while running
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn invalid_input(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

fn main() -> io::Result<()> {
    let args = match options::Args::from_env() {
        Ok(Some(args)) => args,
        // help was printed
        Ok(None) => return Ok(()),
        Err(msg) => return Err(invalid_input(msg)),
    };
    if let Some(path) = args.log_file() {
        init_logging(&path)?;
    }

    // setup the grid from the terminal size, minus the footer row
    let geometry = args.cell_geometry().map_err(invalid_input)?;
    let fill = args.fill_mode().map_err(invalid_input)?;
    let (cols, rows) = crossterm::terminal::size()?;
    let dims = args
        .grid_dims(geometry.grid_dims(cols, rows.saturating_sub(1)))
        .map_err(invalid_input)?;
    let grid = GridAutomaton::from_alive(dims, fill.create_alive(dims));
    tracing::info!(
        rows = dims.rows(),
        cols = dims.cols(),
        ?fill,
        alive = grid.alive_count(),
        "starting"
    );

    let mut session = Session::new(grid, geometry);
    let mut console = console::ConsoleRender::new(Palette::default())?;
    let mut stats = stats::StatusLine::new();
    let interval = args.tick_interval();

    let mut next_frame = Instant::now();
    'frames: loop {
        while let Some(event) = console.poll_events()? {
            if session.handle(event) == Flow::Quit {
                break 'frames;
            }
        }
        session.handle(HostEvent::Tick);

        let grid = session.grid();
        stats.record(grid.generation(), grid.alive_count(), grid.simulation_mode());
        if stats.has_report() {
            stats.report();
        }
        console.render(&session, stats.text())?;

        next_frame += interval;
        match next_frame.checked_duration_since(Instant::now()) {
            Some(wait) => thread::sleep(wait),
            // running behind, skip the missed frames instead of bursting
            None => next_frame = Instant::now(),
        }
    }
    std::mem::drop(console);

    tracing::info!(generation = session.grid().generation(), "exiting");
    Ok(())
}
