use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{self, Color},
    terminal,
};
use std::io::{self, Write};
use std::ops::Range;
use std::time::Duration;
use torus_life::{render, CellRect, Canvas, HostEvent, Palette, Rgb, Session};

/// Thin right-edge glyph used as the grid line between cells
const BORDER_GLYPH: char = '▕';

pub struct ConsoleRender {
    out: io::BufWriter<io::Stdout>,
    palette: Palette,
    // drawable (columns, rows) above the footer
    area: (u16, u16),
}
impl ConsoleRender {
    pub fn new(palette: Palette) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::BufWriter::new(io::stdout());
        execute!(
            out,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide
        )?;
        tracing::info!("terminal raw mode and mouse capture enabled");
        Ok(Self {
            out,
            palette,
            area: (0, 0),
        })
    }

    pub fn render(&mut self, session: &Session, footer: &str) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let area = (cols, rows.saturating_sub(1));
        if area != self.area {
            // stale cells may be left outside the grid after a resize
            queue!(self.out, style::ResetColor, terminal::Clear(terminal::ClearType::All))?;
            self.area = area;
        }

        render::draw_grid(session.grid(), session.geometry(), self)?;

        // write footer
        queue!(
            self.out,
            style::ResetColor,
            cursor::MoveTo(0, area.1),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(clip(footer, cols as usize))
        )?;
        self.out.flush()
    }

    /// Returns the next pending input, or `None` once the queue is drained
    pub fn poll_events(&mut self) -> io::Result<Option<HostEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Some(input) = translate(event::read()?) {
                return Ok(Some(input));
            }
        }
        Ok(None)
    }
}

impl Canvas for ConsoleRender {
    type Error = io::Error;

    fn fill_cell(&mut self, rect: CellRect, alive: bool) -> io::Result<()> {
        let Some((line, ys)) = cell_line(rect, self.area) else {
            return Ok(());
        };

        queue!(
            self.out,
            style::SetBackgroundColor(color(self.palette.fill(alive))),
            style::SetForegroundColor(color(self.palette.border))
        )?;
        for y in ys {
            queue!(
                self.out,
                cursor::MoveTo(rect.x as u16, y as u16),
                style::Print(&line)
            )?;
        }
        Ok(())
    }
}

impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // best effort, the terminal may already be gone
        let _ = execute!(
            self.out,
            style::ResetColor,
            cursor::Show,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        tracing::info!("terminal restored");
    }
}

/// The text printed on each visible row of a cell, and which rows those are
///
/// `area` is the drawable (columns, rows). Returns `None` when no part of the
/// cell is on screen. The border glyph is only drawn when the whole cell
/// width is visible and there is room for a blank next to it.
fn cell_line(rect: CellRect, area: (u16, u16)) -> Option<(String, Range<usize>)> {
    let (cols, rows) = (area.0 as usize, area.1 as usize);
    if rect.x >= cols || rect.y >= rows {
        return None;
    }
    let visible = (cols - rect.x).min(rect.width as usize);
    let line = if rect.width > 1 && visible == rect.width as usize {
        format!("{}{}", " ".repeat(visible - 1), BORDER_GLYPH)
    } else {
        " ".repeat(visible)
    };
    let bottom = (rect.y + rect.height as usize).min(rows);
    Some((line, rect.y..bottom))
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn clip(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

/// Maps a raw terminal event onto the input the session understands
fn translate(ev: Event) -> Option<HostEvent> {
    match ev {
        // CTRL+C
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            ..
        }) => Some(HostEvent::Quit),
        Event::Key(KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            kind: KeyEventKind::Press,
            ..
        }) => Some(HostEvent::Quit),
        Event::Key(KeyEvent {
            code: KeyCode::Char(' '),
            kind: KeyEventKind::Press,
            ..
        }) => Some(HostEvent::ToggleSimulation),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(HostEvent::Click { x: column, y: row }),
        _ => None,
    }
}
