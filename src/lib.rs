//! A toroidal Game of Life grid with click editing and a toggleable simulation.

pub mod engine;
pub mod layout;
pub mod pos;
pub mod render;
pub mod session;

pub use engine::{Cells, GridAutomaton};
pub use layout::{CellGeometry, CellRect};
pub use pos::{Dims, GridPos};
pub use render::{Canvas, Palette, Rgb};
pub use session::{Flow, HostEvent, Session};
