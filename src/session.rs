use crate::{engine::GridAutomaton, layout::CellGeometry};

/// An input delivered by the host loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The periodic simulation clock fired
    Tick,
    /// A pointer click at a surface coordinate
    Click { x: u16, y: u16 },
    ToggleSimulation,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes host events into a [`GridAutomaton`]
#[derive(Debug)]
pub struct Session {
    grid: GridAutomaton,
    geometry: CellGeometry,
}

impl Session {
    pub fn new(grid: GridAutomaton, geometry: CellGeometry) -> Self {
        Self { grid, geometry }
    }

    pub fn handle(&mut self, event: HostEvent) -> Flow {
        match event {
            HostEvent::Tick => {
                if self.grid.tick() {
                    tracing::trace!(generation = self.grid.generation(), "stepped");
                }
            }
            HostEvent::Click { x, y } => {
                let pos = self.geometry.cell_at(x, y, self.grid.dims());
                self.grid.toggle_cell(pos);
                tracing::debug!(
                    row = pos.row,
                    col = pos.col,
                    alive = self.grid.get(pos),
                    "cell toggled"
                );
            }
            HostEvent::ToggleSimulation => {
                let enabled = !self.grid.simulation_mode();
                self.grid.set_simulation_mode(enabled);
                tracing::info!(enabled, generation = self.grid.generation(), "simulation mode");
            }
            HostEvent::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    #[inline]
    pub fn grid(&self) -> &GridAutomaton {
        &self.grid
    }

    #[inline]
    pub fn geometry(&self) -> &CellGeometry {
        &self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::{Dims, GridPos};

    fn session(rows: usize, cols: usize) -> Session {
        let grid = GridAutomaton::new(Dims::new(rows, cols));
        Session::new(grid, CellGeometry::new(2, 1))
    }

    fn alive(session: &Session) -> Vec<GridPos> {
        session.grid().cells().alive().collect()
    }

    #[test]
    fn click_toggles_cell_under_pointer() {
        let mut session = session(5, 5);

        assert_eq!(session.handle(HostEvent::Click { x: 7, y: 2 }), Flow::Continue);
        assert_eq!(alive(&session), vec![GridPos::new(2, 3)]);

        session.handle(HostEvent::Click { x: 6, y: 2 });
        assert!(alive(&session).is_empty());
    }

    #[test]
    fn click_outside_grid_is_clamped() {
        let mut session = session(5, 5);
        session.handle(HostEvent::Click { x: 500, y: 7 });

        assert_eq!(alive(&session), vec![GridPos::new(4, 4)]);
    }

    #[test]
    fn ticks_only_step_while_simulating() {
        let mut session = session(5, 5);
        for x in [2, 4, 6] {
            session.handle(HostEvent::Click { x, y: 2 });
        }
        let horizontal = alive(&session);

        for _ in 0..3 {
            session.handle(HostEvent::Tick);
        }
        assert_eq!(alive(&session), horizontal);
        assert_eq!(session.grid().generation(), 0);

        session.handle(HostEvent::ToggleSimulation);
        session.handle(HostEvent::Tick);
        assert_eq!(session.grid().generation(), 1);
        assert_eq!(
            alive(&session),
            vec![GridPos::new(1, 2), GridPos::new(2, 2), GridPos::new(3, 2)]
        );

        session.handle(HostEvent::ToggleSimulation);
        session.handle(HostEvent::Tick);
        assert_eq!(session.grid().generation(), 1);
    }

    #[test]
    fn toggle_simulation_flips_mode() {
        let mut session = session(3, 3);
        session.handle(HostEvent::ToggleSimulation);
        assert!(session.grid().simulation_mode());

        session.handle(HostEvent::ToggleSimulation);
        assert!(!session.grid().simulation_mode());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut session = session(3, 3);

        assert_eq!(session.handle(HostEvent::Quit), Flow::Quit);
    }
}
