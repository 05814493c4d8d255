use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks simulation progress for the console footer
pub struct StatusLine {
    generation: u64,
    alive: usize,
    running: bool,
    gens_in_report: u64,
    gens_per_sec: f64,
    last_report: Instant,
    report: String,
}
impl StatusLine {
    pub fn new() -> Self {
        Self {
            generation: 0,
            alive: 0,
            running: false,
            gens_in_report: 0,
            gens_per_sec: 0.0,
            // force a report on the first frame
            last_report: Instant::now()
                .checked_sub(REPORT_INTERVAL)
                .unwrap_or_else(Instant::now),
            report: String::new(),
        }
    }

    pub fn record(&mut self, generation: u64, alive: usize, running: bool) {
        self.gens_in_report += generation.saturating_sub(self.generation);
        self.generation = generation;
        self.alive = alive;
        if self.running != running {
            self.running = running;
            // mode changes show up right away rather than on the next report
            self.refresh_text();
        }
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }

    /// Recomputes the rate and returns the new footer text
    pub fn report(&mut self) -> &str {
        self.gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        self.refresh_text();
        &self.report
    }

    /// The last produced footer text
    pub fn text(&self) -> &str {
        &self.report
    }

    fn refresh_text(&mut self) {
        let mode = if self.running { "running" } else { "paused" };
        self.report = format!(
            "{} {:.02}gen/s gen:{} alive:{} | space: run/pause  click: edit  q: quit",
            mode, self.gens_per_sec, self.generation, self.alive
        );
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}
