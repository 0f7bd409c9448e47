// crates/infra/src/clock.rs
use std::time::Instant;

use line_tools_ports::Clock;

/// Wall-clock stopwatch. Create it first thing in `main` so readings cover the whole run.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }
}

impl Clock for Stopwatch {
    fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let watch = Stopwatch::start();
        let first = watch.elapsed_secs();
        let second = watch.elapsed_secs();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
