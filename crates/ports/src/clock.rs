// crates/ports/src/clock.rs

/// Source of elapsed wall-clock time for the `TIME_ELAPSED_SECONDS` row.
pub trait Clock {
    /// Seconds since the process started.
    fn elapsed_secs(&self) -> f64;
}
