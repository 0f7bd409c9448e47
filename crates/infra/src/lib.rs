// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod console;
pub mod persistence;
pub mod results_path;

pub use clock::Stopwatch;
pub use console::{ConsoleDiagnostics, ConsoleReport};
pub use persistence::{ResultsFile, TextFileSource};
pub use results_path::ResultsLocation;
