//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Reading the input file as text lines
//! - [`progress`]: Per-line diagnostics emitted while scanning
//! - [`output`]: Delivering finished reports (console, results file)
//! - [`clock`]: Elapsed wall-clock time since process start
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod filesystem;
pub mod output;
pub mod progress;

pub use clock::Clock;
pub use filesystem::LineSource;
pub use output::ReportSink;
pub use progress::DiagnosticSink;
