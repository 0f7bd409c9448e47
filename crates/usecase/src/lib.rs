//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement the three report tools:
//!
//! - [`tool`]: Catalogue of tools and their fixed user-facing texts
//! - [`scan`]: Line scanning with per-line diagnostics
//! - [`report`]: Fixed-width report formatting
//! - [`orchestrator`]: Read, compute, format and publish a single run
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod report;
pub mod scan;
pub mod tool;

pub use dto::{RunOutcome, ScanOutput};
pub use orchestrator::{RunTool, publish};
pub use tool::Tool;
