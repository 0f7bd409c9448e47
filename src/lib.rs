// src/lib.rs
//! Shared entry point of the `compute_statistics`, `convert_numbers` and
//! `word_count` binaries.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub use line_tools_usecase::Tool;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
