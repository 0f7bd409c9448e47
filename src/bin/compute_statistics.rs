// src/bin/compute_statistics.rs
use std::process::ExitCode;

use line_tools::{Tool, app};

fn main() -> ExitCode {
    app::main_for(Tool::Statistics)
}
