// crates/infra/src/console.rs
//! Standard-output adapters. Diagnostics and reports share stdout so they
//! interleave in the order they were produced.

use std::io::{self, Stdout, Write};

use line_tools_domain::{Diagnostic, ResultLines};
use line_tools_ports::{DiagnosticSink, ReportSink};
use line_tools_shared_kernel::{InfrastructureError, Result};

/// Prints each diagnostic as soon as it is reported.
pub struct ConsoleDiagnostics<W: Write = Stdout> {
    out: W,
}

impl ConsoleDiagnostics<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleDiagnostics<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticSink for ConsoleDiagnostics<W> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        // a broken stdout must not abort the scan
        if let Err(err) = writeln!(self.out, "{diagnostic}").and_then(|()| self.out.flush()) {
            log::warn!("could not print diagnostic: {err}");
        }
    }
}

/// Prints every report row on its own line.
pub struct ConsoleReport<W: Write = Stdout> {
    out: W,
}

impl ConsoleReport<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn publish(&mut self, lines: &ResultLines) -> Result<()> {
        let mut write = || -> io::Result<()> {
            for row in lines {
                writeln!(self.out, "{row}")?;
            }
            self.out.flush()
        };
        write().map_err(|source| InfrastructureError::Console { source }.into())
    }
}
