use std::path::Path;

use line_tools_domain::{
    ResultLines,
    analytics::{FrequencyTable, summarize},
    parsing::{IntegerParser, NumericParser, TokenParser},
};
use line_tools_ports::{Clock, DiagnosticSink, LineSource, ReportSink};
use line_tools_shared_kernel::{ErrorContext, Result};

use crate::{
    dto::{RunOutcome, ScanOutput},
    report,
    scan::scan,
    tool::Tool,
};

/// Reads an input file, runs one tool over it and formats the report.
pub struct RunTool<'a> {
    source: &'a dyn LineSource,
    clock: &'a dyn Clock,
}

impl<'a> RunTool<'a> {
    pub fn new(source: &'a dyn LineSource, clock: &'a dyn Clock) -> Self {
        Self { source, clock }
    }

    /// Execute `tool` against `input`.
    ///
    /// Invalid lines go to `diagnostics` while the file is scanned. The elapsed
    /// time is sampled once the rows are final, before anything is published.
    ///
    /// # Errors
    /// Fails when the input is missing or unreadable. Invalid lines never fail a run.
    pub fn execute(
        &self,
        tool: Tool,
        input: &Path,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<RunOutcome> {
        let lines = self
            .source
            .read_lines(input)
            .with_context(|| format!("reading input for {}", tool.binary_name()))?;
        log::debug!("{}: read {} lines from {}", tool.binary_name(), lines.len(), input.display());

        let rows = match tool {
            Tool::Statistics => {
                let scanned = scan(&lines, &NumericParser, diagnostics);
                log_scan(tool, &scanned);
                if scanned.records.is_empty() {
                    return Ok(self.no_data(tool));
                }
                report::statistics_rows(&summarize(&scanned.records)?)
            }
            Tool::BaseConversion => {
                let scanned = scan(&lines, &IntegerParser, diagnostics);
                log_scan(tool, &scanned);
                if scanned.records.is_empty() {
                    return Ok(self.no_data(tool));
                }
                report::conversion_rows(&scanned.records)
            }
            Tool::WordCount => {
                let scanned = scan(&lines, &TokenParser, diagnostics);
                log_scan(tool, &scanned);
                let mut table = FrequencyTable::new();
                for tokens in &scanned.records {
                    table.observe_all(tokens);
                }
                if table.is_empty() {
                    return Ok(self.no_data(tool));
                }
                report::frequency_rows(&table)
            }
        };

        Ok(RunOutcome::Report(self.finish(rows)))
    }

    fn finish(&self, mut rows: ResultLines) -> ResultLines {
        rows.push(report::elapsed_row(self.clock.elapsed_secs()));
        rows
    }

    fn no_data(&self, tool: Tool) -> RunOutcome {
        log::info!("{}: no valid records", tool.binary_name());
        let mut rows = ResultLines::with_capacity(2);
        rows.push(tool.no_data_message());
        RunOutcome::NoData(self.finish(rows))
    }
}

fn log_scan<R>(tool: Tool, scanned: &ScanOutput<R>) {
    log::info!(
        "{}: {} of {} lines accepted, {} rejected",
        tool.binary_name(),
        scanned.records.len(),
        scanned.lines_read,
        scanned.rejected
    );
}

/// Print the outcome to `console`; full reports are then persisted to `results`.
///
/// # Errors
/// Propagates the first sink failure.
pub fn publish(
    outcome: &RunOutcome,
    console: &mut dyn ReportSink,
    results: &mut dyn ReportSink,
) -> Result<()> {
    console.publish(outcome.lines()).context("printing report")?;
    if outcome.has_report() {
        results.publish(outcome.lines()).context("writing results file")?;
    }
    Ok(())
}
