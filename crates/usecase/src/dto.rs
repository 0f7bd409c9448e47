// crates/usecase/src/dto.rs
use line_tools_domain::ResultLines;

/// Records accepted by a scan plus bookkeeping about the lines seen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput<R> {
    pub records: Vec<R>,
    pub lines_read: usize,
    pub rejected: usize,
}

/// Result of one tool run, ready to be published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Full report; goes to the console and the results file.
    Report(ResultLines),
    /// No valid records: the no-data message and elapsed time, console only.
    NoData(ResultLines),
}

impl RunOutcome {
    pub fn lines(&self) -> &ResultLines {
        match self {
            Self::Report(lines) | Self::NoData(lines) => lines,
        }
    }

    pub fn has_report(&self) -> bool {
        matches!(self, Self::Report(_))
    }
}
