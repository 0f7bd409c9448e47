// crates/ports/src/output.rs
use line_tools_domain::ResultLines;
use line_tools_shared_kernel::Result;

/// Destination for a finished report.
pub trait ReportSink {
    /// Deliver every row of `lines`, in order.
    fn publish(&mut self, lines: &ResultLines) -> Result<()>;
}
