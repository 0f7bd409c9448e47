// crates/usecase/src/scan.rs
use line_tools_domain::RecordParser;
use line_tools_ports::DiagnosticSink;
use line_tools_shared_kernel::LineNumber;

use crate::dto::ScanOutput;

/// Run `parser` over every line, forwarding rejects to `diagnostics` as they occur.
pub fn scan<P, S>(lines: &[S], parser: &P, diagnostics: &mut dyn DiagnosticSink) -> ScanOutput<P::Record>
where
    P: RecordParser,
    S: AsRef<str>,
{
    let mut records = Vec::with_capacity(lines.len());
    let mut rejected = 0;

    for (index, raw) in lines.iter().enumerate() {
        match parser.parse(LineNumber::from_index(index), raw.as_ref()) {
            Ok(record) => records.push(record),
            Err(diagnostic) => {
                rejected += 1;
                diagnostics.report(&diagnostic);
            }
        }
    }

    ScanOutput { records, lines_read: lines.len(), rejected }
}
