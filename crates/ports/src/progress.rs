// crates/ports/src/progress.rs
use line_tools_domain::Diagnostic;

/// Receives rejected-line diagnostics synchronously, in line order.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}
