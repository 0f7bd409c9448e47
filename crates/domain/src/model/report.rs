// crates/domain/src/model/report.rs
use std::slice;

/// Ordered rows of a finished report.
///
/// Rows can only be appended; once handed to a sink the value is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultLines {
    rows: Vec<String>,
}

impl ResultLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { rows: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, row: impl Into<String>) {
        self.rows.push(row.into());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.rows
    }

    /// Rows joined with `\n`, each row newline-terminated.
    pub fn to_text(&self) -> String {
        let capacity = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut text = String::with_capacity(capacity);
        for row in &self.rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }
}

impl<'a> IntoIterator for &'a ResultLines {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> Extend<S> for ResultLines {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.rows.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_keep_insertion_order() {
        let mut lines = ResultLines::new();
        lines.push("COUNT\t3");
        lines.extend(["MEAN\t2.0", "MEDIAN\t2.0"]);

        let rows: Vec<_> = lines.iter().map(String::as_str).collect();
        assert_eq!(rows, vec!["COUNT\t3", "MEAN\t2.0", "MEDIAN\t2.0"]);
    }

    #[test]
    fn text_terminates_every_row() {
        let mut lines = ResultLines::new();
        lines.push("a");
        lines.push("b");
        assert_eq!(lines.to_text(), "a\nb\n");
        assert_eq!(ResultLines::new().to_text(), "");
    }
}
