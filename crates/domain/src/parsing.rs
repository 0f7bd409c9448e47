// crates/domain/src/parsing.rs
//! Line-to-record validation.
//!
//! Parsers never fail hard: a line is either a record or a [`Diagnostic`]
//! that the caller reports before moving on to the next line.

use std::fmt;

use line_tools_shared_kernel::LineNumber;

use crate::model::{IntegerRecord, NumericRecord};

/// 2^63, the first magnitude that no longer fits in `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Why a line was rejected. Carries the trimmed line text where it is echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    Empty,
    Malformed(String),
    NotAnInteger(String),
    OutOfRange(String),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty"),
            Self::Malformed(raw) => f.write_str(raw),
            Self::NotAnInteger(raw) => write!(f, "not an integer -> {raw}"),
            Self::OutOfRange(raw) => write!(f, "out of range -> {raw}"),
        }
    }
}

/// A rejected line, rendered as `Invalid data at line {n}: {reason}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: LineNumber,
    pub reason: InvalidReason,
}

impl Diagnostic {
    pub fn new(line: LineNumber, reason: InvalidReason) -> Self {
        Self { line, reason }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid data at line {}: {}", self.line, self.reason)
    }
}

/// Converts one raw input line into a typed record.
pub trait RecordParser {
    type Record;

    fn parse(&self, line: LineNumber, raw: &str) -> Result<Self::Record, Diagnostic>;
}

/// Accepts finite base-10 floating-point literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericParser;

/// Accepts numeric literals without a fractional part that fit in `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerParser;

/// Splits non-empty lines on runs of whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenParser;

fn non_empty(line: LineNumber, raw: &str) -> Result<&str, Diagnostic> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(Diagnostic::new(line, InvalidReason::Empty))
    } else {
        Ok(trimmed)
    }
}

impl RecordParser for NumericParser {
    type Record = NumericRecord;

    fn parse(&self, line: LineNumber, raw: &str) -> Result<NumericRecord, Diagnostic> {
        let text = non_empty(line, raw)?;
        text.parse::<f64>()
            .ok()
            .and_then(NumericRecord::new)
            .ok_or_else(|| Diagnostic::new(line, InvalidReason::Malformed(text.to_owned())))
    }
}

impl RecordParser for IntegerParser {
    type Record = IntegerRecord;

    fn parse(&self, line: LineNumber, raw: &str) -> Result<IntegerRecord, Diagnostic> {
        let value = NumericParser.parse(line, raw)?.value();
        let text = raw.trim();

        if value.fract() != 0.0 {
            return Err(Diagnostic::new(line, InvalidReason::NotAnInteger(text.to_owned())));
        }
        if !(-I64_LIMIT..I64_LIMIT).contains(&value) {
            return Err(Diagnostic::new(line, InvalidReason::OutOfRange(text.to_owned())));
        }

        #[allow(clippy::cast_possible_truncation)]
        Ok(IntegerRecord::new(value as i64))
    }
}

impl RecordParser for TokenParser {
    type Record = Vec<String>;

    fn parse(&self, line: LineNumber, raw: &str) -> Result<Vec<String>, Diagnostic> {
        let text = non_empty(line, raw)?;
        Ok(text.split_whitespace().map(str::to_owned).collect())
    }
}
