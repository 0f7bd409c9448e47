// crates/domain/src/model/records.rs
use line_tools_shared_kernel::TokenCount;

/// A finite floating-point value read from one input line.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NumericRecord(f64);

impl NumericRecord {
    /// Returns `None` for NaN and infinities.
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// A numeric record with no fractional part, narrowed to `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntegerRecord(i64);

impl IntegerRecord {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }
}

/// Most frequent value of a numeric sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Value(f64),
    /// Every value occurs exactly once.
    NotApplicable,
}

impl Mode {
    pub const NOT_APPLICABLE_LABEL: &'static str = "#N/A";
}

/// A distinct token and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub token: String,
    pub count: TokenCount,
}

impl FrequencyEntry {
    pub fn new(token: impl Into<String>, count: impl Into<TokenCount>) -> Self {
        Self { token: token.into(), count: count.into() }
    }
}
