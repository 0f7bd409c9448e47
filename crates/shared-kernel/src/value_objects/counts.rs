// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    fmt,
    ops::{Add, AddAssign},
};

/// 1-based position of a line in the input file.
///
/// Every physical line advances the number, blank and invalid ones included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineNumber(usize);

impl LineNumber {
    #[inline]
    pub const fn first() -> Self {
        Self(1)
    }

    /// Number of the line at zero-based `index`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Default for LineNumber {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Number of token occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenCount(usize);

impl TokenCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for TokenCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for TokenCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<usize> for TokenCount {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for TokenCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<usize> for TokenCount {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl From<usize> for TokenCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<TokenCount> for usize {
    fn from(value: TokenCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for TokenCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<TokenCount> for usize {
    fn eq(&self, other: &TokenCount) -> bool {
        *self == other.0
    }
}

impl std::iter::Sum for TokenCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, count| acc + count)
    }
}

/// Formatting honours width and alignment so report columns can pad counts.
impl fmt::Display for TokenCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
