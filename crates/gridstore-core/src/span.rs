//! Half-open index intervals over rows or columns

use std::fmt;
use std::ops::Range;

use crate::error::{Error, Result};

/// A half-open interval `[start, end)` of 0-based row or column indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// First index covered by the span
    pub start: usize,
    /// One past the last index covered by the span
    pub end: usize,
}

impl Span {
    /// Create a span, rejecting `start > end`
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Resolve optional bounds: a missing start becomes 0 and a missing
    /// end becomes `default_end`.
    pub fn resolve(start: Option<usize>, end: Option<usize>, default_end: usize) -> Result<Self> {
        Self::new(start.unwrap_or(0), end.unwrap_or(default_end))
    }

    /// Resolve optional bounds where a missing end covers `len` items
    /// counted from the (possibly defaulted) start.
    pub fn resolve_len(start: Option<usize>, end: Option<usize>, len: usize) -> Result<Self> {
        let start = start.unwrap_or(0);
        Self::new(start, end.unwrap_or_else(|| start.saturating_add(len)))
    }

    /// Number of indices covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span covers no index
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Iterate over the covered indices
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
