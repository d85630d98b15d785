//! Half-open integer ranges used to drive every loop in the crate.

use std::iter::FusedIterator;
use std::ops::Range;

/// Immutable view of `[start, end)`.
///
/// A range never allocates and can be traversed any number of times; each
/// call to [`IndexRange::iter`] starts a fresh traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    start: usize,
    end: usize,
}

impl IndexRange {
    /// Range `[start, end)`. An `end` below `start` yields an empty range.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of indices, `end - start`, or 0 when `end <= start`.
    pub const fn size(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Ascending traversal of the range.
    pub fn iter(&self) -> IndexIter {
        IndexIter {
            next: self.start,
            end: self.end.max(self.start),
        }
    }
}

/// Range `[start, end)`.
pub const fn range(start: usize, end: usize) -> IndexRange {
    IndexRange::new(start, end)
}

/// Range `[0, n)`.
pub const fn indices(n: usize) -> IndexRange {
    IndexRange::new(0, n)
}

impl From<Range<usize>> for IndexRange {
    fn from(value: Range<usize>) -> Self {
        IndexRange::new(value.start, value.end)
    }
}

impl IntoIterator for IndexRange {
    type Item = usize;
    type IntoIter = IndexIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &IndexRange {
    type Item = usize;
    type IntoIter = IndexIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for IndexRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Iterator over an [`IndexRange`].
#[derive(Debug, Clone)]
pub struct IndexIter {
    next: usize,
    end: usize,
}

impl Iterator for IndexIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next < self.end {
            let value = self.next;
            self.next += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for IndexIter {
    fn next_back(&mut self) -> Option<usize> {
        if self.next < self.end {
            self.end -= 1;
            Some(self.end)
        } else {
            None
        }
    }
}

impl ExactSizeIterator for IndexIter {}

impl FusedIterator for IndexIter {}
