// Copyright 2026 the Paged Vec Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for container operations.

use core::fmt;

/// Error returned by fallible [`PagedVec`](crate::PagedVec) operations.
///
/// Errors are reserved for contract violations. A page that has simply not
/// been supplied yet is not one of them: positional reads report it through
/// the `None` placeholder instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageError {
    /// Construction was attempted with a page length of zero.
    ZeroPageLen,
    /// A page was supplied with the wrong number of items for its slot.
    PageSizeMismatch {
        /// The page being set.
        page: usize,
        /// The item count the page's index range calls for.
        expected: usize,
        /// The item count that was actually supplied.
        actual: usize,
    },
    /// An index-based accessor was called with an index at or past the
    /// logical length.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The container's logical length at the time of the call.
        len: usize,
    },
    /// A page-based accessor was called with a page number outside the valid
    /// page range.
    PageOutOfRange {
        /// The offending page number.
        page: usize,
        /// The container's first page number.
        first_page: usize,
        /// The number of pages the current logical length spans.
        page_count: usize,
    },
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPageLen => write!(f, "page length must be at least 1"),
            Self::PageSizeMismatch {
                page,
                expected,
                actual,
            } => write!(
                f,
                "page {page} holds {expected} item(s), but {actual} were supplied"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            Self::PageOutOfRange {
                page,
                first_page,
                page_count,
            } => write!(
                f,
                "page {page} is out of range ({page_count} page(s) starting at {first_page})"
            ),
        }
    }
}

impl core::error::Error for PageError {}
