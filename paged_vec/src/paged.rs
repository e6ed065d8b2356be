// Copyright 2026 the Paged Vec Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paged container.

use alloc::boxed::Box;
use alloc::rc::Weak;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::ops::Range;

use hashbrown::HashMap;

use crate::error::PageError;
use crate::iter::ExistingItems;
use crate::loader::PageLoader;

/// A fixed-length, randomly-indexable sequence populated incrementally in
/// fixed-size pages.
///
/// The container owns three immutable-ish sizing parameters — the logical
/// length (`len`, revisable via [`PagedVec::set_len`]), the page length, and
/// the page numbering origin — plus a sparse map from page number to the
/// items actually supplied for that page. Reads at any in-bounds index are
/// well-defined from the moment of construction: if the covering page has
/// arrived, the stored item is returned; otherwise the read yields `None`,
/// the placeholder.
///
/// Pages are installed with [`PagedVec::set_page`], in any order, typically
/// by an external loader as batched fetches complete. Every non-terminal
/// page must be supplied with exactly `page_len` items; the terminal page
/// may be shorter (and is, whenever `len` is not a multiple of `page_len`).
///
/// An optional [`PageLoader`](crate::PageLoader) collaborator can be
/// attached to turn positional reads into load triggers; see
/// [`PagedVec::fetch`] and [`PagedVec::set_loader`].
///
/// The container is a single-threaded bookkeeping structure: no method
/// blocks, suspends, or spawns work, and multi-threaded callers must
/// serialize access externally.
pub struct PagedVec<T> {
    pub(crate) len: usize,
    pub(crate) page_len: usize,
    pub(crate) first_page: usize,
    pub(crate) pages: HashMap<usize, Box<[T]>>,
    pub(crate) loader: Option<Weak<RefCell<dyn PageLoader<T>>>>,
}

impl<T> PagedVec<T> {
    /// Creates a container for `len` items delivered in pages of `page_len`,
    /// with pages numbered from 1.
    ///
    /// No pages are materialized; every read starts out as the placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ZeroPageLen`] if `page_len` is zero.
    pub fn new(len: usize, page_len: usize) -> Result<Self, PageError> {
        Self::with_first_page(len, page_len, 1)
    }

    /// Creates a container with an explicit page numbering origin.
    ///
    /// `first_page` is most commonly 0 or 1, matching whatever the upstream
    /// source uses; it is fixed for the container's lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ZeroPageLen`] if `page_len` is zero.
    pub fn with_first_page(
        len: usize,
        page_len: usize,
        first_page: usize,
    ) -> Result<Self, PageError> {
        if page_len == 0 {
            return Err(PageError::ZeroPageLen);
        }
        Ok(Self {
            len,
            page_len,
            first_page,
            pages: HashMap::new(),
            loader: None,
        })
    }

    /// Returns the logical length of the sequence.
    ///
    /// This is the declared total, independent of how many items have
    /// actually been supplied.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the logical length is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of items per page.
    #[must_use]
    pub fn page_len(&self) -> usize {
        self.page_len
    }

    /// Returns the page numbering origin.
    #[must_use]
    pub fn first_page(&self) -> usize {
        self.first_page
    }

    /// Returns the number of pages the current logical length spans.
    ///
    /// Always consistent with [`PagedVec::len`]: this is recomputed, never
    /// cached, so it follows [`PagedVec::set_len`] automatically.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.page_len)
    }

    /// Revises the logical length.
    ///
    /// Producers often learn the true total only after pages start arriving;
    /// this updates the declared length without touching stored pages.
    /// Pages whose indices fall outside a reduced length are **retained**:
    /// they become unreachable through the bounds-checked accessors but still
    /// show up in [`PagedVec::existing`] and the stored-page snapshot, and
    /// become reachable again if the length grows back. Callers that want
    /// them gone can [`PagedVec::invalidate`] and refill.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Returns the page number covering the given logical index.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::IndexOutOfRange`] if `index >= self.len()`;
    /// out-of-range indices are a contract violation, never wrapped.
    pub fn page_for_index(&self, index: usize) -> Result<usize, PageError> {
        if index >= self.len {
            return Err(PageError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.first_page + index / self.page_len)
    }

    /// Returns the contiguous range of logical indices covered by `page`.
    ///
    /// Every page covers exactly `page_len` indices except the terminal
    /// page, whose range is clamped to the logical length.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::PageOutOfRange`] if `page` is outside
    /// `first_page..first_page + page_count`.
    pub fn index_range_for_page(&self, page: usize) -> Result<Range<usize>, PageError> {
        let page_count = self.page_count();
        if page < self.first_page || page - self.first_page >= page_count {
            return Err(PageError::PageOutOfRange {
                page,
                first_page: self.first_page,
                page_count,
            });
        }
        let start = (page - self.first_page) * self.page_len;
        let end = usize::min(start + self.page_len, self.len);
        Ok(start..end)
    }

    /// Installs or replaces the items for `page`.
    ///
    /// On success the page's previous contents, if any, are dropped; calling
    /// this twice with identical arguments is observably the same as calling
    /// it once. On failure nothing is written.
    ///
    /// # Errors
    ///
    /// - [`PageError::PageOutOfRange`] if `page` is outside the valid page
    ///   range.
    /// - [`PageError::PageSizeMismatch`] if a non-terminal page is supplied
    ///   with anything other than exactly `page_len` items, or the terminal
    ///   page with *more* items than its index range. A terminal page
    ///   supplied with fewer items is accepted — under-delivery on the last
    ///   batch is expected when the source's own count disagrees — and the
    ///   uncovered tail keeps reading as the placeholder.
    pub fn set_page(&mut self, page: usize, items: Vec<T>) -> Result<(), PageError> {
        let expected = self.index_range_for_page(page)?.len();
        let terminal = page + 1 == self.first_page + self.page_count();
        if items.len() != expected && (!terminal || items.len() > expected) {
            return Err(PageError::PageSizeMismatch {
                page,
                expected,
                actual: items.len(),
            });
        }
        self.pages.insert(page, items.into_boxed_slice());
        Ok(())
    }

    /// Returns the item at `index` without notifying the loader.
    ///
    /// `Ok(None)` is the placeholder: the covering page has not been
    /// supplied (or a short terminal fill does not reach this offset). Use
    /// [`PagedVec::fetch`] when the access should be able to trigger
    /// loading.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<Option<&T>, PageError> {
        if index >= self.len {
            return Err(PageError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.lookup(index))
    }

    /// Position lookup against the sparse map; `None` is the placeholder.
    pub(crate) fn lookup(&self, index: usize) -> Option<&T> {
        let page = self.first_page + index / self.page_len;
        self.pages
            .get(&page)
            .and_then(|items| items.get(index % self.page_len))
    }

    /// Returns a lazy iterator over `(logical_index, item)` for every item
    /// that has actually been supplied, in ascending index order.
    ///
    /// Missing pages contribute nothing — no placeholders — and the loader
    /// is not notified; this is a bulk/maintenance traversal, not a
    /// consumer-facing random access. Stop consuming the iterator to
    /// terminate early.
    #[must_use]
    pub fn existing(&self) -> ExistingItems<'_, T> {
        ExistingItems::new(self)
    }

    /// Returns a lazy iterator over just the supplied items, in ascending
    /// index order.
    ///
    /// The total number of items yielded equals the sum of stored-page
    /// lengths, regardless of the logical length. See [`PagedVec::existing`]
    /// for the indexed variant.
    pub fn existing_items(&self) -> impl Iterator<Item = &T> {
        self.existing().map(|(_, item)| item)
    }

    /// Materializes the full logical sequence as a `Vec`.
    ///
    /// The result has length [`PagedVec::len`]; positions whose page is
    /// missing hold `None`. The loader is not notified — this is a
    /// diagnostic/snapshot operation, not an incremental fetch path.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        (0..self.len).map(|index| self.lookup(index).cloned()).collect()
    }

    /// Drops every stored page, returning the container to the fully-sparse
    /// state.
    ///
    /// Sizing parameters and the loader registration are unchanged;
    /// subsequent reads observe all-missing pages and re-notify the loader
    /// as they are re-supplied. Use this when the upstream source has gone
    /// stale and must be re-fetched.
    pub fn invalidate(&mut self) {
        self.pages.clear();
    }

    /// Returns `true` if items for `page` are currently stored.
    #[must_use]
    pub fn contains_page(&self, page: usize) -> bool {
        self.pages.contains_key(&page)
    }

    /// Returns the stored items for `page`, if any.
    #[must_use]
    pub fn stored_page(&self, page: usize) -> Option<&[T]> {
        self.pages.get(&page).map(|items| &**items)
    }

    /// Returns an iterator over `(page, items)` for every stored page, in
    /// unspecified order.
    ///
    /// For ascending logical order, use [`PagedVec::existing`] instead.
    pub fn stored_pages(&self) -> impl Iterator<Item = (usize, &[T])> {
        self.pages.iter().map(|(&page, items)| (page, &**items))
    }

    /// Returns the number of stored pages.
    #[must_use]
    pub fn stored_page_count(&self) -> usize {
        self.pages.len()
    }
}

impl<T: PartialEq> PartialEq for PagedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.page_len == other.page_len
            && self.first_page == other.first_page
            && self.pages == other.pages
    }
}

impl<T> fmt::Debug for PagedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedVec")
            .field("len", &self.len)
            .field("page_len", &self.page_len)
            .field("first_page", &self.first_page)
            .field("stored_pages", &self.pages.len())
            .finish_non_exhaustive()
    }
}
