// Copyright 2026 the Paged Vec Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy enumeration over the populated subset.

use alloc::boxed::Box;
use core::fmt;
use core::iter::{Enumerate, FusedIterator};
use core::slice;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::paged::PagedVec;

/// Inline capacity for the sorted page-key scratch.
///
/// Containers in the intended use cases hold a handful of resident pages;
/// this keeps the common case allocation-free.
const PAGE_KEY_INLINE: usize = 8;

/// Iterator over `(logical_index, item)` for every stored item, in ascending
/// index order.
///
/// Returned by [`PagedVec::existing`]. Pages that have not been supplied
/// contribute nothing, so the total number of items yielded is the sum of
/// stored-page lengths — reflected in the [`ExactSizeIterator`]
/// implementation — independent of the container's logical length.
pub struct ExistingItems<'a, T> {
    pages: &'a HashMap<usize, Box<[T]>>,
    page_len: usize,
    first_page: usize,
    order: smallvec::IntoIter<[usize; PAGE_KEY_INLINE]>,
    current: Option<(usize, Enumerate<slice::Iter<'a, T>>)>,
    remaining: usize,
}

impl<'a, T> ExistingItems<'a, T> {
    pub(crate) fn new(vec: &'a PagedVec<T>) -> Self {
        let mut order: SmallVec<[usize; PAGE_KEY_INLINE]> = vec.pages.keys().copied().collect();
        order.sort_unstable();
        let remaining = vec.pages.values().map(|items| items.len()).sum();
        Self {
            pages: &vec.pages,
            page_len: vec.page_len,
            first_page: vec.first_page,
            order: order.into_iter(),
            current: None,
            remaining,
        }
    }
}

impl<'a, T> Iterator for ExistingItems<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((base, items)) = self.current.as_mut()
                && let Some((offset, item)) = items.next()
            {
                self.remaining -= 1;
                return Some((*base + offset, item));
            }

            let page = self.order.next()?;
            let items = self.pages.get(&page)?;
            let base = (page - self.first_page) * self.page_len;
            self.current = Some((base, items.iter().enumerate()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ExistingItems<'_, T> {}

impl<T> FusedIterator for ExistingItems<'_, T> {}

impl<T> fmt::Debug for ExistingItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExistingItems")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
