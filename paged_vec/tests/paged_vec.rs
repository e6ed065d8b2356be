// Copyright 2026 the Paged Vec Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `paged_vec` crate.
//!
//! These exercise the container end to end: index/page translation, page
//! installation and sizing rules, placeholder reads, enumeration over the
//! populated subset, invalidation, and the loader notification handshake.

use std::cell::RefCell;
use std::rc::Rc;

use paged_vec::{PageError, PageLoader, PagedVec};

/// Loader that records which pages were requested and leaves the
/// placeholder, the way an asynchronous data controller would.
struct PendingPages {
    requested: Vec<usize>,
}

impl PendingPages {
    fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            requested: Vec::new(),
        }))
    }
}

impl<T> PageLoader<T> for PendingPages {
    fn will_access(&mut self, pages: &mut PagedVec<T>, index: usize, slot: &mut Option<T>) {
        if slot.is_none() {
            let page = pages.page_for_index(index).unwrap();
            if !self.requested.contains(&page) {
                self.requested.push(page);
            }
        }
    }
}

/// Loader that serves every page synchronously from a deterministic source.
struct InstantSource;

impl PageLoader<String> for InstantSource {
    fn will_access(
        &mut self,
        pages: &mut PagedVec<String>,
        index: usize,
        slot: &mut Option<String>,
    ) {
        if slot.is_some() {
            return;
        }
        let page = pages.page_for_index(index).unwrap();
        let range = pages.index_range_for_page(page).unwrap();
        let items: Vec<String> = range.map(|i| format!("record-{i:04}")).collect();
        pages.set_page(page, items).unwrap();
        *slot = pages.get(index).unwrap().cloned();
    }
}

#[test]
fn translation_is_monotone_and_self_consistent() {
    for (len, page_len, first_page) in [(10, 3, 1), (10, 4, 1), (12, 4, 0), (7, 10, 1), (1, 1, 5)] {
        let vec = PagedVec::<u8>::with_first_page(len, page_len, first_page).unwrap();

        let mut previous = None;
        for index in 0..len {
            let page = vec.page_for_index(index).unwrap();
            if let Some(previous) = previous {
                assert!(page >= previous, "page numbers must not decrease");
            }
            previous = Some(page);

            let range = vec.index_range_for_page(page).unwrap();
            assert!(
                range.contains(&index),
                "index {index} must lie in its page's range {range:?}"
            );
        }
    }
}

#[test]
fn round_trip_through_set_page() {
    let mut vec = PagedVec::new(10, 3).unwrap();
    let items = vec!['a', 'b', 'c'];
    vec.set_page(2, items.clone()).unwrap();

    let range = vec.index_range_for_page(2).unwrap();
    for (offset, index) in range.enumerate() {
        assert_eq!(vec.get(index).unwrap(), Some(&items[offset]));
        assert_eq!(vec.fetch(index).unwrap(), Some(items[offset]));
    }
}

#[test]
fn set_page_is_idempotent() {
    let mut once = PagedVec::new(6, 3).unwrap();
    let mut twice = PagedVec::new(6, 3).unwrap();

    once.set_page(1, vec![1, 2, 3]).unwrap();
    twice.set_page(1, vec![1, 2, 3]).unwrap();
    twice.set_page(1, vec![1, 2, 3]).unwrap();

    assert_eq!(once.to_vec(), twice.to_vec());
    assert_eq!(once.stored_page_count(), twice.stored_page_count());
}

#[test]
fn existing_count_is_sum_of_stored_pages() {
    let mut vec = PagedVec::new(10, 4).unwrap();
    assert_eq!(vec.existing_items().count(), 0);

    vec.set_page(2, vec![4, 5, 6, 7]).unwrap();
    assert_eq!(vec.existing_items().count(), 4);

    vec.set_page(3, vec![8, 9]).unwrap();
    assert_eq!(vec.existing_items().count(), 6);

    // The sum tracks stored pages, not the declared length.
    vec.set_len(4);
    assert_eq!(vec.existing_items().count(), 6);
    vec.set_len(100);
    assert_eq!(vec.existing_items().count(), 6);
}

#[test]
fn boundary_sizing_with_three_pages_of_four() {
    let mut vec = PagedVec::new(10, 4).unwrap();
    assert_eq!(vec.page_count(), 3);

    // The terminal page takes exactly its two remaining items.
    assert_eq!(vec.set_page(3, vec![8, 9]), Ok(()));
    assert!(matches!(
        vec.set_page(3, vec![8, 9, 10, 11]),
        Err(PageError::PageSizeMismatch { page: 3, .. })
    ));

    // Non-terminal pages take exactly four.
    for page in [1, 2] {
        for wrong in [0, 2, 3, 5] {
            let items: Vec<i32> = (0..wrong).collect();
            assert!(
                matches!(
                    vec.set_page(page, items),
                    Err(PageError::PageSizeMismatch { .. })
                ),
                "page {page} must reject {wrong} item(s)"
            );
        }
        let items: Vec<i32> = (0..4).collect();
        assert_eq!(vec.set_page(page, items), Ok(()));
    }
}

#[test]
fn out_of_order_delivery_scenario() {
    let mut vec = PagedVec::new(10, 3).unwrap();
    vec.set_page(1, vec!['a', 'b', 'c']).unwrap();
    vec.set_page(2, vec!['d', 'e', 'f']).unwrap();

    assert_eq!(vec.fetch(4).unwrap(), Some('e'));
    // Page 4 is unfilled: the read is the placeholder, not an error.
    assert_eq!(vec.fetch(9).unwrap(), None);
    assert_eq!(vec.page_for_index(9).unwrap(), 4);
}

#[test]
fn synchronous_loader_masks_every_placeholder() {
    let mut vec = PagedVec::new(10, 4).unwrap();
    let loader = Rc::new(RefCell::new(InstantSource));
    vec.set_loader(&loader);

    for index in 0..vec.len() {
        let item = vec.fetch(index).unwrap();
        assert_eq!(item.as_deref(), Some(format!("record-{index:04}").as_str()));
    }
    assert_eq!(vec.stored_page_count(), vec.page_count());
}

#[test]
fn asynchronous_style_loader_supplies_later() {
    let mut vec = PagedVec::new(6, 3).unwrap();
    let loader = PendingPages::new();
    vec.set_loader(&loader);

    // First access: placeholder now, page recorded for loading.
    assert_eq!(vec.fetch(4).unwrap(), None);
    assert_eq!(loader.borrow().requested, vec![2]);

    // The "fetch" completes and the controller installs the page.
    vec.set_page(2, vec![30, 40, 50]).unwrap();
    assert_eq!(vec.fetch(4).unwrap(), Some(40));

    // No further page requests once data is present.
    assert_eq!(loader.borrow().requested, vec![2]);
}

#[test]
fn invalidation_resets_to_sparse_and_renotifies() {
    let mut vec = PagedVec::new(6, 3).unwrap();
    let loader = PendingPages::new();
    vec.set_loader(&loader);

    vec.set_page(1, vec![1, 2, 3]).unwrap();
    assert_eq!(vec.fetch(0).unwrap(), Some(1));
    assert!(loader.borrow().requested.is_empty());

    vec.invalidate();
    assert_eq!(vec.existing_items().count(), 0);
    for index in 0..vec.len() {
        assert_eq!(vec.fetch(index).unwrap(), None);
    }
    assert_eq!(loader.borrow().requested, vec![1, 2]);
}

#[test]
fn dropping_the_loader_disables_notification() {
    let mut vec = PagedVec::<u8>::new(6, 3).unwrap();
    let loader = PendingPages::new();
    vec.set_loader(&loader);
    assert!(vec.has_loader());

    drop(loader);
    assert!(!vec.has_loader());
    // Reads keep working, just without the hook.
    assert_eq!(vec.fetch(0).unwrap(), None);
    assert_eq!(vec.get(5).unwrap(), None);
}

#[test]
fn snapshot_length_is_always_the_declared_total() {
    let mut vec = PagedVec::new(7, 3).unwrap();
    assert_eq!(vec.to_vec().len(), 7);

    vec.set_page(3, vec![60]).unwrap();
    let snapshot = vec.to_vec();
    assert_eq!(snapshot.len(), 7);
    assert_eq!(snapshot[6], Some(60));
    assert_eq!(&snapshot[..6], &[None; 6]);
}
