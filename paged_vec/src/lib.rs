// Copyright 2026 the Paged Vec Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=paged_vec --heading-base-level=0

//! Paged Vec: a sparse, page-oriented container for incrementally delivered sequences.
//!
//! Many data sources deliver a fixed-length sequence in fixed-size batches
//! ("pages"): paginated HTTP APIs, batched database cursors, chunked file
//! reads. Consumers, on the other hand, want to address the sequence by plain
//! logical index, starting before any data has arrived and without doing their
//! own index-to-page bookkeeping.
//!
//! [`PagedVec`] sits between the two. A caller declares "this sequence has
//! `len` items, delivered in pages of `page_len`", reads any in-bounds index
//! immediately, and installs real pages as they arrive — in any order. A read
//! whose page has not arrived yet returns `None`, the placeholder; a missing
//! page is normal steady state, never an error.
//!
//! The core pieces are:
//!
//! - [`PagedVec`]: the container itself — sizing parameters, the sparse page
//!   map, and index/page translation.
//! - [`PageLoader`]: an optional collaborator notified synchronously on each
//!   [`PagedVec::fetch`], which may trigger loading and substitute the value
//!   about to be returned.
//! - [`ExistingItems`]: a lazy iterator over only the items that have actually
//!   been supplied, in ascending logical-index order.
//! - [`PageError`]: contract violations (bad sizing, wrong-sized pages,
//!   out-of-range indices). Missing data is *not* among them.
//!
//! This crate deliberately does **not** fetch anything. Networking,
//! persistence, prefetch distance, retries, and concurrency all belong to the
//! loader collaborator; the container only keeps the books. It is likewise
//! single-threaded: no operation blocks or spawns work, and callers that share
//! a container across threads must serialize access themselves.
//!
//! ## Minimal example
//!
//! ```rust
//! use paged_vec::PagedVec;
//!
//! // A feed of 10 records, delivered in pages of 3, numbered from 1.
//! let mut feed = PagedVec::new(10, 3).unwrap();
//! assert_eq!(feed.page_count(), 4);
//!
//! // Page 2 arrives first.
//! feed.set_page(2, vec!["d", "e", "f"]).unwrap();
//!
//! assert_eq!(feed.get(4).unwrap(), Some(&"e"));
//! // Page 1 has not arrived: the read is well-defined, just empty.
//! assert_eq!(feed.get(0).unwrap(), None);
//!
//! // Only supplied items, in ascending index order.
//! let have: Vec<&str> = feed.existing_items().copied().collect();
//! assert_eq!(have, ["d", "e", "f"]);
//! ```
//!
//! ## Lazy loading
//!
//! Registering a [`PageLoader`] turns positional reads into load triggers.
//! The hook runs inline during [`PagedVec::fetch`], receives the container
//! and a slot pre-populated with the value about to be returned, and may
//! install pages and overwrite the slot:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use paged_vec::{PageLoader, PagedVec};
//!
//! // A loader that can serve any page synchronously from its own store.
//! struct Warehouse;
//!
//! impl PageLoader<u32> for Warehouse {
//!     fn will_access(&mut self, pages: &mut PagedVec<u32>, index: usize, slot: &mut Option<u32>) {
//!         if slot.is_some() {
//!             return;
//!         }
//!         let page = pages.page_for_index(index).unwrap();
//!         let range = pages.index_range_for_page(page).unwrap();
//!         let items: Vec<u32> = range.map(|i| u32::try_from(i).unwrap() * 10).collect();
//!         pages.set_page(page, items).unwrap();
//!         *slot = pages.get(index).unwrap().copied();
//!     }
//! }
//!
//! let mut vec = PagedVec::new(9, 3).unwrap();
//! let loader = Rc::new(RefCell::new(Warehouse));
//! vec.set_loader(&loader);
//!
//! // The first access fills the covering page; no placeholder escapes.
//! assert_eq!(vec.fetch(4).unwrap(), Some(40));
//! assert!(vec.contains_page(2));
//! ```
//!
//! A loader backed by a genuinely asynchronous source instead schedules the
//! real work elsewhere, leaves the placeholder in the slot, and calls
//! [`PagedVec::set_page`] once data arrives; subsequent reads then observe it.
//!
//! The container holds the loader through a *weak* handle: it never keeps the
//! collaborator alive, and once the collaborator is dropped, reads simply skip
//! the notification step.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod iter;
mod loader;
mod paged;

pub use error::PageError;
pub use iter::ExistingItems;
pub use loader::PageLoader;
pub use paged::PagedVec;
