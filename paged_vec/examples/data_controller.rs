// Copyright 2026 the Paged Vec Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The data-controller integration pattern.
//!
//! A controller owns the real data source and registers itself as the
//! container's loader. Consumers read the container by plain index; the
//! controller fills pages behind their back as accesses land on missing
//! data. Here the "source" is an in-process table so everything resolves
//! synchronously; a networked controller would instead leave the
//! placeholder in the slot and call `set_page` when the response arrives.

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use paged_vec::{PageLoader, PagedVec};

/// Stand-in for a paginated backend holding the full record table.
struct Controller {
    records: Vec<String>,
    pages_served: usize,
}

impl Controller {
    fn new(count: usize) -> Self {
        Self {
            records: (0..count).map(|i| format!("record-{i:04}")).collect(),
            pages_served: 0,
        }
    }
}

impl PageLoader<String> for Controller {
    fn will_access(
        &mut self,
        pages: &mut PagedVec<String>,
        index: usize,
        slot: &mut Option<String>,
    ) {
        if slot.is_some() {
            return;
        }
        let page = pages.page_for_index(index).expect("index was bounds-checked");
        let range = pages.index_range_for_page(page).expect("page covers a valid index");
        let items = self.records[range].to_vec();
        pages.set_page(page, items).expect("items match the page's range");
        self.pages_served += 1;
        *slot = pages.get(index).expect("index was bounds-checked").cloned();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut feed = PagedVec::new(10, 4)?;
    let controller = Rc::new(RefCell::new(Controller::new(10)));
    feed.set_loader(&controller);

    println!(
        "feed: {} record(s), {} page(s) of up to {}",
        feed.len(),
        feed.page_count(),
        feed.page_len()
    );

    // Random access anywhere in the feed; pages fill on demand.
    for index in [0, 9, 1] {
        let record = feed.fetch(index)?;
        println!("feed[{index}] = {record:?}");
    }
    println!(
        "pages served so far: {} (index 1 hit an already-resident page)",
        controller.borrow().pages_served
    );

    // Bulk traversal of what is resident never triggers loads.
    let resident: Vec<&String> = feed.existing_items().collect();
    println!("{} record(s) resident", resident.len());

    // The source went stale: drop contents, keep sizing, refill on demand.
    feed.invalidate();
    println!("after invalidate: {} resident", feed.existing_items().count());
    let record = feed.fetch(5)?;
    println!("feed[5] = {record:?}");
    println!("pages served in total: {}", controller.borrow().pages_served);

    Ok(())
}
