// Copyright 2026 the Paged Vec Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The access-notification hook and the notifying read path.

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::error::PageError;
use crate::paged::PagedVec;

/// Collaborator notified on each notifying positional read.
///
/// This is the container's sole lazy-loading integration point. The hook
/// runs synchronously, inline in [`PagedVec::fetch`], after bounds checking
/// and before the value is returned. `slot` arrives pre-populated with the
/// value the container is about to return — `None` when the covering page is
/// missing — and whatever the hook leaves in it is what the caller gets.
///
/// A typical implementation checks whether the covering page is present and,
/// if not, starts loading it. A loader that can serve the page immediately
/// (say, from its own cache) installs it via [`PagedVec::set_page`] and
/// substitutes the real item into `slot`, so the caller never observes a
/// placeholder. A loader backed by a slow or asynchronous source must
/// instead schedule that work outside the call and return promptly, leaving
/// the placeholder; once the data arrives it calls [`PagedVec::set_page`]
/// and subsequent reads observe it. Cancellation of in-flight work is
/// entirely the loader's concern.
///
/// The hook receives the container mutably and may call any of its methods,
/// including [`PagedVec::set_page`], [`PagedVec::set_len`], and the loader
/// registration methods. A [`PagedVec::fetch`] issued from *inside* the hook
/// skips the nested notification rather than recursing.
pub trait PageLoader<T> {
    /// Called with the container, the logical index being accessed, and the
    /// output slot holding the value about to be returned.
    fn will_access(&mut self, pages: &mut PagedVec<T>, index: usize, slot: &mut Option<T>);
}

impl<T> PagedVec<T> {
    /// Registers `loader` as the access-notification hook.
    ///
    /// The container keeps only a [`Weak`] handle: registration never
    /// extends the loader's lifetime, and once the last external [`Rc`] is
    /// dropped, reads silently skip the notification step. Registering a
    /// loader replaces any previous one.
    pub fn set_loader<L>(&mut self, loader: &Rc<RefCell<L>>)
    where
        L: PageLoader<T> + 'static,
    {
        let loader: Rc<RefCell<dyn PageLoader<T>>> = loader.clone();
        self.loader = Some(Rc::downgrade(&loader));
    }

    /// Removes the access-notification hook, if any.
    pub fn clear_loader(&mut self) {
        self.loader = None;
    }

    /// Returns `true` if a still-alive loader is registered.
    #[must_use]
    pub fn has_loader(&self) -> bool {
        self.loader
            .as_ref()
            .is_some_and(|loader| loader.strong_count() > 0)
    }

    /// Returns the item at `index`, notifying the loader first.
    ///
    /// The output slot is pre-populated with the value about to be returned
    /// (`None` — the placeholder — when the covering page is missing), the
    /// loader's [`PageLoader::will_access`] runs, and the final slot
    /// contents are returned. The container never re-reads the page map
    /// after the hook and never blocks waiting for data; a missing page is
    /// normal steady state, not an error.
    ///
    /// Reads through [`PagedVec::get`], [`PagedVec::existing`], and
    /// [`PagedVec::to_vec`] do not notify.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn fetch(&mut self, index: usize) -> Result<Option<T>, PageError>
    where
        T: Clone,
    {
        if index >= self.len {
            return Err(PageError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let mut slot = self.lookup(index).cloned();
        if let Some(cell) = self.live_loader()
            && let Ok(mut loader) = cell.try_borrow_mut()
        {
            loader.will_access(self, index, &mut slot);
        }
        Ok(slot)
    }

    /// Upgrades the registered hook, dropping a dead handle on the way.
    fn live_loader(&mut self) -> Option<Rc<RefCell<dyn PageLoader<T>>>> {
        let loader = self.loader.as_ref()?;
        match loader.upgrade() {
            Some(loader) => Some(loader),
            None => {
                self.loader = None;
                None
            }
        }
    }
}
