// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options and the update callback.

use alloc::boxed::Box;
use core::fmt;

/// Callback invoked after every state-changing operation of a selector.
///
/// It receives the selector itself, fully updated, so it can read the new
/// state (for example to re-render). It runs synchronously before the
/// mutating call returns.
pub type OnUpdated<Sel> = Box<dyn Fn(&Sel)>;

/// Options accepted by every selector's `with_options` constructor.
///
/// ```rust
/// use core::cell::Cell;
/// use std::rc::Rc;
/// use understory_selection::{ItemSelector, SelectorOptions};
///
/// let renders = Rc::new(Cell::new(0));
/// let counter = renders.clone();
/// let options = SelectorOptions::new().on_updated(move |_| counter.set(counter.get() + 1));
///
/// let mut selector = ItemSelector::with_options(vec![("a", ()), ("b", ())], options);
/// selector.select("a", false);
/// selector.select("b", true);
/// assert_eq!(renders.get(), 2);
/// ```
pub struct SelectorOptions<Sel> {
    /// Called after each update. `None` means updates are not reported.
    pub on_updated: Option<OnUpdated<Sel>>,
}

impl<Sel> SelectorOptions<Sel> {
    /// Options with no callback.
    #[must_use]
    pub fn new() -> Self {
        Self { on_updated: None }
    }

    /// Set the update callback.
    #[must_use]
    pub fn on_updated(mut self, on_updated: impl Fn(&Sel) + 'static) -> Self {
        self.on_updated = Some(Box::new(on_updated));
        self
    }
}

impl<Sel> Default for SelectorOptions<Sel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Sel> fmt::Debug for SelectorOptions<Sel> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorOptions")
            .field("on_updated", &self.on_updated.is_some())
            .finish()
    }
}
