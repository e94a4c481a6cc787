//! The ambient directory.
//!
//! Newly created histogram primitives attach themselves to an implicit
//! per-thread registry of names. Wrapper types detach their primitive right
//! after construction so its lifetime is governed by the wrapper alone.

use std::cell::RefCell;
use std::collections::BTreeSet;
use tracing::warn;

thread_local! {
    static NAMES: RefCell<BTreeSet<String>> = RefCell::new(BTreeSet::new());
}

/// Attach a name to the ambient directory.
pub(crate) fn register(name: &str) {
    NAMES.with(|names| {
        if !names.borrow_mut().insert(name.to_string()) {
            warn!("histogram '{name}' already registered in the ambient directory");
        }
    });
}

/// Remove a name from the ambient directory.
pub(crate) fn forget(name: &str) {
    NAMES.with(|names| {
        names.borrow_mut().remove(name);
    });
}

/// Check whether a histogram name is currently attached.
pub fn contains(name: &str) -> bool {
    NAMES.with(|names| names.borrow().contains(name))
}
