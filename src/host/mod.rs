//! Seams between the router and the environment it runs in.
//!
//! A browser host would back [`Location`] with `window.location`, feed
//! `hashchange` events into the router and implement [`BaseSink`] on top of
//! the document's `<base>` element. [`MemoryLocation`] and [`MemoryBase`]
//! do the same in plain memory.

mod event;
mod memory;

pub use self::event::HashChange;
pub use self::memory::{MemoryBase, MemoryLocation};

/// Source of the current hash, and the place redirects are written to.
pub trait Location {
    /// The currently observed hash. A leading `#` is allowed.
    fn hash(&self) -> String;

    /// Navigates to `hash`.
    ///
    /// Implementations must deliver the change back to the router as a later
    /// [`HashChange`] instead of calling into it directly.
    fn set_hash(&mut self, hash: &str);
}

/// The element holding the base path used for relative resources.
pub trait BaseSink {
    /// Sets the current base, creating the element first if there is none.
    fn set_base(&mut self, base: &str);
}

/// Loads pages on behalf of route handlers. The router itself never calls it.
pub trait PageLoader {
    fn load(&self, page: &str, update_history: bool);
}

impl<L: Location + ?Sized> Location for Box<L> {
    fn hash(&self) -> String {
        (**self).hash()
    }

    fn set_hash(&mut self, hash: &str) {
        (**self).set_hash(hash)
    }
}

impl<S: BaseSink + ?Sized> BaseSink for Box<S> {
    fn set_base(&mut self, base: &str) {
        (**self).set_base(base)
    }
}

impl<F> PageLoader for F
where
    F: Fn(&str, bool),
{
    fn load(&self, page: &str, update_history: bool) {
        (self)(page, update_history)
    }
}
