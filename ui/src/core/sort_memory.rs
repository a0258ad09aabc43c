//! The most recently visited listing sort order.
//!
//! Navigating from a listing into a post or profile should keep the logo and
//! breadcrumbs pointing back at the listing the user came from. The value is
//! shared: any clone of a `SortMemory` observes the latest write, and
//! [`SortMemory::global`] hands out the process-wide instance for code that
//! is not handed one explicitly.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::header::SortOrder;

static GLOBAL: Lazy<SortMemory> = Lazy::new(SortMemory::default);

#[derive(Debug, Clone, Default)]
pub struct SortMemory {
    last: Arc<RwLock<Option<SortOrder>>>,
}

impl SortMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> SortMemory {
        GLOBAL.clone()
    }

    pub fn get(&self) -> Option<SortOrder> {
        *self.last.read()
    }

    /// `home` is a personal feed, not a listing to return to; it is ignored.
    pub fn remember(&self, order: SortOrder) {
        if order == SortOrder::Home {
            return;
        }
        *self.last.write() = Some(order);
    }

    pub fn clear(&self) {
        *self.last.write() = None;
    }
}

impl PartialEq for SortMemory {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.last, &other.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_last_write() {
        let memory = SortMemory::new();
        let reader = memory.clone();
        assert_eq!(reader.get(), None);
        memory.remember(SortOrder::Hot);
        memory.remember(SortOrder::Active);
        assert_eq!(reader.get(), Some(SortOrder::Active));
        assert_eq!(memory, reader);
    }

    #[test]
    fn home_is_not_remembered() {
        let memory = SortMemory::new();
        memory.remember(SortOrder::Created);
        memory.remember(SortOrder::Home);
        assert_eq!(memory.get(), Some(SortOrder::Created));
    }

    #[test]
    fn separate_instances_are_independent() {
        let a = SortMemory::new();
        let b = SortMemory::new();
        a.remember(SortOrder::Hot);
        assert_eq!(b.get(), None);
        assert_ne!(a, b);
    }

    #[test]
    fn global_is_shared_across_threads() {
        let writer = SortMemory::global();
        std::thread::spawn(move || writer.remember(SortOrder::Trending30))
            .join()
            .unwrap();
        assert_eq!(SortMemory::global().get(), Some(SortOrder::Trending30));
    }
}
