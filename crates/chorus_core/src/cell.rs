//! Shared handle to a store-owned record.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// A backing record shared between the live store and the entity wrapping it.
///
/// The store creates the cell and may patch the record at any time; wrappers
/// only read. Two cells are the *same record* when they point at the same
/// allocation, regardless of field values.
///
/// # Examples
///
/// ```
/// use chorus_core::RecordCell;
///
/// let cell = RecordCell::new(String::from("general"));
/// let alias = cell.clone();
/// alias.write().push_str("-chat");
///
/// assert_eq!(cell.read(|name| name.clone()), "general-chat");
/// assert!(cell.same_record(&alias));
/// assert!(!cell.same_record(&RecordCell::new(String::from("general-chat"))));
/// ```
#[derive(Debug, Default)]
pub struct RecordCell<T>(Arc<RwLock<T>>);

impl<T> Clone for RecordCell<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> RecordCell<T> {
    /// Wrap a freshly created record.
    pub fn new(record: T) -> Self {
        Self(Arc::new(RwLock::new(record)))
    }

    /// Read the current field values.
    ///
    /// The guard is released before this returns, so no lock outlives the call.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.read())
    }

    /// Borrow the record for a longer read. Do not hold across an `.await`.
    pub fn guard(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }

    /// Mutate the record. Store-side only.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write()
    }

    /// Whether both handles refer to the same backing record.
    pub fn same_record(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> RecordCell<T> {
    /// Copy of the current record.
    pub fn snapshot(&self) -> T {
        self.0.read().clone()
    }
}
