//! Mutex helpers for shared caches.
//!
//! A mutex becomes poisoned when a thread panics while holding it. The only
//! shared mutable state in this crate is the parse cache, whose entries are
//! immutable `Copy` colors, so a poisoned lock still guards consistent data.
//! [`lock_recover`] takes the guard regardless of poison.
//!
//! ```rust
//! use std::sync::Mutex;
//! use colorway::sync::lock_recover;
//!
//! let data = Mutex::new(vec![1, 2, 3]);
//! let guard = lock_recover(&data);
//! assert_eq!(guard.len(), 3);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering from poison if necessary.
///
/// This function never panics.
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("recovered poisoned mutex");
        PoisonError::into_inner(poisoned)
    })
}
