//! Cross-context shared cell for animation state.
//!
//! A `SharedValue` is written by the interaction side (label presses) and
//! read by the animation side (frame evaluation). Clones share the same
//! slot. Every accessor holds the lock for exactly one closure or copy, so
//! a reader never observes a half-applied write.
//!
//! Blocking accessors serve synchronous render loops; the `*_async`
//! variants serve executors that must not block.

use async_lock::RwLock;
use std::sync::Arc;

/// Shared, lock-guarded value box.
#[derive(Debug, Default)]
pub struct SharedValue<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for SharedValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> SharedValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        *self.inner.write_blocking() = value;
    }

    /// Read through a closure without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read_blocking())
    }

    /// Mutate in place under a single write lock.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write_blocking())
    }

    pub async fn set_async(&self, value: T) {
        *self.inner.write().await = value;
    }

    pub async fn with_async<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.inner.read().await)
    }

    pub async fn update_async<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.inner.write().await)
    }

    /// Whether two handles point at the same slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> SharedValue<T> {
    /// Clone the stored value out.
    pub fn get(&self) -> T {
        self.inner.read_blocking().clone()
    }

    pub async fn get_async(&self) -> T {
        self.inner.read().await.clone()
    }
}
