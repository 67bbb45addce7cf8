//! Staging stack - LIFO byte regions with guaranteed release
//!
//! A `StagingScope` claims a region at the top of the stack and rolls the
//! top back when dropped. Drop runs on normal return, on `?` propagation,
//! and during unwind, so a claimed region can never leak past its call.

use alloc::vec::Vec;
use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Fixed-capacity byte stack for transient vertex staging
pub struct StagingStack {
    /// Backing memory, allocated once
    buffer: UnsafeCell<Vec<u8>>,
    /// Current top of stack
    top: AtomicUsize,
    /// Total capacity
    capacity: usize,
}

// Safety: region claims go through the atomic top; each scope gets a
// disjoint byte range.
unsafe impl Send for StagingStack {}
unsafe impl Sync for StagingStack {}

impl StagingStack {
    /// Create a stack with the given capacity in bytes
    pub fn new(capacity: usize) -> Self {
        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize(capacity, 0);

        Self {
            buffer: UnsafeCell::new(buffer),
            top: AtomicUsize::new(0),
            capacity,
        }
    }

    /// Claim `len` bytes at the top of the stack.
    ///
    /// Returns `None` when the claim would exceed capacity. The region is
    /// released when the returned scope drops.
    pub fn scope(&self, len: usize) -> Option<StagingScope<'_>> {
        loop {
            let start = self.top.load(Ordering::Relaxed);
            let end = start.checked_add(len)?;

            if end > self.capacity {
                return None;
            }

            match self.top.compare_exchange_weak(
                start,
                end,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Some(StagingScope { stack: self, start, len }),
                Err(_) => continue,
            }
        }
    }

    /// Bytes currently claimed
    pub fn used(&self) -> usize {
        self.top.load(Ordering::Relaxed)
    }

    /// Total capacity in bytes
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes still claimable
    pub fn free(&self) -> usize {
        self.capacity - self.used()
    }

    /// Drop all claims. Requires `&mut self`, so no scope can be live.
    pub fn reset(&mut self) {
        self.top.store(0, Ordering::Release);
    }
}

/// An exclusive claim on a staging region, rolled back on drop
pub struct StagingScope<'a> {
    stack: &'a StagingStack,
    start: usize,
    len: usize,
}

impl StagingScope<'_> {
    /// Length of the claimed region
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mutable view of the claimed region
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        // Safety: [start, start + len) was claimed from the atomic top and
        // no other scope overlaps it; the &mut self borrow makes the view
        // exclusive.
        unsafe {
            let base = (*self.stack.buffer.get()).as_mut_ptr();
            core::slice::from_raw_parts_mut(base.add(self.start), self.len)
        }
    }

    /// Shared view of the claimed region
    pub fn bytes(&self) -> &[u8] {
        // Safety: as above; shared view tied to &self.
        unsafe {
            let base = (*self.stack.buffer.get()).as_ptr();
            core::slice::from_raw_parts(base.add(self.start), self.len)
        }
    }
}

impl Drop for StagingScope<'_> {
    fn drop(&mut self) {
        // LIFO release: only roll back if this scope is still the top.
        let end = self.start + self.len;
        let _ = self.stack.top.compare_exchange(
            end,
            self.start,
            Ordering::AcqRel,
            Ordering::Relaxed,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_claims_and_releases() {
        let stack = StagingStack::new(256);
        {
            let mut scope = stack.scope(64).unwrap();
            assert_eq!(scope.bytes_mut().len(), 64);
            assert_eq!(stack.used(), 64);
        }
        assert_eq!(stack.used(), 0);
    }

    #[test]
    fn test_scope_rejects_overflow() {
        let stack = StagingStack::new(64);
        let _held = stack.scope(48).unwrap();
        assert!(stack.scope(32).is_none());
        assert!(stack.scope(16).is_some());
    }

    #[test]
    fn test_scope_releases_on_early_return() {
        fn fallible(stack: &StagingStack) -> Result<(), ()> {
            let _scope = stack.scope(32).ok_or(())?;
            Err(()) // scope must still unwind the claim
        }

        let stack = StagingStack::new(64);
        assert!(fallible(&stack).is_err());
        assert_eq!(stack.used(), 0);
    }

    #[test]
    fn test_nested_scopes_lifo() {
        let stack = StagingStack::new(128);
        let outer = stack.scope(32).unwrap();
        {
            let _inner = stack.scope(32).unwrap();
            assert_eq!(stack.used(), 64);
        }
        assert_eq!(stack.used(), 32);
        drop(outer);
        assert_eq!(stack.used(), 0);
    }

    #[test]
    fn test_scope_contents_are_exclusive() {
        let stack = StagingStack::new(128);
        let mut a = stack.scope(16).unwrap();
        let mut b = stack.scope(16).unwrap();
        a.bytes_mut().fill(0xAA);
        b.bytes_mut().fill(0xBB);
        assert!(a.bytes().iter().all(|&x| x == 0xAA));
        assert!(b.bytes().iter().all(|&x| x == 0xBB));
    }
}
