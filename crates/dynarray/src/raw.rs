//! Low-level primitives for raw element storage.
//!
//! [`RawBuf`] owns an allocation sized for `cap` values of `T` and nothing
//! more: it never reads, writes or drops elements. [`InitGuard`] tracks a run
//! of slots under construction and drops exactly those slots if construction
//! is abandoned, either by an early `Err` return or by unwinding.
//!
//! Every `unsafe` block in this module carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::convert::Infallible;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::error::ArrayError;

/// Exclusively-owned, uninitialized storage for `cap` elements of `T`.
///
/// A zero capacity holds no allocation. Zero-sized `T` never allocates either;
/// its capacity is purely logical.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf uniquely owns its allocation, like Box<[MaybeUninit<T>]>.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access to RawBuf exposes nothing mutable.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Storage with zero capacity and no allocation.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate room for exactly `cap` elements.
    pub(crate) fn try_with_capacity(cap: usize) -> Result<Self, ArrayError> {
        if cap == 0 {
            return Ok(Self::new());
        }
        let layout = Self::layout_for(cap)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            });
        }
        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(ArrayError::AllocFailed { layout })?;
        Ok(Self {
            ptr,
            cap,
            _marker: PhantomData,
        })
    }

    /// Like [`try_with_capacity`](Self::try_with_capacity), but diverges on
    /// failure the way the standard collections do.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        match Self::try_with_capacity(cap) {
            Ok(buf) => buf,
            Err(err) => alloc_failure(err),
        }
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    fn layout_for(cap: usize) -> Result<Layout, ArrayError> {
        Layout::array::<T>(cap).map_err(|_| ArrayError::CapacityOverflow { requested: cap })
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        if let Ok(layout) = Self::layout_for(self.cap) {
            // SAFETY: `ptr` was returned by `alloc` with this exact layout and
            // has not been freed; elements were already dropped or moved out.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

/// Abort the current operation after a storage failure in an infallible path.
///
/// Allocation failures go through [`alloc::handle_alloc_error`]; capacity
/// overflow panics with the error's message.
#[cold]
pub(crate) fn alloc_failure(err: ArrayError) -> ! {
    match err {
        ArrayError::AllocFailed { layout } => alloc::handle_alloc_error(layout),
        other => panic!("{other}"),
    }
}

/// Drop guard over a run of slots being constructed front to back.
///
/// While armed, dropping the guard drops every element pushed so far. Call
/// [`disarm`](Self::disarm) once the run is complete to hand ownership of the
/// elements back to the caller.
pub(crate) struct InitGuard<T> {
    start: *mut T,
    limit: usize,
    initialized: usize,
}

impl<T> InitGuard<T> {
    /// # Safety
    ///
    /// `start` must be valid for writes of `limit` consecutive elements, and
    /// those slots must be uninitialized.
    pub(crate) unsafe fn new(start: *mut T, limit: usize) -> Self {
        Self {
            start,
            limit,
            initialized: 0,
        }
    }

    /// Write `value` into the next slot.
    ///
    /// # Panics
    ///
    /// Panics if all `limit` slots are already initialized.
    pub(crate) fn push(&mut self, value: T) {
        assert!(self.initialized < self.limit, "InitGuard overrun");
        // SAFETY: `initialized < limit`, and the constructor's contract
        // guarantees the slot is writable and uninitialized.
        unsafe { ptr::write(self.start.add(self.initialized), value) };
        self.initialized += 1;
    }

    /// Stop tracking and return how many slots were initialized.
    pub(crate) fn disarm(self) -> usize {
        let initialized = self.initialized;
        mem::forget(self);
        initialized
    }
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        // SAFETY: exactly the first `initialized` slots hold live values that
        // nothing else owns.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.initialized));
        }
    }
}

/// Construct `count` values at `start` from `make`.
///
/// If `make` returns `Err` or panics, every value built so far is dropped
/// before the failure propagates, leaving all `count` slots uninitialized.
///
/// # Safety
///
/// `start` must be valid for writes of `count` uninitialized elements.
pub(crate) unsafe fn try_fill<T, E, F>(start: *mut T, count: usize, mut make: F) -> Result<(), E>
where
    F: FnMut() -> Result<T, E>,
{
    // SAFETY: forwarded from this function's contract.
    let mut guard = unsafe { InitGuard::new(start, count) };
    for _ in 0..count {
        guard.push(make()?);
    }
    guard.disarm();
    Ok(())
}

/// Lift an infallible constructor into the `Result` shape used by the
/// `try_*` paths.
#[inline]
pub(crate) fn infallible<T>(mut make: impl FnMut() -> T) -> impl FnMut() -> Result<T, Infallible> {
    move || Ok(make())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;

    struct Noisy(Rc<Cell<usize>>);

    impl Drop for Noisy {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn zero_capacity_does_not_allocate() {
        let buf = RawBuf::<u64>::try_with_capacity(0).unwrap();
        assert_eq!(buf.cap(), 0);
        assert_eq!(buf.as_ptr(), NonNull::<u64>::dangling().as_ptr());
    }

    #[test]
    fn zero_sized_type_keeps_logical_capacity() {
        let buf = RawBuf::<()>::try_with_capacity(64).unwrap();
        assert_eq!(buf.cap(), 64);
    }

    #[test]
    fn oversized_request_is_capacity_overflow() {
        let result = RawBuf::<u64>::try_with_capacity(usize::MAX);
        assert!(matches!(
            result,
            Err(ArrayError::CapacityOverflow { requested: usize::MAX })
        ));
    }

    #[test]
    fn fill_error_drops_partial_run() {
        let drops = Rc::new(Cell::new(0));
        let buf = RawBuf::<Noisy>::with_capacity(4);
        let mut built = 0;
        // SAFETY: fresh buffer with 4 uninitialized slots.
        let result = unsafe {
            try_fill(buf.as_ptr(), 4, || {
                built += 1;
                if built == 3 {
                    Err("third")
                } else {
                    Ok(Noisy(drops.clone()))
                }
            })
        };
        assert_eq!(result.err(), Some("third"));
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn fill_panic_drops_partial_run() {
        let drops = Rc::new(Cell::new(0));
        let buf = RawBuf::<Noisy>::with_capacity(4);
        let mut built = 0;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            // SAFETY: fresh buffer with 4 uninitialized slots.
            unsafe {
                try_fill(
                    buf.as_ptr(),
                    4,
                    infallible(|| {
                        built += 1;
                        assert!(built < 4, "fourth construction fails");
                        Noisy(drops.clone())
                    }),
                )
            }
        }));
        assert!(outcome.is_err());
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn disarmed_guard_leaves_values_alone() {
        let drops = Rc::new(Cell::new(0));
        let buf = RawBuf::<Noisy>::with_capacity(2);
        // SAFETY: fresh buffer with 2 uninitialized slots.
        let mut guard = unsafe { InitGuard::new(buf.as_ptr(), 2) };
        guard.push(Noisy(drops.clone()));
        guard.push(Noisy(drops.clone()));
        assert_eq!(guard.disarm(), 2);
        assert_eq!(drops.get(), 0);
        // SAFETY: both slots were initialized above and are dropped once here.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(buf.as_ptr(), 2)) };
        assert_eq!(drops.get(), 2);
    }
}
