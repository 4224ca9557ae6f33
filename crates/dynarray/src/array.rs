//! The growable array and its allocation protocol.
//!
//! [`DynArray`] keeps `[0, len)` initialized and `[len, capacity)` raw. Every
//! operation that needs more room goes through one reallocation path:
//!
//! 1. allocate a fresh region (failure leaves the array untouched);
//! 2. construct any new elements in the fresh region behind a drop guard
//!    (failure drops what was built and frees the region);
//! 3. relocate the live elements bitwise, which cannot fail;
//! 4. swap the regions and free the old one without dropping its contents.
//!
//! Because step 3 is the first step that touches the live elements and it is
//! infallible, every growing operation has the strong failure guarantee.

#![allow(unsafe_code)]

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Rev;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::{self, SliceIndex};

use crate::config::GrowthPolicy;
use crate::error::{ArrayError, TryBuildError};
use crate::raw::{self, InitGuard, RawBuf};

/// A contiguous, growable array with manually managed storage.
///
/// # View invalidation
///
/// Slices and iterators borrowed from the array ([`iter`](Self::iter),
/// [`as_slice`](Self::as_slice), [`as_ptr`](Self::as_ptr), ...) are bound to
/// the current storage. Any call that changes the length or the capacity may
/// move the storage; the borrow checker rejects such calls while a borrowed
/// view is alive. Raw pointers from [`as_ptr`](Self::as_ptr) are not tracked
/// and must not be used after such a call.
///
/// # Failure safety
///
/// Constructors either return a fully built array or release everything they
/// allocated. Growing operations (`push_back`, `emplace_back`, `reserve`,
/// `resize*`, `shrink_to_fit`) leave the array exactly as it was if
/// allocation or element construction fails, whether the element reports
/// failure by panicking or, in the `try_*` variants, by returning `Err`.
pub struct DynArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Create an empty array. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Create an empty array with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows; aborts via
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error) if the
    /// allocator fails.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            buf: RawBuf::try_with_capacity(capacity)?,
            len: 0,
        })
    }

    /// Create an array of `len` elements, each produced by `make`.
    ///
    /// Capacity equals `len`. If `make` panics, the elements built so far are
    /// dropped and the storage is released before the panic continues.
    pub fn from_fn<F>(len: usize, make: F) -> Self
    where
        F: FnMut() -> T,
    {
        settle(Self::try_from_fn(len, raw::infallible(make)))
    }

    /// Create an array of `len` elements from a fallible constructor.
    ///
    /// On the first `Err`, the elements built so far are dropped, the storage
    /// is released and the error is returned as [`TryBuildError::Element`].
    pub fn try_from_fn<E, F>(len: usize, make: F) -> Result<Self, TryBuildError<E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        let buf = RawBuf::try_with_capacity(len)?;
        // SAFETY: `buf` is fresh and has `len` uninitialized slots.
        let filled = unsafe { raw::try_fill(buf.as_ptr(), len, make) };
        filled.map_err(TryBuildError::Element)?;
        Ok(Self { buf, len })
    }

    /// Move the contents out, leaving `self` empty with no allocation.
    ///
    /// This is the explicit ownership transfer: the returned array holds
    /// exactly the previous length, capacity and storage of `self`.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Drop the current contents, then adopt the state of `source` and leave
    /// `source` empty.
    pub fn assign_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    /// Exchange length, capacity and storage with `other` without touching
    /// any element.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of element slots the current storage can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Returns `true` if the array holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pointer to the first slot of the storage.
    ///
    /// Dangling (but non-null and aligned) when the capacity is zero.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable pointer to the first slot of the storage.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }

    /// The live region as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized; the pointer is non-null and
        // aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// The live region as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Checked access.
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len`. This is the only
    /// accessor that reports a bad index as a recoverable error.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }
        // SAFETY: bounds checked above.
        Ok(unsafe { &*self.buf.as_ptr().add(index) })
    }

    /// Checked mutable access. See [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }
        // SAFETY: bounds checked above; `&mut self` guarantees uniqueness.
        Ok(unsafe { &mut *self.buf.as_ptr().add(index) })
    }

    /// Unchecked access.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). Anything else is
    /// undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "get_unchecked out of range");
        // SAFETY: caller guarantees `index < len`.
        unsafe { &*self.buf.as_ptr().add(index) }
    }

    /// Unchecked mutable access.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "get_unchecked_mut out of range");
        // SAFETY: caller guarantees `index < len`.
        unsafe { &mut *self.buf.as_ptr().add(index) }
    }

    /// First element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(first) => first,
            None => panic!("front() called on an empty DynArray"),
        }
    }

    /// Mutable first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(first) => first,
            None => panic!("front_mut() called on an empty DynArray"),
        }
    }

    /// Last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(last) => last,
            None => panic!("back() called on an empty DynArray"),
        }
    }

    /// Mutable last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(last) => last,
            None => panic!("back_mut() called on an empty DynArray"),
        }
    }

    /// Front-to-back view of the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable front-to-back view of the live elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Back-to-front view of the live elements.
    pub fn rev_iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.iter().rev()
    }

    /// Mutable back-to-front view of the live elements.
    pub fn rev_iter_mut(&mut self) -> Rev<slice::IterMut<'_, T>> {
        self.iter_mut().rev()
    }

    /// Ensure the capacity is at least `capacity`.
    ///
    /// Unlike `Vec::reserve`, the argument is the total capacity wanted, not
    /// an additional amount. Grows to exactly `capacity` when it exceeds the
    /// current capacity; otherwise does nothing. Never changes the length.
    pub fn reserve(&mut self, capacity: usize) {
        if let Err(err) = self.try_reserve(capacity) {
            raw::alloc_failure(err);
        }
    }

    /// Fallible form of [`reserve`](Self::reserve). On error the array is
    /// unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), ArrayError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        self.try_reallocate(capacity, |_| Ok::<usize, Infallible>(0))
            .map_err(|err| match err {
                TryBuildError::Array(err) => err,
                TryBuildError::Element(never) => match never {},
            })
    }

    /// Release unused capacity.
    ///
    /// An empty array gives up its storage entirely; otherwise the elements
    /// are moved into a region of exactly `len` slots.
    pub fn shrink_to_fit(&mut self) {
        if self.len == 0 {
            self.buf = RawBuf::new();
        } else if self.len < self.capacity() {
            settle(self.try_reallocate(self.len, |_| Ok::<usize, Infallible>(0)));
        }
    }

    /// Drop every element past `len`. Does nothing if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = self.len - len;
        // Shorten first so a panicking destructor cannot cause a double drop.
        self.len = len;
        // SAFETY: `[len, len + tail)` was live and is no longer counted by
        // `self.len`, so each element is dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr().add(len), tail));
        }
    }

    /// Drop all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resize to `len`, producing new elements with `make`.
    ///
    /// Growing past the capacity reallocates to exactly `len` slots. Shrinking
    /// drops the tail. In every case the array ends with `len` elements.
    pub fn resize_with<F>(&mut self, len: usize, make: F)
    where
        F: FnMut() -> T,
    {
        settle(self.try_resize_with(len, raw::infallible(make)));
    }

    /// Resize to `len` from a fallible constructor.
    ///
    /// If `make` fails, every element it produced during this call is dropped
    /// and the array keeps its previous length, capacity and contents.
    pub fn try_resize_with<E, F>(&mut self, len: usize, make: F) -> Result<(), TryBuildError<E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        if len <= self.len {
            self.truncate(len);
            return Ok(());
        }
        let extra = len - self.len;
        if len > self.capacity() {
            return self.try_reallocate(len, |dst| {
                // SAFETY: `dst` starts `extra` uninitialized slots of the
                // fresh region.
                let filled = unsafe { raw::try_fill(dst, extra, make) };
                filled.map(|()| extra)
            });
        }
        // SAFETY: `[self.len, len)` lies within the capacity and is
        // uninitialized.
        let filled = unsafe { raw::try_fill(self.buf.as_ptr().add(self.len), extra, make) };
        filled.map_err(TryBuildError::Element)?;
        self.len = len;
        Ok(())
    }

    /// Append `value`, growing to `max(1, 2 * capacity)` when full.
    pub fn push_back(&mut self, value: T) {
        self.emplace_back(move || value);
    }

    /// Append `value`, handing it back if storage cannot be obtained.
    ///
    /// On error the array is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<(), (T, ArrayError)> {
        if self.len == self.capacity() {
            if let Err(err) = self.next_capacity().and_then(|cap| self.try_reserve(cap)) {
                return Err((value, err));
            }
        }
        // SAFETY: `len < capacity`, so slot `len` exists and is uninitialized.
        unsafe { ptr::write(self.buf.as_ptr().add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Append an element built by `make` and return a reference to it.
    ///
    /// When the array is full, `make` runs only after the grown region
    /// exists and writes straight into it; if `make` panics the grown region
    /// is discarded and the array is left as it was.
    pub fn emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace_back(move || Ok::<T, Infallible>(make())) {
            Ok(slot) => slot,
            Err(TryBuildError::Array(err)) => raw::alloc_failure(err),
            Err(TryBuildError::Element(never)) => match never {},
        }
    }

    /// Fallible form of [`emplace_back`](Self::emplace_back).
    pub fn try_emplace_back<E, F>(&mut self, make: F) -> Result<&mut T, TryBuildError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if self.len == self.capacity() {
            let capacity = self.next_capacity()?;
            self.try_reallocate(capacity, |dst| {
                let value = make()?;
                // SAFETY: `dst` is the first uninitialized slot of the fresh
                // region, which has room for at least one more element.
                unsafe { ptr::write(dst, value) };
                Ok(1)
            })?;
        } else {
            let value = make().map_err(TryBuildError::Element)?;
            // SAFETY: `len < capacity`, so slot `len` exists and is
            // uninitialized.
            unsafe { ptr::write(self.buf.as_ptr().add(self.len), value) };
            self.len += 1;
        }
        // SAFETY: slot `len - 1` was initialized just above.
        Ok(unsafe { &mut *self.buf.as_ptr().add(self.len - 1) })
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was live and is no longer counted, so ownership
        // passes to the caller.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    /// Give up ownership of the storage without dropping anything.
    pub(crate) fn into_raw_parts(self) -> (RawBuf<T>, usize) {
        let mut this = mem::ManuallyDrop::new(self);
        let buf = mem::replace(&mut this.buf, RawBuf::new());
        (buf, this.len)
    }

    fn next_capacity(&self) -> Result<usize, ArrayError> {
        GrowthPolicy::next_capacity(self.capacity())
            .ok_or(ArrayError::CapacityOverflow { requested: usize::MAX })
    }

    /// Move into a fresh region of exactly `capacity` slots.
    ///
    /// `construct` receives a pointer to slot `len` of the fresh region,
    /// builds new elements there and returns how many. It must either build
    /// all of them or drop what it built before returning `Err` or unwinding.
    fn try_reallocate<E, C>(&mut self, capacity: usize, construct: C) -> Result<(), TryBuildError<E>>
    where
        C: FnOnce(*mut T) -> Result<usize, E>,
    {
        debug_assert!(capacity >= self.len);
        let fresh: RawBuf<T> = RawBuf::try_with_capacity(capacity)?;
        // SAFETY: `capacity >= len`, so the offset stays inside `fresh`.
        let tail = unsafe { fresh.as_ptr().add(self.len) };
        let built = construct(tail).map_err(TryBuildError::Element)?;
        debug_assert!(self.len + built <= capacity);
        // SAFETY: distinct allocations; `[0, len)` of the old region is live
        // and is relocated bitwise. The old region is only deallocated after
        // this, never dropped element by element.
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_ptr(), self.len) };
        drop(mem::replace(&mut self.buf, fresh));
        self.len += built;
        Ok(())
    }
}

/// Unwrap the result of an infallible-constructor operation, diverging on
/// storage failure.
fn settle<R>(result: Result<R, TryBuildError<Infallible>>) -> R {
    match result {
        Ok(value) => value,
        Err(TryBuildError::Array(err)) => raw::alloc_failure(err),
        Err(TryBuildError::Element(never)) => match never {},
    }
}

impl<T: Default> DynArray<T> {
    /// Create an array of `len` default-constructed elements.
    pub fn with_len(len: usize) -> Self {
        Self::from_fn(len, T::default)
    }

    /// Resize to `len`, filling new slots with `T::default()`.
    pub fn resize(&mut self, len: usize) {
        self.resize_with(len, T::default);
    }
}

impl<T: Clone> DynArray<T> {
    /// Create an array of `len` clones of `value`.
    pub fn from_elem(len: usize, value: &T) -> Self {
        Self::from_fn(len, || value.clone())
    }

    /// Create an array holding clones of `items`, with capacity `items.len()`.
    pub fn from_slice(items: &[T]) -> Self {
        Self::clone_with_capacity(items, items.len())
    }

    /// Resize to `len`, filling new slots with clones of `value`.
    pub fn resize_with_value(&mut self, len: usize, value: &T) {
        self.resize_with(len, || value.clone());
    }

    fn clone_with_capacity(items: &[T], capacity: usize) -> Self {
        debug_assert!(capacity >= items.len());
        let buf = RawBuf::with_capacity(capacity);
        // SAFETY: `buf` is fresh with at least `items.len()` uninitialized
        // slots. The guard is declared after `buf`, so on unwind it drops the
        // clones before `buf` frees the storage.
        let mut guard = unsafe { InitGuard::new(buf.as_ptr(), items.len()) };
        for item in items {
            guard.push(item.clone());
        }
        let len = guard.disarm();
        Self { buf, len }
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is live and dropped exactly once; `buf` then
        // frees the storage.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    /// Deep copy with the same capacity as `self`.
    fn clone(&self) -> Self {
        Self::clone_with_capacity(self.as_slice(), self.capacity())
    }

    /// Copy-and-swap: the full copy is built before `self` is touched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap_with(&mut copy);
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state);
    }
}

impl<T, U> PartialEq<DynArray<U>> for DynArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T, U> PartialEq<[U]> for DynArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for DynArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<Vec<U>> for DynArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for DynArray<T> {
    /// Lexicographic comparison of the live elements.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Some(wanted) = self.len.checked_add(lower) {
            if wanted > self.capacity() {
                // Keep repeated small extends amortized.
                let doubled = GrowthPolicy::next_capacity(self.capacity()).unwrap_or(wanted);
                self.reserve(wanted.max(doubled));
            }
        }
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(items: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        for item in items {
            array.push_back(item);
        }
        array
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(items: Vec<T>) -> Self {
        let mut array = Self::with_capacity(items.len());
        array.extend(items);
        array
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
