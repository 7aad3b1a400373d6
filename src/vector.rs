use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use crate::error::VectorError;
use crate::raw_buffer::RawBuffer;

/// Capacity allocated when an empty vector grows implicitly.
const MIN_NON_ZERO_CAPACITY: usize = 1;
/// Factor applied to the capacity on every implicit growth step.
const GROWTH_FACTOR: usize = 2;

/// A growable, heap-allocated array with a layout that does not depend on
/// the standard library.
///
/// `Vector<T>` owns `len()` initialized elements in a buffer of
/// `capacity()` slots. Elements are dropped exactly once: on overwrite,
/// removal, truncation, or when the vector itself is dropped.
///
/// Capacity rules differ slightly from [`Vec`]:
///
/// - implicit growth starts at one slot and doubles;
/// - [`reserve`](Vector::reserve) takes an absolute capacity, not an increment;
/// - [`clear`](Vector::clear) releases the buffer;
/// - [`pop_back`](Vector::pop_back) releases the buffer when it removes the
///   last element, while the `erase*` family keeps it.
pub struct Vector<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Sentinel meaning "no valid position". Equal to [`Vector::max_size`].
    pub const NPOS: usize = if mem::size_of::<T>() == 0 {
        usize::MAX
    } else {
        isize::MAX as usize / mem::size_of::<T>()
    };

    /// Creates an empty vector. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Vector::len).
    #[must_use]
    pub fn size(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Largest number of elements a vector of `T` can describe.
    #[must_use]
    pub fn max_size(&self) -> usize {
        Self::NPOS
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized and the pointer is aligned and non-null.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Raw pointer to the first slot. Dangling (but non-null) when nothing is allocated.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Makes sure the capacity is at least `new_capacity`.
    ///
    /// Does nothing when the capacity already suffices. Otherwise the buffer is
    /// reallocated to exactly `new_capacity` slots. The length never changes.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Reallocates the buffer to exactly `len()` slots, releasing it when empty.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() == self.len {
            return;
        }
        if self.len == 0 {
            self.release_buffer();
        } else {
            self.reallocate(self.len);
        }
    }

    /// Drops every element and releases the buffer.
    ///
    /// Unlike [`Vec::clear`], the capacity is zero afterwards.
    pub fn clear(&mut self) {
        self.truncate(0);
        self.release_buffer();
    }

    /// Drops the elements past `new_len`. The capacity is kept.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        // The length is lowered first so a panicking destructor can only leak.
        self.len = new_len;
        // SAFETY: slots [new_len, new_len + tail_len) were initialized and are no
        // longer reachable through `len`.
        unsafe {
            let tail =
                ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(new_len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Grows the buffer for `required` elements using the doubling policy.
    pub(crate) fn grow_for(&mut self, required: usize) {
        let capacity = self.capacity();
        if required <= capacity {
            return;
        }
        let mut new_capacity = capacity.max(MIN_NON_ZERO_CAPACITY);
        while new_capacity < required {
            new_capacity = new_capacity
                .checked_mul(GROWTH_FACTOR)
                .unwrap_or_else(|| capacity_overflow());
        }
        self.reallocate(new_capacity);
    }

    /// Moves the live elements into a fresh buffer of `new_capacity` slots and
    /// frees the old one. Nothing is dropped: the old slots are treated as
    /// uninitialized once their contents have been moved.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        let mut fresh = RawBuffer::with_capacity(new_capacity);
        // SAFETY: both buffers hold at least `len` slots and do not overlap.
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), self.len) };
        log::trace!(
            "vector buffer reallocated: {} -> {} slots ({} live)",
            self.capacity(),
            new_capacity,
            self.len
        );
        let _old = mem::replace(&mut self.buf, fresh);
    }

    fn release_buffer(&mut self) {
        debug_assert_eq!(self.len, 0);
        if self.capacity() != 0 {
            log::trace!("vector buffer released: {} slots", self.capacity());
        }
        self.buf = RawBuffer::new();
    }

    /// Appends `value`, growing the buffer if it is full.
    pub fn push_back(&mut self, value: T) {
        self.grow_for(self.len + 1);
        // SAFETY: slot `len` is within capacity and uninitialized.
        unsafe { ptr::write(self.buf.as_mut_ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Appends `value` and returns a reference to it in place.
    pub fn emplace_back(&mut self, value: T) -> &mut T {
        self.push_back(value);
        let last = self.len - 1;
        &mut self.as_mut_slice()[last]
    }

    /// Removes the last element.
    ///
    /// Returns `None` on an empty vector. Removing the final element also
    /// releases the buffer, leaving `capacity() == 0`.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was initialized and is no longer counted as live.
        let value = unsafe { ptr::read(self.buf.as_ptr().add(self.len)) };
        if self.len == 0 {
            self.release_buffer();
        }
        Some(value)
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        self.as_slice()
            .get(index)
            .ok_or(VectorError::out_of_range(index, self.len))
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        let length = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VectorError::out_of_range(index, length))
    }

    /// First element.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if the vector is empty.
    pub fn front(&self) -> Result<&T, VectorError> {
        self.at(0)
    }

    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if the vector is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, VectorError> {
        self.at_mut(0)
    }

    /// Last element.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if the vector is empty.
    pub fn back(&self) -> Result<&T, VectorError> {
        match self.len.checked_sub(1) {
            Some(last) => self.at(last),
            None => Err(VectorError::out_of_range(0, 0)),
        }
    }

    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if the vector is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, VectorError> {
        match self.len.checked_sub(1) {
            Some(last) => self.at_mut(last),
            None => Err(VectorError::out_of_range(0, 0)),
        }
    }

    /// Alias of [`front`](Vector::front).
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if the vector is empty.
    pub fn first(&self) -> Result<&T, VectorError> {
        self.front()
    }

    /// Alias of [`back`](Vector::back).
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if the vector is empty.
    pub fn last(&self) -> Result<&T, VectorError> {
        self.back()
    }

    /// Replaces the contents with the items of `iter`.
    ///
    /// The existing buffer is reused when it is large enough.
    pub fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.truncate(0);
        self.extend(iter);
    }

    /// Resizes to `new_len`, constructing new elements with `T::default()`.
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        self.grow_for(new_len);
        while self.len < new_len {
            self.push_back(T::default());
        }
    }

    /// Exchanges the contents (and buffers) of two vectors.
    pub fn swap_with(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }

    /// Index of the first element equal to `value` at or after `from`.
    ///
    /// `None` plays the role of the `npos` sentinel.
    #[must_use]
    pub fn index_of(&self, value: &T, from: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice()
            .get(from..)?
            .iter()
            .position(|item| item == value)
            .map(|offset| from + offset)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value, 0).is_some()
    }

    /// Hands the buffer over without dropping anything.
    pub(crate) fn into_raw_parts(self) -> (RawBuffer<T>, usize) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never used again and its destructor never runs.
        let buf = unsafe { ptr::read(&this.buf) };
        (buf, this.len)
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a vector holding `n` clones of `value`.
    #[must_use]
    pub fn from_elem(n: usize, value: T) -> Self {
        let mut vector = Self::new();
        vector.resize(n, value);
        vector
    }

    /// Replaces the contents with `n` clones of `value`.
    pub fn assign_n(&mut self, n: usize, value: T) {
        self.truncate(0);
        self.resize(n, value);
    }

    /// Replaces the contents with clones of `items`.
    pub fn assign_slice(&mut self, items: &[T]) {
        self.assign(items.iter().cloned());
    }

    /// Resizes to `new_len`, cloning `value` into new slots.
    ///
    /// Shrinking drops trailing elements and never reduces the capacity.
    pub fn resize(&mut self, new_len: usize, value: T) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        self.grow_for(new_len);
        while self.len + 1 < new_len {
            self.push_back(value.clone());
        }
        self.push_back(value);
    }
}

pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: slots [0, len) are initialized; the buffer frees itself afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.reserve(self.len);
        for item in self.iter() {
            copy.push_back(item.clone());
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_slice(source.as_slice());
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.grow_for(self.len.saturating_add(lower));
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Self::new();
        vector.extend(iter);
        vector
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(items: &[T]) -> Self {
        let mut vector = Self::new();
        vector.reserve(items.len());
        vector.extend(items.iter().cloned());
        vector
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        let mut vector = Self::new();
        vector.reserve(N);
        vector.extend(items);
        vector
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vector<U>> for Vector<T> {
    fn eq(&self, other: &Vector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Vector<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for Vector<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Vector<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements as `[a, b, c]`.
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}
