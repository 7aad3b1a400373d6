//! Operations that open or close gaps inside a [`Vector`].
//!
//! Positions are plain indices because a cursor borrows its vector and cannot
//! be held across a mutation. Use [`Cursor::index`](crate::Cursor::index) to
//! turn a cursor into a position first. Every operation returns a
//! [`CursorMut`] so the caller can keep working at the affected spot.

use core::ptr;

use crate::cursor::CursorMut;
use crate::error::VectorError;
use crate::vector::Vector;

impl<T> Vector<T> {
    fn check_position(&self, index: usize) -> Result<(), VectorError> {
        if index > self.len {
            return Err(VectorError::out_of_range(index, self.len));
        }
        Ok(())
    }

    fn check_range(&self, first: usize, last: usize) -> Result<(), VectorError> {
        if last > self.len {
            return Err(VectorError::out_of_range(last, self.len));
        }
        if first > last {
            return Err(VectorError::out_of_range(first, self.len));
        }
        Ok(())
    }

    /// Moves every element of `source` into the gap opened at `index`.
    ///
    /// The caller has validated `index`. No user code runs between opening
    /// the gap and filling it, so a panic can never expose uninitialized slots.
    fn splice_in(&mut self, index: usize, source: Vector<T>) {
        let count = source.len();
        if count == 0 {
            return;
        }
        self.grow_for(self.len + count);

        let (src, src_len) = source.into_raw_parts();
        // SAFETY: capacity covers len + count; the tail moves up by `count`
        // (regions may overlap, hence `copy`), then the gap is filled from the
        // source buffer, which is released afterwards without dropping.
        unsafe {
            let base = self.buf.as_mut_ptr();
            ptr::copy(base.add(index), base.add(index + count), self.len - index);
            ptr::copy_nonoverlapping(src.as_ptr(), base.add(index), src_len);
        }
        self.len += count;
    }

    /// Inserts `value` before `index`. Inserting at `len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<CursorMut<'_, T>, VectorError> {
        self.check_position(index)?;
        self.grow_for(self.len + 1);
        // SAFETY: capacity covers len + 1; the tail shifts up by one slot and
        // the vacated slot is written before anything can observe it.
        unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, value);
        }
        self.len += 1;
        Ok(CursorMut::new(self, index))
    }

    /// Inserts every item of `iter` before `index`, keeping their order.
    ///
    /// Accepts anything iterable: a range, an array, or another vector.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index > len()`. The iterator is
    /// not consumed in that case.
    pub fn insert_iter<I>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<CursorMut<'_, T>, VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_position(index)?;
        let source: Vector<T> = iter.into_iter().collect();
        self.splice_in(index, source);
        Ok(CursorMut::new(self, index))
    }

    /// Removes the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> Result<CursorMut<'_, T>, VectorError> {
        if index >= self.len {
            return Err(VectorError::out_of_range(index, self.len));
        }
        self.erase_range(index, index + 1)
    }

    /// Removes `count` elements starting at `index`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `[index, index + count)` is not
    /// inside the vector.
    pub fn erase_count(
        &mut self,
        index: usize,
        count: usize,
    ) -> Result<CursorMut<'_, T>, VectorError> {
        let last = index
            .checked_add(count)
            .ok_or(VectorError::out_of_range(usize::MAX, self.len))?;
        self.erase_range(index, last)
    }

    /// Removes the elements in `[first, last)` and closes the gap.
    ///
    /// The capacity is kept, even when the vector becomes empty.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `first > last` or `last > len()`.
    pub fn erase_range(
        &mut self,
        first: usize,
        last: usize,
    ) -> Result<CursorMut<'_, T>, VectorError> {
        self.check_range(first, last)?;
        let removed = last - first;
        if removed > 0 {
            let tail_len = self.len - last;
            // Everything from `first` on is detached first, so a panicking
            // destructor leaks the tail instead of dropping it twice.
            self.len = first;
            // SAFETY: [first, last) are initialized and detached from `len`;
            // the tail is moved down over the dropped slots afterwards.
            unsafe {
                let base = self.buf.as_mut_ptr();
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(first), removed));
                ptr::copy(base.add(last), base.add(first), tail_len);
            }
            self.len = first + tail_len;
        }
        Ok(CursorMut::new(self, first))
    }

    /// Overwrites elements from `index` on with the items of `iter`, appending
    /// once the source runs past the end.
    ///
    /// Elements before `index` are untouched. The returned cursor points just
    /// past the last written element.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index > len()`.
    pub fn replace<I>(&mut self, index: usize, iter: I) -> Result<CursorMut<'_, T>, VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_position(index)?;
        let mut pos = index;
        for item in iter {
            if pos < self.len {
                self.as_mut_slice()[pos] = item;
            } else {
                self.push_back(item);
            }
            pos += 1;
        }
        Ok(CursorMut::new(self, pos))
    }

    /// Overwrites the window `[first, last)` with the items of `iter`.
    ///
    /// Only as many source items as fit in the window are consumed; a shorter
    /// source leaves the rest of the window as it was. The length never
    /// changes. The returned cursor points just past the last written element.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `first > last` or `last > len()`.
    pub fn replace_range<I>(
        &mut self,
        first: usize,
        last: usize,
        iter: I,
    ) -> Result<CursorMut<'_, T>, VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_range(first, last)?;
        let mut pos = first;
        for (slot, item) in self.as_mut_slice()[first..last].iter_mut().zip(iter) {
            *slot = item;
            pos += 1;
        }
        Ok(CursorMut::new(self, pos))
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index >= len()`.
    pub fn take_item(&mut self, index: usize) -> Result<T, VectorError> {
        if index >= self.len {
            return Err(VectorError::out_of_range(index, self.len));
        }
        // SAFETY: the slot is initialized; after reading it the tail moves down
        // by one, so the read value has exactly one owner.
        unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Removes `count` elements starting at `index` and returns them, in
    /// order, as a new vector with `capacity() == count`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `[index, index + count)` is not
    /// inside the vector.
    pub fn take_items(&mut self, index: usize, count: usize) -> Result<Vector<T>, VectorError> {
        let last = index
            .checked_add(count)
            .ok_or(VectorError::out_of_range(usize::MAX, self.len))?;
        self.check_range(index, last)?;

        let mut taken = Vector::new();
        taken.reserve(count);
        // SAFETY: the range is initialized and moved bitwise into `taken`,
        // which then owns it; the tail closes the gap in `self`.
        unsafe {
            let base = self.buf.as_mut_ptr();
            ptr::copy_nonoverlapping(base.add(index), taken.buf.as_mut_ptr(), count);
            taken.len = count;
            ptr::copy(base.add(last), base.add(index), self.len - last);
        }
        self.len -= count;
        Ok(taken)
    }
}

impl<T: Clone> Vector<T> {
    /// Inserts `n` clones of `value` before `index`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index > len()`.
    pub fn insert_n(
        &mut self,
        index: usize,
        n: usize,
        value: T,
    ) -> Result<CursorMut<'_, T>, VectorError> {
        self.check_position(index)?;
        self.splice_in(index, Vector::from_elem(n, value));
        Ok(CursorMut::new(self, index))
    }

    /// Inserts clones of `items` before `index`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index > len()`.
    pub fn insert_slice(
        &mut self,
        index: usize,
        items: &[T],
    ) -> Result<CursorMut<'_, T>, VectorError> {
        self.insert_iter(index, items.iter().cloned())
    }
}
