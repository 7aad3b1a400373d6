use core::fmt;
use core::iter::{FusedIterator, Rev};
use core::ptr;
use core::slice;

use crate::raw_buffer::RawBuffer;
use crate::vector::Vector;

impl<T> Vector<T> {
    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns an iterator from the last element to the first.
    pub fn iter_rev(&self) -> Rev<slice::Iter<'_, T>> {
        self.iter().rev()
    }
}

/// Owning iterator returned by `Vector::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration. Elements that are never yielded are dropped with the iterator.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// Elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [front, back) are still initialized and owned here.
        unsafe {
            slice::from_raw_parts(self.buf.as_ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            // SAFETY: the slot is initialized and `front` moves past it, so it is read once.
            let item = unsafe { ptr::read(self.buf.as_ptr().add(self.front)) };
            self.front += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: as in `next`, from the other end.
            Some(unsafe { ptr::read(self.buf.as_ptr().add(self.back)) })
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(
            // SAFETY: `front` is within the allocation.
            unsafe { self.buf.as_mut_ptr().add(self.front) },
            self.back - self.front,
        );
        self.front = self.back;
        // SAFETY: the remaining slots were never yielded and are dropped once here.
        unsafe { ptr::drop_in_place(remaining) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, len) = self.into_raw_parts();
        IntoIter {
            buf,
            front: 0,
            back: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
