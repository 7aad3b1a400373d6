//! Position handles into a [`Vector`].
//!
//! A cursor is a vector borrow plus a position. The position counts slots
//! the way a forward iterator does, so `0` is `begin()` and `len()` is
//! `end()`. A reverse cursor at position `p` addresses slot `p - 1`, thus
//! `rbegin()` has position `len()` and `rend()` has position `0`.
//!
//! Conversions between directions keep the addressed slot:
//! [`base`](Cursor::base) of a reverse cursor is the forward cursor on the
//! same element, and the two compare equal. The past-the-end positions
//! `end()` and `rend()` convert into each other.
//!
//! Because cursors borrow their vector, a cursor can never outlive a
//! mutation that would invalidate it.

use core::cmp::Ordering;
use core::fmt;
use core::iter::Rev;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;
use core::slice;

use crate::error::VectorError;
use crate::vector::Vector;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Forward {}
    impl Sealed for super::Reverse {}
}

/// Traversal direction of a cursor.
pub trait Direction: sealed::Sealed {
    /// True for reverse cursors.
    const REVERSED: bool;
}

/// Marker for cursors moving from `begin()` towards `end()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forward;

/// Marker for cursors moving from `rbegin()` towards `rend()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reverse;

impl Direction for Forward {
    const REVERSED: bool = false;
}

impl Direction for Reverse {
    const REVERSED: bool = true;
}

/// Read-only reverse cursor.
pub type RevCursor<'a, T> = Cursor<'a, T, Reverse>;
/// Mutable reverse cursor.
pub type RevCursorMut<'a, T> = CursorMut<'a, T, Reverse>;

/// Slot addressed by a cursor at `pos`, if any.
fn slot<D: Direction>(pos: usize) -> Option<usize> {
    if D::REVERSED {
        pos.checked_sub(1)
    } else {
        Some(pos)
    }
}

/// Addressed slot, `None` at `end()`/`rend()`.
fn addressed<D: Direction>(pos: usize, len: usize) -> Option<usize> {
    if D::REVERSED {
        pos.checked_sub(1)
    } else if pos < len {
        Some(pos)
    } else {
        None
    }
}

/// Position of the reverse cursor on the slot a forward cursor at `pos`
/// addresses; `end()` maps to `rend()`.
fn forward_to_reverse(pos: usize, len: usize) -> usize {
    if pos < len {
        pos + 1
    } else {
        0
    }
}

/// Inverse of [`forward_to_reverse`]; `rend()` maps to `end()`.
fn reverse_to_forward(pos: usize, len: usize) -> usize {
    pos.checked_sub(1).unwrap_or(len)
}

/// Position `delta` logical steps away from `pos`.
///
/// # Panics
///
/// Panics if the result leaves `[0, len]`.
fn step<D: Direction>(pos: usize, delta: isize, len: usize) -> usize {
    let directed = if D::REVERSED {
        delta.checked_neg()
    } else {
        Some(delta)
    };
    match directed.and_then(|delta| pos.checked_add_signed(delta)) {
        Some(moved) if moved <= len => moved,
        _ => panic!("cursor moved out of range: position {pos} by {delta} in length {len}"),
    }
}

/// Logical rank used for ordering; `begin`/`rbegin` rank first.
fn rank<D: Direction>(pos: usize, len: usize) -> usize {
    if D::REVERSED {
        len - pos
    } else {
        pos
    }
}

/// Read-only cursor into a [`Vector`].
///
/// `Cursor<'a, T>` is the const forward cursor, [`RevCursor<'a, T>`] the const
/// reverse one. Both are `Copy`.
pub struct Cursor<'a, T, D: Direction = Forward> {
    vector: &'a Vector<T>,
    pos: usize,
    direction: PhantomData<D>,
}

impl<'a, T, D: Direction> Cursor<'a, T, D> {
    pub(crate) fn new(vector: &'a Vector<T>, pos: usize) -> Self {
        debug_assert!(pos <= vector.len());
        Self {
            vector,
            pos,
            direction: PhantomData,
        }
    }

    /// Index of the addressed slot.
    ///
    /// A forward `end()` gives `len()`; a reverse `rend()` gives
    /// [`Vector::NPOS`].
    #[must_use]
    pub fn index(&self) -> usize {
        slot::<D>(self.pos).unwrap_or(Vector::<T>::NPOS)
    }

    /// True at `end()` (forward) or `rend()` (reverse).
    #[must_use]
    pub fn is_end(&self) -> bool {
        if D::REVERSED {
            self.pos == 0
        } else {
            self.pos == self.vector.len()
        }
    }

    /// The addressed element, or `None` at the past-the-end position.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.vector.as_slice().get(slot::<D>(self.pos)?)
    }

    /// The element one logical step ahead, without moving.
    #[must_use]
    pub fn next_item(&self) -> Option<&'a T> {
        let ahead = if D::REVERSED {
            self.pos.checked_sub(2)?
        } else {
            self.pos.checked_add(1)?
        };
        self.vector.as_slice().get(ahead)
    }

    /// The element one logical step back, without moving.
    #[must_use]
    pub fn prev_item(&self) -> Option<&'a T> {
        let behind = if D::REVERSED {
            self.pos
        } else {
            self.pos.checked_sub(1)?
        };
        self.vector.as_slice().get(behind)
    }

    /// Moves `n` steps forward in this cursor's direction.
    ///
    /// # Panics
    ///
    /// Panics if the cursor would pass the end.
    pub fn advance(&mut self, n: usize) {
        self.pos = step::<D>(self.pos, to_delta(n), self.vector.len());
    }

    /// Moves `n` steps back in this cursor's direction.
    ///
    /// # Panics
    ///
    /// Panics if the cursor would pass the beginning.
    pub fn retreat(&mut self, n: usize) {
        self.pos = step::<D>(self.pos, -to_delta(n), self.vector.len());
    }

    /// Cursor `delta` steps away; negative values move back.
    ///
    /// # Panics
    ///
    /// Panics if the result is outside the vector.
    #[must_use]
    pub fn offset(self, delta: isize) -> Self {
        Self::new(self.vector, step::<D>(self.pos, delta, self.vector.len()))
    }

    /// Cursor one step ahead.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn next(self) -> Self {
        self.offset(1)
    }

    /// Cursor one step back.
    #[must_use]
    pub fn prev(self) -> Self {
        self.offset(-1)
    }

    fn same_vector(&self, other: &Vector<T>) -> bool {
        ptr::eq(self.vector, other)
    }
}

impl<'a, T> Cursor<'a, T, Forward> {
    /// Reverse cursor on the same element; `end()` becomes `rend()`.
    #[must_use]
    pub fn as_reverse(self) -> RevCursor<'a, T> {
        Cursor::new(self.vector, forward_to_reverse(self.pos, self.vector.len()))
    }

    /// Elements from this cursor to the end.
    #[must_use]
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.vector.as_slice()[self.pos..].iter()
    }

    /// Elements in `[self, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `end` belongs to another vector or comes before `self`.
    #[must_use]
    pub fn iter_until(&self, end: &Self) -> slice::Iter<'a, T> {
        assert!(self.same_vector(end.vector), "cursors belong to different vectors");
        self.vector.as_slice()[self.pos..end.pos].iter()
    }
}

impl<'a, T> Cursor<'a, T, Reverse> {
    /// Forward cursor on the same element; `rend()` becomes `end()`.
    #[must_use]
    pub fn base(self) -> Cursor<'a, T, Forward> {
        Cursor::new(self.vector, reverse_to_forward(self.pos, self.vector.len()))
    }

    /// Elements from this cursor down to the first one.
    #[must_use]
    pub fn iter(&self) -> Rev<slice::Iter<'a, T>> {
        self.vector.as_slice()[..self.pos].iter().rev()
    }

    /// Elements in `[self, end)`, walking backwards.
    ///
    /// # Panics
    ///
    /// Panics if `end` belongs to another vector or comes before `self`.
    #[must_use]
    pub fn iter_until(&self, end: &Self) -> Rev<slice::Iter<'a, T>> {
        assert!(self.same_vector(end.vector), "cursors belong to different vectors");
        self.vector.as_slice()[end.pos..self.pos].iter().rev()
    }
}

fn to_delta(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

impl<T, D: Direction> Clone for Cursor<'_, T, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, D: Direction> Copy for Cursor<'_, T, D> {}

impl<T, D: Direction> fmt::Debug for Cursor<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("reversed", &D::REVERSED)
            .field("position", &self.pos)
            .field("len", &self.vector.len())
            .finish()
    }
}

/// Cursors are equal when they address the same slot of the same vector,
/// whatever their direction. A cursor therefore equals its
/// `as_reverse()`/`base()` image, and `end()` equals `rend()`.
impl<'b, T, D: Direction, E: Direction> PartialEq<Cursor<'b, T, E>> for Cursor<'_, T, D> {
    fn eq(&self, other: &Cursor<'b, T, E>) -> bool {
        let len = self.vector.len();
        self.same_vector(other.vector)
            && addressed::<D>(self.pos, len) == addressed::<E>(other.pos, len)
    }
}

impl<T, D: Direction> Eq for Cursor<'_, T, D> {}

/// Logical order within one direction; `None` across vectors.
impl<'b, T, D: Direction> PartialOrd<Cursor<'b, T, D>> for Cursor<'_, T, D> {
    fn partial_cmp(&self, other: &Cursor<'b, T, D>) -> Option<Ordering> {
        if !self.same_vector(other.vector) {
            return None;
        }
        let len = self.vector.len();
        Some(rank::<D>(self.pos, len).cmp(&rank::<D>(other.pos, len)))
    }
}

impl<T, D: Direction> Add<usize> for Cursor<'_, T, D> {
    type Output = Self;

    fn add(self, n: usize) -> Self {
        self.offset(to_delta(n))
    }
}

impl<T, D: Direction> Sub<usize> for Cursor<'_, T, D> {
    type Output = Self;

    fn sub(self, n: usize) -> Self {
        self.offset(-to_delta(n))
    }
}

impl<T, D: Direction> AddAssign<usize> for Cursor<'_, T, D> {
    fn add_assign(&mut self, n: usize) {
        self.advance(n);
    }
}

impl<T, D: Direction> SubAssign<usize> for Cursor<'_, T, D> {
    fn sub_assign(&mut self, n: usize) {
        self.retreat(n);
    }
}

/// Logical distance between two cursors of one vector.
impl<'b, T, D: Direction> Sub<Cursor<'b, T, D>> for Cursor<'_, T, D> {
    type Output = isize;

    /// # Panics
    ///
    /// Panics if the cursors belong to different vectors.
    fn sub(self, other: Cursor<'b, T, D>) -> isize {
        assert!(self.same_vector(other.vector), "cursors belong to different vectors");
        let len = self.vector.len();
        to_delta(rank::<D>(self.pos, len)) - to_delta(rank::<D>(other.pos, len))
    }
}

/// Cursor with write access to the addressed element.
///
/// Holds the only borrow of its vector, so at most one exists at a time.
/// [`as_cursor`](CursorMut::as_cursor) and [`into_cursor`](CursorMut::into_cursor)
/// produce read-only cursors; the opposite conversion does not exist.
pub struct CursorMut<'a, T, D: Direction = Forward> {
    vector: &'a mut Vector<T>,
    pos: usize,
    direction: PhantomData<D>,
}

impl<'a, T, D: Direction> CursorMut<'a, T, D> {
    pub(crate) fn new(vector: &'a mut Vector<T>, pos: usize) -> Self {
        debug_assert!(pos <= vector.len());
        Self {
            vector,
            pos,
            direction: PhantomData,
        }
    }

    /// Read-only view of this cursor.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T, D> {
        Cursor::new(&*self.vector, self.pos)
    }

    /// Gives up write access, keeping the full borrow.
    #[must_use]
    pub fn into_cursor(self) -> Cursor<'a, T, D> {
        Cursor::new(self.vector, self.pos)
    }

    /// See [`Cursor::index`].
    #[must_use]
    pub fn index(&self) -> usize {
        slot::<D>(self.pos).unwrap_or(Vector::<T>::NPOS)
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.as_cursor().is_end()
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.vector.as_slice().get(slot::<D>(self.pos)?)
    }

    /// Mutable access to the addressed element, `None` at the past-the-end position.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let slot = slot::<D>(self.pos)?;
        self.vector.as_mut_slice().get_mut(slot)
    }

    /// Overwrites the addressed element and returns the old one.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` at the past-the-end position.
    pub fn set(&mut self, value: T) -> Result<T, VectorError> {
        let length = self.vector.len();
        let index = self.index();
        match self.get_mut() {
            Some(slot) => Ok(core::mem::replace(slot, value)),
            None => Err(VectorError::out_of_range(index, length)),
        }
    }

    #[must_use]
    pub fn next_item(&self) -> Option<&T> {
        self.as_cursor().next_item()
    }

    #[must_use]
    pub fn prev_item(&self) -> Option<&T> {
        self.as_cursor().prev_item()
    }

    /// # Panics
    ///
    /// Panics if the cursor would pass the end.
    pub fn advance(&mut self, n: usize) {
        self.pos = step::<D>(self.pos, to_delta(n), self.vector.len());
    }

    /// # Panics
    ///
    /// Panics if the cursor would pass the beginning.
    pub fn retreat(&mut self, n: usize) {
        self.pos = step::<D>(self.pos, -to_delta(n), self.vector.len());
    }

    /// # Panics
    ///
    /// Panics if the result is outside the vector.
    #[must_use]
    pub fn offset(mut self, delta: isize) -> Self {
        self.pos = step::<D>(self.pos, delta, self.vector.len());
        self
    }

    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn next(self) -> Self {
        self.offset(1)
    }

    #[must_use]
    pub fn prev(self) -> Self {
        self.offset(-1)
    }
}

impl<'a, T> CursorMut<'a, T, Forward> {
    /// See [`Cursor::as_reverse`].
    #[must_use]
    pub fn as_reverse(self) -> RevCursorMut<'a, T> {
        let pos = forward_to_reverse(self.pos, self.vector.len());
        CursorMut::new(self.vector, pos)
    }
}

impl<'a, T> CursorMut<'a, T, Reverse> {
    /// See [`Cursor::base`].
    #[must_use]
    pub fn base(self) -> CursorMut<'a, T, Forward> {
        let pos = reverse_to_forward(self.pos, self.vector.len());
        CursorMut::new(self.vector, pos)
    }
}

impl<'a, T, D: Direction> From<CursorMut<'a, T, D>> for Cursor<'a, T, D> {
    fn from(cursor: CursorMut<'a, T, D>) -> Self {
        cursor.into_cursor()
    }
}

impl<T, D: Direction> fmt::Debug for CursorMut<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("reversed", &D::REVERSED)
            .field("position", &self.pos)
            .field("len", &self.vector.len())
            .finish()
    }
}

impl<T, D: Direction> Add<usize> for CursorMut<'_, T, D> {
    type Output = Self;

    fn add(self, n: usize) -> Self {
        self.offset(to_delta(n))
    }
}

impl<T, D: Direction> Sub<usize> for CursorMut<'_, T, D> {
    type Output = Self;

    fn sub(self, n: usize) -> Self {
        self.offset(-to_delta(n))
    }
}

impl<T, D: Direction> AddAssign<usize> for CursorMut<'_, T, D> {
    fn add_assign(&mut self, n: usize) {
        self.advance(n);
    }
}

impl<T, D: Direction> SubAssign<usize> for CursorMut<'_, T, D> {
    fn sub_assign(&mut self, n: usize) {
        self.retreat(n);
    }
}

impl<T> Vector<T> {
    /// Cursor at the first element.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Cursor one past the last element.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len())
    }

    /// Reverse cursor at the last element.
    #[must_use]
    pub fn rbegin(&self) -> RevCursor<'_, T> {
        Cursor::new(self, self.len())
    }

    /// Reverse cursor one before the first element.
    #[must_use]
    pub fn rend(&self) -> RevCursor<'_, T> {
        Cursor::new(self, 0)
    }

    #[must_use]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    #[must_use]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len();
        CursorMut::new(self, len)
    }

    #[must_use]
    pub fn rbegin_mut(&mut self) -> RevCursorMut<'_, T> {
        let len = self.len();
        CursorMut::new(self, len)
    }

    #[must_use]
    pub fn rend_mut(&mut self) -> RevCursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Forward cursor at `index`; `index == len()` gives `end()`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index > len()`.
    pub fn cursor_from_index(&self, index: usize) -> Result<Cursor<'_, T>, VectorError> {
        if index > self.len() {
            return Err(VectorError::out_of_range(index, self.len()));
        }
        Ok(Cursor::new(self, index))
    }

    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index > len()`.
    pub fn cursor_from_index_mut(
        &mut self,
        index: usize,
    ) -> Result<CursorMut<'_, T>, VectorError> {
        if index > self.len() {
            return Err(VectorError::out_of_range(index, self.len()));
        }
        Ok(CursorMut::new(self, index))
    }

    /// Reverse cursor addressing the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index >= len()`.
    pub fn rev_cursor_from_index(&self, index: usize) -> Result<RevCursor<'_, T>, VectorError> {
        if index >= self.len() {
            return Err(VectorError::out_of_range(index, self.len()));
        }
        Ok(Cursor::new(self, index + 1))
    }

    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index >= len()`.
    pub fn rev_cursor_from_index_mut(
        &mut self,
        index: usize,
    ) -> Result<RevCursorMut<'_, T>, VectorError> {
        if index >= self.len() {
            return Err(VectorError::out_of_range(index, self.len()));
        }
        Ok(CursorMut::new(self, index + 1))
    }

    /// Slot index of `cursor`, as [`Cursor::index`].
    #[must_use]
    pub fn index_from_cursor<D: Direction>(&self, cursor: &Cursor<'_, T, D>) -> usize {
        debug_assert!(cursor.same_vector(self), "cursor belongs to another vector");
        cursor.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_mapping() {
        assert_eq!(slot::<Forward>(0), Some(0));
        assert_eq!(slot::<Reverse>(0), None);
        assert_eq!(slot::<Reverse>(3), Some(2));
    }

    #[test]
    fn test_step_is_mirrored_for_reverse() {
        assert_eq!(step::<Forward>(1, 2, 5), 3);
        assert_eq!(step::<Reverse>(3, 2, 5), 1);
        assert_eq!(step::<Reverse>(1, -4, 5), 5);
    }

    #[test]
    #[should_panic(expected = "cursor moved out of range")]
    fn test_step_past_end_panics() {
        let _ = step::<Forward>(4, 2, 5);
    }

    #[test]
    #[should_panic(expected = "cursor moved out of range")]
    fn test_reverse_step_by_min_offset_panics() {
        let _ = step::<Reverse>(2, isize::MIN, 5);
    }

    #[test]
    fn test_direction_conversions_keep_the_slot() {
        for pos in 0..=4 {
            let reversed = forward_to_reverse(pos, 4);
            assert_eq!(reverse_to_forward(reversed, 4), pos);
            assert_eq!(addressed::<Reverse>(reversed, 4), addressed::<Forward>(pos, 4));
        }
        assert_eq!(forward_to_reverse(4, 4), 0);
        assert_eq!(reverse_to_forward(0, 4), 4);
    }

    #[test]
    fn test_rank_orders_reverse_from_rbegin() {
        assert!(rank::<Reverse>(5, 5) < rank::<Reverse>(0, 5));
        assert!(rank::<Forward>(0, 5) < rank::<Forward>(5, 5));
    }

    #[test]
    fn test_cursors_of_different_vectors_are_unordered() {
        let a = Vector::from([1, 2, 3]);
        let b = Vector::from([1, 2, 3]);
        assert_ne!(a.begin(), b.begin());
        assert_eq!(a.begin().partial_cmp(&b.begin()), None);
    }
}
