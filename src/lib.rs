#![cfg_attr(not(test), no_std)]

//! `abivec`: a growable array, cursors and a pair type whose layout and
//! behavior do not depend on the standard library's containers.
//!
//! Values of these types can cross shared-library boundaries where the
//! layout of `Vec<T>` or `(K, V)` cannot be relied on. They convert to and
//! from the standard types wherever the caller needs them.
//!
//! This crate is `no_std` compatible; it only needs `alloc`.
//!
//! # Capacity Rules
//!
//! - Implicit growth starts at one slot and doubles: pushing onto an empty
//!   vector gives capacities `1, 2, 4, 4, 8, ...`.
//! - `reserve(n)` takes an absolute capacity and allocates exactly `n` slots.
//! - `clear()` releases the buffer; so does the `pop_back()` that removes the
//!   last element. The `erase*` family keeps the buffer.
//!
//! ```
//! # use abivec::Vector;
//! let mut v: Vector<u32> = Vector::new();
//! v.push_back(30);
//! v.push_back(10);
//! v.push_back(20);
//! assert_eq!((v.len(), v.capacity()), (3, 4));
//!
//! v.clear();
//! assert_eq!((v.len(), v.capacity()), (0, 0));
//! ```
//!
//! # Bounds Checking
//!
//! Accessors that can fail return [`VectorError::OutOfRange`]. Slice indexing
//! (`v[i]`) is available through `Deref<Target = [T]>` and panics instead.
//!
//! ```
//! # use abivec::{Vector, VectorError};
//! let v = Vector::from(["a", "b"]);
//! assert_eq!(v.at(1), Ok(&"b"));
//! assert_eq!(v.at(2), Err(VectorError::OutOfRange { index: 2, length: 2 }));
//! assert_eq!(v[0], "a");
//! ```
//!
//! # Cursors
//!
//! Cursors are positions into a borrowed vector, in forward or reverse
//! direction, read-only or mutable. Mutating operations take indices and hand
//! back a [`CursorMut`] at the affected position.
//!
//! ```
//! # use abivec::Vector;
//! let mut v = Vector::from([1, 2, 3, 4, 5, 6]);
//!
//! let last = v.end() - 1;
//! assert_eq!(last.get(), Some(&6));
//! assert_eq!(v.rbegin(), last);
//! assert_eq!(v.rbegin().base().get(), Some(&6));
//!
//! let first = (v.begin() + 1).index();
//! let last = (v.begin() + 5).index();
//! let after = v.erase_range(first, last).unwrap();
//! assert_eq!(after.get(), Some(&6));
//! assert_eq!(v, [1, 6]);
//! ```
//!
//! # Pairs and Maps
//!
//! ```
//! # use abivec::{Pair, Vector};
//! # use std::collections::BTreeMap;
//! let map = BTreeMap::from([(2, "b"), (1, "a")]);
//! let pairs = Vector::from_std_map(&map);
//! assert_eq!(pairs, [Pair::new(1, "a"), Pair::new(2, "b")]);
//! assert_eq!(pairs.to_std_map(), map);
//! ```

extern crate alloc;

mod cursor;
mod error;
mod interop;
mod iter;
mod pair;
mod raw_buffer;
mod splice;
mod vector;

// Re-export public types and traits
pub use cursor::{Cursor, CursorMut, Direction, Forward, RevCursor, RevCursorMut, Reverse};
pub use error::VectorError;
pub use iter::IntoIter;
pub use pair::Pair;
pub use vector::Vector;
