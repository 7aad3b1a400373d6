//! Conversions between `Vector`/`Pair` and the standard collections.
//!
//! Every conversion copies or moves the elements into independent storage;
//! mutating one side afterwards never affects the other.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::pair::Pair;
use crate::vector::Vector;

impl<T: Clone> Vector<T> {
    /// Copies the elements, in order, into a `Vec`.
    #[must_use]
    pub fn to_std_vector(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Copies the elements of a standard vector (or any slice).
    #[must_use]
    pub fn from_std_vector(items: &[T]) -> Self {
        Self::from(items)
    }
}

impl<T> Vector<T> {
    /// Moves the elements into a `Vec` sized to fit them.
    #[must_use]
    pub fn into_std_vector(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self);
        out
    }
}

impl<K, V> Vector<Pair<K, V>> {
    /// Moves the pairs into a map keyed by `first`.
    ///
    /// When keys repeat, the pair closest to the end wins.
    #[must_use]
    pub fn into_std_map(self) -> BTreeMap<K, V>
    where
        K: Ord,
    {
        self.into_iter().map(Pair::into_std_pair).collect()
    }

    /// Copies the pairs into a map keyed by `first`.
    #[must_use]
    pub fn to_std_map(&self) -> BTreeMap<K, V>
    where
        K: Ord + Clone,
        V: Clone,
    {
        self.iter().map(Pair::to_std_pair).collect()
    }

    /// Copies a map into a vector of pairs in ascending key order.
    #[must_use]
    pub fn from_std_map(map: &BTreeMap<K, V>) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut vector = Self::new();
        vector.reserve(map.len());
        vector.extend(map.iter().map(|(k, v)| Pair::new(k.clone(), v.clone())));
        vector
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(items: Vec<T>) -> Self {
        let mut vector = Self::new();
        vector.reserve(items.len());
        vector.extend(items);
        vector
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(vector: Vector<T>) -> Self {
        vector.into_std_vector()
    }
}

impl<K, V> From<BTreeMap<K, V>> for Vector<Pair<K, V>> {
    fn from(map: BTreeMap<K, V>) -> Self {
        let mut vector = Self::new();
        vector.reserve(map.len());
        vector.extend(map.into_iter().map(Pair::from_std_pair));
        vector
    }
}

impl<K: Ord, V> From<Vector<Pair<K, V>>> for BTreeMap<K, V> {
    fn from(vector: Vector<Pair<K, V>>) -> Self {
        vector.into_std_map()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vector<U>> for Vec<T> {
    fn eq(&self, other: &Vector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
