use core::fmt;

/// A two-field value type with a layout independent of the standard tuple.
///
/// Equality, ordering and hashing are member-wise, `first` before `second`.
/// Converts losslessly to and from `(K, V)` and compares directly against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct Pair<K, V> {
    pub first: K,
    pub second: V,
}

impl<K, V> Pair<K, V> {
    #[must_use]
    pub const fn new(first: K, second: V) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub fn from_std_pair(pair: (K, V)) -> Self {
        let (first, second) = pair;
        Self { first, second }
    }

    #[must_use]
    pub fn into_std_pair(self) -> (K, V) {
        (self.first, self.second)
    }

    #[must_use]
    pub fn to_std_pair(&self) -> (K, V)
    where
        K: Clone,
        V: Clone,
    {
        (self.first.clone(), self.second.clone())
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from(pair: (K, V)) -> Self {
        Self::from_std_pair(pair)
    }
}

impl<K, V> From<Pair<K, V>> for (K, V) {
    fn from(pair: Pair<K, V>) -> Self {
        pair.into_std_pair()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq<(K, V)> for Pair<K, V> {
    fn eq(&self, other: &(K, V)) -> bool {
        self.first == other.0 && self.second == other.1
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq<Pair<K, V>> for (K, V) {
    fn eq(&self, other: &Pair<K, V>) -> bool {
        other == self
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Pair<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[test]
    fn test_member_wise_ordering() {
        assert!(Pair::new(1, "b") < Pair::new(2, "a"));
        assert!(Pair::new(1, "a") < Pair::new(1, "b"));
    }

    #[test]
    fn test_compares_against_tuple() {
        let pair = Pair::new(3u32, String::from("c"));
        assert_eq!(pair, (3u32, String::from("c")));
        assert_eq!((3u32, String::from("c")), pair);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pair::new(1, "a").to_string(), "(1, a)");
    }
}
