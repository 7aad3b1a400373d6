use abivec::{Vector, VectorError};

#[test]
fn test_at_bounds_checking() {
    let v = Vector::from([10, 20, 30]);

    assert_eq!(v.at(0), Ok(&10));
    assert_eq!(v.at(2), Ok(&30));
    assert_eq!(
        v.at(3),
        Err(VectorError::OutOfRange {
            index: 3,
            length: 3
        })
    );
}

#[test]
fn test_at_mut_modifies_in_place() {
    let mut v = Vector::from([1, 2, 3]);

    *v.at_mut(1).unwrap() = 20;
    assert_eq!(v, [1, 20, 3]);
    assert!(v.at_mut(3).is_err());
}

#[test]
fn test_front_and_back() {
    let mut v = Vector::from(['a', 'b', 'c']);

    assert_eq!(v.front(), Ok(&'a'));
    assert_eq!(v.back(), Ok(&'c'));
    assert_eq!(v.first(), Ok(&'a'));
    assert_eq!(v.last(), Ok(&'c'));

    *v.front_mut().unwrap() = 'x';
    *v.back_mut().unwrap() = 'z';
    assert_eq!(v, ['x', 'b', 'z']);
}

#[test]
fn test_front_and_back_on_empty_vector() {
    let mut v: Vector<char> = Vector::new();

    assert!(matches!(v.front(), Err(VectorError::OutOfRange { .. })));
    assert!(matches!(v.back(), Err(VectorError::OutOfRange { .. })));
    assert!(v.first().is_err());
    assert!(v.last().is_err());
    assert!(v.front_mut().is_err());
    assert!(v.back_mut().is_err());
}

#[test]
fn test_slice_indexing() {
    let mut v = Vector::from([1, 2, 3]);

    assert_eq!(v[1], 2);
    v[1] = 5;
    assert_eq!(v[1], 5);
    assert_eq!(&v[1..], &[5, 3]);
}

#[test]
#[should_panic]
fn test_slice_indexing_out_of_bounds_panics() {
    let v = Vector::from([1, 2, 3]);
    let _ = v[3];
}

#[test]
fn test_emplace_back_returns_new_element() {
    let mut v: Vector<String> = Vector::new();

    let slot = v.emplace_back(String::from("hello"));
    slot.push_str(", world");

    assert_eq!(v, ["hello, world"]);
}

#[test]
fn test_resize_with_value() {
    let mut v: Vector<char> = "abcdefghi".chars().collect();
    assert_eq!(v.len(), 9);

    v.resize(20, 'X');

    assert_eq!(v.len(), 20);
    assert_eq!(&v[..9], &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i']);
    assert!(v[9..].iter().all(|&c| c == 'X'));
}

#[test]
fn test_resize_default() {
    let mut v = Vector::from([3u32, 4]);

    v.resize_default(4);
    assert_eq!(v, [3, 4, 0, 0]);

    v.resize_default(1);
    assert_eq!(v, [3]);
}

#[test]
fn test_from_elem() {
    let v = Vector::from_elem(3, String::from("x"));
    assert_eq!(v, ["x", "x", "x"]);
}

#[test]
fn test_index_of_and_contains() {
    let v = Vector::from([5, 7, 5, 9]);

    assert_eq!(v.index_of(&5, 0), Some(0));
    assert_eq!(v.index_of(&5, 1), Some(2));
    assert_eq!(v.index_of(&9, 0), Some(3));
    assert_eq!(v.index_of(&8, 0), None);
    assert_eq!(v.index_of(&5, 3), None);
    assert_eq!(v.index_of(&5, 100), None);

    assert!(v.contains(&7));
    assert!(!v.contains(&1));
}

#[test]
fn test_moved_from_vector_is_empty() {
    let mut source = Vector::from([1, 2, 3]);

    let moved = core::mem::take(&mut source);

    assert_eq!(moved, [1, 2, 3]);
    assert!(source.is_empty());
    assert_eq!(source.capacity(), 0);
    assert!(source.at(0).is_err());
}

#[test]
fn test_swap_with() {
    let mut a = Vector::from([1, 2]);
    let mut b = Vector::from([3]);

    a.swap_with(&mut b);

    assert_eq!(a, [3]);
    assert_eq!(b, [1, 2]);
}

#[test]
fn test_display_renders_elements() {
    let v = Vector::from([1.5, 2.0]);
    assert_eq!(v.to_string(), "[1.5, 2]");

    let words = Vector::from(["a", "b"]);
    assert_eq!(format!("{words}"), "[a, b]");
    assert_eq!(format!("{words:?}"), "[\"a\", \"b\"]");
}

#[test]
fn test_ordering_is_lexicographic() {
    let a = Vector::from([1, 2, 3]);
    let b = Vector::from([1, 3]);
    let c = Vector::from([1, 2]);

    assert!(a < b);
    assert!(c < a);
    assert_eq!(a.cmp(&a.clone()), core::cmp::Ordering::Equal);
}

#[test]
fn test_hash_matches_slice_hash() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let v = Vector::from([1, 2, 3]);
    let mut from_vector = DefaultHasher::new();
    v.hash(&mut from_vector);

    let mut from_slice = DefaultHasher::new();
    [1, 2, 3][..].hash(&mut from_slice);

    assert_eq!(from_vector.finish(), from_slice.finish());
}

#[test]
fn test_as_slice_and_pointer() {
    let mut v = Vector::from([1, 2, 3]);

    assert_eq!(v.as_slice(), &[1, 2, 3]);
    v.as_mut_slice()[0] = 0;
    assert_eq!(v.as_slice(), &[0, 2, 3]);
    assert_eq!(v.as_ptr(), v.as_slice().as_ptr());
}

#[test]
fn test_slice_algorithms_apply() {
    let mut v = Vector::from([4, 1, 3, 2]);

    v.sort_unstable();

    assert_eq!(v, [1, 2, 3, 4]);
    assert_eq!(v.binary_search(&3), Ok(2));
    assert_eq!(v.iter().sum::<i32>(), 10);
}
