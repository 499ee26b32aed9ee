#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::cmp;
use super::fmt::{format_vector, print_vector};
use super::*;
use crate::collections::contiguous::IntBuffer;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let vec = IntVector::new();
    assert_eq!((vec.len(), vec.cap()), (0, 0), "A new IntVector should be empty.");
    assert!(vec.is_empty());

    let vec = IntVector::from_slice(&[7, 8, 9]);
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.cap(), 3, "Copying a slice should allocate exactly its length.");
    // SAFETY: All indices are < 3.
    unsafe {
        assert_eq!(*vec.at(0), 7);
        assert_eq!(*vec.at(1), 8);
        assert_eq!(*vec.at(2), 9);
    }

    let vec = IntVector::zeroed(5);
    assert_eq!((vec.len(), vec.cap()), (5, 5));
    assert_eq!(vec.as_slice(), &[0; 5], "Zeroed elements should all be 0.");

    assert_eq!(IntVector::from([1, 2]), IntVector::from_slice(&[1, 2]));
    assert_eq!(IntVector::from_iter(0..4).as_slice(), &[0, 1, 2, 3]);
}

#[test]
fn test_push_back_growth() {
    let mut vec = IntVector::new();
    let mut caps = Vec::new();

    for i in 0..9 {
        vec.push_back(i * 10);
        caps.push(vec.cap());
    }

    assert_eq!(
        caps,
        [1, 2, 4, 4, 8, 8, 8, 8, 16],
        "Capacity should go 0 -> 1 and double from then on."
    );
    assert_eq!(vec.len(), 9);
    for i in 0..9 {
        // SAFETY: i < 9.
        assert_eq!(unsafe { *vec.at(i) }, i as i32 * 10, "Values should keep push order.");
    }
}

#[test]
fn test_push_back_amortized_copies() {
    let mut vec = IntVector::new();
    let mut copied = 0;
    let n = 10_000;

    for i in 0..n {
        if vec.len() == vec.cap() {
            // A reallocation copies every element currently held.
            copied += vec.len();
        }
        vec.push_back(i);
    }

    assert!(
        copied < 2 * n as usize,
        "Total copies across {n} pushes should be O(n), was {copied}."
    );
}

#[test]
fn test_extend_growth() {
    let mut vec = IntVector::new();
    let mut reallocs = 0;

    for i in 0..1000 {
        let old_cap = vec.cap();
        vec.extend([i]);
        if vec.cap() != old_cap {
            reallocs += 1;
            assert!(
                vec.cap().is_power_of_two(),
                "Single element extends should follow the doubling policy, got cap {}.",
                vec.cap()
            );
        }
    }

    assert_eq!(vec.len(), 1000);
    assert_eq!(vec.cap(), 1024);
    assert_eq!(reallocs, 11, "Capacity should only grow 0 -> 1 -> 2 -> ... -> 1024.");

    let mut vec = IntVector::from_slice(&[1, 2]);
    vec.extend(0..5);
    assert_eq!(vec.cap(), 7, "A large extend should grow straight to the required capacity.");

    vec.extend(&[8]);
    assert_eq!(vec.cap(), 14, "A full IntVector should double when extended.");
    assert_eq!(vec.as_slice(), &[1, 2, 0, 1, 2, 3, 4, 8]);
}

#[test]
fn test_pop_back() {
    let mut vec = IntVector::from_slice(&[1, 2, 3]);

    // SAFETY: vec holds 3 elements.
    unsafe { vec.pop_back(); }
    assert_eq!(vec.as_slice(), &[1, 2]);
    assert_eq!(vec.cap(), 3, "Popping shouldn't change the capacity.");

    assert_eq!(vec.try_pop_back(), Some(2));
    assert_eq!(vec.try_pop_back(), Some(1));
    assert_eq!(vec.try_pop_back(), None);
    assert_eq!(vec.cap(), 3);
}

#[test]
fn test_shrink_to_fit() {
    let mut vec = IntVector::new();
    for i in 0..5 {
        vec.push_back(i);
    }
    assert_eq!(vec.cap(), 8);

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 5, "Capacity should equal length after shrinking.");
    assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4], "Shrinking should keep all elements.");

    vec.clear();
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 0, "Shrinking an empty IntVector should release its buffer.");
    assert_eq!(vec.buf.ptr, std::ptr::NonNull::dangling());

    vec.push_back(3);
    assert_eq!((vec.len(), vec.cap()), (1, 1), "A released IntVector should grow again.");
}

#[test]
fn test_clear() {
    let mut vec = IntVector::from_slice(&[1, 2, 3, 4]);
    vec.push_back(5);
    let cap = vec.cap();

    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), cap, "Clearing shouldn't touch the capacity.");
    assert_eq!(vec.get(0), None);
}

#[test]
fn test_reserve() {
    let mut vec = IntVector::from_slice(&[1, 2]);

    vec.reserve(1);
    assert_eq!(vec.cap(), 3);

    vec.reserve(1);
    assert_eq!(vec.cap(), 3, "Reserving already available capacity should do nothing.");

    assert_eq!(vec.try_reserve(usize::MAX), Err(CapacityOverflow));
    assert_eq!(vec.try_reserve(usize::MAX / 2), Err(CapacityOverflow));
    assert_eq!(vec.as_slice(), &[1, 2], "A failed reserve should leave the IntVector untouched.");

    assert_panics!({
        IntVector::new().reserve(usize::MAX)
    });
}

#[test]
fn test_accessors() {
    let mut vec = IntVector::from_slice(&[3, 4, 5]);

    // SAFETY: vec isn't empty and every index used is < 3.
    unsafe {
        assert_eq!(*vec.front(), 3);
        assert_eq!(*vec.back(), 5);

        *vec.front_mut() = 30;
        *vec.back_mut() = 50;
        *vec.at_mut(1) += 36;
    }
    assert_eq!(vec.as_slice(), &[30, 40, 50]);

    assert_eq!(vec.get(2), Some(&50));
    assert_eq!(vec.get(3), None);
    if let Some(value) = vec.get_mut(0) {
        *value = 1;
    }

    assert_eq!(vec.try_front(), Ok(&1));
    assert_eq!(vec.try_back(), Ok(&50));
    assert_eq!(vec.try_at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(
        vec.try_at_mut(7).unwrap_err().to_string(),
        "Index 7 out of bounds for collection with 3 elements!"
    );

    let empty = IntVector::with_cap(4);
    assert!(empty.try_front().is_err());
    assert!(empty.try_back().is_err());
    assert!(empty.try_at(0).is_err(), "Capacity beyond len shouldn't be accessible.");
}

#[test]
#[cfg(debug_assertions)]
fn test_unchecked_preconditions() {
    assert_panics!({
        let vec = IntVector::from_slice(&[1, 2, 3]);
        // SAFETY: Not safe, debug builds check the index.
        unsafe { vec.at(3); }
    }, "Out of bounds at should panic in debug builds.");

    assert_panics!({
        let vec = IntVector::with_cap(2);
        // SAFETY: Not safe, debug builds check the index.
        unsafe { vec.at(0); }
    }, "Reading capacity beyond len should panic in debug builds.");

    assert_panics!({
        let vec = IntVector::new();
        // SAFETY: Not safe, debug builds check emptiness.
        unsafe { vec.front(); }
    });

    assert_panics!({
        let vec = IntVector::new();
        // SAFETY: Not safe, debug builds check emptiness.
        unsafe { vec.back(); }
    });

    assert_panics!({
        let mut vec = IntVector::new();
        // SAFETY: Not safe, debug builds check emptiness.
        unsafe { vec.pop_back(); }
    }, "Popping an empty IntVector should panic in debug builds.");
}

#[test]
fn test_clone_is_deep() {
    let mut vec = IntVector::with_cap(6);
    vec.extend([1, 2, 3]);

    let mut copy = vec.clone();
    assert_eq!(copy, vec, "A clone should be equal to the original.");
    assert_eq!(copy.cap(), 6, "A clone should keep the capacity of the original.");
    assert_ne!(copy.buf.ptr, vec.buf.ptr, "A clone should own a separate buffer.");

    copy.push_back(4);
    // SAFETY: copy isn't empty.
    unsafe { *copy.front_mut() = 100; }
    assert_eq!(vec.as_slice(), &[1, 2, 3], "Mutating a clone shouldn't affect the original.");

    let moved = copy;
    assert_eq!(moved.as_slice(), &[100, 2, 3, 4]);
}

#[test]
fn test_buffer_conversion() {
    let mut vec = IntVector::with_cap(8);
    vec.extend(&[1, 2, 3]);

    let buf = IntBuffer::from(vec);
    assert_eq!(buf.size(), 3, "Converting to an IntBuffer should drop unused capacity.");

    let vec = IntVector::from(buf);
    assert_eq!((vec.len(), vec.cap()), (3, 3));
}

#[test]
fn test_equality_and_hash() {
    let a = IntVector::from([1, 2, 3]);
    let b = IntVector::from([1, 2, 3]);
    let c: IntVector = (1..=3).collect();

    assert!(cmp::eq(&a, &a), "Equality should be reflexive.");
    assert!(cmp::eq(&a, &b) && cmp::eq(&b, &a), "Equality should be symmetric.");
    assert!(cmp::eq(&b, &c) && cmp::eq(&a, &c), "Equality should be transitive.");

    assert!(cmp::ne(&a, &IntVector::from([1, 2])), "Different lengths should be unequal.");
    assert!(cmp::ne(&a, &IntVector::from([1, 2, 4])));

    let mut spare = IntVector::with_cap(10);
    spare.extend([1, 2, 3]);
    assert_eq!(spare, a, "Capacity shouldn't affect equality.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&spare),
        state.hash_one(&a),
        "Equal vectors should produce the same hash."
    );
}

#[test]
fn test_ordering() {
    let short = IntVector::from([1, 2]);
    let long = IntVector::from([1, 2, 3]);
    assert!(cmp::lt(&short, &long), "A prefix should order first.");
    assert!(cmp::gt(&long, &short));

    let a = IntVector::from([1, 3]);
    let b = IntVector::from([1, 2, 5]);
    assert!(cmp::gt(&a, &b), "The first differing element should decide.");
    assert!(cmp::ge(&a, &b));
    assert!(!cmp::le(&a, &b));

    let empty = IntVector::new();
    assert!(cmp::lt(&empty, &short));
    assert!(cmp::le(&empty, &IntVector::new()) && cmp::ge(&empty, &IntVector::new()));
    assert!(!cmp::lt(&long, &long.clone()), "Equal vectors shouldn't be less than each other.");

    assert!(short < long && a > b && short <= short.clone());
    assert_eq!(IntVector::from([-1]).cmp(&IntVector::from([0])), std::cmp::Ordering::Less);
}

#[test]
fn test_formatting() {
    assert_eq!(format_vector(&IntVector::from([1, 2, 3])), "1 2 3");
    assert_eq!(format_vector(&IntVector::from([-4, 0])), "-4 0");
    assert_eq!(
        format_vector(&IntVector::from([5])),
        "",
        "A single element is never written."
    );
    assert_eq!(format_vector(&IntVector::new()), "");

    let mut out = Vec::new();
    print_vector(&mut out, &IntVector::from([9, 8, 7, 6])).unwrap();
    assert_eq!(out, b"9 8 7 6");

    let cases: [&[i32]; 4] = [&[], &[5], &[1, 2], &[-1, 0, 1]];
    for values in cases {
        let vec = IntVector::from_slice(values);
        let mut out = Vec::new();
        print_vector(&mut out, &vec).unwrap();
        assert_eq!(
            out,
            format_vector(&vec).as_bytes(),
            "Byte and text output should match for {values:?}."
        );
    }

    let vec = IntVector::from([5]);
    assert_eq!(vec.to_string(), "[5]", "Display should show every element.");
    assert_eq!(
        format!("{vec:?}"),
        "IntVector { contents: [5], len: 1, cap: 1 }"
    );
}

mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn push_back_keeps_order(values in prop::collection::vec(any::<i32>(), 0..256)) {
            let mut vec = IntVector::new();

            for (i, &v) in values.iter().enumerate() {
                prop_assert_eq!(vec.len(), i);
                vec.push_back(v);
                prop_assert!(vec.cap() >= vec.len());
            }

            prop_assert_eq!(vec.len(), values.len());
            for (i, &v) in values.iter().enumerate() {
                // SAFETY: i < values.len() == vec.len().
                prop_assert_eq!(unsafe { *vec.at(i) }, v);
            }
        }

        #[test]
        fn shrink_to_fit_matches_len(
            values in prop::collection::vec(any::<i32>(), 0..64),
            pops in 0_usize..64,
        ) {
            let mut vec: IntVector = values.iter().copied().collect();
            for _ in 0..pops {
                vec.try_pop_back();
            }

            vec.shrink_to_fit();
            prop_assert_eq!(vec.cap(), vec.len());
            prop_assert_eq!(vec.as_slice(), &values[..values.len().saturating_sub(pops)]);
        }

        #[test]
        fn ordering_matches_slices(
            a in prop::collection::vec(-3_i32..3, 0..6),
            b in prop::collection::vec(-3_i32..3, 0..6),
        ) {
            let (va, vb) = (IntVector::from_slice(&a), IntVector::from_slice(&b));

            prop_assert_eq!(cmp::eq(&va, &vb), a == b);
            prop_assert_eq!(cmp::lt(&va, &vb), a < b);
            prop_assert_eq!(cmp::ge(&va, &vb), a >= b);
            prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        }
    }
}
