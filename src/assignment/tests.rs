use std::collections::HashSet;

use crate::assignment::{Assignment, Assignments, permutation_count};

fn is_injective(assignment: &Assignment) -> bool {
    let mut seen = HashSet::new();
    assignment.digits().iter().all(|d| seen.insert(*d))
}

#[test]
fn test_permutation_count() {
    assert_eq!(permutation_count(0), 1);
    assert_eq!(permutation_count(1), 10);
    assert_eq!(permutation_count(2), 90);
    assert_eq!(permutation_count(8), 1_814_400);
    assert_eq!(permutation_count(10), 3_628_800);
    assert_eq!(permutation_count(11), 0);
}

#[test]
fn test_order_starts_at_one_and_ends_with_zero() {
    let digits: Vec<Vec<u8>> = Assignments::new(2)
        .take(11)
        .map(|a| a.digits().to_vec())
        .collect();
    assert_eq!(
        digits,
        vec![
            vec![1, 2],
            vec![1, 3],
            vec![1, 4],
            vec![1, 5],
            vec![1, 6],
            vec![1, 7],
            vec![1, 8],
            vec![1, 9],
            vec![1, 0],
            vec![2, 1],
            vec![2, 3],
        ]
    );

    let last = Assignments::new(3).last().map(|a| a.digits().to_vec());
    assert_eq!(last, Some(vec![0, 9, 8]));
}

#[test]
fn test_length_matches_count_and_all_injective() {
    for k in 0..=5 {
        let all: Vec<Assignment> = Assignments::new(k).collect();
        assert_eq!(all.len() as u64, permutation_count(k), "k = {}", k);
        assert!(all.iter().all(|a| a.len() == k && is_injective(a)));

        let distinct: HashSet<_> = all.iter().collect();
        assert_eq!(distinct.len(), all.len());
    }
}

#[test]
fn test_exact_size_without_iterating() {
    assert_eq!(Assignments::new(10).len(), 3_628_800);
    assert_eq!(Assignments::new(7).len(), 604_800);
    assert_eq!(Assignments::new(11).len(), 0);
    assert_eq!(Assignments::new(11).next(), None);
}

#[test]
fn test_enumeration_is_repeatable() {
    let first: Vec<_> = Assignments::new(4).collect();
    let second: Vec<_> = Assignments::new(4).collect();
    assert_eq!(first, second);
}

#[test]
fn test_range_matches_skip_take() {
    let full: Vec<_> = Assignments::new(4).collect();
    for (start, end) in [(0, 7), (100, 200), (4_999, 5_040), (5_039, 5_040)] {
        let ranged: Vec<_> = Assignments::range(4, start..end).collect();
        let expected: Vec<_> = full
            .iter()
            .skip(start as usize)
            .take((end - start) as usize)
            .copied()
            .collect();
        assert_eq!(ranged, expected, "range {}..{}", start, end);
    }
}

#[test]
fn test_range_is_clamped() {
    assert_eq!(Assignments::range(2, 85..500).count(), 5);
    assert_eq!(Assignments::range(2, 500..600).count(), 0);
    assert_eq!(Assignments::range(2, 50..10).count(), 0);
}

#[test]
fn test_chunks_cover_the_space_once() {
    let k = 3;
    let total = permutation_count(k);
    let mut seen = Vec::new();
    let mut start = 0;
    while start < total {
        let end = (start + 97).min(total);
        seen.extend(Assignments::range(k, start..end));
        start = end;
    }
    let full: Vec<_> = Assignments::new(k).collect();
    assert_eq!(seen, full);
}

#[test]
fn test_from_digits_validation() {
    assert!(Assignment::from_digits(&[9, 5, 6, 7]).is_some());
    assert!(Assignment::from_digits(&[1, 1]).is_none());
    assert!(Assignment::from_digits(&[10]).is_none());
    assert!(Assignment::from_digits(&[0; 11]).is_none());

    if let Some(a) = Assignment::from_digits(&[3, 0, 7]) {
        assert_eq!(a.digit(1), Some(0));
        assert_eq!(a.digit(3), None);
        assert_eq!(a.to_string(), "307");
    }
}
