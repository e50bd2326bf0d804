//! Top-down merge sort.
//!
//! Stable: when two elements compare equal the one from the left half is
//! taken first, so equal elements keep their input order.

use std::cmp::Ordering;

/// Sorts `items` ascending and returns the sorted copy.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    merge_sort_by(items, &mut T::cmp)
}

/// Sorts `items` ascending according to `compare` and returns the sorted copy.
///
/// Prices are sorted with `merge_sort_by(&prices, &mut f64::total_cmp)`.
pub fn merge_sort_by<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort_by(&items[..mid], compare);
    let right = merge_sort_by(&items[mid..], compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut ordered = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Only a strictly smaller right front jumps ahead.
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        ordered.extend(next);
    }

    ordered.extend(left);
    ordered.extend(right);
    ordered
}
