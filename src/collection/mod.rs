//! Small sequence helpers used by the triangulation engine.
//!
//! Geometric equality is tolerance-based and therefore not hashable, so the
//! grouping here works by linear scan with a caller-supplied predicate.

use num_traits::PrimInt;
use std::iter::FusedIterator;

/// Splits `items` into those matching `pred` and the rest.
///
/// Both halves keep the relative order of the input.
///
/// ```
/// use triangulum::collection::partition;
///
/// let (even, odd) = partition(vec![1, 2, 3, 4], |x| x % 2 == 0);
/// assert_eq!(even, vec![2, 4]);
/// assert_eq!(odd, vec![1, 3]);
/// ```
pub fn partition<T, I, P>(items: I, pred: P) -> (Vec<T>, Vec<T>)
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().partition(pred)
}

/// Groups `items` by `equals` and counts each group.
///
/// Each item is compared against the representatives seen so far and
/// counted towards the first one it equals; otherwise it becomes a new
/// representative. Groups come back in first-seen order. Runs in O(n·m)
/// for `m` distinct groups.
///
/// ```
/// use triangulum::collection::counts;
///
/// let grouped = counts(vec![1, 1, 2, 3, 3, 3], |a, b| a == b);
/// assert_eq!(grouped, vec![(1, 2), (2, 1), (3, 3)]);
/// ```
pub fn counts<T, I, E>(items: I, mut equals: E) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    E: FnMut(&T, &T) -> bool,
{
    let mut groups: Vec<(T, usize)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(rep, _)| equals(&item, rep)) {
            Some((_, count)) => *count += 1,
            None => groups.push((item, 1)),
        }
    }
    groups
}

/// Lazily yields `a, a + 1, ..., b - 1`.
///
/// Empty when `a >= b`. To iterate again, call `range` again.
///
/// ```
/// use triangulum::collection::range;
///
/// assert_eq!(range(2, 5).collect::<Vec<i32>>(), vec![2, 3, 4]);
/// assert_eq!(range(5u8, 5).count(), 0);
/// ```
pub fn range<T: PrimInt>(a: T, b: T) -> Range<T> {
    Range { next: a, end: b }
}

/// Iterator returned by [`range`].
#[derive(Debug, Clone)]
pub struct Range<T> {
    next: T,
    end: T,
}

impl<T: PrimInt> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        self.next = current + T::one();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next >= self.end {
            return (0, Some(0));
        }
        // Widen first: `end - next` can overflow for signed types.
        let len = self
            .next
            .to_i128()
            .zip(self.end.to_i128())
            .and_then(|(a, b)| usize::try_from(b - a).ok());
        match len {
            Some(n) => (n, Some(n)),
            None => (1, None),
        }
    }
}

impl<T: PrimInt> FusedIterator for Range<T> {}

/// Lazily yields consecutive slices of `items` of length `n`.
///
/// The last slice is shorter when `items.len()` is not a multiple of `n`.
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// ```
/// use triangulum::collection::chunks;
///
/// let data = [1, 2, 3, 4, 5];
/// let parts: Vec<&[i32]> = chunks(&data, 2).collect();
/// assert_eq!(parts, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
/// ```
pub fn chunks<T>(items: &[T], n: usize) -> Chunks<'_, T> {
    assert!(n != 0, "chunk size must be non-zero");
    Chunks { rest: items, size: n }
}

/// Iterator returned by [`chunks`].
#[derive(Debug, Clone)]
pub struct Chunks<'a, T> {
    rest: &'a [T],
    size: usize,
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        if self.rest.is_empty() {
            return None;
        }
        let split = self.size.min(self.rest.len());
        let (head, tail) = self.rest.split_at(split);
        self.rest = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.len().div_ceil(self.size);
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Chunks<'_, T> {}

impl<T> FusedIterator for Chunks<'_, T> {}
