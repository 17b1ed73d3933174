//! Provides `CanonicalSet`, a sorted, duplicate-free sequence of tokens, and
//! the `canonicalize` function that builds one.
use crate::tokens::Token;
use std::slice;

/// A `CanonicalSet` is a strictly increasing sequence of `Token`s. It can only
/// be built by `canonicalize` (or `collect`), or by combining two other
/// `CanonicalSet`s, so its elements are always sorted and distinct.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalSet<'data> {
    tokens: Vec<Token<'data>>,
}

/// Sorts `tokens` and drops duplicates.
#[must_use]
pub fn canonicalize<'data>(tokens: impl IntoIterator<Item = Token<'data>>) -> CanonicalSet<'data> {
    let mut tokens = merge_sort(tokens);
    tokens.dedup();
    CanonicalSet { tokens }
}

impl<'data> CanonicalSet<'data> {
    /// Wraps a vector the caller guarantees to be strictly increasing
    pub(crate) fn from_sorted(tokens: Vec<Token<'data>>) -> Self {
        debug_assert!(tokens.windows(2).all(|w| w[0] < w[1]));
        CanonicalSet { tokens }
    }

    /// Number of tokens in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the set empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens, in increasing order
    #[must_use]
    pub fn as_slice(&self) -> &[Token<'data>] {
        &self.tokens
    }

    /// Iterates over the tokens in increasing order
    pub fn iter(&self) -> slice::Iter<'_, Token<'data>> {
        self.tokens.iter()
    }

    /// Binary search for `token`
    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        self.tokens.binary_search_by(|probe| probe.as_bytes().cmp(token.as_bytes())).is_ok()
    }

    /// Unwraps the set into its sorted vector of tokens
    #[must_use]
    pub fn into_vec(self) -> Vec<Token<'data>> {
        self.tokens
    }
}

impl<'data> FromIterator<Token<'data>> for CanonicalSet<'data> {
    fn from_iter<I: IntoIterator<Item = Token<'data>>>(iter: I) -> Self {
        canonicalize(iter)
    }
}

impl<'a, 'data> IntoIterator for &'a CanonicalSet<'data> {
    type Item = &'a Token<'data>;
    type IntoIter = slice::Iter<'a, Token<'data>>;
    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Stable bottom-up merge sort. The input is cut into its natural
/// non-decreasing runs, and adjacent runs are merged pairwise, pass after pass,
/// until one run is left. No recursion, so deep inputs can't overflow the
/// stack.
fn merge_sort<T: Ord>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut runs: Vec<Vec<T>> = Vec::new();
    for item in items {
        match runs.last_mut() {
            Some(run) if run.last().is_some_and(|last| *last <= item) => run.push(item),
            _ => runs.push(vec![item]),
        }
    }

    while runs.len() > 1 {
        let mut pending = runs.into_iter();
        let mut merged = Vec::with_capacity(pending.len() / 2 + 1);
        while let Some(left) = pending.next() {
            match pending.next() {
                Some(right) => merged.push(merge(left, right)),
                None => merged.push(left),
            }
        }
        runs = merged;
    }
    runs.pop().unwrap_or_default()
}

/// Merges two sorted vectors, taking from `left` on ties so equal elements
/// keep their original order.
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }
    merged
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use crate::tokens::tokenize;
    use itertools::Itertools;

    fn set_of(text: &str) -> Vec<String> {
        canonicalize(tokenize(text.as_bytes())).iter().map(|t| t.to_string()).collect()
    }

    fn strictly_increasing(set: &CanonicalSet) -> bool {
        set.as_slice().windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn sorts_and_drops_duplicates() {
        assert_eq!(set_of("the cat sat on the mat the end"), ["cat", "end", "mat", "on", "sat", "the"]);
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(canonicalize(Vec::new()).is_empty());
        assert_eq!(set_of("solo"), ["solo"]);
    }

    #[test]
    fn ordering_is_bytewise() {
        assert_eq!(set_of("b B a A 10 9 a'"), ["10", "9", "A", "B", "a", "a'", "b"]);
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let once = canonicalize(tokenize(b"z y x y z w 1 2.5 1"));
        let twice = canonicalize(once.clone().into_vec());
        assert_eq!(once, twice);
        assert!(strictly_increasing(&twice));
    }

    #[test]
    fn every_ordering_of_a_small_multiset_gives_the_same_set() {
        let text = b"d b a c b a";
        let tokens: Vec<Token> = tokenize(text).collect();
        let expected = canonicalize(tokens.clone());
        for perm in tokens.iter().cloned().permutations(tokens.len()) {
            let set = canonicalize(perm);
            assert_eq!(set, expected);
            assert!(strictly_increasing(&set));
        }
    }

    #[test]
    fn merge_sort_matches_std_sort_and_is_stable() {
        let keyed: Vec<(u8, usize)> = [3, 1, 2, 1, 3, 0, 2, 1].into_iter().zip(0..).collect();
        let mut expected = keyed.clone();
        expected.sort_by_key(|&(k, _)| k);
        let sorted: Vec<(u8, usize)> = merge_sort(keyed.iter().map(|&(k, i)| Keyed(k, i)))
            .into_iter()
            .map(|Keyed(k, i)| (k, i))
            .collect();
        assert_eq!(sorted, expected);
    }

    // Compares by key only, so ties show whether the original order survived
    #[derive(Debug)]
    struct Keyed(u8, usize);
    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Keyed {}
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn a_large_reversed_input_does_not_overflow() {
        let text: String = (0..200_000).rev().map(|n| format!("{n} ")).collect();
        let set = canonicalize(tokenize(text.as_bytes()));
        assert_eq!(set.len(), 200_000);
        assert!(strictly_increasing(&set));
    }

    #[test]
    fn contains_uses_the_sort_order() {
        let set = canonicalize(tokenize(b"alpha beta gamma"));
        let beta = tokenize(b"beta").next().unwrap();
        let delta = tokenize(b"delta").next().unwrap();
        assert!(set.contains(&beta));
        assert!(!set.contains(&delta));
    }
}
