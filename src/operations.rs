//! Houses the `combine` function, which merges two `CanonicalSet`s, and the
//! `calculate` pipeline that turns two texts into the combination of their
//! vocabularies.
//!

use std::cmp::Ordering;

use crate::args::OpName;
use crate::canonical::{canonicalize, CanonicalSet};
use crate::tokens::{tokenize, Token};

/// Settings that change how a text becomes a vocabulary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Lowercase every token before sorting. On by default.
    pub fold_case: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config { fold_case: true }
    }
}

/// Returns the `CanonicalSet` of tokens in `text`, lowercased if
/// `config.fold_case` is set.
#[must_use]
pub fn vocabulary<'data>(text: &'data [u8], config: Config) -> CanonicalSet<'data> {
    let tokens = tokenize(text);
    let set = if config.fold_case { canonicalize(tokens.map(Token::to_lowercase)) } else { canonicalize(tokens) };
    log::debug!("{} distinct tokens in {} bytes of text", set.len(), text.len());
    set
}

/// Calculates the set operation named by `operation` on the vocabularies of
/// `first` and `second`:
///
/// * `OpName::Union` gives the tokens that occur in either text,
/// * `OpName::Difference` gives the tokens that occur in `first` but not `second`, and
/// * `OpName::Intersection` gives the tokens that occur in both.
///
/// The result is sorted and free of duplicates.
#[must_use]
pub fn calculate<'data>(
    operation: OpName,
    first: &'data [u8],
    second: &'data [u8],
    config: Config,
) -> CanonicalSet<'data> {
    let a = vocabulary(first, config);
    let b = vocabulary(second, config);
    let result = combine(&a, &b, operation);
    log::debug!("{operation:?} of {} and {} tokens has {} tokens", a.len(), b.len(), result.len());
    result
}

/// Merges `a` and `b` in a single pass, with one cursor in each set:
///
/// * A token found only in `a` is kept for `Union` and `Difference`.
/// * A token found only in `b` is kept for `Union`.
/// * A token found in both is kept once for `Union` and `Intersection`.
///
/// Runs in `O(|a| + |b|)`, and since both inputs are canonical the result is
/// too.
#[must_use]
pub fn combine<'data>(
    a: &CanonicalSet<'data>,
    b: &CanonicalSet<'data>,
    operation: OpName,
) -> CanonicalSet<'data> {
    let (a, b) = (a.as_slice(), b.as_slice());
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                if operation != OpName::Intersection {
                    result.push(a[i].clone());
                }
                i += 1;
            }
            Ordering::Greater => {
                if operation == OpName::Union {
                    result.push(b[j].clone());
                }
                j += 1;
            }
            Ordering::Equal => {
                if operation != OpName::Difference {
                    result.push(a[i].clone());
                }
                i += 1;
                j += 1;
            }
        }
    }

    // At most one of the two sides has anything left
    match operation {
        OpName::Union => {
            result.extend_from_slice(&a[i..]);
            result.extend_from_slice(&b[j..]);
        }
        OpName::Difference => result.extend_from_slice(&a[i..]),
        OpName::Intersection => {}
    }

    CanonicalSet::from_sorted(result)
}
