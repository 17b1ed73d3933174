//! `wordset` treats each of two texts as the set of words it contains, and
//! prints the union, difference, or intersection of those sets.
//!
//! The kernel is in three pieces: the `tokens` module splits text into word
//! and number tokens, the `canonical` module sorts and dedupes them, and
//! `operations::combine` merges two sorted sets. The `args` module parses the
//! command line, and the `operands` and `output` modules hide I/O details.
//!
//! Current Limitations:
//! * Only ASCII letters and digits make up tokens, so `café` is read as `caf`.
//!   Unicode word classification would need a different notion of a letter
//!   for both the tokenizer and the lowercasing pass.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod canonical;
pub mod operands;
pub mod operations;
pub mod output;
pub mod tokens;
