//! Provides the `tokenize` function, which splits raw text into word and
//! number tokens, and `normalize`, which folds a token to lowercase.
//!
//! Only ASCII is classified: any byte that isn't an ASCII letter or digit is a
//! separator (unless it continues a run, see below), so the bytes of a UTF-8
//! multibyte character always separate tokens.
use bstr::ByteSlice;
use std::borrow::Cow;
use std::fmt;

/// A `Token` is a never-empty run of bytes taken from the input text. It is
/// either a *word* (letters and apostrophes, starting with a letter) or a
/// *number* (digits with at most one decimal point, followed by a digit).
///
/// Tokens borrow from the text they were found in. Lowercasing a token that
/// contains an uppercase letter makes it owned.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token<'data>(Cow<'data, [u8]>);

impl<'data> Token<'data> {
    /// The token's bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the token with `A..Z` mapped to `a..z`. Other bytes are left
    /// alone, and a token with no uppercase letters is returned unchanged.
    #[must_use]
    pub fn to_lowercase(self) -> Token<'data> {
        if self.0.iter().any(u8::is_ascii_uppercase) {
            Token(Cow::Owned(self.0.to_ascii_lowercase()))
        } else {
            self
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bytes().as_bstr(), f)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bytes().as_bstr(), f)
    }
}

/// Free-function form of `Token::to_lowercase`, convenient for `.map(normalize)`
#[must_use]
pub fn normalize(token: Token) -> Token {
    token.to_lowercase()
}

/// Returns a lazy iterator over the tokens of `text`. The iterator can be
/// cloned to restart the scan from where the clone was taken.
#[must_use]
pub fn tokenize(text: &[u8]) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

/// The iterator returned by `tokenize`
#[derive(Clone, Debug)]
pub struct Tokens<'data> {
    text: &'data [u8],
    pos: usize,
}

impl<'data> Iterator for Tokens<'data> {
    type Item = Token<'data>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        let Some(skip) = text[self.pos..].iter().position(u8::is_ascii_alphanumeric) else {
            self.pos = text.len();
            return None;
        };
        let start = self.pos + skip;
        let run = &text[start..];
        let len = if run[0].is_ascii_alphabetic() { word_len(run) } else { number_len(run) };
        self.pos = start + len;
        Some(Token(Cow::Borrowed(&run[..len])))
    }
}

/// Length of the run of letters and apostrophes at the start of `run`
fn word_len(run: &[u8]) -> usize {
    run.iter().position(|&b| !(b.is_ascii_alphabetic() || b == b'\'')).unwrap_or(run.len())
}

/// Length of the number at the start of `run`. A decimal point is taken only
/// if it's the first one and a digit follows it.
fn number_len(run: &[u8]) -> usize {
    let mut seen_point = false;
    for (i, &b) in run.iter().enumerate() {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_point && run.get(i + 1).is_some_and(u8::is_ascii_digit) => {
                seen_point = true;
            }
            _ => return i,
        }
    }
    run.len()
}
