//! Splits a name into alternating runs of ASCII digits and everything else.
//!
//! A number is a maximal sequence of `0-9`. Other Unicode digits such as
//! full-width ones are treated as text.

use std::iter::FusedIterator;

/// Character class of a [`Run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunKind {
    Digit,
    NonDigit,
}

impl RunKind {
    fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            Self::Digit
        } else {
            Self::NonDigit
        }
    }
}

/// A maximal substring made of a single [`RunKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub kind: RunKind,
    pub text: &'a str,
}

impl Run<'_> {
    pub fn is_digit(&self) -> bool {
        self.kind == RunKind::Digit
    }
}

/// Lazy iterator over the runs of a string.
///
/// Cloning yields an independent cursor at the same position, so a caller can
/// walk the same input several times without re-tokenizing up front.
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    rest: &'a str,
}

/// Tokenize `s` into runs. The runs cover `s` exactly, in order.
pub fn runs(s: &str) -> Runs<'_> {
    Runs { rest: s }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let kind = RunKind::of(first);
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| RunKind::of(c) != kind)
            .map_or(self.rest.len(), |(i, _)| i);

        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Run { kind, text })
    }
}

impl FusedIterator for Runs<'_> {}
