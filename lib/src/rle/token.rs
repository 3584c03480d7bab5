//! Tokenizing the run-token lines of an RLE pattern.

use std::{iter::Peekable, str::Chars};

/// What a run is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    /// `b`: dead cells.
    Dead,
    /// `o`: living cells.
    Alive,
    /// `$`: the end of rows.
    NextRow,
}

/// A token in a run-token line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A run of `len` times the tag.
    Run {
        /// The run count. A missing count means 1.
        len: usize,
        /// What the run is made of.
        tag: Tag,
    },
    /// `!`: the end of the pattern.
    Terminator,
    /// An unrecognized tag character.
    Invalid(char),
}

/// Splits one line into [`Token`]s.
///
/// A token is an optional decimal run count followed immediately by a tag
/// character. Whitespace (space, tab, CR, LF) between tokens is skipped.
/// A run count followed by CR, LF or the end of the line is dropped.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over a line.
    pub fn new(line: &'a str) -> Self {
        Tokenizer {
            chars: line.chars().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .chars
            .next_if(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
            .is_some()
        {}
    }

    /// Reads a decimal integer, if there is one.
    fn integer(&mut self) -> Option<usize> {
        let mut n: Option<usize> = None;
        while let Some(d) = self.chars.peek().and_then(|c| c.to_digit(10)) {
            self.chars.next();
            n = Some(n.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        }
        n
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        // A count of 0 is read as 1.
        let len = self.integer().map_or(1, |n| n.max(1));
        let token = match self.chars.next()? {
            '!' => Token::Terminator,
            'b' => Token::Run { len, tag: Tag::Dead },
            'o' => Token::Run { len, tag: Tag::Alive },
            '$' => Token::Run { len, tag: Tag::NextRow },
            // CR and LF are only whitespace, even after a run count.
            '\r' | '\n' => return self.next(),
            c => Token::Invalid(c),
        };
        Some(token)
    }
}
