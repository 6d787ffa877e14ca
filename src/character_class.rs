use std::fmt;

use crate::escape::{push_escaped, CLASS_SPECIALS};
use crate::Quantifier;

/// A bracketed character class such as `[a-zA-Z_]+`.
///
/// Instances are handed out by [`Pattern::character_class`](crate::Pattern::character_class)
/// and rendered into the owning pattern once the callback returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterClass {
    body: String,
    quantifier: Quantifier,
}

impl CharacterClass {
    pub(crate) fn new(quantifier: Quantifier) -> Self {
        CharacterClass {
            body: String::new(),
            quantifier,
        }
    }

    /// Adds the range `start-end`. The bounds are not checked; the regex
    /// engine rejects reversed ranges when the pattern is compiled.
    pub fn range(&mut self, start: char, end: char) -> &mut Self {
        self.body.push(start);
        self.body.push('-');
        self.body.push(end);
        self
    }

    /// Adds individual characters, escaping `\ ^ - [ ]`.
    pub fn one_of(&mut self, first: char, second: char, additional: &[char]) -> &mut Self {
        for c in [first, second].iter().chain(additional) {
            push_escaped(&mut self.body, *c, CLASS_SPECIALS);
        }
        self
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]{}", self.body, self.quantifier)
    }
}
