use std::fmt;

use crate::escape::{push_escaped, LITERAL_SPECIALS};
use crate::{CharacterClass, Quantifier};

/// Fluent builder for regular-expression source text.
///
/// Every builder method appends to the pattern and returns it again, so calls
/// can be chained. Methods ending in `_with` take a [`Quantifier`] that is
/// applied to the element they append.
///
/// ```
/// use fluent_regex::{Pattern, Quantifier};
///
/// let mut pattern = Pattern::with();
/// pattern
///     .start_of_line()
///     .digit_with(Quantifier::exactly(4)?)
///     .literal("-")
///     .named_group("month", |g| {
///         g.character_class(|cc| {
///             cc.range('0', '9');
///         });
///     });
/// assert_eq!(pattern.as_str(), r"^\d{4}-(?<month>[0-9])");
/// # Ok::<(), fluent_regex::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    source: String,
}

impl Pattern {
    /// Starts an empty pattern.
    pub fn with() -> Self {
        Pattern::default()
    }

    fn build(configure: impl FnOnce(&mut Pattern)) -> Pattern {
        let mut pattern = Pattern::with();
        configure(&mut pattern);
        pattern
    }

    /// Appends `text` verbatim, escaping `( ) [ ] + .`.
    pub fn literal(&mut self, text: &str) -> &mut Self {
        self.literal_with(Quantifier::none(), text)
    }

    /// Appends `text` followed by `quantifier`.
    ///
    /// Literals longer than one character are wrapped in a group so the
    /// quantifier applies to the whole text, e.g. `(Hello)?`.
    pub fn literal_with(&mut self, quantifier: Quantifier, text: &str) -> &mut Self {
        let wrap = !quantifier.is_none() && text.chars().nth(1).is_some();
        if wrap {
            self.source.push('(');
        }
        for c in text.chars() {
            push_escaped(&mut self.source, c, LITERAL_SPECIALS);
        }
        if wrap {
            self.source.push(')');
        }
        self.push_quantifier(quantifier)
    }

    pub fn literal_char(&mut self, c: char) -> &mut Self {
        self.literal_char_with(Quantifier::none(), c)
    }

    pub fn literal_char_with(&mut self, quantifier: Quantifier, c: char) -> &mut Self {
        let mut buf = [0u8; 4];
        self.literal_with(quantifier, c.encode_utf8(&mut buf))
    }

    /// Appends `\d`.
    pub fn digit(&mut self) -> &mut Self {
        self.digit_with(Quantifier::none())
    }

    pub fn digit_with(&mut self, quantifier: Quantifier) -> &mut Self {
        self.source.push_str(r"\d");
        self.push_quantifier(quantifier)
    }

    /// Appends `\w`.
    pub fn word(&mut self) -> &mut Self {
        self.word_with(Quantifier::none())
    }

    pub fn word_with(&mut self, quantifier: Quantifier) -> &mut Self {
        self.source.push_str(r"\w");
        self.push_quantifier(quantifier)
    }

    /// Appends the `^` anchor.
    pub fn start_of_line(&mut self) -> &mut Self {
        self.source.push('^');
        self
    }

    /// Appends the `$` anchor.
    pub fn end_of_line(&mut self) -> &mut Self {
        self.source.push('$');
        self
    }

    /// Appends a character class populated by `configure`.
    pub fn character_class<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut CharacterClass),
    {
        self.character_class_with(Quantifier::none(), configure)
    }

    pub fn character_class_with<F>(&mut self, quantifier: Quantifier, configure: F) -> &mut Self
    where
        F: FnOnce(&mut CharacterClass),
    {
        let mut class = CharacterClass::new(quantifier);
        configure(&mut class);
        self.source.push_str(&class.to_string());
        self
    }

    /// Appends `(<nested>)`, where the nested pattern is built by `configure`.
    pub fn group<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut Pattern),
    {
        self.group_with(Quantifier::none(), configure)
    }

    pub fn group_with<F>(&mut self, quantifier: Quantifier, configure: F) -> &mut Self
    where
        F: FnOnce(&mut Pattern),
    {
        let nested = Pattern::build(configure);
        log::trace!("splicing group {:?}", nested.source);
        self.source.push('(');
        self.source.push_str(&nested.source);
        self.source.push(')');
        self.push_quantifier(quantifier)
    }

    /// Appends the named capture group `(?<name><nested>)`.
    ///
    /// `name` is inserted as given; whether it is a legal group name is left
    /// to the regex engine.
    pub fn named_group<F>(&mut self, name: &str, configure: F) -> &mut Self
    where
        F: FnOnce(&mut Pattern),
    {
        self.named_group_with(Quantifier::none(), name, configure)
    }

    pub fn named_group_with<F>(&mut self, quantifier: Quantifier, name: &str, configure: F) -> &mut Self
    where
        F: FnOnce(&mut Pattern),
    {
        let nested = Pattern::build(configure);
        log::trace!("splicing group {:?} as {:?}", nested.source, name);
        self.source.push_str("(?<");
        self.source.push_str(name);
        self.source.push('>');
        self.source.push_str(&nested.source);
        self.source.push(')');
        self.push_quantifier(quantifier)
    }

    /// Appends a character class matching any of the given characters.
    pub fn one_of_chars(&mut self, first: char, second: char, additional: &[char]) -> &mut Self {
        self.one_of_chars_with(Quantifier::none(), first, second, additional)
    }

    pub fn one_of_chars_with(
        &mut self,
        quantifier: Quantifier,
        first: char,
        second: char,
        additional: &[char],
    ) -> &mut Self {
        self.character_class_with(quantifier, |cc| {
            cc.one_of(first, second, additional);
        })
    }

    /// Appends an alternation of literals, e.g. `(Hello|World)`.
    ///
    /// Each alternative is escaped on its own.
    pub fn one_of_literals(&mut self, first: &str, second: &str, additional: &[&str]) -> &mut Self {
        self.one_of_literals_with(Quantifier::none(), first, second, additional)
    }

    pub fn one_of_literals_with(
        &mut self,
        quantifier: Quantifier,
        first: &str,
        second: &str,
        additional: &[&str],
    ) -> &mut Self {
        let branches: Vec<Pattern> = [first, second]
            .iter()
            .chain(additional)
            .map(|text| Pattern::build(|p| {
                p.literal(text);
            }))
            .collect();
        self.push_alternation(quantifier, &branches)
    }

    /// Appends an alternation whose branches are each built by a callback
    /// against a fresh pattern.
    ///
    /// ```
    /// use fluent_regex::Pattern;
    ///
    /// let mut pattern = Pattern::with();
    /// pattern.one_of(|p| { p.digit(); }, |p| { p.word(); }, &[&|p: &mut Pattern| { p.literal("."); }]);
    /// assert_eq!(pattern.as_str(), r"(\d|\w|\.)");
    /// ```
    pub fn one_of<F, G>(&mut self, first: F, second: G, additional: &[&dyn Fn(&mut Pattern)]) -> &mut Self
    where
        F: FnOnce(&mut Pattern),
        G: FnOnce(&mut Pattern),
    {
        self.one_of_with(Quantifier::none(), first, second, additional)
    }

    pub fn one_of_with<F, G>(
        &mut self,
        quantifier: Quantifier,
        first: F,
        second: G,
        additional: &[&dyn Fn(&mut Pattern)],
    ) -> &mut Self
    where
        F: FnOnce(&mut Pattern),
        G: FnOnce(&mut Pattern),
    {
        let mut branches = vec![Pattern::build(first), Pattern::build(second)];
        branches.extend(additional.iter().map(|configure| Pattern::build(*configure)));
        self.push_alternation(quantifier, &branches)
    }

    /// The pattern source built so far.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.source
    }

    fn push_alternation(&mut self, quantifier: Quantifier, branches: &[Pattern]) -> &mut Self {
        log::trace!("splicing alternation of {} branches", branches.len());
        self.source.push('(');
        for (i, branch) in branches.iter().enumerate() {
            if i > 0 {
                self.source.push('|');
            }
            self.source.push_str(&branch.source);
        }
        self.source.push(')');
        self.push_quantifier(quantifier)
    }

    fn push_quantifier(&mut self, quantifier: Quantifier) -> &mut Self {
        self.source.push_str(&quantifier.to_string());
        self
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.source
    }
}
