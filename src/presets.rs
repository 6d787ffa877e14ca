//! Ready-made patterns assembled with the builder.

use crate::{Pattern, Quantifier, Result};

/// Names accepted by [`lookup`].
pub const NAMES: &[&str] = &["year", "email"];

/// A four digit year: `\d{4}`.
pub fn year() -> Result<Pattern> {
    let mut pattern = Pattern::with();
    pattern.digit_with(Quantifier::exactly(4)?);
    Ok(pattern)
}

/// A whole-line e-mail address.
pub fn email() -> Result<Pattern> {
    let mut pattern = Pattern::with();
    pattern
        .start_of_line()
        .character_class_with(Quantifier::one_or_more(), |cc| {
            cc.range('a', 'z')
                .range('A', 'Z')
                .range('0', '9')
                .one_of('.', '_', &['%', '-', '+']);
        })
        .literal("@")
        .character_class_with(Quantifier::one_or_more(), |cc| {
            cc.range('a', 'z')
                .range('A', 'Z')
                .range('0', '9')
                .one_of('.', '_', &[]);
        })
        .literal(".")
        .character_class_with(Quantifier::at_least(2)?, |cc| {
            cc.range('a', 'z').range('A', 'Z');
        })
        .end_of_line();
    Ok(pattern)
}

/// Builds the preset called `name`, or `None` if there is no such preset.
pub fn lookup(name: &str) -> Option<Result<Pattern>> {
    match name {
        "year" => Some(year()),
        "email" => Some(email()),
        _ => None,
    }
}
