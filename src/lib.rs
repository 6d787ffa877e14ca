//! Fluent builder for regular-expression pattern strings.
//!
//! The crate only assembles pattern text; compiling and matching it is left to
//! a regex engine such as the `regex` crate.

mod character_class;
mod error;
mod escape;
mod pattern;
mod quantifier;

pub mod presets;

pub use character_class::CharacterClass;
pub use error::{Constraint, Error, Result};
pub use pattern::Pattern;
pub use quantifier::Quantifier;

use anyhow::{anyhow, bail, Context};
use regex::Regex;
use std::env;
use std::io::{self, Read};

/// Entry point of the `fluent-regex` binary: `fluent-regex <preset> [input]`.
///
/// Prints the preset's pattern, then checks it against `input` (or stdin when
/// no input argument is given).
pub fn run() -> anyhow::Result<()> {
    let mut args = env::args().skip(1);

    let name = args
        .next()
        .ok_or_else(|| anyhow!("No preset provided, expected one of: {}", presets::NAMES.join(", ")))?;
    log::debug!("Preset name: {:?}", name);
    let pattern = presets::lookup(&name)
        .ok_or_else(|| anyhow!("Unknown preset {:?}, expected one of: {}", name, presets::NAMES.join(", ")))?
        .with_context(|| format!("Failed to build preset {:?}", name))?;
    log::debug!("Built pattern: {}", pattern);
    println!("{}", pattern);

    let input = match args.next() {
        Some(input) => input,
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            input
        }
    };
    // Remove trailing newline if present
    let input = input.trim_end();
    log::debug!("Input: {:?}", input);

    let regex = Regex::new(pattern.as_str()).context("Generated pattern was rejected by the regex engine")?;
    let has_match = regex.is_match(input);
    log::debug!("Match result: {}", has_match);

    if has_match {
        println!("Pattern matches!");
        Ok(())
    } else {
        bail!("Pattern does not match.")
    }
}
