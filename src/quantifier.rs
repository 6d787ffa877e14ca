use std::fmt;

use crate::error::{Constraint, Error, Result};

/// A repetition suffix such as `*`, `+?`, `{2,}` or nothing at all.
///
/// Quantifiers are stored as a normalized `min`/`max` pair and rendered by a
/// single [`Display`](fmt::Display) implementation, so two quantifiers that
/// mean the same thing always compare equal and print the same text:
///
/// ```
/// use fluent_regex::Quantifier;
///
/// assert_eq!(Quantifier::at_least(1).unwrap(), Quantifier::one_or_more());
/// assert_eq!(Quantifier::exactly(1).unwrap().to_string(), "");
/// assert_eq!(Quantifier::range(2, 5).unwrap().to_string(), "{2,5}");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quantifier {
    min: u32,
    // None means unbounded
    max: Option<u32>,
    lazy: bool,
}

impl Quantifier {
    const fn new(min: u32, max: Option<u32>) -> Self {
        Quantifier {
            min,
            max,
            lazy: false,
        }
    }

    /// Matches the preceding element exactly once; renders as an empty string.
    pub const fn none() -> Self {
        Self::new(1, Some(1))
    }

    pub const fn zero_or_more() -> Self {
        Self::new(0, None)
    }

    pub const fn zero_or_more_lazy() -> Self {
        Quantifier {
            lazy: true,
            ..Self::zero_or_more()
        }
    }

    pub const fn one_or_more() -> Self {
        Self::new(1, None)
    }

    pub const fn one_or_more_lazy() -> Self {
        Quantifier {
            lazy: true,
            ..Self::one_or_more()
        }
    }

    pub const fn optional() -> Self {
        Self::new(0, Some(1))
    }

    /// Exactly `count` repetitions. `count` must be greater than zero.
    pub fn exactly(count: i32) -> Result<Self> {
        let count = positive("count", count)?;
        Ok(Self::new(count, Some(count)))
    }

    /// At least `count` repetitions. `count` must be non-negative.
    pub fn at_least(count: i32) -> Result<Self> {
        let count = non_negative("count", count)?;
        Ok(Self::new(count, None))
    }

    /// Up to `count` repetitions. `count` must be greater than zero.
    pub fn at_most(count: i32) -> Result<Self> {
        let count = positive("count", count)?;
        Ok(Self::new(0, Some(count)))
    }

    /// Between `min` and `max` repetitions, inclusive.
    ///
    /// When `min == max` this is [`Quantifier::exactly`], so `range(0, 0)` is
    /// rejected with the same error `exactly(0)` reports.
    pub fn range(min: i32, max: i32) -> Result<Self> {
        let lower = non_negative("min", min)?;
        let upper = non_negative("max", max)?;
        if upper < lower {
            return Err(Error::invalid_argument("max", Constraint::NotLessThanMin));
        }
        if lower == upper {
            return Self::exactly(min);
        }
        Ok(Self::new(lower, Some(upper)))
    }

    /// Whether this quantifier renders as an empty string.
    pub fn is_none(&self) -> bool {
        *self == Self::none()
    }
}

impl Default for Quantifier {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (1, Some(1)) => return Ok(()),
            (0, None) => f.write_str("*")?,
            (1, None) => f.write_str("+")?,
            (0, Some(1)) => f.write_str("?")?,
            (min, Some(max)) if min == max => write!(f, "{{{min}}}")?,
            (min, None) => write!(f, "{{{min},}}")?,
            (0, Some(max)) => write!(f, "{{,{max}}}")?,
            (min, Some(max)) => write!(f, "{{{min},{max}}}")?,
        }
        if self.lazy {
            f.write_str("?")?;
        }
        Ok(())
    }
}

fn non_negative(parameter: &'static str, value: i32) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::invalid_argument(parameter, Constraint::NonNegative))
}

fn positive(parameter: &'static str, value: i32) -> Result<u32> {
    match u32::try_from(value) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(Error::invalid_argument(parameter, Constraint::GreaterThanZero)),
    }
}
