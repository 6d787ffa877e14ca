use crate::{Constraint, Error, Quantifier};

fn rejected(parameter: &'static str, constraint: Constraint) -> Error {
    Error::InvalidArgument {
        parameter,
        constraint,
    }
}

#[test]
fn test_fixed_quantifiers() {
    assert_eq!(Quantifier::none().to_string(), "");
    assert_eq!(Quantifier::zero_or_more().to_string(), "*");
    assert_eq!(Quantifier::zero_or_more_lazy().to_string(), "*?");
    assert_eq!(Quantifier::one_or_more().to_string(), "+");
    assert_eq!(Quantifier::one_or_more_lazy().to_string(), "+?");
    assert_eq!(Quantifier::optional().to_string(), "?");
}

#[test]
fn test_default_is_none() {
    assert_eq!(Quantifier::default(), Quantifier::none());
    assert!(Quantifier::default().is_none());
    assert!(!Quantifier::optional().is_none());
    assert!(!Quantifier::zero_or_more_lazy().is_none());
}

#[test]
fn test_exactly() {
    assert_eq!(Quantifier::exactly(1).unwrap().to_string(), "");
    assert_eq!(Quantifier::exactly(2).unwrap().to_string(), "{2}");
    assert_eq!(Quantifier::exactly(3).unwrap().to_string(), "{3}");
    assert_eq!(Quantifier::exactly(1).unwrap(), Quantifier::none());
}

#[test]
fn test_exactly_rejects_non_positive() {
    for count in [0, -1, i32::MIN] {
        assert_eq!(
            Quantifier::exactly(count),
            Err(rejected("count", Constraint::GreaterThanZero))
        );
    }
}

#[test]
fn test_at_least() {
    assert_eq!(Quantifier::at_least(0).unwrap().to_string(), "*");
    assert_eq!(Quantifier::at_least(1).unwrap().to_string(), "+");
    assert_eq!(Quantifier::at_least(2).unwrap().to_string(), "{2,}");
    assert_eq!(Quantifier::at_least(3).unwrap().to_string(), "{3,}");
    assert_eq!(Quantifier::at_least(0).unwrap(), Quantifier::zero_or_more());
    assert_eq!(Quantifier::at_least(1).unwrap(), Quantifier::one_or_more());
}

#[test]
fn test_at_least_rejects_negative() {
    let err = Quantifier::at_least(-1).unwrap_err();
    assert_eq!(err, rejected("count", Constraint::NonNegative));
    assert_eq!(err.to_string(), "count must be non-negative");
}

#[test]
fn test_at_most() {
    assert_eq!(Quantifier::at_most(1).unwrap().to_string(), "?");
    assert_eq!(Quantifier::at_most(2).unwrap().to_string(), "{,2}");
    assert_eq!(Quantifier::at_most(3).unwrap().to_string(), "{,3}");
    assert_eq!(Quantifier::at_most(1).unwrap(), Quantifier::optional());
}

#[test]
fn test_at_most_rejects_non_positive() {
    for count in [0, -1] {
        let err = Quantifier::at_most(count).unwrap_err();
        assert_eq!(err.to_string(), "count must be greater than zero");
    }
}

#[test]
fn test_range() {
    assert_eq!(Quantifier::range(0, 1).unwrap().to_string(), "?");
    assert_eq!(Quantifier::range(1, 1).unwrap().to_string(), "");
    assert_eq!(Quantifier::range(5, 5).unwrap().to_string(), "{5}");
    assert_eq!(Quantifier::range(0, 4).unwrap().to_string(), "{,4}");
    assert_eq!(Quantifier::range(1, 2).unwrap().to_string(), "{1,2}");
    assert_eq!(Quantifier::range(3, 10).unwrap().to_string(), "{3,10}");
}

#[test]
fn test_range_matches_other_factories() {
    assert_eq!(Quantifier::range(0, 1), Ok(Quantifier::optional()));
    assert_eq!(Quantifier::range(0, 7), Quantifier::at_most(7));
    for count in 1..5 {
        assert_eq!(Quantifier::range(count, count), Quantifier::exactly(count));
    }
}

#[test]
fn test_range_rejects_negative_min() {
    let err = Quantifier::range(-1, 0).unwrap_err();
    assert_eq!(err, rejected("min", Constraint::NonNegative));
    assert_eq!(err.to_string(), "min must be non-negative");
}

#[test]
fn test_range_rejects_negative_max() {
    let err = Quantifier::range(0, -1).unwrap_err();
    assert_eq!(err, rejected("max", Constraint::NonNegative));
    assert_eq!(err.to_string(), "max must be non-negative");
}

#[test]
fn test_range_rejects_max_below_min() {
    let err = Quantifier::range(5, 4).unwrap_err();
    assert_eq!(err, rejected("max", Constraint::NotLessThanMin));
    assert_eq!(err.to_string(), "max cannot be less than min");
}

#[test_log::test]
fn test_range_zero_zero_fails_like_exactly_zero() {
    let err = Quantifier::range(0, 0).unwrap_err();
    assert_eq!(err, rejected("count", Constraint::GreaterThanZero));
    assert_eq!(Quantifier::range(0, 0), Quantifier::exactly(0));
}
