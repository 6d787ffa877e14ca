use crate::{Constraint, Error, Quantifier};

#[test]
fn test_constraint_display() {
    assert_eq!(Constraint::GreaterThanZero.to_string(), "must be greater than zero");
    assert_eq!(Constraint::NonNegative.to_string(), "must be non-negative");
    assert_eq!(Constraint::NotLessThanMin.to_string(), "cannot be less than min");
}

#[test]
fn test_error_names_parameter() {
    assert_eq!(Quantifier::exactly(0).unwrap_err().parameter(), "count");
    assert_eq!(Quantifier::range(-3, 2).unwrap_err().parameter(), "min");
    assert_eq!(Quantifier::range(2, -3).unwrap_err().parameter(), "max");
    assert_eq!(Quantifier::range(3, 2).unwrap_err().parameter(), "max");
}

#[test]
fn test_error_converts_into_anyhow() {
    let err: anyhow::Error = Quantifier::at_most(0).unwrap_err().into();
    assert_eq!(err.to_string(), "count must be greater than zero");
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::InvalidArgument {
            constraint: Constraint::GreaterThanZero,
            ..
        })
    ));
}
