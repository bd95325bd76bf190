use std::fmt;

use thiserror::Error;

/// The first input check that failed, in the fixed order forward, strike,
/// standard deviation, discount factor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("forward is <= 0")]
    ForwardNonPositive,
    #[error("strike is <= 0")]
    StrikeNonPositive,
    #[error("standard deviation is <= 0")]
    StandardDeviationNonPositive,
    #[error("discount factor is <= 0")]
    DiscountFactorNonPositive,
}

/// Outcome of the most recent input check. Any mutation of a parameter
/// resets this to `NotYetChecked` so a stale "no errors" can never be
/// mistaken for a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    NotYetChecked,
    Ok,
    Invalid(ParameterError),
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationStatus::NotYetChecked => {
                write!(f, "error checking has not happened, call is_ok() first")
            }
            ValidationStatus::Ok => write!(f, "no errors"),
            ValidationStatus::Invalid(err) => write!(f, "{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_field() {
        assert_eq!(
            ValidationStatus::Invalid(ParameterError::StrikeNonPositive).to_string(),
            "strike is <= 0"
        );
        assert_eq!(ValidationStatus::Ok.to_string(), "no errors");
    }
}
