use std::fmt;

use crate::error::{ParameterError, ValidationStatus};

/// The exercise direction of a futures option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// The unitless inputs of the Black '76 formula: a discount factor instead of
/// an interest rate, and the total standard deviation over the option's life
/// (vola * sqrt(time)) instead of a volatility, so that no calendar or
/// compounding conventions leak into the formula.
#[derive(Debug, Clone)]
pub struct Black76Parameters {
    forward: f64,
    strike: f64,
    standard_deviation: f64,
    discount_factor: f64,
    validation: ValidationStatus,
}

impl Black76Parameters {
    pub fn new(forward: f64, strike: f64, standard_deviation: f64, discount_factor: f64) -> Self {
        Self {
            forward,
            strike,
            standard_deviation,
            discount_factor,
            validation: ValidationStatus::NotYetChecked,
        }
    }

    /// Overwrites all four inputs at once and marks the validation state stale.
    pub fn set_parameters(
        &mut self,
        forward: f64,
        strike: f64,
        standard_deviation: f64,
        discount_factor: f64,
    ) {
        self.forward = forward;
        self.strike = strike;
        self.standard_deviation = standard_deviation;
        self.discount_factor = discount_factor;
        self.validation = ValidationStatus::NotYetChecked;
    }

    pub fn forward(&self) -> f64 {
        self.forward
    }

    pub fn set_forward(&mut self, forward: f64) {
        self.forward = forward;
        self.validation = ValidationStatus::NotYetChecked;
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn set_strike(&mut self, strike: f64) {
        self.strike = strike;
        self.validation = ValidationStatus::NotYetChecked;
    }

    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    pub fn set_standard_deviation(&mut self, standard_deviation: f64) {
        self.standard_deviation = standard_deviation;
        self.validation = ValidationStatus::NotYetChecked;
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    pub fn set_discount_factor(&mut self, discount_factor: f64) {
        self.discount_factor = discount_factor;
        self.validation = ValidationStatus::NotYetChecked;
    }

    /// Checks the inputs in the fixed order forward, strike, standard
    /// deviation, discount factor and records the first failure. Returns true
    /// iff all four are > 0.
    pub fn check(&mut self) -> bool {
        self.validation = if self.forward <= 0.0 {
            ValidationStatus::Invalid(ParameterError::ForwardNonPositive)
        } else if self.strike <= 0.0 {
            ValidationStatus::Invalid(ParameterError::StrikeNonPositive)
        } else if self.standard_deviation <= 0.0 {
            ValidationStatus::Invalid(ParameterError::StandardDeviationNonPositive)
        } else if self.discount_factor <= 0.0 {
            ValidationStatus::Invalid(ParameterError::DiscountFactorNonPositive)
        } else {
            ValidationStatus::Ok
        };
        self.validation == ValidationStatus::Ok
    }

    /// Outcome of the most recent check(), or the staleness sentinel if a
    /// parameter has been mutated since.
    pub fn validation(&self) -> ValidationStatus {
        self.validation
    }
}
