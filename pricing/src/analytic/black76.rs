use crate::common::models::{Black76Parameters, OptionType};
use probability::distribution::{Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

/// N(d1) and N(d2) under the current parameters, recomputed on every pricing
/// call so a parameter mutation is always reflected by the next value() or
/// delta(). Both are NaN if any input is non-positive, which guards the log
/// and the division by the standard deviation.
fn intermediates(params: &Black76Parameters) -> (f64, f64) {
    if params.forward() <= 0.0
        || params.strike() <= 0.0
        || params.standard_deviation() <= 0.0
        || params.discount_factor() <= 0.0
    {
        return (f64::NAN, f64::NAN);
    }
    let sd = params.standard_deviation();
    let d1 = (params.forward() / params.strike()).ln() / sd + sd / 2.0;
    let d2 = d1 - sd;
    (cdf(d1), cdf(d2))
}

/// European option on a future under the Black '76 model.
/// https://en.wikipedia.org/wiki/Black_model
///
/// Calls and puts are separate types behind this trait so no caller has to
/// branch on a put/call flag at pricing time. Invalid inputs are never raised
/// as errors from the numeric methods: value() and delta() degrade to NaN,
/// and is_ok() is the opt-in channel for a human-readable diagnosis.
pub trait FuturesOption {
    fn option_type(&self) -> OptionType;

    fn params(&self) -> &Black76Parameters;

    fn params_mut(&mut self) -> &mut Black76Parameters;

    fn forward(&self) -> f64 {
        self.params().forward()
    }

    fn set_forward(&mut self, forward: f64) {
        self.params_mut().set_forward(forward)
    }

    fn strike(&self) -> f64 {
        self.params().strike()
    }

    fn set_strike(&mut self, strike: f64) {
        self.params_mut().set_strike(strike)
    }

    fn standard_deviation(&self) -> f64 {
        self.params().standard_deviation()
    }

    fn set_standard_deviation(&mut self, standard_deviation: f64) {
        self.params_mut().set_standard_deviation(standard_deviation)
    }

    fn discount_factor(&self) -> f64 {
        self.params().discount_factor()
    }

    fn set_discount_factor(&mut self, discount_factor: f64) {
        self.params_mut().set_discount_factor(discount_factor)
    }

    /// Overwrites all four inputs at once; the validation state goes stale
    /// exactly as with the single-field setters.
    fn set_parameters(
        &mut self,
        forward: f64,
        strike: f64,
        standard_deviation: f64,
        discount_factor: f64,
    ) {
        self.params_mut()
            .set_parameters(forward, strike, standard_deviation, discount_factor)
    }

    /// Present value under the current parameters; NaN if any input is <= 0.
    fn value(&self) -> f64;

    /// Sensitivity of the value with respect to the forward; NaN if any
    /// input is <= 0.
    fn delta(&self) -> f64;

    /// Intrinsic value against a realized settlement rate. A function of the
    /// strike and the settlement rate only; the standard deviation and
    /// discount factor play no role here.
    fn payoff(&self, settlement_rate: f64) -> f64;

    /// Recommended, but optional, after construction or any mutation. If it
    /// is never called, pricing silently yields NaN for invalid inputs.
    fn is_ok(&mut self) -> bool {
        self.params_mut().check()
    }

    /// Diagnostic of the most recent is_ok() call, prefixed with the variant,
    /// or a staleness sentinel if no check has run since the last mutation.
    fn error_message(&self) -> String {
        format!(
            "black76 {} option: {}",
            self.option_type(),
            self.params().validation()
        )
    }
}

/// The call option: the right to buy the future at the strike.
pub struct Black76Call {
    params: Black76Parameters,
}

impl Black76Call {
    pub fn new(forward: f64, strike: f64, standard_deviation: f64, discount_factor: f64) -> Self {
        Self {
            params: Black76Parameters::new(forward, strike, standard_deviation, discount_factor),
        }
    }
}

impl FuturesOption for Black76Call {
    fn option_type(&self) -> OptionType {
        OptionType::Call
    }

    fn params(&self) -> &Black76Parameters {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Black76Parameters {
        &mut self.params
    }

    fn value(&self) -> f64 {
        let (nd1, nd2) = intermediates(&self.params);
        self.params.discount_factor() * (self.params.forward() * nd1 - self.params.strike() * nd2)
    }

    fn delta(&self) -> f64 {
        let (nd1, _) = intermediates(&self.params);
        nd1 * self.params.discount_factor()
    }

    fn payoff(&self, settlement_rate: f64) -> f64 {
        (settlement_rate - self.params.strike()).max(0.0)
    }
}

/// The put option: the right to sell the future at the strike.
pub struct Black76Put {
    params: Black76Parameters,
}

impl Black76Put {
    pub fn new(forward: f64, strike: f64, standard_deviation: f64, discount_factor: f64) -> Self {
        Self {
            params: Black76Parameters::new(forward, strike, standard_deviation, discount_factor),
        }
    }
}

impl FuturesOption for Black76Put {
    fn option_type(&self) -> OptionType {
        OptionType::Put
    }

    fn params(&self) -> &Black76Parameters {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Black76Parameters {
        &mut self.params
    }

    fn value(&self) -> f64 {
        let (nd1, nd2) = intermediates(&self.params);
        let df = self.params.discount_factor();
        // evaluated as df * (X - F) plus the call value, so put/call parity
        // holds within rounding of the sum
        let call_value = df * (self.params.forward() * nd1 - self.params.strike() * nd2);
        df * (self.params.strike() - self.params.forward()) + call_value
    }

    fn delta(&self) -> f64 {
        let (nd1, _) = intermediates(&self.params);
        (nd1 - 1.0) * self.params.discount_factor()
    }

    fn payoff(&self, settlement_rate: f64) -> f64 {
        (self.params.strike() - settlement_rate).max(0.0)
    }
}
