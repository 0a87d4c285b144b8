//! Option type and the immutable contract shared by every engine.

use crate::errors::Result;
use crate::{ensure, Price, Rate, Real, Time, Volatility};
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value `max(φ(price − strike), 0)`.
    #[inline]
    pub fn payoff(self, price: Real, strike: Real) -> Real {
        (self.sign() * (price - strike)).max(0.0)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Market and contract parameters of a single option under Black-Scholes.
///
/// Fields are private so that a constructed contract is always valid:
/// positive spot, strike, volatility and maturity, finite rate. The rate may
/// be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionContract {
    initial_price: Price,
    strike_price: Price,
    interest_rate: Rate,
    volatility: Volatility,
    time_to_maturity: Time,
}

impl OptionContract {
    /// Create a validated contract.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`](crate::Error::InvalidParameter) if any
    /// input is non-finite or a positive quantity is `<= 0`.
    pub fn new(
        initial_price: Price,
        strike_price: Price,
        interest_rate: Rate,
        volatility: Volatility,
        time_to_maturity: Time,
    ) -> Result<Self> {
        ensure!(
            initial_price.is_finite() && initial_price > 0.0,
            "initial price must be positive, got {initial_price}"
        );
        ensure!(
            strike_price.is_finite() && strike_price > 0.0,
            "strike price must be positive, got {strike_price}"
        );
        ensure!(
            interest_rate.is_finite(),
            "interest rate must be finite, got {interest_rate}"
        );
        ensure!(
            volatility.is_finite() && volatility > 0.0,
            "volatility must be positive, got {volatility}"
        );
        ensure!(
            time_to_maturity.is_finite() && time_to_maturity > 0.0,
            "time to maturity must be positive, got {time_to_maturity}"
        );
        Ok(Self {
            initial_price,
            strike_price,
            interest_rate,
            volatility,
            time_to_maturity,
        })
    }

    /// Spot price of the underlying at inception.
    pub fn initial_price(&self) -> Price {
        self.initial_price
    }

    /// Strike price.
    pub fn strike_price(&self) -> Price {
        self.strike_price
    }

    /// Continuously compounded risk-free rate.
    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }

    /// Black-Scholes volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Time to maturity in years.
    pub fn time_to_maturity(&self) -> Time {
        self.time_to_maturity
    }

    /// Discount factor `e^(−rT)` to maturity.
    pub fn discount(&self) -> Real {
        (-self.interest_rate * self.time_to_maturity).exp()
    }

    /// Copy of this contract with a different spot.
    pub fn with_initial_price(&self, initial_price: Price) -> Result<Self> {
        Self::new(
            initial_price,
            self.strike_price,
            self.interest_rate,
            self.volatility,
            self.time_to_maturity,
        )
    }

    /// Copy of this contract with a different volatility.
    pub fn with_volatility(&self, volatility: Volatility) -> Result<Self> {
        Self::new(
            self.initial_price,
            self.strike_price,
            self.interest_rate,
            volatility,
            self.time_to_maturity,
        )
    }
}

/// Averaging discount factor `Γ(t) = (1 − e^(−r t)) / (r T)`.
///
/// This is the time-`t` weight of the running average in the reduced Asian
/// PDE. For `|r t|` below `1e-8` the series `t/T · (1 − r t / 2)` is used, which
/// also covers `r = 0` where the closed form is `0/0`.
pub fn averaging_factor(rate: Rate, t: Time, maturity: Time) -> Real {
    let x = rate * t;
    if x.abs() < 1e-8 {
        t / maturity * (1.0 - 0.5 * x)
    } else {
        -(-x).exp_m1() / (rate * maturity)
    }
}
