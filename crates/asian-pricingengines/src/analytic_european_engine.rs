//! Analytic European option engine (Black-Scholes).
//!
//! Provides the closed-form baseline the Asian engines are compared against.
//!
//! $$C = S N(d_1) - K e^{-rT} N(d_2)$$
//! $$P = K e^{-rT} N(-d_2) - S N(-d_1)$$
//!
//! where $d_{1,2} = \frac{\ln(S/K) + (r \pm \sigma^2/2)T}{\sigma\sqrt{T}}$.

use asian_core::{fail, OptionContract, OptionType, Price, Rate, Real, Result, Time, Volatility};
use asian_math::normal_cdf;

/// Black-Scholes price of a European option on a non-dividend-paying asset.
///
/// Inputs are taken as given; use [`european_price`] for a validated
/// contract.
pub fn black_scholes(
    option_type: OptionType,
    spot: Price,
    strike: Price,
    rate: Rate,
    volatility: Volatility,
    maturity: Time,
) -> Real {
    let phi = option_type.sign();
    let std_dev = volatility * maturity.sqrt();
    let df = (-rate * maturity).exp();

    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * maturity) / std_dev;
    let d2 = d1 - std_dev;

    phi * (spot * normal_cdf(phi * d1) - strike * df * normal_cdf(phi * d2))
}

/// European call or put price for `contract`.
///
/// # Errors
/// `Runtime` if the closed form evaluates to a non-finite number.
pub fn european_price(contract: &OptionContract, option_type: OptionType) -> Result<Price> {
    let price = black_scholes(
        option_type,
        contract.initial_price(),
        contract.strike_price(),
        contract.interest_rate(),
        contract.volatility(),
        contract.time_to_maturity(),
    );
    if !price.is_finite() {
        fail!("European {option_type} price is not finite: {price}");
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn bs_reference_prices() {
        let call = black_scholes(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
        let put = black_scholes(OptionType::Put, 100.0, 100.0, 0.05, 0.20, 1.0);
        assert_abs_diff_eq!(call, 10.450_583_572_185_565, epsilon = 1e-10);
        assert_abs_diff_eq!(put, 5.573_526_022_256_971, epsilon = 1e-10);
    }

    #[test]
    fn contract_prices() {
        let c = OptionContract::new(50.0, 50.0, 0.05, 0.5, 1.0).unwrap();
        let call = european_price(&c, OptionType::Call).unwrap();
        let put = european_price(&c, OptionType::Put).unwrap();
        assert_abs_diff_eq!(call, 10.896_302_106_433_417, epsilon = 1e-10);
        assert_abs_diff_eq!(put, 8.457_773_331_469_124, epsilon = 1e-10);
    }

    #[test]
    fn put_call_parity() {
        for (s, k, r, sigma, t) in [
            (100.0, 105.0, 0.08, 0.25, 0.5),
            (40.0, 50.0, 0.0, 0.4, 2.0),
            (60.0, 50.0, -0.01, 0.3, 1.5),
        ] {
            let call = black_scholes(OptionType::Call, s, k, r, sigma, t);
            let put = black_scholes(OptionType::Put, s, k, r, sigma, t);
            assert_abs_diff_eq!(call - put, s - k * (-r * t).exp(), epsilon = 1e-10);
        }
    }

    #[test]
    fn longer_maturity_is_worth_more() {
        // Catches a σ/√T standard deviation, which shrinks with maturity.
        let short = black_scholes(OptionType::Call, 50.0, 50.0, 0.0, 0.3, 1.0);
        let long = black_scholes(OptionType::Call, 50.0, 50.0, 0.0, 0.3, 4.0);
        assert!(long > short, "long {long} <= short {short}");
        assert_abs_diff_eq!(long / short, 1.96, epsilon = 0.05);
    }

    #[test]
    fn deep_moneyness_limits() {
        let itm = black_scholes(OptionType::Call, 200.0, 100.0, 0.05, 0.20, 1.0);
        assert!(itm > 100.0);
        let otm = black_scholes(OptionType::Put, 200.0, 100.0, 0.05, 0.20, 1.0);
        assert!(otm < 0.01);
    }

    proptest! {
        #[test]
        fn parity_and_bounds_hold(
            s in 5.0f64..200.0,
            k in 5.0f64..200.0,
            r in -0.05f64..0.15,
            sigma in 0.05f64..1.5,
            t in 0.05f64..5.0,
        ) {
            let call = black_scholes(OptionType::Call, s, k, r, sigma, t);
            let put = black_scholes(OptionType::Put, s, k, r, sigma, t);
            prop_assert!(call >= -1e-10 && call <= s + 1e-10);
            prop_assert!(put >= -1e-10);
            let parity = s - k * (-r * t).exp();
            prop_assert!((call - put - parity).abs() < 1e-8 * (1.0 + s + k));
        }
    }
}
