//! Closed form for the continuously averaged geometric Asian option.
//!
//! The geometric average of a GBM path is lognormal, so the option is a
//! Black-Scholes option on an asset with adjusted carry and volatility:
//!
//! $$q = \tfrac12\left(r - \tfrac{\sigma^2}{6}\right), \qquad \sigma_G = \sigma\sqrt{T/3}$$
//! $$d_1 = \frac{\ln(S/K) + qT + \sigma_G^2/2}{\sigma_G}, \qquad d_2 = d_1 - \sigma_G$$
//! $$C = e^{-rT}\left(S e^{qT} N(d_1) - K N(d_2)\right)$$
//! $$P = e^{-rT}\left(K N(-d_2) - S e^{qT} N(-d_1)\right)$$
//!
//! Used as the control variate of the Monte Carlo engine.

use asian_core::{fail, OptionContract, OptionType, Price, Result};
use asian_math::normal_cdf;

/// Geometric-average Asian call or put price for `contract`.
///
/// # Errors
/// `Runtime` if the closed form evaluates to a non-finite number.
pub fn geometric_asian_price(contract: &OptionContract, option_type: OptionType) -> Result<Price> {
    let s = contract.initial_price();
    let k = contract.strike_price();
    let r = contract.interest_rate();
    let sigma = contract.volatility();
    let t = contract.time_to_maturity();
    let phi = option_type.sign();

    let carry = 0.5 * (r - sigma * sigma / 6.0);
    let sigma_g = sigma * (t / 3.0).sqrt();
    let d1 = ((s / k).ln() + carry * t + 0.5 * sigma_g * sigma_g) / sigma_g;
    let d2 = d1 - sigma_g;

    let forward = s * (carry * t).exp();
    let price =
        contract.discount() * phi * (forward * normal_cdf(phi * d1) - k * normal_cdf(phi * d2));
    if !price.is_finite() {
        fail!("geometric Asian {option_type} price is not finite: {price}");
    }
    Ok(price)
}
