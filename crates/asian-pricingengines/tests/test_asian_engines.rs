//! Cross-engine tests for the Asian option pricers.
//!
//! Reference scenario: S₀ = K = 50, r = 5%, σ = 50%, T = 1.

use approx::assert_abs_diff_eq;
use asian_core::{averaging_factor, Error, OptionContract, OptionType};
use asian_pricingengines::{
    compute, european_price, geometric_asian_price, solve, solve_with_grid, FdsGridConfig,
    McConfig, TerminalLookup,
};

fn contract(spot: f64, vol: f64) -> OptionContract {
    OptionContract::new(spot, 50.0, 0.05, vol, 1.0).unwrap()
}

fn atm() -> OptionContract {
    contract(50.0, 0.5)
}

fn linear(n: usize) -> FdsGridConfig {
    FdsGridConfig::new(n, 2 * n).with_lookup(TerminalLookup::Linear)
}

/// `S₀·Γ(T) − K·e^(−rT)`
fn parity_target(c: &OptionContract) -> f64 {
    let t = c.time_to_maturity();
    c.initial_price() * averaging_factor(c.interest_rate(), t, t) - c.strike_price() * c.discount()
}

// ─── Finite differences ───────────────────────────────────────────────────────

#[test]
fn fds_reference_scenario() {
    let cfg = FdsGridConfig::default();
    let call = solve(&atm(), OptionType::Call, &cfg).unwrap();
    let put = solve(&atm(), OptionType::Put, &cfg).unwrap();
    assert_abs_diff_eq!(call, 6.147_636_454_723_779, epsilon = 1e-6);
    assert_abs_diff_eq!(put, 4.947_742_536_454_341, epsilon = 1e-6);

    let cfg = cfg.with_lookup(TerminalLookup::Linear);
    let call = solve(&atm(), OptionType::Call, &cfg).unwrap();
    let put = solve(&atm(), OptionType::Put, &cfg).unwrap();
    assert_abs_diff_eq!(call, 6.151_913_145_392_405, epsilon = 1e-6);
    assert_abs_diff_eq!(put, 4.942_914_733_711_255, epsilon = 1e-6);
}

#[test]
fn fds_is_deterministic() {
    let cfg = FdsGridConfig::default();
    let a = solve_with_grid(&atm(), OptionType::Call, &cfg).unwrap();
    let b = solve_with_grid(&atm(), OptionType::Call, &cfg).unwrap();
    assert_eq!(a.price.to_bits(), b.price.to_bits());
    assert_eq!(a.grid, b.grid);
}

#[test]
fn fds_put_call_parity() {
    let target = parity_target(&atm());
    assert_abs_diff_eq!(target, 1.209_104_274_250_286_4, epsilon = 1e-12);

    for cfg in [FdsGridConfig::default(), linear(200)] {
        let call = solve(&atm(), OptionType::Call, &cfg).unwrap();
        let put = solve(&atm(), OptionType::Put, &cfg).unwrap();
        let diff = call - put;
        assert!(
            (diff - target).abs() <= 0.05 * target.abs(),
            "{:?}: C − P = {diff}, expected {target}",
            cfg.lookup
        );
    }

    let cfg = linear(500);
    let call = solve(&atm(), OptionType::Call, &cfg).unwrap();
    let put = solve(&atm(), OptionType::Put, &cfg).unwrap();
    assert_abs_diff_eq!(call - put, target, epsilon = 1e-3);
}

#[test]
fn fds_call_increases_with_volatility() {
    let cfg = linear(200);
    let prices: Vec<f64> = [0.2, 0.4, 0.6]
        .iter()
        .map(|&v| solve(&contract(50.0, v), OptionType::Call, &cfg).unwrap())
        .collect();
    assert_abs_diff_eq!(prices[0], 2.873_431_997_680_075, epsilon = 1e-7);
    assert_abs_diff_eq!(prices[1], 5.051_560_913_416_746, epsilon = 1e-7);
    assert_abs_diff_eq!(prices[2], 7.222_344_498_328_049, epsilon = 1e-7);
    assert!(prices.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn fds_call_increases_with_spot() {
    let cfg = FdsGridConfig::new(200, 400);
    let prices: Vec<f64> = [40.0, 45.0, 50.0, 55.0, 60.0]
        .iter()
        .map(|&s| solve(&contract(s, 0.5), OptionType::Call, &cfg).unwrap())
        .collect();
    assert!(prices.windows(2).all(|w| w[0] < w[1]), "{prices:?}");
    assert_abs_diff_eq!(prices[0], 1.912_571_826_230_064, epsilon = 1e-7);
    assert_abs_diff_eq!(prices[4], 12.843_712_747_411_496, epsilon = 1e-7);
}

#[test]
fn fds_refinement_converges() {
    let prices: Vec<f64> = [50, 100, 200, 400]
        .iter()
        .map(|&n| solve(&atm(), OptionType::Call, &linear(n)).unwrap())
        .collect();
    let steps: Vec<f64> = prices.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    assert!(steps.windows(2).all(|w| w[1] < w[0]), "successive changes {steps:?}");
    assert!(steps[2] < 0.02);
    assert_abs_diff_eq!(prices[3], 6.150_008_007_508_35, epsilon = 1e-7);
}

#[test]
fn fds_zero_rate_matches_small_rate() {
    let cfg = linear(200);
    let zero = OptionContract::new(50.0, 50.0, 0.0, 0.5, 1.0).unwrap();
    let tiny = OptionContract::new(50.0, 50.0, 1e-9, 0.5, 1.0).unwrap();
    let small = OptionContract::new(50.0, 50.0, 1e-4, 0.5, 1.0).unwrap();

    let p0 = solve(&zero, OptionType::Call, &cfg).unwrap();
    assert!(p0.is_finite());
    assert_abs_diff_eq!(p0, 5.701_346_699_894_251, epsilon = 1e-7);
    assert_abs_diff_eq!(p0, solve(&tiny, OptionType::Call, &cfg).unwrap(), epsilon = 1e-6);
    assert_abs_diff_eq!(p0, solve(&small, OptionType::Call, &cfg).unwrap(), epsilon = 2e-3);

    // At r = 0 and S₀ = K the parity target vanishes.
    let put = solve(&zero, OptionType::Put, &cfg).unwrap();
    assert_abs_diff_eq!(p0, put, epsilon = 1e-2);
}

#[test]
fn fds_domain_too_narrow() {
    let deep_otm = contract(10.0, 0.5);
    for option_type in [OptionType::Call, OptionType::Put] {
        let err = solve(&deep_otm, option_type, &FdsGridConfig::new(20, 40)).unwrap_err();
        assert!(matches!(err, Error::DomainTooNarrow { .. }), "{err}");
    }
}

// ─── Monte Carlo ──────────────────────────────────────────────────────────────

#[test]
fn cvmc_agrees_with_fds() {
    // Both engines at their defaults; the grid price should fall inside the
    // Monte Carlo 95% interval for about 95% of seeds.
    let fds_cfg = FdsGridConfig::default();
    for option_type in [OptionType::Call, OptionType::Put] {
        let reference = solve(&atm(), option_type, &fds_cfg).unwrap();
        let inside = (0..40u64)
            .filter(|&seed| {
                let est = compute(&atm(), option_type, &McConfig::default().with_seed(seed))
                    .unwrap();
                (est.price - reference).abs() <= est.conf95
            })
            .count();
        assert!(inside >= 36, "{option_type}: FDS inside CVMC conf95 for {inside}/40 seeds");
    }
}

#[test]
fn cvmc_is_deterministic_for_a_seed() {
    let cfg = McConfig::new(50, 500).with_seed(2024);
    let a = compute(&atm(), OptionType::Put, &cfg).unwrap();
    let b = compute(&atm(), OptionType::Put, &cfg).unwrap();
    assert_eq!(a.price.to_bits(), b.price.to_bits());
    assert_eq!(a.conf95.to_bits(), b.conf95.to_bits());
}

#[test]
fn cvmc_interval_shrinks_with_paths() {
    let small = compute(&atm(), OptionType::Call, &McConfig::new(50, 1000).with_seed(3)).unwrap();
    let large = compute(&atm(), OptionType::Call, &McConfig::new(50, 4000).with_seed(3)).unwrap();
    let ratio = small.conf95 / large.conf95;
    assert!((1.6..2.5).contains(&ratio), "conf95 ratio {ratio}");
}

#[test]
fn cvmc_beats_plain_geometric_bound() {
    // Arithmetic average ≥ geometric average, so the call is worth more.
    let geo = geometric_asian_price(&atm(), OptionType::Call).unwrap();
    let est = compute(&atm(), OptionType::Call, &McConfig::new(100, 2000)).unwrap();
    assert!(est.price > geo, "{} <= {geo}", est.price);
}

#[test]
fn cvmc_zero_rate_is_finite() {
    let zero = OptionContract::new(50.0, 50.0, 0.0, 0.5, 1.0).unwrap();
    let est = compute(&zero, OptionType::Call, &McConfig::new(50, 500)).unwrap();
    assert!(est.price.is_finite() && est.conf95.is_finite());
}

// ─── Analytic baselines ───────────────────────────────────────────────────────

#[test]
fn asian_is_cheaper_than_european() {
    let cfg = linear(200);
    for option_type in [OptionType::Call, OptionType::Put] {
        let asian = solve(&atm(), option_type, &cfg).unwrap();
        let euro = european_price(&atm(), option_type).unwrap();
        assert!(asian < euro, "{option_type}: Asian {asian} >= European {euro}");
    }
}
