use approx::assert_abs_diff_eq;
use asianopt::{
    compute, european_price, geometric_asian_price, solve, Error, FdsGridConfig, McConfig,
    OptionContract, OptionType,
};

#[test]
fn facade_exposes_every_engine() {
    let c = OptionContract::new(50.0, 50.0, 0.05, 0.5, 1.0).unwrap();
    let euro = european_price(&c, OptionType::Call).unwrap();
    let geo = geometric_asian_price(&c, OptionType::Call).unwrap();
    let fds = solve(&c, OptionType::Call, &FdsGridConfig::default()).unwrap();
    let mc = compute(&c, OptionType::Call, &McConfig::default()).unwrap();

    assert_abs_diff_eq!(euro, 10.896_302_106_433_417, epsilon = 1e-10);
    assert!(geo < fds && fds < euro);
    assert!((mc.price - fds).abs() < 4.0 * mc.conf95 + 0.1);
}

#[test]
fn facade_errors_are_core_errors() {
    let err = OptionContract::new(-1.0, 50.0, 0.05, 0.5, 1.0).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
    assert!(asianopt::core::averaging_factor(0.0, 1.0, 1.0) == 1.0);
}
