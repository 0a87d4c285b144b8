//! End-to-end sweeps driven by a TOML description.

use approx::assert_abs_diff_eq;
use asian_cli::compare::{
    CVMC_CALL, CVMC_CALL_CONF95, CVMC_PUT, CVMC_PUT_CONF95, EUROPEAN_PUT, FDS_CALL, FDS_PUT,
};
use asian_cli::{
    compare_methods_over_spot, compare_methods_over_volatility, compare_options_over_spot,
    render, OutputFormat, SweepConfig,
};

const SMALL: &str = r#"
[fds]
time_partition_size = 100
spatial_partition_size = 200
lookup = "linear"

[monte_carlo]
time_steps = 50
paths = 2000
seed = 1

[sweep]
volatilities = [0.3, 0.5]
initial_prices = [45.0, 50.0, 55.0]
"#;

#[test]
fn methods_agree_along_spot() {
    // Default engines, linear lookup: the grid error is far below conf95.
    let cfg = SweepConfig::from_toml_str(
        r#"
        [fds]
        lookup = "linear"

        [sweep]
        initial_prices = [45.0, 50.0, 55.0]
        "#,
    )
    .unwrap();
    let base = cfg.contract().unwrap();
    let set = compare_methods_over_spot(&base, &cfg.sweep.initial_prices, &cfg.settings()).unwrap();

    for (fds_key, mc_key, conf_key) in [
        (FDS_CALL, CVMC_CALL, CVMC_CALL_CONF95),
        (FDS_PUT, CVMC_PUT, CVMC_PUT_CONF95),
    ] {
        let (fds, mc, conf) = (
            set.get(fds_key).unwrap(),
            set.get(mc_key).unwrap(),
            set.get(conf_key).unwrap(),
        );
        for i in 0..3 {
            let (f, m, c) = (fds[i].unwrap(), mc[i].unwrap(), conf[i].unwrap());
            assert!((f - m).abs() <= 2.0 * c, "{fds_key} point {i}: {f} vs {m} ± {c}");
        }
    }
    let fds = set.get(FDS_CALL).unwrap();
    assert!(fds.windows(2).all(|w| w[0] < w[1]));
    let puts = set.get(FDS_PUT).unwrap();
    assert!(puts.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn put_prices_follow_volatility() {
    let cfg = SweepConfig::from_toml_str(SMALL).unwrap();
    let base = cfg.contract().unwrap();
    let set =
        compare_methods_over_volatility(&base, &cfg.sweep.volatilities, &cfg.settings()).unwrap();
    let puts = set.get(CVMC_PUT).unwrap();
    assert!(puts[0].unwrap() < puts[1].unwrap());
}

#[test]
fn options_sweep_renders_every_format() {
    let cfg = SweepConfig::from_toml_str(SMALL).unwrap();
    let base = cfg.contract().unwrap();
    let set = compare_options_over_spot(&base, &[10.0, 50.0], &cfg.fds()).unwrap();

    let csv = render(&set, OutputFormat::Csv).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("initial_price,Asian call,Asian put,European call,European put")
    );
    assert!(lines.next().unwrap().starts_with("10,,,"));

    let json: serde_json::Value =
        serde_json::from_str(&render(&set, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["parameter"], "initial_price");
    assert_eq!(json["series"].as_array().unwrap().len(), 4);

    let table = render(&set, OutputFormat::Table).unwrap();
    assert!(table.contains("European put"));

    // Deep in-the-money European put at S₀ = 10: K e^(−rT) − S₀ plus a little.
    let put = set.get(EUROPEAN_PUT).unwrap()[0].unwrap();
    assert_abs_diff_eq!(put, 50.0 * (-0.05_f64).exp() - 10.0, epsilon = 1e-2);
}
