//! TOML description of a contract, its engine settings and sweep axes.
//!
//! Every section and field is optional; missing values fall back to the
//! reference setup `S₀ = K = 50`, `r = 5%`, `σ = 50%`, `T = 1` with a
//! 500 × 1000 grid and 1000 paths of 500 steps.
//!
//! ```toml
//! [contract]
//! initial_price = 50.0
//! volatility = 0.3
//!
//! [fds]
//! lookup = "linear"
//!
//! [monte_carlo]
//! paths = 5000
//! seed = 7
//!
//! [sweep]
//! volatilities = [0.1, 0.2, 0.3]
//! ```

use crate::compare::CompareSettings;
use crate::error::{CliError, Result};
use asian_core::{OptionContract, Real, Size};
use asian_pricingengines::{FdsGridConfig, McConfig, TerminalLookup};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contract parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractSection {
    /// Spot price S₀.
    pub initial_price: Real,
    /// Strike K.
    pub strike_price: Real,
    /// Risk-free rate r.
    pub interest_rate: Real,
    /// Volatility σ.
    pub volatility: Real,
    /// Maturity T in years.
    pub time_to_maturity: Real,
}

impl Default for ContractSection {
    fn default() -> Self {
        Self {
            initial_price: 50.0,
            strike_price: 50.0,
            interest_rate: 0.05,
            volatility: 0.5,
            time_to_maturity: 1.0,
        }
    }
}

/// Terminal lookup rule as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupSetting {
    /// `"nearest-node"`
    #[default]
    NearestNode,
    /// `"linear"`
    Linear,
}

impl From<LookupSetting> for TerminalLookup {
    fn from(l: LookupSetting) -> Self {
        match l {
            LookupSetting::NearestNode => TerminalLookup::NearestNode,
            LookupSetting::Linear => TerminalLookup::Linear,
        }
    }
}

/// Finite-difference grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FdsSection {
    /// Time steps.
    pub time_partition_size: Size,
    /// Spatial intervals.
    pub spatial_partition_size: Size,
    /// Half-width of the spatial domain.
    pub spatial_size: Real,
    /// Terminal lookup rule.
    pub lookup: LookupSetting,
}

impl Default for FdsSection {
    fn default() -> Self {
        let d = FdsGridConfig::default();
        Self {
            time_partition_size: d.time_partition_size,
            spatial_partition_size: d.spatial_partition_size,
            spatial_size: d.spatial_size,
            lookup: LookupSetting::NearestNode,
        }
    }
}

/// Monte Carlo size and base seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct McSection {
    /// Time steps per path.
    pub time_steps: Size,
    /// Number of paths.
    pub paths: Size,
    /// Base seed.
    pub seed: u64,
}

impl Default for McSection {
    fn default() -> Self {
        let d = McConfig::default();
        Self {
            time_steps: d.time_steps,
            paths: d.paths,
            seed: d.seed,
        }
    }
}

/// Sweep axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepSection {
    /// Volatilities for `sweep-volatility`.
    pub volatilities: Vec<Real>,
    /// Spot prices for `sweep-spot`.
    pub initial_prices: Vec<Real>,
}

impl Default for SweepSection {
    fn default() -> Self {
        Self {
            // 0.1, 0.2, ..., 4.9; past 1.5 this needs fds.spatial_size > 3
            volatilities: (1..50).map(|i| i as Real / 10.0).collect(),
            // 10, 15, ..., 95
            initial_prices: (0..18).map(|i| 10.0 + 5.0 * i as Real).collect(),
        }
    }
}

/// A complete sweep description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Base contract.
    pub contract: ContractSection,
    /// Finite-difference settings.
    pub fds: FdsSection,
    /// Monte Carlo settings.
    pub monte_carlo: McSection,
    /// Sweep axes.
    pub sweep: SweepSection,
}

impl SweepConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The validated base contract.
    pub fn contract(&self) -> asian_core::Result<OptionContract> {
        let c = &self.contract;
        OptionContract::new(
            c.initial_price,
            c.strike_price,
            c.interest_rate,
            c.volatility,
            c.time_to_maturity,
        )
    }

    /// Finite-difference grid.
    pub fn fds(&self) -> FdsGridConfig {
        let f = &self.fds;
        FdsGridConfig::new(f.time_partition_size, f.spatial_partition_size)
            .with_spatial_size(f.spatial_size)
            .with_lookup(f.lookup.into())
    }

    /// Engine settings for the comparison drivers.
    pub fn settings(&self) -> CompareSettings {
        let mc = &self.monte_carlo;
        CompareSettings {
            fds: self.fds(),
            mc: McConfig::new(mc.time_steps, mc.paths).with_seed(mc.seed),
        }
    }
}
