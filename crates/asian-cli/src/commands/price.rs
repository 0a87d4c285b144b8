//! `asian price`

use super::{resolve, PriceArgs};
use asian_cli::{quote_contract, render, OutputFormat, Result};
use std::path::Path;
use tracing::info;

/// Price one contract with every engine.
pub fn run(args: &PriceArgs, config: Option<&Path>, format: OutputFormat) -> Result<String> {
    let cfg = resolve(config, &args.market, &args.engine)?;
    let contract = cfg.contract()?;
    info!(?contract, "pricing");
    let quotes = quote_contract(&contract, &cfg.settings())?;
    render(&quotes, format)
}
