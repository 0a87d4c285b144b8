//! `asian parity`

use super::{resolve, ParityArgs};
use asian_cli::{check_put_call_parity, render, OutputFormat, Result};
use std::path::Path;
use tracing::warn;

/// Check put-call parity of the finite-difference engine.
pub fn run(args: &ParityArgs, config: Option<&Path>, format: OutputFormat) -> Result<String> {
    let cfg = resolve(config, &args.market, &args.engine)?;
    let contract = cfg.contract()?;
    let check = check_put_call_parity(&contract, &cfg.fds(), args.tolerance)?;
    if !check.holds {
        warn!(
            deviation = check.deviation,
            tolerance = check.tolerance,
            "put-call parity outside tolerance"
        );
    }
    render(&check, format)
}
