//! `asian` — price Asian options and compare pricing methods.
//!
//! # Commands
//!
//! - `asian price` — finite-difference, Monte Carlo and European prices of
//!   one contract
//! - `asian sweep-volatility` / `asian sweep-spot` — compare methods or
//!   option styles along a parameter
//! - `asian parity` — put-call parity of the finite-difference engine
//!
//! Logs go to stderr and honour `RUST_LOG`; results go to stdout.

use asian_cli::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

use commands::{ParityArgs, PriceArgs, SweepArgs};

/// Asian option pricing by finite differences and control-variate Monte Carlo
#[derive(Parser)]
#[command(name = "asian")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Sweep configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one contract with every engine
    Price(PriceArgs),
    /// Sweep the volatility
    SweepVolatility(SweepArgs),
    /// Sweep the initial price
    SweepSpot(SweepArgs),
    /// Check put-call parity of the finite-difference prices
    Parity(ParityArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "info,asian=debug,asian_cli=debug" } else { "info" })
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(config = ?cli.config, output = ?cli.output, "starting");

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Price(args) => commands::price::run(&args, config, cli.output),
        Commands::SweepVolatility(args) => {
            commands::sweep::run(&args, asian_cli::SweepParameter::Volatility, config, cli.output)
        }
        Commands::SweepSpot(args) => {
            commands::sweep::run(&args, asian_cli::SweepParameter::InitialPrice, config, cli.output)
        }
        Commands::Parity(args) => commands::parity::run(&args, config, cli.output),
    };

    match result {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
