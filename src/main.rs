//! token-swap: interactive constant-product AMM simulator.
//!
//! Builds a pool from defaults, an optional TOML file, and command-line
//! overrides (in that order of precedence, lowest first), then runs the
//! menu session on stdin/stdout.  Logs go to stderr.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use token_swap::chart::{CurveChart, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use token_swap::config::PoolConfig;
use token_swap::pools::ConstantProductPool;
use token_swap::session::{Session, SessionEnd};
use token_swap::traits::FromConfig;

#[derive(Parser)]
#[command(name = "token-swap")]
#[command(about = "Constant-product AMM simulator with LP fee sharing", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML file with reserve_x, reserve_y, fee_rate, lp_share
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial reserve of token X
    #[arg(long)]
    reserve_x: Option<f64>,

    /// Initial reserve of token Y
    #[arg(long)]
    reserve_y: Option<f64>,

    /// Fraction of each swap input taken as fee, in [0, 1)
    #[arg(long)]
    fee_rate: Option<f64>,

    /// Fraction of each fee credited to liquidity providers, in [0, 1]
    #[arg(long)]
    lp_share: Option<f64>,

    /// Do not draw the curve chart with status reports
    #[arg(long)]
    no_chart: bool,

    /// Chart width in columns
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    chart_width: usize,

    /// Chart height in rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    chart_height: usize,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn pool_config(&self) -> Result<PoolConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                PoolConfig::from_toml_str(&text)
                    .with_context(|| format!("loading config file {}", path.display()))?
            }
            None => PoolConfig::default(),
        };

        if let Some(v) = self.reserve_x {
            config = config.with_reserve_x(v);
        }
        if let Some(v) = self.reserve_y {
            config = config.with_reserve_y(v);
        }
        if let Some(v) = self.fee_rate {
            config = config.with_fee_rate(v);
        }
        if let Some(v) = self.lp_share {
            config = config.with_lp_share(v);
        }

        config.validate().context("invalid pool configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = cli.pool_config()?;
    let pool = ConstantProductPool::from_config(&config).context("creating pool")?;

    let chart = (!cli.no_chart).then(|| CurveChart::new(cli.chart_width, cli.chart_height));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(pool, stdin.lock(), stdout.lock()).with_chart(chart);

    let end = session.run().context("session failed")?;
    if end == SessionEnd::EndOfInput {
        info!("input closed before exit was chosen");
    }
    Ok(())
}
