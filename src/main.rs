//! Coinfolio demo binary
//!
//! ```bash
//! coinfolio basics
//! coinfolio operators
//! coinfolio replay demos/bitcoin_orders.txt --label bitcoin --start 100
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coinfolio::{Amount, Portfolio, TradeOrder};

/// Crypto portfolio ledger demos
#[derive(Parser, Debug)]
#[command(name = "coinfolio")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Construction, trading, iteration and indexing
    Basics,
    /// Comparison, merging and export to trades.txt
    Operators,
    /// Validate and apply untyped orders (one `buy N` / `sell N` per line)
    Replay {
        file: PathBuf,

        /// Portfolio label
        #[arg(long, default_value = "portfolio")]
        label: String,

        /// Starting amount
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        start: Amount,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coinfolio=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coinfolio=info"))
    };

    // Demo output goes to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Basics => basics(),
        Command::Operators => operators(),
        Command::Replay { file, label, start } => {
            let portfolio = replay(&file, label, start)?;
            println!("{}", portfolio);
            println!("Balance: {}", portfolio.balance());
            println!("Trades: {:?}", portfolio.trades());
            Ok(())
        }
    }
}

fn basics() -> Result<()> {
    let btc_portfolio = Portfolio::new("bitcoin");
    let eth_portfolio = Portfolio::with_starting_amount("ethereum", 80);

    println!("{}", btc_portfolio);
    println!("{}", eth_portfolio);
    println!("{:?}", btc_portfolio);
    println!("{:?}", eth_portfolio);

    let mut btc_portfolio = Portfolio::with_starting_amount("bitcoin", 100);
    btc_portfolio.buy(100)?;
    btc_portfolio.sell(50)?;
    btc_portfolio.sell(40)?;
    btc_portfolio.buy(390)?;

    println!("{}", btc_portfolio.balance());
    println!("{}", btc_portfolio.len());

    for trade in &btc_portfolio {
        println!("{}", trade);
    }

    println!("First trade: {}", btc_portfolio.trade_at(0)?);
    println!("Trades reversed: {:?}", btc_portfolio.reversed_trades());
    Ok(())
}

fn operators() -> Result<()> {
    let mut btc_portfolio = Portfolio::new("bitcoin");
    let mut eth_portfolio = Portfolio::with_starting_amount("ethereum", 80);
    btc_portfolio.buy(100)?;

    println!("{}", btc_portfolio > eth_portfolio);
    println!("{}", btc_portfolio < eth_portfolio);
    println!("{}", btc_portfolio == eth_portfolio);
    println!("{}", btc_portfolio != eth_portfolio);

    btc_portfolio.buy(20)?;
    btc_portfolio.sell(30)?;
    eth_portfolio.buy(120)?;
    let joined_portfolio = (&btc_portfolio + &eth_portfolio)?;
    println!("{}", joined_portfolio);
    println!("Balance: {}", joined_portfolio.balance());
    println!("Trades: {:?}", joined_portfolio.trades());

    joined_portfolio.export_trades()?;
    Ok(())
}

fn replay(file: &Path, label: String, start: Amount) -> Result<Portfolio> {
    let script = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read order script {}", file.display()))?;
    let orders = TradeOrder::parse_script(&script)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    let mut portfolio = Portfolio::with_starting_amount(label, start);
    for (i, order) in orders.into_iter().enumerate() {
        portfolio
            .apply(order)
            .with_context(|| format!("order #{} ({}) rejected", i + 1, order))?;
    }
    Ok(portfolio)
}
