use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use payee_cli::session::{Answers, run_session};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Income tax calculator for a single payee.
///
/// Prompts for a name, an income amount, and a tax percent, then applies a
/// flat tax to the income above the fixed base amount and prints a summary.
/// Each flag pre-answers its prompt; prompts without a flag are asked
/// interactively.
#[derive(Debug, Parser)]
struct Cli {
    /// Payee name (skips the name prompt).
    #[arg(long)]
    name: Option<String>,

    /// Income amount (skips the income prompt).
    #[arg(long)]
    income: Option<String>,

    /// Tax percent, e.g. 10 for 10% (skips the percent prompt).
    #[arg(long)]
    tax_percent: Option<String>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let answers = Answers {
        name: cli.name,
        income: cli.income,
        tax_percent: cli.tax_percent,
    };

    let stdin = io::stdin();
    run_session(&mut stdin.lock(), &mut io::stdout(), answers)
}
