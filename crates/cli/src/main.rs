//! Paperbill command-line entry point.
//!
//! One invocation renders one invoice and writes `invoice.pdf`, reporting
//! exactly one of {written, write-failed}.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use paperbill_invoicing::compute_totals;
use paperbill_pdf::write_invoice;

/// Render a one-page invoice PDF.
#[derive(Debug, Parser)]
#[command(name = "paperbill", version, about)]
struct Args {
    /// Invoice description file (.toml or .json); omit for the built-in
    /// sample set.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target directory; omit for the platform documents directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Also print the computed totals to stdout.
    #[arg(long)]
    print_totals: bool,
}

fn main() -> ExitCode {
    paperbill_observability::init();

    match run(Args::parse()) {
        Ok(path) => {
            tracing::info!(path = %path.display(), "invoice written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "invoice write failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<PathBuf> {
    let invoice = match &args.config {
        Some(path) => config::InvoiceConfig::load(path)?.into_invoice()?,
        None => config::sample_invoice(),
    };

    if args.print_totals {
        let totals = compute_totals(invoice.items(), invoice.tax_rate());
        println!("Subtotal: ${}", totals.subtotal);
        println!("Tax ({}): ${}", totals.tax_rate, totals.tax);
        println!("Total: ${}", totals.total);
    }

    write_invoice(&invoice, args.out_dir.as_deref()).context("writing invoice document")
}
