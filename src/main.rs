//! # Main — CLI Entry Point
//!
//! Reads a prime modulus from stdin (decimal or 0x-prefixed hexadecimal),
//! computes how many of its low-order residue bits stay statistically
//! uniform, and prints that count to stdout.
//!
//! ```bash
//! $ modbits <<< 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab
//! 253
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use modbits::{parse_modulus, useful_bits, DEFAULT_SECURITY_MARGIN};

#[derive(Parser)]
#[command(
    name = "modbits",
    about = "Count the low-order bits of a uniform mod-p residue that remain statistically uniform"
)]
struct Cli {
    /// Statistical security margin in bits: the reported bits stay within
    /// statistical distance 2^-margin of a uniform bit string
    #[arg(long, default_value_t = DEFAULT_SECURITY_MARGIN)]
    margin: u32,
}

fn main() -> Result<()> {
    // Initialize structured logging: LOG_FORMAT=json for K8s, human-readable otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read modulus from stdin")?;

    let p = parse_modulus(&line)?;
    debug!(
        bits = p.significant_bits(),
        margin = cli.margin,
        "modulus parsed"
    );

    let n = useful_bits(&p, cli.margin)?;
    println!("{}", n);
    Ok(())
}
