use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bigi")]
#[command(about = "Arbitrary-precision BigInt calculator", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./bigi.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an operand with BigInt(operand)
    Construct {
        /// Operand, e.g. 42n, 4.5, "0x2a", true, {}, box(7n)
        #[arg(allow_hyphen_values = true)]
        operand: String,
    },
    /// Parse text leniently: sign, 0x prefix, trailing junk ignored
    Parse {
        /// Text to parse
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Radix (2-36); 0x is auto-detected when omitted
        #[arg(short, long)]
        radix: Option<u32>,
    },
    /// Print BigInt(operand).toString(radix)
    Format {
        #[arg(allow_hyphen_values = true)]
        operand: String,
        /// Radix (2-36); defaults to the configured radix
        #[arg(short, long)]
        radix: Option<u32>,
    },
    /// Apply a unary operator: - + ~ ! ++ -- (write `-- --` for decrement)
    Unary {
        #[arg(allow_hyphen_values = true)]
        op: String,
        #[arg(allow_hyphen_values = true)]
        operand: String,
    },
    /// Apply a binary operator, equality or comparison
    Binary {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(allow_hyphen_values = true)]
        op: String,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
}
