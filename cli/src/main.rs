use std::path::Path;

use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::commands::{convert, eval};
use cli::config::{Config, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, source) = Config::resolve(cli.config.as_deref(), Path::new("."))?;
    let settings = Settings::new(&config, cli.json);
    if cli.verbose {
        match &source {
            Some(path) => eprintln!("config: {}", path.display()),
            None => eprintln!("config: defaults"),
        }
        eprintln!("radix: {}, format: {:?}", settings.radix, settings.format);
    }

    let output = match &cli.command {
        Commands::Construct { operand } => convert::construct_command(operand, &settings),
        Commands::Parse { text, radix } => convert::parse_command(text, *radix, &settings),
        Commands::Format { operand, radix } => {
            convert::format_command(operand, *radix, &settings)
        }
        Commands::Unary { op, operand } => eval::unary_command(op, operand, &settings),
        Commands::Binary { lhs, op, rhs } => eval::binary_command(lhs, op, rhs, &settings),
    }?;
    println!("{output}");
    Ok(())
}
