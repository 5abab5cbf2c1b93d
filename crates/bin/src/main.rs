mod cli;
mod commands;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{cli::Cli, commands::Outcome};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("deeptree=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match commands::run(&cli)? {
        Outcome::Text(text) => {
            if !text.is_empty() {
                println!("{text}");
            }
        }
        Outcome::Missing(key) => {
            eprintln!("no value at {key}");
            std::process::exit(1);
        }
    }
    Ok(())
}
