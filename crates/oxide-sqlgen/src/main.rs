//! oxide-sqlgen CLI
//!
//! Command-line tool that prints dialect-specific SQL.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use oxide_sqlgen::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the SQL on stdout can be piped.
    let log_level = if cli.global.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let output = oxide_sqlgen::run(&cli)?;
    print!("{output}");

    Ok(())
}
