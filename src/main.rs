use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use hf_space_secrets::app::App;
use hf_space_secrets::cli::Cli;
use hf_space_secrets::constants;
use hf_space_secrets::error::format_error_chain;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::app::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("hf_space_secrets=debug")
        } else {
            EnvFilter::new("hf_space_secrets=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = App::run(cli).await {
        eprintln!("Error: {}", format_error_chain(&e));
        std::process::exit(1);
    }
}
