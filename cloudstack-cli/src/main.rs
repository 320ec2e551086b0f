//! Entry point for the `cloudstack` command-line tool.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cloudstack_cli::args::Cli;
use cloudstack_cli::runner;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match runner::execute(cli).await {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            std::process::exit(1);
        }
    }
}
