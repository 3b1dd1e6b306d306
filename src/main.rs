use anyhow::Result;
use clap::Parser;
use csv_scout::{Cli, commands};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::analyze::run(&cli)
}
