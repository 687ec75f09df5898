use clap::Parser;
use euclid::config::{Args, SessionConfig};
use euclid::repl;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the grid
    let filter = EnvFilter::try_from_env("EUCLID_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = SessionConfig::from_args(&args)?;
    tracing::debug!(?config, "starting");

    repl::start(&config)
}
