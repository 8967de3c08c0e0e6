use anyhow::Result;
use clap::Parser;
use composite_pricing::{
    cli::{Args, CliApp},
    utils::Config,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        "Configuration loaded for {} environment",
        config.environment
    );

    CliApp::new(config).run(args)
}
