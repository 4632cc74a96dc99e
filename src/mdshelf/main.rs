use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli
        .config()
        .prepare()
        .context("could not prepare storage root")?;
    tracing::debug!(?config, "configuration resolved");

    mdshelf::web::serve(config)
        .await
        .context("server error")?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
