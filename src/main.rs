use clap::Parser;
use eyre::Result;
use log::{debug, info};

mod cli;

use cli::Cli;

fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // Config file is optional; CLI flags take priority
    let file_config = ytsum::config::FileConfig::load().unwrap_or_default();
    let config_path = ytsum::config::config_path();
    if config_path.exists() {
        debug!("Config: {}", config_path.display());
    }

    let config = ytsum::config::Config::resolve(file_config, cli.bind, cli.port, cli.model)?;

    let state = ytsum::server::AppState::new(config.clone());
    let app = ytsum::server::router(state);

    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr} (model: {})", config.model);
    axum::serve(listener, app).await?;

    Ok(())
}
