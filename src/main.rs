use clap::Parser;
use tracing::{error, info};

use korean_shop_lib::bootstrap::tracing::init_tracing_subscriber;
use korean_shop_lib::bootstrap::{load_config, resolve_data_dir, wire_dependencies};
use korean_shop_lib::{commands, Cli};
use ks_core::config::AppConfig;

const LOGS_DIR: &str = "logs";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::empty(),
    };
    if let Some(data_dir) = cli.data_dir.clone() {
        config.data_dir = Some(data_dir);
    }

    let logs_dir = resolve_data_dir(&config).ok().map(|dir| dir.join(LOGS_DIR));
    init_tracing_subscriber(logs_dir.as_deref())?;

    let deps = wire_dependencies(&config)?;

    // Ctrl-C drops the command future; a running bootstrap is cancelled with it.
    let output = tokio::select! {
        result = commands::execute(&deps, cli.command) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted");
            return Ok(());
        }
    };

    match output {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "command failed");
            Err(err)
        }
    }
}
