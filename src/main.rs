use crate::app_config::{AppConfig, AppConfigError, ENV_PREFIX};
use crate::hnap::{FetchError, ModemClientError};
use config::Environment;
use std::future::Future;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

mod app_config;
mod hnap;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match run(Environment::with_prefix(ENV_PREFIX), shutdown_signal()).await {
        Ok(downstream_channel) => {
            println!("{}", format_channel(&downstream_channel));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads the configuration, queries the modem once and returns its downstream channel.
#[instrument(skip_all)]
async fn run<F>(environment: Environment, cancelled: F) -> Result<String, AppError>
where
    F: Future<Output = ()>,
{
    let modem_config = AppConfig::load(environment)?;
    info!(address = modem_config.address(), "✅  Loaded configuration");

    let client = hnap::new_client(&modem_config)?;
    let envelope = hnap::fetch(&client, &hnap::Config::from(&modem_config), cancelled).await?;

    Ok(envelope.downstream_channel().to_owned())
}

/// Renders the channel quoted and escaped, the way the modem value is reported on stdout.
fn format_channel(downstream_channel: &str) -> String {
    format!("{:?}", downstream_channel)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("⚠️ Unable to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("🛑 Received Ctrl-C");
}

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Config(#[from] AppConfigError),
    #[error("unable to create the modem client: {0}")]
    Client(#[from] ModemClientError),
    #[error("unable to retrieve the modem status: {0}")]
    Fetch(#[from] FetchError),
}
