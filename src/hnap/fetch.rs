use crate::app_config::ModemConfig;
use crate::hnap::domain::ModemStatusEnvelope;
use crate::hnap::request::GetMultipleHnapsRequest;
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

#[derive(Debug)]
pub struct Config {
    pub url: String,
    pub timeout: Duration,
    pub require_success_status: bool,
}

impl From<&ModemConfig> for Config {
    fn from(config: &ModemConfig) -> Self {
        Config {
            url: config.endpoint(),
            timeout: config.timeout(),
            require_success_status: config.require_success_status(),
        }
    }
}

/// Sends the `GetMultipleHNAPs` request once and decodes the status envelope.
///
/// The request is abandoned as soon as `cancelled` completes or the configured
/// timeout expires. Dropping the in-flight future releases the connection.
#[instrument(skip(client, cancelled), fields(url = %config.url))]
pub async fn fetch<F>(client: &Client, config: &Config, cancelled: F) -> Result<ModemStatusEnvelope, FetchError>
where
    F: Future<Output = ()>,
{
    info!("Retrieving modem status...");

    let envelope = tokio::select! {
        biased;
        _ = cancelled => {
            warn!("⚠️ Retrieving modem status... cancelled");
            return Err(FetchError::Cancelled);
        }
        result = timeout(config.timeout, request_status(client, config)) => {
            result.map_err(|_| FetchError::TimedOut(config.timeout))??
        }
    };

    let response = &envelope.multiple_hnaps_response;
    debug!(
        result = %response.result,
        startup_sequence = %response.startup_sequence_response.result,
        connection_info = %response.connection_info_response.result,
        downstream_channel_info = %response.downstream_channel_info_response.result,
        upstream_channel_info = %response.upstream_channel_info_response.result,
        lag_status = %response.lag_status_response.result,
        "🔸 Sub-query results"
    );
    info!("Retrieving modem status... OK");

    Ok(envelope)
}

async fn request_status(client: &Client, config: &Config) -> Result<ModemStatusEnvelope, FetchError> {
    let response = client
        .post(&config.url)
        .json(&GetMultipleHnapsRequest::moto_status())
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        if config.require_success_status {
            return Err(FetchError::UnexpectedStatus(status));
        }
        warn!(status_code = %status, "⚠️ Modem answered with a non-success status, decoding the body anyway");
    }

    let body = response.bytes().await?;
    Ok(ModemStatusEnvelope::from_slice(&body)?)
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("modem responded with status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("unable to decode the modem status: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no response from the modem within {0:?}")]
    TimedOut(Duration),
    #[error("request to the modem was cancelled")]
    Cancelled,
}
