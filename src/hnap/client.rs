use crate::app_config::ModemConfig;
use crate::hnap::request::{GET_MULTIPLE_HNAPS_ACTION, SOAP_ACTION_HEADER};
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;
use tracing::warn;

pub fn new_client(config: &ModemConfig) -> Result<Client, ModemClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(SOAP_ACTION_HEADER, HeaderValue::from_static(GET_MULTIPLE_HNAPS_ACTION));

    if config.accept_invalid_certs() {
        warn!(address = config.address(), "⚠️ TLS certificate verification is disabled for the modem");
    }

    let client = Client::builder()
        .danger_accept_invalid_certs(config.accept_invalid_certs())
        .default_headers(headers)
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ModemClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::ModemConfigBuilder;
    use rstest::rstest;

    #[rstest]
    #[case::verifying(false)]
    #[case::accepting_invalid_certs(true)]
    #[tokio::test]
    async fn new_client_sets_the_soap_action_header(#[case] accept_invalid_certs: bool) -> Result<(), ModemClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("SOAPACTION", "http://purenetworks.com/HNAP1/GetMultipleHNAPs")
            .create_async()
            .await;

        let config = ModemConfigBuilder::new().accept_invalid_certs(accept_invalid_certs).build();
        let client = new_client(&config)?;

        client.get(format!("{}/", server.url())).send().await?;

        // Verify that the call came in and that the header is set
        mock.assert_async().await;

        Ok(())
    }
}
