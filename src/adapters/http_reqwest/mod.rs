//! HTTP adapter built on reqwest

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::ports::*;

/// Plain GET client; every response status is checked before the body is used
pub struct ReqwestHttpAdapter {
    client: reqwest::Client,
}

impl ReqwestHttpAdapter {
    /// `timeout` bounds connecting and each read, never the whole transfer
    pub fn new(timeout: Option<Duration>) -> Result<Self, DomainError> {
        let client = client_builder(timeout)
            .build()
            .map_err(|e| DomainError::NetworkFail(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

fn client_builder(timeout: Option<Duration>) -> reqwest::ClientBuilder {
    let builder =
        reqwest::Client::builder().user_agent(concat!("mixreel/", env!("CARGO_PKG_VERSION")));
    match timeout {
        Some(timeout) => builder.connect_timeout(timeout).read_timeout(timeout),
        None => builder,
    }
}

#[async_trait]
impl HttpPort for ReqwestHttpAdapter {
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, DomainError> {
        info!(url, "fetching");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::NetworkFail(format!("{}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::NetworkFail(format!("{}: {}", url, e)))?;
        debug!(url, bytes = body.len(), "fetched");
        Ok(body.to_vec())
    }
}
