use crate::domain::ports::RiskClient;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct RiskVerdict {
    blocked: bool,
}

/// Risk backend over HTTP: `GET {endpoint}/{owner_email}` answering
/// `{"blocked": bool}`. Non-2xx responses and transport failures surface
/// as errors; the core never retries.
pub struct HttpRiskClient {
    client: Client,
    endpoint: String,
}

impl HttpRiskClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl RiskClient for HttpRiskClient {
    async fn is_blocked(&self, owner_email: &str) -> Result<bool> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), owner_email);
        tracing::debug!("Risk check request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Risk service response status: {}", response.status());

        let verdict: RiskVerdict = response.error_for_status()?.json().await?;
        Ok(verdict.blocked)
    }
}

/// Fixed deny-list backend. The default (empty list) blocks nobody and is
/// what the CLI wires when no risk endpoint is configured.
#[derive(Debug, Clone, Default)]
pub struct StaticRiskClient {
    blocked: HashSet<String>,
}

impl StaticRiskClient {
    pub fn with_blocked<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocked: emails.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl RiskClient for StaticRiskClient {
    async fn is_blocked(&self, owner_email: &str) -> Result<bool> {
        Ok(self.blocked.contains(owner_email))
    }
}
