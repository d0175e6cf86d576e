use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://rest.messagebird.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Provider error: {0}")]
    General(String),

    #[error("Request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Line classification reported by the lookup endpoint. Kept as a closed
/// enum so the mobile check is a real equality test, not a string compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineType {
    #[serde(rename = "mobile")]
    Mobile,
    #[serde(rename = "fixed line")]
    FixedLine,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Lookup {
    #[serde(rename = "type")]
    pub line_type: LineType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    description: String,
}

#[async_trait]
pub trait SmsProvider: Clone + Send + Sync + 'static {
    async fn lookup(&self, number: u64, country_code: &str) -> Result<Lookup, ProviderError>;
    async fn send_message(
        &self,
        originator: &str,
        body: &str,
        recipients: &[u64],
    ) -> Result<MessageResponse, ProviderError>;
    async fn verify_token(&self, id: &str, token: &str) -> Result<(), ProviderError>;
}

#[derive(Clone)]
pub struct MessageBirdClient {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl MessageBirdClient {
    pub fn new(access_key: &str) -> Result<Self, ProviderError> {
        Self::with_base_url(access_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(access_key: &str, base_url: &str) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key: access_key.to_string(),
        })
    }

    fn auth_header(&self) -> String {
        format!("AccessKey {}", self.access_key)
    }

    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let description = match response.json::<ErrorBody>().await {
            Ok(body) => body
                .errors
                .into_iter()
                .map(|e| e.description)
                .collect::<Vec<_>>()
                .join(", "),
            Err(_) => format!("provider returned status {status}"),
        };

        match status {
            reqwest::StatusCode::UNAUTHORIZED => Err(ProviderError::Unauthorized(description)),
            reqwest::StatusCode::NOT_FOUND => Err(ProviderError::NotFound(description)),
            _ => Err(ProviderError::General(description)),
        }
    }
}

#[async_trait]
impl SmsProvider for MessageBirdClient {
    async fn lookup(&self, number: u64, country_code: &str) -> Result<Lookup, ProviderError> {
        let response = self
            .client
            .get(format!("{}/lookup/{number}", self.base_url))
            .query(&[("countryCode", country_code)])
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        let lookup = self.check(response).await?.json::<Lookup>().await?;
        tracing::debug!(number, line_type = ?lookup.line_type, "lookup completed");
        Ok(lookup)
    }

    async fn send_message(
        &self,
        originator: &str,
        body: &str,
        recipients: &[u64],
    ) -> Result<MessageResponse, ProviderError> {
        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("Authorization", self.auth_header())
            .json(&json!({
                "originator": originator,
                "body": body,
                "recipients": recipients,
            }))
            .send()
            .await?;

        let message = self
            .check(response)
            .await?
            .json::<MessageResponse>()
            .await?;
        tracing::info!(message_id = %message.id, "message dispatched");
        Ok(message)
    }

    async fn verify_token(&self, id: &str, token: &str) -> Result<(), ProviderError> {
        let response = self
            .client
            .get(format!("{}/verify/{id}", self.base_url))
            .query(&[("token", token)])
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        self.check(response).await?;
        Ok(())
    }
}
