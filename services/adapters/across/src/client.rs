//! HTTP client for the Across `suggested-fees` API

use crate::error::{QuoteError, Result};
use crate::response::SuggestedFeesResponse;
use crate::BridgeQuoteClient;
use async_trait::async_trait;
use refuel_config::AcrossConfig;
use refuel_types::{AcrossQuote, QuoteParams};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Quotes deposits against one Across deployment
#[derive(Debug, Clone)]
pub struct AcrossQuoteClient {
    http: reqwest::Client,
    suggested_fees_url: Url,
    timeout_secs: u64,
}

impl AcrossQuoteClient {
    /// Client for the deployment selected by `config`
    pub fn new(config: &AcrossConfig) -> Result<Self> {
        Self::with_base_url(config.api_base_url(), Duration::from_secs(config.timeout_secs))
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = format!("{}/suggested-fees", base_url.trim_end_matches('/'));
        let suggested_fees_url =
            Url::parse(&endpoint).map_err(|e| QuoteError::InvalidUrl(format!("{endpoint}: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self {
            http,
            suggested_fees_url,
            timeout_secs: timeout.as_secs(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.suggested_fees_url
    }

    async fn fetch_suggested_fees(&self, params: &QuoteParams) -> Result<SuggestedFeesResponse> {
        let query = [
            ("inputToken", format!("{:#x}", params.input_token)),
            ("outputToken", format!("{:#x}", params.output_token)),
            ("originChainId", params.source_chain_id.to_string()),
            ("destinationChainId", params.target_chain_id.to_string()),
            ("amount", params.amount.to_string()),
        ];

        debug!(
            url = %self.suggested_fees_url,
            origin = params.source_chain_id,
            destination = params.target_chain_id,
            amount = %params.amount,
            "Requesting Across quote"
        );

        let response = self
            .http
            .get(self.suggested_fees_url.clone())
            .query(&query)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %body, "Across quote request rejected");
            return Err(QuoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn classify(&self, err: reqwest::Error) -> QuoteError {
        if err.is_timeout() {
            QuoteError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            QuoteError::Http(err)
        }
    }
}

#[async_trait]
impl BridgeQuoteClient for AcrossQuoteClient {
    async fn get_quote(&self, params: QuoteParams) -> Result<AcrossQuote> {
        let response = self.fetch_suggested_fees(&params).await?;
        let now = u32::try_from(chrono::Utc::now().timestamp()).unwrap_or(u32::MAX);
        let quote = response.normalise(params.amount, now)?;

        debug!(
            output_amount = %quote.output_amount,
            relay_fee = %quote.relay_fee(params.amount),
            fill_deadline = quote.fill_deadline,
            exclusive = quote.is_exclusive(),
            "Across quote received"
        );
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_config() {
        let client = AcrossQuoteClient::new(&AcrossConfig::default()).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://testnet.across.to/api/suggested-fees"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client =
            AcrossQuoteClient::with_base_url("http://localhost:1234/api/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://localhost:1234/api/suggested-fees"
        );
    }

    #[test]
    fn test_bad_base_url() {
        assert!(matches!(
            AcrossQuoteClient::with_base_url("not a url", Duration::from_secs(1)),
            Err(QuoteError::InvalidUrl(_))
        ));
    }
}
