//! # Across Adapter
//!
//! Bridge quotes for cross-chain refuels. A quote sizes the destination-side
//! swap: the handler on the target chain only ever receives the quoted output
//! amount, never the deposited input.
//!
//! Quotes are fetched fresh for every build and never cached; a quote is
//! only valid inside its own fill window.

pub mod client;
pub mod error;
pub mod response;

pub use client::AcrossQuoteClient;
pub use error::{QuoteError, Result};
pub use response::{SuggestedFeesResponse, DEFAULT_FILL_WINDOW_SECS};

use async_trait::async_trait;
use refuel_types::{AcrossQuote, QuoteParams};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Source of bridge quotes
#[async_trait]
pub trait BridgeQuoteClient: Send + Sync {
    async fn get_quote(&self, params: QuoteParams) -> Result<AcrossQuote>;
}

#[async_trait]
impl<T: BridgeQuoteClient + ?Sized> BridgeQuoteClient for Arc<T> {
    async fn get_quote(&self, params: QuoteParams) -> Result<AcrossQuote> {
        (**self).get_quote(params).await
    }
}

/// Fetch a quote, giving up with [`QuoteError::Cancelled`] as soon as
/// `cancel` fires. The in-flight request is dropped.
pub async fn get_quote_cancellable<Q>(
    client: &Q,
    params: QuoteParams,
    cancel: &CancellationToken,
) -> Result<AcrossQuote>
where
    Q: BridgeQuoteClient + ?Sized,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(QuoteError::Cancelled),
        result = client.get_quote(params) => result,
    }
}
