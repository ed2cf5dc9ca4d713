//! Refuel data builder
//!
//! Turns a [`RefuelRequest`] into the single `{target, data}` instruction the
//! task network submits on the source chain:
//!
//! - same-chain: `handler.handleMessage(token, refuelMessage)`
//! - cross-chain: `spokePool.depositV3(...)` carrying the refuel message to
//!   the target chain's handler
//! - cross-chain with source calls: `handler.handleMessage(token, batch)`
//!   where the batch pulls funds, deposits and then runs the source calls
//!
//! `Ok(None)` means refuel is unavailable for this request (unknown chain or
//! no usable bridge quote). `Err` means the request or configuration is bad.

use crate::error::{RefuelError, Result};
use crate::message::{build_refuel_message, RefuelMessageParams};
use crate::request::RefuelRequest;
use across_adapter::{get_quote_cancellable, BridgeQuoteClient, QuoteError};
use refuel_codec::{
    build_approve_call, build_deposit_v3_call, build_transfer_from_call, encode_deposit_v3,
    encode_handle_message, encode_multicall_message, DepositV3Params,
};
use refuel_config::{ChainConfig, ChainRegistry};
use refuel_types::{AcrossQuote, QuoteParams, RefuelData};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub struct RefuelDataBuilder<Q> {
    registry: ChainRegistry,
    quote_client: Q,
}

impl<Q: BridgeQuoteClient> RefuelDataBuilder<Q> {
    pub fn new(registry: ChainRegistry, quote_client: Q) -> Self {
        Self {
            registry,
            quote_client,
        }
    }

    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    pub async fn build(&self, request: &RefuelRequest) -> Result<Option<RefuelData>> {
        self.build_inner(request, None).await
    }

    /// Like [`build`](Self::build), but a cancelled quote fetch surfaces as
    /// [`RefuelError::Cancelled`]
    pub async fn build_cancellable(
        &self,
        request: &RefuelRequest,
        cancel: &CancellationToken,
    ) -> Result<Option<RefuelData>> {
        self.build_inner(request, Some(cancel)).await
    }

    async fn build_inner(
        &self,
        request: &RefuelRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<RefuelData>> {
        request.validate()?;

        let Some(source) = self.registry.get(request.source_chain_id) else {
            debug!("Refuel unavailable: unknown source chain {}", request.source_chain_id);
            return Ok(None);
        };
        let Some(target) = self.registry.get(request.target_chain_id) else {
            debug!("Refuel unavailable: unknown target chain {}", request.target_chain_id);
            return Ok(None);
        };

        let data = if request.is_cross_chain() {
            let Some(quote) = self.fetch_quote(request, target, cancel).await? else {
                return Ok(None);
            };
            self.build_cross_chain(request, source, target, &quote)?
        } else {
            self.build_same_chain(request, source)?
        };

        info!(
            source = request.source_chain_id,
            target = request.target_chain_id,
            to = ?data.target,
            bytes = data.data.len(),
            "Refuel payload built"
        );
        Ok(Some(data))
    }

    fn build_same_chain(&self, request: &RefuelRequest, source: &ChainConfig) -> Result<RefuelData> {
        let message = build_refuel_message(
            &self.registry,
            &RefuelMessageParams {
                initiator: request.initiator,
                amount_usdc: request.amount,
                recipients: request.recipients.clone(),
                source_chain_id: request.source_chain_id,
                target_chain_id: request.target_chain_id,
                min_eth_out: request.min_eth_out.clone(),
                extra_calls: request.source_calls.clone(),
                amount_usdc_override: None,
                pool_fee_override: request.pool_fee,
                usdc_override: Some(request.token),
            },
        )?;

        let handler = source.contracts.multicall_handler;
        Ok(RefuelData::new(
            handler,
            encode_handle_message(request.token, &message)?,
        ))
    }

    /// `Ok(None)` when no usable quote could be fetched
    async fn fetch_quote(
        &self,
        request: &RefuelRequest,
        target: &ChainConfig,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<AcrossQuote>> {
        let params = QuoteParams {
            amount: request.amount,
            input_token: request.token,
            output_token: target.tokens.usdc,
            source_chain_id: request.source_chain_id,
            target_chain_id: request.target_chain_id,
        };

        let result = match cancel {
            Some(cancel) => get_quote_cancellable(&self.quote_client, params, cancel).await,
            None => self.quote_client.get_quote(params).await,
        };

        match result {
            Ok(quote) if quote.output_amount.is_zero() => {
                warn!("Bridge quote has zero output amount, aborting refuel");
                Ok(None)
            }
            Ok(quote) => Ok(Some(quote)),
            Err(QuoteError::Cancelled) => Err(RefuelError::Cancelled),
            Err(e) => {
                warn!(
                    source = request.source_chain_id,
                    target = request.target_chain_id,
                    error = %e,
                    "Bridge quote failed, aborting refuel"
                );
                Ok(None)
            }
        }
    }

    fn build_cross_chain(
        &self,
        request: &RefuelRequest,
        source: &ChainConfig,
        target: &ChainConfig,
        quote: &AcrossQuote,
    ) -> Result<RefuelData> {
        let message = build_refuel_message(
            &self.registry,
            &RefuelMessageParams {
                initiator: request.initiator,
                amount_usdc: request.amount,
                recipients: request.recipients.clone(),
                source_chain_id: request.source_chain_id,
                target_chain_id: request.target_chain_id,
                min_eth_out: request.min_eth_out.clone(),
                extra_calls: Vec::new(),
                amount_usdc_override: Some(quote.output_amount),
                pool_fee_override: request.pool_fee,
                usdc_override: None,
            },
        )?;

        let spoke_pool = source.spoke_pool()?;
        let source_handler = source.contracts.multicall_handler;

        let mut deposit = DepositV3Params {
            depositor: source.exec_core()?,
            recipient: target.contracts.multicall_handler,
            input_token: request.token,
            output_token: target.tokens.usdc,
            input_amount: request.amount,
            output_amount: quote.output_amount,
            destination_chain_id: request.target_chain_id,
            exclusive_relayer: quote.exclusive_relayer,
            quote_timestamp: quote.quote_timestamp,
            fill_deadline: quote.fill_deadline,
            exclusivity_deadline: quote.exclusivity_deadline,
            message,
        };

        debug!(
            input = %deposit.input_amount,
            output = %deposit.output_amount,
            fill_deadline = deposit.fill_deadline,
            "Across deposit"
        );

        if request.source_calls.is_empty() {
            return Ok(RefuelData::new(spoke_pool, encode_deposit_v3(&deposit)?));
        }

        // Funds move through the source handler, which makes the deposit itself
        let exec_core = deposit.depositor;
        deposit.depositor = source_handler;

        let mut calls = vec![
            build_transfer_from_call(request.token, exec_core, source_handler, request.amount)?,
            build_approve_call(request.token, spoke_pool, request.amount)?,
            build_deposit_v3_call(spoke_pool, &deposit)?,
        ];
        calls.extend(request.source_calls.iter().cloned());

        let batch = encode_multicall_message(&calls, request.initiator);
        Ok(RefuelData::new(
            source_handler,
            encode_handle_message(request.token, &batch)?,
        ))
    }
}
