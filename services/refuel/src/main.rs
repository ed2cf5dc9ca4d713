//! Refuel CLI
//!
//! Usage:
//!   refuel build --initiator 0x.. --token 0x.. --amount 10000000 \
//!       --recipient 0x.. --source-chain 84532 --target-chain 11155420
//!   refuel chains
//!
//! `build` prints the `{target, data}` payload as JSON and exits with code 2
//! when refuel is unavailable for the chain pair.

use across_adapter::AcrossQuoteClient;
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use refuel_config::{load_config, refuel_fee, refuel_fee_bps, ChainRegistry, RefuelServiceConfig};
use refuel_service::{init_tracing, RefuelDataBuilder, RefuelRequest};
use refuel_types::{Address, U256, USDC};
use rust_decimal::Decimal;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "refuel", version, about = "Build refuel payloads for the task network")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a refuel payload
    Build(BuildArgs),
    /// List supported chains
    Chains,
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Task initiator, receives funds back if the batch reverts
    #[arg(long, value_parser = parse_address)]
    initiator: Address,

    /// Stablecoin paid on the source chain
    #[arg(long, value_parser = parse_address)]
    token: Address,

    /// Amount in the token's base units
    #[arg(long, value_parser = parse_amount)]
    amount: U256,

    /// Native currency recipient (repeatable)
    #[arg(long = "recipient", required = true, value_parser = parse_address)]
    recipients: Vec<Address>,

    #[arg(long)]
    source_chain: u64,

    #[arg(long)]
    target_chain: u64,

    /// Minimum native out of the swap, e.g. 0.001
    #[arg(long)]
    min_eth_out: Option<String>,

    /// Pool fee tier override (500, 3000, ...)
    #[arg(long)]
    pool_fee: Option<u32>,
}

fn parse_address(value: &str) -> Result<Address, String> {
    let stripped = value.trim().trim_start_matches("0x");
    let bytes = hex::decode(stripped).map_err(|e| format!("invalid address {value}: {e}"))?;
    if bytes.len() != 20 {
        return Err(format!("invalid address {value}: expected 20 bytes, got {}", bytes.len()));
    }
    Ok(Address::from_slice(&bytes))
}

fn parse_amount(value: &str) -> Result<U256, String> {
    U256::from_dec_str(value.trim()).map_err(|e| format!("invalid amount {value}: {e:?}"))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.global)?;

    match cli.command {
        Command::Build(args) => build(&config, args).await,
        Command::Chains => {
            list_chains(&config.chain_registry()?)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn build(config: &RefuelServiceConfig, args: BuildArgs) -> Result<ExitCode> {
    let registry = config.chain_registry().context("Invalid chain configuration")?;
    let client = AcrossQuoteClient::new(&config.across).context("Failed to create Across client")?;
    let builder = RefuelDataBuilder::new(registry, client);

    let mut request = RefuelRequest::new(
        args.initiator,
        args.token,
        args.amount,
        args.recipients,
        args.source_chain,
        args.target_chain,
    )
    .with_min_eth_out(
        args.min_eth_out
            .unwrap_or_else(|| config.refuel.default_min_eth_out.clone()),
    );
    if let Some(fee) = args.pool_fee {
        request = request.with_pool_fee(fee);
    }

    log_fee(request.amount);

    match builder.build(&request).await? {
        Some(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            warn!(
                "Refuel unavailable from chain {} to chain {}",
                request.source_chain_id, request.target_chain_id
            );
            eprintln!(
                "refuel unavailable from chain {} to chain {}",
                request.source_chain_id, request.target_chain_id
            );
            Ok(ExitCode::from(2))
        }
    }
}

fn log_fee(amount: U256) {
    if amount.bits() > 96 {
        return;
    }
    let human = Decimal::from_i128_with_scale(amount.as_u128() as i128, u32::from(USDC.decimals));
    info!(
        amount_usdc = %human,
        fee_bps = refuel_fee_bps(human),
        fee_usdc = %refuel_fee(human),
        "Task fee"
    );
}

fn list_chains(registry: &ChainRegistry) -> Result<()> {
    let chains: Vec<_> = registry
        .iter()
        .map(|chain| {
            json!({
                "chainId": chain.chain_id,
                "name": chain.name,
                "nativeSymbol": chain.default_asset.symbol,
                "usdc": chain.tokens.usdc,
                "weth": chain.tokens.weth,
                "swapRouter": chain.contracts.swap_router,
                "multicallHandler": chain.contracts.multicall_handler,
                "spokePool": chain.contracts.spoke_pool,
                "execCore": chain.contracts.exec_core,
                "poolFee": chain.pool_fee,
            })
        })
        .collect();

    if chains.is_empty() {
        bail!("No chains configured");
    }
    println!("{}", serde_json::to_string_pretty(&chains)?);
    Ok(())
}
