//! # Refuel Service
//!
//! Builds refuel payloads: pay stablecoin on one chain, receive native gas
//! on the same or another chain.
//!
//! ## Control Flow
//!
//! ```text
//! RefuelRequest → RefuelDataBuilder ─┬─ same-chain ─→ handleMessage(token, message)
//!                                    └─ cross-chain → Across quote → depositV3(..., message)
//!                      message = build_refuel_message(...)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use across_adapter::AcrossQuoteClient;
//! use refuel_config::load_config;
//! use refuel_service::{RefuelDataBuilder, RefuelRequest};
//! use refuel_types::{Address, U256};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = load_config(None)?;
//! let client = AcrossQuoteClient::new(&config.across)?;
//! let builder = RefuelDataBuilder::new(config.chain_registry()?, client);
//!
//! let request = RefuelRequest::new(
//!     Address::zero(),
//!     Address::zero(),
//!     U256::from(10_000_000u64),
//!     vec![Address::repeat_byte(0x01)],
//!     84532,
//!     11155420,
//! );
//! if let Some(data) = builder.build(&request).await? {
//!     println!("{}", serde_json::to_string(&data)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod logging;
pub mod message;
pub mod request;

pub use builder::RefuelDataBuilder;
pub use error::{RefuelError, Result};
pub use logging::init_tracing;
pub use message::{build_refuel_message, refuel_calls, RefuelMessageParams};
pub use request::{parse_min_eth_out, RefuelRequest, NATIVE_DECIMALS};
