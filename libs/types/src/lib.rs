//! # Refuel Types
//!
//! Shared data model for refuel payload construction: multicall handler calls,
//! balance replacements, bridge quotes, the final `{target, data}` instruction,
//! and the task records returned by the execution network.
//!
//! ## Design Philosophy
//!
//! - **Plain data**: every type here is inert; encoding lives in `refuel-codec`
//! - **On-chain widths**: amounts are `U256`, bridge timestamps are `u32`
//! - **Hex on the wire**: byte payloads serialise as `0x`-prefixed strings
//!
//! ## Quick Start
//!
//! ```rust
//! use refuel_types::{Address, Call, U256};
//!
//! let call = Call::new(Address::zero(), vec![0x09, 0x5e, 0xa7, 0xb3]);
//! assert_eq!(call.value, U256::zero());
//! ```

pub mod call;
pub mod errors;
pub mod hex_bytes;
pub mod quote;
pub mod refuel;
pub mod task;
pub mod token;

pub use ethereum_types;
pub use ethereum_types::{Address, U256};

pub use call::{Call, MulticallInstructions, Replacement};
pub use errors::ValidationError;
pub use quote::{AcrossQuote, QuoteParams};
pub use refuel::RefuelData;
pub use task::{PermitType, Task, TaskStatus, TaskType};
pub use token::{TokenInfo, ETH, EXEC, USDC, WETH};

/// Raw ABI-encoded bytes
pub type Bytes = Vec<u8>;

/// `address(0)`, used for the native currency and "no exclusive relayer"
pub const NATIVE_TOKEN: Address = Address::zero();
