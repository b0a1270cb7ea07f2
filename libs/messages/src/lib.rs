//! Perpetual Messages: canonical message hashes
//!
//! Computes the single field element a user signs for each perpetual
//! operation:
//! - Withdrawals (plain and to an L1 address)
//! - Transfers and conditional transfers
//! - Limit orders with fees
//! - Oracle price ticks
//!
//! The hash must match the verifier bit for bit, so field widths, slot order,
//! discriminants and padding are fixed per message type.
//!
//! # Determinism
//! All functions are pure: no system time, no RNG, no I/O. The two-to-one
//! hash is injected by the caller and never chosen implicitly.
//!
//! # Version
//! v1.0.0 - Frozen message layouts

pub mod chain;
pub mod condition;
pub mod config;
pub mod encoder;
pub mod hash;
pub mod limit_order;
pub mod oracle;
pub mod packer;
pub mod transfer;
pub mod withdrawal;

pub use condition::build_condition;
pub use config::{EncoderConfig, RangeCheckPolicy};
pub use encoder::MessageEncoder;
pub use hash::{PairHash, Sha256PairHash};

/// Crate version constant
pub const MESSAGES_VERSION: &str = "1.0.0";
