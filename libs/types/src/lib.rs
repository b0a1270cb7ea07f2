//! Types library for perpetual settlement messages
//!
//! Data model shared by the message encoders: field elements, bounded-width
//! fields and their validator, operation tags, and the caller-facing parameter
//! records. Every value is built once per call and never mutated.
//!
//! # Version
//! v1.0.0 - Frozen discriminants and field widths
//!
//! # Modules
//! - `numeric`: Arbitrary-precision integer parsing
//! - `field`: Prime field elements
//! - `range`: Range validator
//! - `bitfield`: Named fields with declared bit widths
//! - `operation`: Operation discriminants
//! - `order`: Limit order direction and sell/buy relabelling
//! - `params`: Message parameter records
//! - `hash`: Final message hash
//! - `errors`: Error taxonomy

// Public modules
pub mod numeric;
pub mod field;
pub mod range;
pub mod bitfield;
pub mod operation;
pub mod order;
pub mod params;
pub mod hash;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bitfield::{width, BitField};
    pub use crate::errors::*;
    pub use crate::field::*;
    pub use crate::hash::*;
    pub use crate::numeric::{parse_integer, pow2, pow2_signed};
    pub use crate::operation::*;
    pub use crate::order::*;
    pub use crate::params::*;
    pub use crate::range::*;
}
