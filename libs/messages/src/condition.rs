//! Conditional transfer conditions
//!
//! A condition commits to a fact registered in an L1 fact registry:
//! `keccak256(registryAddress || fact)`, truncated to its low 250 bits.

use tiny_keccak::{Hasher, Keccak};
use types::errors::{MessageError, MessageResult};
use types::field::FieldElement;

const ADDRESS_BYTES: usize = 20;

/// Derive the `condition` field for a conditional transfer.
///
/// `fact_registry_address` is 20 bytes of hex, with or without `0x`; mixed
/// case checksummed addresses are accepted as-is.
pub fn build_condition(fact_registry_address: &str, fact: &[u8; 32]) -> MessageResult<FieldElement> {
    let address = parse_address(fact_registry_address)?;

    let mut digest = [0u8; 32];
    let mut keccak = Keccak::v256();
    keccak.update(&address);
    keccak.update(fact);
    keccak.finalize(&mut digest);

    Ok(FieldElement::from_be_bytes_masked(digest))
}

fn parse_address(input: &str) -> MessageResult<[u8; ADDRESS_BYTES]> {
    let invalid = || MessageError::InvalidInteger {
        field: "factRegistryAddress".to_owned(),
        input: input.to_owned(),
    };
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let bytes = hex::decode(digits).map_err(|_| invalid())?;
    bytes.try_into().map_err(|_| invalid())
}
