//! Two-to-one hash collaborator
//!
//! Encoders never pick a hash function themselves: the caller injects one at
//! construction. Production deployments plug in the verifier's field hash;
//! tests and fixtures use [`Sha256PairHash`] or a closure.

use sha2::{Digest, Sha256};
use types::field::FieldElement;

/// A deterministic, collision-resistant `H(a, b) -> c` over the field.
pub trait PairHash {
    fn hash(&self, left: &FieldElement, right: &FieldElement) -> FieldElement;
}

impl<F> PairHash for F
where
    F: Fn(&FieldElement, &FieldElement) -> FieldElement,
{
    fn hash(&self, left: &FieldElement, right: &FieldElement) -> FieldElement {
        self(left, right)
    }
}

/// Reference pair hash: `SHA-256(be32(a) || be32(b))` keeping the low 250 bits.
///
/// Deterministic and always in the field, which makes it suitable for
/// reproducible fixtures. It is not the verifier's hash: hashes produced with
/// it will not verify on-chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256PairHash;

impl PairHash for Sha256PairHash {
    fn hash(&self, left: &FieldElement, right: &FieldElement) -> FieldElement {
        let mut hasher = Sha256::new();
        hasher.update(left.to_be_bytes());
        hasher.update(right.to_be_bytes());
        FieldElement::from_be_bytes_masked(hasher.finalize().into())
    }
}
