//! Hash chain driver
//!
//! Folds an ordered list of field elements left to right:
//! `h1 = H(a1, a2); h2 = H(h1, a3); ...`. Each step depends on the previous
//! output, so the chain is strictly sequential.

use tracing::trace;
use types::field::FieldElement;

use crate::hash::PairHash;

/// An in-progress left fold over the injected pair hash.
pub struct HashChain<'h, H: ?Sized> {
    hasher: &'h H,
    state: FieldElement,
    steps: usize,
}

impl<'h, H: PairHash + ?Sized> HashChain<'h, H> {
    /// First step: `H(first, second)`.
    pub fn start(hasher: &'h H, first: &FieldElement, second: &FieldElement) -> Self {
        let state = hasher.hash(first, second);
        trace!(step = 1, "hash chain started");
        Self {
            hasher,
            state,
            steps: 1,
        }
    }

    /// Next step: `H(state, next)`.
    pub fn absorb(mut self, next: &FieldElement) -> Self {
        self.state = self.hasher.hash(&self.state, next);
        self.steps += 1;
        trace!(step = self.steps, "hash chain step");
        self
    }

    /// Current intermediate hash.
    pub fn state(&self) -> &FieldElement {
        &self.state
    }

    /// Number of hash invocations so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn finish(self) -> FieldElement {
        self.state
    }
}

/// Fold `first, second, rest...` into one hash.
pub fn fold<H: PairHash + ?Sized>(
    hasher: &H,
    first: &FieldElement,
    second: &FieldElement,
    rest: &[FieldElement],
) -> FieldElement {
    rest.iter()
        .fold(HashChain::start(hasher, first, second), |chain, next| {
            chain.absorb(next)
        })
        .finish()
}
