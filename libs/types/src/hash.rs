//! Message hash
//!
//! The single field element a user signs for an operation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MessageResult;
use crate::field::FieldElement;

/// Final output of a message encoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageHash(FieldElement);

impl MessageHash {
    pub fn new(value: FieldElement) -> Self {
        Self(value)
    }

    /// Parse a reference hash, with or without `0x`.
    pub fn from_hex(input: &str) -> MessageResult<Self> {
        FieldElement::from_hex_str("messageHash", input).map(Self)
    }

    pub fn as_field_element(&self) -> &FieldElement {
        &self.0
    }

    pub fn into_field_element(self) -> FieldElement {
        self.0
    }

    /// 64 lowercase hex chars, no `0x`, zero-padded.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<FieldElement> for MessageHash {
    fn from(value: FieldElement) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
