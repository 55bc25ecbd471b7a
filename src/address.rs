//! 20-byte opaque account identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

/// 20 zero bytes; the distinguished DELEGATE registration / burn recipient.
pub const EMPTY_ADDRESS: Address = Address([0u8; 20]);

impl Address {
    pub const fn zero() -> Self {
        EMPTY_ADDRESS
    }

    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 20];
        buf.copy_from_slice(&bytes[..20]);
        Address(buf)
    }
}

impl Default for Address {
    fn default() -> Self {
        EMPTY_ADDRESS
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
