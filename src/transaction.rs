//! Immutable, signed transaction records: canonical encoding, hashing,
//! and the structural checks every transaction must pass before the
//! executor looks at its kind-specific rules.

use crate::address::Address;
use crate::amount::Amount;
use crate::config::NetworkConfig;
use crate::crypto::{self, Hash, PublicKey, Signature};
use serde::{Deserialize, Serialize};

pub const MAX_DATA_LEN: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransactionKind {
    Transfer = 0,
    Delegate = 1,
    Vote = 2,
    Unvote = 3,
}

/// A signed transaction. `hash` and `from` are derived, not stored —
/// recomputing them keeps the type trivially consistent with its fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub network_id: u8,
    pub kind: TransactionKind,
    pub to: Address,
    pub value: Amount,
    pub fee: Amount,
    pub nonce: u64,
    pub timestamp: i64,
    pub data: Vec<u8>,
    pub public_key: PublicKey,
    pub signature: Signature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("transaction data exceeds {MAX_DATA_LEN} bytes")]
    DataTooLong,
    #[error("transaction hash is degenerate (all-zero)")]
    DegenerateHash,
    #[error("signature does not verify against the sender's public key")]
    BadSignature,
    #[error("network id does not match this chain")]
    WrongNetwork,
}

impl Transaction {
    /// The canonical byte layout hashed for transaction identity:
    /// big-endian, length-prefixed `data`, signature excluded.
    pub fn to_canonical_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(1 + 1 + 20 + 8 + 8 + 8 + 8 + 4 + self.data.len());
        buf.push(self.network_id);
        buf.push(self.kind as u8);
        buf.extend_from_slice(&self.to.0);
        buf.extend_from_slice(&self.value.as_nano().to_be_bytes());
        buf.extend_from_slice(&self.fee.as_nano().to_be_bytes());
        buf.extend_from_slice(&self.nonce.to_be_bytes());
        buf.extend_from_slice(&self.timestamp.to_be_bytes());
        buf.extend_from_slice(&(self.data.len() as u32).to_be_bytes());
        buf.extend_from_slice(&self.data);
        buf
    }

    pub fn hash(&self) -> Hash {
        crypto::hash_bytes(&self.to_canonical_bytes())
    }

    pub fn from(&self) -> Address {
        crypto::address_of_pubkey(&self.public_key)
    }

    /// Structural validation: data length, network id, and signature.
    /// Deliberately excludes the minimum-fee rule — the executor runs
    /// that as its own guard so it can surface a distinct status code.
    pub fn validate(&self, config: &NetworkConfig) -> Result<(), ValidationError> {
        if self.data.len() > MAX_DATA_LEN {
            return Err(ValidationError::DataTooLong);
        }
        if self.network_id != config.network_id {
            return Err(ValidationError::WrongNetwork);
        }
        let hash = self.hash();
        if hash.is_zero() {
            return Err(ValidationError::DegenerateHash);
        }
        if !crypto::verify(&self.public_key, &hash.0, &self.signature) {
            return Err(ValidationError::BadSignature);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::generate_keypair;

    fn build_tx_signed(network_id: u8, data: Vec<u8>) -> Transaction {
        let (pk, sk) = generate_keypair();
        let mut tx = Transaction {
            network_id,
            kind: TransactionKind::Transfer,
            to: Address::from_slice(&[1u8; 20]),
            value: Amount::from_nano(5),
            fee: Amount::from_nano(1),
            nonce: 0,
            timestamp: 1_700_000_000_000,
            data,
            public_key: pk,
            signature: crypto::sign(&sk, &[0u8; 32]),
        };
        let hash = tx.hash();
        tx.signature = crypto::sign(&sk, &hash.0);
        tx
    }

    #[test]
    fn canonical_encoding_round_trips_kind_and_to() {
        let tx = build_tx_signed(7, vec![]);
        let bytes = tx.to_canonical_bytes();
        assert_eq!(bytes[0], 7);
        assert_eq!(bytes[1], TransactionKind::Transfer as u8);
        assert_eq!(&bytes[2..22], &tx.to.0);
    }

    #[test]
    fn validate_accepts_well_formed_signed_transaction() {
        let config = NetworkConfig::new(7, Amount::ZERO, Amount::ZERO);
        let tx = build_tx_signed(7, vec![]);
        assert!(tx.validate(&config).is_ok());
    }

    #[test]
    fn validate_rejects_wrong_network() {
        let config = NetworkConfig::new(9, Amount::ZERO, Amount::ZERO);
        let tx = build_tx_signed(7, vec![]);
        assert_eq!(tx.validate(&config), Err(ValidationError::WrongNetwork));
    }

    #[test]
    fn validate_rejects_oversized_data() {
        let config = NetworkConfig::new(7, Amount::ZERO, Amount::ZERO);
        let tx = build_tx_signed(7, vec![0u8; MAX_DATA_LEN + 1]);
        assert_eq!(tx.validate(&config), Err(ValidationError::DataTooLong));
    }

    #[test]
    fn validate_rejects_tampered_signature() {
        let config = NetworkConfig::new(7, Amount::ZERO, Amount::ZERO);
        let mut tx = build_tx_signed(7, vec![]);
        tx.nonce += 1; // mutate a signed field without re-signing
        assert_eq!(tx.validate(&config), Err(ValidationError::BadSignature));
    }
}
