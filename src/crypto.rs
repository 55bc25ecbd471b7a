//! The cryptographic facade the executor treats as a black box: `sign`,
//! `verify`, `address_of_pubkey`, plus the 256-bit hash used for
//! transaction identity. Key management and consensus-level signature
//! aggregation live outside this crate; this module just gives the
//! executor a concrete, swappable implementation to call into.

use crate::address::Address;
use blst::min_pk;
use blst::BLST_ERROR;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

const DST: &[u8] = b"SEMUX_DPOS_EXECUTOR_BLS_SIG_DST";

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", hex::encode(self.0))
    }
}

/// SHA-256 over arbitrary bytes, truncated to the crate's 256-bit `Hash`.
pub fn hash_bytes(data: &[u8]) -> Hash {
    let digest = Sha256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    Hash(out)
}

#[derive(Clone)]
pub struct PublicKey(min_pk::PublicKey);

impl PublicKey {
    pub fn to_bytes(&self) -> [u8; 48] {
        self.0.compress()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        min_pk::PublicKey::from_bytes(bytes)
            .map(PublicKey)
            .map_err(|_| CryptoError::InvalidPublicKey)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.to_bytes()))
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}
impl Eq for PublicKey {}

impl Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <Vec<u8>>::deserialize(deserializer)?;
        PublicKey::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

pub struct SecretKey(min_pk::SecretKey);

#[derive(Clone)]
pub struct Signature(min_pk::Signature);

impl Signature {
    pub fn to_bytes(&self) -> [u8; 96] {
        self.0.compress()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        min_pk::Signature::from_bytes(bytes)
            .map(Signature)
            .map_err(|_| CryptoError::InvalidSignature)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(self.to_bytes()))
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}
impl Eq for Signature {}

impl Serialize for Signature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <Vec<u8>>::deserialize(deserializer)?;
        Signature::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid public key bytes")]
    InvalidPublicKey,
    #[error("invalid signature bytes")]
    InvalidSignature,
    #[error("key generation failed")]
    KeyGenFailed,
}

/// Generates a fresh keypair. Intended for tests and tooling — this crate
/// is not a wallet and does not manage key lifecycle.
pub fn generate_keypair() -> (PublicKey, SecretKey) {
    let mut ikm = [0u8; 32];
    rand::Rng::fill(&mut rand::thread_rng(), &mut ikm);
    let sk = min_pk::SecretKey::key_gen(&ikm, &[]).expect("32 bytes of IKM is always valid");
    let pk = sk.sk_to_pk();
    (PublicKey(pk), SecretKey(sk))
}

pub fn sign(sk: &SecretKey, message: &[u8]) -> Signature {
    Signature(sk.0.sign(message, DST, &[]))
}

pub fn verify(pk: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    signature.0.verify(true, message, DST, &[], &pk.0, true) == BLST_ERROR::BLST_SUCCESS
}

/// `Address = sha256(pubkey_bytes)[..20]`.
pub fn address_of_pubkey(pk: &PublicKey) -> Address {
    let digest = hash_bytes(&pk.to_bytes());
    Address::from_slice(&digest.0[..20])
}
