//! Transaction execution core for a delegated-proof-of-stake ledger.
//!
//! This crate is the state-transition function consensus calls into: given
//! a signed transaction and staged views over account/delegate state, it
//! validates, applies deltas, and returns a [`result::TransactionResult`].
//! Networking, block assembly, consensus voting, persistent storage, and
//! key management are all external collaborators and live outside this
//! crate.

pub mod account;
pub mod address;
pub mod amount;
pub mod config;
pub mod crypto;
pub mod delegate;
pub mod error;
pub mod executor;
mod overlay;
pub mod result;
pub mod transaction;

pub use account::AccountState;
pub use address::Address;
pub use amount::{Amount, NanoSem, Sem};
pub use config::NetworkConfig;
pub use delegate::DelegateState;
pub use error::FatalError;
pub use executor::TransactionExecutor;
pub use result::{StatusCode, TransactionResult};
pub use transaction::{Transaction, TransactionKind};
