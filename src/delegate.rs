//! Delegate registry and vote ledger.
//!
//! Three coupled maps: `by_address` and `by_name` are kept bijective on
//! the registered set, and `votes` records each voter's stake on each
//! delegate. All three stage together so a sequence of DELEGATE/VOTE/
//! UNVOTE transactions within one block sees its own prior writes.

use crate::address::Address;
use crate::amount::Amount;
use crate::overlay::LayeredMap;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DelegateRecord {
    pub name: Vec<u8>,
    pub votes: Amount,
    pub registered_block: Option<u64>,
}

/// `true` iff `name` is 3–16 bytes, each one of `a..z`, `0..9`, `_`.
pub fn validate_delegate_name(name: &[u8]) -> bool {
    if name.len() < MIN_NAME_LEN || name.len() > MAX_NAME_LEN {
        return false;
    }
    name.iter()
        .all(|&b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

#[derive(Clone, Default)]
pub struct DelegateState {
    by_address: Arc<RwLock<HashMap<Address, DelegateRecord>>>,
    by_name: Arc<RwLock<HashMap<Vec<u8>, Address>>>,
    votes: Arc<RwLock<HashMap<(Address, Address), Amount>>>,
}

impl DelegateState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self) -> DelegateStagedView {
        DelegateStagedView {
            by_address: LayeredMap::new(Arc::clone(&self.by_address)),
            by_name: LayeredMap::new(Arc::clone(&self.by_name)),
            votes: LayeredMap::new(Arc::clone(&self.votes)),
        }
    }
}

pub struct DelegateStagedView {
    by_address: LayeredMap<Address, DelegateRecord>,
    by_name: LayeredMap<Vec<u8>, Address>,
    votes: LayeredMap<(Address, Address), Amount>,
}

impl DelegateStagedView {
    pub fn get_delegate_by_address(&self, addr: &Address) -> Option<DelegateRecord> {
        self.by_address.get(addr)
    }

    pub fn get_delegate_by_name(&self, name: &[u8]) -> Option<Address> {
        self.by_name.get(&name.to_vec())
    }

    /// Registers `addr` under `name`. Fails (returns `false`, no write) if
    /// `addr` is already registered or `name` is already taken — checked
    /// against the overlay, not only the committed base, so two
    /// registrations within one staged view correctly conflict.
    pub fn register(&mut self, addr: Address, name: &[u8]) -> bool {
        if self.by_address.get(&addr).is_some() {
            return false;
        }
        if self.by_name.get(&name.to_vec()).is_some() {
            return false;
        }
        self.by_address.set(
            addr,
            DelegateRecord {
                name: name.to_vec(),
                votes: Amount::ZERO,
                registered_block: None,
            },
        );
        self.by_name.set(name.to_vec(), addr);
        true
    }

    /// Adds `amount` to both the `(voter, delegate)` edge and the
    /// delegate's tally. Fails if `delegate` isn't registered.
    pub fn vote(&mut self, voter: Address, delegate: Address, amount: Amount) -> bool {
        let Some(mut record) = self.by_address.get(&delegate) else {
            return false;
        };
        let Ok(new_votes) = record.votes.sum(amount) else {
            return false;
        };
        let edge_key = (voter, delegate);
        let current_edge = self.votes.get(&edge_key).unwrap_or(Amount::ZERO);
        let Ok(new_edge) = current_edge.sum(amount) else {
            return false;
        };
        record.votes = new_votes;
        self.by_address.set(delegate, record);
        self.votes.set(edge_key, new_edge);
        true
    }

    /// Subtracts `amount` from the `(voter, delegate)` edge and the
    /// delegate's tally. Fails if the edge holds less than `amount`.
    pub fn unvote(&mut self, voter: Address, delegate: Address, amount: Amount) -> bool {
        let Some(mut record) = self.by_address.get(&delegate) else {
            return false;
        };
        let edge_key = (voter, delegate);
        let current_edge = self.votes.get(&edge_key).unwrap_or(Amount::ZERO);
        let Ok(new_edge) = current_edge.sub(amount) else {
            return false;
        };
        let Ok(new_votes) = record.votes.sub(amount) else {
            return false;
        };
        record.votes = new_votes;
        self.by_address.set(delegate, record);
        self.votes.set(edge_key, new_edge);
        true
    }

    pub fn get_vote(&self, voter: Address, delegate: Address) -> Amount {
        self.votes.get(&(voter, delegate)).unwrap_or(Amount::ZERO)
    }

    pub fn commit(self) {
        self.by_address.commit();
        self.by_name.commit();
        self.votes.commit();
    }
}
