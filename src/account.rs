//! Account state: `address → {nonce, available, locked}`, staged so a
//! transaction's writes are tentative until the caller commits them.

use crate::address::Address;
use crate::amount::Amount;
use crate::error::FatalError;
use crate::overlay::LayeredMap;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Account {
    pub nonce: u64,
    pub available: Amount,
    pub locked: Amount,
}

/// Which side of the balance a staged write credits or debits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Credit,
    Debit,
}

/// Committed account store. Never destroys an entry once written; reads
/// for an address that was never written return a zero-valued `Account`.
#[derive(Clone, Default)]
pub struct AccountState {
    base: Arc<RwLock<HashMap<Address, Account>>>,
}

impl AccountState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self) -> AccountStagedView {
        AccountStagedView {
            accounts: LayeredMap::new(Arc::clone(&self.base)),
        }
    }
}

pub struct AccountStagedView {
    accounts: LayeredMap<Address, Account>,
}

impl AccountStagedView {
    pub fn get_account(&self, addr: &Address) -> Account {
        self.accounts.get(addr).unwrap_or_default()
    }

    pub fn adjust_available(
        &mut self,
        addr: &Address,
        delta: Amount,
        direction: Direction,
    ) -> Result<(), FatalError> {
        let mut account = self.get_account(addr);
        account.available = match direction {
            Direction::Credit => account.available.sum(delta)?,
            Direction::Debit => account.available.sub(delta)?,
        };
        self.accounts.set(*addr, account);
        Ok(())
    }

    pub fn adjust_locked(
        &mut self,
        addr: &Address,
        delta: Amount,
        direction: Direction,
    ) -> Result<(), FatalError> {
        let mut account = self.get_account(addr);
        account.locked = match direction {
            Direction::Credit => account.locked.sum(delta)?,
            Direction::Debit => account.locked.sub(delta)?,
        };
        self.accounts.set(*addr, account);
        Ok(())
    }

    pub fn increase_nonce(&mut self, addr: &Address) {
        let mut account = self.get_account(addr);
        account.nonce += 1;
        self.accounts.set(*addr, account);
    }

    /// Opens a nested staging scope inside this view, so a sub-operation's
    /// writes can be discarded independently of the outer view's.
    pub fn track_nested(&mut self) {
        self.accounts.push_layer();
    }

    pub fn commit_nested(&mut self) {
        self.accounts.commit_layer();
    }

    pub fn discard_nested(&mut self) {
        self.accounts.discard_layer();
    }

    /// Promotes every staged write to the committed base. Simply dropping
    /// the view instead discards all of it.
    pub fn commit(self) {
        self.accounts.commit();
    }
}
