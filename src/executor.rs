//! The transaction state machine. `execute` is the single entry point: a
//! pure function from `(tx, staged account view, staged delegate view)` to
//! a `TransactionResult`, mutating the staged views only on success.
//! Callers own commit/discard — the executor does neither.

use crate::account::{AccountStagedView, Direction};
use crate::address::EMPTY_ADDRESS;
use crate::config::NetworkConfig;
use crate::delegate::{validate_delegate_name, DelegateStagedView};
use crate::error::FatalError;
use crate::result::{StatusCode, TransactionResult};
use crate::transaction::{Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionExecutor;

impl TransactionExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs the full guard sequence and, on success, applies the kind's
    /// state deltas and bumps the sender's nonce. Returns `Err(FatalError)`
    /// only when a condition a prior guard should have ruled out still
    /// occurs — callers must abort block processing on that path.
    pub fn execute(
        &self,
        tx: &Transaction,
        config: &NetworkConfig,
        accounts: &mut AccountStagedView,
        delegates: &mut DelegateStagedView,
    ) -> Result<TransactionResult, FatalError> {
        if tx.validate(config).is_err() {
            return Ok(TransactionResult::failure(StatusCode::InvalidFormat));
        }
        if tx.fee < config.min_transaction_fee {
            return Ok(TransactionResult::failure(StatusCode::InvalidFee));
        }

        let from = tx.from();
        let account = accounts.get_account(&from);
        if account.nonce != tx.nonce {
            return Ok(TransactionResult::failure(StatusCode::InvalidNonce));
        }
        if account.available < tx.fee {
            return Ok(TransactionResult::failure(StatusCode::InsufficientAvailable));
        }

        let outcome = match tx.kind {
            TransactionKind::Transfer => self.execute_transfer(tx, &from, accounts)?,
            TransactionKind::Delegate => {
                self.execute_delegate(tx, &from, config, accounts, delegates)?
            }
            TransactionKind::Vote => self.execute_vote(tx, &from, accounts, delegates)?,
            TransactionKind::Unvote => self.execute_unvote(tx, &from, accounts, delegates)?,
        };

        if outcome.is_success() {
            accounts.increase_nonce(&from);
        }
        Ok(outcome)
    }

    fn execute_transfer(
        &self,
        tx: &Transaction,
        from: &crate::address::Address,
        accounts: &mut AccountStagedView,
    ) -> Result<TransactionResult, FatalError> {
        let account = accounts.get_account(from);
        let total = match tx.value.sum(tx.fee) {
            Ok(total) => total,
            Err(_) => return Ok(TransactionResult::failure(StatusCode::InsufficientAvailable)),
        };
        if account.available < total {
            return Ok(TransactionResult::failure(StatusCode::InsufficientAvailable));
        }
        accounts.adjust_available(from, total, Direction::Debit)?;
        accounts.adjust_available(&tx.to, tx.value, Direction::Credit)?;
        Ok(TransactionResult::success(Vec::new(), Vec::new()))
    }

    fn execute_delegate(
        &self,
        tx: &Transaction,
        from: &crate::address::Address,
        config: &NetworkConfig,
        accounts: &mut AccountStagedView,
        delegates: &mut DelegateStagedView,
    ) -> Result<TransactionResult, FatalError> {
        if tx.to != EMPTY_ADDRESS {
            return Ok(TransactionResult::failure(StatusCode::Invalid));
        }
        if tx.value != config.min_delegate_burn_amount {
            return Ok(TransactionResult::failure(StatusCode::Invalid));
        }
        let account = accounts.get_account(from);
        let total = match tx.value.sum(tx.fee) {
            Ok(total) => total,
            Err(_) => return Ok(TransactionResult::failure(StatusCode::InsufficientAvailable)),
        };
        if account.available < total {
            return Ok(TransactionResult::failure(StatusCode::InsufficientAvailable));
        }
        if !validate_delegate_name(&tx.data) {
            log::debug!("delegate registration rejected: invalid name syntax");
            return Ok(TransactionResult::failure(StatusCode::InvalidDelegating));
        }
        if !delegates.register(*from, &tx.data) {
            return Ok(TransactionResult::failure(StatusCode::InvalidDelegating));
        }
        accounts.adjust_available(from, total, Direction::Debit)?;
        Ok(TransactionResult::success(Vec::new(), Vec::new()))
    }

    fn execute_vote(
        &self,
        tx: &Transaction,
        from: &crate::address::Address,
        accounts: &mut AccountStagedView,
        delegates: &mut DelegateStagedView,
    ) -> Result<TransactionResult, FatalError> {
        if delegates.get_delegate_by_address(&tx.to).is_none() {
            return Ok(TransactionResult::failure(StatusCode::InvalidVoting));
        }
        let account = accounts.get_account(from);
        let total = match tx.value.sum(tx.fee) {
            Ok(total) => total,
            Err(_) => return Ok(TransactionResult::failure(StatusCode::InsufficientAvailable)),
        };
        if account.available < total {
            return Ok(TransactionResult::failure(StatusCode::InsufficientAvailable));
        }
        accounts.adjust_available(from, total, Direction::Debit)?;
        accounts.adjust_locked(from, tx.value, Direction::Credit)?;
        if !delegates.vote(*from, tx.to, tx.value) {
            return Err(FatalError::InvariantViolated(
                "vote() failed after register-and-balance guards passed",
            ));
        }
        Ok(TransactionResult::success(Vec::new(), Vec::new()))
    }

    fn execute_unvote(
        &self,
        tx: &Transaction,
        from: &crate::address::Address,
        accounts: &mut AccountStagedView,
        delegates: &mut DelegateStagedView,
    ) -> Result<TransactionResult, FatalError> {
        if delegates.get_delegate_by_address(&tx.to).is_none() {
            return Ok(TransactionResult::failure(StatusCode::InvalidVoting));
        }
        let account = accounts.get_account(from);
        if account.available < tx.fee {
            return Ok(TransactionResult::failure(StatusCode::InsufficientAvailable));
        }
        let edge = delegates.get_vote(*from, tx.to);
        if edge < tx.value || account.locked < tx.value {
            return Ok(TransactionResult::failure(StatusCode::InsufficientLocked));
        }

        if !delegates.unvote(*from, tx.to, tx.value) {
            return Err(FatalError::InvariantViolated(
                "unvote() failed after edge-and-lock guards passed",
            ));
        }
        accounts.adjust_locked(from, tx.value, Direction::Debit)?;

        // Net effect on `available` is `value - fee`, which may be negative;
        // resolved via a signed intermediate rather than an Amount
        // subtraction that could underflow before the `sum` below runs.
        let net = tx.value.as_nano() as i128 - tx.fee.as_nano() as i128;
        if net >= 0 {
            accounts.adjust_available(from, crate::amount::Amount::from_nano(net as u64), Direction::Credit)?;
        } else {
            accounts.adjust_available(from, crate::amount::Amount::from_nano((-net) as u64), Direction::Debit)?;
        }
        Ok(TransactionResult::success(Vec::new(), Vec::new()))
    }
}
