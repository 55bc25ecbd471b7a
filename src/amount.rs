//! Fixed-point, non-negative currency amounts.
//!
//! `Amount` is a newtype over a nano-unit count; all arithmetic goes
//! through checked `sum`/`sub` so overflow/underflow can never wrap
//! silently. Callers that hit `ArithmeticError` are expected to convert it
//! into a `FatalError` — by the time the executor calls into `Amount`
//! arithmetic, balance checks should already have made failure impossible.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One SEM (the base currency unit) in nano-units.
pub const NANO_SEM_PER_SEM: u64 = 1_000_000_000;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("arithmetic overflow")]
    Overflow,
    #[error("arithmetic underflow")]
    Underflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_nano(nano: u64) -> Self {
        Amount(nano)
    }

    pub const fn as_nano(self) -> u64 {
        self.0
    }

    pub fn sum(self, other: Amount) -> Result<Amount, ArithmeticError> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or(ArithmeticError::Overflow)
    }

    pub fn sub(self, other: Amount) -> Result<Amount, ArithmeticError> {
        self.0
            .checked_sub(other.0)
            .map(Amount)
            .ok_or(ArithmeticError::Underflow)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `NANO_SEM.of(n) = n` nano-units.
pub struct NanoSem;

impl NanoSem {
    pub const fn of(n: u64) -> Amount {
        Amount(n)
    }
}

/// `SEM.of(n) = n × 10⁹` nano-units.
pub struct Sem;

impl Sem {
    pub fn of(n: u64) -> Result<Amount, ArithmeticError> {
        n.checked_mul(NANO_SEM_PER_SEM)
            .map(Amount)
            .ok_or(ArithmeticError::Overflow)
    }
}
