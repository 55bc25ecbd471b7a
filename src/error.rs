//! The executor's invariant-violation channel. These are programmer
//! errors, not transaction failures: an `Err(FatalError)` means a prior
//! guard should have made the condition impossible, and the caller must
//! abort block processing rather than continue to the next transaction.

use crate::amount::ArithmeticError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FatalError {
    #[error("arithmetic overflow in amount computation")]
    ArithmeticOverflow,
    #[error("arithmetic underflow in amount computation")]
    ArithmeticUnderflow,
    #[error("state store invariant violated: {0}")]
    InvariantViolated(&'static str),
}

impl From<ArithmeticError> for FatalError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::Overflow => FatalError::ArithmeticOverflow,
            ArithmeticError::Underflow => FatalError::ArithmeticUnderflow,
        }
    }
}
