//! The executor's return value: a tagged sum, never an exception.
//! `Failure` carries only the status code — a rejected transaction
//! leaves no trace in staged state, so there is nothing else to report.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Success,
    Invalid,
    InvalidFormat,
    InvalidNonce,
    InvalidFee,
    InvalidDelegating,
    InvalidVoting,
    InsufficientAvailable,
    InsufficientLocked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionResult {
    Success {
        logs: Vec<String>,
        return_bytes: Vec<u8>,
    },
    Failure {
        kind: StatusCode,
    },
}

impl TransactionResult {
    pub fn success(logs: Vec<String>, return_bytes: Vec<u8>) -> Self {
        TransactionResult::Success { logs, return_bytes }
    }

    pub fn failure(kind: StatusCode) -> Self {
        TransactionResult::Failure { kind }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TransactionResult::Success { .. })
    }

    pub fn status(&self) -> StatusCode {
        match self {
            TransactionResult::Success { .. } => StatusCode::Success,
            TransactionResult::Failure { kind } => *kind,
        }
    }
}
