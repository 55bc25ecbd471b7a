//! Ambient per-network constants the executor consults. No CLI, no
//! environment variables — a caller constructs this once per network and
//! passes it into the executor.

use crate::amount::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    pub network_id: u8,
    pub min_transaction_fee: Amount,
    pub min_delegate_burn_amount: Amount,
}

impl NetworkConfig {
    pub const fn new(
        network_id: u8,
        min_transaction_fee: Amount,
        min_delegate_burn_amount: Amount,
    ) -> Self {
        Self {
            network_id,
            min_transaction_fee,
            min_delegate_burn_amount,
        }
    }
}
