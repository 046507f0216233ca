use soroban_sdk::{contractevent, Address};

#[contractevent]
pub struct TxProposed {
    #[topic]
    pub tx_id: u64,
    pub proposer: Address,
    pub recipient: Address,
    pub token_address: Address,
    pub amount: i128,
}

#[contractevent]
pub struct TxApproved {
    #[topic]
    pub tx_id: u64,
    pub signer: Address,
    pub approval_count: u32,
}

#[contractevent]
pub struct TxExecuted {
    #[topic]
    pub tx_id: u64,
    pub recipient: Address,
    pub amount: i128,
}

/// Quorum was reached but the wallet could not cover the amount.
#[contractevent]
pub struct ExecutionDeferred {
    #[topic]
    pub tx_id: u64,
    pub balance: i128,
    pub amount: i128,
}

#[contractevent]
pub struct QuorumUpdated {
    pub signer: Address,
    pub old_quorum: u32,
    pub new_quorum: u32,
}
