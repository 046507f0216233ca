use soroban_sdk::{contracttype, Address, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const TX_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const TX_LIFETIME_THRESHOLD: u32 = TX_BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;

/// Largest page `get_transactions` returns.
pub(crate) const MAX_PAGE_SIZE: u32 = 50;

// Initialized, Quorum, Signers, Signer and TxCount live in instance storage.
// Transaction records live in persistent storage, one entry per id.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Quorum,
    Signers,
    Signer(Address),
    TxCount,
    Transaction(u64),
}

/// A proposed transfer out of the wallet and its approval state.
///
/// `approved_by` is seeded with the proposer, so `approval_count` always
/// equals `approved_by.len()`. `completed` only ever flips from `false` to
/// `true`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub proposer: Address,
    pub amount: i128,
    pub recipient: Address,
    pub token_address: Address,
    pub approval_count: u32,
    pub approved_by: Vec<Address>,
    pub completed: bool,
}
