use soroban_sdk::contracttype;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const WALLET_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const WALLET_LIFETIME_THRESHOLD: u32 = WALLET_BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;

// WalletWasmHash and CloneCount are instance entries; each Wallet(index) is
// its own persistent entry.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    WalletWasmHash,
    CloneCount,
    Wallet(u32),
}
