use soroban_sdk::{contractevent, Address, Vec};

#[contractevent]
pub struct WalletCreated {
    #[topic]
    pub wallet: Address,
    pub index: u32,
    pub quorum: u32,
    pub signers: Vec<Address>,
}
