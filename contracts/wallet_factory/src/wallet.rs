use soroban_sdk::{contractclient, Address, Env, Vec};

/// The part of the wallet contract the factory calls after deploying it.
#[contractclient(name = "WalletClient")]
pub trait WalletInterface {
    fn initialize(env: Env, quorum: u32, signers: Vec<Address>);
}
