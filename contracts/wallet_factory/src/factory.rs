use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env, Vec};

use crate::errors::FactoryError;
use crate::events::WalletCreated;
use crate::types::{
    DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, WALLET_BUMP_AMOUNT,
    WALLET_LIFETIME_THRESHOLD,
};
use crate::wallet::WalletClient;

/// Deploys independent multisig wallets from one uploaded wallet wasm and
/// keeps an append-only registry of every wallet it created.
///
/// The factory holds no authority over a wallet once deployed.
#[contract]
pub struct WalletFactory;

#[contractimpl]
impl WalletFactory {
    pub fn __constructor(env: Env, wallet_wasm_hash: BytesN<32>) {
        env.storage()
            .instance()
            .set(&DataKey::WalletWasmHash, &wallet_wasm_hash);
        env.storage().instance().set(&DataKey::CloneCount, &0u32);
        Self::extend_instance(&env);
    }

    /// Deploys a wallet with the given quorum and signers and records it.
    ///
    /// The wallet validates its own arguments. If it rejects them, the call
    /// fails with the wallet's own error code and nothing is recorded.
    pub fn create_multisig_wallet(env: Env, quorum: u32, signers: Vec<Address>) -> Address {
        let index = Self::get_clone_count(env.clone());
        let wasm_hash = Self::wallet_wasm_hash(env.clone());

        let wallet = env
            .deployer()
            .with_current_contract(Self::salt_for(&env, index))
            .deploy_v2(wasm_hash, ());

        match WalletClient::new(&env, &wallet).try_initialize(&quorum, &signers) {
            Ok(Ok(())) => {}
            Err(Ok(error)) => panic_with_error!(&env, error),
            _ => panic_with_error!(&env, FactoryError::WalletInitFailed),
        }

        let key = DataKey::Wallet(index);
        env.storage().persistent().set(&key, &wallet);
        env.storage()
            .persistent()
            .extend_ttl(&key, WALLET_LIFETIME_THRESHOLD, WALLET_BUMP_AMOUNT);
        env.storage()
            .instance()
            .set(&DataKey::CloneCount, &(index + 1));
        Self::extend_instance(&env);

        log!(&env, "wallet deployed", index, quorum);

        WalletCreated {
            wallet: wallet.clone(),
            index,
            quorum,
            signers,
        }
        .publish(&env);

        wallet
    }

    pub fn get_multisig_clones(env: Env) -> Vec<Address> {
        let mut clones = Vec::new(&env);
        for index in 0..Self::get_clone_count(env.clone()) {
            clones.push_back(Self::get_clone(env.clone(), index));
        }
        clones
    }

    pub fn get_clone(env: Env, index: u32) -> Address {
        let key = DataKey::Wallet(index);
        let wallet: Address = env
            .storage()
            .persistent()
            .get(&key)
            .unwrap_or_else(|| panic_with_error!(&env, FactoryError::CloneNotFound));
        env.storage()
            .persistent()
            .extend_ttl(&key, WALLET_LIFETIME_THRESHOLD, WALLET_BUMP_AMOUNT);
        wallet
    }

    pub fn get_clone_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::CloneCount)
            .unwrap_or(0u32)
    }

    pub fn wallet_wasm_hash(env: Env) -> BytesN<32> {
        env.storage()
            .instance()
            .get(&DataKey::WalletWasmHash)
            .unwrap()
    }

    fn extend_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    // Registry position as a big-endian salt, so every wallet gets its own
    // deterministic address.
    fn salt_for(env: &Env, index: u32) -> BytesN<32> {
        let mut salt = [0u8; 32];
        salt[28..].copy_from_slice(&index.to_be_bytes());
        BytesN::from_array(env, &salt)
    }
}
