use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, Env, Executable, String, Vec,
};

use crate::errors::WalletError;
use crate::events::{ExecutionDeferred, QuorumUpdated, TxApproved, TxExecuted, TxProposed};
use crate::types::{
    DataKey, Transaction, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, MAX_PAGE_SIZE,
    TX_BUMP_AMOUNT, TX_LIFETIME_THRESHOLD,
};

// Strkeys of the all-zero account and contract ids. Soroban has no null
// address, so these stand in for it.
const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

/// Quorum-gated custodial wallet.
///
/// Any signer may propose a token transfer out of the wallet. The proposal
/// executes once `quorum` distinct signers, the proposer included, have
/// approved it.
#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    /// Fixes the signer set and the initial quorum. Deploy and initialize in
    /// one transaction (the factory does), or anyone may claim the wallet.
    pub fn initialize(env: Env, quorum: u32, signers: Vec<Address>) {
        if env.storage().instance().has(&DataKey::Initialized) {
            panic_with_error!(&env, WalletError::AlreadyInitialized);
        }

        for signer in signers.iter() {
            if Self::is_zero_address(&env, &signer) {
                panic_with_error!(&env, WalletError::InvalidSignerAddress);
            }
        }

        // Check for duplicate signers
        for i in 0..signers.len() {
            for j in (i + 1)..signers.len() {
                if signers.get_unchecked(i) == signers.get_unchecked(j) {
                    panic_with_error!(&env, WalletError::DuplicateSigner);
                }
            }
        }

        if quorum <= 1 {
            panic_with_error!(&env, WalletError::QuorumMustExceedOne);
        }

        if quorum > signers.len() {
            panic_with_error!(&env, WalletError::QuorumExceedsSignerCount);
        }

        let storage = env.storage().instance();
        storage.set(&DataKey::Initialized, &true);
        storage.set(&DataKey::Quorum, &quorum);
        storage.set(&DataKey::TxCount, &0u64);
        for signer in signers.iter() {
            storage.set(&DataKey::Signer(signer), &true);
        }
        storage.set(&DataKey::Signers, &signers);
        Self::extend_instance(&env);

        log!(&env, "wallet initialized", quorum, signers.len());
    }

    /// Proposes a transfer of `amount` of `token_address` to `recipient`.
    ///
    /// The caller's approval is recorded with the proposal. No funds move
    /// until quorum is reached. Returns the new transaction id.
    pub fn transfer(
        env: Env,
        caller: Address,
        amount: i128,
        recipient: Address,
        token_address: Address,
    ) -> u64 {
        Self::require_initialized(&env);
        caller.require_auth();

        Self::require_signer(&env, &caller);

        if Self::is_zero_address(&env, &recipient) || Self::is_zero_address(&env, &token_address)
        {
            panic_with_error!(&env, WalletError::ZeroAddress);
        }

        if amount <= 0 {
            panic_with_error!(&env, WalletError::ZeroAmount);
        }

        if Self::balance_of(&env, &token_address) < amount {
            panic_with_error!(&env, WalletError::InsufficientFunds);
        }

        let tx_id = Self::get_transaction_count(env.clone()) + 1;
        env.storage().instance().set(&DataKey::TxCount, &tx_id);

        let tx = Transaction {
            id: tx_id,
            proposer: caller.clone(),
            amount,
            recipient: recipient.clone(),
            token_address: token_address.clone(),
            approval_count: 1,
            approved_by: Vec::from_array(&env, [caller.clone()]),
            completed: false,
        };
        Self::save_transaction(&env, &tx);
        Self::extend_instance(&env);

        TxProposed {
            tx_id,
            proposer: caller,
            recipient,
            token_address,
            amount,
        }
        .publish(&env);

        tx_id
    }

    /// Records the caller's approval of `tx_id`.
    ///
    /// The approval that brings the transaction to quorum also executes it
    /// when the wallet holds enough of the token. Otherwise the approval
    /// stands and the transfer waits for `execute_tx`.
    pub fn approve_tx(env: Env, caller: Address, tx_id: u64) {
        Self::require_initialized(&env);
        caller.require_auth();

        let mut tx = Self::load_transaction(&env, tx_id);

        if tx.completed {
            panic_with_error!(&env, WalletError::AlreadyCompleted);
        }

        Self::require_signer(&env, &caller);

        if tx.approved_by.contains(&caller) {
            panic_with_error!(&env, WalletError::AlreadySigned);
        }

        tx.approved_by.push_back(caller.clone());
        tx.approval_count += 1;

        TxApproved {
            tx_id,
            signer: caller,
            approval_count: tx.approval_count,
        }
        .publish(&env);

        if tx.approval_count >= Self::get_quorum(env.clone()) {
            let balance = Self::balance_of(&env, &tx.token_address);
            if balance >= tx.amount {
                Self::execute(&env, &mut tx);
            } else {
                log!(&env, "quorum reached without funds", tx_id, balance, tx.amount);
                ExecutionDeferred {
                    tx_id,
                    balance,
                    amount: tx.amount,
                }
                .publish(&env);
            }
        }

        Self::save_transaction(&env, &tx);
        Self::extend_instance(&env);
    }

    /// Executes a transaction that already holds enough approvals.
    ///
    /// This is the retry path for a transfer that reached quorum while the
    /// wallet was underfunded, or whose quorum was lowered afterwards.
    pub fn execute_tx(env: Env, caller: Address, tx_id: u64) {
        Self::require_initialized(&env);
        caller.require_auth();

        Self::require_signer(&env, &caller);

        let mut tx = Self::load_transaction(&env, tx_id);

        if tx.completed {
            panic_with_error!(&env, WalletError::AlreadyCompleted);
        }

        if tx.approval_count < Self::get_quorum(env.clone()) {
            panic_with_error!(&env, WalletError::QuorumNotReached);
        }

        if Self::balance_of(&env, &tx.token_address) < tx.amount {
            panic_with_error!(&env, WalletError::InsufficientFunds);
        }

        Self::execute(&env, &mut tx);
        Self::save_transaction(&env, &tx);
        Self::extend_instance(&env);
    }

    /// Replaces the quorum. Any single signer may do this.
    pub fn update_quorum(env: Env, caller: Address, new_quorum: u32) {
        Self::require_initialized(&env);

        // The zero address can never authorize, so reject it before asking.
        if Self::is_zero_address(&env, &caller) {
            panic_with_error!(&env, WalletError::ZeroAddress);
        }

        caller.require_auth();

        Self::require_signer(&env, &caller);

        if new_quorum == 0 {
            panic_with_error!(&env, WalletError::ZeroQuorum);
        }

        if new_quorum == 1 {
            panic_with_error!(&env, WalletError::QuorumMustExceedOne);
        }

        if new_quorum > Self::signer_count(env.clone()) {
            panic_with_error!(&env, WalletError::QuorumExceedsSignerCount);
        }

        let old_quorum = Self::get_quorum(env.clone());
        env.storage().instance().set(&DataKey::Quorum, &new_quorum);
        Self::extend_instance(&env);

        QuorumUpdated {
            signer: caller,
            old_quorum,
            new_quorum,
        }
        .publish(&env);
    }

    pub fn get_quorum(env: Env) -> u32 {
        Self::require_initialized(&env);
        env.storage().instance().get(&DataKey::Quorum).unwrap()
    }

    pub fn get_signers(env: Env) -> Vec<Address> {
        Self::require_initialized(&env);
        env.storage().instance().get(&DataKey::Signers).unwrap()
    }

    pub fn signer_count(env: Env) -> u32 {
        Self::get_signers(env).len()
    }

    pub fn is_signer(env: Env, account: Address) -> bool {
        env.storage().instance().has(&DataKey::Signer(account))
    }

    pub fn get_transaction(env: Env, tx_id: u64) -> Transaction {
        Self::load_transaction(&env, tx_id)
    }

    pub fn get_transaction_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::TxCount)
            .unwrap_or(0u64)
    }

    /// Up to `limit` transactions in id order, starting at `from_id`.
    /// Pages are capped at 50 entries.
    pub fn get_transactions(env: Env, from_id: u64, limit: u32) -> Vec<Transaction> {
        let mut txs = Vec::new(&env);
        let count = Self::get_transaction_count(env.clone());
        let first = from_id.max(1);
        let page = limit.min(MAX_PAGE_SIZE) as u64;
        if page == 0 || first > count {
            return txs;
        }

        let last = first.saturating_add(page - 1).min(count);
        for tx_id in first..=last {
            txs.push_back(Self::load_transaction(&env, tx_id));
        }
        txs
    }

    pub fn has_approved(env: Env, tx_id: u64, account: Address) -> bool {
        Self::load_transaction(&env, tx_id)
            .approved_by
            .contains(&account)
    }

    fn require_initialized(env: &Env) {
        if !env.storage().instance().has(&DataKey::Initialized) {
            panic_with_error!(env, WalletError::NotInitialized);
        }
    }

    fn require_signer(env: &Env, account: &Address) {
        if !env
            .storage()
            .instance()
            .has(&DataKey::Signer(account.clone()))
        {
            panic_with_error!(env, WalletError::NotAValidSigner);
        }
    }

    fn load_transaction(env: &Env, tx_id: u64) -> Transaction {
        let key = DataKey::Transaction(tx_id);
        let tx: Transaction = env
            .storage()
            .persistent()
            .get(&key)
            .unwrap_or_else(|| panic_with_error!(env, WalletError::InvalidTransactionId));
        env.storage()
            .persistent()
            .extend_ttl(&key, TX_LIFETIME_THRESHOLD, TX_BUMP_AMOUNT);
        tx
    }

    fn save_transaction(env: &Env, tx: &Transaction) {
        let key = DataKey::Transaction(tx.id);
        env.storage().persistent().set(&key, tx);
        env.storage()
            .persistent()
            .extend_ttl(&key, TX_LIFETIME_THRESHOLD, TX_BUMP_AMOUNT);
    }

    fn extend_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    fn is_zero_address(env: &Env, address: &Address) -> bool {
        let account = Address::from_string(&String::from_str(env, ZERO_ACCOUNT));
        let contract = Address::from_string(&String::from_str(env, ZERO_CONTRACT));
        *address == account || *address == contract
    }

    // Only a deployed contract can be a ledger; calling into an account
    // address would trap the host.
    fn balance_of(env: &Env, token_address: &Address) -> i128 {
        match token_address.executable() {
            Some(Executable::Wasm(_)) | Some(Executable::StellarAsset) => {}
            _ => panic_with_error!(env, WalletError::InvalidTokenAddress),
        }
        token::Client::new(env, token_address).balance(&env.current_contract_address())
    }

    // Moves the funds and marks the transaction completed. A ledger failure
    // aborts the whole invocation, so nothing recorded by the caller sticks.
    fn execute(env: &Env, tx: &mut Transaction) {
        let token_client = token::Client::new(env, &tx.token_address);
        let result =
            token_client.try_transfer(&env.current_contract_address(), &tx.recipient, &tx.amount);
        if !matches!(result, Ok(Ok(()))) {
            panic_with_error!(env, WalletError::LedgerTransferFailed);
        }

        tx.completed = true;
        log!(env, "transaction executed", tx.id);

        TxExecuted {
            tx_id: tx.id,
            recipient: tx.recipient.clone(),
            amount: tx.amount,
        }
        .publish(env);
    }
}
