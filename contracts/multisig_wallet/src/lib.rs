#![no_std]

mod errors;
mod events;
mod types;
mod wallet;

pub use crate::errors::WalletError;
pub use crate::types::Transaction;
pub use crate::wallet::{MultisigWallet, MultisigWalletClient};
