#![no_std]

mod errors;
mod events;
mod factory;
mod types;
mod wallet;

pub use crate::errors::FactoryError;
pub use crate::factory::{WalletFactory, WalletFactoryClient};
