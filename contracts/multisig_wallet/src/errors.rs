use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    InvalidSignerAddress = 1,
    QuorumMustExceedOne = 2,
    QuorumExceedsSignerCount = 3,
    ZeroQuorum = 4,
    ZeroAddress = 5,
    ZeroAmount = 6,
    InsufficientFunds = 7,
    NotAValidSigner = 8,
    InvalidTransactionId = 9,
    AlreadyCompleted = 10,
    AlreadySigned = 11,
    LedgerTransferFailed = 12,
    DuplicateSigner = 13,
    QuorumNotReached = 14,
    NotInitialized = 15,
    AlreadyInitialized = 16,
    InvalidTokenAddress = 17,
}
