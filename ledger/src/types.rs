use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
// Token deployment parameters
pub struct TokenConfig {
    // Owner address, immutable once configured
    pub owner: Address,
    // Token name
    pub name: String,
    // Token ticker symbol
    pub symbol: String,
    // Number of decimal places used to represent token amounts
    pub decimals: u32,
    // Optional ref wallet assigned at deployment
    pub ref_wallet: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
// Persistent per-account storage keys
pub enum DataKey {
    // Account balance
    Balance(Address),
    // Admin membership flag
    Admin(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
// Standard contract errors
pub enum Error {
    // Contract already initialized
    AlreadyInitialized = 0,
    // Caller is not authorized to perform operation
    Unauthorized = 1,
    // Account balance is lower than requested amount
    InsufficientBalance = 2,
    // Amount is invalid (negative, zero, or rounds down to zero)
    InvalidAmount = 3,
    // Price is invalid (negative or zero)
    InvalidPrice = 4,
    // Arithmetic overflow
    Overflow = 5,
    // Token address doesn't match the expected ledger
    InvalidToken = 6,
    // Contract has not been configured yet
    NotInitialized = 7,
}
