#![no_std]

use ledger::token_base::TokenContractBase;
use ledger::types::TokenConfig;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

#[contract]
pub struct BusdTokenContract;

#[contractimpl]
impl BusdTokenContract {
    // Return token name
    //
    // # Returns
    //
    // Token name
    pub fn name(e: &Env) -> String {
        TokenContractBase::name(e)
    }

    // Return token symbol
    //
    // # Returns
    //
    // Token ticker symbol
    pub fn symbol(e: &Env) -> String {
        TokenContractBase::symbol(e)
    }

    // Return number of decimal places used to represent token amounts
    //
    // # Returns
    //
    // Number of decimals places
    pub fn decimals(e: &Env) -> u32 {
        TokenContractBase::decimals(e)
    }

    // Return total amount of tokens in circulation
    //
    // # Returns
    //
    // Total supply
    pub fn total_supply(e: &Env) -> i128 {
        TokenContractBase::total_supply(e)
    }

    // Return account balance
    //
    // # Arguments
    //
    // * `id` - Account address
    //
    // # Returns
    //
    // Account balance
    pub fn balance(e: &Env, id: Address) -> i128 {
        TokenContractBase::balance(e, id)
    }

    // Return current contract protocol version
    //
    // # Returns
    //
    // Contract protocol version
    pub fn version(e: &Env) -> u32 {
        TokenContractBase::version(e)
    }

    // Return contract owner address
    //
    // # Returns
    //
    // Contract owner account address
    pub fn owner(e: &Env) -> Option<Address> {
        TokenContractBase::owner(e)
    }

    // Return ref wallet address
    //
    // # Returns
    //
    // Address allowed to mint and burn tokens
    pub fn ref_wallet_address(e: &Env) -> Option<Address> {
        TokenContractBase::ref_wallet_address(e)
    }

    // Transfer tokens between accounts
    // Requires sender authorization
    //
    // # Arguments
    //
    // * `from` - Sender address
    // * `to` - Recipient address
    // * `amount` - Amount of tokens to move
    //
    // # Panics
    //
    // Panics if not authorized or sender balance is insufficient
    pub fn transfer(e: &Env, from: Address, to: Address, amount: i128) {
        TokenContractBase::transfer(e, from, to, amount);
    }

    /* Ref wallet section */

    // Mint tokens to the account
    // Requires ref wallet authorization
    //
    // # Arguments
    //
    // * `to` - Recipient address
    // * `amount` - Amount of tokens to mint
    //
    // # Panics
    //
    // Panics if not authorized or ref wallet is not assigned
    pub fn mint(e: &Env, to: Address, amount: i128) {
        TokenContractBase::ref_wallet_mint(e, to, amount);
    }

    // Burn tokens from the account
    // Requires ref wallet authorization
    //
    // # Arguments
    //
    // * `from` - Account to burn tokens from
    // * `amount` - Amount of tokens to burn
    //
    // # Panics
    //
    // Panics if not authorized or amount exceeds account balance
    pub fn burn(e: &Env, from: Address, amount: i128) {
        TokenContractBase::ref_wallet_burn(e, from, amount);
    }

    /* Owner section */

    // Initializes token configuration
    // Requires owner authorization
    //
    // # Arguments
    //
    // * `config` - Configuration parameters
    //
    // # Panics
    //
    // Panics if not authorized or if contract is already initialized
    pub fn config(e: &Env, config: TokenConfig) {
        TokenContractBase::config(e, config);
    }

    // Assign ref wallet address
    // Requires owner authorization
    //
    // # Arguments
    //
    // * `ref_wallet` - New ref wallet address
    //
    // # Panics
    //
    // Panics if not authorized
    pub fn set_ref_wallet_address(e: &Env, ref_wallet: Address) {
        TokenContractBase::set_ref_wallet_address(e, ref_wallet);
    }

    // Update contract source code
    // Requires owner authorization
    //
    // # Arguments
    //
    // * `wasm_hash` - WASM hash of the contract source code
    //
    // # Panics
    //
    // Panics if not authorized
    pub fn update_contract(e: &Env, wasm_hash: BytesN<32>) {
        TokenContractBase::update_contract(e, wasm_hash);
    }
}
