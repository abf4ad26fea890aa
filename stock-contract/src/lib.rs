#![no_std]
mod rusd;

use ledger::token_base::TokenContractBase;
use ledger::types::TokenConfig;
use ledger::{auth, settings};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

#[contract]
pub struct StockTokenContract;

#[contractimpl]
impl StockTokenContract {
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

    // Return number of decimal places used to represent stock units
    //
    // # Returns
    //
    // Number of decimals places
    pub fn decimals(e: &Env) -> u32 {
        TokenContractBase::decimals(e)
    }

    // Return total amount of stock units in circulation
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
    // Ref wallet address or None if not assigned
    pub fn ref_wallet_address(e: &Env) -> Option<Address> {
        TokenContractBase::ref_wallet_address(e)
    }

    // Return RUSD ledger address
    //
    // # Returns
    //
    // Address allowed to mint and burn stock units or None if not assigned
    pub fn rusd_address(e: &Env) -> Option<Address> {
        rusd::get_rusd_address(e)
    }

    // Transfer stock units between accounts
    // Requires sender authorization
    //
    // # Arguments
    //
    // * `from` - Sender address
    // * `to` - Recipient address
    // * `amount` - Amount of units to move
    //
    // # Panics
    //
    // Panics if not authorized or sender balance is insufficient
    pub fn transfer(e: &Env, from: Address, to: Address, amount: i128) {
        TokenContractBase::transfer(e, from, to, amount);
    }

    /* RUSD section */

    // Mint stock units to the account
    // Requires RUSD ledger authorization
    //
    // # Arguments
    //
    // * `to` - Recipient address
    // * `amount` - Amount of units to mint
    //
    // # Panics
    //
    // Panics if RUSD address is not assigned or has not authorized the call
    pub fn mint(e: &Env, to: Address, amount: i128) {
        rusd::panic_if_not_rusd(e);
        TokenContractBase::issue(e, &to, amount);
    }

    // Burn stock units from the account
    // Requires RUSD ledger authorization
    //
    // # Arguments
    //
    // * `from` - Account to burn units from
    // * `amount` - Amount of units to burn
    //
    // # Panics
    //
    // Panics if not authorized or amount exceeds account balance
    pub fn burn(e: &Env, from: Address, amount: i128) {
        rusd::panic_if_not_rusd(e);
        TokenContractBase::retire(e, &from, amount);
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

    // Assign RUSD ledger address
    // Requires owner authorization
    //
    // # Arguments
    //
    // * `rusd_address` - Address allowed to mint and burn stock units
    //
    // # Panics
    //
    // Panics if not authorized
    pub fn set_rusd_address(e: &Env, rusd_address: Address) {
        auth::panic_if_not_owner(e);
        rusd::set_rusd_address(e, &rusd_address);
        settings::bump_instance(e);
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
