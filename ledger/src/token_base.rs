use crate::types::TokenConfig;
use crate::{auth, balances, events, settings};
use soroban_sdk::{Address, BytesN, Env, String};

pub struct TokenContractBase;

impl TokenContractBase {
    // Return token name
    //
    // # Returns
    //
    // Token name set at configuration
    pub fn name(e: &Env) -> String {
        settings::get_name(e)
    }

    // Return token symbol
    //
    // # Returns
    //
    // Token ticker symbol set at configuration
    pub fn symbol(e: &Env) -> String {
        settings::get_symbol(e)
    }

    // Return number of decimal places used to represent token amounts
    //
    // # Returns
    //
    // Number of decimals places
    pub fn decimals(e: &Env) -> u32 {
        settings::get_decimals(e)
    }

    // Return total amount of tokens in circulation
    //
    // # Returns
    //
    // Total minted minus total burned
    pub fn total_supply(e: &Env) -> i128 {
        balances::read_total_supply(e)
    }

    // Return account balance
    //
    // # Arguments
    //
    // * `id` - Account address
    //
    // # Returns
    //
    // Account balance, zero for unknown accounts
    pub fn balance(e: &Env, id: Address) -> i128 {
        balances::read_balance(e, &id)
    }

    // Return current contract protocol version
    //
    // # Returns
    //
    // Contract major version
    pub fn version(_e: &Env) -> u32 {
        env!("CARGO_PKG_VERSION")
            .split(".")
            .next()
            .unwrap()
            .parse::<u32>()
            .unwrap()
    }

    // Return contract owner address
    //
    // # Returns
    //
    // Owner account address or None if not configured
    pub fn owner(e: &Env) -> Option<Address> {
        auth::get_owner(e)
    }

    // Return ref wallet address
    //
    // # Returns
    //
    // Ref wallet address or None if not assigned yet
    pub fn ref_wallet_address(e: &Env) -> Option<Address> {
        auth::get_ref_wallet(e)
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
    // Panics if not authorized, amount is not positive or sender balance is insufficient
    pub fn transfer(e: &Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        balances::transfer(e, &from, &to, amount);
        settings::bump_instance(e);
        events::publish_transfer_event(e, &from, &to, amount);
    }

    // Mint tokens without role checks, callers are responsible for authorization
    pub fn issue(e: &Env, to: &Address, amount: i128) {
        balances::mint(e, to, amount);
        settings::bump_instance(e);
        events::publish_mint_event(e, to, amount);
    }

    // Burn tokens without role checks, callers are responsible for authorization
    pub fn retire(e: &Env, from: &Address, amount: i128) {
        balances::burn(e, from, amount);
        settings::bump_instance(e);
        events::publish_burn_event(e, from, amount);
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
    // Panics if ref wallet is not assigned or has not authorized the call, or amount is not positive
    pub fn ref_wallet_mint(e: &Env, to: Address, amount: i128) {
        auth::panic_if_not_ref_wallet(e);
        Self::issue(e, &to, amount);
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
    // Panics if not authorized, amount is not positive or exceeds account balance
    pub fn ref_wallet_burn(e: &Env, from: Address, amount: i128) {
        auth::panic_if_not_ref_wallet(e);
        Self::retire(e, &from, amount);
    }

    /* Owner section */

    // Initializes token configuration
    // Requires owner authorization
    //
    // # Arguments
    //
    // * `config` - Owner, metadata and optional ref wallet
    //
    // # Panics
    //
    // Panics if not authorized or if contract is already initialized
    pub fn config(e: &Env, config: TokenConfig) {
        //should be invoked by owner
        config.owner.require_auth();
        settings::init(e, &config);
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
        auth::panic_if_not_owner(e);
        auth::set_ref_wallet(e, &ref_wallet);
        settings::bump_instance(e);
        events::publish_ref_wallet_event(e, &ref_wallet);
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
        auth::panic_if_not_owner(e);
        e.deployer().update_current_contract_wasm(wasm_hash);
    }
}
