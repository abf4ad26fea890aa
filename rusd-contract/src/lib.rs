#![no_std]
mod admins;
mod exchange;
mod tests;

use ledger::auth;
use ledger::settings;
use ledger::token_base::TokenContractBase;
use ledger::types::TokenConfig;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

#[contract]
pub struct RusdTokenContract;

#[contractimpl]
impl RusdTokenContract {
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

    // Check whether the address has been granted admin rights
    //
    // # Arguments
    //
    // * `address` - Account address
    //
    // # Returns
    //
    // Admin membership flag
    pub fn admins(e: &Env, address: Address) -> bool {
        admins::is_admin(e, &address)
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

    /* Exchange section */

    // Buy stock units paying with a stable token
    // Requires operator (owner or admin) and buyer authorization
    //
    // # Arguments
    //
    // * `operator` - Owner or admin executing the trade
    // * `buyer` - Account paying and receiving stock units
    // * `payment_token` - Stable token used for payment, RUSD payments are burned
    // * `stock_token` - Stock token ledger
    // * `payment_amount` - Amount of payment tokens to spend
    // * `price` - Payment token base units per one whole stock token
    //
    // # Returns
    //
    // Amount of stock units credited to the buyer
    //
    // # Panics
    //
    // Panics if not authorized, price or amount are invalid, or buyer balance is insufficient
    pub fn buy_stock(
        e: &Env,
        operator: Address,
        buyer: Address,
        payment_token: Address,
        stock_token: Address,
        payment_amount: i128,
        price: i128,
    ) -> i128 {
        exchange::buy_stock(
            e,
            operator,
            buyer,
            payment_token,
            stock_token,
            payment_amount,
            price,
        )
    }

    // Sell stock units for RUSD
    // Requires operator (owner or admin) and seller authorization
    //
    // # Arguments
    //
    // * `operator` - Owner or admin executing the trade
    // * `seller` - Account selling stock units
    // * `rusd_token` - RUSD ledger address, must point to this contract
    // * `stock_token` - Stock token ledger
    // * `stock_amount` - Amount of stock units to sell
    // * `price` - RUSD base units per one whole stock token
    //
    // # Returns
    //
    // Amount of RUSD credited to the seller
    //
    // # Panics
    //
    // Panics if not authorized, price or amount are invalid, or seller balance is insufficient
    pub fn sell_stock(
        e: &Env,
        operator: Address,
        seller: Address,
        rusd_token: Address,
        stock_token: Address,
        stock_amount: i128,
        price: i128,
    ) -> i128 {
        exchange::sell_stock(
            e,
            operator,
            seller,
            rusd_token,
            stock_token,
            stock_amount,
            price,
        )
    }

    // Redeem RUSD for a stable token held in the reserve
    // Requires operator (owner or admin) and seller authorization
    //
    // # Arguments
    //
    // * `operator` - Owner or admin executing the trade
    // * `seller` - Account redeeming RUSD
    // * `payment_token` - Stable token paid out from the reserve
    // * `rusd_amount` - Amount of RUSD to burn
    // * `payment_amount` - Amount of payment tokens to pay out
    //
    // # Panics
    //
    // Panics if not authorized, amounts are invalid, or balances are insufficient
    pub fn sell_rusd(
        e: &Env,
        operator: Address,
        seller: Address,
        payment_token: Address,
        rusd_amount: i128,
        payment_amount: i128,
    ) {
        exchange::sell_rusd(e, operator, seller, payment_token, rusd_amount, payment_amount);
    }

    // Issue RUSD against a stable token deposited into the reserve
    // Requires operator (owner or admin) and buyer authorization
    //
    // # Arguments
    //
    // * `operator` - Owner or admin executing the trade
    // * `buyer` - Account depositing payment tokens
    // * `payment_token` - Stable token moved into the reserve
    // * `payment_amount` - Amount of payment tokens to deposit
    // * `rusd_amount` - Amount of RUSD to mint
    //
    // # Panics
    //
    // Panics if not authorized, amounts are invalid, or buyer balance is insufficient
    pub fn buy_rusd(
        e: &Env,
        operator: Address,
        buyer: Address,
        payment_token: Address,
        payment_amount: i128,
        rusd_amount: i128,
    ) {
        exchange::buy_rusd(e, operator, buyer, payment_token, payment_amount, rusd_amount);
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

    // Grant or revoke admin rights
    // Requires owner authorization
    //
    // # Arguments
    //
    // * `address` - Account address
    // * `enabled` - Whether the account should be an admin
    //
    // # Panics
    //
    // Panics if not authorized
    pub fn add_or_remove_admin(e: &Env, address: Address, enabled: bool) {
        auth::panic_if_not_owner(e);
        admins::set_admin(e, &address, enabled);
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
