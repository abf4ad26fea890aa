use soroban_sdk::{contractclient, Address, Env, String};

// Cross-contract view of a stable token ledger (RUSD, BUSD)
#[contractclient(name = "StableTokenClient")]
pub trait StableTokenInterface {
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn decimals(env: Env) -> u32;
    fn total_supply(env: Env) -> i128;
    fn balance(env: Env, id: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
    fn mint(env: Env, to: Address, amount: i128);
    fn burn(env: Env, from: Address, amount: i128);
}

// Cross-contract view of a stock token ledger, mint/burn are reserved for its RUSD address
#[contractclient(name = "StockTokenClient")]
pub trait StockTokenInterface {
    fn decimals(env: Env) -> u32;
    fn total_supply(env: Env) -> i128;
    fn balance(env: Env, id: Address) -> i128;
    fn rusd_address(env: Env) -> Option<Address>;
    fn mint(env: Env, to: Address, amount: i128);
    fn burn(env: Env, from: Address, amount: i128);
}
