use crate::settings::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use crate::types::{DataKey, Error};
use soroban_sdk::{panic_with_error, Address, Env};

//storage keys
const TOTAL_SUPPLY_KEY: &str = "total_supply";

// Read account balance, absent record means zero
pub fn read_balance(e: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    let storage = e.storage().persistent();
    match storage.get::<DataKey, i128>(&key) {
        Some(balance) => {
            storage.extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

fn write_balance(e: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    let storage = e.storage().persistent();
    storage.set(&key, &amount);
    storage.extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

// Current total supply
pub fn read_total_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&TOTAL_SUPPLY_KEY)
        .unwrap_or_default()
}

fn write_total_supply(e: &Env, supply: i128) {
    e.storage().instance().set(&TOTAL_SUPPLY_KEY, &supply);
}

// Throw exception if the amount is not strictly positive
#[inline]
pub fn check_positive_amount(e: &Env, amount: i128) {
    if amount <= 0 {
        panic_with_error!(e, Error::InvalidAmount);
    }
}

// Credit account balance
pub fn receive_balance(e: &Env, id: &Address, amount: i128) {
    let balance = read_balance(e, id)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(e, Error::Overflow));
    write_balance(e, id, balance);
}

// Debit account balance
pub fn spend_balance(e: &Env, id: &Address, amount: i128) {
    let balance = read_balance(e, id);
    if balance < amount {
        panic_with_error!(e, Error::InsufficientBalance);
    }
    write_balance(e, id, balance - amount);
}

// Create new units and credit them to the account
pub fn mint(e: &Env, to: &Address, amount: i128) {
    check_positive_amount(e, amount);
    let supply = read_total_supply(e)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(e, Error::Overflow));
    receive_balance(e, to, amount);
    write_total_supply(e, supply);
}

// Destroy units held by the account
pub fn burn(e: &Env, from: &Address, amount: i128) {
    check_positive_amount(e, amount);
    spend_balance(e, from, amount);
    //supply always covers every individual balance
    write_total_supply(e, read_total_supply(e) - amount);
}

// Move units between accounts
pub fn transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
    check_positive_amount(e, amount);
    spend_balance(e, from, amount);
    receive_balance(e, to, amount);
}
