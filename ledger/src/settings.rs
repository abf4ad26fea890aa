use crate::auth;
use crate::types::{Error, TokenConfig};
use soroban_sdk::{panic_with_error, Env, String};

//storage keys
const NAME_KEY: &str = "name";
const SYMBOL_KEY: &str = "symbol";
const DECIMALS_KEY: &str = "decimals";

const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[inline]
pub fn init(e: &Env, config: &TokenConfig) {
    //do not allow to initialize more than once
    if is_initialized(e) {
        panic_with_error!(e, Error::AlreadyInitialized);
    }
    let instance = e.storage().instance();
    //metadata is initialized only once and cannot be changed in the future
    instance.set(&NAME_KEY, &config.name);
    instance.set(&SYMBOL_KEY, &config.symbol);
    instance.set(&DECIMALS_KEY, &config.decimals);
    auth::set_owner(e, &config.owner);
    if let Some(ref_wallet) = &config.ref_wallet {
        auth::set_ref_wallet(e, ref_wallet);
    }
    bump_instance(e);
}

#[inline]
pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DECIMALS_KEY)
}

#[inline]
pub fn get_name(e: &Env) -> String {
    e.storage()
        .instance()
        .get(&NAME_KEY)
        .unwrap_or_else(|| panic_with_error!(e, Error::NotInitialized))
}

#[inline]
pub fn get_symbol(e: &Env) -> String {
    e.storage()
        .instance()
        .get(&SYMBOL_KEY)
        .unwrap_or_else(|| panic_with_error!(e, Error::NotInitialized))
}

#[inline]
pub fn get_decimals(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DECIMALS_KEY)
        .unwrap_or_else(|| panic_with_error!(e, Error::NotInitialized))
}

// Keep contract instance (settings, roles, supply) alive
#[inline]
pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
