use ledger::auth;
use soroban_sdk::{contractevent, Address, Env};

const RUSD_ADDRESS_KEY: &str = "rusd_address";

#[contractevent(topics = ["rusd_address"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RusdAddressEvent {
    pub rusd_address: Address,
}

// Get address of the RUSD ledger allowed to mint and burn stock units
#[inline]
pub fn get_rusd_address(e: &Env) -> Option<Address> {
    e.storage().instance().get(&RUSD_ADDRESS_KEY)
}

#[inline]
pub fn set_rusd_address(e: &Env, rusd_address: &Address) {
    e.storage().instance().set(&RUSD_ADDRESS_KEY, rusd_address);
    e.events().publish_event(&RusdAddressEvent {
        rusd_address: rusd_address.clone(),
    });
}

// Throw exception if call hasn't been authorized by the RUSD ledger
#[inline]
pub fn panic_if_not_rusd(e: &Env) {
    auth::require_role(e, get_rusd_address(e));
}
