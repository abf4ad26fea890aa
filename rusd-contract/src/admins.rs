use ledger::auth;
use ledger::settings::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use ledger::types::{DataKey, Error};
use soroban_sdk::{contractevent, panic_with_error, Address, Env};

#[contractevent(topics = ["admin"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminEvent {
    #[topic]
    pub admin: Address,
    pub enabled: bool,
}

// Check admin membership
pub fn is_admin(e: &Env, address: &Address) -> bool {
    let key = DataKey::Admin(address.clone());
    let storage = e.storage().persistent();
    match storage.get::<DataKey, bool>(&key) {
        Some(flag) => {
            storage.extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            flag
        }
        None => false,
    }
}

// Grant or revoke admin membership
pub fn set_admin(e: &Env, address: &Address, enabled: bool) {
    let key = DataKey::Admin(address.clone());
    let storage = e.storage().persistent();
    if enabled {
        storage.set(&key, &true);
        storage.extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    } else {
        storage.remove(&key);
    }
    e.events().publish_event(&AdminEvent {
        admin: address.clone(),
        enabled,
    });
}

// Throw exception if the operator is neither owner nor admin, or hasn't authorized the call
pub fn panic_if_not_operator(e: &Env, operator: &Address) {
    operator.require_auth();
    if auth::get_owner(e).as_ref() == Some(operator) {
        return;
    }
    if !is_admin(e, operator) {
        panic_with_error!(e, Error::Unauthorized);
    }
}
