use crate::types::Error;
use soroban_sdk::{panic_with_error, Address, Env};

//storage keys
const OWNER_KEY: &str = "owner";
const REF_WALLET_KEY: &str = "ref_wallet";

// Get contract owner address
#[inline]
pub fn get_owner(e: &Env) -> Option<Address> {
    e.storage().instance().get(&OWNER_KEY)
}

// Set contract owner address
#[inline]
pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&OWNER_KEY, owner);
}

// Get current ref wallet address
#[inline]
pub fn get_ref_wallet(e: &Env) -> Option<Address> {
    e.storage().instance().get(&REF_WALLET_KEY)
}

// Set ref wallet address
#[inline]
pub fn set_ref_wallet(e: &Env, ref_wallet: &Address) {
    e.storage().instance().set(&REF_WALLET_KEY, ref_wallet);
}

// Throw exception if call hasn't been authorized by owner
#[inline]
pub fn panic_if_not_owner(e: &Env) -> Address {
    require_role(e, get_owner(e))
}

// Throw exception if call hasn't been authorized by ref wallet
#[inline]
pub fn panic_if_not_ref_wallet(e: &Env) -> Address {
    require_role(e, get_ref_wallet(e))
}

// Require authorization from the address holding a role, unset role means nobody holds it
pub fn require_role(e: &Env, holder: Option<Address>) -> Address {
    match holder {
        Some(address) => {
            address.require_auth();
            address
        }
        None => panic_with_error!(e, Error::Unauthorized),
    }
}
