use soroban_sdk::{contractevent, Address, Env};

#[contractevent(topics = ["mint"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintEvent {
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent(topics = ["burn"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BurnEvent {
    #[topic]
    pub from: Address,
    pub amount: i128,
}

#[contractevent(topics = ["transfer"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent(topics = ["ref_wallet"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefWalletEvent {
    pub ref_wallet: Address,
}

#[inline]
pub fn publish_mint_event(e: &Env, to: &Address, amount: i128) {
    let event = MintEvent {
        to: to.clone(),
        amount,
    };
    e.events().publish_event(&event);
}

#[inline]
pub fn publish_burn_event(e: &Env, from: &Address, amount: i128) {
    let event = BurnEvent {
        from: from.clone(),
        amount,
    };
    e.events().publish_event(&event);
}

#[inline]
pub fn publish_transfer_event(e: &Env, from: &Address, to: &Address, amount: i128) {
    let event = TransferEvent {
        from: from.clone(),
        to: to.clone(),
        amount,
    };
    e.events().publish_event(&event);
}

#[inline]
pub fn publish_ref_wallet_event(e: &Env, ref_wallet: &Address) {
    let event = RefWalletEvent {
        ref_wallet: ref_wallet.clone(),
    };
    e.events().publish_event(&event);
}
