use crate::admins;
use ledger::balances;
use ledger::interface::{StableTokenClient, StockTokenClient};
use ledger::pricing;
use ledger::token_base::TokenContractBase;
use ledger::types::Error;
use soroban_sdk::{contractevent, log, panic_with_error, Address, Env};

#[contractevent(topics = ["exchange", "buy_stock"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StockBoughtEvent {
    #[topic]
    pub buyer: Address,
    pub payment_token: Address,
    pub stock_token: Address,
    pub payment_amount: i128,
    pub price: i128,
    pub stock_amount: i128,
}

#[contractevent(topics = ["exchange", "sell_stock"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StockSoldEvent {
    #[topic]
    pub seller: Address,
    pub stock_token: Address,
    pub stock_amount: i128,
    pub price: i128,
    pub rusd_amount: i128,
}

#[contractevent(topics = ["exchange", "swap_rusd"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RusdSwapEvent {
    #[topic]
    pub account: Address,
    pub payment_token: Address,
    pub payment_amount: i128,
    pub rusd_amount: i128,
    // true when RUSD has been sold for the payment token
    pub sold: bool,
}

// Whether the token address points to this RUSD ledger
#[inline]
fn is_rusd(e: &Env, token: &Address) -> bool {
    *token == e.current_contract_address()
}

// Payment tokens other than RUSD are held in the contract reserve
fn panic_if_rusd(e: &Env, token: &Address) {
    if is_rusd(e, token) {
        panic_with_error!(e, Error::InvalidToken);
    }
}

// Take payment from the account, RUSD is burned while other tokens go to the reserve
fn collect_payment(e: &Env, from: &Address, token: &Address, amount: i128) {
    if is_rusd(e, token) {
        TokenContractBase::retire(e, from, amount);
    } else {
        StableTokenClient::new(e, token).transfer(from, &e.current_contract_address(), &amount);
    }
}

// Purchase stock units for the payment token at the quoted price
pub fn buy_stock(
    e: &Env,
    operator: Address,
    buyer: Address,
    payment_token: Address,
    stock_token: Address,
    payment_amount: i128,
    price: i128,
) -> i128 {
    admins::panic_if_not_operator(e, &operator);
    buyer.require_auth();
    let stock = StockTokenClient::new(e, &stock_token);
    //resolve amount of stock units to credit
    let stock_amount = pricing::stock_units_for_payment(e, payment_amount, price, stock.decimals())
        .unwrap_or_else(|err| panic_with_error!(e, err));
    collect_payment(e, &buyer, &payment_token, payment_amount);
    stock.mint(&buyer, &stock_amount);
    log!(e, "stock bought", buyer, payment_amount, stock_amount);
    e.events().publish_event(&StockBoughtEvent {
        buyer,
        payment_token,
        stock_token,
        payment_amount,
        price,
        stock_amount,
    });
    stock_amount
}

// Sell stock units for RUSD at the quoted price
pub fn sell_stock(
    e: &Env,
    operator: Address,
    seller: Address,
    rusd_token: Address,
    stock_token: Address,
    stock_amount: i128,
    price: i128,
) -> i128 {
    admins::panic_if_not_operator(e, &operator);
    seller.require_auth();
    //proceeds are always credited in this ledger
    if !is_rusd(e, &rusd_token) {
        panic_with_error!(e, Error::InvalidToken);
    }
    let stock = StockTokenClient::new(e, &stock_token);
    let rusd_amount = pricing::payment_for_stock_units(e, stock_amount, price, stock.decimals())
        .unwrap_or_else(|err| panic_with_error!(e, err));
    stock.burn(&seller, &stock_amount);
    TokenContractBase::issue(e, &seller, rusd_amount);
    log!(e, "stock sold", seller, stock_amount, rusd_amount);
    e.events().publish_event(&StockSoldEvent {
        seller,
        stock_token,
        stock_amount,
        price,
        rusd_amount,
    });
    rusd_amount
}

// Redeem RUSD for the payment token held in the reserve
pub fn sell_rusd(
    e: &Env,
    operator: Address,
    seller: Address,
    payment_token: Address,
    rusd_amount: i128,
    payment_amount: i128,
) {
    admins::panic_if_not_operator(e, &operator);
    seller.require_auth();
    panic_if_rusd(e, &payment_token);
    balances::check_positive_amount(e, payment_amount);
    TokenContractBase::retire(e, &seller, rusd_amount);
    StableTokenClient::new(e, &payment_token).transfer(
        &e.current_contract_address(),
        &seller,
        &payment_amount,
    );
    log!(e, "rusd sold", seller, rusd_amount, payment_amount);
    e.events().publish_event(&RusdSwapEvent {
        account: seller,
        payment_token,
        payment_amount,
        rusd_amount,
        sold: true,
    });
}

// Issue RUSD against the payment token deposited into the reserve
pub fn buy_rusd(
    e: &Env,
    operator: Address,
    buyer: Address,
    payment_token: Address,
    payment_amount: i128,
    rusd_amount: i128,
) {
    admins::panic_if_not_operator(e, &operator);
    buyer.require_auth();
    panic_if_rusd(e, &payment_token);
    balances::check_positive_amount(e, payment_amount);
    collect_payment(e, &buyer, &payment_token, payment_amount);
    TokenContractBase::issue(e, &buyer, rusd_amount);
    log!(e, "rusd bought", buyer, payment_amount, rusd_amount);
    e.events().publish_event(&RusdSwapEvent {
        account: buyer,
        payment_token,
        payment_amount,
        rusd_amount,
        sold: false,
    });
}
