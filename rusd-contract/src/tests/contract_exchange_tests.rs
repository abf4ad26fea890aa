#![cfg(test)]
extern crate std;

use crate::tests::setup_tests::{deploy_exchange, deploy_suite, ONE};
use ledger::types::Error;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{symbol_short, Address, IntoVal};
use test_case::test_case;

#[test]
fn buy_stock_with_busd_test() {
    let (suite, admin, trader) = deploy_exchange(10_000 * ONE);

    let units = suite.rusd.buy_stock(
        &admin,
        &trader,
        &suite.busd.address,
        &suite.stock.address,
        &(1_000 * ONE),
        &(10 * ONE),
    );

    assert_eq!(units, 100 * ONE);
    assert_eq!(suite.stock.balance(&trader), 100 * ONE);
    assert_eq!(suite.busd.balance(&trader), 9_000 * ONE);
    //payment is kept in the RUSD reserve
    assert_eq!(suite.busd.balance(&suite.rusd.address), 1_000 * ONE);

    let env = &suite.env;
    let event = env.events().all().last().unwrap();
    assert_eq!(event.0, suite.rusd.address);
    assert_eq!(
        event.1,
        (symbol_short!("exchange"), symbol_short!("buy_stock"), &trader).into_val(env)
    );
}

#[test_case(1_000 * ONE, 10 * ONE, 100 * ONE ; "whole units")]
#[test_case(1_000 * ONE, 3 * ONE, 333_333_333_333_333_333_333 ; "repeating fraction")]
#[test_case(5 * ONE, 2 * ONE, 2_500_000_000_000_000_000 ; "half unit")]
#[test_case(1_500 * ONE, 1_000 * ONE, 1_500_000_000_000_000_000 ; "price above whole unit scale")]
fn buy_stock_quote_test(payment_amount: i128, price: i128, expected_units: i128) {
    let (suite, admin, trader) = deploy_exchange(10_000 * ONE);

    let units = suite.rusd.buy_stock(
        &admin,
        &trader,
        &suite.busd.address,
        &suite.stock.address,
        &payment_amount,
        &price,
    );

    assert_eq!(units, expected_units);
    assert_eq!(suite.stock.total_supply(), expected_units);
}

#[test]
fn buy_sell_round_trip_test() {
    let (suite, admin, trader) = deploy_exchange(10_000 * ONE);
    let rusd = &suite.rusd;

    //buy 100 stock units for 1000 BUSD
    rusd.buy_stock(
        &admin,
        &trader,
        &suite.busd.address,
        &suite.stock.address,
        &(1_000 * ONE),
        &(10 * ONE),
    );
    //sell half of them at 50 RUSD per unit
    let proceeds = rusd.sell_stock(
        &admin,
        &trader,
        &rusd.address,
        &suite.stock.address,
        &(50 * ONE),
        &(50 * ONE),
    );
    assert_eq!(proceeds, 2_500 * ONE);
    assert_eq!(rusd.balance(&trader), 2_500 * ONE);
    assert_eq!(suite.stock.balance(&trader), 50 * ONE);

    //spend 1000 RUSD on stock at 100 RUSD per unit, RUSD payment is burned
    let units = rusd.buy_stock(
        &admin,
        &trader,
        &rusd.address,
        &suite.stock.address,
        &(1_000 * ONE),
        &(100 * ONE),
    );
    assert_eq!(units, 10 * ONE);
    assert_eq!(rusd.balance(&trader), 1_500 * ONE);
    assert_eq!(rusd.total_supply(), 1_500 * ONE);
    assert_eq!(suite.stock.balance(&trader), 60 * ONE);
    assert_eq!(suite.stock.total_supply(), 60 * ONE);
    //reserve is untouched by RUSD payments
    assert_eq!(suite.busd.balance(&rusd.address), 1_000 * ONE);
}

#[test]
fn sell_rusd_test() {
    let (suite, admin, trader) = deploy_exchange(10_000 * ONE);
    let rusd = &suite.rusd;
    rusd.buy_stock(
        &admin,
        &trader,
        &suite.busd.address,
        &suite.stock.address,
        &(1_000 * ONE),
        &(10 * ONE),
    );
    rusd.sell_stock(
        &admin,
        &trader,
        &rusd.address,
        &suite.stock.address,
        &(10 * ONE),
        &(50 * ONE),
    );

    rusd.sell_rusd(
        &admin,
        &trader,
        &suite.busd.address,
        &(500 * ONE),
        &(500 * ONE),
    );

    assert_eq!(rusd.balance(&trader), 0);
    assert_eq!(rusd.total_supply(), 0);
    assert_eq!(suite.busd.balance(&trader), 9_500 * ONE);
    assert_eq!(suite.busd.balance(&rusd.address), 500 * ONE);
}

#[test]
fn buy_rusd_test() {
    let (suite, admin, trader) = deploy_exchange(10_000 * ONE);
    let rusd = &suite.rusd;

    rusd.buy_rusd(
        &admin,
        &trader,
        &suite.busd.address,
        &(200 * ONE),
        &(200 * ONE),
    );

    assert_eq!(rusd.balance(&trader), 200 * ONE);
    assert_eq!(rusd.total_supply(), 200 * ONE);
    assert_eq!(suite.busd.balance(&trader), 9_800 * ONE);
    assert_eq!(suite.busd.balance(&rusd.address), 200 * ONE);
}

#[test]
fn sell_rusd_insufficient_reserve_test() {
    let (suite, admin, trader) = deploy_exchange(10_000 * ONE);
    let rusd = &suite.rusd;
    //RUSD issued by the ref wallet has no BUSD backing in the reserve
    rusd.mint(&trader, &(500 * ONE));

    let result = rusd.try_sell_rusd(
        &admin,
        &trader,
        &suite.busd.address,
        &(500 * ONE),
        &(500 * ONE),
    );

    assert!(result.is_err());
    //burned RUSD is restored once the reserve transfer fails
    assert_eq!(rusd.balance(&trader), 500 * ONE);
    assert_eq!(rusd.total_supply(), 500 * ONE);
    assert_eq!(suite.busd.balance(&trader), 10_000 * ONE);
    assert_eq!(suite.busd.balance(&rusd.address), 0);
}

#[test]
fn owner_can_operate_test() {
    let (suite, _, trader) = deploy_exchange(10_000 * ONE);

    let units = suite.rusd.buy_stock(
        &suite.owner,
        &trader,
        &suite.busd.address,
        &suite.stock.address,
        &(100 * ONE),
        &(10 * ONE),
    );

    assert_eq!(units, 10 * ONE);
}

#[test]
fn stranger_operator_test() {
    let (suite, _, trader) = deploy_exchange(10_000 * ONE);
    let stranger = Address::generate(&suite.env);

    let result = suite.rusd.try_buy_stock(
        &stranger,
        &trader,
        &suite.busd.address,
        &suite.stock.address,
        &(100 * ONE),
        &(10 * ONE),
    );

    assert_eq!(result, Err(Ok(Error::Unauthorized.into())));
    assert_eq!(suite.busd.balance(&trader), 10_000 * ONE);
}

#[test]
fn removed_admin_operator_test() {
    let (suite, admin, trader) = deploy_exchange(10_000 * ONE);
    suite.rusd.add_or_remove_admin(&admin, &false);

    let result = suite.rusd.try_buy_rusd(
        &admin,
        &trader,
        &suite.busd.address,
        &(100 * ONE),
        &(100 * ONE),
    );

    assert_eq!(result, Err(Ok(Error::Unauthorized.into())));
}

#[test_case(0 ; "zero price")]
#[test_case(-10 ; "negative price")]
fn invalid_price_test(price: i128) {
    let (suite, admin, trader) = deploy_exchange(10_000 * ONE);

    let result = suite.rusd.try_buy_stock(
        &admin,
        &trader,
        &suite.busd.address,
        &suite.stock.address,
        &(100 * ONE),
        &price,
    );

    assert_eq!(result, Err(Ok(Error::InvalidPrice.into())));
}

#[test]
fn dust_payment_test() {
    let (suite, admin, trader) = deploy_exchange(10_000 * ONE);

    let result = suite.rusd.try_buy_stock(
        &admin,
        &trader,
        &suite.busd.address,
        &suite.stock.address,
        &1,
        &(10 * ONE),
    );

    assert_eq!(result, Err(Ok(Error::InvalidAmount.into())));
}

#[test]
fn sell_stock_foreign_token_test() {
    let (suite, admin, trader) = deploy_exchange(10_000 * ONE);

    let result = suite.rusd.try_sell_stock(
        &admin,
        &trader,
        &suite.busd.address,
        &suite.stock.address,
        &ONE,
        &(10 * ONE),
    );

    assert_eq!(result, Err(Ok(Error::InvalidToken.into())));
}

#[test]
fn sell_rusd_for_rusd_test() {
    let (suite, admin, trader) = deploy_exchange(10_000 * ONE);

    let result = suite.rusd.try_sell_rusd(
        &admin,
        &trader,
        &suite.rusd.address,
        &ONE,
        &ONE,
    );

    assert_eq!(result, Err(Ok(Error::InvalidToken.into())));
}

#[test]
fn buy_stock_insufficient_payment_test() {
    let (suite, admin, trader) = deploy_exchange(10 * ONE);

    let result = suite.rusd.try_buy_stock(
        &admin,
        &trader,
        &suite.busd.address,
        &suite.stock.address,
        &(20 * ONE),
        &(10 * ONE),
    );

    assert!(result.is_err());
    //failed trade leaves every ledger untouched
    assert_eq!(suite.busd.balance(&trader), 10 * ONE);
    assert_eq!(suite.stock.balance(&trader), 0);
    assert_eq!(suite.stock.total_supply(), 0);
}

#[test]
fn sell_stock_exceeding_balance_test() {
    let (suite, admin, trader) = deploy_exchange(10_000 * ONE);
    suite.rusd.buy_stock(
        &admin,
        &trader,
        &suite.busd.address,
        &suite.stock.address,
        &(100 * ONE),
        &(10 * ONE),
    );

    let result = suite.rusd.try_sell_stock(
        &admin,
        &trader,
        &suite.rusd.address,
        &suite.stock.address,
        &(11 * ONE),
        &(10 * ONE),
    );

    assert!(result.is_err());
    assert_eq!(suite.stock.balance(&trader), 10 * ONE);
    assert_eq!(suite.rusd.balance(&trader), 0);
}

#[test]
fn unlinked_stock_token_test() {
    let suite = deploy_suite();
    let env = &suite.env;
    let admin = Address::generate(env);
    let trader = Address::generate(env);
    suite.rusd.add_or_remove_admin(&admin, &true);
    suite.rusd.mint(&trader, &(100 * ONE));

    //stock token has no RUSD address assigned yet
    let result = suite.rusd.try_buy_stock(
        &admin,
        &trader,
        &suite.rusd.address,
        &suite.stock.address,
        &(100 * ONE),
        &(10 * ONE),
    );

    assert!(result.is_err());
    assert_eq!(suite.rusd.balance(&trader), 100 * ONE);
}
