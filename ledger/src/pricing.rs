use crate::types::Error;
use soroban_sdk::{Env, I256};

// Prices are quoted in payment token base units per one whole stock token (10^stock_decimals base units)

// Calculate a * b / c rounding down, fails on non-positive input or if the quotient exceeds i128
pub fn fixed_mul_div_floor(e: &Env, a: i128, b: i128, c: i128) -> Result<i128, Error> {
    if a <= 0 || b <= 0 || c <= 0 {
        return Err(Error::InvalidAmount);
    }
    //the product of two i128 values always fits into 256 bits
    let product = I256::from_i128(e, a).mul(&I256::from_i128(e, b));
    product
        .div(&I256::from_i128(e, c))
        .to_i128()
        .ok_or(Error::Overflow)
}

// Scale factor for one whole token with given decimals
pub fn unit_scale(decimals: u32) -> Result<i128, Error> {
    10i128.checked_pow(decimals).ok_or(Error::Overflow)
}

fn check_price(price: i128) -> Result<(), Error> {
    if price <= 0 {
        return Err(Error::InvalidPrice);
    }
    Ok(())
}

// Number of stock base units purchasable with the payment amount at given price
pub fn stock_units_for_payment(
    e: &Env,
    payment_amount: i128,
    price: i128,
    stock_decimals: u32,
) -> Result<i128, Error> {
    check_price(price)?;
    let units = fixed_mul_div_floor(e, payment_amount, unit_scale(stock_decimals)?, price)?;
    if units == 0 {
        return Err(Error::InvalidAmount); //payment too small to buy a single base unit
    }
    Ok(units)
}

// Payment token amount returned for selling stock base units at given price
pub fn payment_for_stock_units(
    e: &Env,
    stock_amount: i128,
    price: i128,
    stock_decimals: u32,
) -> Result<i128, Error> {
    check_price(price)?;
    let payment = fixed_mul_div_floor(e, stock_amount, price, unit_scale(stock_decimals)?)?;
    if payment == 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(payment)
}
