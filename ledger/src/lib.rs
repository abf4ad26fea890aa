#![no_std]
pub mod auth;
pub mod balances;
pub mod events;
pub mod interface;
pub mod pricing;
pub mod settings;
pub mod token_base;
pub mod types;
