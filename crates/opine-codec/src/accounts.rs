//! Ordered account-role lists, one function per operation.
//!
//! The program resolves every account positionally, so the order here is part
//! of the wire contract and must be handed to the transport untouched. Each
//! function takes the addresses already derived by the caller; nothing here
//! derives or validates.

use opine_types::{AccountRole, Address};

pub fn initialize(payer: Address, config: Address) -> Vec<AccountRole> {
    vec![
        AccountRole::writable_signer(payer),
        AccountRole::writable(config),
        AccountRole::readonly(Address::SYSTEM_PROGRAM),
    ]
}

pub fn create_product(payer: Address, product: Address, config: Address) -> Vec<AccountRole> {
    vec![
        AccountRole::writable_signer(payer),
        AccountRole::writable(product),
        AccountRole::writable(config),
        AccountRole::readonly(Address::SYSTEM_PROGRAM),
        AccountRole::readonly(Address::CLOCK_SYSVAR),
    ]
}

pub fn update_product(authority: Address, product: Address) -> Vec<AccountRole> {
    vec![
        AccountRole::signer(authority),
        AccountRole::writable(product),
    ]
}

pub fn delete_product(authority: Address, product: Address, config: Address) -> Vec<AccountRole> {
    vec![
        AccountRole::writable_signer(authority),
        AccountRole::writable(product),
        AccountRole::writable(config),
    ]
}

pub fn add_review(
    reviewer: Address,
    review: Address,
    product: Address,
    user: Address,
    config: Address,
) -> Vec<AccountRole> {
    vec![
        AccountRole::writable_signer(reviewer),
        AccountRole::writable(review),
        AccountRole::writable(product),
        AccountRole::writable(user),
        AccountRole::writable(config),
        AccountRole::readonly(Address::SYSTEM_PROGRAM),
        AccountRole::readonly(Address::CLOCK_SYSVAR),
    ]
}

pub fn update_review(reviewer: Address, review: Address, product: Address) -> Vec<AccountRole> {
    vec![
        AccountRole::signer(reviewer),
        AccountRole::writable(review),
        AccountRole::writable(product),
        AccountRole::readonly(Address::CLOCK_SYSVAR),
    ]
}

pub fn daily_claim(
    claimer: Address,
    user: Address,
    daily_claims: Address,
    config: Address,
) -> Vec<AccountRole> {
    vec![
        AccountRole::writable_signer(claimer),
        AccountRole::writable(user),
        AccountRole::writable(daily_claims),
        AccountRole::writable(config),
        AccountRole::readonly(Address::SYSTEM_PROGRAM),
        AccountRole::readonly(Address::CLOCK_SYSVAR),
    ]
}
