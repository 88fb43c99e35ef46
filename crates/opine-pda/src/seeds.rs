use opine_types::Address;

use crate::derive::find_address;
use crate::error::DeriveResult;

/// Seed namespace literals, reproduced verbatim from the on-chain program.
///
/// These byte strings are part of the wire contract: a single changed byte
/// derives a different address and the client silently reads or writes the
/// wrong account.
pub mod namespace {
    pub const CONFIG: &[u8] = b"config";
    pub const PRODUCT: &[u8] = b"product";
    pub const REVIEW: &[u8] = b"review";
    pub const USER: &[u8] = b"user";
    pub const DAILY_CLAIMS: &[u8] = b"daily_claims";
}

/// Address of the singleton config record.
pub fn config_address(program_id: &Address) -> DeriveResult<(Address, u8)> {
    find_address(&[namespace::CONFIG], program_id)
}

/// Address of a product record, keyed by its product id.
pub fn product_address(program_id: &Address, product_id: &str) -> DeriveResult<(Address, u8)> {
    find_address(&[namespace::PRODUCT, product_id.as_bytes()], program_id)
}

/// Address of a review record, keyed by `(product_id, reviewer)`.
pub fn review_address(
    program_id: &Address,
    product_id: &str,
    reviewer: &Address,
) -> DeriveResult<(Address, u8)> {
    find_address(
        &[namespace::REVIEW, product_id.as_bytes(), reviewer.as_bytes()],
        program_id,
    )
}

/// Address of a user record, keyed by the wallet address.
pub fn user_address(program_id: &Address, wallet: &Address) -> DeriveResult<(Address, u8)> {
    find_address(&[namespace::USER, wallet.as_bytes()], program_id)
}

/// Address of a daily-claims record, keyed by `(wallet, date)` where `date`
/// is a `YYYY-MM-DD` string. One record exists per wallet per calendar day.
pub fn daily_claims_address(
    program_id: &Address,
    wallet: &Address,
    date: &str,
) -> DeriveResult<(Address, u8)> {
    find_address(
        &[namespace::DAILY_CLAIMS, wallet.as_bytes(), date.as_bytes()],
        program_id,
    )
}
