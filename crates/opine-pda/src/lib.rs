//! Deterministic address derivation for the Opine review registry.
//!
//! Every record the program owns lives at an address computed from the
//! program id and a fixed list of seeds — there is no directory or index to
//! consult. This crate implements the derivation exactly as the runtime
//! defines it (SHA-256 over `seeds ‖ bump ‖ program ‖ marker`, first
//! off-curve digest wins) and encodes the per-record seed conventions.
//!
//! Derivation is pure CPU with a bounded search (at most 256 bump attempts);
//! there is no I/O and no shared state.

pub mod derive;
pub mod error;
pub mod seeds;

pub use derive::{create_address, find_address, DERIVE_MARKER, MAX_SEEDS, MAX_SEED_LEN};
pub use error::{DeriveError, DeriveResult};
pub use seeds::{
    config_address, daily_claims_address, namespace, product_address, review_address,
    user_address,
};
