//! Foundation types for the Opine review registry client.
//!
//! This crate provides the address and account-role primitives shared by
//! every other Opine crate: the codec, the address deriver, and the client
//! façade all speak in these types.
//!
//! # Key Types
//!
//! - [`Address`] — 32-byte ledger address with hex text I/O and the
//!   well-known system program / clock constants
//! - [`AccountRole`] — one entry of the ordered, flagged account list that
//!   accompanies every submission

pub mod account;
pub mod address;
pub mod error;

pub use account::AccountRole;
pub use address::Address;
pub use error::TypeError;
