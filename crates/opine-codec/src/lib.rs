//! Wire codec for the Opine review registry program.
//!
//! Defines the instruction encoding, per-operation account-role lists, and
//! the typed record decoders for the five stored record kinds. Everything
//! here is pure: no I/O, no clocks, no shared state. The byte layout is an
//! external contract owned by the on-chain program, so encoder and decoder
//! are kept as exact mirrors and covered by golden-byte tests.

pub mod accounts;
pub mod error;
pub mod instruction;
pub mod state;
pub mod wire;

pub use error::{DecodeError, DecodeResult};
pub use instruction::Instruction;
pub use state::{Config, DailyClaims, Product, Review, User};
pub use wire::Cursor;
