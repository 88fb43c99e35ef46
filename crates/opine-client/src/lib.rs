//! High-level client for the Opine review registry.
//!
//! Composes the address deriver and the wire codec behind one API: a call
//! per program operation and a lookup per record kind. This is the main
//! entry point for applications talking to the registry; everything network
//! or key shaped lives behind the [`Transport`] trait.

pub mod client;
pub mod error;
pub mod memory;
pub mod transport;

pub use client::OpineClient;
pub use error::{ClientError, ClientResult};
pub use memory::{MemoryTransport, Submission};
pub use transport::{Confirmation, Transport, TransportError, TransportResult};

// Re-export key types
pub use opine_codec::{Config, DailyClaims, Instruction, Product, Review, User};
pub use opine_types::{AccountRole, Address};
