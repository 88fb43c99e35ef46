use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use opine_types::{AccountRole, Address};

/// Failure reported by a transport implementation.
///
/// The client treats the message as opaque: no parsing, no retry decisions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Handle returned by a successful submission.
///
/// Opaque to the client; a real transport typically carries a transaction
/// signature here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation(pub String);

impl std::fmt::Display for Confirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Network boundary for the Opine client.
///
/// Implementations own all transaction assembly, signing, retry, and
/// timeout concerns. The client hands over an encoded payload plus the
/// ordered account list and expects either an opaque confirmation or an
/// opaque error. Account bytes come back exactly as stored; the client
/// decides what they mean.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Raw bytes stored at `address`, or `None` when no account exists.
    async fn fetch_account(&self, address: &Address) -> TransportResult<Option<Vec<u8>>>;

    /// Submit an encoded instruction. `roles` must reach the ledger in the
    /// given order with the given flags.
    async fn submit(
        &self,
        payload: &[u8],
        roles: &[AccountRole],
    ) -> TransportResult<Confirmation>;
}
