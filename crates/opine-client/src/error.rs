use thiserror::Error;

use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("decode error: {0}")]
    Decode(#[from] opine_codec::DecodeError),

    #[error("address derivation error: {0}")]
    Derive(#[from] opine_pda::DeriveError),

    /// Opaque failure from the transport collaborator, passed through
    /// unchanged and never retried here.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

pub type ClientResult<T> = Result<T, ClientError>;
