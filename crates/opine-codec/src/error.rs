use thiserror::Error;

/// Errors produced when decoding stored records or instruction payloads.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A read would run past the end of the buffer. Covers both a blob
    /// shorter than the smallest valid record and a string length prefix
    /// that overruns the remaining bytes.
    #[error("unexpected end of data at offset {offset}: wanted {wanted} bytes, {remaining} remain")]
    UnexpectedEnd {
        offset: usize,
        wanted: usize,
        remaining: usize,
    },

    #[error("invalid boolean byte {value:#04x} at offset {offset}")]
    InvalidBool { offset: usize, value: u8 },

    #[error("invalid UTF-8 in string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// The record's initialization flag is 0: the account exists but the
    /// program never wrote it. Distinct from an absent account, which the
    /// client reports as `None` without attempting a decode.
    #[error("record is not initialized")]
    Uninitialized,

    #[error("unknown instruction tag {0}")]
    UnknownTag(u8),

    /// Bytes remain after the final argument of an instruction. Record
    /// blobs may carry allocation padding; instruction payloads are exact.
    #[error("{remaining} trailing bytes after instruction at offset {offset}")]
    TrailingBytes { offset: usize, remaining: usize },
}

pub type DecodeResult<T> = Result<T, DecodeError>;
