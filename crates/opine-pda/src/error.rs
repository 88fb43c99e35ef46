use thiserror::Error;

/// Errors produced by address derivation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeriveError {
    /// The digest for this bump is a valid curve point and therefore unusable
    /// as a derived address. `find_address` treats this as "try the next
    /// bump"; from `create_address` it surfaces to the caller.
    #[error("derived value for bump {bump} lies on the ed25519 curve")]
    OnCurve { bump: u8 },

    #[error("no off-curve address found in 256 bump attempts")]
    Exhausted,

    #[error("seed too long: {len} bytes (max {max})")]
    SeedTooLong { len: usize, max: usize },

    #[error("too many seeds: {count} (max {max})")]
    TooManySeeds { count: usize, max: usize },
}

pub type DeriveResult<T> = Result<T, DeriveError>;
